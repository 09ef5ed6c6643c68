//! Formatting helpers for labels, tooltips, and the explanatory panels.

/// Formats a margin of victory as "X.X%".
pub fn fmt_margin(margin: f64) -> String {
    format!("{:.1}%", margin)
}

/// Formats a share (0.0..1.0) for display as "XX.X%".
pub fn fmt_share(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Formats an integer with comma thousands separators: 97813 -> "97,813".
pub fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a land area in square miles: "97,813 sq mi".
pub fn fmt_area(sq_mi: u32) -> String {
    format!("{} sq mi", fmt_thousands(sq_mi as u64))
}

/// Formats a population compactly: 39538223 -> "39.5M".
pub fn fmt_population(pop: u64) -> String {
    if pop >= 1_000_000 {
        format!("{:.1}M", pop as f64 / 1_000_000.0)
    } else if pop >= 1_000 {
        format!("{:.1}K", pop as f64 / 1_000.0)
    } else {
        pop.to_string()
    }
}

/// "1 vote" / "3 votes".
pub fn fmt_votes(votes: u32) -> String {
    if votes == 1 {
        "1 vote".to_string()
    } else {
        format!("{votes} votes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_margin_one_decimal() {
        assert_eq!(fmt_margin(0.7), "0.7%");
        assert_eq!(fmt_margin(9.0), "9.0%");
        assert_eq!(fmt_margin(46.3), "46.3%");
    }

    #[test]
    fn test_fmt_share() {
        assert_eq!(fmt_share(0.5), "50.0%");
        assert_eq!(fmt_share(0.0), "0.0%");
    }

    #[test]
    fn test_fmt_thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(2_489), "2,489");
        assert_eq!(fmt_thousands(97_813), "97,813");
        assert_eq!(fmt_thousands(163_696), "163,696");
        assert_eq!(fmt_thousands(39_538_223), "39,538,223");
    }

    #[test]
    fn test_fmt_area() {
        assert_eq!(fmt_area(97_813), "97,813 sq mi");
    }

    #[test]
    fn test_fmt_population() {
        assert_eq!(fmt_population(576_851), "576.9K");
        assert_eq!(fmt_population(39_538_223), "39.5M");
        assert_eq!(fmt_population(42), "42");
    }

    #[test]
    fn test_fmt_votes_pluralizes() {
        assert_eq!(fmt_votes(1), "1 vote");
        assert_eq!(fmt_votes(3), "3 votes");
    }
}
