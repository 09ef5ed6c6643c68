/// Logical width of the treemap drawing surface.
pub const CONTAINER_WIDTH: f64 = 800.0;
/// Logical height of the treemap drawing surface.
pub const CONTAINER_HEIGHT: f64 = 400.0;

/// Area units allocated per electoral vote.
pub const AREA_PER_VOTE: f64 = 8.0;
/// Width/height shaping factor: `width = sqrt(area * CELL_ASPECT)`.
pub const CELL_ASPECT: f64 = 1.5;

/// Left/top inset of the first cell, and right inset used by the wrap test.
pub const LAYOUT_MARGIN: f64 = 10.0;
/// Horizontal gap between neighbouring cells in a row.
pub const COLUMN_GAP: f64 = 5.0;
/// Vertical gap between rows.
pub const ROW_GAP: f64 = 5.0;

/// Margin (percentage points) at which color intensity saturates.
pub const MARGIN_SATURATION: f64 = 50.0;
/// Alpha of a zero-margin cell. Intensity scales alpha from here up to 1.0.
pub const MIN_ALPHA: f64 = 0.3;
/// Alpha added on top of [`MIN_ALPHA`] at full intensity.
pub const ALPHA_SPAN: f64 = 0.7;

/// Base hue for Republican-won states.
pub const REPUBLICAN_RGB: [u8; 3] = [220, 38, 38];
/// Base hue for Democrat-won states.
pub const DEMOCRAT_RGB: [u8; 3] = [37, 99, 235];

/// Cell widths above this get the large label set.
pub const LABEL_LARGE_MIN_WIDTH: f64 = 80.0;
/// Cell widths above this (and up to the large threshold) get the medium label set.
pub const LABEL_MEDIUM_MIN_WIDTH: f64 = 40.0;
