// ---------------------------------------------------------------------------
// DatasetError: typed errors for loading external election data
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading election data from an external source.
///
/// The built-in dataset is valid by construction and never produces one of
/// these. An empty dataset is not an error; views render a placeholder.
#[derive(Debug)]
pub enum DatasetError {
    /// Malformed JSON or a record with missing/mistyped fields.
    Parse(serde_json::Error),
    /// A state was given zero or negative electoral votes.
    InvalidWeight { state: String, votes: i64 },
    /// A winner outside the closed `{Republican, Democrat}` set.
    UnknownCategory { state: String, winner: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Parse(e) => write!(f, "Parse error: {e}"),
            DatasetError::InvalidWeight { state, votes } => write!(
                f,
                "Invalid weight: {state} has {votes} electoral votes (must be > 0)"
            ),
            DatasetError::UnknownCategory { state, winner } => {
                write!(f, "Unknown category: {state} has winner \"{winner}\"")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse(e)
    }
}
