/*!
 * Error types for the jimakufmt application.
 *
 * The formatting core itself never fails for any string input; these
 * types cover the boundary concerns (option validation, file I/O),
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum JimakuError {
    /// Option value outside the externally enforced range
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),
}

impl From<std::io::Error> for JimakuError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
