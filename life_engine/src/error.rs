/// Errors surfaced by grid construction and cell access.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {height}x{width}: both must be positive")]
    InvalidDimensions { height: usize, width: usize },

    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        height: usize,
        width: usize,
    },
}
