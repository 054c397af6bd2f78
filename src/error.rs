use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Board size, seed mode or export parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rule string is not of the form `B<digits>/S<digits>`.
    #[error("invalid rule {rule:?}: {reason}")]
    InvalidRule { rule: String, reason: &'static str },

    /// RLE token stream violates the grammar.
    #[error("malformed RLE at byte {position}: {reason}")]
    MalformedRle { position: usize, reason: &'static str },

    /// A pattern placed at `(row, col)` would extend past the board.
    #[error(
        "pattern of {height}x{width} cells at ({row}, {col}) does not fit on a {size}x{size} board"
    )]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        size: usize,
    },

    #[error("failed to write image: {0}")]
    Export(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
