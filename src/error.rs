use thiserror::Error;

/// Errors surfaced by canvas, history, export and configuration operations.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A snapshot taken from a canvas of one size was restored onto another
    #[error("snapshot is {found:?} but the canvas is {expected:?}")]
    SnapshotMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    #[error("cannot allocate a {width}x{height} canvas")]
    CanvasSize { width: u32, height: u32 },
    #[error("no canvas is open")]
    NoCanvas,
    #[error("invalid colour {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("browser error: {0}")]
    Web(String),
}

pub type StudioResult<T> = Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_sizes() {
        let err = StudioError::SnapshotMismatch {
            expected: (800, 600),
            found: (400, 400),
        };
        let msg = err.to_string();
        assert!(msg.contains("(800, 600)"));
        assert!(msg.contains("(400, 400)"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> StudioResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(StudioError::Io(_))));
    }
}
