// IconGen - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps the path or size
// it failed on and the underlying cause for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all IconGen operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IconGenError {
    /// Drawing or encoding an icon failed.
    Render(RenderError),

    /// Creating the output directory or writing an icon file failed.
    Output(OutputError),
}

impl fmt::Display for IconGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for IconGenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while building the canvas or encoding it as PNG.
#[derive(Debug)]
pub enum RenderError {
    /// A zero-sized icon was requested.
    ZeroSize,

    /// The requested side length exceeds the allocation guard.
    TooLarge { size: u32, max: u32 },

    /// The PNG encoder rejected the canvas.
    Encode {
        size: u32,
        source: image::ImageError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "Icon size must be at least 1 pixel"),
            Self::TooLarge { size, max } => {
                write!(f, "Icon size {size}px exceeds maximum of {max}px")
            }
            Self::Encode { size, source } => {
                write!(f, "Failed to encode {size}x{size} icon as PNG: {source}")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RenderError> for IconGenError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors related to the output directory and icon files.
#[derive(Debug)]
pub enum OutputError {
    /// The output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The output path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// An icon file could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "Cannot create output directory '{}': {source}",
                path.display()
            ),
            Self::NotADirectory { path } => write!(
                f,
                "Output path '{}' exists and is not a directory",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "Cannot write icon '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::NotADirectory { .. } => None,
        }
    }
}

impl From<OutputError> for IconGenError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_output_error_keeps_source_chain() {
        let err: IconGenError = OutputError::Write {
            path: PathBuf::from("icons/icon16.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Output error: Cannot write icon"), "{msg}");
        assert!(msg.contains("icon16.png"), "{msg}");

        let inner = err.source().expect("top-level error should expose a source");
        let io_err = inner.source().expect("write error should expose the io cause");
        assert_eq!(io_err.to_string(), "denied");
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::TooLarge { size: 9000, max: 8192 };
        assert_eq!(err.to_string(), "Icon size 9000px exceeds maximum of 8192px");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_not_a_directory_has_no_source() {
        let err = OutputError::NotADirectory {
            path: PathBuf::from("icons"),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("'icons'"));
    }
}
