//! Error types for the library site

use thiserror::Error;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A data resource could not be fetched (missing file, failed read)
    #[error("Resource unavailable: {0}")]
    Unavailable(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data resource body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Poster generation failed (decode, seek or encode)
    #[error("Poster generation failed: {0}")]
    Poster(String),

    /// Poster generation exceeded its watchdog timeout
    #[error("Poster generation timed out")]
    PosterTimeout,

    /// Contact form validation failed
    #[error("{0}")]
    Validation(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Unavailable("data/books.json".to_string());
        assert_eq!(format!("{}", err), "Resource unavailable: data/books.json");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_validation_displays_message_only() {
        let err = SiteError::Validation("Пожалуйста, заполните все поля.".to_string());
        assert_eq!(format!("{}", err), "Пожалуйста, заполните все поля.");
    }
}
