use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("File error: {0}.")]
    FileError(#[source] std::io::Error),

    #[error("Unsupported file format: {0}.")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} document: {message}")]
    ParseError { format: String, message: String },

    #[error("Country '{country}', university #{position}: missing field `{field}`.")]
    MissingField {
        country: String,
        position: usize,
        field: &'static str,
    },

    #[error("Country '{country}', university #{position}: field `{field}` is null.")]
    NullField {
        country: String,
        position: usize,
        field: &'static str,
    },
}

impl DocumentError {
    /// True when the input could not be read at all, as opposed to being read
    /// and found malformed.
    pub fn is_io(&self) -> bool {
        matches!(self, DocumentError::FileError(_))
    }
}
