use thiserror::Error;

use crate::document::errors::DocumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    DataFormat,
}

#[derive(Debug, Error)]
pub enum DupError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Failed to write report: {0}.")]
    Output(#[from] std::io::Error),

    #[error("While loading '{file}': {source}")]
    InFile {
        file: String,
        #[source]
        source: Box<DupError>,
    },
}

impl DupError {
    pub fn in_file(file: &str, source: impl Into<DupError>) -> Self {
        DupError::InFile {
            file: file.to_string(),
            source: Box::new(source.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DupError::Document(e) if e.is_io() => ErrorKind::Io,
            DupError::Document(_) => ErrorKind::DataFormat,
            DupError::Output(_) => ErrorKind::Io,
            DupError::InFile { source, .. } => source.kind(),
        }
    }
}
