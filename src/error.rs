use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid graph data: {0}")]
    Schema(String),

    #[error("edge {edge} references unknown vertex {vertex}")]
    Reference { edge: i64, vertex: i64 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to serialize page data: {0}")]
    Render(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Splits serde_json failures into syntax problems and shape problems.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => Self::Parse(err),
            Category::Data => Self::Schema(err.to_string()),
        }
    }
}
