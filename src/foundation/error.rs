pub type UvPathResult<T> = Result<T, UvPathError>;

#[derive(thiserror::Error, Debug)]
pub enum UvPathError {
    #[error("schema error: missing column(s) {missing:?}; columns present: {present:?}")]
    Schema {
        missing: Vec<String>,
        present: Vec<String>,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("io error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UvPathError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn schema(missing: Vec<String>, present: Vec<String>) -> Self {
        Self::Schema { missing, present }
    }
}
