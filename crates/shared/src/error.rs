use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value outside one of the closed sets the dashboard accepts
    /// (strategy keys, filters, sort orders, roles, tabs).
    #[error("invalid {kind}: {value:?}")]
    InvalidArgument { kind: &'static str, value: String },

    #[error("failed to export profile: {0}")]
    Export(String),
}

impl Error {
    pub fn invalid(kind: &'static str, value: &str) -> Self {
        Error::InvalidArgument {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
