use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not logged in")]
    NotAuthenticated,

    // anyhow::Error is not a std error, so it is carried without #[source]
    #[error("Session storage error: {0:#}")]
    Storage(anyhow::Error),

    #[error("Session record is not valid JSON: {0}")]
    SessionFormat(#[from] serde_json::Error),

    #[error("Catalog search failed: {0}")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotAuthenticated => 2,
            Error::Storage(_) | Error::SessionFormat(_) | Error::Catalog(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
