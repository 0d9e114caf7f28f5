use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{source_name} catalog is unavailable: {message}")]
    Unavailable { source_name: String, message: String },
}
