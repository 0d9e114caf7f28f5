pub mod coordinator;
pub mod error;
pub mod mock;
pub mod traits;

pub use coordinator::{SearchCoordinator, SearchOutcome};
pub use error::CatalogError;
pub use mock::{MockCatalog, default_candidates};
pub use traits::CatalogSource;
