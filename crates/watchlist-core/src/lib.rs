pub mod dashboard;
pub mod editor;
pub mod error;
pub mod intake;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;
pub mod view;

pub use dashboard::Dashboard;
pub use editor::{derive_status, parse_progress_input, EntryEditor, SaveReceipt};
pub use error::{Error, Result};
pub use intake::{add_candidate, search_catalog};
pub use seed::seed_entries;
pub use session::{FileSlot, MemorySlot, SessionManager, SessionSlot};
pub use stats::WatchListStats;
pub use store::{InMemoryWatchList, WatchListRepository};
pub use view::{ListViewController, derive_view};
