pub mod candidate;
pub mod entry;
pub mod session;
pub mod status;
pub mod view;

pub use candidate::Candidate;
pub use entry::{EntryDraft, EntryUpdate, WatchListEntry, MAX_RATING};
pub use session::Session;
pub use status::{ParseStatusError, WatchStatus};
pub use view::{SortKey, StatusFilter};
