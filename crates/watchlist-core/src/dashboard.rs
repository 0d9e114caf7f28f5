use watchlist_models::{Candidate, EntryDraft, EntryUpdate, Session, WatchListEntry, WatchStatus};
use crate::editor::{EntryEditor, SaveReceipt};
use crate::error::{Error, Result};
use crate::intake;
use crate::session::{SessionManager, SessionSlot};
use crate::stats::WatchListStats;
use crate::store::{InMemoryWatchList, WatchListRepository};
use crate::view::ListViewController;
use tracing::debug;

/// Session-gated surface handed to the rendering layer
///
/// Reads return derived sequences; writes are the `on_*` event callbacks.
/// Every list operation fails with [`Error::NotAuthenticated`] while nobody
/// is logged in. The list and view live only as long as one login: logout
/// rebuilds both from `fresh_list` and the initial view.
pub struct Dashboard<S: SessionSlot, R: WatchListRepository = InMemoryWatchList> {
    session: SessionManager<S>,
    fresh_list: Box<dyn Fn() -> R + Send + Sync>,
    list: R,
    initial_view: ListViewController,
    view: ListViewController,
}

impl<S: SessionSlot, R: WatchListRepository> Dashboard<S, R> {
    pub fn new(
        session: SessionManager<S>,
        fresh_list: impl Fn() -> R + Send + Sync + 'static,
        view: ListViewController,
    ) -> Self {
        let list = fresh_list();
        Self {
            session,
            fresh_list: Box::new(fresh_list),
            list,
            initial_view: view.clone(),
            view,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    pub fn view(&self) -> &ListViewController {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ListViewController {
        &mut self.view
    }

    pub fn on_login(&mut self, email: &str, password: &str) -> Result<bool> {
        self.session.login(email, password)
    }

    pub fn on_register(&mut self, username: &str, email: &str, password: &str) -> Result<bool> {
        self.session.register(username, email, password)
    }

    pub fn on_logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.list = (self.fresh_list)();
        self.view = self.initial_view.clone();
        debug!(operation = "logout", "Reset watch list and view");
        Ok(())
    }

    pub fn require_session(&self) -> Result<&Session> {
        self.session.current().ok_or(Error::NotAuthenticated)
    }

    pub fn visible_entries(&self) -> Result<Vec<WatchListEntry>> {
        self.require_session()?;
        Ok(self.view.visible(&self.list))
    }

    pub fn on_add(&mut self, draft: EntryDraft) -> Result<WatchListEntry> {
        self.require_session()?;
        Ok(self.list.add(draft))
    }

    pub fn add_candidate(&mut self, candidate: &Candidate, default_status: WatchStatus) -> Result<WatchListEntry> {
        self.require_session()?;
        Ok(intake::add_candidate(&mut self.list, candidate, default_status))
    }

    pub fn on_update(&mut self, id: &str, update: &EntryUpdate) -> Result<bool> {
        self.require_session()?;
        Ok(self.list.update(id, update))
    }

    pub fn on_remove(&mut self, id: &str) -> Result<bool> {
        self.require_session()?;
        Ok(self.list.remove(id))
    }

    pub fn open_entry(&self, id: &str) -> Result<Option<EntryEditor>> {
        self.require_session()?;
        Ok(self.view.open(&self.list, id))
    }

    pub fn commit_editor(&mut self, editor: EntryEditor) -> Result<SaveReceipt> {
        self.require_session()?;
        Ok(editor.save(&mut self.list))
    }

    /// Statistics over the whole list, ignoring the current filters
    pub fn stats(&self) -> Result<WatchListStats> {
        self.require_session()?;
        Ok(WatchListStats::from_entries(&self.list.list()))
    }
}
