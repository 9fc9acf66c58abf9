use std::fmt;

use crate::error::Result;

use super::ModelStore;

/// Outcome of committing a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitStatus {
    /// All staged creations were kept.
    Committed,
    /// The whole transaction was rolled back, with the reason.
    RolledBack(String),
}

impl CommitStatus {
    /// Returns `true` when the transaction committed.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

impl fmt::Display for CommitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed => write!(f, "committed"),
            Self::RolledBack(reason) => write!(f, "rolled back ({reason})"),
        }
    }
}

/// A unit of model mutation with per-item isolation.
///
/// Wall creations inside a [`sub_scope`](Self::sub_scope) are rolled back
/// together when the scope fails, without affecting sibling scopes. The
/// transaction as a whole is rolled back if it is dropped uncommitted, or
/// if the store turns out to be read-only at commit time (mutation guards
/// are enforced optimistically, at the commit boundary).
#[derive(Debug)]
pub struct Transaction<'a> {
    store: &'a mut ModelStore,
    start_mark: usize,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(super) fn new(store: &'a mut ModelStore) -> Self {
        let start_mark = store.creation_mark();
        Self {
            store,
            start_mark,
            finished: false,
        }
    }

    /// Runs `f` in an isolated sub-scope.
    ///
    /// On error, every wall created inside the scope is removed; creations
    /// from earlier scopes are untouched.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error after rolling the scope back.
    pub fn sub_scope<T>(&mut self, f: impl FnOnce(&mut ModelStore) -> Result<T>) -> Result<T> {
        let mark = self.store.creation_mark();
        match f(self.store) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.store.rollback_creations(mark);
                Err(err)
            }
        }
    }

    /// Commits the transaction, keeping all surviving creations.
    ///
    /// A read-only store rolls everything back instead and reports
    /// [`CommitStatus::RolledBack`].
    #[must_use]
    pub fn commit(mut self) -> CommitStatus {
        self.finished = true;
        if self.store.is_read_only() {
            self.store.rollback_creations(self.start_mark);
            return CommitStatus::RolledBack("model is read-only".into());
        }
        CommitStatus::Committed
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.store.rollback_creations(self.start_mark);
        }
    }
}
