use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::record::ResultRecord;

/// Append-only sink shared by every request task of a run.
///
/// Clones hand out the same underlying buffer, so a strategy can give one
/// clone to each task it spawns.
#[derive(Debug, Clone, Default)]
pub struct ResultCollector {
    records: Arc<Mutex<Vec<ResultRecord>>>,
}

impl ResultCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, record: ResultRecord) {
        self.lock().push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Takes every record appended so far.
    ///
    /// Only meaningful once all producers of the run have been joined.
    #[must_use]
    pub fn drain(&self) -> Vec<ResultRecord> {
        std::mem::take(&mut *self.lock())
    }

    // A producer that panicked mid-push cannot leave the Vec half-written,
    // so a poisoned lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<ResultRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
