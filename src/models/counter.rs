use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

static TOTAL_ACCOUNTS: LazyLock<AccountCounter> = LazyLock::new(AccountCounter::new);

/// Shared tally of how many accounts have been constructed.
///
/// Clones share the same underlying count. The process-wide instance returned by
/// [`AccountCounter::global`] starts at zero the first time it is touched and is the
/// one [`Account::new`](crate::models::Account::new) reports into; separate
/// instances can be created to keep a scope (a test, an embedding service) isolated.
#[derive(Debug, Clone, Default)]
pub struct AccountCounter {
    created: Arc<AtomicUsize>
}

impl AccountCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static AccountCounter {
        &TOTAL_ACCOUNTS
    }

    /// Number of accounts constructed against this counter so far.
    pub fn count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }

    /// Records one construction and returns the new total. Never decrements.
    pub(crate) fn record_creation(&self) -> usize {
        self.created.fetch_add(1, Ordering::Relaxed) + 1
    }
}
