use crate::robots::rule_set::RuleSet;
use std::sync::Arc;
use tokio::sync::watch;

/// Holds the current rule set of one host and swaps it atomically on re-fetch.
///
/// Readers take an `Arc` snapshot and evaluate against it without locking;
/// a replacement never disturbs a snapshot already handed out.
#[derive(Debug, Clone)]
pub struct PolicyStore {
    current_tx: Arc<watch::Sender<Arc<RuleSet>>>,
}

impl PolicyStore {
    pub fn new(rule_set: RuleSet) -> Self {
        let (current_tx, _) = watch::channel(Arc::new(rule_set));
        Self {
            current_tx: Arc::new(current_tx),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleSet> {
        Arc::clone(&self.current_tx.borrow())
    }

    /// Installs `rule_set` and returns the one it replaced.
    pub fn replace(&self, rule_set: RuleSet) -> Arc<RuleSet> {
        self.current_tx.send_replace(Arc::new(rule_set))
    }

    /// Receives every later replacement; the current value counts as seen.
    pub fn subscribe(&self) -> watch::Receiver<Arc<RuleSet>> {
        self.current_tx.subscribe()
    }
}

impl Default for PolicyStore {
    fn default() -> Self {
        Self::new(RuleSet::allow_all())
    }
}
