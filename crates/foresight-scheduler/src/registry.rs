//! ActionRegistry: the live set of speculative actions, keyed by resource.
//!
//! Invariant: at most one non-terminal action per resource key. Insertion
//! goes through the DashMap entry API, so the check and the insert happen
//! under the same shard lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use foresight_core::errors::SchedulerError;
use foresight_core::{ActionKind, ActionStatus, SpeculativeAction};
use tracing::debug;

/// Shared registry handle. Clones refer to the same map.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    entries: Arc<DashMap<String, SpeculativeAction>>,
    next_generation: Arc<AtomicU64>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            next_generation: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Insert `action` unless a Queued or InFlight action already holds its
    /// key. A settled action for the key is replaced. Returns the stored
    /// action with its generation assigned.
    pub fn try_insert(&self, mut action: SpeculativeAction) -> Option<SpeculativeAction> {
        match self.entries.entry(action.resource_key.clone()) {
            Entry::Occupied(mut existing) => {
                if !existing.get().is_terminal() {
                    debug!(resource = %action.resource_key, "action already live; skipping");
                    return None;
                }
                action.generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
                existing.insert(action.clone());
                Some(action)
            }
            Entry::Vacant(slot) => {
                action.generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
                slot.insert(action.clone());
                Some(action)
            }
        }
    }

    /// Move the action for `resource_key` to `next`. The generation must
    /// match the live entry and the transition must be legal.
    pub fn transition(
        &self,
        resource_key: &str,
        generation: u64,
        next: ActionStatus,
        now_ms: u64,
    ) -> Result<SpeculativeAction, SchedulerError> {
        let mut entry = self
            .entries
            .get_mut(resource_key)
            .ok_or_else(|| SchedulerError::UnknownAction {
                resource_key: resource_key.to_string(),
            })?;
        if entry.generation != generation {
            return Err(SchedulerError::StaleGeneration {
                resource_key: resource_key.to_string(),
                generation,
            });
        }
        if !entry.status.can_transition_to(next) {
            return Err(SchedulerError::IllegalTransition {
                resource_key: resource_key.to_string(),
                from: entry.status,
                to: next,
            });
        }
        entry.status = next;
        entry.updated_at_ms = now_ms;
        Ok(entry.clone())
    }

    /// Mark the action Expired and remove it from the registry.
    pub fn expire(
        &self,
        resource_key: &str,
        generation: u64,
        now_ms: u64,
    ) -> Result<SpeculativeAction, SchedulerError> {
        let expired = self.transition(resource_key, generation, ActionStatus::Expired, now_ms)?;
        self.entries
            .remove_if(resource_key, |_, action| action.generation == generation);
        Ok(expired)
    }

    /// Expire and remove every non-terminal action older than its lifetime.
    pub fn expire_stale(
        &self,
        now_ms: u64,
        lifetime_ms: impl Fn(&ActionKind) -> u64,
    ) -> Vec<SpeculativeAction> {
        let stale: Vec<(String, u64)> = self
            .entries
            .iter()
            .filter(|entry| {
                !entry.is_terminal() && entry.age_ms(now_ms) >= lifetime_ms(&entry.kind)
            })
            .map(|entry| (entry.key().clone(), entry.generation))
            .collect();

        stale
            .into_iter()
            .filter_map(|(key, generation)| self.expire(&key, generation, now_ms).ok())
            .collect()
    }

    /// Drop settled actions last updated at least `retention_ms` ago.
    pub fn purge_terminal(&self, now_ms: u64, retention_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, action| {
            !(action.is_terminal() && now_ms.saturating_sub(action.updated_at_ms) >= retention_ms)
        });
        before.saturating_sub(self.entries.len())
    }

    pub fn get(&self, resource_key: &str) -> Option<SpeculativeAction> {
        self.entries.get(resource_key).map(|r| r.clone())
    }

    pub fn contains(&self, resource_key: &str) -> bool {
        self.entries.contains_key(resource_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_with_status(&self, status: ActionStatus) -> usize {
        self.entries.iter().filter(|r| r.status == status).count()
    }

    /// Queued plus InFlight.
    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|r| !r.is_terminal()).count()
    }

    /// Cloned snapshot of every entry.
    pub fn snapshot(&self) -> Vec<SpeculativeAction> {
        self.entries.iter().map(|r| r.value().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::{BehaviorCategory, Eagerness};

    fn action(key: &str, now_ms: u64) -> SpeculativeAction {
        SpeculativeAction::queued(
            key,
            BehaviorCategory::Navigation,
            0.9,
            Eagerness::Eager,
            ActionKind::Prerender,
            now_ms,
        )
    }

    #[test]
    fn live_key_is_not_inserted_twice() {
        let registry = ActionRegistry::new();
        assert!(registry.try_insert(action("/a", 0)).is_some());
        assert!(registry.try_insert(action("/a", 1)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn settled_key_is_replaced() {
        let registry = ActionRegistry::new();
        let first = registry.try_insert(action("/a", 0)).unwrap();
        registry
            .transition("/a", first.generation, ActionStatus::InFlight, 1)
            .unwrap();
        registry
            .transition("/a", first.generation, ActionStatus::Completed, 2)
            .unwrap();

        let second = registry.try_insert(action("/a", 3)).unwrap();
        assert!(second.generation > first.generation);
        assert_eq!(registry.get("/a").unwrap().status, ActionStatus::Queued);
    }

    #[test]
    fn illegal_transition_is_rejected() {
        let registry = ActionRegistry::new();
        let stored = registry.try_insert(action("/a", 0)).unwrap();
        let err = registry
            .transition("/a", stored.generation, ActionStatus::Completed, 1)
            .unwrap_err();
        assert!(matches!(err, SchedulerError::IllegalTransition { .. }));
        assert_eq!(registry.get("/a").unwrap().status, ActionStatus::Queued);
    }

    #[test]
    fn stale_generation_cannot_touch_new_action() {
        let registry = ActionRegistry::new();
        let old = registry.try_insert(action("/a", 0)).unwrap();
        registry.expire("/a", old.generation, 10).unwrap();
        let fresh = registry.try_insert(action("/a", 11)).unwrap();

        let err = registry
            .transition("/a", old.generation, ActionStatus::InFlight, 12)
            .unwrap_err();
        assert!(matches!(err, SchedulerError::StaleGeneration { .. }));
        assert_eq!(registry.get("/a").unwrap().generation, fresh.generation);
    }

    #[test]
    fn expire_stale_removes_overdue_live_actions() {
        let registry = ActionRegistry::new();
        registry.try_insert(action("/old", 0)).unwrap();
        registry.try_insert(action("/new", 25_000)).unwrap();

        let expired = registry.expire_stale(30_000, |_| 30_000);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].resource_key, "/old");
        assert_eq!(expired[0].status, ActionStatus::Expired);
        assert!(!registry.contains("/old"));
        assert!(registry.contains("/new"));
    }

    #[test]
    fn purge_drops_old_settled_entries() {
        let registry = ActionRegistry::new();
        let a = registry.try_insert(action("/a", 0)).unwrap();
        registry.transition("/a", a.generation, ActionStatus::InFlight, 0).unwrap();
        registry.transition("/a", a.generation, ActionStatus::Failed, 100).unwrap();
        registry.try_insert(action("/b", 0)).unwrap();

        assert_eq!(registry.purge_terminal(50_000, 60_000), 0);
        assert_eq!(registry.purge_terminal(60_100, 60_000), 1);
        assert!(registry.contains("/b"));
    }
}
