//! Deferred actions (pacing delays) that can be cancelled wholesale.
//!
//! Every entry is stamped with the generation current at scheduling time.
//! `invalidate` bumps the generation, so anything queued earlier is
//! discarded when it comes due instead of firing.

/// Work the engine performs later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Start the next wave after a standard wave was cleared.
    StartNextWave,
}

#[derive(Debug, Clone)]
struct ScheduledEntry {
    due_at_secs: f64,
    generation: u64,
    action: DeferredAction,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    generation: u64,
    entries: Vec<ScheduledEntry>,
}

impl Scheduler {
    /// Queue `action` to run once simulation time reaches `due_at_secs`.
    pub fn schedule(&mut self, action: DeferredAction, due_at_secs: f64) {
        self.entries.push(ScheduledEntry {
            due_at_secs,
            generation: self.generation,
            action,
        });
    }

    /// Make every pending entry inert.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Number of queued entries, stale ones included.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Remove all entries due at `now_secs`, returning the live ones in due order.
    pub fn drain_due(&mut self, now_secs: f64) -> Vec<DeferredAction> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.due_at_secs <= now_secs);
        self.entries = rest;

        due.sort_by(|a, b| a.due_at_secs.total_cmp(&b.due_at_secs));
        due.into_iter()
            .filter(|entry| entry.generation == self.generation)
            .map(|entry| entry.action)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_when_due() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(DeferredAction::StartNextWave, 2.0);

        assert!(scheduler.drain_due(1.99).is_empty());
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(
            scheduler.drain_due(2.0),
            vec![DeferredAction::StartNextWave]
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn invalidate_discards_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(DeferredAction::StartNextWave, 2.0);
        scheduler.invalidate();

        assert!(scheduler.drain_due(10.0).is_empty());
        assert_eq!(scheduler.pending(), 0, "stale entries are dropped, not kept");
    }

    #[test]
    fn entries_after_invalidate_survive() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(DeferredAction::StartNextWave, 1.0);
        scheduler.invalidate();
        scheduler.schedule(DeferredAction::StartNextWave, 3.0);

        assert!(scheduler.drain_due(2.0).is_empty());
        assert_eq!(
            scheduler.drain_due(3.0),
            vec![DeferredAction::StartNextWave]
        );
    }
}
