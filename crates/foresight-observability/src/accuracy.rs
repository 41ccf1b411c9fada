//! Scores a cycle's predictions against the interactions that followed it.

use foresight_core::{BehaviorRecord, Prediction};

#[derive(Debug, Clone)]
struct PendingCycle {
    predictions: Vec<Prediction>,
    at_ms: u64,
}

/// Holds the last cycle's predictions until enough later records exist to
/// score them.
#[derive(Debug, Clone)]
pub struct AccuracyEvaluator {
    lookahead: usize,
    pending: Option<PendingCycle>,
}

impl AccuracyEvaluator {
    pub fn new(lookahead: usize) -> Self {
        Self {
            lookahead: lookahead.max(1),
            pending: None,
        }
    }

    /// Score the pending cycle against `window` (oldest first) and remember
    /// `predictions` made at `at_ms` for the next call. Returns the sample
    /// for the previous cycle, if it could be scored.
    pub fn begin_cycle(
        &mut self,
        predictions: &[Prediction],
        at_ms: u64,
        window: &[BehaviorRecord],
    ) -> Option<f64> {
        let sample = self.settle(window);
        self.pending = if predictions.is_empty() {
            None
        } else {
            Some(PendingCycle {
                predictions: predictions.to_vec(),
                at_ms,
            })
        };
        sample
    }

    /// Score the pending cycle if any record arrived after it. The pending
    /// cycle is kept when nothing has arrived yet.
    pub fn settle(&mut self, window: &[BehaviorRecord]) -> Option<f64> {
        let pending = self.pending.as_ref()?;
        let after: Vec<&BehaviorRecord> = window
            .iter()
            .filter(|r| r.timestamp_ms() > pending.at_ms)
            .take(self.lookahead)
            .collect();
        if after.is_empty() {
            return None;
        }
        let sample = score(&pending.predictions, after.into_iter());
        self.pending = None;
        sample
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }
}

/// Fraction of `predictions` whose expected interaction kinds appear among
/// `observed`. `None` for an empty prediction list.
pub fn score<'a>(
    predictions: &[Prediction],
    observed: impl Iterator<Item = &'a BehaviorRecord> + Clone,
) -> Option<f64> {
    if predictions.is_empty() {
        return None;
    }
    let matched = predictions
        .iter()
        .filter(|p| {
            let expected = p.category.expected_kinds();
            observed.clone().any(|r| expected.contains(&r.kind()))
        })
        .count();
    Some(matched as f64 / predictions.len() as f64)
}
