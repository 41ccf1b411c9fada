//! Distribution validation, normalization and top-K ranking.

use std::cmp::Ordering;

use foresight_core::constants::CATEGORY_COUNT;
use foresight_core::errors::ClassifierError;
use foresight_core::models::BehaviorCategory;
use foresight_core::Prediction;

/// Numerically stable softmax.
pub fn softmax(logits: &[f64; CATEGORY_COUNT]) -> [f64; CATEGORY_COUNT] {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out = [0.0; CATEGORY_COUNT];
    let mut sum = 0.0;
    for (slot, logit) in out.iter_mut().zip(logits) {
        *slot = (logit - max).exp();
        sum += *slot;
    }
    for slot in &mut out {
        *slot /= sum;
    }
    out
}

/// Reject non-finite or negative entries and rescale to sum to 1.
pub fn normalize(raw: [f64; CATEGORY_COUNT]) -> Result<[f64; CATEGORY_COUNT], ClassifierError> {
    if let Some(bad) = raw.iter().find(|p| !p.is_finite() || **p < 0.0) {
        return Err(ClassifierError::InvalidDistribution {
            reason: format!("entry {bad} is not a finite non-negative number"),
        });
    }
    let sum: f64 = raw.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(ClassifierError::InvalidDistribution {
            reason: format!("distribution sums to {sum}"),
        });
    }
    Ok(raw.map(|p| p / sum))
}

/// The `k` most probable categories, descending, ties by category index.
pub fn top_k(distribution: &[f64; CATEGORY_COUNT], k: usize) -> Vec<Prediction> {
    let mut ranked: Vec<Prediction> = BehaviorCategory::ALL
        .iter()
        .map(|category| Prediction::new(*category, distribution[category.index()]))
        .collect();
    ranked.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.index().cmp(&b.category.index()))
    });
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_by_category_index() {
        let ranked = top_k(&[0.125; CATEGORY_COUNT], 3);
        let categories: Vec<_> = ranked.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![
                BehaviorCategory::Navigation,
                BehaviorCategory::Search,
                BehaviorCategory::Details
            ]
        );
    }

    #[test]
    fn ranking_is_descending() {
        let dist = [0.05, 0.1, 0.05, 0.3, 0.05, 0.2, 0.05, 0.2];
        let ranked = top_k(&dist, 3);
        assert_eq!(ranked[0].category, BehaviorCategory::Contact);
        assert_eq!(ranked[1].category, BehaviorCategory::Form);
        assert_eq!(ranked[2].category, BehaviorCategory::Exit);
    }

    #[test]
    fn normalize_rescales() {
        let normalized = normalize([2.0; CATEGORY_COUNT]).unwrap();
        assert!((normalized.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_bad_entries() {
        let mut raw = [0.1; CATEGORY_COUNT];
        raw[4] = f64::NAN;
        assert!(normalize(raw).is_err());
        raw[4] = -0.1;
        assert!(normalize(raw).is_err());
        assert!(normalize([0.0; CATEGORY_COUNT]).is_err());
    }

    #[test]
    fn softmax_of_equal_logits_is_uniform() {
        let out = softmax(&[3.0; CATEGORY_COUNT]);
        assert!(out.iter().all(|p| (p - 0.125).abs() < 1e-12));
    }
}
