//! Signals derived from the behavior window. All values are raw (unscaled).

use std::collections::{BTreeMap, HashSet};

use foresight_core::{BehaviorKind, BehaviorRecord};

/// Mean scroll speed in px/s over consecutive scroll records.
/// Pairs with no elapsed time are skipped but still count toward the mean.
pub fn scroll_velocity(records: &[BehaviorRecord]) -> f64 {
    let scrolls: Vec<&BehaviorRecord> = records
        .iter()
        .filter(|r| r.kind() == BehaviorKind::Scroll)
        .collect();
    if scrolls.len() < 2 {
        return 0.0;
    }

    let total: f64 = scrolls
        .windows(2)
        .filter_map(|pair| {
            let dt = pair[1].timestamp_ms().checked_sub(pair[0].timestamp_ms())?;
            if dt == 0 {
                return None;
            }
            let dy = (pair[1].viewport().scroll_y - pair[0].viewport().scroll_y).abs();
            Some(dy / dt as f64 * 1000.0)
        })
        .sum();
    total / (scrolls.len() - 1) as f64
}

/// Clicks per second within the trailing `budget_ms` before `now_ms`.
pub fn click_frequency(records: &[BehaviorRecord], now_ms: u64, budget_ms: u64) -> f64 {
    if budget_ms == 0 {
        return 0.0;
    }
    let clicks = records
        .iter()
        .filter(|r| r.kind() == BehaviorKind::Click)
        .filter(|r| now_ms.saturating_sub(r.timestamp_ms()) <= budget_ms)
        .count();
    clicks as f64 / (budget_ms as f64 / 1000.0)
}

/// Pointer path length divided by the time it spanned, px/s.
pub fn pointer_movement(records: &[BehaviorRecord]) -> f64 {
    let moves: Vec<&BehaviorRecord> = records
        .iter()
        .filter(|r| r.kind() == BehaviorKind::Move && r.coordinates().is_some())
        .collect();
    if moves.len() < 2 {
        return 0.0;
    }

    let distance: f64 = moves
        .windows(2)
        .filter_map(|pair| Some(pair[0].coordinates()?.distance_to(&pair[1].coordinates()?)))
        .sum();
    let first = moves[0].timestamp_ms();
    let last = moves[moves.len() - 1].timestamp_ms();
    match last.checked_sub(first) {
        Some(span) if span > 0 => distance / span as f64 * 1000.0,
        _ => 0.0,
    }
}

/// Average focus-to-blur time per element, in milliseconds.
pub fn dwell_time(records: &[BehaviorRecord]) -> f64 {
    let mut per_element: BTreeMap<String, u64> = BTreeMap::new();
    let mut open: Option<(String, u64)> = None;

    for record in records {
        match record.kind() {
            BehaviorKind::Focus => {
                open = Some((record.target().element_key(), record.timestamp_ms()));
            }
            BehaviorKind::Blur => {
                if let Some((key, started)) = open.take() {
                    if key == record.target().element_key() {
                        let dwell = record.timestamp_ms().saturating_sub(started);
                        *per_element.entry(key).or_default() += dwell;
                    }
                }
            }
            _ => {}
        }
    }

    if per_element.is_empty() {
        return 0.0;
    }
    per_element.values().sum::<u64>() as f64 / per_element.len() as f64
}

/// Distinct kinds plus distinct target tags.
pub fn interaction_diversity(records: &[BehaviorRecord]) -> f64 {
    let kinds: HashSet<BehaviorKind> = records.iter().map(|r| r.kind()).collect();
    let tags: HashSet<&str> = records.iter().map(|r| r.target().tag.as_str()).collect();
    (kinds.len() + tags.len()) as f64
}

fn engagement_weight(kind: BehaviorKind) -> f64 {
    match kind {
        BehaviorKind::Click => 1.0,
        BehaviorKind::Touch => 0.9,
        BehaviorKind::Key => 0.8,
        BehaviorKind::Focus => 0.6,
        BehaviorKind::Scroll => 0.3,
        BehaviorKind::Move => 0.1,
        _ => 0.0,
    }
}

/// Mean engagement weight per record.
pub fn engagement(records: &[BehaviorRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| engagement_weight(r.kind())).sum::<f64>() / records.len() as f64
}

fn path_segments(href: &str) -> Vec<&str> {
    href.split('/').filter(|part| !part.is_empty()).collect()
}

/// Mean path-segment overlap between consecutive anchor clicks.
pub fn navigation_pattern(records: &[BehaviorRecord]) -> f64 {
    let paths: Vec<Vec<&str>> = records
        .iter()
        .filter(|r| r.kind() == BehaviorKind::Click && r.target().tag == "A")
        .map(|r| path_segments(r.target().data.get("href").map(String::as_str).unwrap_or("")))
        .collect();
    if paths.len() < 2 {
        return 0.0;
    }

    let similarity: f64 = paths
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let longest = prev.len().max(curr.len());
            if longest == 0 {
                return 0.0;
            }
            let common = prev.iter().filter(|part| curr.contains(part)).count();
            common as f64 / longest as f64
        })
        .sum();
    similarity / (paths.len() - 1) as f64
}

/// Milliseconds the page was visible, from visibility records. Without any,
/// the time since the first record.
pub fn attention_span(records: &[BehaviorRecord], now_ms: u64, page_hidden: bool) -> f64 {
    let mut saw_visibility = false;
    let mut visible_total: u64 = 0;
    let mut visible_since: Option<u64> = None;

    for record in records {
        let Some(hidden) = record.hidden() else {
            continue;
        };
        saw_visibility = true;
        if !hidden {
            visible_since = Some(record.timestamp_ms());
        } else if let Some(since) = visible_since.take() {
            visible_total += record.timestamp_ms().saturating_sub(since);
        }
    }

    if !saw_visibility {
        return records
            .first()
            .map(|first| now_ms.saturating_sub(first.timestamp_ms()) as f64)
            .unwrap_or(0.0);
    }
    if !page_hidden {
        if let Some(since) = visible_since {
            visible_total += now_ms.saturating_sub(since);
        }
    }
    visible_total as f64
}

/// Share of touch interactions among pointer interactions; 0.5 when there are none.
pub fn device_usage(records: &[BehaviorRecord]) -> f64 {
    let touch = records
        .iter()
        .filter(|r| r.kind() == BehaviorKind::Touch || r.device().touch_points > 0)
        .count();
    let mouse = records
        .iter()
        .filter(|r| r.kind() != BehaviorKind::Touch && r.device().touch_points == 0)
        .filter(|r| r.coordinates().is_some())
        .count();
    if touch + mouse == 0 {
        return 0.5;
    }
    touch as f64 / (touch + mouse) as f64
}
