use chrono::{NaiveDate, NaiveDateTime};
use foresight_capture::{RawEvent, RawTarget};
use foresight_core::models::{
    BehaviorKind, BehaviorRecord, ElementRect, EnvironmentSnapshot, LinkElement, PageSnapshot,
    TargetDescriptor, Viewport,
};

pub const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
    scroll_x: 0.0,
    scroll_y: 0.0,
};

/// Tuesday 2024-03-12 14:30 local time.
pub fn local_afternoon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 12)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap_or_default()
}

pub fn environment(now_ms: u64) -> EnvironmentSnapshot {
    EnvironmentSnapshot::at(now_ms, local_afternoon())
}

pub fn record(kind: BehaviorKind, timestamp_ms: u64) -> BehaviorRecord {
    BehaviorRecord::builder(kind, timestamp_ms)
        .target(TargetDescriptor::new("div"))
        .viewport(VIEWPORT)
        .build()
}

pub fn click_record(tag: &str, timestamp_ms: u64, x: f64, y: f64) -> BehaviorRecord {
    BehaviorRecord::builder(BehaviorKind::Click, timestamp_ms)
        .target(TargetDescriptor::new(tag))
        .coordinates(x, y)
        .viewport(VIEWPORT)
        .build()
}

/// `count` scroll records `spacing_ms` apart, scrolling 100px each.
pub fn scroll_records(count: usize, spacing_ms: u64) -> Vec<BehaviorRecord> {
    (0..count)
        .map(|i| {
            BehaviorRecord::builder(BehaviorKind::Scroll, i as u64 * spacing_ms)
                .target(TargetDescriptor::document())
                .viewport(VIEWPORT)
                .scroll_y(i as f64 * 100.0)
                .build()
        })
        .collect()
}

pub fn raw_click(timestamp_ms: u64, tag: &str) -> RawEvent {
    RawEvent::new("click", timestamp_ms)
        .on(RawTarget::element(tag))
        .at(100.0, 100.0)
        .with_viewport(VIEWPORT)
}

pub fn raw_move(timestamp_ms: u64, x: f64, y: f64) -> RawEvent {
    RawEvent::new("mousemove", timestamp_ms)
        .on(RawTarget::element("main"))
        .at(x, y)
        .with_viewport(VIEWPORT)
}

/// An on-screen same-origin link inside the main navigation.
pub fn nav_link(href: &str) -> LinkElement {
    LinkElement {
        href: href.to_string(),
        same_origin: true,
        in_nav: true,
        recently_hovered: false,
        rect: ElementRect::new(20.0, 10.0, 80.0, 24.0),
    }
}

pub fn page_with_links(hrefs: &[&str]) -> PageSnapshot {
    PageSnapshot {
        viewport_width: VIEWPORT.width,
        viewport_height: VIEWPORT.height,
        links: hrefs.iter().map(|href| nav_link(href)).collect(),
        ..PageSnapshot::default()
    }
}
