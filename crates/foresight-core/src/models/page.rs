//! Read-only view of the page structure that candidate resolution consumes.
//!
//! The DOM itself stays outside the pipeline; hosts fill these snapshots.

use serde::{Deserialize, Serialize};

/// Element bounding box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Intersects the viewport.
    pub fn is_visible(&self, viewport_width: f64, viewport_height: f64) -> bool {
        self.is_near_viewport(viewport_width, viewport_height, 0.0)
    }

    /// Intersects the viewport grown by `margin` on every side.
    pub fn is_near_viewport(&self, viewport_width: f64, viewport_height: f64, margin: f64) -> bool {
        self.top < viewport_height + margin
            && self.bottom() > -margin
            && self.left < viewport_width + margin
            && self.right() > -margin
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkElement {
    pub href: String,
    pub same_origin: bool,
    /// Inside `nav` / main menu.
    pub in_nav: bool,
    pub recently_hovered: bool,
    pub rect: ElementRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// A lazily loaded media element (`data-src`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaElement {
    pub src: String,
    pub kind: MediaKind,
    pub rect: ElementRect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    /// `data-async` is set.
    pub is_async: bool,
    /// `data-validation` is set.
    pub has_validation: bool,
    pub rect: ElementRect,
}

/// An item card that links to a detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailItem {
    pub detail_url: Option<String>,
    pub rect: ElementRect,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub links: Vec<LinkElement>,
    pub media: Vec<MediaElement>,
    pub forms: Vec<FormElement>,
    pub detail_items: Vec<DetailItem>,
    pub has_search_elements: bool,
}

/// An element that just crossed the visibility threshold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleElement {
    pub tag: String,
    /// `data-component`.
    pub component: Option<String>,
    /// `data-api`.
    pub api: Option<String>,
    pub links: Vec<LinkElement>,
    pub intersection_ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_viewport_honors_margin() {
        let below_fold = ElementRect::new(0.0, 900.0, 100.0, 100.0);
        assert!(!below_fold.is_visible(1024.0, 768.0));
        assert!(below_fold.is_near_viewport(1024.0, 768.0, 200.0));
        assert!(!below_fold.is_near_viewport(1024.0, 768.0, 100.0));
    }
}
