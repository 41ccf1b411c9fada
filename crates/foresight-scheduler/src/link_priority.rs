use foresight_core::models::LinkElement;

const LARGE_WIDTH_PX: f64 = 100.0;
const LARGE_HEIGHT_PX: f64 = 30.0;

/// How likely a link is to be followed, in `[0.5, 1]`.
///
/// Base 0.5; navigation placement +0.3, a large hit area +0.2, a recent
/// hover +0.2, `/about` or `/contact` +0.1, `/products` or `/services` +0.2.
pub fn link_priority(link: &LinkElement) -> f64 {
    let mut priority = 0.5;
    if link.in_nav {
        priority += 0.3;
    }
    if link.rect.width > LARGE_WIDTH_PX && link.rect.height > LARGE_HEIGHT_PX {
        priority += 0.2;
    }
    if link.recently_hovered {
        priority += 0.2;
    }
    if link.href.contains("/about") || link.href.contains("/contact") {
        priority += 0.1;
    }
    if link.href.contains("/products") || link.href.contains("/services") {
        priority += 0.2;
    }
    f64::min(priority, 1.0)
}
