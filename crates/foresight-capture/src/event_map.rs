//! DOM event names to behavior kinds.

use foresight_core::errors::CaptureError;
use foresight_core::BehaviorKind;

/// Map a DOM event name onto its [`BehaviorKind`]. Names are case-insensitive.
pub fn kind_for_event(event_type: &str) -> Result<BehaviorKind, CaptureError> {
    let kind = match event_type.to_ascii_lowercase().as_str() {
        "click" | "dblclick" | "auxclick" | "contextmenu" => BehaviorKind::Click,
        "mousemove" | "pointermove" => BehaviorKind::Move,
        "scroll" | "wheel" => BehaviorKind::Scroll,
        "keydown" | "keyup" | "keypress" => BehaviorKind::Key,
        "focus" | "focusin" => BehaviorKind::Focus,
        "blur" | "focusout" => BehaviorKind::Blur,
        "touchstart" | "touchmove" | "touchend" => BehaviorKind::Touch,
        "resize" => BehaviorKind::Resize,
        "visibilitychange" => BehaviorKind::Visibility,
        "online" | "offline" => BehaviorKind::Network,
        _ => {
            return Err(CaptureError::UnknownEventType {
                event_type: event_type.to_string(),
            })
        }
    };
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_aliases_share_a_kind() {
        assert_eq!(kind_for_event("mousemove").unwrap(), BehaviorKind::Move);
        assert_eq!(kind_for_event("pointermove").unwrap(), BehaviorKind::Move);
        assert_eq!(kind_for_event("TouchEnd").unwrap(), BehaviorKind::Touch);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!(matches!(
            kind_for_event("drag"),
            Err(CaptureError::UnknownEventType { .. })
        ));
    }
}
