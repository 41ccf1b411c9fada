/// Event capture errors. Never surfaced to the host: the record is dropped.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    #[error("malformed event: {reason}")]
    MalformedEvent { reason: String },

    #[error("unknown event type: {event_type}")]
    UnknownEventType { event_type: String },

    #[error("target detached from document")]
    DetachedTarget,
}
