/// Resource prefetch errors. Recorded as a terminal action status, never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrefetchError {
    #[error("transient I/O failure for {resource}: {reason}")]
    Transient { resource: String, reason: String },

    #[error("unsupported platform capability: {capability}")]
    Unsupported { capability: String },

    #[error("{resource} exceeded its {budget_ms}ms lifetime")]
    Timeout { resource: String, budget_ms: u64 },
}
