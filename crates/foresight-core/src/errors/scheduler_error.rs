use crate::models::ActionStatus;

/// Action registry errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    #[error("no action registered for {resource_key}")]
    UnknownAction { resource_key: String },

    #[error("illegal transition for {resource_key}: {from:?} -> {to:?}")]
    IllegalTransition {
        resource_key: String,
        from: ActionStatus,
        to: ActionStatus,
    },

    #[error("action {resource_key} generation {generation} was superseded")]
    StaleGeneration { resource_key: String, generation: u64 },
}
