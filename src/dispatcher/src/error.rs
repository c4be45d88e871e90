use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required field is missing or not text in the record's new
    /// state. Treated as a hard failure: the source would only ever
    /// omit these fields on a corrupt or foreign record, and silently
    /// skipping it would hide that from the trigger.
    #[error("event {identity}: field {field} missing or not text in new state")]
    MalformedEvent {
        identity: String,
        field: &'static str,
    },

    /// The notification or workflow-start call was rejected or failed.
    #[error("external call for event {identity} failed")]
    ExternalCallFailure {
        identity: String,
        #[source]
        source: anyhow::Error,
    },
}
