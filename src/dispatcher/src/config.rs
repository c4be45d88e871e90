use anyhow::Context;

/// Fixed identifiers of the two external destinations, injected into
/// the dispatcher at construction time.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub notification_topic: String,
    pub workflow_id: String,
}

impl DispatcherConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            notification_topic: std::env::var("NOTIFICATION_TOPIC")
                .context("NOTIFICATION_TOPIC is not set")?,
            workflow_id: std::env::var("WORKFLOW_ID").context("WORKFLOW_ID is not set")?,
        })
    }
}
