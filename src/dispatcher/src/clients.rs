use std::future::Future;

/// Outbound seam to the notification service.
pub trait Notifier {
    fn publish(
        &self,
        topic: &str,
        message: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Outbound seam to the workflow orchestrator.
///
/// `run_name` is the orchestrator's idempotency key and must be unique
/// per started run.
pub trait WorkflowClient {
    fn start_run(
        &self,
        workflow_id: &str,
        run_name: &str,
        input_json: &str,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}
