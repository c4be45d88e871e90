use uuid::Uuid;

use crate::{
    clients::{Notifier, WorkflowClient},
    config::DispatcherConfig,
    error::DispatchError,
    model::{ChangeEvent, Operation},
};

const EMPLOYEE_NAME: &str = "EmployeeName";
const LEAVE_STATUS: &str = "LeaveStatus";
const APPROVED: &str = "Approved";

/// Classifies each change event in a batch and invokes at most one
/// external side effect per event, strictly in batch order.
pub struct Dispatcher<N, W> {
    config: DispatcherConfig,
    notifier: N,
    workflows: W,
}

impl<N, W> Dispatcher<N, W>
where
    N: Notifier + Send + Sync,
    W: WorkflowClient + Send + Sync,
{
    pub fn new(config: DispatcherConfig, notifier: N, workflows: W) -> Self {
        Self {
            config,
            notifier,
            workflows,
        }
    }

    /// Processes one batch. Each event's external call is awaited
    /// before the next event is considered; the first error aborts the
    /// rest of the batch.
    pub async fn process(&self, batch: &[ChangeEvent]) -> Result<(), DispatchError> {
        tracing::info!(records = batch.len(), "processing change batch");

        for event in batch {
            tracing::debug!(
                identity = %event.identity,
                operation = event.operation.as_tag(),
                "classifying record"
            );
            match event.operation {
                Operation::Inserted => self.notify_submitted(event).await?,
                Operation::Modified => self.maybe_start_workflow(event).await?,
                Operation::Removed | Operation::Unknown => continue,
            }
        }

        tracing::info!("change batch complete");
        Ok(())
    }

    async fn notify_submitted(&self, event: &ChangeEvent) -> Result<(), DispatchError> {
        let name = required_text(event, EMPLOYEE_NAME)?;
        let message = format!("{name} has submitted a Leave Request. Please respond.");

        self.notifier
            .publish(&self.config.notification_topic, &message)
            .await
            .map_err(|source| external_call_failure(event, source))?;

        tracing::info!(identity = %event.identity, "leave request notification published");
        Ok(())
    }

    async fn maybe_start_workflow(&self, event: &ChangeEvent) -> Result<(), DispatchError> {
        let status = required_text(event, LEAVE_STATUS)?;
        if status != APPROVED {
            return Ok(());
        }

        let name = required_text(event, EMPLOYEE_NAME)?;
        let run_name = Uuid::new_v4().to_string();
        let input = serde_json::Value::String(name.to_owned()).to_string();

        self.workflows
            .start_run(&self.config.workflow_id, &run_name, &input)
            .await
            .map_err(|source| external_call_failure(event, source))?;

        tracing::info!(identity = %event.identity, run_name = %run_name, "approval workflow started");
        Ok(())
    }
}

fn required_text<'a>(
    event: &'a ChangeEvent,
    field: &'static str,
) -> Result<&'a str, DispatchError> {
    event
        .new_state
        .as_ref()
        .and_then(|state| state.text(field))
        .ok_or_else(|| DispatchError::MalformedEvent {
            identity: event.identity.clone(),
            field,
        })
}

fn external_call_failure(event: &ChangeEvent, source: anyhow::Error) -> DispatchError {
    DispatchError::ExternalCallFailure {
        identity: event.identity.clone(),
        source,
    }
}
