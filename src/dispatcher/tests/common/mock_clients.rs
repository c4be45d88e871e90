use std::sync::{Arc, Mutex};

use dispatcher::{Notifier, WorkflowClient};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Publish {
        topic: String,
        message: String,
    },
    StartRun {
        workflow_id: String,
        run_name: String,
        input: String,
    },
}

/// Shared between both mocks so tests can assert the relative order of
/// calls across the two collaborators.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }
}

pub struct RecordingNotifier(pub CallLog);

impl Notifier for RecordingNotifier {
    async fn publish(&self, topic: &str, message: &str) -> anyhow::Result<()> {
        self.0.push(Call::Publish {
            topic: topic.into(),
            message: message.into(),
        });
        Ok(())
    }
}

pub struct RecordingWorkflows(pub CallLog);

impl WorkflowClient for RecordingWorkflows {
    async fn start_run(
        &self,
        workflow_id: &str,
        run_name: &str,
        input_json: &str,
    ) -> anyhow::Result<()> {
        self.0.push(Call::StartRun {
            workflow_id: workflow_id.into(),
            run_name: run_name.into(),
            input: input_json.into(),
        });
        Ok(())
    }
}

pub struct FailingNotifier;

impl Notifier for FailingNotifier {
    async fn publish(&self, _topic: &str, _message: &str) -> anyhow::Result<()> {
        anyhow::bail!("broker unavailable");
    }
}
