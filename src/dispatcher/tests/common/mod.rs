pub mod mock_clients;

use dispatcher::{ChangeEvent, DispatcherConfig, Operation, StateImage};

pub const MOCK_TOPIC: &str = "mock-topic";
pub const MOCK_WORKFLOW: &str = "mock-workflow";

pub fn config() -> DispatcherConfig {
    DispatcherConfig {
        notification_topic: MOCK_TOPIC.into(),
        workflow_id: MOCK_WORKFLOW.into(),
    }
}

pub fn inserted(identity: &str, name: &str) -> ChangeEvent {
    ChangeEvent {
        identity: identity.into(),
        operation: Operation::Inserted,
        new_state: Some([("EmployeeName", name)].into_iter().collect()),
    }
}

pub fn modified(identity: &str, name: &str, status: &str) -> ChangeEvent {
    ChangeEvent {
        identity: identity.into(),
        operation: Operation::Modified,
        new_state: Some(
            [("EmployeeName", name), ("LeaveStatus", status)]
                .into_iter()
                .collect(),
        ),
    }
}

pub fn removed(identity: &str) -> ChangeEvent {
    ChangeEvent {
        identity: identity.into(),
        operation: Operation::Removed,
        new_state: None,
    }
}

pub fn with_state(identity: &str, operation: Operation, state: StateImage) -> ChangeEvent {
    ChangeEvent {
        identity: identity.into(),
        operation,
        new_state: Some(state),
    }
}
