pub mod clients;
pub mod config;
mod dispatch;
pub mod error;
pub mod model;

pub use clients::{Notifier, WorkflowClient};
pub use config::DispatcherConfig;
pub use dispatch::Dispatcher;
pub use error::DispatchError;
pub use model::{ChangeEvent, Operation, ScalarValue, StateImage};
