pub mod name;

pub use name::{validate_event_name, validate_listener_name};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationError {
    #[error("Event name cannot be empty")]
    EventNameEmpty,
    #[error("Listener name cannot be empty")]
    ListenerNameEmpty,
}
