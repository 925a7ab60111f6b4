use super::ValidationError;

/// Checks that an event name is usable as a registry key.
///
/// Names are opaque; the only rule is that something other than
/// whitespace is present.
pub fn validate_event_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EventNameEmpty);
    }

    Ok(())
}

/// Checks that a listener name can be handed to the host.
pub fn validate_listener_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::ListenerNameEmpty);
    }

    Ok(())
}
