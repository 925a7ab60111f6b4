use std::convert::Infallible;
use std::path::PathBuf;

use crate::events::EventName;
use crate::validators::ValidationError;

/// Errors raised while loading or booting the listener wiring.
///
/// All of these are startup failures: once a [`ListenerRegistry`](crate::ListenerRegistry)
/// has been built, reading it cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("event `{event}` was registered without any listeners")]
    NoListeners { event: EventName },

    #[error("invalid wiring configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read wiring configuration from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<Infallible> for WiringError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
