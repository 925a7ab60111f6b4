//! Declarative event to listener wiring.
//!
//! `eventwire` holds the mapping from event names to the listeners a host
//! application should invoke for them, and boots it once at startup through
//! [`EventServiceProvider`].

pub mod app;
pub mod config;
mod error;
pub mod events;
pub mod validators;

pub use config::WiringConfig;
pub use error::WiringError;
pub use events::{
    EventName, EventServiceProvider, ListenerName, ListenerRegistry, RegistryBuilder, Subscriber,
    bootstrap, noop_hook,
};
pub use validators::ValidationError;
