//! Event to listener wiring.
//!
//! The registry maps event names to the ordered listeners the host should
//! invoke for them. It is built once at startup and read-only afterwards.
//! Firing events and invoking listeners is the host's job.
//!
//! # Quick Start
//!
//! ```rust
//! use eventwire::events::{EventServiceProvider, noop_hook};
//!
//! // register the application's listen table at startup
//! let registry = EventServiceProvider::default().boot(noop_hook)?;
//!
//! // hand the registry to whatever dispatches events
//! for listener in registry.listeners_for("App\\Events\\OrderShipped").unwrap_or_default() {
//!     println!("would invoke {listener}");
//! }
//! # Ok::<(), eventwire::WiringError>(())
//! ```
//!
//! # Custom Wiring
//!
//! Pass a boot hook, or implement [`Subscriber`] to group bindings:
//!
//! ```rust
//! use eventwire::events::{EventServiceProvider, RegistryBuilder, Subscriber};
//! use eventwire::WiringError;
//!
//! struct BillingSubscriber;
//!
//! impl Subscriber for BillingSubscriber {
//!     fn subscribe(&self, registry: &mut RegistryBuilder) -> Result<(), WiringError> {
//!         registry.register(
//!             "App\\Events\\InvoicePaid",
//!             ["App\\Listeners\\MarkOrderPaid", "App\\Listeners\\EmailReceipt"],
//!         )?;
//!         Ok(())
//!     }
//! }
//!
//! let registry = EventServiceProvider::default()
//!     .with_subscriber(BillingSubscriber)
//!     .boot(|registry| {
//!         registry.listen("App\\Events\\InvoicePaid", "App\\Listeners\\AuditLog")?;
//!         Ok(())
//!     })?;
//!
//! assert_eq!(registry.listeners_for("App\\Events\\InvoicePaid").unwrap().len(), 3);
//! # Ok::<(), WiringError>(())
//! ```

mod name;
mod provider;
mod registry;
mod subscriber;

pub use name::{EventName, ListenerName};
pub use provider::{EventServiceProvider, bootstrap, noop_hook};
pub use registry::{ListenMap, ListenerRegistry, RegistryBuilder};
pub use subscriber::Subscriber;
