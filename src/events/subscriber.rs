use super::RegistryBuilder;
use crate::WiringError;

/// A type that binds several events to listeners in one place.
///
/// Implement this trait to keep the wiring for one area of an application
/// together instead of spreading it over the provider's listen table.
///
/// # Example
///
/// ```rust
/// use eventwire::events::{RegistryBuilder, Subscriber};
/// use eventwire::WiringError;
///
/// struct UserEventSubscriber;
///
/// impl Subscriber for UserEventSubscriber {
///     fn subscribe(&self, registry: &mut RegistryBuilder) -> Result<(), WiringError> {
///         registry
///             .listen("App\\Events\\UserLogin", "App\\Listeners\\UserEventSubscriber@onLogin")?
///             .listen("App\\Events\\UserLogout", "App\\Listeners\\UserEventSubscriber@onLogout")?;
///         Ok(())
///     }
/// }
/// ```
///
/// Closures with the same signature are subscribers too.
pub trait Subscriber: Send + Sync + 'static {
    /// Register this subscriber's bindings.
    fn subscribe(&self, registry: &mut RegistryBuilder) -> Result<(), WiringError>;
}

impl<F> Subscriber for F
where
    F: Fn(&mut RegistryBuilder) -> Result<(), WiringError> + Send + Sync + 'static,
{
    fn subscribe(&self, registry: &mut RegistryBuilder) -> Result<(), WiringError> {
        self(registry)
    }
}
