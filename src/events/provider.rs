use super::{ListenMap, ListenerRegistry, RegistryBuilder, Subscriber};
use crate::WiringError;
use crate::config::WiringConfig;

/// Boots the application's listener registry.
///
/// Base registration walks the configured listen table in order, then runs
/// any subscribers, then hands the builder to the boot hook. The result is
/// a frozen [`ListenerRegistry`] owned by the caller; nothing is stored
/// globally.
///
/// # Example
///
/// ```rust
/// use eventwire::events::{EventServiceProvider, noop_hook};
///
/// let registry = EventServiceProvider::default().boot(noop_hook)?;
/// assert!(registry.has_listeners("App\\Events\\OrderShipped"));
///
/// // custom wiring goes in the hook
/// let registry = EventServiceProvider::default().boot(|registry| {
///     registry.listen("App\\Events\\OrderShipped", "App\\Listeners\\UpdateInventory")?;
///     Ok(())
/// })?;
/// assert_eq!(registry.listeners_for("App\\Events\\OrderShipped").unwrap().len(), 2);
/// # Ok::<(), eventwire::WiringError>(())
/// ```
#[derive(Default)]
pub struct EventServiceProvider {
    config: WiringConfig,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EventServiceProvider {
    pub fn new(config: WiringConfig) -> Self {
        Self {
            config,
            subscribers: Vec::new(),
        }
    }

    /// Add a subscriber. Subscribers run in the order they are added.
    pub fn with_subscriber(mut self, subscriber: impl Subscriber) -> Self {
        self.subscribers.push(Box::new(subscriber));
        self
    }

    /// The configured listen table, before any boot hook runs.
    pub fn listens(&self) -> &ListenMap {
        &self.config.listen
    }

    /// Register the listen table and subscribers, run `hook`, and freeze the result.
    ///
    /// # Errors
    ///
    /// Fails on the first event with no listeners, or with whatever error
    /// a subscriber or the hook returns.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "boot_listeners",
            skip_all,
            fields(events = self.config.listen.len(), subscribers = self.subscribers.len()),
            err
        )
    )]
    pub fn boot<F>(self, hook: F) -> Result<ListenerRegistry, WiringError>
    where
        F: FnOnce(&mut RegistryBuilder) -> Result<(), WiringError>,
    {
        let mut builder = RegistryBuilder::new();

        for (event, listeners) in self.config.listen {
            builder.register(event, listeners)?;
        }

        for subscriber in &self.subscribers {
            builder.subscribe(subscriber.as_ref())?;
        }

        hook(&mut builder)?;

        let registry = builder.build();

        log::info!(
            target: "eventwire",
            "msg=\"listener registry booted\" events={} listeners={}",
            registry.len(),
            registry.listener_count()
        );

        Ok(registry)
    }
}

impl std::fmt::Debug for EventServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventServiceProvider")
            .field("config", &self.config)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Boot hook that adds nothing to the base registration.
pub fn noop_hook(_registry: &mut RegistryBuilder) -> Result<(), WiringError> {
    Ok(())
}

/// Boot the application's default wiring with a custom hook.
///
/// Shorthand for `EventServiceProvider::default().boot(hook)`.
pub fn bootstrap<F>(hook: F) -> Result<ListenerRegistry, WiringError>
where
    F: FnOnce(&mut RegistryBuilder) -> Result<(), WiringError>,
{
    EventServiceProvider::default().boot(hook)
}
