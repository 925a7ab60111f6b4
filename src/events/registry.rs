use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use super::{EventName, ListenerName, Subscriber};
use crate::WiringError;

/// Ordered mapping of events to the listeners bound to them.
pub type ListenMap = IndexMap<EventName, Vec<ListenerName>>;

/// Read-only mapping from event names to their listeners.
///
/// Built once at startup through a [`RegistryBuilder`] (usually via
/// [`EventServiceProvider::boot`](super::EventServiceProvider::boot)) and then
/// handed to whatever dispatches events. Every event maps to at least one
/// listener. Events keep the order in which they were first registered and
/// listeners keep the order they were given in.
///
/// # Example
///
/// ```rust
/// use eventwire::events::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::new();
/// builder.register("OrderShipped", ["SendShipmentNotification"])?;
/// let registry = builder.build();
///
/// let listeners = registry.listeners_for("OrderShipped").unwrap();
/// assert_eq!(listeners.len(), 1);
/// assert_eq!(listeners[0], "SendShipmentNotification");
/// assert!(registry.listeners_for("OrderCancelled").is_none());
/// # Ok::<(), eventwire::WiringError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ListenerRegistry {
    listen: ListenMap,
}

impl ListenerRegistry {
    /// Get the listeners registered for an event, in registration order.
    pub fn listeners_for(&self, event: &str) -> Option<&[ListenerName]> {
        self.listen.get(event).map(Vec::as_slice)
    }

    /// Check whether any listener is bound to an event.
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listen.contains_key(event)
    }

    /// Get all registered events in registration order.
    pub fn events(&self) -> impl Iterator<Item = &EventName> {
        self.listen.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EventName, &[ListenerName])> {
        self.listen.iter().map(|(e, l)| (e, l.as_slice()))
    }

    /// The full event to listener mapping.
    pub fn listens(&self) -> &ListenMap {
        &self.listen
    }

    /// Number of registered events.
    pub fn len(&self) -> usize {
        self.listen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listen.is_empty()
    }

    /// Total number of listener bindings across all events.
    pub fn listener_count(&self) -> usize {
        self.listen.values().map(Vec::len).sum()
    }

    /// Serialize to JSON, preserving registration order.
    ///
    /// Format: `{"event1": ["listener1", "listener2"], "event2": ["listener3"]}`
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.listen).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Reopen the registry for further registration.
    pub fn into_builder(self) -> RegistryBuilder {
        RegistryBuilder { listen: self.listen }
    }
}

impl<'a> IntoIterator for &'a ListenerRegistry {
    type Item = (&'a EventName, &'a Vec<ListenerName>);
    type IntoIter = indexmap::map::Iter<'a, EventName, Vec<ListenerName>>;

    fn into_iter(self) -> Self::IntoIter {
        self.listen.iter()
    }
}

/// Mutable registration phase of a [`ListenerRegistry`].
///
/// Registering an event that already has listeners replaces them
/// (last write wins). The event keeps its original position.
#[must_use]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    listen: ListenMap,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an event to an ordered list of listeners.
    ///
    /// # Errors
    ///
    /// - [`WiringError::Validation`] if a name is empty
    /// - [`WiringError::NoListeners`] if `listeners` is empty
    pub fn register<E, I, L>(&mut self, event: E, listeners: I) -> Result<&mut Self, WiringError>
    where
        E: TryInto<EventName>,
        WiringError: From<E::Error>,
        I: IntoIterator<Item = L>,
        L: TryInto<ListenerName>,
        WiringError: From<L::Error>,
    {
        let event = event.try_into()?;
        let listeners = listeners
            .into_iter()
            .map(TryInto::<ListenerName>::try_into)
            .collect::<Result<Vec<ListenerName>, _>>()?;

        if listeners.is_empty() {
            return Err(WiringError::NoListeners { event });
        }

        warn_on_duplicates(&event, &listeners);

        log::debug!(
            target: "eventwire",
            "msg=\"event registered\" event={} listeners={}",
            event,
            listeners.len()
        );

        match self.listen.entry(event) {
            Entry::Occupied(mut entry) => {
                log::warn!(
                    target: "eventwire",
                    "msg=\"event registered twice, replacing listeners\" event={} replaced={}",
                    entry.key(),
                    entry.get().len()
                );
                entry.insert(listeners);
            }
            Entry::Vacant(entry) => {
                entry.insert(listeners);
            }
        }

        Ok(self)
    }

    /// Append a single listener to an event, creating the entry if needed.
    pub fn listen<E, L>(&mut self, event: E, listener: L) -> Result<&mut Self, WiringError>
    where
        E: TryInto<EventName>,
        WiringError: From<E::Error>,
        L: TryInto<ListenerName>,
        WiringError: From<L::Error>,
    {
        let event = event.try_into()?;
        let listener = listener.try_into()?;

        if self
            .listen
            .get(event.as_str())
            .is_some_and(|listeners| listeners.contains(&listener))
        {
            log::warn!(
                target: "eventwire",
                "msg=\"listener bound twice to the same event\" event={} listener={}",
                event,
                listener
            );
        }

        self.listen.entry(event).or_default().push(listener);

        Ok(self)
    }

    /// Let a subscriber register its bindings.
    pub fn subscribe<S>(&mut self, subscriber: &S) -> Result<&mut Self, WiringError>
    where
        S: Subscriber + ?Sized,
    {
        subscriber.subscribe(self)?;
        Ok(self)
    }

    pub fn listeners_for(&self, event: &str) -> Option<&[ListenerName]> {
        self.listen.get(event).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.listen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listen.is_empty()
    }

    /// Freeze the registrations into a read-only registry.
    pub fn build(self) -> ListenerRegistry {
        ListenerRegistry {
            listen: self.listen,
        }
    }
}

fn warn_on_duplicates(event: &EventName, listeners: &[ListenerName]) {
    for (i, listener) in listeners.iter().enumerate() {
        if listeners.iter().take(i).any(|l| l == listener) {
            log::warn!(
                target: "eventwire",
                "msg=\"listener bound twice to the same event\" event={} listener={}",
                event,
                listener
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &ListenerRegistry, event: &str) -> Vec<String> {
        registry
            .listeners_for(event)
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("OrderShipped", ["SendShipmentNotification"])
            .unwrap();
        let registry = builder.build();

        assert_eq!(names(&registry, "OrderShipped"), vec!["SendShipmentNotification"]);
        assert!(registry.listeners_for("OrderCancelled").is_none());
        assert!(registry.has_listeners("OrderShipped"));
        assert!(!registry.has_listeners("OrderCancelled"));
    }

    #[test]
    fn test_register_empty_listeners_rejected() {
        let mut builder = RegistryBuilder::new();
        let err = builder
            .register("OrderShipped", Vec::<&str>::new())
            .unwrap_err();

        match err {
            WiringError::NoListeners { event } => assert_eq!(event, "OrderShipped"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(builder.is_empty());
    }

    #[test]
    fn test_register_empty_names_rejected() {
        let mut builder = RegistryBuilder::new();

        assert!(matches!(
            builder.register("", ["Listener"]),
            Err(WiringError::Validation(_))
        ));
        assert!(matches!(
            builder.register("Event", ["Listener", " "]),
            Err(WiringError::Validation(_))
        ));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_register_twice_last_write_wins() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("OrderShipped", ["First"])
            .unwrap()
            .register("Other", ["X"])
            .unwrap()
            .register("OrderShipped", ["Second", "Third"])
            .unwrap();
        let registry = builder.build();

        assert_eq!(names(&registry, "OrderShipped"), vec!["Second", "Third"]);
        assert_eq!(registry.len(), 2);

        // replaced entry keeps its original slot
        let order: Vec<&str> = registry.events().map(EventName::as_str).collect();
        assert_eq!(order, vec!["OrderShipped", "Other"]);
    }

    #[test]
    fn test_listener_order_preserved() {
        let mut builder = RegistryBuilder::new();
        builder.register("E", ["c", "a", "b"]).unwrap();
        let registry = builder.build();

        assert_eq!(names(&registry, "E"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_listeners_permitted() {
        let mut builder = RegistryBuilder::new();
        builder.register("E", ["a", "a"]).unwrap();
        let registry = builder.build();

        assert_eq!(names(&registry, "E"), vec!["a", "a"]);
        assert_eq!(registry.listener_count(), 2);
    }

    #[test]
    fn test_listen_appends() {
        let mut builder = RegistryBuilder::new();
        builder
            .listen("E", "first")
            .unwrap()
            .listen("E", "second")
            .unwrap()
            .listen("F", "only")
            .unwrap();
        let registry = builder.build();

        assert_eq!(names(&registry, "E"), vec!["first", "second"]);
        assert_eq!(names(&registry, "F"), vec!["only"]);
    }

    #[test]
    fn test_listen_invalid_name_leaves_builder_untouched() {
        let mut builder = RegistryBuilder::new();
        assert!(builder.listen("E", "").is_err());
        assert!(builder.listeners_for("E").is_none());
    }

    #[test]
    fn test_register_accepts_typed_names() {
        let event = EventName::new("E").unwrap();
        let listener = ListenerName::new("L").unwrap();

        let mut builder = RegistryBuilder::new();
        builder.register(event, vec![listener]).unwrap();

        assert_eq!(builder.listeners_for("E").map(<[ListenerName]>::len), Some(1));
    }

    #[test]
    fn test_every_entry_non_empty() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("A", ["a"])
            .unwrap()
            .listen("B", "b")
            .unwrap()
            .register("A", ["a2"])
            .unwrap();
        let registry = builder.build();

        assert!(registry.iter().all(|(_, listeners)| !listeners.is_empty()));
    }

    #[test]
    fn test_to_json_preserves_order() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("z.event", ["one", "two"])
            .unwrap()
            .register("a.event", ["three"])
            .unwrap();
        let registry = builder.build();

        assert_eq!(
            registry.to_json(),
            r#"{"z.event":["one","two"],"a.event":["three"]}"#
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build();

        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.listener_count(), 0);
        assert_eq!(registry.to_json(), "{}");
    }

    #[test]
    fn test_into_builder_reopens() {
        let mut builder = RegistryBuilder::new();
        builder.register("A", ["a"]).unwrap();
        let registry = builder.build();

        let mut builder = registry.into_builder();
        builder.register("B", ["b"]).unwrap();
        let registry = builder.build();

        assert_eq!(registry.len(), 2);
        assert!(registry.has_listeners("A"));
    }
}
