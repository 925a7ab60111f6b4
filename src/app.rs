//! The application's event listener mappings.
//!
//! Key is the event and value is the listeners bound to it, in the order
//! the host should invoke them.

/// Static listen table used by [`WiringConfig::default`](crate::config::WiringConfig::default).
pub const LISTEN: &[(&str, &[&str])] = &[
    ("App\\Events\\Event", &["App\\Listeners\\EventListener"]),
    (
        "App\\Events\\OrderShipped",
        &["App\\Listeners\\SendShipmentNotification"],
    ),
];
