// src/activity/filter.rs
// Selects the events of a given type, keeping the feed order.

use crate::github::Event;

/// Returns the events whose type equals `event_type` exactly
///
/// With no event type the input is returned unchanged.
pub fn filter_events<'a>(events: &'a [Event], event_type: Option<&str>) -> Vec<&'a Event> {
    match event_type {
        None => events.iter().collect(),
        Some(wanted) => events
            .iter()
            .filter(|event| event.kind.as_deref() == Some(wanted))
            .collect(),
    }
}
