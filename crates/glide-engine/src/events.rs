//! Transition lifecycle events.
//!
//! The engine records every lifecycle step in an [`EventQueue`] alongside the
//! caller-supplied callbacks. Hosts that prefer polling to callbacks can drain
//! it after each turn.
//!
//! # Usage
//!
//! ```ignore
//! engine.run_turn();
//! for event in engine.drain_events() {
//!     match event {
//!         TransitionEvent::Interrupted { property, by, .. } => {
//!             println!("{property} taken over by {by}");
//!         }
//!         TransitionEvent::Settled { all_finished, .. } => {
//!             println!("request done, all finished: {all_finished}");
//!         }
//!         _ => {}
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::types::{ElementId, RequestId};

/// Event emitted when a request or one of its properties changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// A property was handed to the native transition engine.
    Started {
        request_id: RequestId,
        element: ElementId,
        property: String,
    },
    /// A property reached its target, natively or because `from == to`.
    Ended {
        request_id: RequestId,
        element: ElementId,
        property: String,
    },
    /// A newer request claimed a property before it finished.
    Interrupted {
        request_id: RequestId,
        element: ElementId,
        property: String,
        /// The request that claimed the property.
        by: RequestId,
    },
    /// Every property of the request finished and it was detached.
    Settled {
        request_id: RequestId,
        element: ElementId,
        all_finished: bool,
    },
}

impl TransitionEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            Self::Started { request_id, .. }
            | Self::Ended { request_id, .. }
            | Self::Interrupted { request_id, .. }
            | Self::Settled { request_id, .. } => *request_id,
        }
    }

    pub fn element(&self) -> ElementId {
        match self {
            Self::Started { element, .. }
            | Self::Ended { element, .. }
            | Self::Interrupted { element, .. }
            | Self::Settled { element, .. } => *element,
        }
    }

    /// The property this event concerns, if it is a per-property event.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::Started { property, .. }
            | Self::Ended { property, .. }
            | Self::Interrupted { property, .. } => Some(property),
            Self::Settled { .. } => None,
        }
    }
}

/// Queue for collecting transition events between polls.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TransitionEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn pop(&mut self) -> Option<TransitionEvent> {
        self.events.pop_front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransitionEvent> {
        self.events.iter()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Get events for a specific element.
    pub fn events_for_element(&self, element: ElementId) -> Vec<&TransitionEvent> {
        self.events
            .iter()
            .filter(|e| e.element() == element)
            .collect()
    }
}
