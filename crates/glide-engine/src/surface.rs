//! Collaborator seams between the engine and the host's style system.

use serde::{Deserialize, Serialize};

use crate::types::{ElementId, RequestId};

/// Style attribute holding the native transition property list.
pub const TRANSITION_PROPERTY: &str = "transitionProperty";
/// Style attribute holding the native transition duration list.
pub const TRANSITION_DURATION: &str = "transitionDuration";
/// Style attribute holding the native transition delay list.
pub const TRANSITION_DELAY: &str = "transitionDelay";
/// Style attribute holding the native transition timing-function list.
pub const TRANSITION_TIMING_FUNCTION: &str = "transitionTimingFunction";

/// The style primitives the engine drives.
///
/// Computed reads take native CSS names; inline reads and writes take style
/// attribute names. Writing an empty string clears a declaration.
pub trait StyleSurface {
    /// Current computed value of `css_property` on `element`.
    fn computed_style(&self, element: ElementId, css_property: &str) -> String;

    /// Inline declaration for `dom_property`, if one is set.
    fn inline_style(&self, element: ElementId, dom_property: &str) -> Option<String>;

    fn set_style(&mut self, element: ElementId, dom_property: &str, value: &str);

    /// Commit pending style writes so later writes start a transition.
    fn force_layout_flush(&mut self, element: ElementId);

    fn add_completion_listener(&mut self, _element: ElementId, _request: RequestId) {}

    fn remove_completion_listener(&mut self, _element: ElementId, _request: RequestId) {}
}

/// A native per-property transition completion notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEndEvent {
    /// Element whose transition finished.
    pub target: ElementId,
    /// Element the listener is attached to.
    pub current: ElementId,
    /// Native CSS name of the finished property.
    pub property_name: String,
}

impl TransitionEndEvent {
    /// A notification fired directly on `element`.
    pub fn new(element: ElementId, property_name: impl Into<String>) -> Self {
        Self {
            target: element,
            current: element,
            property_name: property_name.into(),
        }
    }

    /// A notification from `target` observed on its ancestor `current`.
    pub fn bubbled(
        target: ElementId,
        current: ElementId,
        property_name: impl Into<String>,
    ) -> Self {
        Self {
            target,
            current,
            property_name: property_name.into(),
        }
    }

    /// Whether the notification was fired on the listening element itself.
    pub fn is_targeted(&self) -> bool {
        self.target == self.current
    }
}
