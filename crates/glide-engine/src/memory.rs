//! In-memory style surface for headless hosts and tests.
//!
//! `MemorySurface` is a cheap shared handle: clones observe the same elements,
//! so a test can hand one clone to the engine and inspect another.
//!
//! Computed values resolve as animated override, then inline declaration, then
//! base (stylesheet) value. No interpolation happens; hosts simulate a running
//! transition with [`MemorySurface::set_animated_value`] and its end with a
//! [`TransitionEndEvent`](crate::surface::TransitionEndEvent).

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::normalize::{CssNormalizer, PropertyNormalizer};
use crate::surface::StyleSurface;
use crate::types::{ElementId, RequestId};

/// One recorded inline style write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub element: ElementId,
    /// Native CSS name.
    pub property: String,
    pub value: String,
}

#[derive(Debug, Default)]
struct MemoryElement {
    base: HashMap<String, String>,
    inline: BTreeMap<String, String>,
    animated: HashMap<String, String>,
    flushes: usize,
    listeners: Vec<RequestId>,
    listener_attachments: usize,
}

#[derive(Debug, Default)]
struct MemoryState {
    elements: HashMap<ElementId, MemoryElement>,
    writes: Vec<StyleWrite>,
}

/// Shared-handle in-memory implementation of [`StyleSurface`].
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh element with no styles.
    pub fn create_element(&self) -> ElementId {
        let element = ElementId::new();
        self.state
            .borrow_mut()
            .elements
            .insert(element, MemoryElement::default());
        element
    }

    /// Drop an element and everything recorded about it.
    pub fn remove_element(&self, element: ElementId) {
        let mut state = self.state.borrow_mut();
        state.elements.remove(&element);
        state.writes.retain(|w| w.element != element);
    }

    /// Set a stylesheet value, visible through computed style when no inline
    /// declaration overrides it.
    pub fn set_base_style(&self, element: ElementId, css_property: &str, value: &str) {
        self.state
            .borrow_mut()
            .elements
            .entry(element)
            .or_default()
            .base
            .insert(css_property.to_string(), value.to_string());
    }

    /// Simulate a mid-transition computed value. Cleared by the next inline
    /// write to the same property.
    pub fn set_animated_value(&self, element: ElementId, css_property: &str, value: &str) {
        self.state
            .borrow_mut()
            .elements
            .entry(element)
            .or_default()
            .animated
            .insert(css_property.to_string(), value.to_string());
    }

    /// Inline declaration by native CSS name.
    pub fn inline(&self, element: ElementId, css_property: &str) -> Option<String> {
        self.state
            .borrow()
            .elements
            .get(&element)
            .and_then(|e| e.inline.get(css_property).cloned())
    }

    /// Every inline write, in order.
    pub fn writes(&self) -> Vec<StyleWrite> {
        self.state.borrow().writes.clone()
    }

    /// Values written to one property of one element, in order.
    pub fn writes_for(&self, element: ElementId, css_property: &str) -> Vec<String> {
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|w| w.element == element && w.property == css_property)
            .map(|w| w.value.clone())
            .collect()
    }

    pub fn clear_writes(&self) {
        self.state.borrow_mut().writes.clear();
    }

    pub fn flush_count(&self, element: ElementId) -> usize {
        self.state
            .borrow()
            .elements
            .get(&element)
            .map_or(0, |e| e.flushes)
    }

    /// Requests currently listening for completion notifications.
    pub fn listeners(&self, element: ElementId) -> Vec<RequestId> {
        self.state
            .borrow()
            .elements
            .get(&element)
            .map(|e| e.listeners.clone())
            .unwrap_or_default()
    }

    /// Total number of listener attachments ever made on the element.
    pub fn listener_attachments(&self, element: ElementId) -> usize {
        self.state
            .borrow()
            .elements
            .get(&element)
            .map_or(0, |e| e.listener_attachments)
    }
}

impl StyleSurface for MemorySurface {
    fn computed_style(&self, element: ElementId, css_property: &str) -> String {
        let state = self.state.borrow();
        let Some(e) = state.elements.get(&element) else {
            return String::new();
        };
        e.animated
            .get(css_property)
            .or_else(|| e.inline.get(css_property))
            .or_else(|| e.base.get(css_property))
            .cloned()
            .unwrap_or_default()
    }

    fn inline_style(&self, element: ElementId, dom_property: &str) -> Option<String> {
        self.inline(element, &CssNormalizer.normalize(dom_property))
    }

    fn set_style(&mut self, element: ElementId, dom_property: &str, value: &str) {
        let css_property = CssNormalizer.normalize(dom_property);
        let mut state = self.state.borrow_mut();
        let e = state.elements.entry(element).or_default();
        e.animated.remove(&css_property);
        if value.is_empty() {
            e.inline.remove(&css_property);
        } else {
            e.inline.insert(css_property.clone(), value.to_string());
        }
        state.writes.push(StyleWrite {
            element,
            property: css_property,
            value: value.to_string(),
        });
    }

    fn force_layout_flush(&mut self, element: ElementId) {
        self.state
            .borrow_mut()
            .elements
            .entry(element)
            .or_default()
            .flushes += 1;
    }

    fn add_completion_listener(&mut self, element: ElementId, request: RequestId) {
        let mut state = self.state.borrow_mut();
        let e = state.elements.entry(element).or_default();
        e.listeners.push(request);
        e.listener_attachments += 1;
    }

    fn remove_completion_listener(&mut self, element: ElementId, request: RequestId) {
        if let Some(e) = self.state.borrow_mut().elements.get_mut(&element) {
            e.listeners.retain(|r| *r != request);
        }
    }
}
