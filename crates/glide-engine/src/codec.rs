//! Native transition style lists.
//!
//! The platform drives transitions from four parallel comma-separated
//! declarations (property, duration, delay, timing function). This module
//! reads them into equal-length vectors, applies the list-matching rule, and
//! writes them back joined with `", "`.
//!
//! # List matching
//!
//! The property list governs the length. A missing sibling list defaults to a
//! single `0s` (time lists) or `ease` (timing functions); shorter siblings then
//! repeat cyclically (`list[i % len]`) and extra entries are dropped. An empty
//! property list means nothing is transitioning, so siblings are ignored.

use serde::{Deserialize, Serialize};

use crate::surface::{
    StyleSurface, TRANSITION_DELAY, TRANSITION_DURATION, TRANSITION_PROPERTY,
    TRANSITION_TIMING_FUNCTION,
};
use crate::types::ElementId;

const DEFAULT_TIME: &str = "0s";
const DEFAULT_TIMING_FUNCTION: &str = "ease";

/// One row across the four native lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry {
    pub property: String,
    pub duration: String,
    pub delay: String,
    pub timing_function: String,
}

/// The four native transition lists of one element, always equal in length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionValues {
    properties: Vec<String>,
    durations: Vec<String>,
    delays: Vec<String>,
    timing_functions: Vec<String>,
}

impl TransitionValues {
    /// Read the element's inline transition declarations.
    pub fn read(surface: &dyn StyleSurface, element: ElementId) -> Self {
        let get = |attr: &str| surface.inline_style(element, attr).unwrap_or_default();
        Self::from_declarations(
            &get(TRANSITION_PROPERTY),
            &get(TRANSITION_DURATION),
            &get(TRANSITION_DELAY),
            &get(TRANSITION_TIMING_FUNCTION),
        )
    }

    /// Parse and match four raw declarations.
    pub fn from_declarations(property: &str, duration: &str, delay: &str, timing: &str) -> Self {
        let properties = split_list(property);
        if properties.is_empty() {
            return Self::default();
        }

        let len = properties.len();
        Self {
            durations: match_length(split_list(duration), DEFAULT_TIME, len),
            delays: match_length(split_list(delay), DEFAULT_TIME, len),
            timing_functions: match_length(split_list(timing), DEFAULT_TIMING_FUNCTION, len),
            properties,
        }
    }

    /// Write all four declarations back to the element.
    pub fn write(&self, surface: &mut dyn StyleSurface, element: ElementId) {
        surface.set_style(element, TRANSITION_PROPERTY, &self.properties.join(", "));
        surface.set_style(element, TRANSITION_DURATION, &self.durations.join(", "));
        surface.set_style(element, TRANSITION_DELAY, &self.delays.join(", "));
        surface.set_style(
            element,
            TRANSITION_TIMING_FUNCTION,
            &self.timing_functions.join(", "),
        );
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn durations(&self) -> &[String] {
        &self.durations
    }

    pub fn delays(&self) -> &[String] {
        &self.delays
    }

    pub fn timing_functions(&self) -> &[String] {
        &self.timing_functions
    }

    /// Index of `property` in the property list.
    pub fn position(&self, property: &str) -> Option<usize> {
        self.properties.iter().position(|p| p == property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.position(property).is_some()
    }

    pub fn entry(&self, index: usize) -> Option<TransitionEntry> {
        Some(TransitionEntry {
            property: self.properties.get(index)?.clone(),
            duration: self.durations.get(index)?.clone(),
            delay: self.delays.get(index)?.clone(),
            timing_function: self.timing_functions.get(index)?.clone(),
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = TransitionEntry> + '_ {
        (0..self.len()).filter_map(|i| self.entry(i))
    }

    /// Append an entry, replacing any existing entry for the same property.
    pub fn push(&mut self, entry: TransitionEntry) {
        self.remove(&entry.property);
        self.properties.push(entry.property);
        self.durations.push(entry.duration);
        self.delays.push(entry.delay);
        self.timing_functions.push(entry.timing_function);
    }

    /// Remove the entry for `property`, returning it if it was present.
    pub fn remove(&mut self, property: &str) -> Option<TransitionEntry> {
        let index = self.position(property)?;
        Some(TransitionEntry {
            property: self.properties.remove(index),
            duration: self.durations.remove(index),
            delay: self.delays.remove(index),
            timing_function: self.timing_functions.remove(index),
        })
    }
}

/// Split a declaration on top-level commas, so `cubic-bezier(a, b, c, d)`
/// stays one item.
fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(value[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(value[start..].trim().to_string());
    items.retain(|item| !item.is_empty());
    items
}

fn match_length(mut list: Vec<String>, default: &str, len: usize) -> Vec<String> {
    if list.is_empty() {
        list.push(default.to_string());
    }
    let original = list.len();
    for i in original..len {
        let repeated = list[i % original].clone();
        list.push(repeated);
    }
    list.truncate(len);
    list
}
