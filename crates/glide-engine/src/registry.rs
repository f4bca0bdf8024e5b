//! Per-element side-table of attached requests.
//!
//! Each element with at least one in-flight request gets an entry, created on
//! first attachment and removed when its last request detaches or the element
//! is released. Requests are kept oldest first.

use std::collections::HashMap;

use crate::types::{ElementId, RequestId};

/// Side-table mapping elements to the requests currently touching them.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    entries: HashMap<ElementId, Vec<RequestId>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `request` to `element`. Attaching twice is a no-op.
    pub fn attach(&mut self, element: ElementId, request: RequestId) {
        let requests = self.entries.entry(element).or_default();
        if !requests.contains(&request) {
            requests.push(request);
        }
    }

    /// Detach `request` from `element`, returning whether it was attached.
    pub fn detach(&mut self, element: ElementId, request: RequestId) -> bool {
        let Some(requests) = self.entries.get_mut(&element) else {
            return false;
        };
        let before = requests.len();
        requests.retain(|r| *r != request);
        let removed = requests.len() != before;
        if requests.is_empty() {
            self.entries.remove(&element);
        }
        removed
    }

    /// Requests attached to `element`, oldest first.
    pub fn requests_on(&self, element: ElementId) -> &[RequestId] {
        self.entries.get(&element).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, element: ElementId, request: RequestId) -> bool {
        self.requests_on(element).contains(&request)
    }

    /// Tear down the element's entry, returning the requests it held.
    pub fn release(&mut self, element: ElementId) -> Vec<RequestId> {
        self.entries.remove(&element).unwrap_or_default()
    }

    /// Number of elements with at least one attached request.
    pub fn element_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
