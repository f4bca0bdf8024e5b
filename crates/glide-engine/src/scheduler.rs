//! Next-turn task queue.
//!
//! Everything the engine defers (tick continuations and callback dispatch)
//! goes through one FIFO. A turn runs exactly the tasks that were queued when
//! it started; anything scheduled while it runs lands on the next turn.

use std::collections::VecDeque;
use std::fmt;

use crate::property::{CompletionCallback, StyleChangeCallback};
use crate::types::{ElementId, RequestId};

/// Work deferred to a later turn.
pub(crate) enum Task {
    /// Tick continuation: hand queued properties to the native engine.
    Continue { request: RequestId },
    /// A property's own completion callback.
    PropertyEnd {
        element: ElementId,
        callback: CompletionCallback,
        finished: bool,
    },
    /// A request's `on_after_change_style` fired from the interruption path.
    AfterChangeStyle {
        element: ElementId,
        callback: StyleChangeCallback,
    },
    /// A request's batch completion callback.
    RequestEnd {
        element: ElementId,
        callback: CompletionCallback,
        all_finished: bool,
    },
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue { request } => {
                f.debug_struct("Continue").field("request", request).finish()
            }
            Self::PropertyEnd { element, finished, .. } => f
                .debug_struct("PropertyEnd")
                .field("element", element)
                .field("finished", finished)
                .finish_non_exhaustive(),
            Self::AfterChangeStyle { element, .. } => f
                .debug_struct("AfterChangeStyle")
                .field("element", element)
                .finish_non_exhaustive(),
            Self::RequestEnd {
                element,
                all_finished,
                ..
            } => f
                .debug_struct("RequestEnd")
                .field("element", element)
                .field("all_finished", all_finished)
                .finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct TurnQueue {
    pending: VecDeque<Task>,
    turns: u64,
}

impl TurnQueue {
    pub(crate) fn schedule(&mut self, task: Task) {
        self.pending.push_back(task);
    }

    /// Take every task due this turn.
    pub(crate) fn take_turn(&mut self) -> VecDeque<Task> {
        self.turns += 1;
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of turns taken so far.
    pub(crate) fn turns(&self) -> u64 {
        self.turns
    }
}
