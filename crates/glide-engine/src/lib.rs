//! Coordination engine for CSS-driven property transitions.
//!
//! This crate provides:
//! - **Requests**: batches of property descriptors with shared timing options
//!   and lifecycle callbacks
//! - **Interruption**: a newer request claiming a property forcibly finishes
//!   the older owner and can continue from the current on-screen value
//! - **List codec**: merge and remove entries in the comma-separated
//!   `transition-*` declarations without disturbing foreign entries
//! - **Surfaces**: the [`StyleSurface`] seam to a rendering engine, with an
//!   in-memory implementation for tests and demos
//!
//! # Architecture
//!
//! ```text
//! TransitionEngine
//!   ├── ElementRegistry   (element → live requests)
//!   ├── TurnQueue         (tick continuations, deferred callbacks)
//!   ├── EventQueue        (lifecycle events for observers)
//!   └── dyn StyleSurface  (computed/inline style, completion listeners)
//! ```

pub mod codec;
pub mod engine;
pub mod error;
pub mod events;
pub mod memory;
pub mod normalize;
pub mod property;
pub mod registry;
pub mod request;
pub mod surface;
pub mod types;

mod scheduler;

pub use codec::{TransitionEntry, TransitionValues};
pub use engine::TransitionEngine;
pub use error::{Result, TransitionError};
pub use events::{EventQueue, TransitionEvent};
pub use memory::{MemorySurface, StyleWrite};
pub use normalize::{CssNormalizer, PropertyNormalizer};
pub use property::{
    CompletionCallback, PropertyArg, PropertyDescriptor, PropertyRecord, PropertySpec,
    StyleChangeCallback,
};
pub use registry::ElementRegistry;
pub use request::{RequestSpec, TransitionDefaults, TransitionOptions, TransitionRequest};
pub use surface::{StyleSurface, TransitionEndEvent};
pub use types::{ElementId, PropertyPhase, RequestId, RequestPhase, StyleValue, TimeValue};
