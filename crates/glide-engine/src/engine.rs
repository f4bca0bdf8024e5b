//! Transition engine: the per-element coordination state machine.
//!
//! The `TransitionEngine` drives each submitted request through
//! `Initializing -> AwaitingStart -> Running -> Settled`, and each of its
//! properties through `Pending -> Queued -> Active -> Finished`. It is fed by
//! two event sources:
//! - scheduler turns ([`TransitionEngine::run_turn`]), which run tick
//!   continuations and deferred callbacks
//! - native completion notifications
//!   ([`TransitionEngine::handle_transition_end`])
//!
//! Every handler re-validates the request it targets, since anything may have
//! happened between scheduling and delivery.
//!
//! # Callback contract
//!
//! Per-property `on_end` and batch `on_transition_end` callbacks always run on
//! a later turn. `on_before_change_style` runs inside `submit`;
//! `on_after_change_style` runs once, inside `submit` when every property was
//! trivial, inside the tick continuation otherwise, or on the next turn when
//! interruption drains the request first.
//!
//! # Usage
//!
//! ```ignore
//! let surface = MemorySurface::new();
//! let el = surface.create_element();
//! let mut engine = TransitionEngine::new(surface.clone());
//!
//! engine.submit(
//!     el,
//!     PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into(), "300ms".into()]),
//!     TransitionOptions::new().on_transition_end(|_, _, all_finished| {
//!         println!("done: {all_finished}");
//!     }),
//! )?;
//! engine.run_turn(); // tick continuation registers the native transition
//! engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?;
//! engine.run_turn(); // batch callback fires
//! ```

use std::collections::HashMap;

use glide_config::{GlideConfig, SchedulerConfig};
use tracing::{debug, trace, warn};

use crate::codec::{TransitionEntry, TransitionValues};
use crate::error::{Result, TransitionError};
use crate::events::{EventQueue, TransitionEvent};
use crate::normalize::{CssNormalizer, PropertyNormalizer};
use crate::property::{CompletionCallback, PropertyDescriptor, StyleChangeCallback};
use crate::registry::ElementRegistry;
use crate::request::{RequestSpec, TransitionDefaults, TransitionOptions, TransitionRequest};
use crate::scheduler::{Task, TurnQueue};
use crate::surface::{StyleSurface, TransitionEndEvent};
use crate::types::{ElementId, PropertyPhase, RequestId, RequestPhase, StyleValue, TimeValue};

/// One property of a live request.
struct PropertySlot {
    descriptor: PropertyDescriptor,
    from: Option<StyleValue>,
    to: Option<StyleValue>,
    phase: PropertyPhase,
    on_end: Option<CompletionCallback>,
}

impl PropertySlot {
    fn new(mut descriptor: PropertyDescriptor) -> Self {
        let on_end = descriptor.take_on_end();
        Self {
            from: descriptor.from().cloned(),
            to: descriptor.to().cloned(),
            phase: PropertyPhase::Pending,
            on_end,
            descriptor,
        }
    }

    fn css(&self) -> &str {
        self.descriptor.css_property()
    }
}

/// Mutable state of a live request, owned by the engine.
struct RequestState {
    element: ElementId,
    phase: RequestPhase,
    slots: Vec<PropertySlot>,
    /// Slot indices not yet handed to the native engine.
    queued: Vec<usize>,
    /// Slot indices under native interpolation.
    active: Vec<usize>,
    all_properties_finished: bool,
    listening: bool,
    duration: TimeValue,
    delay: TimeValue,
    timing_function: String,
    on_after_change_style: Option<StyleChangeCallback>,
    on_transition_end: Option<CompletionCallback>,
}

impl RequestState {
    fn slot_index(&self, css_property: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.css() == css_property)
    }

    /// Whether the request still owns `css_property` (queued or active).
    fn claims(&self, css_property: &str) -> bool {
        self.slot_index(css_property)
            .is_some_and(|i| self.queued.contains(&i) || self.active.contains(&i))
    }

    fn is_drained(&self) -> bool {
        self.queued.is_empty() && self.active.is_empty()
    }
}

/// A property an older request still owns when a newer one claims it.
struct ClaimedProperty {
    owner: RequestId,
    index: usize,
    css: String,
    dom: String,
    was_active: bool,
    /// Computed value captured before anything changed.
    current: Option<StyleValue>,
}

/// Coordinates CSS-driven transitions across every element it is given.
pub struct TransitionEngine {
    surface: Box<dyn StyleSurface>,
    normalizer: Box<dyn PropertyNormalizer>,
    defaults: TransitionDefaults,
    max_turns: usize,
    registry: ElementRegistry,
    requests: HashMap<RequestId, RequestState>,
    queue: TurnQueue,
    events: EventQueue,
}

impl TransitionEngine {
    /// Create an engine with built-in defaults.
    pub fn new(surface: impl StyleSurface + 'static) -> Self {
        Self::with_defaults(surface, TransitionDefaults::default())
    }

    /// Create an engine from loaded configuration.
    pub fn with_config(surface: impl StyleSurface + 'static, config: &GlideConfig) -> Self {
        let mut engine =
            Self::with_defaults(surface, TransitionDefaults::from_config(&config.transition));
        engine.max_turns = config.scheduler.max_turns;
        engine
    }

    pub fn with_defaults(
        surface: impl StyleSurface + 'static,
        defaults: TransitionDefaults,
    ) -> Self {
        Self {
            surface: Box::new(surface),
            normalizer: Box::new(CssNormalizer),
            defaults,
            max_turns: SchedulerConfig::default().max_turns,
            registry: ElementRegistry::new(),
            requests: HashMap::new(),
            queue: TurnQueue::default(),
            events: EventQueue::new(),
        }
    }

    /// Replace the property-name normalizer used by `submit`.
    pub fn with_normalizer(mut self, normalizer: impl PropertyNormalizer + 'static) -> Self {
        self.normalizer = Box::new(normalizer);
        self
    }

    pub fn defaults(&self) -> &TransitionDefaults {
        &self.defaults
    }

    pub fn normalizer(&self) -> &dyn PropertyNormalizer {
        self.normalizer.as_ref()
    }

    pub fn surface(&self) -> &dyn StyleSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn StyleSurface {
        self.surface.as_mut()
    }

    /// Build a request from `spec` and `options` and begin it on `element`.
    ///
    /// Results arrive through the callbacks in `options` and the property
    /// specs; the returned ID is for introspection only.
    pub fn submit(
        &mut self,
        element: ElementId,
        spec: impl Into<RequestSpec>,
        options: TransitionOptions,
    ) -> Result<RequestId> {
        let request = TransitionRequest::from_spec(
            spec.into(),
            options,
            &self.defaults,
            self.normalizer.as_ref(),
        )?;
        self.begin_transition(element, request)
    }

    /// Begin an already-built request on `element`.
    pub fn begin_transition(
        &mut self,
        element: ElementId,
        request: TransitionRequest,
    ) -> Result<RequestId> {
        let id = RequestId::new();
        let TransitionRequest {
            properties,
            duration,
            delay,
            timing_function,
            begin_from_current_value,
            on_before_change_style,
            on_after_change_style,
            on_transition_end,
        } = request;
        let mut slots: Vec<PropertySlot> = properties.into_iter().map(PropertySlot::new).collect();
        debug!(%element, request = %id, properties = slots.len(), "beginning transition");

        let claims: Vec<(String, bool)> = slots
            .iter()
            .map(|s| {
                let begin = s
                    .descriptor
                    .begin_from_current_value()
                    .unwrap_or(begin_from_current_value);
                (s.css().to_string(), begin)
            })
            .collect();
        let carried = self.finish_transitioning_properties_if_exist(element, id, &claims)?;

        // Resolve every endpoint before the first write; writing one property
        // can change the computed value of another. A property continuing from
        // an interrupted transition starts at the captured value.
        for slot in &mut slots {
            let css = slot.css().to_string();
            if let Some(value) = carried.get(&css) {
                slot.from = Some(value.clone());
            } else if slot.from.is_none() {
                slot.from = Some(StyleValue::Text(self.surface.computed_style(element, &css)));
            }
            if slot.to.is_none() {
                slot.to = Some(StyleValue::Text(self.surface.computed_style(element, &css)));
            }
        }

        let mut queued = Vec::new();
        for (index, slot) in slots.iter_mut().enumerate() {
            let dom = slot.descriptor.dom_property();
            if slot.from == slot.to {
                let value = slot.to.as_ref().map(StyleValue::to_css).unwrap_or_default();
                self.surface.set_style(element, dom, &value);
                slot.phase = PropertyPhase::Finished;
                trace!(%element, request = %id, property = slot.css(), "trivial property");
                self.events.push(TransitionEvent::Ended {
                    request_id: id,
                    element,
                    property: slot.css().to_string(),
                });
                if let Some(callback) = slot.on_end.take() {
                    self.queue.schedule(Task::PropertyEnd {
                        element,
                        callback,
                        finished: true,
                    });
                }
            } else {
                let value = slot.from.as_ref().map(StyleValue::to_css).unwrap_or_default();
                self.surface.set_style(element, dom, &value);
                slot.phase = PropertyPhase::Queued;
                queued.push(index);
            }
        }

        self.requests.insert(
            id,
            RequestState {
                element,
                phase: RequestPhase::Initializing,
                slots,
                queued,
                active: Vec::new(),
                all_properties_finished: true,
                listening: false,
                duration,
                delay,
                timing_function,
                on_after_change_style,
                on_transition_end,
            },
        );
        self.registry.attach(element, id);

        if let Some(callback) = on_before_change_style {
            callback(self, element);
        }

        // A submission from the callback above may already have drained us.
        let Some(state) = self.requests.get_mut(&id) else {
            return Ok(id);
        };

        if state.queued.is_empty() {
            let after = state.on_after_change_style.take();
            if let Some(callback) = after {
                callback(self, element);
            }
            self.settle_request(id);
            return Ok(id);
        }

        // Commit the `from` styles so the `to` writes start a transition.
        self.surface.force_layout_flush(element);
        state.listening = true;
        state.phase = RequestPhase::AwaitingStart;
        self.surface.add_completion_listener(element, id);
        self.queue.schedule(Task::Continue { request: id });
        Ok(id)
    }

    /// Forcibly finish every property named in `claims` that another request
    /// on `element` still owns. Returns the current values captured for
    /// properties that continue from where they were interrupted.
    ///
    /// Every claim is checked against the native lists before anything
    /// changes, so an invariant violation leaves the older requests intact.
    fn finish_transitioning_properties_if_exist(
        &mut self,
        element: ElementId,
        claimant: RequestId,
        claims: &[(String, bool)],
    ) -> Result<HashMap<String, StyleValue>> {
        let interrupted = self.claimed_properties(element, claimant, claims)?;

        let mut carried = HashMap::new();
        for claim in interrupted {
            let ClaimedProperty {
                owner,
                index,
                css,
                dom,
                was_active,
                current,
            } = claim;

            if was_active {
                let mut values = TransitionValues::read(self.surface.as_ref(), element);
                values.remove(&css);
                values.write(self.surface.as_mut(), element);
            }
            if let Some(value) = &current {
                self.surface.set_style(element, &dom, &value.to_css());
                carried.insert(css.clone(), value.clone());
            }

            let Some(state) = self.requests.get_mut(&owner) else {
                continue;
            };
            state.active.retain(|i| *i != index);
            state.queued.retain(|i| *i != index);
            state.all_properties_finished = false;
            let slot = &mut state.slots[index];
            slot.phase = PropertyPhase::Finished;
            if let Some(value) = current {
                slot.from = Some(value);
            }
            let on_end = slot.on_end.take();
            let drained = state.is_drained();

            debug!(
                %element,
                request = %owner,
                by = %claimant,
                property = css.as_str(),
                was_active,
                "property interrupted"
            );
            self.events.push(TransitionEvent::Interrupted {
                request_id: owner,
                element,
                property: css,
                by: claimant,
            });
            if let Some(callback) = on_end {
                self.queue.schedule(Task::PropertyEnd {
                    element,
                    callback,
                    finished: false,
                });
            }
            if drained {
                self.settle_request(owner);
            }
        }

        Ok(carried)
    }

    /// Read-only pass over the older requests on `element`: collect each
    /// claimed property they still own, capturing current values and
    /// checking active ones against the native lists.
    fn claimed_properties(
        &self,
        element: ElementId,
        claimant: RequestId,
        claims: &[(String, bool)],
    ) -> Result<Vec<ClaimedProperty>> {
        let mut interrupted = Vec::new();
        let mut listed: Option<TransitionValues> = None;

        for owner in self.registry.requests_on(element) {
            if *owner == claimant {
                continue;
            }
            let Some(state) = self.requests.get(owner) else {
                continue;
            };
            for (css, begin_from_current) in claims {
                let Some(index) = state.slot_index(css) else {
                    continue;
                };
                let was_active = state.active.contains(&index);
                if !was_active && !state.queued.contains(&index) {
                    continue;
                }
                if was_active {
                    let values = listed.get_or_insert_with(|| {
                        TransitionValues::read(self.surface.as_ref(), element)
                    });
                    if !values.contains(css) {
                        return Err(TransitionError::invariant(format!(
                            "{css} is active on {owner} but missing from the transition lists of {element}"
                        )));
                    }
                }
                interrupted.push(ClaimedProperty {
                    owner: *owner,
                    index,
                    css: css.clone(),
                    dom: state.slots[index].descriptor.dom_property().to_string(),
                    was_active,
                    current: begin_from_current
                        .then(|| StyleValue::Text(self.surface.computed_style(element, css))),
                });
            }
        }

        Ok(interrupted)
    }

    /// Tick continuation: merge queued properties into the native lists and
    /// write their `to` values.
    fn continue_request(&mut self, id: RequestId) {
        let Some(state) = self.requests.get_mut(&id) else {
            trace!(request = %id, "request settled before its tick");
            return;
        };
        if state.queued.is_empty() {
            trace!(request = %id, "every queued property was claimed before the tick");
            return;
        }

        let element = state.element;
        let mut values = TransitionValues::read(self.surface.as_ref(), element);
        let started = std::mem::take(&mut state.queued);
        let mut writes = Vec::with_capacity(started.len());
        for &index in &started {
            let slot = &mut state.slots[index];
            values.push(TransitionEntry {
                property: slot.descriptor.css_property().to_string(),
                duration: slot.descriptor.duration().unwrap_or(&state.duration).to_string(),
                delay: slot.descriptor.delay().unwrap_or(&state.delay).to_string(),
                timing_function: slot
                    .descriptor
                    .timing_function()
                    .unwrap_or(state.timing_function.as_str())
                    .to_string(),
            });
            slot.phase = PropertyPhase::Active;
            writes.push((
                slot.descriptor.css_property().to_string(),
                slot.descriptor.dom_property().to_string(),
                slot.to.as_ref().map(StyleValue::to_css).unwrap_or_default(),
            ));
        }
        state.active.extend(started);
        state.phase = RequestPhase::Running;
        let after = state.on_after_change_style.take();

        values.write(self.surface.as_mut(), element);
        for (css, dom, value) in writes {
            self.surface.set_style(element, &dom, &value);
            self.events.push(TransitionEvent::Started {
                request_id: id,
                element,
                property: css,
            });
        }
        debug!(
            %element,
            request = %id,
            transitions = values.len(),
            "native transitions registered"
        );

        if let Some(callback) = after {
            callback(self, element);
        }
    }

    /// Deliver a native completion notification.
    ///
    /// Returns `Ok(false)` when the notification bubbled from a descendant or
    /// names a property no request on the element is running.
    pub fn handle_transition_end(&mut self, event: &TransitionEndEvent) -> Result<bool> {
        if !event.is_targeted() {
            trace!(
                origin = %event.target,
                current = %event.current,
                "ignoring bubbled transition end"
            );
            return Ok(false);
        }
        let element = event.current;
        let property = event.property_name.as_str();

        let found = self.registry.requests_on(element).iter().find_map(|id| {
            let state = self.requests.get(id)?;
            let index = state.slot_index(property)?;
            (state.listening && state.active.contains(&index)).then_some((*id, index))
        });
        let Some((owner, index)) = found else {
            trace!(%element, property, "no running request for transition end");
            return Ok(false);
        };

        let mut values = TransitionValues::read(self.surface.as_ref(), element);
        if values.remove(property).is_none() {
            return Err(TransitionError::invariant(format!(
                "transition end for {property} on {element}, but it is missing from the transition lists"
            )));
        }
        values.write(self.surface.as_mut(), element);

        let Some(state) = self.requests.get_mut(&owner) else {
            return Err(TransitionError::invariant(format!("{owner} vanished mid-notification")));
        };
        state.active.retain(|i| *i != index);
        let slot = &mut state.slots[index];
        slot.phase = PropertyPhase::Finished;
        let on_end = slot.on_end.take();
        let drained = state.is_drained();

        debug!(%element, request = %owner, property, "property finished");
        self.events.push(TransitionEvent::Ended {
            request_id: owner,
            element,
            property: property.to_string(),
        });
        if let Some(callback) = on_end {
            self.queue.schedule(Task::PropertyEnd {
                element,
                callback,
                finished: true,
            });
        }
        if drained {
            self.settle_request(owner);
        }
        Ok(true)
    }

    /// Detach a drained request and schedule its remaining callbacks.
    fn settle_request(&mut self, id: RequestId) {
        let Some(mut state) = self.requests.remove(&id) else {
            return;
        };
        let element = state.element;
        let all_finished = state.all_properties_finished;
        self.registry.detach(element, id);
        if state.listening {
            self.surface.remove_completion_listener(element, id);
        }

        debug!(%element, request = %id, all_finished, "request settled");
        self.events.push(TransitionEvent::Settled {
            request_id: id,
            element,
            all_finished,
        });
        if let Some(callback) = state.on_after_change_style.take() {
            self.queue.schedule(Task::AfterChangeStyle { element, callback });
        }
        if let Some(callback) = state.on_transition_end.take() {
            self.queue.schedule(Task::RequestEnd {
                element,
                callback,
                all_finished,
            });
        }
    }

    /// Run one scheduler turn. Returns the number of tasks run.
    pub fn run_turn(&mut self) -> usize {
        let tasks = self.queue.take_turn();
        let count = tasks.len();
        for task in tasks {
            self.run_task(task);
        }
        count
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Continue { request } => self.continue_request(request),
            Task::PropertyEnd {
                element,
                callback,
                finished,
            } => callback(self, element, finished),
            Task::AfterChangeStyle { element, callback } => callback(self, element),
            Task::RequestEnd {
                element,
                callback,
                all_finished,
            } => callback(self, element, all_finished),
        }
    }

    /// Run turns until nothing is scheduled, up to the configured turn limit.
    /// Returns the number of turns run.
    pub fn run_until_idle(&mut self) -> usize {
        let mut turns = 0;
        while !self.queue.is_empty() {
            if turns >= self.max_turns {
                warn!(
                    max_turns = self.max_turns,
                    pending = self.queue.len(),
                    "turn limit reached with work pending"
                );
                break;
            }
            self.run_turn();
            turns += 1;
        }
        turns
    }

    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Total turns run by this engine.
    pub fn turns_elapsed(&self) -> u64 {
        self.queue.turns()
    }

    /// Tear down everything attached to `element` without firing callbacks.
    /// Returns the number of requests dropped.
    pub fn release_element(&mut self, element: ElementId) -> usize {
        let released = self.registry.release(element);
        for id in &released {
            if let Some(state) = self.requests.remove(id) {
                if state.listening {
                    self.surface.remove_completion_listener(element, *id);
                }
            }
        }
        debug!(%element, requests = released.len(), "element released");
        released.len()
    }

    /// Phase of a request. Requests that settled (or were never issued by
    /// this engine) report `Settled`.
    pub fn request_phase(&self, id: RequestId) -> RequestPhase {
        self.requests
            .get(&id)
            .map_or(RequestPhase::Settled, |s| s.phase)
    }

    /// Phase of one property of a live request.
    pub fn property_phase(&self, id: RequestId, css_property: &str) -> Option<PropertyPhase> {
        let state = self.requests.get(&id)?;
        state.slot_index(css_property).map(|i| state.slots[i].phase)
    }

    /// Live requests attached to `element`, oldest first.
    pub fn requests_on(&self, element: ElementId) -> &[RequestId] {
        self.registry.requests_on(element)
    }

    /// The request currently owning `css_property` on `element`, if any.
    pub fn claimant(&self, element: ElementId, css_property: &str) -> Option<RequestId> {
        self.registry
            .requests_on(element)
            .iter()
            .copied()
            .find(|id| self.requests.get(id).is_some_and(|s| s.claims(css_property)))
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        self.events.drain().collect()
    }
}
