use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use glide_config::GlideConfig;
use glide_engine::{
    ElementId, MemorySurface, PropertyArg, PropertyPhase, PropertyRecord, PropertySpec,
    RequestId, RequestPhase, RequestSpec, StyleSurface, TransitionEndEvent, TransitionEngine,
    TransitionError, TransitionEvent, TransitionOptions,
};
use serde::Deserialize;

/// Shared record of callback invocations, in firing order.
#[derive(Clone, Default)]
struct Log(Rc<RefCell<Vec<String>>>);

impl Log {
    fn push(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn property(&self, label: &'static str) -> PropertyArg {
        let log = self.clone();
        PropertyArg::callback(move |_, _, finished| log.push(format!("{label} {finished}")))
    }

    fn completion(
        &self,
        label: &'static str,
    ) -> impl FnOnce(&mut TransitionEngine, ElementId, bool) + 'static {
        let log = self.clone();
        move |_: &mut TransitionEngine, _: ElementId, finished: bool| {
            log.push(format!("{label} {finished}"))
        }
    }

    fn style_change(
        &self,
        label: &'static str,
    ) -> impl FnOnce(&mut TransitionEngine, ElementId) + 'static {
        let log = self.clone();
        move |_: &mut TransitionEngine, _: ElementId| log.push(label)
    }
}

fn setup() -> (MemorySurface, ElementId, TransitionEngine) {
    let surface = MemorySurface::new();
    let element = surface.create_element();
    let engine = TransitionEngine::new(surface.clone());
    (surface, element, engine)
}

/// The four native lists as (property, duration, delay, timing function).
fn lists(surface: &MemorySurface, element: ElementId) -> [Option<String>; 4] {
    [
        surface.inline(element, "transition-property"),
        surface.inline(element, "transition-duration"),
        surface.inline(element, "transition-delay"),
        surface.inline(element, "transition-timing-function"),
    ]
}

fn declared(values: [&str; 4]) -> [Option<String>; 4] {
    values.map(|v| Some(v.to_string()))
}

const CLEARED: [Option<String>; 4] = [None, None, None, None];

#[test]
fn opacity_transition_runs_to_completion() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let id = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "opacity".into(),
            0.into(),
            1.into(),
            "300ms".into(),
            log.property("opacity"),
        ]),
        TransitionOptions::new()
            .on_before_change_style(log.style_change("before"))
            .on_after_change_style(log.style_change("after"))
            .on_transition_end(log.completion("batch")),
    )?;

    assert_eq!(log.entries(), ["before"]);
    assert_eq!(engine.request_phase(id), RequestPhase::AwaitingStart);
    assert_eq!(lists(&surface, el), CLEARED);

    engine.run_turn();
    assert_eq!(log.entries(), ["before", "after"]);
    assert_eq!(surface.writes_for(el, "opacity"), ["0", "1"]);
    assert_eq!(lists(&surface, el), declared(["opacity", "300ms", "0s", "ease"]));
    assert_eq!(surface.listeners(el), vec![id]);

    assert!(engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?);
    assert_eq!(lists(&surface, el), CLEARED);
    assert!(surface.listeners(el).is_empty());
    // Completion callbacks never run inside the notification.
    assert_eq!(log.entries(), ["before", "after"]);

    engine.run_turn();
    assert_eq!(log.entries(), ["before", "after", "opacity true", "batch true"]);
    assert!(!engine.has_pending_work());

    let kinds: Vec<_> = engine
        .drain_events()
        .into_iter()
        .map(|e| match e {
            TransitionEvent::Started { .. } => "started",
            TransitionEvent::Ended { .. } => "ended",
            TransitionEvent::Interrupted { .. } => "interrupted",
            TransitionEvent::Settled { .. } => "settled",
        })
        .collect();
    assert_eq!(kinds, ["started", "ended", "settled"]);
    Ok(())
}

#[test]
fn trivial_request_never_touches_native_lists() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let id = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "opacity".into(),
            1.into(),
            1.into(),
            log.property("opacity"),
        ]),
        TransitionOptions::new()
            .on_after_change_style(log.style_change("after"))
            .on_transition_end(log.completion("batch")),
    )?;

    assert_eq!(engine.request_phase(id), RequestPhase::Settled);
    assert_eq!(log.entries(), ["after"]);
    assert_eq!(surface.writes_for(el, "opacity"), ["1"]);
    assert_eq!(lists(&surface, el), CLEARED);
    assert_eq!(surface.listener_attachments(el), 0);
    assert_eq!(surface.flush_count(el), 0);

    engine.run_turn();
    assert_eq!(log.entries(), ["after", "opacity true", "batch true"]);
    Ok(())
}

#[test]
fn trivial_property_finishes_before_its_siblings() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let id = engine.submit(
        el,
        RequestSpec::Sequence(vec![
            PropertySpec::Positional(vec![
                "opacity".into(),
                0.into(),
                1.into(),
                log.property("opacity"),
            ]),
            PropertySpec::Positional(vec![
                "width".into(),
                "5px".into(),
                "5px".into(),
                log.property("width"),
            ]),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("batch")),
    )?;

    assert_eq!(engine.property_phase(id, "width"), Some(PropertyPhase::Finished));
    assert_eq!(engine.property_phase(id, "opacity"), Some(PropertyPhase::Queued));

    engine.run_turn();
    assert_eq!(log.entries(), ["width true"]);
    assert_eq!(surface.inline(el, "transition-property").as_deref(), Some("opacity"));

    engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?;
    engine.run_turn();
    assert_eq!(log.entries(), ["width true", "opacity true", "batch true"]);
    Ok(())
}

#[test]
fn interruption_mid_flight_continues_from_current_value() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let a = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "width".into(),
            "10px".into(),
            "100px".into(),
            "1s".into(),
            log.property("a.width"),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("a.batch")),
    )?;
    engine.run_turn();
    surface.set_animated_value(el, "width", "40px");

    let b = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "width".into(),
            PropertyArg::Absent,
            "0px".into(),
            log.property("b.width"),
        ]),
        TransitionOptions::new()
            .on_after_change_style(log.style_change("b.after"))
            .on_transition_end(log.completion("b.batch")),
    )?;

    assert_eq!(engine.request_phase(a), RequestPhase::Settled);
    assert_eq!(engine.claimant(el, "width"), Some(b));
    assert_eq!(engine.requests_on(el), [b]);
    // from, to, pinned current value, then b's from.
    assert_eq!(surface.writes_for(el, "width"), ["10px", "100px", "40px", "40px"]);
    assert_eq!(lists(&surface, el), CLEARED);
    assert!(log.entries().is_empty());

    engine.run_turn();
    assert_eq!(log.entries(), ["a.width false", "a.batch false", "b.after"]);
    assert_eq!(surface.inline(el, "width").as_deref(), Some("0px"));
    assert_eq!(surface.inline(el, "transition-property").as_deref(), Some("width"));

    engine.handle_transition_end(&TransitionEndEvent::new(el, "width"))?;
    engine.run_turn();
    assert_eq!(
        log.entries(),
        ["a.width false", "a.batch false", "b.after", "b.width true", "b.batch true"]
    );

    let interrupted = engine
        .events()
        .iter()
        .find(|e| matches!(e, TransitionEvent::Interrupted { .. }))
        .cloned();
    assert_eq!(
        interrupted,
        Some(TransitionEvent::Interrupted {
            request_id: a,
            element: el,
            property: "width".to_string(),
            by: b,
        })
    );
    Ok(())
}

#[test]
fn interruption_in_the_same_tick_cancels_the_pending_start() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let a = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "width".into(),
            "10px".into(),
            "100px".into(),
            "2s".into(),
            log.property("a.width"),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("a.batch")),
    )?;
    let b = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "width".into(),
            PropertyArg::Absent,
            "50px".into(),
            "250ms".into(),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("b.batch")),
    )?;
    assert_eq!(engine.request_phase(a), RequestPhase::Settled);
    assert_eq!(engine.request_phase(b), RequestPhase::AwaitingStart);

    engine.run_turn();
    assert_eq!(log.entries(), ["a.width false", "a.batch false"]);
    assert_eq!(lists(&surface, el), declared(["width", "250ms", "0s", "ease"]));
    assert_eq!(surface.writes_for(el, "width"), ["10px", "10px", "10px", "50px"]);

    engine.handle_transition_end(&TransitionEndEvent::new(el, "width"))?;
    engine.run_turn();
    assert_eq!(log.entries(), ["a.width false", "a.batch false", "b.batch true"]);
    Ok(())
}

/// Starts width 10px -> 100px and leaves it on screen at 40px.
fn width_halfway(
    surface: &MemorySurface,
    el: ElementId,
    engine: &mut TransitionEngine,
) -> Result<()> {
    engine.submit(
        el,
        PropertySpec::Positional(vec!["width".into(), "10px".into(), "100px".into()]),
        TransitionOptions::new(),
    )?;
    engine.run_turn();
    surface.set_animated_value(el, "width", "40px");
    Ok(())
}

#[test]
fn current_value_overrides_explicit_from() -> Result<()> {
    let (surface, el, mut engine) = setup();
    width_halfway(&surface, el, &mut engine)?;

    let b = engine.submit(
        el,
        PropertySpec::Record(
            PropertyRecord::new("width")
                .with_from("5px")
                .with_to("30px")
                .with_begin_from_current_value(true),
        ),
        TransitionOptions::new(),
    )?;
    // Pinned, then written again as the new starting point.
    assert_eq!(surface.writes_for(el, "width"), ["10px", "100px", "40px", "40px"]);

    engine.run_turn();
    assert_eq!(surface.inline(el, "width").as_deref(), Some("30px"));
    assert_eq!(engine.claimant(el, "width"), Some(b));
    Ok(())
}

#[test]
fn property_flag_continues_despite_request_opt_out() -> Result<()> {
    let (surface, el, mut engine) = setup();
    width_halfway(&surface, el, &mut engine)?;

    engine.submit(
        el,
        PropertySpec::Record(
            PropertyRecord::new("width")
                .with_from("5px")
                .with_to("30px")
                .with_begin_from_current_value(true),
        ),
        TransitionOptions::new().with_begin_from_current_value(false),
    )?;
    assert_eq!(surface.writes_for(el, "width"), ["10px", "100px", "40px", "40px"]);
    Ok(())
}

#[test]
fn property_opt_out_restarts_despite_request_flag() -> Result<()> {
    let (surface, el, mut engine) = setup();
    width_halfway(&surface, el, &mut engine)?;

    engine.submit(
        el,
        PropertySpec::Record(
            PropertyRecord::new("width")
                .with_from("5px")
                .with_to("30px")
                .with_begin_from_current_value(false),
        ),
        TransitionOptions::new().with_begin_from_current_value(true),
    )?;
    // No pin: the explicit from is the only write.
    assert_eq!(surface.writes_for(el, "width"), ["10px", "100px", "5px"]);

    engine.submit(
        el,
        PropertySpec::Positional(vec!["width".into(), "0px".into(), "20px".into()]),
        TransitionOptions::new().with_begin_from_current_value(false),
    )?;
    assert_eq!(surface.writes_for(el, "width"), ["10px", "100px", "5px", "0px"]);
    Ok(())
}

#[test]
fn failed_claim_leaves_older_request_untouched() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let a = engine.submit(
        el,
        RequestSpec::Sequence(vec![
            PropertySpec::Positional(vec![
                "opacity".into(),
                0.into(),
                1.into(),
                log.property("a.opacity"),
            ]),
            PropertySpec::Positional(vec![
                "width".into(),
                "10px".into(),
                "100px".into(),
                log.property("a.width"),
            ]),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("a")),
    )?;
    engine.run_turn();
    engine.drain_events();

    // Width vanishes from the property list behind the engine's back.
    engine.surface_mut().set_style(el, "transitionProperty", "opacity");
    surface.clear_writes();

    let err = engine
        .submit(
            el,
            RequestSpec::Sequence(vec![
                PropertySpec::Positional(vec!["opacity".into(), PropertyArg::Absent, 0.into()]),
                PropertySpec::Positional(vec!["width".into(), PropertyArg::Absent, "0px".into()]),
            ]),
            TransitionOptions::new(),
        )
        .unwrap_err();
    assert!(matches!(err, TransitionError::InvariantViolation(_)));

    assert_eq!(engine.property_phase(a, "opacity"), Some(PropertyPhase::Active));
    assert_eq!(engine.claimant(el, "opacity"), Some(a));
    assert_eq!(engine.claimant(el, "width"), Some(a));
    assert_eq!(engine.requests_on(el), [a]);
    assert_eq!(surface.inline(el, "transition-property").as_deref(), Some("opacity"));
    assert!(surface.writes().is_empty());
    assert!(engine.drain_events().is_empty());

    engine.run_until_idle();
    assert!(log.entries().is_empty());
    Ok(())
}

#[test]
fn disjoint_requests_share_the_native_lists() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();

    let a = engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into(), "300ms".into()]),
        TransitionOptions::new().on_transition_end(log.completion("a")),
    )?;
    let b = engine.submit(
        el,
        PropertySpec::Positional(vec![
            "width".into(),
            "10px".into(),
            "20px".into(),
            "1s".into(),
            "linear".into(),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("b")),
    )?;
    engine.run_turn();

    assert_eq!(engine.requests_on(el), [a, b]);
    assert_eq!(
        lists(&surface, el),
        declared(["opacity, width", "300ms, 1s", "0s, 0s", "ease, linear"])
    );

    engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?;
    assert_eq!(lists(&surface, el), declared(["width", "1s", "0s", "linear"]));
    assert_eq!(engine.request_phase(a), RequestPhase::Settled);
    assert_eq!(engine.request_phase(b), RequestPhase::Running);

    engine.handle_transition_end(&TransitionEndEvent::new(el, "width"))?;
    assert_eq!(lists(&surface, el), CLEARED);
    engine.run_turn();
    assert_eq!(log.entries(), ["a true", "b true"]);
    Ok(())
}

#[test]
fn foreign_list_entries_are_preserved() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let mut host = surface.clone();
    host.set_style(el, "transitionProperty", "color, transform");
    host.set_style(el, "transitionDuration", "2s");
    host.set_style(el, "transitionTimingFunction", "cubic-bezier(0.4, 0, 0.2, 1)");

    engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into(), "300ms".into()]),
        TransitionOptions::new(),
    )?;
    engine.run_turn();
    assert_eq!(
        lists(&surface, el),
        declared([
            "color, transform, opacity",
            "2s, 2s, 300ms",
            "0s, 0s, 0s",
            "cubic-bezier(0.4, 0, 0.2, 1), cubic-bezier(0.4, 0, 0.2, 1), ease",
        ])
    );

    engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?;
    assert_eq!(
        lists(&surface, el),
        declared([
            "color, transform",
            "2s, 2s",
            "0s, 0s",
            "cubic-bezier(0.4, 0, 0.2, 1), cubic-bezier(0.4, 0, 0.2, 1)",
        ])
    );

    // Foreign properties finishing are not ours to handle.
    assert!(!engine.handle_transition_end(&TransitionEndEvent::new(el, "color"))?);
    Ok(())
}

#[test]
fn bubbled_notifications_are_ignored() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let child = surface.create_element();
    let id = engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into()]),
        TransitionOptions::new(),
    )?;
    engine.run_turn();

    assert!(!engine.handle_transition_end(&TransitionEndEvent::bubbled(child, el, "opacity"))?);
    assert_eq!(engine.property_phase(id, "opacity"), Some(PropertyPhase::Active));
    assert_eq!(surface.inline(el, "transition-property").as_deref(), Some("opacity"));
    Ok(())
}

#[test]
fn missing_list_entry_is_an_invariant_violation() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let a = engine.submit(
        el,
        PropertySpec::Positional(vec!["width".into(), "10px".into(), "100px".into()]),
        TransitionOptions::new(),
    )?;
    engine.run_turn();

    let mut host = surface.clone();
    host.set_style(el, "transitionProperty", "");

    let err = engine
        .submit(
            el,
            PropertySpec::Positional(vec!["width".into(), PropertyArg::Absent, "0px".into()]),
            TransitionOptions::new(),
        )
        .unwrap_err();
    assert!(matches!(err, TransitionError::InvariantViolation(_)));
    assert_eq!(engine.claimant(el, "width"), Some(a));
    assert_eq!(engine.requests_on(el), [a]);
    Ok(())
}

#[test]
fn invalid_submissions_leave_no_trace() {
    let (surface, el, mut engine) = setup();

    let err = engine
        .submit(el, RequestSpec::Sequence(Vec::new()), TransitionOptions::new())
        .unwrap_err();
    assert_eq!(err, TransitionError::MissingProperties);

    let err = engine
        .submit(
            el,
            PropertySpec::Positional(vec!["opacity".into(), 0.into()]),
            TransitionOptions::new(),
        )
        .unwrap_err();
    assert!(matches!(err, TransitionError::InvalidArguments(_)));

    assert!(engine.requests_on(el).is_empty());
    assert!(surface.writes().is_empty());
    assert!(!engine.has_pending_work());
}

#[test]
fn before_change_callback_may_claim_the_same_property() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();
    let nested: Rc<Cell<Option<RequestId>>> = Rc::default();

    let slot = nested.clone();
    let a = engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into()]),
        TransitionOptions::new()
            .on_before_change_style(move |engine, el| {
                let id = engine
                    .submit(
                        el,
                        PropertySpec::Positional(vec!["opacity".into(), 0.5.into(), 0.into()]),
                        TransitionOptions::new(),
                    )
                    .ok();
                slot.set(id);
            })
            .on_transition_end(log.completion("a")),
    )?;

    let b = nested.get().expect("nested submission succeeded");
    assert_eq!(engine.request_phase(a), RequestPhase::Settled);
    assert_eq!(engine.claimant(el, "opacity"), Some(b));
    assert_eq!(surface.listeners(el), vec![b]);

    engine.run_turn();
    assert_eq!(log.entries(), ["a false"]);
    assert_eq!(surface.inline(el, "opacity").as_deref(), Some("0"));
    Ok(())
}

#[test]
fn completion_callback_may_chain_a_new_request() -> Result<()> {
    let (surface, el, mut engine) = setup();

    engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into()]),
        TransitionOptions::new().on_transition_end(|engine, el, _| {
            let _ = engine.submit(
                el,
                PropertySpec::Positional(vec!["opacity".into(), 1.into(), 0.into()]),
                TransitionOptions::new(),
            );
        }),
    )?;
    engine.run_turn();
    engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?;
    assert_eq!(engine.claimant(el, "opacity"), None);

    engine.run_until_idle();
    let chained = engine.claimant(el, "opacity");
    assert!(chained.is_some());
    assert_eq!(surface.writes_for(el, "opacity"), ["0", "1", "1", "0"]);
    assert_eq!(surface.inline(el, "transition-property").as_deref(), Some("opacity"));
    Ok(())
}

#[test]
fn release_element_drops_everything_silently() -> Result<()> {
    let (surface, el, mut engine) = setup();
    let log = Log::default();
    engine.submit(
        el,
        RequestSpec::Sequence(vec![
            PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into()]),
            PropertySpec::Positional(vec!["width".into(), "1px".into(), "2px".into()]),
        ]),
        TransitionOptions::new().on_transition_end(log.completion("batch")),
    )?;

    assert_eq!(engine.release_element(el), 1);
    assert!(engine.requests_on(el).is_empty());
    assert!(surface.listeners(el).is_empty());

    engine.run_until_idle();
    assert!(log.entries().is_empty());
    assert!(!engine.handle_transition_end(&TransitionEndEvent::new(el, "opacity"))?);
    Ok(())
}

#[derive(Deserialize)]
struct Submission {
    properties: Vec<PropertySpec>,
    #[serde(default)]
    options: TransitionOptions,
}

#[test]
fn json_submission_mixes_both_descriptor_shapes() -> Result<()> {
    let (surface, el, mut engine) = setup();
    surface.set_base_style(el, "background-color", "blue");

    let submission: Submission = serde_json::from_str(
        r#"{
            "properties": [
                ["opacity", 0, 1, "300ms", "linear"],
                {"property": "backgroundColor", "to": "red", "duration": "1s"}
            ],
            "options": {"delay": "50ms"}
        }"#,
    )?;
    let id = engine.submit(el, submission.properties, submission.options)?;
    engine.run_turn();

    assert_eq!(
        lists(&surface, el),
        declared(["opacity, background-color", "300ms, 1s", "50ms, 50ms", "linear, ease"])
    );
    assert_eq!(surface.writes_for(el, "background-color"), ["blue", "red"]);
    assert_eq!(engine.property_phase(id, "background-color"), Some(PropertyPhase::Active));
    Ok(())
}

#[test]
fn toml_submission_uses_records() -> Result<()> {
    let (surface, el, mut engine) = setup();

    let submission: Submission = toml::from_str(
        r#"
            [options]
            duration = "250ms"
            timing_function = "ease-out"

            [[properties]]
            property = "opacity"
            from = 0.0
            to = 1.0
        "#,
    )?;
    engine.submit(el, submission.properties, submission.options)?;
    engine.run_turn();

    assert_eq!(lists(&surface, el), declared(["opacity", "250ms", "0s", "ease-out"]));
    assert_eq!(surface.writes_for(el, "opacity"), ["0", "1"]);
    Ok(())
}

#[test]
fn configured_defaults_apply_to_requests() -> Result<()> {
    let config: GlideConfig = toml::from_str(
        r#"
            [transition]
            duration = "1.5s"
            delay = "100ms"
            timing_function = "ease-in-out"

            [scheduler]
            max_turns = 8
        "#,
    )?;
    let surface = MemorySurface::new();
    let el = surface.create_element();
    let mut engine = TransitionEngine::with_config(surface.clone(), &config);
    assert_eq!(engine.defaults().duration.as_str(), "1.5s");

    engine.submit(
        el,
        PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into(), "200ms".into()]),
        TransitionOptions::new(),
    )?;
    engine.run_until_idle();
    assert_eq!(lists(&surface, el), declared(["opacity", "200ms", "100ms", "ease-in-out"]));
    Ok(())
}
