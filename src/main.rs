use anyhow::Result;
use glide_config::GlideConfig;
use glide_engine::{
    ElementId, MemorySurface, PropertyArg, PropertyRecord, PropertySpec, RequestSpec,
    TransitionEndEvent, TransitionEngine, TransitionEvent, TransitionOptions,
};

/// Demo scenarios, selected with `GLIDE_SCENE` or `--scene=<name>`.
#[derive(Debug, Clone, Copy)]
enum SceneKind {
    Fade,
    Interrupt,
    Chain,
}

impl SceneKind {
    fn from_env() -> Self {
        let scene_env = std::env::var("GLIDE_SCENE").ok();
        let arg = std::env::args().find_map(|a| a.strip_prefix("--scene=").map(str::to_string));
        match arg.or(scene_env).as_deref() {
            Some("interrupt") => Self::Interrupt,
            Some("chain") => Self::Chain,
            _ => Self::Fade,
        }
    }
}

fn main() -> Result<()> {
    let config = GlideConfig::load();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = &config.logging.filter {
        logger.parse_filters(filter);
    }
    logger.init();

    let surface = MemorySurface::new();
    let element = surface.create_element();
    let mut engine = TransitionEngine::with_config(surface.clone(), &config);

    let scene = SceneKind::from_env();
    log::info!("running {scene:?} scene on {element}");
    match scene {
        SceneKind::Fade => fade(&mut engine, element)?,
        SceneKind::Interrupt => interrupt(&mut engine, &surface, element)?,
        SceneKind::Chain => chain(&mut engine, element)?,
    }

    drive(&mut engine, &surface, element)?;

    for event in engine.drain_events() {
        match event {
            TransitionEvent::Interrupted { property, by, .. } => {
                log::info!("{property} taken over by {by}");
            }
            TransitionEvent::Settled {
                request_id,
                all_finished,
                ..
            } => {
                log::info!("{request_id} settled (all finished: {all_finished})");
            }
            other => log::debug!("{other:?}"),
        }
    }
    Ok(())
}

/// Stand in for the native engine: run a turn, then report every listed
/// transition as finished, until nothing is left.
fn drive(engine: &mut TransitionEngine, surface: &MemorySurface, element: ElementId) -> Result<()> {
    loop {
        engine.run_until_idle();
        let running = surface
            .inline(element, "transition-property")
            .unwrap_or_default();
        if running.is_empty() {
            break;
        }
        for property in running.split(',').map(str::trim) {
            engine.handle_transition_end(&TransitionEndEvent::new(element, property))?;
        }
    }
    Ok(())
}

fn fade(engine: &mut TransitionEngine, element: ElementId) -> Result<()> {
    engine.submit(
        element,
        RequestSpec::Sequence(vec![
            PropertySpec::Positional(vec!["opacity".into(), 0.into(), 1.into(), "300ms".into()]),
            PropertySpec::Record(
                PropertyRecord::new("transform")
                    .with_from("translateY(8px)")
                    .with_to("none")
                    .with_timing_function("ease-out"),
            ),
        ]),
        TransitionOptions::new()
            .on_after_change_style(|_, el| log::info!("{el}: target styles written"))
            .on_transition_end(|_, el, all_finished| {
                log::info!("{el}: fade done (all finished: {all_finished})");
            }),
    )?;
    Ok(())
}

fn interrupt(
    engine: &mut TransitionEngine,
    surface: &MemorySurface,
    element: ElementId,
) -> Result<()> {
    engine.submit(
        element,
        PropertySpec::Positional(vec![
            "width".into(),
            "10px".into(),
            "200px".into(),
            "1s".into(),
            PropertyArg::callback(|_, el, finished| {
                log::info!("{el}: first width transition finished={finished}");
            }),
        ]),
        TransitionOptions::new(),
    )?;
    engine.run_turn();

    // Halfway through, the width is somewhere in between.
    surface.set_animated_value(element, "width", "105px");
    engine.submit(
        element,
        PropertySpec::Positional(vec![
            "width".into(),
            PropertyArg::Absent,
            "50px".into(),
            "250ms".into(),
        ]),
        TransitionOptions::new().on_transition_end(|_, el, all_finished| {
            log::info!("{el}: width settled at 50px (all finished: {all_finished})");
        }),
    )?;
    Ok(())
}

fn chain(engine: &mut TransitionEngine, element: ElementId) -> Result<()> {
    fn pulse(engine: &mut TransitionEngine, element: ElementId, remaining: u32) {
        if remaining == 0 {
            return;
        }
        let (from, to) = if remaining % 2 == 0 { (1, 0) } else { (0, 1) };
        let result = engine.submit(
            element,
            PropertySpec::Positional(vec![
                "opacity".into(),
                from.into(),
                to.into(),
                "150ms".into(),
            ]),
            TransitionOptions::new().on_transition_end(move |engine, el, _| {
                log::info!("{el}: pulse {remaining} done");
                pulse(engine, el, remaining - 1);
            }),
        );
        if let Err(e) = result {
            log::error!("{element}: pulse failed: {e}");
        }
    }

    pulse(engine, element, 4);
    Ok(())
}
