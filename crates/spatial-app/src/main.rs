//! Spatial navigation demo.
//!
//! Builds an in-memory article page, focuses its intro paragraph, and
//! replays the key names given on the command line (browser key names such
//! as `ArrowDown`, `w`, `Escape`). Each cue the navigator would play is
//! printed instead. Pass `--settings <file>` (TOML, or a JSON export) to
//! load navigation settings, or set `SPATIAL_SETTINGS`.

mod sample_page;

use std::path::PathBuf;

use anyhow::{Context, Result};

use spatial_nav::{Cue, CueKind, FeedbackSink, NavOutcome, NavigationController, Page};
use spatial_types::config::NavSettings;
use spatial_types::error::SpatialError;

/// Prints every cue to stdout along with how a panner would render it.
struct PrintSink;

impl FeedbackSink for PrintSink {
    fn play(&mut self, cue: Cue) {
        let (px, py, pz) = cue.pan_position();
        let render = format!(
            "pan ({px:+.1}, {py:+.1}, {pz:.0}) detune {:+.0}c gain {:.2}",
            cue.detune_cents(),
            cue.gain()
        );
        match cue.kind {
            CueKind::Speech { text, voice_speed } => {
                println!("  speak  {render} @{voice_speed}wpm  \"{text}\"");
            },
            CueKind::ScrollBeep => println!("  beep   {render}"),
            CueKind::Click => println!("  click  {render}"),
        }
    }

    fn stop_all(&mut self) {
        println!("  (silence)");
    }
}

const DEFAULT_KEYS: &[&str] = &[
    "ArrowDown",
    "ArrowDown",
    "ArrowRight",
    "ArrowDown",
    "ArrowDown",
    "ArrowDown",
    "ArrowDown",
    "ArrowUp",
    "Escape",
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut settings_path = std::env::var("SPATIAL_SETTINGS").ok().map(PathBuf::from);
    let mut keys = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--settings" {
            let path = args.next().context("--settings needs a file path")?;
            settings_path = Some(PathBuf::from(path));
        } else {
            keys.push(arg);
        }
    }
    if keys.is_empty() {
        keys = DEFAULT_KEYS.iter().map(|k| k.to_string()).collect();
    }

    let settings = match &settings_path {
        Some(path) => NavSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => NavSettings::default(),
    };
    log::info!(
        "Starting spatial demo ({:?}, {} keys)",
        settings.navigation_type,
        keys.len()
    );

    let sample_page::SamplePage { doc: mut page, start } = sample_page::build();
    let settle_ms = settings.tuning.settle_delay_ms;
    let mut nav = NavigationController::new(settings, PrintSink);

    if nav.engine().oracle().readout(&page, start).is_empty() {
        return Err(SpatialError::Page(format!("start node {start} has nothing to read")).into());
    }

    println!("focus node {start}");
    page.focus(start);
    nav.on_focus(&page, start);

    for key in &keys {
        println!("{key}");
        let mut outcome = nav.handle_key(&mut page, key);
        // Drive scroll retries the way a frame loop would.
        while let NavOutcome::Scrolled { target, delta, .. } = outcome {
            println!("  scrolled {target:?} by {delta}");
            outcome = match nav.tick(&mut page, settle_ms) {
                Some(next) => next,
                None => break,
            };
        }
        if !outcome.handled() {
            println!("  (ignored)");
            continue;
        }
        match outcome {
            NavOutcome::Focused(node) => println!("  -> node {node}"),
            NavOutcome::NoTarget => println!("  -> nothing {key}"),
            _ => {},
        }
    }

    log::info!("Final focus: {:?}", page.focused());
    Ok(())
}
