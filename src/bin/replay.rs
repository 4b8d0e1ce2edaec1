//! Headless dock replay
//!
//! Runs a YAML pointer script through the dock with a synthetic clock and
//! prints one JSON line per step: order, scales, and bounce offset.
//!
//! Usage:
//!   cargo run --bin replay -- --script scripts/drag.yaml
//!   cargo run --bin replay -- --script scripts/drag.yaml --frame-ms 16
//!
//! Script format:
//! ```yaml
//! items: [A, B, C, D, E]
//! container: { x: 0, y: 0, width: 400, height: 80 }
//! layout: { item_size: 64, spacing: 12, padding: 8 }
//! events:
//!   - { event: press, at_ms: 0, x: 8, y: 40 }
//!   - { event: move, at_ms: 16, x: 236, y: 40 }
//!   - { event: release, at_ms: 32 }
//!   - { event: tick, at_ms: 400 }
//! ```

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use magdock::animation::ManualClock;
use magdock::commands::Cmd;
use magdock::config::DockConfig;
use magdock::model::{DockLayout, Point, Rect};
use magdock::view::DockFrame;
use magdock::Dock;

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay a pointer script against the dock")]
struct Args {
    /// Path to the YAML script
    #[arg(long)]
    script: PathBuf,
    /// Config file supplying animation settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Also emit animation frames at this interval between events
    #[arg(long, value_name = "MS")]
    frame_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Script {
    items: Vec<String>,
    #[serde(default)]
    container: Option<Rect>,
    #[serde(default)]
    layout: Option<DockLayout>,
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Press { at_ms: u64, x: f64, y: f64 },
    Move { at_ms: u64, x: f64, y: f64 },
    Release { at_ms: u64 },
    Tick { at_ms: u64 },
}

impl ScriptEvent {
    fn at_ms(&self) -> u64 {
        match self {
            ScriptEvent::Press { at_ms, .. }
            | ScriptEvent::Move { at_ms, .. }
            | ScriptEvent::Release { at_ms }
            | ScriptEvent::Tick { at_ms } => *at_ms,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScriptEvent::Press { .. } => "press",
            ScriptEvent::Move { .. } => "move",
            ScriptEvent::Release { .. } => "release",
            ScriptEvent::Tick { .. } => "tick",
        }
    }
}

#[derive(Debug, Serialize)]
struct Step<'a> {
    at_ms: u64,
    event: &'a str,
    redraw: bool,
    order: Vec<String>,
    scales: Vec<f64>,
    offset: f64,
    dragged: Option<usize>,
    animating: bool,
}

impl<'a> Step<'a> {
    fn new(at_ms: u64, event: &'a str, cmd: Option<&Cmd>, frame: DockFrame<String>) -> Self {
        Self {
            at_ms,
            event,
            redraw: cmd.is_some_and(Cmd::needs_redraw),
            scales: frame.scales(),
            offset: frame.items.first().map_or(0.0, |i| i.offset),
            dragged: frame.dragged,
            animating: frame.animating,
            order: frame.items.into_iter().map(|i| i.visual).collect(),
        }
    }
}

type LabelDock = Dock<String, fn(&String) -> String>;

fn label(item: &String) -> String {
    item.clone()
}

fn main() -> Result<()> {
    magdock::tracing::init();
    let args = Args::parse();

    let content = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: Script = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let mut config = match &args.config {
        Some(path) => DockConfig::load_from(path)?,
        None => DockConfig::default(),
    };
    if let Some(layout) = script.layout {
        config.layout = layout;
    }

    let clock = Rc::new(ManualClock::new());
    let renderer: fn(&String) -> String = label;
    let mut dock: LabelDock = Dock::new(script.items.clone(), renderer, &config)
        .context("Failed to build dock")?
        .with_clock(clock.clone());

    let container = script.container.unwrap_or_else(|| {
        let (w, h) = magdock::geometry::preferred_size(&config.layout, script.items.len());
        Rect::new(0.0, 0.0, w, h)
    });
    dock.measure(container);

    let mut now_ms = 0u64;
    for event in &script.events {
        let at_ms = event.at_ms();
        ensure!(
            at_ms >= now_ms,
            "events must be in time order ({} ms after {} ms)",
            at_ms,
            now_ms
        );

        if let Some(frame_ms) = args.frame_ms.filter(|&ms| ms > 0) {
            while dock.is_animating() && now_ms + frame_ms < at_ms {
                now_ms += frame_ms;
                clock.advance(Duration::from_millis(frame_ms));
                let cmd = dock.tick();
                emit(&dock, now_ms, "frame", cmd.as_ref())?;
            }
        }

        clock.advance(Duration::from_millis(at_ms - now_ms));
        now_ms = at_ms;

        let cmd = match *event {
            ScriptEvent::Press { x, y, .. } => dock.press_at(Point::new(x, y)),
            ScriptEvent::Move { x, y, .. } => dock.move_to(Point::new(x, y)),
            ScriptEvent::Release { .. } => dock.release(),
            ScriptEvent::Tick { .. } => dock.tick(),
        };
        emit(&dock, now_ms, event.name(), cmd.as_ref())?;
    }

    Ok(())
}

fn emit(dock: &LabelDock, at_ms: u64, event: &str, cmd: Option<&Cmd>) -> Result<()> {
    let step = Step::new(at_ms, event, cmd, dock.frame());
    println!("{}", serde_json::to_string(&step)?);
    Ok(())
}
