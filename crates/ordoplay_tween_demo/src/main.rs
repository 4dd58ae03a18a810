// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` tween demo - plays a tween sequence from a RON scene file.
//!
//! Usage: `ordoplay_tween_demo [scene.ron]`
//!
//! Each published frame is written to stdout as one JSON line
//! `{"data": ..., "info": {"progress": ..., "animating": ...}}`. Logs go to
//! stderr and honor `RUST_LOG`.

mod scene;

use ordoplay_tween::{AnimationInfo, ConfigError, TweenData, TweenError, TweenQueue, Value};
use scene::{Scene, DEFAULT_SCENE};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Error type for the demo
#[derive(Debug, thiserror::Error)]
enum DemoError {
    /// Scene could not be loaded
    #[error("Scene error: {0}")]
    Scene(#[from] ConfigError),

    /// Engine error
    #[error("Tween error: {0}")]
    Tween(#[from] TweenError),
}

/// One line of output
#[derive(Serialize)]
struct FrameLine<'a> {
    data: &'a Value,
    info: AnimationInfo,
}

fn main() {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "ordoplay_tween=debug".parse() {
        env_filter = env_filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting OrdoPlay tween demo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(std::env::args_os().nth(1).map(PathBuf::from)) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(path: Option<PathBuf>) -> Result<(), DemoError> {
    let scene = match path {
        Some(path) => {
            tracing::info!("Loading scene {}", path.display());
            Scene::load(&path)?
        }
        None => Scene::from_ron_str(DEFAULT_SCENE)?,
    };

    let mut engine = TweenQueue::values(TweenData::single(scene.initial), scene.config)?
        .with_renderer(|data, info| {
            let line = FrameLine { data, info };
            match serde_json::to_string(&line) {
                Ok(json) => {
                    let mut stdout = std::io::stdout().lock();
                    if let Err(e) = writeln!(stdout, "{json}") {
                        tracing::warn!("Failed to write frame: {e}");
                    }
                }
                Err(e) => tracing::warn!("Failed to encode frame: {e}"),
            }
        })
        .with_on_settle(|| tracing::info!("Tween sequence settled"));

    engine.activate()?;
    engine.reconfigure(TweenData::Sequence(scene.targets))?;

    let frame = Duration::from_millis(scene.frame_ms);
    while engine.is_animating() {
        std::thread::sleep(frame);
        engine.frame()?;
    }

    engine.dispose();
    Ok(())
}
