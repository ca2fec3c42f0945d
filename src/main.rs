//! Headless cauldron runner.
//!
//! Steps the scene at a fixed 60 Hz and logs particle counts once per
//! simulated second.
//!
//! Run with: `RUST_LOG=info cargo run -- [config.json] [frames]`

use cauldron::prelude::*;
use log::info;

const FRAME_DELTA: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            info!("Loading scene config from {}", path);
            SceneConfig::load(path)?
        }
        None => SceneConfig::default(),
    };
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let mut scene = Scene::new(config)?;
    let mut batch = InstanceBatch::new();
    let mut totals = FrameStats::default();

    for frame in 1..=frames {
        let stats = scene.update(FRAME_DELTA);
        totals.spawned_bubbles += stats.spawned_bubbles;
        totals.spawned_billboards += stats.spawned_billboards;
        totals.evicted += stats.evicted;

        scene.draw(&mut batch);

        if frame % 60 == 0 {
            info!(
                "t={:.2}s bubbles={} smoke={} upload={}B",
                scene.clock().elapsed(),
                batch.bubbles().len(),
                batch.billboards().len(),
                batch.bubble_bytes().len() + batch.billboard_bytes().len(),
            );
        }
    }

    info!(
        "Done after {} frames: spawned {} bubbles and {} smoke puffs, evicted {}",
        frames, totals.spawned_bubbles, totals.spawned_billboards, totals.evicted
    );
    Ok(())
}
