use std::path::Path;

use anyhow::Context;
use log::info;

use clock_engine::core::config::SceneConfig;
use clock_engine::graphics::headless::HeadlessBackend;
use clock_engine::scene::{kinematics, Scene};

/// Headless demo: runs the clock scene against the recording backend for ten
/// simulated seconds, with a pause and a reset mid-run standing in for the
/// SPACE/R bindings a windowed front end would offer.
fn main() -> anyhow::Result<()> {
    // setting up logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::from_file(Path::new(&path))
            .with_context(|| format!("loading scene config from {path}"))?,
        None => SceneConfig::default(),
    };

    let phase_deg = config.phase_deg;
    let mut scene = Scene::new(&config);
    let mut backend = HeadlessBackend::new();
    scene.load(&mut backend)?;

    const STEP: f32 = 1.0 / 60.0;
    for frame in 0u32..600 {
        match frame {
            240 => {
                info!("pausing");
                scene.clock.pause();
            }
            360 => {
                info!("resuming");
                scene.clock.resume();
            }
            540 => {
                info!("resetting elapsed time");
                scene.clock.reset();
            }
            _ => {}
        }

        scene.update(STEP);
        scene.render(&mut backend)?;

        if frame % 60 == 0 {
            let t = scene.clock.elapsed();
            info!(
                "t={:5.2}s  second hand {:6.1}°  driver gear {:6.1}°",
                t,
                kinematics::hand_angle(t, kinematics::SECOND_HAND_DEG_PER_SEC, phase_deg),
                kinematics::gear_angle(t, scene.driver.spec.rpm),
            );
        }
    }

    info!("issued {} draw calls", backend.draws().len());
    scene.unload(&mut backend)?;
    Ok(())
}
