//! Duo Pong entry point
//!
//! Runs a headless demo match through the full frame loop, including the
//! real-time pacing. Windowed frontends plug in by implementing the
//! `platform` traits instead of the headless ones used here.

use duo_pong::platform::headless::{CountingAudio, IdleInput, NullRenderer};
use duo_pong::sim::Side;
use duo_pong::{App, Settings};

fn main() {
    env_logger::init();
    log::info!("duo-pong starting");

    let settings = Settings::load();
    if !std::path::Path::new(Settings::FILE_NAME).exists() {
        settings.save();
    }
    let target = settings.points_to_play.max(1);

    let mut app = App::new(
        NullRenderer,
        NullRenderer,
        IdleInput,
        CountingAudio::default(),
    );

    while app.state.score_left < target && app.state.score_right < target {
        if !app.step() {
            break;
        }
    }

    log::info!(
        "final score {} - {} ({} paddle bounces)",
        app.state.score(Side::Left),
        app.state.score(Side::Right),
        app.audio.bounces
    );

    if settings.dump_state {
        match serde_json::to_string(&app.state) {
            Ok(json) => log::debug!("final state: {json}"),
            Err(err) => log::warn!("state dump failed: {err}"),
        }
    }
}
