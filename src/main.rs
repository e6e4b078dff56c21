//! Monster Battle entry point
//!
//! Native builds run headless: the autopilot plays until its budget is spent,
//! then quits from the menu. Log level comes from `RUST_LOG` (default info).

use monster_battle::platform::HeadlessPlatform;
use monster_battle::{Session, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Monster Battle (headless) starting...");

    let settings = Settings::load();
    let mut session = Session::new(settings.tuning.clone());

    let summary = {
        let mut platform = HeadlessPlatform::new(&settings);
        platform.run(&mut session)
        // Platform (and every asset it holds) is released here
    };

    log::info!(
        "Finished after {} frames ({} playing, {:?}): score {}, {} kills, {} games lost",
        summary.frames,
        summary.playing_frames,
        summary.exit,
        summary.final_score,
        summary.kills,
        summary.games_lost
    );
}
