/*
 * Night Sky Perceptions
 *
 * A small population of planes, helicopters, satellites, meteors and the
 * occasional rare object drifts across the night sky. The sky can be seen
 * from above (plan view) or from the ground looking east or west, and the
 * speed of everything can be changed with the slider.
 *
 * Controls:
 * - View button: switch between plan and ground view
 * - Dir button: face east or west in the ground view
 * - Slider: simulation speed from 0.5x to 3x
 * - I: inspector, Space: pause, Escape: quit
 */

use clap::Parser;
use night_sky::{app, SkyConfig};
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let config = SkyConfig::parse();

    // RUST_LOG wins over --verbose when set
    let level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    if let Err(err) = app::run(config) {
        error!("{err}");
        std::process::exit(2);
    }
}
