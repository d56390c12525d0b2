//! dayaxis main entrypoint.

use dayaxis::run;
use dayaxis::ui::messages::error;

fn main() {
    // RUST_LOG overrides; keep the CLI quiet by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        log::debug!("command failed: {e:?}");
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
