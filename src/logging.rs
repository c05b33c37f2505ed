//! Logging setup: a `fern` dispatcher writing timestamped lines to stdout.

use log::LevelFilter;

/// Installs the global logger. Calling it twice is a no-op that returns an error.
pub fn init(level: LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("image", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}
