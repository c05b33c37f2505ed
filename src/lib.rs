//! Shared plumbing for the OpenGL practice programs in `src/bin`.
//!
//! Each program opens a window, builds a shader program, uploads a few
//! hard-coded vertices and draws them every frame until the window closes.

pub mod abs;
pub mod camera;
pub mod clock;
pub mod input;
pub mod logging;
pub mod settings;
pub mod shapes;
pub mod transform;

use std::process::ExitCode;

use settings::Settings;

/// Loads settings and starts logging. Every program calls this first.
pub fn init() -> Settings {
    let (settings, warnings) = Settings::load();
    if let Err(e) = logging::init(settings.level_filter()) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    for warning in warnings {
        log::warn!("{}", warning);
    }
    settings
}

/// Turns the outcome of a program's `run` into its exit code.
pub fn exit_code(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
