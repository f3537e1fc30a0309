// What you SEE:
// • A borderless 800x600 window with a dim grid every 30 pixels.
// • Two filled rectangles drawn on top of the grid.
// • ESC or closing the window quits.

use log::{error, info};
use pixel_grid::{App, Config, Error, Screen};
use std::process::ExitCode;

fn run() -> Result<(), Error> {
    let config = Config::default();

    /* --- Window first: the framebuffer needs its size and a place to present --- */
    let screen = Screen::new(&config.title, config.width, config.height, config.target_fps)?;
    let mut app = App::setup(config, screen)?;

    /* ------------------------------ Main loop ------------------------------ */
    while app.is_running() {
        app.frame()?;
    }

    /* --- Framebuffer goes first, then the window --- */
    let screen = app.shutdown();
    screen.close();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting pixel-grid...");
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Fatal errors reach stderr even with logging switched off.
            if log::log_enabled!(log::Level::Error) {
                error!("{e}");
            } else {
                eprintln!("pixel-grid: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
