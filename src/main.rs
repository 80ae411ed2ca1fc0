//! main.rs
//! Entry point for perch

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::AppState;
use crate::config::Config;
use crate::core::{batch, terminal};
use crate::utils::cli::Cli;
use crate::utils::resolve_start_dir;

use clap::Parser;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[perch] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    // Conflicting flags exit here with a nonzero status.
    let cli = Cli::parse();

    let config = Config::load();
    let mut settings = config.settings().clone();
    cli.apply_to(&mut settings);

    let start_dir = match resolve_start_dir(&cli.dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("[perch] Error: cannot open '{}': {}", cli.dir.display(), e);
            std::process::exit(1);
        }
    };

    if cli.batch {
        return batch::run(&start_dir, &settings);
    }

    let mut app = AppState::new(&config, settings, start_dir);
    terminal::run_terminal(&mut app)
}
