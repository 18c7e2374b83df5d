use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use promptbar::app::App;
use promptbar::config::{self, Config};

/// Build image prompts from lighting, mood and style suggestions
#[derive(Parser, Debug)]
#[command(name = "promptbar", version, about)]
struct Args {
    /// Path to a config file (default: <config dir>/promptbar/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    // Load config before touching the terminal so errors print normally
    let config = config::load_config(args.config.as_deref())?;

    if args.print_config {
        print!("{}", config::to_toml(&config)?);
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
        ratatui::restore();
        return Err(e.into());
    }

    let result = run(terminal, &config);

    // Restore terminal
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send debug logs to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("promptbar.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
