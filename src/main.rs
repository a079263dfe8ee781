use anyhow::Context;
use atto::cli::CliArgs;
use atto::config;
use atto::editor::Editor;
use atto::input::Key;
use atto::ui::TuiRenderer;
use clap::Parser;
use crossterm::{
    event::{Event, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::fs::File;

/// Application entry point: parse arguments, resolve the configuration, open the file,
/// run the event loop in the alternate screen, and restore the terminal on exit.
///
/// A missing FILE argument is reported by clap with a nonzero exit status before the
/// terminal is touched. Configuration and file problems never abort startup; they end up
/// in the status bar instead.
fn main() -> anyhow::Result<()> {
    let cli_args = CliArgs::parse();

    init_logging();

    let loaded = config::load_or_create(&cli_args.config_path());
    let mut editor = Editor::new(loaded.config);
    editor.status_message = loaded.status;
    editor.open_file(&cli_args.file);

    // Enable raw mode and enter alternate screen
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;

    let result = run(&mut editor);

    // Leave alternate screen and disable raw mode
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

/// Redraw, then block for the next event; one event is fully handled before the next read.
fn run(editor: &mut Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new().context("failed to initialize the terminal")?;

    while editor.is_running() {
        renderer.draw(editor)?;

        match read()? {
            Event::Key(key_event) => {
                if let Some(key) = Key::from_event(key_event) {
                    editor.handle_input(key);
                }
            }
            // The next draw picks up the new size
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    log::info!("editor closed");
    Ok(())
}

/// Log to a file in the temp dir so output does not land on the alternate screen.
/// Set RUST_LOG to control verbosity.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(std::env::temp_dir().join("atto.log")) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}
