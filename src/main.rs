//! Scatterswitch - an interactive terminal scatter plot.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scatterswitch::{app::App, config::ChartConfig, data::XField, ui};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const FRAME_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

#[derive(Parser, Debug)]
#[command(name = "scatterswitch")]
#[command(about = "Terminal scatter plot with a switchable x axis", long_about = None)]
struct Args {
    /// Path to the CSV file to plot
    file: PathBuf,

    /// Field driving the x axis at startup (poverty, age or income)
    #[arg(long, default_value = "poverty")]
    field: XField,

    /// Transition duration in milliseconds
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
        tracing::info!("Starting scatterswitch");
    }

    // Load everything before touching the terminal so a bad dataset fails cleanly.
    let config = ChartConfig::default().with_transition(Duration::from_millis(args.duration_ms));
    let app = match App::open(&args.file, config, args.field, Instant::now()) {
        Ok(app) => app,
        Err(err) => {
            if err.is_configuration() {
                tracing::error!("Configuration error: {}", err);
            } else {
                tracing::error!("Startup failed: {}", err);
            }
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("scatterswitch exited");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = if app.is_animating(Instant::now()) {
            FRAME_POLL
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }

        let now = Instant::now();
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match (key.modifiers, key.code) {
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => return Ok(()),
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),
                (_, KeyCode::Char(c @ '1'..='3')) => {
                    app.select_index(c as usize - '1' as usize, now);
                }
                (_, KeyCode::Tab) => app.cycle_field(now),
                (_, KeyCode::Char('T')) => app.cycle_theme(),
                _ => {}
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row, now);
                }
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    app.handle_mouse_move(mouse.column, mouse.row, now);
                }
                _ => {}
            }
            _ => {}
        }
    }
}
