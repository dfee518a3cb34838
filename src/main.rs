// anagram-trace: step-by-step visualizer for grouping anagrams

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use anagram_trace::code::Language;
use anagram_trace::input::{parse_input, random_input, SAMPLES};
use anagram_trace::playback::Player;
use anagram_trace::settings::{self, speed, JsonFileStore, SettingsStore};
use anagram_trace::trace::generate;
use anagram_trace::ui::App;
use anagram_trace::{logging, Error, Result};

#[derive(Debug, Parser)]
#[command(name = "anagram-trace", version, about = "Step through grouping anagrams")]
struct Cli {
    /// Input strings as a JSON array or a comma separated list
    #[arg(short, long, group = "source")]
    input: Option<String>,

    /// Built-in sample to start with (1-based)
    #[arg(short, long, group = "source")]
    sample: Option<usize>,

    /// Start with a random sample
    #[arg(short, long, group = "source")]
    random: bool,

    /// Code representation to show (overrides the saved choice)
    #[arg(short, long, value_enum)]
    language: Option<Language>,

    /// Playback speed multiplier (overrides the saved speed)
    #[arg(long, value_parser = parse_speed)]
    speed: Option<f64>,

    /// Print the step sequence as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn parse_speed(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text.parse().map_err(|e| format!("{}", e))?;
    if speed::is_valid_speed(value) {
        Ok(value)
    } else {
        Err(format!("speed must be one of {:?}", speed::SPEED_OPTIONS))
    }
}

/// Input strings selected on the command line, sample 1 by default
fn resolve_input(cli: &Cli) -> Result<Vec<String>> {
    if let Some(text) = &cli.input {
        return Ok(parse_input(text)?);
    }
    if cli.random {
        return Ok(random_input(&mut rand::thread_rng()));
    }
    let number = cli.sample.unwrap_or(1);
    number
        .checked_sub(1)
        .and_then(|index| SAMPLES.get(index))
        .map(|sample| sample.to_vec())
        .ok_or(Error::UnknownSample {
            index: number,
            count: SAMPLES.len(),
        })
}

fn run(cli: Cli) -> Result<()> {
    let input = resolve_input(&cli)?;
    let steps = generate(&input);
    info!("Generated {} steps for {} strings", steps.len(), input.len());

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    let store = JsonFileStore::open(cli.settings.unwrap_or_else(JsonFileStore::default_path));
    info!("Using settings file {:?}", store.path());
    let store: Box<dyn SettingsStore> = Box::new(store);

    let language = cli
        .language
        .unwrap_or_else(|| settings::load_language(store.as_ref()));
    let speed = cli
        .speed
        .unwrap_or_else(|| settings::load_speed(store.as_ref()));
    let player = Player::new(steps).with_speed(speed);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player, language, &input, store);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Error::from)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        warn!("Exiting with error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
