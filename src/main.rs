// Algoscope: step-by-step algorithm visualizer for the terminal

use std::io;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoscope::algorithms::{Algorithm, ProblemInput};
use algoscope::cli::Args;
use algoscope::config::AppConfig;
use algoscope::errors::{AppError, Result};
use algoscope::input::{parse_numbers, parse_target};
use algoscope::sync::Language;
use algoscope::ui::App;
use algoscope::visualizer::Visualizer;
use algoscope::{catalog, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}

fn print_catalog() {
    println!("Algorithms:");
    for algorithm in Algorithm::ALL {
        println!("  {:<20} {}", algorithm.id(), algorithm.title());
    }
    println!();
    println!("Languages:");
    for language in Language::ALL {
        let missing: Vec<&str> = Algorithm::ALL
            .iter()
            .filter(|&&algorithm| catalog::exact(algorithm, language).is_none())
            .map(|algorithm| algorithm.id())
            .collect();
        if missing.is_empty() {
            println!("  {:<20} {}", language.id(), language.label());
        } else {
            println!(
                "  {:<20} {} (no listing for {})",
                language.id(),
                language.label(),
                missing.join(", ")
            );
        }
    }
}

/// Merge command line overrides into the loaded configuration
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::resolve(args.config.as_deref())?;
    if let Some(algorithm) = &args.algorithm {
        config.algorithm = algorithm.clone();
    }
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if let Some(autoplay) = args.autoplay {
        config.autoplay = autoplay;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.log_file.is_some() {
        config.log_file = args.log_file.clone();
    }
    Ok(config)
}

fn run() -> Result<()> {
    let args = Args::parse();

    if args.list {
        print_catalog();
        return Ok(());
    }

    let config = resolve_config(&args)?;
    logging::init(config.log_file.as_deref(), &config.log_level)?;

    let algorithm =
        Algorithm::from_id(&config.algorithm).ok_or_else(|| AppError::UnknownAlgorithm {
            id: config.algorithm.clone(),
        })?;
    let language =
        Language::from_id(&config.language).ok_or_else(|| AppError::UnknownLanguage {
            id: config.language.clone(),
        })?;
    let nums = parse_numbers(&config.input)?;
    let target = match &args.target {
        Some(text) => parse_target(text)?,
        None => config.target,
    };

    tracing::info!(
        algorithm = algorithm.id(),
        language = language.id(),
        len = nums.len(),
        "starting"
    );

    let visualizer = Visualizer::mount(algorithm, ProblemInput::new(nums, target), language);
    {
        let mut controller = visualizer.controller_mut();
        controller.set_speed(config.speed);
        if config.autoplay {
            controller.play(Instant::now());
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(visualizer);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    tracing::info!("exiting");
    Ok(())
}
