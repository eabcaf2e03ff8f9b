// algoviz: step-by-step algorithm playback in the terminal

use std::io::{self, Write};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::config::{Config, View, USAGE};
use algoviz::error::Result;
use algoviz::scene::StepSource;
use algoviz::step::Value;
use algoviz::structures::{LiveStructure, MinHeap, Queue, Stack, StructureKind};
use algoviz::ui::App;

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if config.help {
        println!("{}", USAGE);
        return;
    }

    let result = if config.dump {
        dump(&config)
    } else {
        run_tui(config)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the selected view's recording as JSON
fn dump(config: &Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match config.scene(&mut config.rng()) {
        Some(scene) => {
            let sequence = scene.record();
            log::info!(
                "recorded {} steps for {}",
                sequence.len(),
                scene.info().name
            );
            serde_json::to_writer_pretty(&mut stdout, &sequence)?;
        }
        None => {
            // Nothing is recorded for live structures; show the empty state
            let snapshot = match config.structure {
                StructureKind::Stack => Stack::<Value>::new().query(),
                StructureKind::Queue => Queue::<Value>::new().query(),
                StructureKind::MinHeap => MinHeap::<Value>::new().query(),
            };
            serde_json::to_writer_pretty(&mut stdout, &snapshot)?;
        }
    }

    writeln!(stdout)?;
    Ok(())
}

fn run_tui(config: Config) -> Result<()> {
    log::info!(
        "starting in the {} view at speed {}",
        config.view.id(),
        config.speed.level()
    );
    if config.view == View::Structures {
        log::debug!("structure: {}", config.structure.name());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
