mod app;
mod console;
mod menu;

use anyhow::Result;
use linepad_config::{Config, DEFAULT_HISTORY_CAPACITY};
use linepad_engine::{Editor, FileStorage, io};
use std::{env, path::PathBuf, process};

use crate::app::App;
use crate::console::Console;

fn main() -> Result<()> {
    // Warnings only unless RUST_LOG says otherwise
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::info!("linepad starting up");

    // Determine documents path from CLI args, then config file, then cwd
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} [documents-folder-path]", args[0]);
            process::exit(1);
        }
    };

    let (documents_path, from_config) = if args.len() == 2 {
        (PathBuf::from(&args[1]), false)
    } else if args.len() == 1 {
        match &config {
            Some(config) => (config.documents_path.clone(), true),
            None => (env::current_dir()?, false),
        }
    } else {
        eprintln!("Usage: {} [documents-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_documents_dir(&documents_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Documents path '{}'{} is invalid: {e}",
            documents_path.display(),
            source
        );
        process::exit(1);
    }

    let history_capacity = config
        .as_ref()
        .map_or(DEFAULT_HISTORY_CAPACITY, |config| config.history_capacity);
    let cipher_key = config.as_ref().and_then(|config| config.cipher_key);
    log::info!(
        "documents in {}, history capacity {history_capacity}",
        documents_path.display()
    );

    let mut app = App::new(
        Editor::with_capacity(history_capacity),
        FileStorage::new(documents_path),
        cipher_key,
    );

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    app.run(&mut console)
}
