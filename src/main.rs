use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_guess::cli::{CliInterface, parse_cli};
use word_guess::logging::{default_log_path, init_logging};
use word_guess::tui::TuiInterface;
use word_guess::{WordSource, WordSourceError, game_loop};

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().or_else(default_log_path);
    if let Some(path) = init_logging(log_path.as_deref(), cli.plain) {
        log::info!("Logging to {}", path.display());
    }

    let source = match &cli.wordbank_path {
        Some(path) => match WordSource::from_file(path) {
            Ok(source) => source,
            Err(e) => {
                log::error!("{e}");
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => WordSource::embedded(),
    };
    if source.is_empty() {
        let e = WordSourceError::EmptyWordList;
        log::error!("{e}");
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    log::info!("Loaded {} candidate words.", source.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&source, &mut rng, &mut interface)
    } else {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(&source, &mut rng, &mut interface),
            Err(e) => {
                log::error!("Failed to initialise terminal: {e}");
                eprintln!("Failed to initialise terminal: {e}. Try --plain.");
                return ExitCode::FAILURE;
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
