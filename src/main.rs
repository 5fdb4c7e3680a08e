use clap::Parser;
use media_registry::app::{demo, shell::Shell};
use media_registry::config::Command;
use media_registry::core::export::export;
use media_registry::utils::{logger, validation::Validate};
use media_registry::{AgencyRegistry, CliConfig, OutputFormat, RegistryConfig, RegistryError};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let (mut registry, seed_format) = match &config.config {
        Some(path) => match load_seed(path) {
            Ok(loaded) => loaded,
            Err(e) => exit_with(&e),
        },
        None => (AgencyRegistry::new(), OutputFormat::Text),
    };

    let format = match config.output_format() {
        Ok(format) => format.unwrap_or(seed_format),
        Err(e) => exit_with(&e),
    };

    let stdout = io::stdout();
    match config.command() {
        Command::Demo => {
            let mut out = stdout.lock();
            demo::run_demo(&mut out)?;
            out.flush()?;
        }
        Command::List => {
            let mut out = stdout.lock();
            export(&registry, format, &mut out)?;
            out.flush()?;
        }
        Command::Shell => {
            let stdin = io::stdin();
            let mut shell =
                Shell::new(stdin.lock(), stdout.lock(), io::stderr()).with_format(format);
            shell.run(&mut registry)?;
            tracing::info!("Session ended with {} agencies", registry.len());
        }
    }

    Ok(())
}

fn load_seed(path: &str) -> media_registry::Result<(AgencyRegistry, OutputFormat)> {
    tracing::info!("Loading seed file: {}", path);
    let seed = RegistryConfig::from_file(path)?;
    seed.validate()?;
    Ok((seed.into_registry()?, seed.default_format()?))
}

fn exit_with(e: &RegistryError) -> ! {
    tracing::error!("{}", e);
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}
