use path_match::config::{LoggingSettings, OutputFormat, Settings};
use path_match::{report, Matcher, ProfileRequest, Result};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    // PATHMATCH_CONFIG points at a settings file that replaces config/default + config/local
    let loaded = match std::env::var("PATHMATCH_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn run(settings: &Settings) -> Result<()> {
    let request = match std::env::args().nth(1) {
        Some(path) => ProfileRequest::from_path(path)?,
        None => ProfileRequest::from_reader(std::io::stdin().lock())?,
    };

    let profile = request.into_profile()?;
    info!("Profile accepted with {} skills", profile.skills.len());

    let matcher = Matcher::new(settings.matching.limits());
    let result = matcher.submit_profile(&profile);

    match settings.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", report::render(&result)),
    }

    Ok(())
}
