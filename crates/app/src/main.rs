use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use boarder_core::model::LanguageCatalog;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, TutorialService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOADING_MS: u64 = 1_500;
const LOG_ENV: &str = "PHONEBOARDER_LOG";
const LOADING_ENV: &str = "PHONEBOARDER_LOADING_MS";
const LANGUAGE_ENV: &str = "PHONEBOARDER_LANGUAGE";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLoadingMs { raw: String },
    UnknownLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLoadingMs { raw } => write!(f, "invalid --loading-ms value: {raw}"),
            ArgsError::UnknownLanguage { raw } => write!(f, "unknown --language value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--loading-ms <ms>] [--language <name>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --loading-ms {DEFAULT_LOADING_MS}");
    eprintln!("  --language English");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {LOADING_ENV}, {LANGUAGE_ENV}, {LOG_ENV}");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    loading_delay: Duration,
    language: String,
}

impl Args {
    /// Flags override environment values, which override defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
        languages: &LanguageCatalog,
    ) -> Result<Parsed, ArgsError> {
        let mut loading_flag = None;
        let mut language_flag = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--loading-ms" => {
                    let value = require_value(args, "--loading-ms")?;
                    loading_flag = Some(parse_loading_ms(value)?);
                }
                "--language" => {
                    let value = require_value(args, "--language")?;
                    language_flag = Some(resolve_language(languages, value)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        // Env values are only consulted for fields no flag set.
        let loading_delay = match (loading_flag, env(LOADING_ENV)) {
            (Some(delay), _) => delay,
            (None, Some(raw)) => parse_loading_ms(raw)?,
            (None, None) => Duration::from_millis(DEFAULT_LOADING_MS),
        };
        let language = match (language_flag, env(LANGUAGE_ENV)) {
            (Some(code), _) => code,
            (None, Some(raw)) => resolve_language(languages, raw)?,
            (None, None) => languages.default_language().code().to_owned(),
        };

        Ok(Parsed::Run(Self {
            loading_delay,
            language,
        }))
    }
}

fn parse_loading_ms(raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidLoadingMs { raw })
}

fn resolve_language(languages: &LanguageCatalog, raw: String) -> Result<String, ArgsError> {
    languages
        .find(&raw)
        .map(|language| language.code().to_owned())
        .ok_or(ArgsError::UnknownLanguage { raw })
}

struct DesktopApp {
    tutorial: Arc<TutorialService>,
    loading_delay: Duration,
    language: String,
}

impl UiApp for DesktopApp {
    fn tutorial(&self) -> Arc<TutorialService> {
        Arc::clone(&self.tutorial)
    }

    fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    fn initial_language(&self) -> String {
        self.language.clone()
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| format!("failed to initialize tracing subscriber: {err}"))?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let tutorial = TutorialService::builtin(Clock::system())?;

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok(), tutorial.languages())
        .inspect_err(|_| print_usage())?;

    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    info!(
        lessons = tutorial.catalog().len(),
        language = %args.language,
        loading_ms = args.loading_delay.as_millis(),
        "starting PhoneBoarder"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        tutorial: Arc::new(tutorial),
        loading_delay: args.loading_delay,
        language: args.language,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PhoneBoarder")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
