//! CLI entrypoint for MedInfo
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use medinfo_application::{
    ConversationLogger, NoConversationLogger, NoStateListener, SearchController,
    SearchMedicalInfoUseCase, SearchParams, StateListener,
};
use medinfo_domain::{AppState, Model, OutputFormat, Query};
use medinfo_infrastructure::{
    ConfigLoader, FileConfig, GeminiConfig, GeminiGateway, JsonlTranscriptLogger,
};
use medinfo_presentation::{Cli, ReplConfig, SearchRepl, SpinnerReporter, render_state};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting MedInfo");

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let model = resolve_model(cli.model.as_deref(), &config);
    let mut params = SearchParams::default().with_model(model);
    if !config.provider.web_search {
        params = params.without_web_search();
    }
    info!(model = %params.model, web_search = params.web_search, "Search parameters");

    // === Dependency Injection ===
    let gateway = Arc::new(
        GeminiGateway::new(GeminiConfig::from(&config)).context("Failed to create HTTP client")?,
    );

    let transcript = cli
        .transcript
        .clone()
        .or_else(|| config.log.transcript.as_ref().map(PathBuf::from));
    let conversation_logger = open_transcript(transcript);

    let service = Arc::new(
        SearchMedicalInfoUseCase::new(gateway, params)
            .with_conversation_logger(conversation_logger),
    );

    let show_progress = !cli.quiet && config.repl.show_progress && format != OutputFormat::Json;
    let listener: Arc<dyn StateListener> = if show_progress {
        Arc::new(SpinnerReporter::new())
    } else {
        Arc::new(NoStateListener)
    };

    let mut controller = SearchController::new(service).with_listener(listener);

    // Interactive mode
    let query = match cli.query {
        Some(query) if !cli.interactive => query,
        _ => {
            let repl_config = ReplConfig {
                history_file: config.repl.history_file.as_ref().map(PathBuf::from),
            };
            SearchRepl::new(controller, format)
                .with_config(repl_config)
                .run()
                .await?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    // Single query mode
    if let Err(e) = Query::parse(&query) {
        bail!("{}. Run without a query for interactive mode.", e);
    }

    let state = controller.submit_and_wait(&query).await;
    let output = render_state(state, format);

    match (state, output) {
        (AppState::Success(_), Some(output)) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        (_, output) => {
            if let Some(output) = output {
                eprintln!("{}", output);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Install the tracing subscriber. Returns the file writer's guard when
/// logging to `--log-dir`.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "medinfo.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

/// `-m` wins over `[provider] model`; blank means the default model
fn resolve_model(flag: Option<&str>, config: &FileConfig) -> Model {
    match flag.map(str::trim) {
        Some(name) if !name.is_empty() => {
            let Ok(model) = name.parse();
            model
        }
        _ => config.provider.parse_model(),
    }
}

fn open_transcript(path: Option<PathBuf>) -> Arc<dyn ConversationLogger> {
    let Some(path) = path else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlTranscriptLogger::open(&path) {
        Ok(logger) => {
            info!("Writing transcript to {}", logger.path().display());
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open transcript {}: {}", path.display(), e);
            Arc::new(NoConversationLogger)
        }
    }
}
