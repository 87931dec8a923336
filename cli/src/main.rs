//! CLI entrypoint for mul-roster
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use roster_application::{
    CatalogClient, NoProgress, RosterBuilder, RosterLibrary, RunValidationUseCase, SaveOutcome,
    SelectionBus, ValidationProgress, ValidationSession,
};
use roster_domain::roster::params::LIST_PARAMETER;
use roster_domain::roster::selected::DEFAULT_SKILL;
use roster_domain::{CheckRegistry, MatchOutcome, RosterParams, UnitQuery};
use roster_infrastructure::config::FileLoggingConfig;
use roster_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, JsonFileRosterStore, MulCatalogGateway,
    ShareLinkBuilder, ShareScope, params_from_url, write_export,
};
use roster_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, RosterCommand, ScopeArgs,
    ValidateArgs, ValidationReport,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let Cli {
        command,
        output,
        verbose,
        quiet,
        config: config_path,
        no_config,
    } = Cli::parse();

    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(config_path.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(verbose, &config.logging)?;
    info!("Starting mul-roster");

    if !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(issue) = issues.iter().find(|issue| issue.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    let format = output.unwrap_or(match config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Table) | None => OutputFormat::Table,
    });
    let show_progress = !quiet && config.output.show_progress && format == OutputFormat::Table;

    match command {
        Command::Validate(args) => validate(&config, args, format, show_progress).await,
        Command::Roster { action } => {
            roster(&config, action, format).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config { sources } => {
            show_config(&config, config_path.as_deref(), sources)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize logging based on verbosity level, with an optional log file
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match (verbose, logging.level.as_deref()) {
        (0, Some(level)) => EnvFilter::new(level),
        (0, None) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let Some(path) = &logging.file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}

fn gateway(config: &FileConfig) -> Result<Arc<MulCatalogGateway>> {
    Ok(Arc::new(
        MulCatalogGateway::new(&config.catalog).context("Failed to create catalog client")?,
    ))
}

fn roster_builder(config: &FileConfig) -> Result<Arc<RosterBuilder<JsonFileRosterStore>>> {
    let dir = config
        .store
        .resolved_dir()
        .context("No data directory available; set [store] dir in the configuration")?;
    let library = RosterLibrary::new(Arc::new(JsonFileRosterStore::new(dir)));
    Ok(Arc::new(RosterBuilder::open(library)?))
}

/// Explicit flags override whatever the share link carried
fn apply_scope(mut params: RosterParams, scope: ScopeArgs) -> RosterParams {
    if scope.era.is_some() {
        params.era = scope.era;
    }
    if scope.specific.is_some() {
        params.specific_faction = scope.specific;
    }
    if scope.general.is_some() {
        params.general_faction = scope.general;
    }
    params
}

/// Where the roster being validated comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum RosterSource {
    ShareLink(String),
    List(String),
    Working,
}

impl RosterSource {
    /// A share link wins over `--list`; without either the working roster is used
    fn from_args(url: Option<String>, list: Option<String>) -> Self {
        match (url, list) {
            (Some(url), _) => Self::ShareLink(url),
            (None, Some(list)) => Self::List(list),
            (None, None) => Self::Working,
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::ShareLink(_) => "the roster from the share link",
            Self::List(_) => "the roster given with --list",
            Self::Working => "the working roster",
        }
    }

    fn params(self, working: impl FnOnce() -> Result<String>) -> Result<RosterParams> {
        Ok(match self {
            Self::ShareLink(url) => {
                let params = params_from_url(&url)?;
                if params.encoded_list.is_none() {
                    warn!(
                        "Share link has no '{}' parameter; the working roster is not used",
                        LIST_PARAMETER
                    );
                }
                params
            }
            Self::List(list) => RosterParams::default().with_list(list),
            Self::Working => RosterParams::default().with_list(working()?),
        })
    }
}

async fn validate(
    config: &FileConfig,
    args: ValidateArgs,
    format: OutputFormat,
    show_progress: bool,
) -> Result<ExitCode> {
    let source = RosterSource::from_args(args.url, args.list);
    info!("Validating {}", source.describe());
    let params = source.params(|| Ok(roster_builder(config)?.snapshot().encoded()))?;
    let params = apply_scope(params, args.scope);

    let use_case = Arc::new(
        RunValidationUseCase::new(gateway(config)?).with_populations(config.populations.clone()),
    );
    let progress: Arc<dyn ValidationProgress> = if show_progress {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(NoProgress)
    };

    let session = ValidationSession::new();
    let results = session
        .run(async move { use_case.execute_with_progress(&params, progress.as_ref()).await })
        .await
        .context("Validation run did not complete")?;

    let checks = CheckRegistry::standard(config.checks).evaluate(&results);
    let report = ValidationReport::new(&results, &checks);

    let rendered = match format {
        OutputFormat::Table => ConsoleFormatter::format_report(&report),
        OutputFormat::Json => ConsoleFormatter::format_report_json(&report),
    };
    println!("{}", rendered);

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn roster(config: &FileConfig, action: RosterCommand, format: OutputFormat) -> Result<()> {
    let builder = roster_builder(config)?;
    let bus = SelectionBus::new();
    builder.mount(&bus)?;

    match action {
        RosterCommand::List => {
            let names = builder.library().names()?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&names)?),
                OutputFormat::Table if names.is_empty() => println!("No saved rosters"),
                OutputFormat::Table => names.iter().for_each(|name| println!("{}", name)),
            }
        }
        RosterCommand::Show => {
            let roster = builder.snapshot();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&roster)?),
                OutputFormat::Table => print!("{}", ConsoleFormatter::format_roster(&roster)),
            }
        }
        RosterCommand::Add { name, scope } => {
            let era = scope.era.context("--era is required to search the catalog")?;
            let specific = scope
                .specific
                .context("--specific is required to search the catalog")?;
            let client = CatalogClient::new(gateway(config)?);
            let query = UnitQuery::new(DEFAULT_SKILL.to_string(), name);
            let found = client
                .resolve(&query, &era, &specific, scope.general.as_deref())
                .await;

            let unit = match found.outcome {
                MatchOutcome::Found(unit) => unit,
                MatchOutcome::Ambiguous { first, candidates } => {
                    warn!(
                        "{} catalog entries are named '{}'; adding the first",
                        candidates, query.name
                    );
                    first
                }
                MatchOutcome::NotAvailable => {
                    bail!("'{}' is not available in era {} for {}", query.name, era, specific)
                }
                MatchOutcome::Failed(message) => bail!("Catalog lookup failed: {}", message),
            };
            let unit_name = unit.name.clone();
            let ordinal = bus.add(unit)?;
            println!("Added {} at position {}", unit_name, ordinal);
        }
        RosterCommand::Remove { ordinal } => {
            let removed = builder.remove(ordinal)?;
            println!("Removed {}", removed.name());
        }
        RosterCommand::Skill { ordinal, skill } => {
            builder.set_skill(ordinal, skill)?;
            print!("{}", ConsoleFormatter::format_roster(&builder.snapshot()));
        }
        RosterCommand::Clear => {
            builder.clear()?;
            println!("Working roster cleared");
        }
        RosterCommand::Save { name } => match builder.save_as(&name)? {
            SaveOutcome::Saved(count) => println!("Saved '{}' ({} units)", name.trim(), count),
            SaveOutcome::Removed => println!("Working roster is empty; removed '{}'", name.trim()),
        },
        RosterCommand::Load { name } => {
            let roster = builder.load(&name)?;
            print!("{}", ConsoleFormatter::format_roster(&roster));
        }
        RosterCommand::Delete { name } => {
            if builder.library().delete(&name)? {
                println!("Deleted '{}'", name.trim());
            } else {
                println!("No roster named '{}'", name.trim());
            }
        }
        RosterCommand::Export { path } => {
            let path = path.unwrap_or_else(|| config.share.export_file.clone().into());
            let document = write_export(&builder.snapshot(), &path)?;
            println!(
                "Exported {} units to {}",
                document.members.len(),
                path.display()
            );
        }
        RosterCommand::Share { scope } => {
            let link = ShareLinkBuilder::new(&config.share.base_url)?.link(
                &builder.snapshot(),
                &ShareScope {
                    era: scope.era,
                    specific_faction: scope.specific,
                    general_faction: scope.general,
                },
            );
            println!("{}", link);
        }
    }

    Ok(())
}

fn show_config(config: &FileConfig, config_path: Option<&Path>, sources_only: bool) -> Result<()> {
    println!("Configuration sources (in priority order):");
    for line in ConfigLoader::describe_sources(config_path) {
        println!("{}", line);
    }
    if sources_only {
        return Ok(());
    }

    println!();
    println!("{}", toml::to_string_pretty(config)?);

    let issues = config.validate();
    if issues.is_empty() {
        println!("No configuration issues");
    } else {
        for issue in issues {
            println!("{}", issue);
        }
    }
    Ok(())
}
