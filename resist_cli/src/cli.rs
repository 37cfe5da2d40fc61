//! Command dispatch for the `resist` binary

use std::path::{Path, PathBuf};

use resist_core::analysis::Analysis;
use resist_core::catalog::{CatalogError, DEFAULT_SEARCH_LIMIT};
use resist_core::config::ConfigError;
use resist_core::{
    AnalysisEntry, AnalyzerConfig, CreatureCatalog, CreatureSummary, ResistanceTier,
    TierEffectivenessAnalyzer,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::render;

pub const USAGE: &str = "usage: resist <analyze|search|families> <catalog.json> ...
  resist analyze <catalog.json> <name[:tier]>... [--json] [--config FILE]
  resist search <catalog.json> <query> [--limit N]
  resist families <catalog.json>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Analyze,
    Search,
    Families,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("analyze") => Some(Command::Analyze),
        Some("search") => Some(Command::Search),
        Some("families") => Some(Command::Families),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let result = match parse_command(args) {
        Some(Command::Analyze) => handle_analyze(args),
        Some(Command::Search) => handle_search(args),
        Some(Command::Families) => handle_families(args),
        None => Err(CliError::Usage(USAGE.to_string())),
    };

    match result {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

/// Parse `name` or `name:tier`; an unrecognized tier suffix stays part of the name
pub fn parse_selection(arg: &str) -> AnalysisEntry {
    if let Some((name, tier)) = arg.rsplit_once(':') {
        if let Ok(tier) = tier.parse::<ResistanceTier>() {
            return AnalysisEntry::new(name.trim(), tier);
        }
    }
    AnalysisEntry::new(arg.trim(), ResistanceTier::Normal)
}

/// Analyze command options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeArgs {
    pub catalog: PathBuf,
    pub selections: Vec<AnalysisEntry>,
    pub json: bool,
    pub config: Option<PathBuf>,
}

pub fn parse_analyze_args(args: &[String]) -> Result<AnalyzeArgs, CliError> {
    let catalog = catalog_arg(args)?;
    let mut selections = Vec::new();
    let mut json = false;
    let mut config = None;

    let mut rest = args.iter().skip(3);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--config" => {
                let path = rest
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a file".to_string()))?;
                config = Some(PathBuf::from(path));
            }
            other => selections.push(parse_selection(other)),
        }
    }

    if selections.is_empty() {
        return Err(CliError::Usage(
            "analyze needs at least one creature name".to_string(),
        ));
    }

    Ok(AnalyzeArgs {
        catalog,
        selections,
        json,
        config,
    })
}

fn catalog_arg(args: &[String]) -> Result<PathBuf, CliError> {
    args.get(2)
        .map(PathBuf::from)
        .ok_or_else(|| CliError::Usage(USAGE.to_string()))
}

fn load_catalog(path: &Path) -> Result<CreatureCatalog, CliError> {
    let catalog = CreatureCatalog::load(path)?;
    info!(creatures = catalog.len(), path = %path.display(), "catalog loaded");
    Ok(catalog)
}

fn handle_analyze(args: &[String]) -> Result<String, CliError> {
    let opts = parse_analyze_args(args)?;
    let config = match &opts.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };
    let catalog = load_catalog(&opts.catalog)?;
    let analyzer = TierEffectivenessAnalyzer::from_config(config);

    for selection in &opts.selections {
        if !catalog.contains(&selection.creature) {
            let hints = catalog.search(&selection.creature, 3);
            warn!(
                creature = %selection.creature,
                suggestions = ?hints,
                "unknown creature, skipping"
            );
        }
    }

    let analysis = analyzer.analyze_selection(&opts.selections, &catalog);
    if opts.json {
        return Ok(serde_json::to_string_pretty(&analysis)?);
    }

    let (body, selections) = match &analysis {
        Analysis::Empty => return Ok("no known creature selected".to_string()),
        Analysis::Single(single) => (
            render::single(single, analyzer.attributes()),
            std::slice::from_ref(&single.selection),
        ),
        Analysis::Joint(report) => (render::joint(report), report.selections.as_slice()),
    };

    let rows: Vec<(String, CreatureSummary)> = selections
        .iter()
        .filter_map(|selection| {
            catalog
                .get(&selection.creature)
                .map(|c| (selection.creature.clone(), c.summary(analyzer.parser())))
        })
        .collect();

    Ok(format!("{body}\n\n{}", render::comparison(&rows)))
}

fn handle_search(args: &[String]) -> Result<String, CliError> {
    let catalog_path = catalog_arg(args)?;
    let query = args
        .get(3)
        .ok_or_else(|| CliError::Usage("search needs a query".to_string()))?;
    let limit = match (args.get(4).map(String::as_str), args.get(5)) {
        (Some("--limit"), Some(n)) => n
            .parse::<usize>()
            .map_err(|_| CliError::Usage(format!("invalid --limit value: {n}")))?,
        (None, _) => DEFAULT_SEARCH_LIMIT,
        _ => return Err(CliError::Usage(USAGE.to_string())),
    };

    let catalog = load_catalog(&catalog_path)?;
    let lines: Vec<String> = catalog
        .search(query, limit)
        .into_iter()
        .filter_map(|name| {
            catalog
                .get(name)
                .map(|c| format!("{name} [{}]", c.family_or_unknown()))
        })
        .collect();

    Ok(if lines.is_empty() {
        "no match".to_string()
    } else {
        lines.join("\n")
    })
}

fn handle_families(args: &[String]) -> Result<String, CliError> {
    let catalog = load_catalog(&catalog_arg(args)?)?;
    let mut out = format!("{} creatures", catalog.len());
    for (family, count) in catalog.family_counts() {
        out.push_str(&format!("\n・{family}: {count}"));
    }
    Ok(out)
}
