//! docsift - section extraction from analysis documents
//!
//! Usage:
//!   docsift parse <FILE> [-s KEY]...   Parse sections, print results as JSON
//!   docsift sections                   List the built-in sections
//!   docsift outline <FILE>             Print the converted block tree
//!   docsift record <FILE> -s KEY       Print the stored record for one section

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use docsift_config::Config;
use docsift_engine::{
    AutoConverter, Catalog, DocumentConverter, LogObserver, NullObserver, ParseObserver,
    SectionParser, SectionRecord, SectionSpec, ThresholdOverrides,
};
use log::{debug, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docsift", version, about = "Extract named sections from analysis documents")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file to use instead of ~/.config/docsift/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse sections from a .docx or HTML file
    Parse {
        file: PathBuf,
        /// Section key to parse; repeatable. Defaults to every enabled section.
        #[arg(short, long = "section")]
        sections: Vec<String>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// List section keys, kinds and titles
    Sections,
    /// Print the block tree a document converts to
    Outline { file: PathBuf },
    /// Print the persisted record JSON for one section
    Record {
        file: PathBuf,
        #[arg(short, long = "section")]
        section: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let catalog = build_catalog(&config);
    let observer: &dyn ParseObserver = if cli.verbose > 0 {
        &LogObserver
    } else {
        &NullObserver
    };

    match cli.command {
        Commands::Parse {
            file,
            sections,
            compact,
        } => cmd_parse(&catalog, &config, &file, &sections, compact, observer),
        Commands::Sections => {
            cmd_sections(&catalog);
            Ok(())
        }
        Commands::Outline { file } => cmd_outline(&file),
        Commands::Record { file, section } => cmd_record(&catalog, &file, &section, observer),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    Ok(loaded.unwrap_or_default())
}

/// Built-in catalog with the config's threshold overrides applied and
/// disabled sections removed.
fn build_catalog(config: &Config) -> Catalog {
    let mut catalog = Catalog::builtin();
    let known: Vec<&str> = catalog.keys().collect();
    for key in config.unknown_sections(&known) {
        warn!("Ignoring unknown section '{key}' in config");
    }

    for (key, section) in &config.sections {
        if !section.enabled {
            catalog.remove(key);
            debug!("Section '{key}' disabled by config");
            continue;
        }
        let overrides = ThresholdOverrides {
            max_elements: section.max_elements,
            max_paragraphs: section.max_paragraphs,
            min_scan_length: section.min_scan_length,
            score_threshold: section.score_threshold,
            top_n: section.top_n,
            min_table_matches: section.min_table_matches,
        };
        if overrides != ThresholdOverrides::default() {
            catalog.apply_overrides(key, &overrides);
        }
    }
    catalog
}

fn read_document(file: &Path) -> Result<Vec<u8>> {
    std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn lookup<'c>(catalog: &'c Catalog, key: &str) -> Result<&'c SectionSpec> {
    match catalog.get(key) {
        Some(spec) => Ok(spec),
        None => {
            let known: Vec<&str> = catalog.keys().collect();
            bail!(
                "Unknown or disabled section '{key}'. Available: {}",
                known.join(", ")
            )
        }
    }
}

fn cmd_parse(
    catalog: &Catalog,
    config: &Config,
    file: &Path,
    sections: &[String],
    compact: bool,
    observer: &dyn ParseObserver,
) -> Result<()> {
    let bytes = read_document(file)?;

    let keys: Vec<&str> = if !sections.is_empty() {
        for key in sections {
            lookup(catalog, key)?;
        }
        sections.iter().map(String::as_str).collect()
    } else if let Some(defaults) = &config.default_sections {
        defaults.iter().map(String::as_str).collect()
    } else {
        catalog.keys().collect()
    };

    let results = catalog.parse_selected(&keys, &bytes, &AutoConverter, observer);
    let json = if compact {
        serde_json::to_string(&results)?
    } else {
        serde_json::to_string_pretty(&results)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_sections(catalog: &Catalog) {
    let width = catalog.keys().map(str::len).max().unwrap_or(0);
    for spec in catalog.iter() {
        println!(
            "{:<width$}  {:<5}  {}",
            spec.key,
            spec.kind.label(),
            spec.title
        );
    }
}

fn cmd_outline(file: &Path) -> Result<()> {
    let bytes = read_document(file)?;
    let tree = AutoConverter
        .convert(bytes)
        .with_context(|| format!("Failed to convert {}", file.display()))?;
    print!("{}", tree.outline());
    Ok(())
}

fn cmd_record(
    catalog: &Catalog,
    file: &Path,
    section: &str,
    observer: &dyn ParseObserver,
) -> Result<()> {
    let spec = lookup(catalog, section)?;
    let bytes = read_document(file)?;
    let result = SectionParser::new(spec)
        .with_observer(observer)
        .parse(&bytes, &AutoConverter);
    for issue in result.errors.iter().chain(&result.warnings) {
        warn!("{section}: {issue}");
    }
    println!("{}", SectionRecord::from(&result).to_json()?);
    Ok(())
}
