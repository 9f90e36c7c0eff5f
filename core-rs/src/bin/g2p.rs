//! g2p - Genotype to phenotype association CLI
//!
//! Searches a configured dataset and prints one association per line as JSON

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};

use g2p_core::config::DEFAULT_CONFIG_FILE;
use g2p_core::{namespace_split, Criteria, DatasetConfig, ExternalIdentifier, SearchRequest};

#[derive(Parser)]
#[command(name = "g2p")]
#[command(version = g2p_core::VERSION)]
#[command(about = "Genotype to phenotype association resolver", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search associations and print them as JSON lines
    Search(SearchArgs),
    /// Split a URI into identifier and namespace
    Split {
        /// URI to split
        uri: String,
        /// Separator preceding the identifier
        #[arg(long, default_value_t = '/')]
        separator: char,
    },
    /// Validate a dataset configuration
    Check {
        /// Dataset configuration file
        #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Dataset configuration file
    #[arg(long, short = 'c', default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Regex over the feature label
    #[arg(long)]
    feature: Option<String>,
    /// Feature term URI (repeatable)
    #[arg(long = "feature-id", conflicts_with = "feature")]
    feature_ids: Vec<String>,
    /// Regex over the evidence / environment label
    #[arg(long)]
    evidence: Option<String>,
    /// Evidence term URI (repeatable)
    #[arg(long = "evidence-id", conflicts_with = "evidence")]
    evidence_ids: Vec<String>,
    /// Regex over the phenotype label
    #[arg(long)]
    phenotype: Option<String>,
    /// Phenotype term URI (repeatable)
    #[arg(long = "phenotype-id", conflicts_with = "phenotype")]
    phenotype_ids: Vec<String>,
    /// Maximum number of associations to return
    #[arg(long)]
    page_size: Option<i64>,
    /// Index of the first association to return
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    offset: i64,
}

impl SearchArgs {
    fn request(&self) -> Result<SearchRequest> {
        let mut request = SearchRequest::new()
            .feature(criteria(self.feature.as_deref(), &self.feature_ids)?)
            .evidence(criteria(self.evidence.as_deref(), &self.evidence_ids)?)
            .phenotype(criteria(self.phenotype.as_deref(), &self.phenotype_ids)?)
            .offset(self.offset);
        if let Some(page_size) = self.page_size {
            request = request.page_size(page_size);
        }
        Ok(request)
    }
}

/// Pattern when given, otherwise the identifier list split from term URIs
fn criteria(pattern: Option<&str>, uris: &[String]) -> Result<Criteria> {
    if let Some(pattern) = pattern {
        return Ok(Criteria::pattern(pattern));
    }
    if uris.is_empty() {
        return Ok(Criteria::Absent);
    }

    let ids = uris
        .iter()
        .map(|uri| {
            let (identifier, database) = namespace_split(uri, '/')?;
            Ok(ExternalIdentifier::new(database, identifier))
        })
        .collect::<g2p_core::errors::Result<Vec<_>>>()?;
    Ok(Criteria::ids(ids))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => {
            let request = args.request()?;
            let config = DatasetConfig::load(&args.config)
                .with_context(|| format!("Failed to load {}", args.config.display()))?;
            debug!(dataset = %config.metadata.name, ?request, "searching");

            let mut backend = config.open_backend()?;
            for association in backend.search(&request)? {
                println!("{}", serde_json::to_string(&association)?);
            }
            eprintln!("Total associations: {}", backend.associations_length());
        }

        Commands::Split { uri, separator } => {
            let (id, namespace) = namespace_split(&uri, separator)?;
            println!("{}\t{}", id, namespace);
        }

        Commands::Check { config } => {
            let dataset = DatasetConfig::load(&config)
                .with_context(|| format!("Failed to load {}", config.display()))?;
            if dataset.spec.sources.iter().any(|s| s.rdf_format().is_err()) {
                bail!("Unsupported source format in {}", config.display());
            }
            println!("✓ {} ({:?} backend) is valid", dataset.metadata.name, dataset.spec.backend);
        }
    }

    Ok(())
}
