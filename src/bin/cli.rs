//! mf2util CLI
//!
//! Reads mf2 JSON (as produced by a microformats2 parser) and prints the
//! interpreted result as JSON.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use mf2util::{
    error::{AppError, Result},
    fetch::{DocumentFetcher, HttpFetcher},
    models::{Config, Document, H_CITE, H_ENTRY, H_EVENT, SimplifiedPost},
    pipeline::{self, InterpretOptions},
    services, utils,
};

/// mf2util - microformats2 interpretation
#[derive(Parser, Debug)]
#[command(
    name = "mf2util",
    version,
    about = "Interpret parsed microformats2 documents"
)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "mf2util.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fetch author pages through `fetcher.parser_endpoint` when resolving
    /// authorship
    #[arg(long, global = true)]
    fetch: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a single event, entry, or cite
    Interpret {
        /// mf2 JSON file, or `-` for stdin
        file: PathBuf,

        /// URL the document was fetched from
        #[arg(long)]
        source_url: String,

        /// Value of the page's <base href>
        #[arg(long)]
        base_href: Option<String>,

        /// Post kind to interpret as
        #[arg(long, value_enum, default_value_t = Kind::Auto)]
        kind: Kind,
    },

    /// Interpret an h-feed or a flat list of posts
    Feed {
        /// mf2 JSON file, or `-` for stdin
        file: PathBuf,

        /// URL the document was fetched from
        #[arg(long)]
        source_url: String,

        /// Value of the page's <base href>
        #[arg(long)]
        base_href: Option<String>,
    },

    /// Classify the first entry, event, or cite
    PostType {
        /// mf2 JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Resolve the author of the first entry
    Author {
        /// mf2 JSON file, or `-` for stdin
        file: PathBuf,
    },

    /// Find the representative h-card for a URL
    Hcard {
        /// mf2 JSON file, or `-` for stdin
        file: PathBuf,

        /// URL the card should represent
        #[arg(long)]
        url: String,
    },

    /// Rewrite relative URLs in an HTML fragment
    Absolutize {
        /// HTML file, or `-` for stdin
        file: PathBuf,

        /// URL the fragment was fetched from
        #[arg(long)]
        source_url: String,

        /// Value of the page's <base href>
        #[arg(long)]
        base_href: Option<String>,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Auto,
    Entry,
    Event,
    Cite,
}

/// Initialize logging; `RUST_LOG` overrides `level`.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Read a file, or stdin for `-`.
async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        tokio::io::stdin().read_to_string(&mut input).await?;
        return Ok(input);
    }
    Ok(tokio::fs::read_to_string(path).await?)
}

async fn read_document(path: &Path) -> Result<Document> {
    let input = read_input(path).await?;
    let document = Document::from_json(&input)?;
    log::debug!(
        "Loaded {} top-level items from {}",
        document.items.len(),
        path.display()
    );
    Ok(document)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = match (&loaded, cli.verbose) {
        (_, true) => "debug",
        (Ok(config), false) => config.logging.level.as_str(),
        (Err(_), false) => "info",
    };
    init_logging(level);

    let config = loaded.unwrap_or_else(|e| Config::default_after_error(&cli.config, &e));

    let http_fetcher = if cli.fetch || config.interpret.follow_author_pages {
        config.validate()?;
        log::debug!("Author pages will be fetched over HTTP");
        Some(HttpFetcher::new(&config.fetcher)?)
    } else {
        None
    };
    let fetcher = http_fetcher.as_ref().map(|f| f as &dyn DocumentFetcher);

    match cli.command {
        Command::Interpret {
            file,
            source_url,
            base_href,
            kind,
        } => {
            let document = read_document(&file).await?;
            let mut options = InterpretOptions::from_config(&source_url, &config.interpret)
                .with_base_href(base_href.as_deref());
            options.fetcher = fetcher;

            let post = match kind {
                Kind::Auto => pipeline::interpret(&document, None, options).await?,
                Kind::Entry => pipeline::interpret_entry(&document, None, options)
                    .await?
                    .map(SimplifiedPost::Entry),
                Kind::Event => pipeline::interpret_event(&document, None, options)
                    .await?
                    .map(SimplifiedPost::Event),
                Kind::Cite => pipeline::interpret_cite(&document, None, options)
                    .await?
                    .map(SimplifiedPost::Cite),
            };
            if post.is_none() {
                log::warn!("No {kind:?} post found in {}", file.display());
            }
            print_json(&post)?;
        }

        Command::Feed {
            file,
            source_url,
            base_href,
        } => {
            let document = read_document(&file).await?;
            let mut options = InterpretOptions::from_config(&source_url, &config.interpret)
                .with_base_href(base_href.as_deref());
            options.fetcher = fetcher;

            let feed = pipeline::interpret_feed(&document, None, options).await?;
            log::info!("Interpreted {} feed entries", feed.entries.len());
            print_json(&feed)?;
        }

        Command::PostType { file } => {
            let document = read_document(&file).await?;
            let item = services::find_first_entry(&document, &[H_ENTRY, H_EVENT, H_CITE])
                .ok_or_else(|| AppError::validation("no h-entry, h-event, or h-cite found"))?;

            print_json(&serde_json::json!({
                "post-type": services::post_type_discovery(item),
                "response-type": services::response_type_discovery(item),
            }))?;
        }

        Command::Author { file } => {
            let document = read_document(&file).await?;
            let author = services::find_author(&document, None, fetcher).await?;
            print_json(&author)?;
        }

        Command::Hcard { file, url } => {
            let document = read_document(&file).await?;
            let card = services::representative_hcard(&document, &url);
            print_json(&card)?;
        }

        Command::Absolutize {
            file,
            source_url,
            base_href,
        } => {
            let html = read_input(&file).await?;
            print!(
                "{}",
                utils::convert_relative_paths_to_absolute(&source_url, base_href.as_deref(), &html)
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }
    }

    Ok(())
}
