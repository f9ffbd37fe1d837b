//! Bookshelf CLI - browse a remote book library from the terminal

mod commands;

use anyhow::{Context, Result};
use bookshelf_core::config::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use bookshelf_core::{ApiClient, SortOrder};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate page size argument (must be at least 1)
fn parse_page_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the library service
    #[arg(long, global = true, env = "BOOKSHELF_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "BOOKSHELF_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a page of books
    List {
        /// Page number (starting at 1)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Books per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
        size: u32,

        /// Sort order, e.g. title,asc (see `bookshelf sorts`)
        #[arg(long, default_value = "updated_at,desc")]
        sort: SortOrder,

        /// Search term
        #[arg(short, long, default_value = "")]
        query: String,

        /// Only books from this publisher id (repeatable)
        #[arg(long = "publisher", value_name = "ID")]
        publishers: Vec<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of one book
    Show {
        /// Book id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a book file
    Download {
        /// Book id
        id: i64,

        /// Output file path
        #[arg(short, long)]
        output: String,
    },

    /// List every file type
    FileTypes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every publisher
    Publishers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available sort orders
    Sorts,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookshelf_cli=debug,bookshelf_core=debug"
    } else {
        "bookshelf_cli=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Sorts = cli.command {
        commands::sorts();
        return Ok(());
    }

    let client = ApiClient::with_timeout(&cli.api_url, Duration::from_secs(cli.timeout))
        .with_context(|| format!("Invalid API URL: {}", cli.api_url))?;

    match cli.command {
        Commands::List {
            page,
            size,
            sort,
            query,
            publishers,
            json,
        } => {
            let query = bookshelf_core::BookQuery::new()
                .page(page)
                .size(size)
                .sort(sort)
                .search(query)
                .publishers(publishers);
            commands::list(&client, &query, json).await
        }

        Commands::Show { id, json } => commands::show(&client, id, json).await,

        Commands::Download { id, output } => commands::download(&client, id, &output).await,

        Commands::FileTypes { json } => commands::file_types(&client, json).await,

        Commands::Publishers { json } => commands::publishers(&client, json).await,

        Commands::Sorts => Ok(()),
    }
}
