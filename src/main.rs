//! Briefly CLI - article summarisation with related-topic suggestions
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use std::io::Read;

use briefly::{fetcher, related, ui, Config, Session, Summarizer};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "briefly")]
#[command(author, version, about = "Summarise articles and suggest related topics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch an article by URL and summarise it
    Summarise {
        /// URL to summarise
        url: String,
        /// Show raw extracted text instead of a summary
        #[arg(long)]
        raw: bool,
    },
    /// Summarise article text read from stdin
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Summarise { url, raw }) => {
            println!("Fetching: {}", url);
            let article = fetcher::fetch_article(&url).await?;

            if raw {
                let title = article.title.as_deref().unwrap_or("No title");
                println!("\n=== {} ===\n", title);
                println!("{}", article.text);
                println!("\n--- Extracted {} characters ---", article.text.len());
            } else {
                let summarizer = Summarizer::from_config(&config)?;
                summarise_and_render(&summarizer, &article.text).await?;
            }
        }
        Some(Commands::Text) => {
            let text = read_stdin()?;
            let summarizer = Summarizer::from_config(&config)?;
            summarise_and_render(&summarizer, &text).await?;
        }
        None => {
            let summarizer = Summarizer::from_config(&config)?;
            if atty::is(atty::Stream::Stdin) {
                let mut session = Session::new(&summarizer);
                session.run().await?;
            } else {
                // Piped input: behave like the `text` subcommand
                let text = read_stdin()?;
                summarise_and_render(&summarizer, &text).await?;
            }
        }
    }

    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Summarise the text and print the summary plus related-article titles
async fn summarise_and_render(summarizer: &Summarizer, text: &str) -> anyhow::Result<()> {
    println!("Summarising {} characters...", text.len());
    let summary = summarizer.summarize(text).await?;

    ui::print_summary(&summary);
    ui::print_related(&related::find_related(&summary, &related::default_database()));

    Ok(())
}
