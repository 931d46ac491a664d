//! Open Anki's "Add Cards" dialog prefilled with front and back text.
//!
//! ```text
//! ankigen "Vocabulary word" "Definition and examples"
//! ANKI_DECK=Spanish ankigen "hola" "hello"
//! ankigen --content card.txt
//! ```
//!
//! Every failure prints `Error: <message>` and exits with status 1.

mod error;
mod output;
#[cfg(test)]
mod testing;
mod workflow;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use ankigen::{AnkiClient, CardContent};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::workflow::CardRequest;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Open Anki's Add Cards dialog prefilled with front and back text.
#[derive(Parser, Debug)]
#[command(name = "ankigen")]
#[command(version, about, long_about = None)]
#[command(after_help = "Example:\n  ankigen \"Vocabulary word\" \"Definition and examples\"")]
struct Args {
    /// Front content of the card
    #[arg(required_unless_present_any = ["content", "list", "show_current"])]
    front: Option<String>,

    /// Back content of the card
    #[arg(required_unless_present_any = ["content", "list", "show_current"])]
    back: Option<String>,

    /// Read both sides from a `==front part==` / `==bottom part==` document ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["front", "back"])]
    content: Option<PathBuf>,

    /// Deck to add the card to (defaults to the first deck Anki lists)
    #[arg(long, env = "ANKI_DECK")]
    deck: Option<String>,

    /// Note type for the card
    #[arg(long, default_value = ankigen::BASIC_MODEL)]
    model: String,

    /// Tag for the note (repeat for several)
    #[arg(long = "tag", value_name = "TAG", default_value = ankigen::DEFAULT_TAG)]
    tags: Vec<String>,

    /// AnkiConnect URL
    #[arg(long, env = "ANKI_CONNECT_URL", default_value = ankigen::DEFAULT_URL)]
    url: String,

    /// AnkiConnect API key, if the add-on requires one
    #[arg(long, env = "ANKI_CONNECT_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    timeout: u64,

    /// List decks and note types, then exit
    #[arg(long, conflicts_with_all = ["front", "back", "content", "show_current"])]
    list: bool,

    /// Show the card currently under review, then exit
    #[arg(long, conflicts_with_all = ["front", "back", "content"])]
    show_current: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn client(&self) -> AnkiClient {
        let mut builder = AnkiClient::builder()
            .url(&self.url)
            .timeout(Duration::from_secs(self.timeout));
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    fn card_request(&self) -> Result<CardRequest> {
        let (front, back) = match (&self.content, &self.front, &self.back) {
            (Some(path), _, _) => {
                let content = read_content(path)?;
                (content.front, content.back)
            }
            (None, Some(front), Some(back)) => (front.clone(), back.clone()),
            _ => {
                return Err(Error::Usage(
                    "Please provide both front and back content for the card.".to_string(),
                ));
            }
        };

        Ok(CardRequest {
            front,
            back,
            deck: self.deck.clone(),
            model: self.model.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// Read and parse a content document from a file or standard input.
fn read_content(path: &Path) -> Result<CardContent> {
    let read_error = |source| Error::ReadContent {
        path: path.to_path_buf(),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    Ok(CardContent::parse(&text)?)
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a command line clap rejected.
///
/// Usage errors exit with 1 like every other failure; help and version
/// output exit 0.
fn parse_failure_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

async fn run<W: Write>(args: &Args, client: &AnkiClient, out: &mut W) -> Result<()> {
    info!(anki_url = %args.url, timeout_secs = args.timeout, "Starting ankigen");

    if args.list {
        return output::list(client, out).await;
    }
    if args.show_current {
        return output::show_current(client, out).await;
    }

    let request = args.card_request()?;
    let outcome = workflow::prefill(client, &request).await?;
    debug!(deck = %outcome.deck, note_id = ?outcome.note_id, "Prefill finished");

    writeln!(
        out,
        "Success! Anki UI should now be open with your card content."
    )?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_failure_status(&err));
        }
    };

    init_tracing(args.verbose);

    let client = args.client();
    match run(&args, &client, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
