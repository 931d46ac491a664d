//! Read-only listings: decks, note types, and the card under review.

use std::io::Write;
use std::sync::LazyLock;

use ankigen::{AnkiClient, CardInfo, CurrentCard};
use regex_lite::Regex;

use crate::error::Result;
use crate::workflow::ensure_connected;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Print every deck and note type.
pub async fn list<W: Write>(client: &AnkiClient, out: &mut W) -> Result<()> {
    ensure_connected(client).await?;

    let decks = client.decks().names().await?;
    writeln!(out, "\nAvailable Decks:")?;
    for deck in &decks {
        writeln!(out, "- {}", deck)?;
    }

    let models = client.models().names().await?;
    writeln!(out, "\nAvailable Note Types:")?;
    for model in &models {
        writeln!(out, "- {}", model)?;
    }

    Ok(())
}

/// Print the card currently shown in the reviewer, with its scheduling info.
pub async fn show_current<W: Write>(client: &AnkiClient, out: &mut W) -> Result<()> {
    ensure_connected(client).await?;

    let Some(card) = client.gui().current_card().await? else {
        writeln!(out, "No card is currently displayed in Anki")?;
        return Ok(());
    };
    write!(out, "{}", render_card(&card))?;

    let info = client.cards().info(&[card.card_id]).await?;
    if let Some(info) = info.first() {
        write!(out, "{}", render_card_info(info))?;
    }

    Ok(())
}

/// Plain-text rendering of a card, HTML stripped.
fn render_card(card: &CurrentCard) -> String {
    let rule = "-".repeat(35);
    let mut out = String::new();
    out.push_str("\nCurrent Card:\n");
    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("Card ID: {}\n", card.card_id));
    out.push_str(&format!("Note ID: {}\n", card.note_id));
    out.push_str(&format!("Question: {}\n", strip_html(&card.question)));
    out.push_str(&format!("Answer: {}\n", strip_html(&card.answer)));
    out.push_str(&format!("Deck: {}\n", card.deck_name));
    out.push_str(&format!("Model: {}\n", card.model_name));
    out.push_str(&format!("{}\n", rule));

    if !card.fields.is_empty() {
        out.push_str("\nFields:\n");
        for name in card.field_names() {
            let value = &card.fields[name].value;
            out.push_str(&format!("{}: {}\n", name, strip_html(value)));
        }
    }

    out
}

/// Scheduling details from `cardsInfo`.
fn render_card_info(info: &CardInfo) -> String {
    format!(
        "\nExtra Card Info:\n\
         Due: {}\n\
         Interval: {} days\n\
         Ease: {}%\n\
         Reviews: {}\n\
         Lapses: {}\n\
         Queue: {} ({})\n",
        info.due,
        info.interval,
        info.ease_percent(),
        info.reps,
        info.lapses,
        info.queue,
        info.queue_description(),
    )
}

/// Remove HTML tags, keeping the text between them.
fn strip_html(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}
