//! Example: Inspecting Anki before prefilling a card.
//!
//! Lists decks and note types, shows the card under review with its
//! scheduling info, then opens the Add Cards dialog with a Cloze note.
//!
//! Run with: cargo run --example current_card

use ankigen::{AnkiClient, NoteBuilder};

#[tokio::main]
async fn main() -> ankigen::Result<()> {
    let client = AnkiClient::new();

    let version = client.misc().version().await?;
    println!("Connected to AnkiConnect v{}", version);

    // ========== DECKS AND NOTE TYPES ==========
    println!("\nAvailable Decks:");
    for deck in client.decks().names().await? {
        println!("- {}", deck);
    }

    println!("\nAvailable Note Types:");
    for model in client.models().names().await? {
        println!("- {}", model);
    }

    // ========== CURRENT CARD ==========
    match client.gui().current_card().await? {
        Some(card) => {
            println!("\nCurrent card {} in {}", card.card_id, card.deck_name);
            for name in card.field_names() {
                println!("{}: {}", name, card.fields[name].value);
            }

            if let Some(info) = client.cards().info(&[card.card_id]).await?.first() {
                println!("\nExtra Card Info:");
                println!("  Due: {}", info.due);
                println!("  Interval: {} days", info.interval);
                println!("  Ease: {}%", info.ease_percent());
                println!("  Reviews: {}", info.reps);
                println!("  Lapses: {}", info.lapses);
                println!("  Queue: {} ({})", info.queue, info.queue_description());
            }
        }
        None => println!("\nNo card is currently displayed in Anki"),
    }

    // ========== CLOZE NOTE ==========
    let note = NoteBuilder::new("Default", "Cloze")
        .field("Text", "The capital of Romania is {{c1::Bucharest}}")
        .field("Extra", "Romania is a country in Europe")
        .tag("countries")
        .build();

    match client.gui().add_cards(&note).await? {
        Some(id) => println!("\nAdd Cards dialog opened, note ID: {}", id),
        None => println!("\nAdd Cards dialog opened"),
    }

    Ok(())
}
