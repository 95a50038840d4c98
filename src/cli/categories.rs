//! List the pattern table in priority order

use anyhow::Result;
use std::path::Path;

use terra::responses::category_title;
use terra::CommandClassifier;

use super::load_config;

pub fn categories_command(config_override: Option<&Path>, show_phrases: bool) -> Result<()> {
    let config = load_config(config_override)?;
    let classifier = CommandClassifier::from_config(&config)?;

    println!("Wake words: {}", classifier.wake_words().join(", "));
    println!("Greeting stems: {}", classifier.greeting_stems().join(", "));
    println!();

    let table = classifier.table();
    for (rank, category) in table.categories().enumerate() {
        let phrases = table.phrases(category);
        println!(
            "{:>2}. {:<20} {} ({} phrases)",
            rank + 1,
            category.as_str(),
            category_title(category),
            phrases.len()
        );
        if show_phrases {
            for phrase in phrases {
                println!("      - {}", phrase);
            }
        }
    }

    Ok(())
}
