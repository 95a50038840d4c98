//! Classify an utterance from the command line

use anyhow::Result;
use std::io::BufRead;
use std::path::Path;

use terra::classifier::DiagnosticEvent;
use terra::responses::Responses;
use terra::CommandClassifier;

use super::load_config;

pub struct ClassifyOptions {
    /// Print every diagnostic step
    pub explain: bool,
    /// Print `{text, label, argument, response}` JSON instead of the bare label
    pub json: bool,
    /// Ignore a missing wake word (manual entry)
    pub no_wake_word: bool,
}

/// Classify `words` joined as one utterance, or every stdin line when empty.
pub fn classify_command(
    config_override: Option<&Path>,
    words: &[String],
    options: &ClassifyOptions,
) -> Result<()> {
    let mut config = load_config(config_override)?;
    if options.no_wake_word {
        config.wake_word.required = false;
    }

    let mut classifier = CommandClassifier::from_config(&config)?;
    if options.explain {
        classifier = classifier.with_observer(|event: &DiagnosticEvent| {
            eprintln!("  · {}", event);
        });
    }
    let responses = Responses::new();

    if !words.is_empty() {
        print_one(&classifier, &responses, &words.join(" "), options.json)?;
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        print_one(&classifier, &responses, &line, options.json)?;
    }

    Ok(())
}

fn print_one(
    classifier: &CommandClassifier,
    responses: &Responses,
    text: &str,
    json: bool,
) -> Result<()> {
    let interpretation = classifier.interpret(text);
    let classification = interpretation.classification;

    if json {
        let value = serde_json::json!({
            "text": text,
            "label": classification,
            "argument": interpretation.argument(),
            "response": responses.reply_to(&interpretation),
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", classification.label());
    }

    Ok(())
}
