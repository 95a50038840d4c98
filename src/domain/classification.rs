use serde::{Serialize, Serializer};

use super::Category;

/// Outcome of classifying a single utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Text after the wake word was classified (possibly as `unknown`)
    Command(Category),
    /// Wake word heard, but nothing followed it
    EmptyCommand,
    /// Wake word required and not heard
    WakeWordAbsent,
}

impl Classification {
    /// Stable label used on the wire and in CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Command(category) => category.as_str(),
            Classification::EmptyCommand => "empty_command",
            Classification::WakeWordAbsent => "no_wake_word",
        }
    }

    /// The category, if text was actually classified
    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Command(category) => Some(*category),
            _ => None,
        }
    }

    /// Whether the result should be forwarded to the command backend
    pub fn is_actionable(&self) -> bool {
        self.category().is_some_and(|c| c.is_actionable())
    }
}

/// A classification together with the command argument found in the utterance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interpretation {
    pub classification: Classification,
    /// Words after the matched phrase: task description, search query, project name.
    /// Empty when the phrase covered the whole utterance.
    pub argument: String,
}

impl Interpretation {
    pub fn new(classification: Classification, argument: impl Into<String>) -> Self {
        Self {
            classification,
            argument: argument.into(),
        }
    }

    /// Argument, if there is one
    pub fn argument(&self) -> Option<&str> {
        Some(self.argument.as_str()).filter(|a| !a.is_empty())
    }
}

impl From<Classification> for Interpretation {
    fn from(classification: Classification) -> Self {
        Self::new(classification, String::new())
    }
}

impl From<Category> for Interpretation {
    fn from(category: Category) -> Self {
        Classification::Command(category).into()
    }
}

impl From<Category> for Classification {
    fn from(category: Category) -> Self {
        Classification::Command(category)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(
            Classification::Command(Category::TaskCreation).label(),
            "task_creation"
        );
        assert_eq!(Classification::EmptyCommand.label(), "empty_command");
        assert_eq!(Classification::WakeWordAbsent.label(), "no_wake_word");
    }

    #[test]
    fn test_interpretation_serializes_label_and_argument() {
        let interpretation =
            Interpretation::new(Category::Search.into(), "отчет по продажам");
        assert_eq!(interpretation.argument(), Some("отчет по продажам"));
        assert_eq!(
            serde_json::to_value(&interpretation).unwrap(),
            serde_json::json!({
                "classification": "search",
                "argument": "отчет по продажам",
            })
        );

        let bare = Interpretation::from(Classification::EmptyCommand);
        assert_eq!(bare.argument(), None);
    }
}
