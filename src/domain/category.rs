use serde::{Deserialize, Serialize};

/// Business command category assigned to an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TaskCreation,
    Marketing,
    Client,
    Supplier,
    Contract,
    Quality,
    Risk,
    Strategy,
    Compliance,
    Innovation,
    DocumentAnalysis,
    Search,
    Calendar,
    Contact,
    Reminder,
    Finance,
    Project,
    Sales,
    Inventory,
    Analytics,
    Employee,
    Meeting,
    Greeting,
    /// Fallback when nothing in the pattern table matches. Never carries phrases.
    Unknown,
}

impl Category {
    /// Every category, in the default priority order
    pub const ALL: [Category; 24] = [
        Category::TaskCreation,
        Category::Marketing,
        Category::Client,
        Category::Supplier,
        Category::Contract,
        Category::Quality,
        Category::Risk,
        Category::Strategy,
        Category::Compliance,
        Category::Innovation,
        Category::DocumentAnalysis,
        Category::Search,
        Category::Calendar,
        Category::Contact,
        Category::Reminder,
        Category::Finance,
        Category::Project,
        Category::Sales,
        Category::Inventory,
        Category::Analytics,
        Category::Employee,
        Category::Meeting,
        Category::Greeting,
        Category::Unknown,
    ];

    /// Wire name, as sent to the backend and the browser
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TaskCreation => "task_creation",
            Category::Marketing => "marketing",
            Category::Client => "client",
            Category::Supplier => "supplier",
            Category::Contract => "contract",
            Category::Quality => "quality",
            Category::Risk => "risk",
            Category::Strategy => "strategy",
            Category::Compliance => "compliance",
            Category::Innovation => "innovation",
            Category::DocumentAnalysis => "document_analysis",
            Category::Search => "search",
            Category::Calendar => "calendar",
            Category::Contact => "contact",
            Category::Reminder => "reminder",
            Category::Finance => "finance",
            Category::Project => "project",
            Category::Sales => "sales",
            Category::Inventory => "inventory",
            Category::Analytics => "analytics",
            Category::Employee => "employee",
            Category::Meeting => "meeting",
            Category::Greeting => "greeting",
            Category::Unknown => "unknown",
        }
    }

    /// Whether this category is a business command the backend should execute
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Category::Greeting | Category::Unknown)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "document_analysis".parse::<Category>().unwrap(),
            Category::DocumentAnalysis
        );
        assert_eq!(" Finance ".parse::<Category>().unwrap(), Category::Finance);
        assert!("weather".parse::<Category>().is_err());
    }

    #[test]
    fn test_actionable() {
        assert!(Category::TaskCreation.is_actionable());
        assert!(!Category::Greeting.is_actionable());
        assert!(!Category::Unknown.is_actionable());
    }
}
