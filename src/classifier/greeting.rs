//! Greeting detection by stem prefix

use super::normalize::normalize;

/// Recognizes utterances that open with a greeting ("привет", "добрый день", ...)
#[derive(Debug, Clone)]
pub struct GreetingDetector {
    stems: Vec<String>,
}

impl GreetingDetector {
    pub fn new<S: AsRef<str>>(stems: &[S]) -> Self {
        Self {
            stems: stems
                .iter()
                .map(|s| normalize(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    /// First stem `text` starts with, if any. `text` must already be normalized.
    pub fn detect(&self, text: &str) -> Option<&str> {
        self.stems
            .iter()
            .find(|stem| text.starts_with(stem.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> GreetingDetector {
        GreetingDetector::new(&["привет", "здравствуй", "добр", "хай", "hello"])
    }

    #[test]
    fn test_detect_prefix() {
        let detector = detector();
        assert_eq!(detector.detect("привет"), Some("привет"));
        assert_eq!(detector.detect("добрый день"), Some("добр"));
        assert_eq!(detector.detect("здравствуйте коллеги"), Some("здравствуй"));
        assert_eq!(detector.detect("hello there"), Some("hello"));
    }

    #[test]
    fn test_only_prefix_counts() {
        let detector = detector();
        assert_eq!(detector.detect("скажи привет"), None);
        assert_eq!(detector.detect("добавить контакт"), None);
        assert_eq!(detector.detect(""), None);
    }

    #[test]
    fn test_stems_are_normalized() {
        let detector = GreetingDetector::new(&["  ПРИВЕТ ", ""]);
        assert_eq!(detector.stems(), ["привет"]);
    }
}
