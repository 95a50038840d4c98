//! Text normalization shared by every classifier stage

/// Lowercase, fold "ё" to "е", collapse whitespace runs and trim.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let folded = fold_case(text);
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce text to the charset used for phrase comparison.
///
/// Keeps Cyrillic `а`..`я`, Latin `a`..`z`, ASCII digits and whitespace;
/// everything else is dropped. Inner whitespace is left as is.
pub fn comparison_form(text: &str) -> String {
    fold_case(text)
        .chars()
        .filter(|c| is_comparison_char(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn fold_case(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

fn is_comparison_char(c: char) -> bool {
    matches!(c, 'а'..='я' | 'a'..='z' | '0'..='9') || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("  Терра   Создать\tЗадачу \n"), "терра создать задачу");
        assert_eq!(normalize("ЁЛКА ёлка"), "елка елка");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let samples = [
            "Привет,  ТЕРРА!",
            "Ёжик  в тумане",
            "  mixed Latin и Кириллица  ",
            "\t\n",
            "счёт №42",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
            assert_eq!(once, once.to_lowercase());
            assert!(!once.contains('ё'));
        }
    }

    #[test]
    fn test_comparison_form_drops_punctuation() {
        assert_eq!(comparison_form("Риск-менеджмент!"), "рискменеджмент");
        assert_eq!(comparison_form("  счёт №42. "), "счет 42");
        assert_eq!(comparison_form("бизнес-план"), "бизнесплан");
        assert_eq!(comparison_form("Hello, World"), "hello world");
    }
}
