//! User-facing replies for each classification

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{Category, Classification, Interpretation};

const GREETING_REPLIES: &[&str] = &[
    "Здравствуйте! Я ТЕРРА, ваш голосовой бизнес-ассистент. Чем могу помочь?",
    "Приветствую! Готова помочь вам в решении задач.",
    "Добрый день! Как я могу вам помочь?",
];

const UNKNOWN_REPLIES: &[&str] = &[
    "Извините, я не совсем поняла. Можете сказать иначе?",
    "Не уверена, что правильно поняла. Попробуйте переформулировать.",
];

const DEFAULT_TASK_DESCRIPTION: &str = "Новая задача";
const NO_SEARCH_QUERY_REPLY: &str = "Не указан поисковый запрос";

const EMPTY_COMMAND_REPLY: &str = "Ожидание команды после слова «ТЕРРА»";
const WAKE_WORD_ABSENT_REPLY: &str = "Для активации скажите «ТЕРРА» и вашу команду";

/// Picks reply text for classification results.
///
/// Variants rotate on every call so repeated greetings don't sound canned.
#[derive(Debug, Default)]
pub struct Responses {
    turn: AtomicUsize,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, classification: Classification) -> String {
        self.reply_to(&classification.into())
    }

    /// Reply that uses the command argument where the category takes one
    pub fn reply_to(&self, interpretation: &Interpretation) -> String {
        let argument = interpretation.argument();
        match interpretation.classification {
            Classification::Command(Category::TaskCreation) => format!(
                "Создана новая задача: {}",
                argument.unwrap_or(DEFAULT_TASK_DESCRIPTION)
            ),
            Classification::Command(Category::Search) => match argument {
                Some(query) => format!("Выполняется поиск по запросу: {}", query),
                None => NO_SEARCH_QUERY_REPLY.to_string(),
            },
            Classification::EmptyCommand => EMPTY_COMMAND_REPLY.to_string(),
            Classification::WakeWordAbsent => WAKE_WORD_ABSENT_REPLY.to_string(),
            Classification::Command(Category::Greeting) => self.pick(GREETING_REPLIES),
            Classification::Command(Category::Unknown) => self.pick(UNKNOWN_REPLIES),
            Classification::Command(category) => match argument {
                Some(argument) => {
                    format!("Команда принята: {} ({})", category_title(category), argument)
                }
                None => format!("Команда принята: {}", category_title(category)),
            },
        }
    }

    fn pick(&self, variants: &[&str]) -> String {
        let turn = self.turn.fetch_add(1, Ordering::Relaxed);
        variants[turn % variants.len()].to_string()
    }
}

/// Human-readable Russian title of a category
pub fn category_title(category: Category) -> &'static str {
    match category {
        Category::TaskCreation => "создание задачи",
        Category::Marketing => "маркетинг",
        Category::Client => "работа с клиентами",
        Category::Supplier => "поставщики",
        Category::Contract => "договоры",
        Category::Quality => "качество",
        Category::Risk => "риски",
        Category::Strategy => "стратегия",
        Category::Compliance => "соответствие требованиям",
        Category::Innovation => "инновации",
        Category::DocumentAnalysis => "анализ документа",
        Category::Search => "поиск",
        Category::Calendar => "календарь",
        Category::Contact => "контакты",
        Category::Reminder => "напоминание",
        Category::Finance => "финансы",
        Category::Project => "проекты",
        Category::Sales => "продажи",
        Category::Inventory => "склад",
        Category::Analytics => "аналитика",
        Category::Employee => "персонал",
        Category::Meeting => "совещания",
        Category::Greeting => "приветствие",
        Category::Unknown => "неизвестная команда",
    }
}
