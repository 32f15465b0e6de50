//! UI Strings
//!
//! Russian is the default locale of the board; English is the fallback for
//! any other `data-locale` value.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Locale {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("ru") {
            Locale::Ru
        } else {
            Locale::En
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    /// chrono pattern matching the browser's `toLocaleString` for this locale
    pub fn datetime_format(&self) -> &'static str {
        match self {
            Locale::Ru => "%d.%m.%Y, %H:%M:%S",
            Locale::En => "%-m/%-d/%Y, %-I:%M:%S %p",
        }
    }
}

pub struct Strings {
    pub heading: &'static str,
    pub title_placeholder: &'static str,
    pub description_placeholder: &'static str,
    pub add_button: &'static str,
    pub empty_title_alert: &'static str,
    pub search_placeholder: &'static str,
    pub filter_all: &'static str,
    pub filter_done: &'static str,
    pub filter_open: &'static str,
    pub due_any: &'static str,
    pub due_with: &'static str,
    pub due_without: &'static str,
    pub sort_default: &'static str,
    pub sort_title: &'static str,
    pub sort_due: &'static str,
    pub sort_newest: &'static str,
    pub no_description: &'static str,
    pub due_prefix: &'static str,
    pub delete_title: &'static str,
    pub load_failed: &'static str,
    pub save_failed: &'static str,
    pub dismiss: &'static str,
    pub task_count: &'static str,
}

static RU: Strings = Strings {
    heading: "Список задач",
    title_placeholder: "Название задачи",
    description_placeholder: "Описание",
    add_button: "Добавить",
    empty_title_alert: "Введите название задачи!",
    search_placeholder: "Поиск...",
    filter_all: "Все",
    filter_done: "Выполненные",
    filter_open: "Невыполненные",
    due_any: "Любой срок",
    due_with: "Со сроком",
    due_without: "Без срока",
    sort_default: "По умолчанию",
    sort_title: "По названию",
    sort_due: "По сроку",
    sort_newest: "Сначала новые",
    no_description: "Нет описания",
    due_prefix: "Срок",
    delete_title: "Удалить",
    load_failed: "Не удалось загрузить задачи",
    save_failed: "Не удалось сохранить изменения",
    dismiss: "Закрыть",
    task_count: "Задач",
};

static EN: Strings = Strings {
    heading: "Tasks",
    title_placeholder: "Task title",
    description_placeholder: "Description",
    add_button: "Add",
    empty_title_alert: "Enter a task title!",
    search_placeholder: "Search...",
    filter_all: "All",
    filter_done: "Completed",
    filter_open: "Open",
    due_any: "Any due date",
    due_with: "With due date",
    due_without: "Without due date",
    sort_default: "Default order",
    sort_title: "By title",
    sort_due: "By due date",
    sort_newest: "Newest first",
    no_description: "No description",
    due_prefix: "Due",
    delete_title: "Delete",
    load_failed: "Could not load tasks",
    save_failed: "Could not save changes",
    dismiss: "Dismiss",
    task_count: "Tasks",
};
