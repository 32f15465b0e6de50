//! Task Presentation
//!
//! Pure shaping of fetched tasks into what one list row shows.
//! The DOM side only turns [`TaskRow`]s into nodes.

use chrono::NaiveDateTime;

use crate::i18n::Locale;
use crate::models::Task;

/// Formats produced by `<input type="datetime-local">` and stored as-is by the server
const DUE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionBody {
    /// Localized "no description"
    Placeholder(&'static str),
    /// One entry per source line; rendered with line breaks between them
    Lines(Vec<String>),
}

/// View model of one list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    /// Value the completion button sends
    pub next_completed: bool,
    pub description: DescriptionBody,
    pub due_line: Option<String>,
}

impl TaskRow {
    pub fn class(&self) -> &'static str {
        if self.completed {
            "task completed"
        } else {
            "task"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.completed {
            "↩️"
        } else {
            "✅"
        }
    }
}

pub fn present(tasks: &[Task], locale: Locale) -> Vec<TaskRow> {
    tasks.iter().map(|task| present_task(task, locale)).collect()
}

fn present_task(task: &Task, locale: Locale) -> TaskRow {
    let description = match task.description.as_deref() {
        Some(text) if !text.is_empty() => {
            DescriptionBody::Lines(
                text.split('\n')
                    .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                    .collect(),
            )
        }
        _ => DescriptionBody::Placeholder(locale.strings().no_description),
    };

    let due_line = task
        .due_time
        .as_deref()
        .map(str::trim)
        .filter(|due| !due.is_empty())
        .map(|due| format!("{}: {}", locale.strings().due_prefix, format_due(due, locale)));

    TaskRow {
        id: task.id,
        title: task.title.clone(),
        completed: task.completed,
        next_completed: !task.completed,
        description,
        due_line,
    }
}

/// Local wall-clock rendering of a due time; unknown formats are shown verbatim
pub fn format_due(raw: &str, locale: Locale) -> String {
    DUE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|due| due.format(locale.datetime_format()).to_string())
        .unwrap_or_else(|| raw.to_string())
}
