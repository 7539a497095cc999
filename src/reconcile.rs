//! List Reconciliation
//!
//! Pure filter + sort + summary over the cached records. The output is what
//! the presentation surface renders; the input is never touched.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{priority_weight, Todo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !todo.is_completed,
            FilterMode::Completed => todo.is_completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Created,
    Priority,
    Title,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Created, SortMode::Priority, SortMode::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Created => "created",
            SortMode::Priority => "priority",
            SortMode::Title => "title",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        SortMode::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Created => "Newest first",
            SortMode::Priority => "Priority",
            SortMode::Title => "Title",
        }
    }
}

/// Counts over the whole cache, whatever the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Summary {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.is_completed).count();
        Self {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }
}

/// Display attributes of one record. Text fields are plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    /// `None` hides the description block
    pub description: Option<String>,
    pub priority_label: String,
    pub completed: bool,
    /// Empty when the timestamp does not parse
    pub created_label: String,
    pub due_label: Option<String>,
    pub completed_label: Option<String>,
}

impl TodoRow {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo
                .description
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .map(str::to_string),
            priority_label: todo.priority_label(),
            completed: todo.is_completed,
            created_label: format_timestamp(&todo.created_at),
            due_label: todo
                .due_at
                .as_deref()
                .filter(|due| !due.trim().is_empty())
                .map(format_timestamp),
            completed_label: todo
                .completed_at
                .as_deref()
                .filter(|_| todo.is_completed)
                .map(format_timestamp)
                .filter(|label| !label.is_empty()),
        }
    }
}

/// Everything the surface needs for one render pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    pub rows: Vec<TodoRow>,
    pub summary: Summary,
    pub filter: FilterMode,
    pub sort: SortMode,
}

impl ListView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

/// Filter, sort and summarize `todos` for display.
pub fn reconcile(todos: &[Todo], filter: FilterMode, sort: SortMode) -> ListView {
    let mut visible: Vec<&Todo> = todos.iter().filter(|t| filter.matches(t)).collect();

    // sort_by is stable: ties keep their input order
    match sort {
        SortMode::Priority => {
            visible.sort_by(|a, b| priority_weight(&b.priority).cmp(&priority_weight(&a.priority)))
        }
        SortMode::Title => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortMode::Created => visible.sort_by(|a, b| created_millis(b).cmp(&created_millis(a))),
    }

    ListView {
        rows: visible.into_iter().map(TodoRow::from_todo).collect(),
        summary: Summary::of(todos),
        filter,
        sort,
    }
}

/// Locale-aware title order, as `String.prototype.localeCompare` in the webview.
#[cfg(target_arch = "wasm32")]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    fallback_compare_titles(a, b)
}

/// Collation without a locale database: accents and case are ignored first,
/// then unaccented before accented, then lower case before upper case.
pub fn fallback_compare_titles(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| s.chars().flat_map(char::to_lowercase).map(fold_accent).collect::<String>();
    primary(a)
        .cmp(&primary(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Base letter of a lower-case Latin letter with diacritics
fn fold_accent(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => c,
    }
}

/// Parse host timestamps: RFC 3339, or naive date-times taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Locale-formatted date-time, empty when unparseable
pub fn format_timestamp(value: &str) -> String {
    parse_timestamp(value).map(locale_string).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn locale_string(dt: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(dt.timestamp_millis() as f64));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_string(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Unparseable creation times sort as the epoch (oldest).
fn created_millis(todo: &Todo) -> i64 {
    parse_timestamp(&todo.created_at)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}
