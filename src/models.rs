//! Frontend Models
//!
//! Data structures matching the host's todo records and command payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Priority levels understood by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    /// Case-insensitive parse; `None` for values outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "urgent" => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn weight(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Urgent => 3,
        }
    }
}

/// Sort weight of a raw priority value. Unknown values weigh the same as `low`.
pub fn priority_weight(value: &str) -> u8 {
    Priority::parse(value).map(|p| p.weight()).unwrap_or(0)
}

/// Todo record (matches backend)
///
/// Priority stays a raw string so values the client does not know about
/// are still displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default)]
    pub due_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

// Older rows can carry an explicit `null` where a value is expected
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Todo {
    /// Lower-cased priority label, `medium` when the host sent none
    pub fn priority_label(&self) -> String {
        let label = self.priority.trim();
        if label.is_empty() {
            Priority::default().as_str().to_string()
        } else {
            label.to_lowercase()
        }
    }
}

/// Raw values from the creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTodoInput {
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
}

/// `create_todo` payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
}

impl NewTodo {
    /// Normalize form input: trimmed title, blank description becomes `null`,
    /// priority lower-cased with `medium` as default.
    pub fn from_input(input: &NewTodoInput) -> Self {
        let description = input.description.trim();
        let priority = input
            .priority
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_else(|| Priority::default().as_str().to_string());
        Self {
            title: input.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority,
        }
    }
}

/// Values submitted from the inline edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoEdit {
    pub title: String,
    pub description: String,
    pub priority: String,
}

/// `update_todo` patch: only changed fields are serialized
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `Some(None)` clears the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl TodoPatch {
    /// Diff an edit against the cached record.
    ///
    /// A blank title or priority means "unchanged"; a blank description
    /// clears it. Priority is compared case-insensitively and forwarded
    /// without checking it against [`Priority`].
    pub fn diff(todo: &Todo, edit: &TodoEdit) -> Self {
        let mut patch = TodoPatch::default();

        let title = edit.title.trim();
        if !title.is_empty() && title != todo.title {
            patch.title = Some(title.to_string());
        }

        let description = edit.description.trim();
        let original = todo.description.as_deref().unwrap_or("").trim();
        if description != original {
            patch.description = Some((!description.is_empty()).then(|| description.to_string()));
        }

        let priority = edit.priority.trim().to_lowercase();
        if !priority.is_empty() && priority != todo.priority.to_lowercase() {
            patch.priority = Some(priority);
        }

        patch
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }
}
