//! Display labels and colours for every enum.
//!
//! This is the single mapping table for display surfaces. Renderers look
//! values up here rather than keeping their own copies.

use crate::enums::{IssueStatus, Priority, ProjectStatus, Role, Seniority};

/// Colour family used to render a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
    Critical,
    Info,
    Muted,
}

impl Tone {
    /// Hex colour from the app palette.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Positive => "#4CAF50",
            Self::Warning => "#FF9800",
            Self::Critical => "#F44336",
            Self::Info => "#2196F3",
            Self::Muted => "#9E9E9E",
        }
    }

    /// SGR foreground code for terminal output.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Positive => "32",
            Self::Warning => "33",
            Self::Critical => "31",
            Self::Info => "34",
            Self::Muted => "90",
        }
    }
}

/// Human-facing rendering of an enum value.
pub trait Presentation: Copy {
    fn label(self) -> &'static str;

    /// Colour family, or `None` for values that render uncoloured.
    fn tone(self) -> Option<Tone> {
        None
    }
}

impl Presentation for ProjectStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Finalized => "Finalized",
        }
    }

    fn tone(self) -> Option<Tone> {
        Some(match self {
            Self::Active => Tone::Positive,
            Self::Inactive => Tone::Warning,
            Self::Finalized => Tone::Muted,
        })
    }
}

impl Presentation for IssueStatus {
    fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To do",
            Self::InProgress => "In progress",
            Self::Review => "In review",
            Self::Done => "Done",
        }
    }

    fn tone(self) -> Option<Tone> {
        Some(match self {
            Self::ToDo => Tone::Muted,
            Self::InProgress => Tone::Info,
            Self::Review => Tone::Warning,
            Self::Done => Tone::Positive,
        })
    }
}

impl Presentation for Priority {
    fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    fn tone(self) -> Option<Tone> {
        Some(match self {
            Self::Low => Tone::Positive,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Critical,
        })
    }
}

impl Presentation for Role {
    fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Tester => "Tester",
            Self::ProjectManager => "Project manager",
        }
    }
}

impl Presentation for Seniority {
    fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
        }
    }
}

/// Tone for a stored enum string (`"in_progress"`, `"high"`, ...).
///
/// Lets renderers that only see serialized values reuse the tables above.
#[must_use]
pub fn tone_for_stored(value: &str) -> Option<Tone> {
    let quoted = serde_json::Value::String(value.to_string());
    if let Ok(status) = serde_json::from_value::<IssueStatus>(quoted.clone()) {
        return status.tone();
    }
    if let Ok(priority) = serde_json::from_value::<Priority>(quoted.clone()) {
        return priority.tone();
    }
    serde_json::from_value::<ProjectStatus>(quoted)
        .ok()
        .and_then(Presentation::tone)
}

/// Avatar initials: first letters of the first and last words, or the first
/// two letters of a single word. `?` for a blank name.
#[must_use]
pub fn initials(full_name: &str) -> String {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "?".to_string(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}
