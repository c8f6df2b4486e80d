//! Summary staging for an ended session and the message it produces.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::models::{StepId, TaskId};

/// Which list a free-text summary entry is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Becomes a new pending step
    Next,
    /// Becomes a new completed step
    Completed,
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" | "todo" => Ok(EntryKind::Next),
            "completed" | "done" => Ok(EntryKind::Completed),
            _ => Err(format!("Invalid entry kind: {s}")),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Next => f.write_str("next"),
            EntryKind::Completed => f.write_str("completed"),
        }
    }
}

/// A trimmed, non-empty free-text entry waiting to become a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedEntry {
    pub kind: EntryKind,
    pub text: String,
}

/// Edits the user makes on the summary screen before saving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    selected: Vec<StepId>,
    entries: Vec<StagedEntry>,
}

impl SessionSummary {
    /// Adds or removes a pending step from the "completed this session"
    /// selection. Returns whether the step is selected afterwards.
    pub fn toggle_selection(&mut self, step_id: &StepId) -> bool {
        if let Some(index) = self.selected.iter().position(|id| id == step_id) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(step_id.clone());
            true
        }
    }

    /// Stages a free-text entry. Blank text is rejected.
    pub fn add_entry(&mut self, kind: EntryKind, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.entries.push(StagedEntry {
            kind,
            text: text.to_string(),
        });
        true
    }

    pub fn is_selected(&self, step_id: &StepId) -> bool {
        self.selected.contains(step_id)
    }

    /// Selected step ids in the order they were picked.
    pub fn selected(&self) -> &[StepId] {
        &self.selected
    }

    /// Every staged entry in the order it was added.
    pub fn entries(&self) -> &[StagedEntry] {
        &self.entries
    }

    /// Staged texts of one kind, in entry order.
    pub fn texts(&self, kind: EntryKind) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.kind == kind)
            .map(|entry| entry.text.as_str())
    }

    pub(crate) fn into_reconciliation(self, task_id: TaskId) -> Reconciliation {
        let new_next_steps = self.texts(EntryKind::Next).map(str::to_string).collect();
        let new_completed_steps = self
            .texts(EntryKind::Completed)
            .map(str::to_string)
            .collect();
        Reconciliation {
            task_id,
            completed_step_ids: self.selected,
            new_next_steps,
            new_completed_steps,
        }
    }
}

/// Message a finished session hands to the task store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub task_id: TaskId,
    pub completed_step_ids: Vec<StepId>,
    pub new_next_steps: Vec<String>,
    pub new_completed_steps: Vec<String>,
}

impl Reconciliation {
    /// True when applying the message cannot change the task.
    pub fn is_empty(&self) -> bool {
        self.completed_step_ids.is_empty()
            && self.new_next_steps.is_empty()
            && self.new_completed_steps.is_empty()
    }
}
