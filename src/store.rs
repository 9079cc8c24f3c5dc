//! In-memory workflow history.
//!
//! DESIGN
//! ======
//! An explicit store owned by whoever drives the UI and passed where it is
//! needed; nothing here is global. Entries are keyed by an opaque id and
//! listed in save order. Nothing is persisted.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;
use uuid::Uuid;

/// Opaque identifier for a saved workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(Uuid);

impl WorkflowId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWorkflow {
    pub id: WorkflowId,
    pub name: String,
    pub description: String,
    pub mermaid_code: String,
    #[serde(with = "time::serde::rfc3339")]
    pub saved_at: OffsetDateTime,
}

impl SavedWorkflow {
    /// `"<name> (YYYY-MM-DD HH:MM)"`, as shown in a picker.
    #[must_use]
    pub fn display_label(&self) -> String {
        let stamp = self
            .saved_at
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .unwrap_or_default();
        format!("{} ({stamp})", self.name)
    }
}

#[derive(Debug, Default)]
pub struct WorkflowStore {
    entries: Vec<SavedWorkflow>,
}

impl WorkflowStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a workflow and return its new id.
    pub fn save(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        mermaid_code: impl Into<String>,
    ) -> WorkflowId {
        let saved_at = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.insert(SavedWorkflow {
            id: WorkflowId::new(),
            name: name.into(),
            description: description.into(),
            mermaid_code: mermaid_code.into(),
            saved_at,
        })
    }

    fn insert(&mut self, workflow: SavedWorkflow) -> WorkflowId {
        let id = workflow.id;
        tracing::debug!(%id, name = %workflow.name, "workflow saved");
        self.entries.push(workflow);
        id
    }

    #[must_use]
    pub fn get(&self, id: WorkflowId) -> Option<&SavedWorkflow> {
        self.entries.iter().find(|w| w.id == id)
    }

    /// All workflows in save order.
    #[must_use]
    pub fn list(&self) -> &[SavedWorkflow] {
        &self.entries
    }

    /// Remove a workflow, returning it if it existed.
    pub fn remove(&mut self, id: WorkflowId) -> Option<SavedWorkflow> {
        let index = self.entries.iter().position(|w| w.id == id)?;
        Some(self.entries.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Suggested name for the next save: `Workflow <n+1>`.
    #[must_use]
    pub fn next_default_name(&self) -> String {
        format!("Workflow {}", self.entries.len() + 1)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
