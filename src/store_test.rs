use super::*;
use time::macros::datetime;

#[test]
fn save_and_get_round_trip() {
    let mut store = WorkflowStore::new();
    let id = store.save("Onboarding", "A → B", "graph TB\nA-->B");
    let saved = store.get(id).unwrap();
    assert_eq!(saved.name, "Onboarding");
    assert_eq!(saved.description, "A → B");
    assert_eq!(saved.mermaid_code, "graph TB\nA-->B");
}

#[test]
fn ids_are_unique_and_listing_keeps_save_order() {
    let mut store = WorkflowStore::new();
    let first = store.save("one", "", "");
    let second = store.save("two", "", "");
    assert_ne!(first, second);
    let names: Vec<&str> = store.list().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["one", "two"]);
}

#[test]
fn remove_deletes_only_the_target() {
    let mut store = WorkflowStore::new();
    let first = store.save("one", "", "");
    let second = store.save("two", "", "");

    let removed = store.remove(first).unwrap();
    assert_eq!(removed.name, "one");
    assert!(store.get(first).is_none());
    assert!(store.get(second).is_some());
    assert_eq!(store.len(), 1);
    assert!(store.remove(first).is_none());
}

#[test]
fn next_default_name_counts_saved_entries() {
    let mut store = WorkflowStore::new();
    assert!(store.is_empty());
    assert_eq!(store.next_default_name(), "Workflow 1");
    store.save("x", "", "");
    assert_eq!(store.next_default_name(), "Workflow 2");
}

#[test]
fn display_label_formats_timestamp() {
    let mut store = WorkflowStore::new();
    let id = store.insert(SavedWorkflow {
        id: WorkflowId::new(),
        name: "Sales".into(),
        description: String::new(),
        mermaid_code: String::new(),
        saved_at: datetime!(2026-03-04 09:05 UTC),
    });
    assert_eq!(store.get(id).unwrap().display_label(), "Sales (2026-03-04 09:05)");
}

#[test]
fn serializes_with_rfc3339_timestamp() {
    let workflow = SavedWorkflow {
        id: WorkflowId::new(),
        name: "Sales".into(),
        description: "d".into(),
        mermaid_code: "A-->B".into(),
        saved_at: datetime!(2026-03-04 09:05 UTC),
    };
    let json = serde_json::to_value(&workflow).unwrap();
    assert_eq!(json["saved_at"], "2026-03-04T09:05:00Z");
    assert_eq!(json["id"], workflow.id.to_string());
}
