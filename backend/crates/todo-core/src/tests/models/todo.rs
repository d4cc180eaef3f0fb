use crate::{CoreError, NewTodo, Todo};

fn sample_todo() -> Todo {
    NewTodo::new("Pick up groceries", "alice", "t1").with_id(7)
}

#[test]
fn test_new_todo_with_id() {
    let todo = sample_todo();

    assert_eq!(todo.id, 7);
    assert_eq!(todo.title, "Pick up groceries");
    assert_eq!(todo.owner, "alice");
    assert_eq!(todo.tenant_id, "t1");
}

#[test]
fn test_todo_belongs_to() {
    let todo = sample_todo();

    assert!(todo.belongs_to("t1"));
    assert!(!todo.belongs_to("t2"));
}

#[test]
fn test_todo_is_owned_by() {
    let todo = sample_todo();

    assert!(todo.is_owned_by("alice"));
    assert!(!todo.is_owned_by("bob"));
}

#[test]
fn test_normalize_title_trims_whitespace() {
    let title = Todo::normalize_title("  Finish invoice report \n", 200).unwrap();

    assert_eq!(title, "Finish invoice report");
}

#[test]
fn test_normalize_title_rejects_blank() {
    let result = Todo::normalize_title("   ", 200);

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_normalize_title_counts_characters_not_bytes() {
    assert!(Todo::normalize_title("ééééé", 5).is_ok());
    assert!(Todo::normalize_title("éééééé", 5).is_err());
}

#[test]
fn test_todo_serializes_with_snake_case_fields() {
    let json = serde_json::to_value(sample_todo()).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["tenant_id"], "t1");
}
