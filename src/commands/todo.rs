//! Todo Commands
//!
//! Typed wrappers for the host's todo commands.

use serde::Serialize;
use serde_json::Value;

use super::Bridge;
use crate::error::ViewError;
use crate::models::{NewTodo, Todo, TodoPatch};

pub const LIST_TODOS: &str = "list_todos";
pub const CREATE_TODO: &str = "create_todo";
pub const UPDATE_TODO: &str = "update_todo";
pub const TOGGLE_TODO: &str = "toggle_todo";
pub const DELETE_TODO: &str = "delete_todo";
pub const DB_PING: &str = "db_ping";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTodoArgs<'a> {
    payload: &'a NewTodo,
}

#[derive(Serialize)]
struct UpdateTodoArgs<'a> {
    id: i64,
    patch: &'a TodoPatch,
}

#[derive(Serialize)]
struct ToggleTodoArgs {
    id: i64,
    #[serde(rename = "toCompleted")]
    to_completed: bool,
}

#[derive(Serialize)]
struct IdArgs {
    id: i64,
}

fn encode<T: Serialize>(command: &str, args: &T) -> Result<Value, ViewError> {
    serde_json::to_value(args).map_err(|e| ViewError::codec(command, e))
}

// ========================
// Commands
// ========================

/// Anything other than an array is read as an empty list.
pub async fn list_todos<B: Bridge + ?Sized>(bridge: &B) -> Result<Vec<Todo>, ViewError> {
    log::debug!("[rpc] {}()", LIST_TODOS);
    let result = bridge.invoke(LIST_TODOS, Value::Null).await?;
    if !result.is_array() {
        log::warn!("[rpc] {} returned a non-list result, treating as empty", LIST_TODOS);
        return Ok(Vec::new());
    }
    let todos: Vec<Todo> = serde_json::from_value(result).map_err(|e| ViewError::codec(LIST_TODOS, e))?;
    log::debug!("[rpc] {} -> {} todos", LIST_TODOS, todos.len());
    Ok(todos)
}

pub async fn create_todo<B: Bridge + ?Sized>(bridge: &B, payload: &NewTodo) -> Result<(), ViewError> {
    log::info!("[rpc] {}({:?})", CREATE_TODO, payload);
    let args = encode(CREATE_TODO, &CreateTodoArgs { payload })?;
    bridge.invoke(CREATE_TODO, args).await?;
    Ok(())
}

pub async fn update_todo<B: Bridge + ?Sized>(bridge: &B, id: i64, patch: &TodoPatch) -> Result<(), ViewError> {
    log::info!("[rpc] {}(id={}, {:?})", UPDATE_TODO, id, patch);
    let args = encode(UPDATE_TODO, &UpdateTodoArgs { id, patch })?;
    bridge.invoke(UPDATE_TODO, args).await?;
    Ok(())
}

pub async fn toggle_todo<B: Bridge + ?Sized>(bridge: &B, id: i64, to_completed: bool) -> Result<(), ViewError> {
    log::info!("[rpc] {}(id={}, toCompleted={})", TOGGLE_TODO, id, to_completed);
    let args = encode(TOGGLE_TODO, &ToggleTodoArgs { id, to_completed })?;
    bridge.invoke(TOGGLE_TODO, args).await?;
    Ok(())
}

pub async fn delete_todo<B: Bridge + ?Sized>(bridge: &B, id: i64) -> Result<(), ViewError> {
    log::info!("[rpc] {}(id={})", DELETE_TODO, id);
    let args = encode(DELETE_TODO, &IdArgs { id })?;
    bridge.invoke(DELETE_TODO, args).await?;
    Ok(())
}

/// Host health check; returns the host's status text
pub async fn db_ping<B: Bridge + ?Sized>(bridge: &B) -> Result<String, ViewError> {
    let result = bridge.invoke(DB_PING, Value::Null).await?;
    Ok(match result {
        Value::String(status) => status,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBridge;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_todos_non_array_is_empty() {
        let bridge = MockBridge::new();
        bridge.respond(LIST_TODOS, Ok(json!({"unexpected": true})));
        let todos = list_todos(&bridge).await.unwrap();
        assert!(todos.is_empty());
        assert_eq!(bridge.calls(), vec![(LIST_TODOS.to_string(), Value::Null)]);
    }

    #[tokio::test]
    async fn test_list_todos_accepts_null_priority() {
        let bridge = MockBridge::new();
        bridge.respond(
            LIST_TODOS,
            Ok(json!([
                {"id": 1, "title": "Old", "priority": null, "is_completed": false, "created_at": "2024-03-01T10:00:00Z"},
                {"id": 2, "title": "New", "priority": "high", "is_completed": false, "created_at": "2024-03-02T10:00:00Z"}
            ])),
        );
        let todos = list_todos(&bridge).await.unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].priority_label(), "medium");
        assert_eq!(todos[1].priority_label(), "high");
    }

    #[tokio::test]
    async fn test_list_todos_malformed_record_is_codec_error() {
        let bridge = MockBridge::new();
        bridge.respond(LIST_TODOS, Ok(json!([{"title": "no id"}])));
        let err = list_todos(&bridge).await.unwrap_err();
        assert!(matches!(err, ViewError::Codec { ref command, .. } if command == LIST_TODOS));
    }

    #[tokio::test]
    async fn test_argument_shapes() {
        let bridge = MockBridge::new();
        let payload = NewTodo {
            title: "Ship".to_string(),
            description: None,
            priority: "high".to_string(),
        };
        create_todo(&bridge, &payload).await.unwrap();
        toggle_todo(&bridge, 4, true).await.unwrap();
        delete_todo(&bridge, 4).await.unwrap();
        let patch = TodoPatch {
            title: Some("Shipped".to_string()),
            ..TodoPatch::default()
        };
        update_todo(&bridge, 4, &patch).await.unwrap();

        assert_eq!(
            bridge.calls(),
            vec![
                (
                    CREATE_TODO.to_string(),
                    json!({"payload": {"title": "Ship", "description": null, "priority": "high"}})
                ),
                (TOGGLE_TODO.to_string(), json!({"id": 4, "toCompleted": true})),
                (DELETE_TODO.to_string(), json!({"id": 4})),
                (UPDATE_TODO.to_string(), json!({"id": 4, "patch": {"title": "Shipped"}})),
            ]
        );
    }

    #[tokio::test]
    async fn test_remote_error_is_propagated() {
        let bridge = MockBridge::new();
        bridge.respond(DELETE_TODO, Err(ViewError::RemoteCall("Todo not found".to_string())));
        let err = delete_todo(&bridge, 99).await.unwrap_err();
        assert_eq!(err, ViewError::RemoteCall("Todo not found".to_string()));
    }

    #[tokio::test]
    async fn test_db_ping_status() {
        let bridge = MockBridge::new();
        bridge.respond(DB_PING, Ok(json!("db ok: 1")));
        assert_eq!(db_ping(&bridge).await.unwrap(), "db ok: 1");
    }
}
