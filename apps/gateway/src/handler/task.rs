//! タスク関連ハンドラ
//!
//! Lark タスクの作成・取得・削除 API。
//!
//! - `POST /tasks`: タスク作成
//! - `GET /tasks/{task_id}`: タスク取得
//! - `DELETE /tasks/{task_id}`: タスク削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larkbridge_shared::ApiResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    client::lark::{
        LarkError,
        LarkTaskClient,
        types::{Due, TaskBody},
    },
    error::{AppJson, log_and_convert_lark_error, not_found_response, validation_error_response},
};

/// タスクハンドラが共有する状態
pub struct TaskState {
    pub lark_client: Arc<dyn LarkTaskClient>,
}

// --- リクエスト型 ---

/// タスク作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// タスクの概要
    #[serde(default)]
    pub summary:     String,
    /// タスクの詳細説明
    #[serde(default)]
    pub description: String,
    /// 期限の Unix タイムスタンプ（秒）。0 以下なら期限なし
    #[serde(default)]
    pub due_time:    i64,
}

// --- レスポンス型 ---

/// タスクデータ
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskData {
    pub task_id: String,
    pub summary: String,
    pub url:     String,
}

// --- ハンドラ ---

/// POST /tasks
///
/// Lark タスクを作成する。
#[utoipa::path(
   post,
   path = "/tasks",
   tag = "tasks",
   request_body = CreateTaskRequest,
   responses(
      (status = 200, description = "タスク作成成功", body = ApiResponse<TaskData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_task(
    State(state): State<Arc<TaskState>>,
    AppJson(req): AppJson<CreateTaskRequest>,
) -> Result<Response, Response> {
    if req.summary.is_empty() {
        return Err(validation_error_response("summary is required"));
    }

    let due = (req.due_time > 0).then(|| Due { time: req.due_time.to_string() });
    let body = TaskBody {
        summary: req.summary,
        description: req.description,
        due,
    };
    let data = state
        .lark_client
        .create_task(body)
        .await
        .map_err(|e| log_and_convert_lark_error("タスク作成", e))?;

    let task = data.task;
    let response = ApiResponse::success(TaskData {
        task_id: task.id,
        summary: task.summary,
        url:     String::new(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /tasks/{task_id}
///
/// タスクを取得する。Lark 側が論理エラーを返した場合は一律 404 として扱う。
#[utoipa::path(
   get,
   path = "/tasks/{task_id}",
   tag = "tasks",
   params(("task_id" = String, Path, description = "タスクID")),
   responses(
      (status = 200, description = "タスク取得成功", body = ApiResponse<TaskData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 404, description = "タスクが見つからない", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%task_id))]
pub async fn get_task(
    State(state): State<Arc<TaskState>>,
    Path(task_id): Path<String>,
) -> Result<Response, Response> {
    if task_id.is_empty() {
        return Err(validation_error_response("Task ID is required"));
    }

    let data = match state.lark_client.get_task(&task_id).await {
        Ok(data) => data,
        Err(LarkError::Api { msg, .. }) => return Err(not_found_response(&msg)),
        Err(e) => return Err(log_and_convert_lark_error("タスク取得", e)),
    };

    let task = data.task;
    let response = ApiResponse::success(TaskData {
        task_id: task.id,
        summary: task.summary,
        url:     String::new(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// DELETE /tasks/{task_id}
///
/// タスクを削除する。
#[utoipa::path(
   delete,
   path = "/tasks/{task_id}",
   tag = "tasks",
   params(("task_id" = String, Path, description = "タスクID")),
   responses(
      (status = 200, description = "タスク削除成功", body = ApiResponse<serde_json::Value>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%task_id))]
pub async fn delete_task(
    State(state): State<Arc<TaskState>>,
    Path(task_id): Path<String>,
) -> Result<Response, Response> {
    if task_id.is_empty() {
        return Err(validation_error_response("Task ID is required"));
    }

    state
        .lark_client
        .delete_task(&task_id)
        .await
        .map_err(|e| log_and_convert_lark_error("タスク削除", e))?;

    let response = ApiResponse::<serde_json::Value>::success_message("Task deleted");
    Ok((StatusCode::OK, Json(response)).into_response())
}
