//! # ゲートウェイのエラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! 各ハンドラが共通で使うレスポンスヘルパーと JSON 抽出器を集約する。

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larkbridge_shared::ApiResponse;

use crate::client::LarkError;

// --- JSON 抽出器 ---

/// エンベロープ形式でリジェクトする JSON 抽出器
///
/// axum 標準の `Json` はリジェクト時に素のテキストボディを返すため、
/// パースエラーのメッセージを `ApiResponse` に包んで 400 を返すラッパーを使う。
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(validation_error_response(&rejection.body_text())),
        }
    }
}

// --- IntoResponse for LarkError ---

impl IntoResponse for LarkError {
    fn into_response(self) -> Response {
        server_error_response(self.detail())
    }
}

/// Lark API エラーをログ付きでレスポンスに変換する
///
/// `Token` / `Network` / `Unexpected` エラーの場合はコンテキスト付きで
/// `tracing::error!` を出力する。論理エラー（`Api`）は Lark が報告した
/// メッセージをレスポンスに載せるのみ。
pub fn log_and_convert_lark_error(context: &str, err: LarkError) -> Response {
    match &err {
        LarkError::Token(_) | LarkError::Network(_) | LarkError::Unexpected(_) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "lark_api",
                "{}で内部エラー: {}",
                context,
                err
            );
        }
        LarkError::Api { .. } => {}
    }
    err.into_response()
}

// --- レスポンスヘルパー ---

/// バリデーションエラーレスポンス（400）
pub fn validation_error_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(detail)),
    )
        .into_response()
}

/// 404 Not Found レスポンス
pub fn not_found_response(detail: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(detail))).into_response()
}

/// 内部エラーレスポンス（500）
pub fn server_error_response(detail: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(detail)),
    )
        .into_response()
}
