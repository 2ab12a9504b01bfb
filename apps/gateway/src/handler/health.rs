//! # ヘルスチェックハンドラ
//!
//! ゲートウェイの稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//!
//! レスポンス型は [`larkbridge_shared::HealthResponse`] を参照。

use axum::Json;
use larkbridge_shared::HealthResponse;

/// ゲートウェイのヘルスチェックエンドポイント
#[utoipa::path(
   get,
   path = "/health",
   tag = "health",
   responses(
      (status = 200, description = "サーバー稼働中", body = HealthResponse)
   )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
