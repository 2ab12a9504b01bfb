//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "status": ..., "message"?: ..., "data"?: ... }`
//! を提供する。

use serde::{Deserialize, Serialize};

/// エンベロープのステータス
///
/// JSON では `"success"` / `"error"` の小文字文字列として表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ResponseStatus {
    /// 処理が成功した
    Success,
    /// 処理が失敗した
    Error,
}

/// 公開 API の統一レスポンス型
///
/// すべての公開 API エンドポイントはこのエンベロープでレスポンスを返す。
/// `message` と `data` は値がない場合 JSON に出力されない。
///
/// 不変条件:
/// - `status == Error` のとき `message` は空でない
/// - `status == Success` のとき、削除などの応答確認のみの操作を除き `data` を持つ
///
/// ## 使用例
///
/// ```
/// use larkbridge_shared::{ApiResponse, ResponseStatus};
///
/// let response = ApiResponse::success("hello");
/// assert_eq!(response.status, ResponseStatus::Success);
/// assert_eq!(response.data, Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiResponse<T> {
    /// 処理結果
    pub status: ResponseStatus,
    /// エラー詳細または応答確認メッセージ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 操作固有のペイロード
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// データ付きの成功レスポンスを作成する
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    /// データを持たない応答確認のみの成功レスポンスを作成する
    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    /// エラーレスポンスを作成する
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
            data: None,
        }
    }
}


#[cfg(all(test, feature = "openapi"))]
mod openapi_tests {
    use utoipa::PartialSchema;

    use super::*;

    #[test]
    fn test_api_response_stringにtoschemaが実装されている() {
        let schema = ApiResponse::<String>::schema();
        let utoipa::openapi::RefOr::T(schema) = schema else {
            panic!("expected inline schema, got ref");
        };
        let utoipa::openapi::Schema::Object(obj) = schema else {
            panic!("expected object schema");
        };
        // status フィールドがスキーマに含まれていること
        assert!(obj.properties.contains_key("status"));
    }
}
