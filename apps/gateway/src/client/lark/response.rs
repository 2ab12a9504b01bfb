//! Lark API レスポンスの共通ハンドリング

use serde::{Deserialize, de::DeserializeOwned};

use super::error::LarkError;

/// Lark API の共通レスポンスエンベロープ
///
/// 全エンドポイントが `{code, msg, data}` 形式で応答する。
/// `code == 0` が論理成功を表す。
#[derive(Debug, Deserialize)]
pub struct LarkResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub msg:  String,
    pub data: Option<T>,
}

/// Lark API レスポンスの共通ハンドリング
///
/// HTTP ステータスとエンベロープの `code` を検査し、成功時は `data` を返す。
/// `data` が省略された場合は `T::default()` で補完する。
///
/// # エラー
///
/// - 非 2xx でボディがエンベロープとしてパースできる場合は [`LarkError::Api`]
/// - 非 2xx でパースできない場合は [`LarkError::Unexpected`]
/// - 2xx で `code != 0` の場合は [`LarkError::Api`]
pub(super) async fn handle_response<T>(response: reqwest::Response) -> Result<T, LarkError>
where
    T: DeserializeOwned + Default,
{
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // エラーステータスでも Lark はエンベロープ形式でボディを返すことが多い
        if let Ok(envelope) = serde_json::from_str::<LarkResponse<serde_json::Value>>(&body) {
            return Err(LarkError::Api {
                code: envelope.code,
                msg:  envelope.msg,
            });
        }
        return Err(LarkError::Unexpected(format!(
            "予期しないステータス {}: {}",
            status, body
        )));
    }

    let envelope = response.json::<LarkResponse<T>>().await?;

    if envelope.code != 0 {
        return Err(LarkError::Api {
            code: envelope.code,
            msg:  envelope.msg,
        });
    }

    Ok(envelope.data.unwrap_or_default())
}
