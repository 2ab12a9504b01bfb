//! tenant_access_token の取得とキャッシュ

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::error::LarkError;

/// 有効期限の何秒前から再取得を行うか
const REFRESH_MARGIN_SECS: u64 = 300;

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
   app_id:     &'a str,
   app_secret: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
   code: i64,
   #[serde(default)]
   msg: String,
   #[serde(default)]
   tenant_access_token: String,
   /// トークンの残り有効時間（秒）
   #[serde(default)]
   expire: u64,
}

#[derive(Clone)]
struct CachedToken {
   token:      String,
   expires_at: Instant,
}

/// tenant_access_token のキャッシュ付きプロバイダ
///
/// Lark の認証エンドポイントからテナントアクセストークンを取得し、
/// 有効期限の [`REFRESH_MARGIN_SECS`] 秒前まではキャッシュ済みの値を返す。
pub(super) struct TokenManager {
   app_id:     String,
   app_secret: String,
   cache:      Mutex<Option<CachedToken>>,
}

impl TokenManager {
   pub(super) fn new(app_id: &str, app_secret: &str) -> Self {
      Self {
         app_id:     app_id.to_string(),
         app_secret: app_secret.to_string(),
         cache:      Mutex::new(None),
      }
   }

   /// 有効なトークンを返す
   ///
   /// キャッシュが存在し期限内であればそれを返し、
   /// そうでなければ `POST /open-apis/auth/v3/tenant_access_token/internal` で再取得する。
   pub(super) async fn token(
      &self,
      client: &reqwest::Client,
      base_url: &str,
   ) -> Result<String, LarkError> {
      let mut cache = self.cache.lock().await;

      if let Some(cached) = cache.as_ref()
         && Instant::now() < cached.expires_at
      {
         return Ok(cached.token.clone());
      }

      let url = format!("{}/open-apis/auth/v3/tenant_access_token/internal", base_url);
      let response = client
         .post(&url)
         .json(&TokenRequest {
            app_id:     &self.app_id,
            app_secret: &self.app_secret,
         })
         .send()
         .await
         .map_err(|e| LarkError::Token(e.to_string()))?;

      // このエンドポイントだけはエンベロープではなくトップレベルで応答する
      let body = response
         .json::<TokenResponse>()
         .await
         .map_err(|e| LarkError::Token(e.to_string()))?;

      if body.code != 0 {
         return Err(LarkError::Token(body.msg));
      }

      let expires_at =
         Instant::now() + Duration::from_secs(body.expire.saturating_sub(REFRESH_MARGIN_SECS));
      *cache = Some(CachedToken {
         token: body.tenant_access_token.clone(),
         expires_at,
      });

      Ok(body.tenant_access_token)
   }
}
