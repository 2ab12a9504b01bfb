//! Lark API クライアントのエラー型

use thiserror::Error;

/// Lark API クライアントエラー
#[derive(Debug, Clone, Error)]
pub enum LarkError {
   /// Lark API が論理エラーを返した（エンベロープの `code != 0`）
   #[error("Lark API エラー (code={code}): {msg}")]
   Api { code: i64, msg: String },

   /// tenant_access_token の取得に失敗した
   #[error("テナントアクセストークン取得エラー: {0}")]
   Token(String),

   /// ネットワークエラー
   #[error("ネットワークエラー: {0}")]
   Network(String),

   /// 予期しないエラー
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl From<reqwest::Error> for LarkError {
   fn from(err: reqwest::Error) -> Self {
      LarkError::Network(err.to_string())
   }
}

impl LarkError {
   /// エンベロープの `message` フィールドに載せる文字列を返す
   ///
   /// 論理エラーは Lark が報告した `msg` をそのまま、
   /// それ以外は内部で保持しているエラーテキストをそのまま返す。
   pub fn detail(&self) -> &str {
      match self {
         LarkError::Api { msg, .. } => msg,
         LarkError::Token(detail) | LarkError::Network(detail) | LarkError::Unexpected(detail) => {
            detail
         }
      }
   }
}
