//! LarkClient スーパートレイトとクライアント実装の構造体

use super::{
   document_client::LarkDocumentClient,
   error::LarkError,
   task_client::LarkTaskClient,
   token::TokenManager,
   wiki_client::LarkWikiClient,
};

/// Lark API クライアントトレイト（スーパートレイト）
///
/// Document / Task / Wiki の各サブトレイトを束ねるスーパートレイト。
/// テスト時にはサブトレイト単位でスタブを使用できる。
///
/// `dyn LarkClient` はオブジェクトセーフであり、
/// `Arc<dyn LarkClient>` として使用可能。
pub trait LarkClient: LarkDocumentClient + LarkTaskClient + LarkWikiClient {}

/// ブランケット impl: 3 つのサブトレイトをすべて実装する型は
/// 自動的に `LarkClient` を実装する。
impl<T> LarkClient for T where T: LarkDocumentClient + LarkTaskClient + LarkWikiClient {}

/// Lark API クライアント実装
///
/// アプリケーション認証情報を保持し、呼び出しごとに
/// キャッシュ済みの tenant_access_token を Bearer ヘッダーとして付与する。
pub struct LarkClientImpl {
   pub(super) base_url: String,
   pub(super) client:   reqwest::Client,
   pub(super) tokens:   TokenManager,
}

impl LarkClientImpl {
   /// 新しい LarkClient を作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: Lark Open API のベース URL（例: `https://open.larksuite.com`）
   /// - `app_id`: アプリケーション ID
   /// - `app_secret`: アプリケーションシークレット
   pub fn new(base_url: &str, app_id: &str, app_secret: &str) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client:   reqwest::Client::new(),
         tokens:   TokenManager::new(app_id, app_secret),
      }
   }

   /// 有効な tenant_access_token を返す
   pub(super) async fn bearer_token(&self) -> Result<String, LarkError> {
      self.tokens.token(&self.client, &self.base_url).await
   }
}
