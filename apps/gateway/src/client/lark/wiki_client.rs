//! Wiki 関連の Lark API クライアント

use async_trait::async_trait;

use super::{
   client_impl::LarkClientImpl,
   error::LarkError,
   response::handle_response,
   types::{
      CreateNodeBody,
      MoveDocsToWikiBody,
      MoveDocsToWikiData,
      MoveNodeBody,
      UpdateTitleBody,
      WikiNodeData,
      WikiNodeListData,
      WikiSearchBody,
      WikiSearchData,
   },
};

/// Wiki 関連の Lark API クライアントトレイト
#[async_trait]
pub trait LarkWikiClient: Send + Sync {
   /// Wiki ノードを検索する
   ///
   /// Lark の `POST /open-apis/wiki/v1/nodes/search` を呼び出す。
   /// `page_size` / `page_token` は値の有無にかかわらずクエリに載せる。
   async fn search_nodes(
      &self,
      body: WikiSearchBody,
      page_size: i64,
      page_token: &str,
   ) -> Result<WikiSearchData, LarkError>;

   /// Wiki ノードの情報を取得する
   ///
   /// Lark の `GET /open-apis/wiki/v2/spaces/get_node` を呼び出す。
   /// `obj_type` は `Some` のときだけクエリに載せる。
   async fn get_node(&self, token: &str, obj_type: Option<&str>)
   -> Result<WikiNodeData, LarkError>;

   /// スペース配下のノード一覧を取得する
   ///
   /// Lark の `GET /open-apis/wiki/v2/spaces/{space_id}/nodes` を呼び出す。
   /// `page_token` は常に、`page_size` / `parent_node_token` は `Some` のときだけクエリに載せる。
   async fn list_nodes(
      &self,
      space_id: &str,
      page_size: Option<i64>,
      page_token: &str,
      parent_node_token: Option<&str>,
   ) -> Result<WikiNodeListData, LarkError>;

   /// スペースにノードを作成する
   ///
   /// Lark の `POST /open-apis/wiki/v2/spaces/{space_id}/nodes` を呼び出す。
   async fn create_node(
      &self,
      space_id: &str,
      body: CreateNodeBody,
   ) -> Result<WikiNodeData, LarkError>;

   /// ノードを別の親 / スペースへ移動する
   ///
   /// Lark の `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/{node_token}/move` を呼び出す。
   async fn move_node(
      &self,
      space_id: &str,
      node_token: &str,
      body: MoveNodeBody,
   ) -> Result<WikiNodeData, LarkError>;

   /// ノードのタイトルを更新する
   ///
   /// Lark の `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/{node_token}/update_title`
   /// を呼び出す。
   async fn update_node_title(
      &self,
      space_id: &str,
      node_token: &str,
      body: UpdateTitleBody,
   ) -> Result<(), LarkError>;

   /// クラウドドキュメントを Wiki スペースへ移動する
   ///
   /// Lark の `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/move_docs_to_wiki` を呼び出す。
   async fn move_docs_to_wiki(
      &self,
      space_id: &str,
      body: MoveDocsToWikiBody,
   ) -> Result<MoveDocsToWikiData, LarkError>;
}

#[async_trait]
impl LarkWikiClient for LarkClientImpl {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn search_nodes(
      &self,
      body: WikiSearchBody,
      page_size: i64,
      page_token: &str,
   ) -> Result<WikiSearchData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!(
         "{}/open-apis/wiki/v1/nodes/search?page_size={}&page_token={}",
         self.base_url,
         page_size,
         urlencoding::encode(page_token)
      );

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%token))]
   async fn get_node(
      &self,
      token: &str,
      obj_type: Option<&str>,
   ) -> Result<WikiNodeData, LarkError> {
      let bearer = self.bearer_token().await?;
      let mut url = format!(
         "{}/open-apis/wiki/v2/spaces/get_node?token={}",
         self.base_url,
         urlencoding::encode(token)
      );
      if let Some(obj_type) = obj_type {
         url.push_str(&format!("&obj_type={}", urlencoding::encode(obj_type)));
      }

      let response = self.client.get(&url).bearer_auth(&bearer).send().await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%space_id))]
   async fn list_nodes(
      &self,
      space_id: &str,
      page_size: Option<i64>,
      page_token: &str,
      parent_node_token: Option<&str>,
   ) -> Result<WikiNodeListData, LarkError> {
      let token = self.bearer_token().await?;
      let mut url = format!(
         "{}/open-apis/wiki/v2/spaces/{}/nodes?page_token={}",
         self.base_url,
         space_id,
         urlencoding::encode(page_token)
      );
      if let Some(page_size) = page_size {
         url.push_str(&format!("&page_size={page_size}"));
      }
      if let Some(parent_node_token) = parent_node_token {
         url.push_str(&format!(
            "&parent_node_token={}",
            urlencoding::encode(parent_node_token)
         ));
      }

      let response = self.client.get(&url).bearer_auth(&token).send().await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%space_id))]
   async fn create_node(
      &self,
      space_id: &str,
      body: CreateNodeBody,
   ) -> Result<WikiNodeData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!("{}/open-apis/wiki/v2/spaces/{}/nodes", self.base_url, space_id);

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%space_id, %node_token))]
   async fn move_node(
      &self,
      space_id: &str,
      node_token: &str,
      body: MoveNodeBody,
   ) -> Result<WikiNodeData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!(
         "{}/open-apis/wiki/v2/spaces/{}/nodes/{}/move",
         self.base_url, space_id, node_token
      );

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%space_id, %node_token))]
   async fn update_node_title(
      &self,
      space_id: &str,
      node_token: &str,
      body: UpdateTitleBody,
   ) -> Result<(), LarkError> {
      let token = self.bearer_token().await?;
      let url = format!(
         "{}/open-apis/wiki/v2/spaces/{}/nodes/{}/update_title",
         self.base_url, space_id, node_token
      );

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response::<serde_json::Value>(response).await?;
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%space_id))]
   async fn move_docs_to_wiki(
      &self,
      space_id: &str,
      body: MoveDocsToWikiBody,
   ) -> Result<MoveDocsToWikiData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!(
         "{}/open-apis/wiki/v2/spaces/{}/nodes/move_docs_to_wiki",
         self.base_url, space_id
      );

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response(response).await
   }
}
