//! ドキュメント関連の Lark API クライアント

use async_trait::async_trait;

use super::{
    client_impl::LarkClientImpl,
    error::LarkError,
    response::handle_response,
    types::{
        BatchDeleteChildrenBody,
        BatchDeleteChildrenData,
        BatchQueryMetaData,
        BlockData,
        BlockListData,
        ConvertContentBody,
        ConvertContentData,
        CreateBlockChildrenBody,
        CreateBlockChildrenData,
        CreateDocumentBody,
        CreateDocumentData,
        MetaRequest,
        RawContentData,
        UpdateBlockRequest,
    },
};

/// ドキュメント関連の Lark API クライアントトレイト
#[async_trait]
pub trait LarkDocumentClient: Send + Sync {
    /// ドキュメントを作成する
    ///
    /// Lark の `POST /open-apis/docx/v1/documents` を呼び出す。
    async fn create_document(
        &self,
        body: CreateDocumentBody,
    ) -> Result<CreateDocumentData, LarkError>;

    /// ドキュメントメタデータを一括取得する
    ///
    /// Lark の `POST /open-apis/drive/v1/metas/batch_query` を呼び出す。
    async fn batch_query_meta(&self, body: MetaRequest) -> Result<BatchQueryMetaData, LarkError>;

    /// ドキュメントのプレーンテキストを取得する
    ///
    /// Lark の `GET /open-apis/docx/v1/documents/{document_id}/raw_content` を呼び出す。
    async fn raw_content(&self, document_id: &str) -> Result<RawContentData, LarkError>;

    /// ドキュメントのブロック一覧を取得する
    ///
    /// Lark の `GET /open-apis/docx/v1/documents/{document_id}/blocks` を呼び出す。
    /// `page_token` は空文字列でもクエリに載せる。
    async fn list_blocks(
        &self,
        document_id: &str,
        page_size: i64,
        page_token: &str,
    ) -> Result<BlockListData, LarkError>;

    /// 指定ブロックの配下に子ブロックを作成する
    ///
    /// Lark の `POST /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children`
    /// を呼び出す。
    async fn create_block_children(
        &self,
        document_id: &str,
        block_id: &str,
        body: CreateBlockChildrenBody,
    ) -> Result<CreateBlockChildrenData, LarkError>;

    /// ブロックを更新する
    ///
    /// Lark の `PATCH /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}` を呼び出す。
    async fn patch_block(
        &self,
        document_id: &str,
        block_id: &str,
        body: UpdateBlockRequest,
    ) -> Result<BlockData, LarkError>;

    /// ブロックを取得する
    ///
    /// Lark の `GET /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}` を呼び出す。
    async fn get_block(&self, document_id: &str, block_id: &str) -> Result<BlockData, LarkError>;

    /// 指定ブロックの子ブロック一覧を取得する
    ///
    /// Lark の `GET /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children`
    /// を呼び出す。`page_token` は `Some` のときだけクエリに載せる。
    async fn block_children(
        &self,
        document_id: &str,
        block_id: &str,
        page_size: i64,
        page_token: Option<&str>,
    ) -> Result<BlockListData, LarkError>;

    /// 子ブロックをインデックス範囲で一括削除する
    ///
    /// Lark の
    /// `DELETE /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children/batch_delete`
    /// を呼び出す。
    async fn batch_delete_children(
        &self,
        document_id: &str,
        block_id: &str,
        body: BatchDeleteChildrenBody,
    ) -> Result<BatchDeleteChildrenData, LarkError>;

    /// Markdown / HTML コンテンツをブロック列に変換する
    ///
    /// Lark の `POST /open-apis/docx/v1/documents/blocks/convert` を呼び出す。
    async fn convert_content(
        &self,
        body: ConvertContentBody,
    ) -> Result<ConvertContentData, LarkError>;
}

#[async_trait]
impl LarkDocumentClient for LarkClientImpl {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn create_document(
        &self,
        body: CreateDocumentBody,
    ) -> Result<CreateDocumentData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/open-apis/docx/v1/documents", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn batch_query_meta(&self, body: MetaRequest) -> Result<BatchQueryMetaData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/open-apis/drive/v1/metas/batch_query", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id))]
    async fn raw_content(&self, document_id: &str) -> Result<RawContentData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/raw_content",
            self.base_url, document_id
        );

        let response = self.client.get(&url).bearer_auth(&token).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id))]
    async fn list_blocks(
        &self,
        document_id: &str,
        page_size: i64,
        page_token: &str,
    ) -> Result<BlockListData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks?page_size={}&page_token={}",
            self.base_url,
            document_id,
            page_size,
            urlencoding::encode(page_token)
        );

        let response = self.client.get(&url).bearer_auth(&token).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id, %block_id))]
    async fn create_block_children(
        &self,
        document_id: &str,
        block_id: &str,
        body: CreateBlockChildrenBody,
    ) -> Result<CreateBlockChildrenData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks/{}/children",
            self.base_url, document_id, block_id
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

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id, %block_id))]
    async fn patch_block(
        &self,
        document_id: &str,
        block_id: &str,
        body: UpdateBlockRequest,
    ) -> Result<BlockData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks/{}",
            self.base_url, document_id, block_id
        );

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id, %block_id))]
    async fn get_block(&self, document_id: &str, block_id: &str) -> Result<BlockData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks/{}",
            self.base_url, document_id, block_id
        );

        let response = self.client.get(&url).bearer_auth(&token).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id, %block_id))]
    async fn block_children(
        &self,
        document_id: &str,
        block_id: &str,
        page_size: i64,
        page_token: Option<&str>,
    ) -> Result<BlockListData, LarkError> {
        let token = self.bearer_token().await?;
        let mut url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks/{}/children?page_size={}",
            self.base_url, document_id, block_id, page_size
        );
        if let Some(page_token) = page_token {
            url.push_str(&format!("&page_token={}", urlencoding::encode(page_token)));
        }

        let response = self.client.get(&url).bearer_auth(&token).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%document_id, %block_id))]
    async fn batch_delete_children(
        &self,
        document_id: &str,
        block_id: &str,
        body: BatchDeleteChildrenBody,
    ) -> Result<BatchDeleteChildrenData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!(
            "{}/open-apis/docx/v1/documents/{}/blocks/{}/children/batch_delete",
            self.base_url, document_id, block_id
        );

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        handle_response(response).await
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn convert_content(
        &self,
        body: ConvertContentBody,
    ) -> Result<ConvertContentData, LarkError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/open-apis/docx/v1/documents/blocks/convert", self.base_url);

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
