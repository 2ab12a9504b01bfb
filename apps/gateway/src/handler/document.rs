//! ドキュメント関連ハンドラ
//!
//! Lark Docx ドキュメントとそのブロックを操作する API。
//!
//! - `POST /docs`: ドキュメント作成
//! - `GET /docs/{doc_token}`: ドキュメント情報取得
//! - `GET /docs/{doc_token}/raw_content`: プレーンテキスト取得
//! - `GET /docs/{doc_token}/blocks`: ブロック一覧取得
//! - `POST /docs/{document_id}/blocks/{block_id}/children`: 子ブロック作成
//! - `PATCH /docs/{document_id}/blocks/{block_id}`: ブロック更新
//! - `GET /docs/{document_id}/blocks/{block_id}`: ブロック取得
//! - `GET /docs/{document_id}/blocks/{block_id}/children`: 子ブロック一覧取得
//! - `DELETE /docs/{document_id}/blocks/{block_id}/children`: 子ブロック一括削除
//! - `POST /docs/convert`: Markdown / HTML のブロック変換

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larkbridge_shared::ApiResponse;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    client::lark::{
        LarkDocumentClient,
        types::{
            BatchDeleteChildrenBody,
            Block,
            ConvertContentBody,
            CreateBlockChildrenBody,
            CreateDocumentBody,
            MetaRequest,
            RequestDoc,
            UpdateBlockRequest,
        },
    },
    error::{AppJson, log_and_convert_lark_error, not_found_response, validation_error_response},
};

/// ブロック一覧取得のデフォルトページサイズ
const DEFAULT_PAGE_SIZE: i64 = 500;

/// コンテンツ変換のデフォルト変換元種別
const DEFAULT_CONTENT_TYPE: &str = "markdown";

/// ドキュメントハンドラが共有する状態
pub struct DocumentState {
    pub lark_client: Arc<dyn LarkDocumentClient>,
}

// --- リクエスト型 ---

/// ドキュメント作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDocRequest {
    /// ドキュメントタイトル
    #[serde(default)]
    pub title:        String,
    /// 作成先フォルダのトークン（空ならマイスペース直下）
    #[serde(default)]
    pub folder_token: String,
}

/// 子ブロック作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDocBlockRequest {
    /// 追加する子ブロック
    #[serde(default)]
    pub children: Vec<Block>,
    /// 挿入位置（省略時は末尾に追加）
    pub index:    Option<i64>,
}

/// 子ブロック一括削除リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteDocBlockChildrenRequest {
    /// 削除範囲の開始インデックス
    pub start_index: Option<i64>,
    /// 削除範囲の終了インデックス（この値自体は含まない）
    pub end_index:   Option<i64>,
}

/// コンテンツ変換リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertContentRequest {
    /// 変換元の種別（`markdown` または `html`、省略時は `markdown`）
    #[serde(default)]
    pub content_type: String,
    /// 変換するコンテンツ本文
    #[serde(default)]
    pub content:      String,
}

// --- クエリパラメータ型 ---

/// ブロック一覧 / 子ブロック一覧のページングパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlockPageQuery {
    /// 前回のレスポンスで返されたページングトークン
    pub page_token: Option<String>,
    /// 1 ページあたりの取得件数（省略時は 500）
    pub page_size:  Option<i64>,
}

// --- レスポンス型 ---

/// ドキュメント作成データ
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateDocData {
    pub doc_token: String,
    pub url:       String,
    pub title:     String,
}

/// ドキュメント情報データ
#[derive(Debug, Serialize, ToSchema)]
pub struct DocInfoData {
    pub doc_token:     String,
    pub title:         String,
    pub create_time:   String,
    pub update_time:   String,
    pub owner_user_id: String,
}

/// プレーンテキストデータ
#[derive(Debug, Serialize, ToSchema)]
pub struct DocRawContentData {
    pub content: String,
}

/// ブロック一覧データ
#[derive(Debug, Serialize, ToSchema)]
pub struct DocBlocksData {
    pub blocks:     Vec<Block>,
    pub has_more:   bool,
    pub page_token: String,
}

/// 子ブロック作成データ
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateDocBlockData {
    pub blocks: Vec<Block>,
}

/// ブロック更新データ
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateDocBlockData {
    pub block: Option<Block>,
}

/// ブロック取得データ
#[derive(Debug, Serialize, ToSchema)]
pub struct GetDocBlockData {
    pub block: Option<Block>,
}

/// 子ブロック一覧データ
#[derive(Debug, Serialize, ToSchema)]
pub struct DocBlockChildrenData {
    pub items:      Vec<Block>,
    pub has_more:   bool,
    pub page_token: String,
}

/// 子ブロック一括削除データ
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteDocBlockChildrenData {
    pub document_revision_id: Option<i64>,
}

/// コンテンツ変換データ
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertBlocksData {
    pub blocks: Vec<Block>,
}

// --- ハンドラ ---

/// POST /docs
///
/// Lark Docx ドキュメントを新規作成する。
#[utoipa::path(
   post,
   path = "/docs",
   tag = "documents",
   request_body = CreateDocRequest,
   responses(
      (status = 200, description = "ドキュメント作成成功", body = ApiResponse<CreateDocData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_doc(
    State(state): State<Arc<DocumentState>>,
    AppJson(req): AppJson<CreateDocRequest>,
) -> Result<Response, Response> {
    if req.title.is_empty() {
        return Err(validation_error_response("title is required"));
    }

    let body = CreateDocumentBody {
        title:        req.title,
        folder_token: req.folder_token,
    };
    let data = state
        .lark_client
        .create_document(body)
        .await
        .map_err(|e| log_and_convert_lark_error("ドキュメント作成", e))?;

    let document = data.document;
    let response = ApiResponse::success(CreateDocData {
        doc_token: document.document_id.clone(),
        url:       format!("https://open.larksuite.com/docx/{}", document.document_id),
        title:     document.title,
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /docs/{doc_token}
///
/// ドキュメントのメタデータを取得する。
#[utoipa::path(
   get,
   path = "/docs/{doc_token}",
   tag = "documents",
   params(("doc_token" = String, Path, description = "ドキュメントトークン")),
   responses(
      (status = 200, description = "ドキュメント情報取得成功", body = ApiResponse<DocInfoData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 404, description = "ドキュメントが見つからない", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%doc_token))]
pub async fn get_document(
    State(state): State<Arc<DocumentState>>,
    Path(doc_token): Path<String>,
) -> Result<Response, Response> {
    if doc_token.is_empty() {
        return Err(validation_error_response("Doc Token is required"));
    }

    let request = MetaRequest {
        request_docs: vec![RequestDoc {
            doc_token: doc_token.clone(),
            doc_type:  "docx".to_string(),
        }],
    };
    let data = state
        .lark_client
        .batch_query_meta(request)
        .await
        .map_err(|e| log_and_convert_lark_error("ドキュメント情報取得", e))?;

    let Some(meta) = data.metas.into_iter().next() else {
        return Err(not_found_response("Document not found"));
    };
    let response = ApiResponse::success(DocInfoData {
        doc_token:     meta.doc_token,
        title:         meta.title,
        create_time:   meta.create_time.unwrap_or_default(),
        update_time:   meta.latest_modify_time.unwrap_or_default(),
        owner_user_id: meta.owner_id.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /docs/{doc_token}/raw_content
///
/// ドキュメント本文をプレーンテキストとして取得する。
#[utoipa::path(
   get,
   path = "/docs/{doc_token}/raw_content",
   tag = "documents",
   params(("doc_token" = String, Path, description = "ドキュメントトークン")),
   responses(
      (status = 200, description = "プレーンテキスト取得成功", body = ApiResponse<DocRawContentData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%doc_token))]
pub async fn get_document_raw_content(
    State(state): State<Arc<DocumentState>>,
    Path(doc_token): Path<String>,
) -> Result<Response, Response> {
    if doc_token.is_empty() {
        return Err(validation_error_response("Doc Token is required"));
    }

    let data = state
        .lark_client
        .raw_content(&doc_token)
        .await
        .map_err(|e| log_and_convert_lark_error("プレーンテキスト取得", e))?;

    let response = ApiResponse::success(DocRawContentData { content: data.content });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /docs/{doc_token}/blocks
///
/// ドキュメントの全ブロックをページング付きで取得する。
#[utoipa::path(
   get,
   path = "/docs/{doc_token}/blocks",
   tag = "documents",
   params(
      ("doc_token" = String, Path, description = "ドキュメントトークン"),
      BlockPageQuery
   ),
   responses(
      (status = 200, description = "ブロック一覧取得成功", body = ApiResponse<DocBlocksData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%doc_token))]
pub async fn get_document_blocks(
    State(state): State<Arc<DocumentState>>,
    Path(doc_token): Path<String>,
    Query(query): Query<BlockPageQuery>,
) -> Result<Response, Response> {
    if doc_token.is_empty() {
        return Err(validation_error_response("Doc Token is required"));
    }

    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let page_token = query.page_token.unwrap_or_default();
    let data = state
        .lark_client
        .list_blocks(&doc_token, page_size, &page_token)
        .await
        .map_err(|e| log_and_convert_lark_error("ブロック一覧取得", e))?;

    let response = ApiResponse::success(DocBlocksData {
        blocks:     data.items,
        has_more:   data.has_more.unwrap_or_default(),
        page_token: data.page_token.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /docs/{document_id}/blocks/{block_id}/children
///
/// 指定ブロックの配下に子ブロックを作成する。
/// ドキュメント直下に追加する場合は `block_id` にドキュメント ID を指定する。
#[utoipa::path(
   post,
   path = "/docs/{document_id}/blocks/{block_id}/children",
   tag = "documents",
   params(
      ("document_id" = String, Path, description = "ドキュメントID"),
      ("block_id" = String, Path, description = "親ブロックID")
   ),
   request_body = CreateDocBlockRequest,
   responses(
      (status = 200, description = "子ブロック作成成功", body = ApiResponse<CreateDocBlockData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%document_id, %block_id))]
pub async fn create_doc_block(
    State(state): State<Arc<DocumentState>>,
    Path((document_id, block_id)): Path<(String, String)>,
    AppJson(req): AppJson<CreateDocBlockRequest>,
) -> Result<Response, Response> {
    if document_id.is_empty() || block_id.is_empty() {
        return Err(validation_error_response("Document ID and Block ID are required"));
    }
    if req.children.is_empty() {
        return Err(validation_error_response("children is required"));
    }

    let body = CreateBlockChildrenBody {
        children: req.children,
        index:    req.index,
    };
    let data = state
        .lark_client
        .create_block_children(&document_id, &block_id, body)
        .await
        .map_err(|e| log_and_convert_lark_error("子ブロック作成", e))?;

    let response = ApiResponse::success(CreateDocBlockData { blocks: data.children });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// PATCH /docs/{document_id}/blocks/{block_id}
///
/// ブロックのテキスト要素 / スタイルを更新する。
/// ボディの `block_id` は URL パスパラメータの値で上書きされる。
#[utoipa::path(
   patch,
   path = "/docs/{document_id}/blocks/{block_id}",
   tag = "documents",
   params(
      ("document_id" = String, Path, description = "ドキュメントID"),
      ("block_id" = String, Path, description = "ブロックID")
   ),
   request_body = UpdateBlockRequest,
   responses(
      (status = 200, description = "ブロック更新成功", body = ApiResponse<UpdateDocBlockData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%document_id, %block_id))]
pub async fn update_doc_block(
    State(state): State<Arc<DocumentState>>,
    Path((document_id, block_id)): Path<(String, String)>,
    AppJson(mut req): AppJson<UpdateBlockRequest>,
) -> Result<Response, Response> {
    if document_id.is_empty() || block_id.is_empty() {
        return Err(validation_error_response("Document ID and Block ID are required"));
    }

    req.block_id = Some(block_id.clone());
    let data = state
        .lark_client
        .patch_block(&document_id, &block_id, req)
        .await
        .map_err(|e| log_and_convert_lark_error("ブロック更新", e))?;

    let response = ApiResponse::success(UpdateDocBlockData { block: data.block });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /docs/{document_id}/blocks/{block_id}
///
/// ブロックを単体で取得する。
#[utoipa::path(
   get,
   path = "/docs/{document_id}/blocks/{block_id}",
   tag = "documents",
   params(
      ("document_id" = String, Path, description = "ドキュメントID"),
      ("block_id" = String, Path, description = "ブロックID")
   ),
   responses(
      (status = 200, description = "ブロック取得成功", body = ApiResponse<GetDocBlockData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%document_id, %block_id))]
pub async fn get_doc_block(
    State(state): State<Arc<DocumentState>>,
    Path((document_id, block_id)): Path<(String, String)>,
) -> Result<Response, Response> {
    if document_id.is_empty() || block_id.is_empty() {
        return Err(validation_error_response("Document ID and Block ID are required"));
    }

    let data = state
        .lark_client
        .get_block(&document_id, &block_id)
        .await
        .map_err(|e| log_and_convert_lark_error("ブロック取得", e))?;

    let response = ApiResponse::success(GetDocBlockData { block: data.block });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /docs/{document_id}/blocks/{block_id}/children
///
/// 指定ブロックの子ブロック一覧をページング付きで取得する。
#[utoipa::path(
   get,
   path = "/docs/{document_id}/blocks/{block_id}/children",
   tag = "documents",
   params(
      ("document_id" = String, Path, description = "ドキュメントID"),
      ("block_id" = String, Path, description = "親ブロックID"),
      BlockPageQuery
   ),
   responses(
      (status = 200, description = "子ブロック一覧取得成功", body = ApiResponse<DocBlockChildrenData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%document_id, %block_id))]
pub async fn get_doc_block_children(
    State(state): State<Arc<DocumentState>>,
    Path((document_id, block_id)): Path<(String, String)>,
    Query(query): Query<BlockPageQuery>,
) -> Result<Response, Response> {
    if document_id.is_empty() || block_id.is_empty() {
        return Err(validation_error_response("Document ID and Block ID are required"));
    }

    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let page_token = query.page_token.filter(|token| !token.is_empty());
    let data = state
        .lark_client
        .block_children(&document_id, &block_id, page_size, page_token.as_deref())
        .await
        .map_err(|e| log_and_convert_lark_error("子ブロック一覧取得", e))?;

    let response = ApiResponse::success(DocBlockChildrenData {
        items:      data.items,
        has_more:   data.has_more.unwrap_or_default(),
        page_token: data.page_token.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// DELETE /docs/{document_id}/blocks/{block_id}/children
///
/// 指定ブロックの子ブロックをインデックス範囲で一括削除する。
#[utoipa::path(
   delete,
   path = "/docs/{document_id}/blocks/{block_id}/children",
   tag = "documents",
   params(
      ("document_id" = String, Path, description = "ドキュメントID"),
      ("block_id" = String, Path, description = "親ブロックID")
   ),
   request_body = DeleteDocBlockChildrenRequest,
   responses(
      (status = 200, description = "子ブロック一括削除成功", body = ApiResponse<DeleteDocBlockChildrenData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%document_id, %block_id))]
pub async fn delete_doc_block_children(
    State(state): State<Arc<DocumentState>>,
    Path((document_id, block_id)): Path<(String, String)>,
    AppJson(req): AppJson<DeleteDocBlockChildrenRequest>,
) -> Result<Response, Response> {
    if document_id.is_empty() || block_id.is_empty() {
        return Err(validation_error_response("Document ID and Block ID are required"));
    }

    let body = BatchDeleteChildrenBody {
        start_index: req.start_index,
        end_index:   req.end_index,
    };
    let data = state
        .lark_client
        .batch_delete_children(&document_id, &block_id, body)
        .await
        .map_err(|e| log_and_convert_lark_error("子ブロック一括削除", e))?;

    let response = ApiResponse::success(DeleteDocBlockChildrenData {
        document_revision_id: data.document_revision_id,
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /docs/convert
///
/// Markdown / HTML コンテンツをドキュメントブロック列に変換する。
/// 変換結果は作成系 API にそのまま渡せる。
#[utoipa::path(
   post,
   path = "/docs/convert",
   tag = "documents",
   request_body = ConvertContentRequest,
   responses(
      (status = 200, description = "コンテンツ変換成功", body = ApiResponse<ConvertBlocksData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn convert_content_to_blocks(
    State(state): State<Arc<DocumentState>>,
    AppJson(req): AppJson<ConvertContentRequest>,
) -> Result<Response, Response> {
    if req.content.is_empty() {
        return Err(validation_error_response("content is required"));
    }

    let content_type = if req.content_type.is_empty() {
        DEFAULT_CONTENT_TYPE.to_string()
    } else {
        req.content_type
    };
    let body = ConvertContentBody {
        content_type,
        content: req.content,
    };
    let data = state
        .lark_client
        .convert_content(body)
        .await
        .map_err(|e| log_and_convert_lark_error("コンテンツ変換", e))?;

    let response = ApiResponse::success(ConvertBlocksData { blocks: data.blocks });
    Ok((StatusCode::OK, Json(response)).into_response())
}
