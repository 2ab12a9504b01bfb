//! Wiki 関連ハンドラ
//!
//! Lark Wiki（ナレッジベース）のノード操作 API。
//!
//! - `POST /wiki/search`: ノード検索
//! - `GET /wiki/nodes/{node_token}`: ノード情報取得
//! - `GET /wiki/spaces/{space_id}/nodes`: ノード一覧取得
//! - `POST /wiki/spaces/{space_id}/nodes`: ノード作成
//! - `POST /wiki/spaces/{space_id}/nodes/{node_token}/move`: ノード移動
//! - `PATCH /wiki/spaces/{space_id}/nodes/{node_token}/title`: タイトル更新
//! - `POST /wiki/spaces/{space_id}/move_docs`: クラウドドキュメントの Wiki 移動

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
        LarkWikiClient,
        types::{
            CreateNodeBody,
            MoveDocsToWikiBody,
            MoveNodeBody,
            UpdateTitleBody,
            WikiNode,
            WikiSearchBody,
            WikiSearchItem,
        },
    },
    error::{AppJson, log_and_convert_lark_error, validation_error_response},
};

/// Wiki ノード作成時のデフォルトオブジェクト種別
const DEFAULT_OBJ_TYPE: &str = "docx";

/// Wiki ハンドラが共有する状態
pub struct WikiState {
    pub lark_client: Arc<dyn LarkWikiClient>,
}

// --- リクエスト型 ---

/// Wiki ノード検索リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct WikiSearchRequest {
    /// 検索キーワード
    #[serde(default)]
    pub query:      String,
    /// 1 ページあたりの取得件数
    #[serde(default)]
    pub page_size:  i64,
    /// 前回のレスポンスで返されたページングトークン
    #[serde(default)]
    pub page_token: String,
}

/// Wiki ノード作成リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWikiNodeRequest {
    /// 親ノードのトークン（空ならスペース直下）
    #[serde(default)]
    pub parent_node_token: String,
    /// ノードタイトル
    #[serde(default)]
    pub title:             String,
    /// オブジェクト種別（`doc`、`docx`、`sheet` など、省略時は `docx`）
    #[serde(default)]
    pub obj_type:          String,
}

/// Wiki ノード移動リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveWikiNodeRequest {
    /// 移動先の親ノードトークン
    #[serde(default)]
    pub target_parent_token: String,
    /// 移動先のスペース ID
    #[serde(default)]
    pub target_space_id:     String,
}

/// Wiki ノードタイトル更新リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateWikiNodeTitleRequest {
    /// 新しいタイトル
    #[serde(default)]
    pub title: String,
}

/// クラウドドキュメントの Wiki 移動リクエスト
#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveDocsToWikiRequest {
    /// 移動先の親 Wiki ノードトークン（空ならスペース直下）
    #[serde(default)]
    pub parent_wiki_token: String,
    /// 移動対象のオブジェクト種別
    #[serde(default)]
    pub obj_type:          String,
    /// 移動対象のオブジェクトトークン
    #[serde(default)]
    pub obj_token:         String,
    /// 権限チェックを待たずに即時適用するかどうか
    #[serde(default)]
    pub apply:             bool,
}

// --- クエリパラメータ型 ---

/// ノード情報取得のクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WikiNodeInfoQuery {
    /// ノードのオブジェクト種別（`wiki` 以外を参照する場合に指定）
    pub obj_type: Option<String>,
}

/// ノード一覧取得のクエリパラメータ
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListWikiNodesQuery {
    /// 親ノードのトークン（指定時はその直下のみ取得）
    pub parent_node_token: Option<String>,
    /// 前回のレスポンスで返されたページングトークン
    pub page_token:        Option<String>,
    /// 1 ページあたりの取得件数
    pub page_size:         Option<i64>,
}

// --- レスポンス型 ---

/// Wiki ノード検索データ
#[derive(Debug, Serialize, ToSchema)]
pub struct WikiSearchData {
    pub items:      Vec<WikiSearchItem>,
    pub has_more:   bool,
    pub page_token: String,
}

/// Wiki ノード情報データ
#[derive(Debug, Serialize, ToSchema)]
pub struct WikiNodeInfoData {
    pub node_token:        String,
    pub obj_token:         String,
    pub obj_type:          String,
    pub parent_node_token: String,
    pub node_type:         String,
    pub title:             String,
    pub has_child:         bool,
}

/// Wiki ノード一覧データ
#[derive(Debug, Serialize, ToSchema)]
pub struct WikiNodeListData {
    pub items:      Vec<WikiNode>,
    pub has_more:   bool,
    pub page_token: String,
}

/// Wiki ノード作成データ
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateWikiNodeData {
    pub node_token: String,
    pub obj_token:  String,
    pub title:      String,
    pub url:        String,
}

/// Wiki ノード移動データ
#[derive(Debug, Serialize, ToSchema)]
pub struct MoveWikiNodeData {
    pub node_token: String,
    pub obj_token:  String,
}

/// Wiki ノードタイトル更新データ（成功ステータスのみで中身は持たない）
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateWikiNodeTitleData {}

/// クラウドドキュメントの Wiki 移動データ
#[derive(Debug, Serialize, ToSchema)]
pub struct MoveDocsToWikiData {
    pub wiki_token: String,
    pub task_id:    String,
    pub applied:    bool,
}

// --- ハンドラ ---

/// POST /wiki/search
///
/// キーワードで Wiki ノードを検索する。
#[utoipa::path(
   post,
   path = "/wiki/search",
   tag = "wiki",
   request_body = WikiSearchRequest,
   responses(
      (status = 200, description = "ノード検索成功", body = ApiResponse<WikiSearchData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn search_wiki_node(
    State(state): State<Arc<WikiState>>,
    AppJson(req): AppJson<WikiSearchRequest>,
) -> Result<Response, Response> {
    if req.query.is_empty() {
        return Err(validation_error_response("query is required"));
    }

    let body = WikiSearchBody { query: req.query };
    let data = state
        .lark_client
        .search_nodes(body, req.page_size, &req.page_token)
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノード検索", e))?;

    let response = ApiResponse::success(WikiSearchData {
        items:      data.items,
        has_more:   data.has_more.unwrap_or_default(),
        page_token: data.page_token.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /wiki/nodes/{node_token}
///
/// Wiki ノードの情報を取得する。
#[utoipa::path(
   get,
   path = "/wiki/nodes/{node_token}",
   tag = "wiki",
   params(
      ("node_token" = String, Path, description = "ノードトークン"),
      WikiNodeInfoQuery
   ),
   responses(
      (status = 200, description = "ノード情報取得成功", body = ApiResponse<WikiNodeInfoData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%node_token))]
pub async fn get_wiki_node_info(
    State(state): State<Arc<WikiState>>,
    Path(node_token): Path<String>,
    Query(query): Query<WikiNodeInfoQuery>,
) -> Result<Response, Response> {
    if node_token.is_empty() {
        return Err(validation_error_response("Node Token is required"));
    }

    let obj_type = query.obj_type.filter(|obj_type| !obj_type.is_empty());
    let data = state
        .lark_client
        .get_node(&node_token, obj_type.as_deref())
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノード情報取得", e))?;

    let node = data.node;
    let response = ApiResponse::success(WikiNodeInfoData {
        node_token:        node.node_token,
        obj_token:         node.obj_token,
        obj_type:          node.obj_type,
        parent_node_token: node.parent_node_token,
        node_type:         node.node_type,
        title:             node.title,
        has_child:         node.has_child,
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /wiki/spaces/{space_id}/nodes
///
/// スペース配下のノード一覧をページング付きで取得する。
#[utoipa::path(
   get,
   path = "/wiki/spaces/{space_id}/nodes",
   tag = "wiki",
   params(
      ("space_id" = String, Path, description = "スペースID"),
      ListWikiNodesQuery
   ),
   responses(
      (status = 200, description = "ノード一覧取得成功", body = ApiResponse<WikiNodeListData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%space_id))]
pub async fn get_wiki_node_list(
    State(state): State<Arc<WikiState>>,
    Path(space_id): Path<String>,
    Query(query): Query<ListWikiNodesQuery>,
) -> Result<Response, Response> {
    if space_id.is_empty() {
        return Err(validation_error_response("Space ID is required"));
    }

    let page_size = query.page_size.filter(|size| *size > 0);
    let page_token = query.page_token.unwrap_or_default();
    let parent_node_token = query.parent_node_token.filter(|token| !token.is_empty());
    let data = state
        .lark_client
        .list_nodes(&space_id, page_size, &page_token, parent_node_token.as_deref())
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノード一覧取得", e))?;

    let response = ApiResponse::success(WikiNodeListData {
        items:      data.items,
        has_more:   data.has_more.unwrap_or_default(),
        page_token: data.page_token.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /wiki/spaces/{space_id}/nodes
///
/// スペースにノードを作成する。
#[utoipa::path(
   post,
   path = "/wiki/spaces/{space_id}/nodes",
   tag = "wiki",
   params(("space_id" = String, Path, description = "スペースID")),
   request_body = CreateWikiNodeRequest,
   responses(
      (status = 200, description = "ノード作成成功", body = ApiResponse<CreateWikiNodeData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%space_id))]
pub async fn create_wiki_node(
    State(state): State<Arc<WikiState>>,
    Path(space_id): Path<String>,
    AppJson(req): AppJson<CreateWikiNodeRequest>,
) -> Result<Response, Response> {
    if space_id.is_empty() {
        return Err(validation_error_response("Space ID is required"));
    }
    if req.title.is_empty() {
        return Err(validation_error_response("title is required"));
    }

    let obj_type = if req.obj_type.is_empty() {
        DEFAULT_OBJ_TYPE.to_string()
    } else {
        req.obj_type
    };
    let body = CreateNodeBody {
        obj_type,
        parent_node_token: req.parent_node_token,
        title: req.title,
    };
    let data = state
        .lark_client
        .create_node(&space_id, body)
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノード作成", e))?;

    let node = data.node;
    let response = ApiResponse::success(CreateWikiNodeData {
        node_token: node.node_token,
        obj_token:  node.obj_token,
        title:      node.title,
        url:        String::new(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /wiki/spaces/{space_id}/nodes/{node_token}/move
///
/// ノードを別の親ノード / スペースへ移動する。
#[utoipa::path(
   post,
   path = "/wiki/spaces/{space_id}/nodes/{node_token}/move",
   tag = "wiki",
   params(
      ("space_id" = String, Path, description = "スペースID"),
      ("node_token" = String, Path, description = "ノードトークン")
   ),
   request_body = MoveWikiNodeRequest,
   responses(
      (status = 200, description = "ノード移動成功", body = ApiResponse<MoveWikiNodeData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%space_id, %node_token))]
pub async fn move_wiki_node(
    State(state): State<Arc<WikiState>>,
    Path((space_id, node_token)): Path<(String, String)>,
    AppJson(req): AppJson<MoveWikiNodeRequest>,
) -> Result<Response, Response> {
    if space_id.is_empty() || node_token.is_empty() {
        return Err(validation_error_response("Space ID and Node Token are required"));
    }

    let body = MoveNodeBody {
        target_parent_token: req.target_parent_token,
        target_space_id:     req.target_space_id,
    };
    let data = state
        .lark_client
        .move_node(&space_id, &node_token, body)
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノード移動", e))?;

    let node = data.node;
    let response = ApiResponse::success(MoveWikiNodeData {
        node_token: node.node_token,
        obj_token:  node.obj_token,
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// PATCH /wiki/spaces/{space_id}/nodes/{node_token}/title
///
/// ノードのタイトルを更新する。
#[utoipa::path(
   patch,
   path = "/wiki/spaces/{space_id}/nodes/{node_token}/title",
   tag = "wiki",
   params(
      ("space_id" = String, Path, description = "スペースID"),
      ("node_token" = String, Path, description = "ノードトークン")
   ),
   request_body = UpdateWikiNodeTitleRequest,
   responses(
      (status = 200, description = "タイトル更新成功", body = ApiResponse<UpdateWikiNodeTitleData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%space_id, %node_token))]
pub async fn update_wiki_node_title(
    State(state): State<Arc<WikiState>>,
    Path((space_id, node_token)): Path<(String, String)>,
    AppJson(req): AppJson<UpdateWikiNodeTitleRequest>,
) -> Result<Response, Response> {
    if space_id.is_empty() || node_token.is_empty() {
        return Err(validation_error_response("Space ID and Node Token are required"));
    }
    if req.title.is_empty() {
        return Err(validation_error_response("title is required"));
    }

    let body = UpdateTitleBody { title: req.title };
    state
        .lark_client
        .update_node_title(&space_id, &node_token, body)
        .await
        .map_err(|e| log_and_convert_lark_error("Wikiノードタイトル更新", e))?;

    let response = ApiResponse::success(UpdateWikiNodeTitleData {});
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /wiki/spaces/{space_id}/move_docs
///
/// クラウドドキュメントを Wiki スペースへ移動する。
/// 権限承認が必要な場合、Lark はノードの代わりに移動タスク ID を返す。
#[utoipa::path(
   post,
   path = "/wiki/spaces/{space_id}/move_docs",
   tag = "wiki",
   params(("space_id" = String, Path, description = "移動先スペースID")),
   request_body = MoveDocsToWikiRequest,
   responses(
      (status = 200, description = "ドキュメント移動成功", body = ApiResponse<MoveDocsToWikiData>),
      (status = 400, description = "バリデーションエラー", body = ApiResponse<serde_json::Value>),
      (status = 500, description = "Lark API エラー", body = ApiResponse<serde_json::Value>)
   )
)]
#[tracing::instrument(skip_all, fields(%space_id))]
pub async fn move_docs_to_wiki(
    State(state): State<Arc<WikiState>>,
    Path(space_id): Path<String>,
    AppJson(req): AppJson<MoveDocsToWikiRequest>,
) -> Result<Response, Response> {
    if space_id.is_empty() {
        return Err(validation_error_response("Space ID is required"));
    }
    if req.obj_type.is_empty() || req.obj_token.is_empty() {
        return Err(validation_error_response("obj_type and obj_token are required"));
    }

    let parent_wiki_token = if req.parent_wiki_token.is_empty() {
        None
    } else {
        Some(req.parent_wiki_token)
    };
    let body = MoveDocsToWikiBody {
        obj_type:  req.obj_type,
        obj_token: req.obj_token,
        apply:     req.apply,
        parent_wiki_token,
    };
    let data = state
        .lark_client
        .move_docs_to_wiki(&space_id, body)
        .await
        .map_err(|e| log_and_convert_lark_error("ドキュメントのWiki移動", e))?;

    let response = ApiResponse::success(MoveDocsToWikiData {
        wiki_token: data.wiki_token.unwrap_or_default(),
        task_id:    data.task_id.unwrap_or_default(),
        applied:    data.applied.unwrap_or_default(),
    });
    Ok((StatusCode::OK, Json(response)).into_response())
}
