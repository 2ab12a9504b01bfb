//! # ゲートウェイアプリケーション構築
//!
//! DI（クライアント・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use larkbridge_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::lark::{LarkDocumentClient, LarkTaskClient, LarkWikiClient},
    handler::{
        DocumentState,
        TaskState,
        WikiState,
        convert_content_to_blocks,
        create_doc,
        create_doc_block,
        create_task,
        create_wiki_node,
        delete_doc_block_children,
        delete_task,
        get_doc_block,
        get_doc_block_children,
        get_document,
        get_document_blocks,
        get_document_raw_content,
        get_task,
        get_wiki_node_info,
        get_wiki_node_list,
        health_check,
        move_docs_to_wiki,
        move_wiki_node,
        search_wiki_node,
        update_doc_block,
        update_wiki_node_title,
    },
};

/// State の注入とルーター定義を行う
///
/// クライアントをトレイトオブジェクトとして受け取るため、テストでは
/// スタブ実装を注入できる。本番では 1 つの `LarkClientImpl` を
/// 3 つのトレイトに coerce して渡す。
pub fn build_app(
    document_client: Arc<dyn LarkDocumentClient>,
    task_client: Arc<dyn LarkTaskClient>,
    wiki_client: Arc<dyn LarkWikiClient>,
) -> Router {
    let document_state = Arc::new(DocumentState {
        lark_client: document_client,
    });
    let task_state = Arc::new(TaskState {
        lark_client: task_client,
    });
    let wiki_state = Arc::new(WikiState {
        lark_client: wiki_client,
    });

    // ルーター構築
    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
    Router::new()
        .route("/health", get(health_check))
        // ドキュメント API
        // `/docs/convert` は静的セグメントのため `/docs/{doc_token}` より先に評価される
        .route("/docs", post(create_doc))
        .route("/docs/convert", post(convert_content_to_blocks))
        .route("/docs/{doc_token}", get(get_document))
        .route("/docs/{doc_token}/raw_content", get(get_document_raw_content))
        .route("/docs/{doc_token}/blocks", get(get_document_blocks))
        .route(
            "/docs/{document_id}/blocks/{block_id}",
            get(get_doc_block).patch(update_doc_block),
        )
        .route(
            "/docs/{document_id}/blocks/{block_id}/children",
            get(get_doc_block_children)
                .post(create_doc_block)
                .delete(delete_doc_block_children),
        )
        .with_state(document_state)
        // タスク API
        .route("/tasks", post(create_task))
        .route("/tasks/{task_id}", get(get_task).delete(delete_task))
        .with_state(task_state)
        // Wiki API
        .route("/wiki/search", post(search_wiki_node))
        .route("/wiki/nodes/{node_token}", get(get_wiki_node_info))
        .route(
            "/wiki/spaces/{space_id}/nodes",
            get(get_wiki_node_list).post(create_wiki_node),
        )
        .route(
            "/wiki/spaces/{space_id}/nodes/{node_token}/move",
            post(move_wiki_node),
        )
        .route(
            "/wiki/spaces/{space_id}/nodes/{node_token}/title",
            patch(update_wiki_node_title),
        )
        .route("/wiki/spaces/{space_id}/move_docs", post(move_docs_to_wiki))
        .with_state(wiki_state)
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
