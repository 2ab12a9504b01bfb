//! # OpenAPI 仕様定義
//!
//! utoipa を使用してゲートウェイの OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{document, health, task, wiki};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "LarkBridge API",
      version = "0.1.0",
      description = "Lark Suite のドキュメント・タスク・Wiki API を仲介する REST ゲートウェイ"
   ),
   paths(
      // health
      health::health_check,
      // documents
      document::create_doc,
      document::get_document,
      document::get_document_raw_content,
      document::get_document_blocks,
      document::create_doc_block,
      document::update_doc_block,
      document::get_doc_block,
      document::get_doc_block_children,
      document::delete_doc_block_children,
      document::convert_content_to_blocks,
      // tasks
      task::create_task,
      task::get_task,
      task::delete_task,
      // wiki
      wiki::search_wiki_node,
      wiki::get_wiki_node_info,
      wiki::get_wiki_node_list,
      wiki::create_wiki_node,
      wiki::move_wiki_node,
      wiki::update_wiki_node_title,
      wiki::move_docs_to_wiki,
   ),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "documents", description = "ドキュメント・ブロック操作"),
      (name = "tasks", description = "タスク管理"),
      (name = "wiki", description = "Wiki ノード管理"),
   )
)]
pub struct ApiDoc;
