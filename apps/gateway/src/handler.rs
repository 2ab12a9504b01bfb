//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、Lark API の呼び出しはクライアントトレイトに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `document`: ドキュメント・ブロック操作
//! - `task`: タスク操作
//! - `wiki`: Wiki ノード操作

pub mod document;
pub mod health;
pub mod task;
pub mod wiki;

pub use document::{
   DocumentState,
   convert_content_to_blocks,
   create_doc,
   create_doc_block,
   delete_doc_block_children,
   get_doc_block,
   get_doc_block_children,
   get_document,
   get_document_blocks,
   get_document_raw_content,
   update_doc_block,
};
pub use health::health_check;
pub use task::{TaskState, create_task, delete_task, get_task};
pub use wiki::{
   WikiState,
   create_wiki_node,
   get_wiki_node_info,
   get_wiki_node_list,
   move_docs_to_wiki,
   move_wiki_node,
   search_wiki_node,
   update_wiki_node_title,
};
