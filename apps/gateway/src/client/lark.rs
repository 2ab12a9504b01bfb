//! # Lark Open API クライアント
//!
//! ゲートウェイから Lark Open API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `POST /open-apis/auth/v3/tenant_access_token/internal` - テナントアクセストークン取得
//! - `POST /open-apis/docx/v1/documents` - ドキュメント作成
//! - `POST /open-apis/drive/v1/metas/batch_query` - ドキュメントメタデータ取得
//! - `GET /open-apis/docx/v1/documents/{document_id}/raw_content` - プレーンテキスト取得
//! - `GET /open-apis/docx/v1/documents/{document_id}/blocks` - ブロック一覧
//! - `POST /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children` - 子ブロック作成
//! - `PATCH /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}` - ブロック更新
//! - `GET /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}` - ブロック取得
//! - `GET /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children` - 子ブロック一覧
//! - `DELETE /open-apis/docx/v1/documents/{document_id}/blocks/{block_id}/children/batch_delete` - 子ブロック一括削除
//! - `POST /open-apis/docx/v1/documents/blocks/convert` - コンテンツ変換
//! - `POST /open-apis/task/v1/tasks` - タスク作成
//! - `GET /open-apis/task/v1/tasks/{task_id}` - タスク取得
//! - `DELETE /open-apis/task/v1/tasks/{task_id}` - タスク削除
//! - `POST /open-apis/wiki/v1/nodes/search` - Wiki ノード検索
//! - `GET /open-apis/wiki/v2/spaces/get_node` - Wiki ノード取得
//! - `GET /open-apis/wiki/v2/spaces/{space_id}/nodes` - Wiki ノード一覧
//! - `POST /open-apis/wiki/v2/spaces/{space_id}/nodes` - Wiki ノード作成
//! - `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/{node_token}/move` - Wiki ノード移動
//! - `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/{node_token}/update_title` - タイトル更新
//! - `POST /open-apis/wiki/v2/spaces/{space_id}/nodes/move_docs_to_wiki` - ドキュメントの Wiki 移動

pub mod client_impl;
pub mod document_client;
pub mod error;
pub mod response;
pub mod task_client;
mod token;
pub mod types;
pub mod wiki_client;

pub use client_impl::{LarkClient, LarkClientImpl};
pub use document_client::LarkDocumentClient;
pub use error::LarkError;
pub use task_client::LarkTaskClient;
pub use wiki_client::LarkWikiClient;
