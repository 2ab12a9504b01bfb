//! Lark API のリクエスト / レスポンスデータ型
//!
//! Lark Open API のワイヤー形式をそのまま写した型群。
//! レスポンス側の型はすべて `Default` を実装し、Lark が省略したフィールドは
//! 空文字列 / `false` / ゼロに補完される。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- ドキュメントブロック ---

/// ドキュメントブロック
///
/// Docx ドキュメントを構成する原子単位。`block_type` が種別を示し、
/// 種別に対応するボディフィールド（`text`、`heading1` など）のいずれか 1 つが設定される。
///
/// テキスト系以外のブロック種別（画像、表など）は `block_id` / `block_type` /
/// `parent_id` / `children` のみ保持し、ボディは破棄される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Block {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id:  Option<String>,
    /// 子ブロック ID のリスト
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children:   Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page:     Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text:     Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading1: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading2: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading3: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading4: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading5: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading6: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading7: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading8: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading9: Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet:   Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered:  Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code:     Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote:    Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo:     Option<TextBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider:  Option<DividerBlock>,
}

/// テキスト系ブロックのボディ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style:    Option<TextStyle>,
    #[serde(default)]
    pub elements: Vec<TextElement>,
}

/// ブロックスタイル
///
/// `language` はコードブロック、`done` は ToDo ブロックでのみ意味を持つ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align:    Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folded:   Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done:     Option<bool>,
}

/// テキスト要素
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// 文字列コンテンツとその装飾
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextRun {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_element_style: Option<TextElementStyle>,
}

/// テキスト要素の装飾スタイル
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold:          Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic:        Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline:     Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_code:   Option<bool>,
}

/// 区切り線ブロックのボディ（フィールドなし）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DividerBlock {}

// --- ドキュメントメタデータ ---

/// メタデータ一括取得リクエストボディ
#[derive(Debug, Serialize)]
pub struct MetaRequest {
    pub request_docs: Vec<RequestDoc>,
}

/// メタデータ取得対象のドキュメント参照
#[derive(Debug, Serialize)]
pub struct RequestDoc {
    pub doc_token: String,
    pub doc_type:  String,
}

/// メタデータ一括取得レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchQueryMetaData {
    #[serde(default)]
    pub metas: Vec<DocMeta>,
}

/// ドキュメントメタデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocMeta {
    #[serde(default)]
    pub doc_token: String,
    #[serde(default)]
    pub title: String,
    pub owner_id: Option<String>,
    pub create_time: Option<String>,
    pub latest_modify_time: Option<String>,
}

// --- ドキュメント作成・本文 ---

/// ドキュメント作成リクエストボディ
#[derive(Debug, Serialize)]
pub struct CreateDocumentBody {
    pub title:        String,
    pub folder_token: String,
}

/// ドキュメント作成レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDocumentData {
    #[serde(default)]
    pub document: DocumentInfo,
}

/// 作成されたドキュメントの情報
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentInfo {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub title: String,
    pub revision_id: Option<i64>,
}

/// プレーンテキスト取得レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContentData {
    #[serde(default)]
    pub content: String,
}

// --- ブロック操作 ---

/// ブロック一覧 / 子ブロック一覧レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockListData {
    #[serde(default)]
    pub items: Vec<Block>,
    pub page_token: Option<String>,
    pub has_more: Option<bool>,
}

/// 子ブロック作成リクエストボディ
#[derive(Debug, Serialize)]
pub struct CreateBlockChildrenBody {
    pub children: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

/// 子ブロック作成レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlockChildrenData {
    #[serde(default)]
    pub children: Vec<Block>,
    pub document_revision_id: Option<i64>,
}

/// ブロック更新リクエスト
///
/// REST 側のリクエストボディをそのまま Lark の PATCH ボディとして送出する。
/// `block_id` は URL パスパラメータの値で上書きされる。
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateBlockRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_text_elements: Option<UpdateTextElements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_text_style: Option<UpdateTextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_text: Option<UpdateText>,
}

/// テキスト要素の全置換
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTextElements {
    #[serde(default)]
    pub elements: Vec<TextElement>,
}

/// ブロックスタイルの更新
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTextStyle {
    #[serde(default)]
    pub style:  TextStyle,
    /// 更新対象のスタイルフィールド番号
    #[serde(default)]
    pub fields: Vec<i64>,
}

/// テキスト要素とスタイルの一括更新
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateText {
    #[serde(default)]
    pub elements: Vec<TextElement>,
    #[serde(default)]
    pub style:    TextStyle,
    /// 更新対象のフィールド番号
    #[serde(default)]
    pub fields:   Vec<i64>,
}

/// ブロック更新 / 取得レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockData {
    pub block: Option<Block>,
}

/// 子ブロック一括削除リクエストボディ
#[derive(Debug, Serialize)]
pub struct BatchDeleteChildrenBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,
}

/// 子ブロック一括削除レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchDeleteChildrenData {
    pub document_revision_id: Option<i64>,
}

/// コンテンツ変換リクエストボディ
#[derive(Debug, Serialize)]
pub struct ConvertContentBody {
    pub content_type: String,
    pub content: String,
}

/// コンテンツ変換レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertContentData {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

// --- タスク ---

/// タスク作成リクエストボディ
#[derive(Debug, Serialize)]
pub struct TaskBody {
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Due>,
}

/// タスク期限
#[derive(Debug, Serialize)]
pub struct Due {
    /// Unix タイムスタンプ（秒）の文字列表現
    pub time: String,
}

/// タスク作成 / 取得レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskData {
    #[serde(default)]
    pub task: Task,
}

/// タスク
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: String,
}

// --- Wiki ---

/// Wiki ノード検索リクエストボディ
#[derive(Debug, Serialize)]
pub struct WikiSearchBody {
    pub query: String,
}

/// Wiki ノード検索レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WikiSearchData {
    #[serde(default)]
    pub items: Vec<WikiSearchItem>,
    pub page_token: Option<String>,
    pub has_more: Option<bool>,
}

/// Wiki ノード検索結果の要素
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WikiSearchItem {
    #[serde(default)]
    pub node_id:  String,
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub obj_type: i64,
    #[serde(default)]
    pub title:    String,
    #[serde(default)]
    pub url:      String,
}

/// Wiki ノード
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WikiNode {
    #[serde(default)]
    pub space_id: String,
    #[serde(default)]
    pub node_token: String,
    #[serde(default)]
    pub obj_token: String,
    #[serde(default)]
    pub obj_type: String,
    #[serde(default)]
    pub parent_node_token: String,
    #[serde(default)]
    pub node_type: String,
    #[serde(default)]
    pub origin_node_token: String,
    #[serde(default)]
    pub origin_space_id: String,
    #[serde(default)]
    pub has_child: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub obj_create_time: String,
    #[serde(default)]
    pub obj_edit_time: String,
    #[serde(default)]
    pub node_create_time: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub owner: String,
}

/// Wiki ノード取得 / 作成 / 移動レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WikiNodeData {
    #[serde(default)]
    pub node: WikiNode,
}

/// Wiki ノード一覧レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WikiNodeListData {
    #[serde(default)]
    pub items: Vec<WikiNode>,
    pub page_token: Option<String>,
    pub has_more: Option<bool>,
}

/// Wiki ノード作成リクエストボディ
#[derive(Debug, Serialize)]
pub struct CreateNodeBody {
    pub obj_type: String,
    pub parent_node_token: String,
    pub title: String,
}

/// Wiki ノード移動リクエストボディ
#[derive(Debug, Serialize)]
pub struct MoveNodeBody {
    pub target_parent_token: String,
    pub target_space_id: String,
}

/// Wiki ノードタイトル更新リクエストボディ
#[derive(Debug, Serialize)]
pub struct UpdateTitleBody {
    pub title: String,
}

/// クラウドドキュメントの Wiki 移動リクエストボディ
#[derive(Debug, Serialize)]
pub struct MoveDocsToWikiBody {
    pub obj_type:  String,
    pub obj_token: String,
    pub apply:     bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_wiki_token: Option<String>,
}

/// クラウドドキュメントの Wiki 移動レスポンスデータ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoveDocsToWikiData {
    pub wiki_token: Option<String>,
    pub task_id: Option<String>,
    pub applied: Option<bool>,
}
