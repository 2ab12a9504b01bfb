//! # 外部 API クライアント
//!
//! Lark Open API など外部サービスとの通信を担当する。

pub mod lark;

pub use lark::{
    LarkClient,
    LarkClientImpl,
    LarkDocumentClient,
    LarkError,
    LarkTaskClient,
    LarkWikiClient,
};
