//! # LarkBridge 共有ユーティリティ
//!
//! このクレートは、LarkBridge
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ゲートウェイ本体および将来のクレートから依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod api_response;
pub mod health;
pub mod observability;

pub use api_response::{ApiResponse, ResponseStatus};
pub use health::HealthResponse;
