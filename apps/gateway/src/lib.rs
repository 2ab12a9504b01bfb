//! # LarkBridge ゲートウェイライブラリ
//!
//! Lark Suite の Open API を仲介する REST ゲートウェイのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: State の注入とルーター構築
//! - `client`: Lark Open API クライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー変換とレスポンスヘルパー
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
