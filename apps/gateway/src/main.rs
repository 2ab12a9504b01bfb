//! # LarkBridge ゲートウェイサーバー
//!
//! Lark Suite のドキュメント・タスク・Wiki API を仲介する REST サーバー。
//!
//! ## 役割
//!
//! 社内サービスが Lark Open API を直接呼ばずに済むよう、以下の責務を担う:
//!
//! - **認証の隠蔽**: tenant_access_token の取得・キャッシュ・更新
//! - **レスポンス整形**: Lark のエンベロープを統一 JSON エンベロープに変換
//! - **エラーマッピング**: トランスポート / 論理エラーを HTTP ステータスへ変換
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   社内サービス │────▶│   Gateway    │────▶│  Lark Open   │
//! │              │     │  port: 8000  │     │     API      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `LARK_APP_ID` | **Yes** | Lark アプリの App ID |
//! | `LARK_APP_SECRET` | **Yes** | Lark アプリの App Secret |
//! | `LARK_BASE_URL` | No | Lark Open API のベース URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p larkbridge-gateway
//!
//! # 本番環境（環境変数を直接指定）
//! LARK_APP_ID=cli_xxx LARK_APP_SECRET=yyy cargo run -p larkbridge-gateway --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use larkbridge_gateway::{app_builder::build_app, client::lark::LarkClientImpl, config::GatewayConfig};
use larkbridge_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. Lark クライアントとルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    larkbridge_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!(
        "ゲートウェイサーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // Lark クライアントの初期化
    // 具象型で保持し、ルーター構築時に各トレイトオブジェクトへ coerce する
    let lark_client = Arc::new(LarkClientImpl::new(
        &config.lark_base_url,
        &config.app_id,
        &config.app_secret,
    ));

    let app = build_app(lark_client.clone(), lark_client.clone(), lark_client);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ゲートウェイサーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
