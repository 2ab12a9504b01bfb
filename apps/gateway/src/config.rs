//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。

use std::env;

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// Lark Open API のベース URL
   pub lark_base_url: String,
   /// Lark アプリケーション ID
   pub app_id: String,
   /// Lark アプリケーションシークレット
   pub app_secret: String,
}

impl GatewayConfig {
   /// 環境変数から設定を読み込む
   ///
   /// `LARK_APP_ID` / `LARK_APP_SECRET` は必須で、未設定の場合は起動を中断する。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .expect("PORT は有効なポート番号である必要があります"),
         lark_base_url: env::var("LARK_BASE_URL")
            .unwrap_or_else(|_| "https://open.larksuite.com".to_string()),
         app_id: env::var("LARK_APP_ID")
            .expect("LARK_APP_ID が設定されていません（.env を確認してください）"),
         app_secret: env::var("LARK_APP_SECRET")
            .expect("LARK_APP_SECRET が設定されていません（.env を確認してください）"),
      })
   }
}

#[cfg(test)]
mod tests {
   // テスト間で環境変数の競合を避けるため、
   // テスト用のパース関数で検証する

   #[test]
   fn test_port_未設定のときデフォルト8000() {
      assert_eq!(parse_port(None), 8000);
   }

   #[test]
   fn test_port_設定値をパースする() {
      assert_eq!(parse_port(Some("9000")), 9000);
   }

   #[test]
   #[should_panic]
   fn test_port_不正な値でpanicする() {
      parse_port(Some("not-a-port"));
   }

   /// Option<&str> からポート番号をパースする（テスト用）
   fn parse_port(value: Option<&str>) -> u16 {
      value
         .unwrap_or("8000")
         .parse()
         .expect("PORT は有効なポート番号である必要があります")
   }
}
