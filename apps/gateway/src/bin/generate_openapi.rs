//! # OpenAPI YAML 生成ツール
//!
//! ゲートウェイの Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//! 生成後、utoipa が自動登録する未使用コンポーネントスキーマを除去する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p larkbridge-gateway > openapi/openapi.yaml
//! ```

use std::collections::HashSet;

use larkbridge_gateway::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
   let mut openapi = ApiDoc::openapi();
   remove_unused_schemas(&mut openapi);
   let yaml = openapi.to_yaml().expect("OpenAPI YAML 生成に失敗しました");
   print!("{yaml}");
}

/// どこからも `$ref` されないコンポーネントスキーマを除去する
///
/// `#[utoipa::path]` マクロは `body = ApiResponse<T>` を処理する際、
/// ジェネリック型パラメータ `T` の standalone スキーマも登録する。
/// エンベロープ側のスキーマに内容が展開されるため、standalone 側は
/// 参照されないまま残る。
fn remove_unused_schemas(openapi: &mut utoipa::openapi::OpenApi) {
   let json = serde_json::to_value(&*openapi).expect("JSON シリアライズに失敗しました");

   let mut used = HashSet::new();
   collect_schema_refs(&json, &mut used);

   if let Some(components) = &mut openapi.components {
      components.schemas.retain(|name, _| used.contains(name));
   }
}

/// JSON ツリーを走査し、`$ref` が指すスキーマ名を収集する
///
/// 参照形式: `"$ref": "#/components/schemas/SchemaName"`
fn collect_schema_refs(value: &serde_json::Value, used: &mut HashSet<String>) {
   match value {
      serde_json::Value::Object(map) => {
         for (key, child) in map {
            if key == "$ref"
               && let Some(target) = child.as_str()
               && let Some(name) = target.strip_prefix("#/components/schemas/")
            {
               used.insert(name.to_string());
            }
            collect_schema_refs(child, used);
         }
      }
      serde_json::Value::Array(items) => {
         for child in items {
            collect_schema_refs(child, used);
         }
      }
      _ => {}
   }
}
