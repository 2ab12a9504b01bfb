//! Wiki API 統合テスト
//!
//! Lark クライアントをスタブに差し替えて、Wiki 関連ハンドラの
//! 入出力・バリデーション・クエリパラメータの条件付き送出を検証する。
//!
//! ## テストケース
//!
//! - ノード検索: 成功エンベロープと省略フィールドの補完
//! - ノード検索: ページ指定の伝搬
//! - ノード検索: query 未指定は 400 でリモート呼び出しなし
//! - ノード検索: 通信エラーは 500
//! - ノード情報取得: ノードの射影
//! - ノード情報取得: obj_type は指定時のみ送出する
//! - ノード一覧: クエリパラメータの条件付き送出
//! - ノード一覧: 成功エンベロープの返却
//! - ノード作成: obj_type 省略時は docx を送出する
//! - ノード作成: title 未指定は 400
//! - ノード移動: 移動結果の射影
//! - タイトル更新: 空オブジェクトの data を返す
//! - タイトル更新: title 未指定は 400
//! - ドキュメントの Wiki 移動: parent_wiki_token は指定時のみ送出する
//! - ドキュメントの Wiki 移動: obj_type / obj_token 未指定は 400

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode},
   routing::{get, patch, post},
};
use larkbridge_gateway::{
   client::lark::{
      LarkError,
      LarkWikiClient,
      types::{
         CreateNodeBody,
         MoveDocsToWikiBody,
         MoveDocsToWikiData,
         MoveNodeBody,
         UpdateTitleBody,
         WikiNode,
         WikiNodeData,
         WikiNodeListData,
         WikiSearchBody,
         WikiSearchData,
         WikiSearchItem,
      },
   },
   handler::{
      WikiState,
      create_wiki_node,
      get_wiki_node_info,
      get_wiki_node_list,
      move_docs_to_wiki,
      move_wiki_node,
      search_wiki_node,
      update_wiki_node_title,
   },
};
use tower::ServiceExt;

// --- Lark クライアントスタブ ---

/// Wiki クライアントスタブの設定
#[derive(Clone)]
struct WikiStubConfig {
   /// 全メソッドを通信エラーで失敗させるか
   network_error: bool,
}

impl WikiStubConfig {
   fn success() -> Self {
      Self {
         network_error: false,
      }
   }

   fn network_error() -> Self {
      Self {
         network_error: true,
      }
   }
}

/// テスト用 Lark Wiki クライアント
///
/// 各メソッドに渡された引数を記録し、ハンドラが組み立てる
/// クエリパラメータとリクエストボディを検証できるようにする。
struct StubWikiClient {
   config: WikiStubConfig,
   /// 全メソッド合算の呼び出し回数
   calls: AtomicUsize,
   /// search_nodes に渡された (query, page_size, page_token)
   last_search: Mutex<Option<(String, i64, String)>>,
   /// get_node に渡された (node_token, obj_type)
   last_get_node: Mutex<Option<(String, Option<String>)>>,
   /// list_nodes に渡された (page_size, page_token, parent_node_token)
   last_list: Mutex<Option<(Option<i64>, String, Option<String>)>>,
   /// create_node に渡されたリクエストボディ
   last_create: Mutex<Option<CreateNodeBody>>,
   /// move_node に渡されたリクエストボディ
   last_move: Mutex<Option<MoveNodeBody>>,
   /// move_docs_to_wiki に渡されたリクエストボディ
   last_move_docs: Mutex<Option<MoveDocsToWikiBody>>,
}

impl StubWikiClient {
   fn new(config: WikiStubConfig) -> Self {
      Self {
         config,
         calls: AtomicUsize::new(0),
         last_search: Mutex::new(None),
         last_get_node: Mutex::new(None),
         last_list: Mutex::new(None),
         last_create: Mutex::new(None),
         last_move: Mutex::new(None),
         last_move_docs: Mutex::new(None),
      }
   }

   /// 呼び出しを記録し、設定に応じて通信エラーを返す
   fn record_call(&self) -> Result<(), LarkError> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.config.network_error {
         return Err(LarkError::Network("connection refused".to_string()));
      }
      Ok(())
   }

   fn sample_node(node_token: &str) -> WikiNode {
      WikiNode {
         space_id: "sp1".to_string(),
         node_token: node_token.to_string(),
         obj_token: "objtok1".to_string(),
         obj_type: "docx".to_string(),
         parent_node_token: "parent1".to_string(),
         node_type: "origin".to_string(),
         has_child: true,
         title: "設計メモ".to_string(),
         ..WikiNode::default()
      }
   }
}

#[async_trait]
impl LarkWikiClient for StubWikiClient {
   async fn search_nodes(
      &self,
      body: WikiSearchBody,
      page_size: i64,
      page_token: &str,
   ) -> Result<WikiSearchData, LarkError> {
      self.record_call()?;
      *self.last_search.lock().unwrap() =
         Some((body.query, page_size, page_token.to_string()));
      Ok(WikiSearchData {
         items: vec![WikiSearchItem {
            node_id:  "nodetok1".to_string(),
            space_id: "sp1".to_string(),
            obj_type: 1,
            title:    "設計メモ".to_string(),
            url:      "https://example.larksuite.com/wiki/nodetok1".to_string(),
         }],
         page_token: None,
         has_more: None,
      })
   }

   async fn get_node(
      &self,
      token: &str,
      obj_type: Option<&str>,
   ) -> Result<WikiNodeData, LarkError> {
      self.record_call()?;
      *self.last_get_node.lock().unwrap() =
         Some((token.to_string(), obj_type.map(str::to_string)));
      Ok(WikiNodeData {
         node: Self::sample_node(token),
      })
   }

   async fn list_nodes(
      &self,
      _space_id: &str,
      page_size: Option<i64>,
      page_token: &str,
      parent_node_token: Option<&str>,
   ) -> Result<WikiNodeListData, LarkError> {
      self.record_call()?;
      *self.last_list.lock().unwrap() = Some((
         page_size,
         page_token.to_string(),
         parent_node_token.map(str::to_string),
      ));
      Ok(WikiNodeListData {
         items:      vec![Self::sample_node("nodetok1")],
         page_token: Some("next_page".to_string()),
         has_more:   Some(true),
      })
   }

   async fn create_node(
      &self,
      _space_id: &str,
      body: CreateNodeBody,
   ) -> Result<WikiNodeData, LarkError> {
      self.record_call()?;
      let title = body.title.clone();
      *self.last_create.lock().unwrap() = Some(body);
      Ok(WikiNodeData {
         node: WikiNode {
            node_token: "new_node".to_string(),
            obj_token: "new_obj".to_string(),
            title,
            ..WikiNode::default()
         },
      })
   }

   async fn move_node(
      &self,
      _space_id: &str,
      node_token: &str,
      body: MoveNodeBody,
   ) -> Result<WikiNodeData, LarkError> {
      self.record_call()?;
      *self.last_move.lock().unwrap() = Some(body);
      Ok(WikiNodeData {
         node: Self::sample_node(node_token),
      })
   }

   async fn update_node_title(
      &self,
      _space_id: &str,
      _node_token: &str,
      _body: UpdateTitleBody,
   ) -> Result<(), LarkError> {
      self.record_call()?;
      Ok(())
   }

   async fn move_docs_to_wiki(
      &self,
      _space_id: &str,
      body: MoveDocsToWikiBody,
   ) -> Result<MoveDocsToWikiData, LarkError> {
      self.record_call()?;
      *self.last_move_docs.lock().unwrap() = Some(body);
      Ok(MoveDocsToWikiData {
         wiki_token: Some("wiki123".to_string()),
         task_id: None,
         applied: Some(true),
      })
   }
}

// --- テストヘルパー ---

/// Wiki ルートのみを登録したテスト用アプリケーションを作成
fn create_test_app(config: WikiStubConfig) -> (Router, Arc<StubWikiClient>) {
   let stub = Arc::new(StubWikiClient::new(config));
   let state = Arc::new(WikiState {
      lark_client: stub.clone(),
   });

   let app = Router::new()
      .route("/wiki/search", post(search_wiki_node))
      .route("/wiki/nodes/{node_token}", get(get_wiki_node_info))
      .route(
         "/wiki/spaces/{space_id}/nodes",
         get(get_wiki_node_list).post(create_wiki_node),
      )
      .route(
         "/wiki/spaces/{space_id}/nodes/{node_token}/move",
         post(move_wiki_node),
      )
      .route(
         "/wiki/spaces/{space_id}/nodes/{node_token}/title",
         patch(update_wiki_node_title),
      )
      .route("/wiki/spaces/{space_id}/move_docs", post(move_docs_to_wiki))
      .with_state(state);

   (app, stub)
}

/// JSON ボディ付きリクエストを作成
fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .header("content-type", "application/json")
      .body(Body::from(serde_json::to_string(body).unwrap()))
      .unwrap()
}

/// ボディなしリクエストを作成
fn empty_request(method: Method, uri: &str) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

/// レスポンスボディを JSON として読み取る
async fn response_json(response: axum::response::Response) -> serde_json::Value {
   let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   serde_json::from_slice(&body).unwrap()
}

// --- テストケース ---

#[tokio::test]
async fn test_ノード検索で成功エンベロープと省略フィールドの補完() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: ページ指定なし
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/search",
         &serde_json::json!({"query": "設計"}),
      ))
      .await
      .unwrap();

   // Then: Lark が省略した has_more / page_token は false / 空文字列に補完される
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["status"], "success");
   assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
   assert_eq!(json["data"]["items"][0]["node_id"], "nodetok1");
   assert_eq!(json["data"]["items"][0]["title"], "設計メモ");
   assert_eq!(json["data"]["has_more"], false);
   assert_eq!(json["data"]["page_token"], "");

   // ページ指定なしのときはゼロ値がそのまま送出される
   assert_eq!(
      *stub.last_search.lock().unwrap(),
      Some(("設計".to_string(), 0, String::new()))
   );
}

#[tokio::test]
async fn test_ノード検索でページ指定を伝搬する() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/search",
         &serde_json::json!({"query": "設計", "page_size": 20, "page_token": "tok1"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_search.lock().unwrap(),
      Some(("設計".to_string(), 20, "tok1".to_string()))
   );
}

#[tokio::test]
async fn test_ノード検索でquery未指定なら400でリモート呼び出しなし() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: query が空文字列の場合と欠落している場合は同じ扱い
   for body in [serde_json::json!({"query": ""}), serde_json::json!({})] {
      let response = app
         .clone()
         .oneshot(json_request(Method::POST, "/wiki/search", &body))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let json = response_json(response).await;
      assert_eq!(json["status"], "error");
      assert_eq!(json["message"], "query is required");
   }

   assert_eq!(
      stub.calls.load(Ordering::SeqCst),
      0,
      "リモート呼び出しが発生しないこと"
   );
}

#[tokio::test]
async fn test_ノード検索で通信エラーなら500() {
   // Given
   let (app, _stub) = create_test_app(WikiStubConfig::network_error());

   // When
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/search",
         &serde_json::json!({"query": "設計"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
   let json = response_json(response).await;
   assert_eq!(json["status"], "error");
   assert_eq!(json["message"], "connection refused");
}

#[tokio::test]
async fn test_ノード情報取得でノードを射影する() {
   // Given
   let (app, _stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(empty_request(Method::GET, "/wiki/nodes/nodetok1"))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["data"]["node_token"], "nodetok1");
   assert_eq!(json["data"]["obj_token"], "objtok1");
   assert_eq!(json["data"]["obj_type"], "docx");
   assert_eq!(json["data"]["parent_node_token"], "parent1");
   assert_eq!(json["data"]["node_type"], "origin");
   assert_eq!(json["data"]["title"], "設計メモ");
   assert_eq!(json["data"]["has_child"], true);
}

#[tokio::test]
async fn test_ノード情報取得でobj_typeは指定時のみ送る() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: 指定なし
   let response = app
      .clone()
      .oneshot(empty_request(Method::GET, "/wiki/nodes/nodetok1"))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_get_node.lock().unwrap(),
      Some(("nodetok1".to_string(), None))
   );

   // When: 空文字列の obj_type も送出されない
   let response = app
      .clone()
      .oneshot(empty_request(Method::GET, "/wiki/nodes/nodetok1?obj_type="))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_get_node.lock().unwrap(),
      Some(("nodetok1".to_string(), None))
   );

   // When: 明示指定
   let response = app
      .oneshot(empty_request(
         Method::GET,
         "/wiki/nodes/nodetok1?obj_type=wiki",
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_get_node.lock().unwrap(),
      Some(("nodetok1".to_string(), Some("wiki".to_string())))
   );
}

#[tokio::test]
async fn test_ノード一覧でクエリパラメータを条件付きで送る() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: 指定なし
   let response = app
      .clone()
      .oneshot(empty_request(Method::GET, "/wiki/spaces/sp1/nodes"))
      .await
      .unwrap();

   // Then: page_token は常に、page_size / parent_node_token は指定時のみ
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_list.lock().unwrap(),
      Some((None, String::new(), None))
   );

   // When: page_size が 0 以下なら送出されない
   let response = app
      .clone()
      .oneshot(empty_request(Method::GET, "/wiki/spaces/sp1/nodes?page_size=0"))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_list.lock().unwrap(),
      Some((None, String::new(), None))
   );

   // When: すべて明示指定
   let response = app
      .oneshot(empty_request(
         Method::GET,
         "/wiki/spaces/sp1/nodes?page_size=10&page_token=t1&parent_node_token=pn1",
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   assert_eq!(
      *stub.last_list.lock().unwrap(),
      Some((Some(10), "t1".to_string(), Some("pn1".to_string())))
   );
}

#[tokio::test]
async fn test_ノード一覧で成功エンベロープを返す() {
   // Given
   let (app, _stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(empty_request(Method::GET, "/wiki/spaces/sp1/nodes"))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);
   assert_eq!(json["data"]["items"][0]["node_token"], "nodetok1");
   assert_eq!(json["data"]["has_more"], true);
   assert_eq!(json["data"]["page_token"], "next_page");
}

#[tokio::test]
async fn test_ノード作成でobj_type省略時はdocxを送る() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/spaces/sp1/nodes",
         &serde_json::json!({"title": "新ページ", "parent_node_token": "parent1"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["data"]["node_token"], "new_node");
   assert_eq!(json["data"]["obj_token"], "new_obj");
   assert_eq!(json["data"]["title"], "新ページ");
   assert_eq!(json["data"]["url"], "");

   let recorded = stub.last_create.lock().unwrap();
   let recorded = recorded.as_ref().expect("create_node が呼び出されていない");
   assert_eq!(recorded.obj_type, "docx");
   assert_eq!(recorded.parent_node_token, "parent1");
   assert_eq!(recorded.title, "新ページ");
}

#[tokio::test]
async fn test_ノード作成でtitle未指定なら400() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/spaces/sp1/nodes",
         &serde_json::json!({"parent_node_token": "parent1"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let json = response_json(response).await;
   assert_eq!(json["message"], "title is required");
   assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ノード移動で移動結果を返す() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/spaces/sp1/nodes/nodetok1/move",
         &serde_json::json!({"target_parent_token": "parent2", "target_space_id": "sp2"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["data"]["node_token"], "nodetok1");
   assert_eq!(json["data"]["obj_token"], "objtok1");

   let recorded = stub.last_move.lock().unwrap();
   let recorded = recorded.as_ref().expect("move_node が呼び出されていない");
   assert_eq!(recorded.target_parent_token, "parent2");
   assert_eq!(recorded.target_space_id, "sp2");
}

#[tokio::test]
async fn test_タイトル更新で空のdataを返す() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::PATCH,
         "/wiki/spaces/sp1/nodes/nodetok1/title",
         &serde_json::json!({"title": "改名後のタイトル"}),
      ))
      .await
      .unwrap();

   // Then: data は空オブジェクト
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["status"], "success");
   assert!(json["data"].as_object().unwrap().is_empty());
   assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_タイトル更新でtitle未指定なら400() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When
   let response = app
      .oneshot(json_request(
         Method::PATCH,
         "/wiki/spaces/sp1/nodes/nodetok1/title",
         &serde_json::json!({}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
   let json = response_json(response).await;
   assert_eq!(json["message"], "title is required");
   assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ドキュメントのwiki移動でparent_wiki_tokenは指定時のみ送る() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: parent_wiki_token なし
   let response = app
      .clone()
      .oneshot(json_request(
         Method::POST,
         "/wiki/spaces/sp1/move_docs",
         &serde_json::json!({"obj_type": "docx", "obj_token": "doctok1"}),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let json = response_json(response).await;
   assert_eq!(json["data"]["wiki_token"], "wiki123");
   assert_eq!(json["data"]["task_id"], "");
   assert_eq!(json["data"]["applied"], true);
   {
      let recorded = stub.last_move_docs.lock().unwrap();
      let recorded = recorded.as_ref().expect("move_docs_to_wiki が呼び出されていない");
      assert!(recorded.parent_wiki_token.is_none());
      assert_eq!(recorded.obj_type, "docx");
      assert_eq!(recorded.obj_token, "doctok1");
      assert!(!recorded.apply);
   }

   // When: parent_wiki_token と apply を明示指定
   let response = app
      .oneshot(json_request(
         Method::POST,
         "/wiki/spaces/sp1/move_docs",
         &serde_json::json!({
            "obj_type": "docx",
            "obj_token": "doctok1",
            "parent_wiki_token": "wikitok1",
            "apply": true
         }),
      ))
      .await
      .unwrap();

   // Then
   assert_eq!(response.status(), StatusCode::OK);
   let recorded = stub.last_move_docs.lock().unwrap();
   let recorded = recorded.as_ref().unwrap();
   assert_eq!(recorded.parent_wiki_token.as_deref(), Some("wikitok1"));
   assert!(recorded.apply);
}

#[tokio::test]
async fn test_ドキュメントのwiki移動でobj指定がなければ400() {
   // Given
   let (app, stub) = create_test_app(WikiStubConfig::success());

   // When: obj_type / obj_token のどちらが欠けても 400
   for body in [
      serde_json::json!({"obj_type": "", "obj_token": "doctok1"}),
      serde_json::json!({"obj_type": "docx", "obj_token": ""}),
      serde_json::json!({}),
   ] {
      let response = app
         .clone()
         .oneshot(json_request(Method::POST, "/wiki/spaces/sp1/move_docs", &body))
         .await
         .unwrap();

      // Then
      assert_eq!(response.status(), StatusCode::BAD_REQUEST);
      let json = response_json(response).await;
      assert_eq!(json["message"], "obj_type and obj_token are required");
   }

   assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}
