//! タスク関連の Lark API クライアント

use async_trait::async_trait;

use super::{
   client_impl::LarkClientImpl,
   error::LarkError,
   response::handle_response,
   types::{TaskBody, TaskData},
};

/// タスク関連の Lark API クライアントトレイト
#[async_trait]
pub trait LarkTaskClient: Send + Sync {
   /// タスクを作成する
   ///
   /// Lark の `POST /open-apis/task/v1/tasks?user_id_type=open_id` を呼び出す。
   async fn create_task(&self, body: TaskBody) -> Result<TaskData, LarkError>;

   /// タスクを取得する
   ///
   /// Lark の `GET /open-apis/task/v1/tasks/{task_id}?user_id_type=open_id` を呼び出す。
   async fn get_task(&self, task_id: &str) -> Result<TaskData, LarkError>;

   /// タスクを削除する
   ///
   /// Lark の `DELETE /open-apis/task/v1/tasks/{task_id}` を呼び出す。
   async fn delete_task(&self, task_id: &str) -> Result<(), LarkError>;
}

#[async_trait]
impl LarkTaskClient for LarkClientImpl {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn create_task(&self, body: TaskBody) -> Result<TaskData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!("{}/open-apis/task/v1/tasks?user_id_type=open_id", self.base_url);

      let response = self
         .client
         .post(&url)
         .bearer_auth(&token)
         .json(&body)
         .send()
         .await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%task_id))]
   async fn get_task(&self, task_id: &str) -> Result<TaskData, LarkError> {
      let token = self.bearer_token().await?;
      let url = format!(
         "{}/open-apis/task/v1/tasks/{}?user_id_type=open_id",
         self.base_url, task_id
      );

      let response = self.client.get(&url).bearer_auth(&token).send().await?;
      handle_response(response).await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%task_id))]
   async fn delete_task(&self, task_id: &str) -> Result<(), LarkError> {
      let token = self.bearer_token().await?;
      let url = format!("{}/open-apis/task/v1/tasks/{}", self.base_url, task_id);

      let response = self.client.delete(&url).bearer_auth(&token).send().await?;
      handle_response::<serde_json::Value>(response).await?;
      Ok(())
   }
}
