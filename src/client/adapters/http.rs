//! Task API over HTTP.

use crate::client::ports::{TaskApi, TaskApiError, TaskApiResult};
use crate::config::ClientConfig;
use crate::http::MessageBody;
use crate::task::domain::{NewTask, Task, TaskId, TaskPatch};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// [`TaskApi`] adapter speaking to the task resources of a server.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base: Url,
}

impl HttpTaskApi {
    /// Creates an adapter from client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> TaskApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|err| TaskApiError::Transport(err.to_string()))?;
        Ok(Self::with_client(client, config.server_url.clone()))
    }

    /// Creates an adapter around an existing client.
    #[must_use]
    pub const fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    fn url(&self, id: Option<&TaskId>) -> TaskApiResult<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TaskApiError::Transport(format!("server URL cannot be a base: {}", self.base))
            })?;
            segments.pop_if_empty().push("tasks");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }
}

fn transport(err: &reqwest::Error) -> TaskApiError {
    TaskApiError::Transport(err.to_string())
}

/// Turns non-success responses into [`TaskApiError::Status`], preferring the
/// server's own message.
async fn ensure_success(response: Response) -> TaskApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .map(|body| body.message);
    warn!(status = status.as_u16(), ?message, "task API request failed");
    Err(TaskApiError::status(status.as_u16(), message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> TaskApiResult<T> {
    let response = ensure_success(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|err| TaskApiError::Decode(err.to_string()))
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn fetch_tasks(&self) -> TaskApiResult<Vec<Task>> {
        let url = self.url(None)?;
        debug!(%url, "fetching tasks");
        let response = self.client.get(url).send().await.map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn create_task(&self, draft: &NewTask) -> TaskApiResult<Task> {
        let url = self.url(None)?;
        debug!(%url, title = draft.title(), "creating task");
        let response = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskApiResult<Task> {
        let url = self.url(Some(id))?;
        debug!(%url, "updating task");
        let response = self
            .client
            .put(url)
            .json(patch)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        decode(response).await
    }

    async fn delete_task(&self, id: &TaskId) -> TaskApiResult<()> {
        let url = self.url(Some(id))?;
        debug!(%url, "deleting task");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        let confirmation: MessageBody = decode(response).await?;
        debug!(message = %confirmation.message, "task deleted");
        Ok(())
    }
}
