//! HTTP Task Store
//!
//! `TaskApi` over reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response, StatusCode};

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskRequest};

const TASK_PATH: &str = "/task";

/// Unreserved URL characters stay as they are
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn collection_url(&self) -> String {
        self.config.url(TASK_PATH)
    }

    fn task_url(&self, task_id: &str) -> String {
        task_url(&self.config, task_id)
    }
}

/// URL of a single task, with the id percent-encoded as one path segment
fn task_url(config: &ClientConfig, task_id: &str) -> String {
    let id = utf8_percent_encode(task_id, ID_SEGMENT);
    config.url(&format!("{}/{}", TASK_PATH, id))
}

/// Reject anything but the documented success code
fn expect_status(response: Response, operation: &'static str, expected: StatusCode) -> TaskResult<Response> {
    check_status(operation, response.status(), expected)?;
    Ok(response)
}

fn check_status(operation: &'static str, status: StatusCode, expected: StatusCode) -> TaskResult<()> {
    if status == expected {
        Ok(())
    } else {
        Err(TaskError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> TaskResult<Vec<Task>> {
        let response = self.client.get(self.collection_url()).send().await?;
        let response = expect_status(response, "list", StatusCode::OK)?;
        Ok(response.json::<Vec<Task>>().await?)
    }

    async fn create(&self, request: &TaskRequest) -> TaskResult<Task> {
        let response = self
            .client
            .post(self.collection_url())
            .json(request)
            .send()
            .await?;
        let response = expect_status(response, "create", StatusCode::CREATED)?;
        Ok(response.json::<Task>().await?)
    }

    async fn update(&self, task_id: &str, request: &TaskRequest) -> TaskResult<Task> {
        let response = self
            .client
            .put(self.task_url(task_id))
            .json(request)
            .send()
            .await?;
        let response = expect_status(response, "update", StatusCode::OK)?;
        Ok(response.json::<Task>().await?)
    }

    async fn delete(&self, task_id: &str) -> TaskResult<()> {
        let response = self.client.delete(self.task_url(task_id)).send().await?;
        expect_status(response, "delete", StatusCode::NO_CONTENT)?;
        Ok(())
    }
}
