use anyhow::Context;
use serde::Serialize;

/// HTTP client for the workflow orchestrator's run-start endpoint.
#[derive(Debug, Clone)]
pub struct WorkflowsClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct StartRunRequest<'a> {
    name: &'a str,
    input: &'a str,
}

impl WorkflowsClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// Submits one run. The orchestrator deduplicates on `run_name`,
    /// so it is sent verbatim.
    pub async fn start_run(
        &self,
        workflow_id: &str,
        run_name: &str,
        input_json: &str,
    ) -> anyhow::Result<()> {
        let url = format!("{}/workflows/{}/runs", self.base_url, workflow_id);

        let response = self
            .http
            .post(&url)
            .json(&StartRunRequest {
                name: run_name,
                input: input_json,
            })
            .send()
            .await
            .with_context(|| format!("failed to reach workflow orchestrator at {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "workflow run {run_name} rejected with status {}",
            response.status()
        );

        Ok(())
    }
}

impl dispatcher::WorkflowClient for WorkflowsClient {
    async fn start_run(
        &self,
        workflow_id: &str,
        run_name: &str,
        input_json: &str,
    ) -> anyhow::Result<()> {
        WorkflowsClient::start_run(self, workflow_id, run_name, input_json).await
    }
}
