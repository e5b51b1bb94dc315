//! Job polling for requests the API queues instead of answering directly.

use crate::DynClient;
use dynect_core::{ApiResponse, DynError, Result};
use reqwest::Method;
use tracing::debug;

impl DynClient {
    /// Resolve a response to its final state
    ///
    /// `success` is returned unchanged. `incomplete` is polled at
    /// `Job/<job_id>/` after each poll interval until the job leaves that
    /// state or the poll ceiling is reached. Any other status is returned as
    /// [`DynError::Api`] carrying the response's message list.
    pub async fn resolve(&self, response: ApiResponse, token: Option<&str>) -> Result<ApiResponse> {
        let poll = self.poll_config();
        let mut response = response;
        let mut attempts: u32 = 0;
        let mut polled_job: Option<String> = None;

        loop {
            if response.status.is_success() {
                return Ok(response);
            }
            if !response.status.is_incomplete() {
                return Err(response.into_error());
            }

            // Job status responses may omit the id they were fetched by
            let job_id = response
                .job_id
                .take()
                .or_else(|| polled_job.take())
                .ok_or(DynError::MissingJobId)?;
            if !poll.allows(attempts) {
                return Err(DynError::JobTimeout { job_id, attempts });
            }

            tokio::time::sleep(poll.interval).await;
            attempts += 1;
            debug!(job_id = %job_id, attempt = attempts, "polling incomplete job");

            response = self
                .send::<()>(Method::GET, &format!("Job/{job_id}/"), None, token)
                .await?;
            polled_job = Some(job_id);
        }
    }
}
