use crate::{Client, ClientResult};

use acad_core::{AdmissionMetric, AdmissionTarget, AdmissionTargetForm, Batch, BatchForm};

use reqwest::Method;
use serde_json::Value;

fn period_params(month: Option<u32>, year: Option<i32>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(month) = month {
        params.push(("month", month.to_string()));
    }
    if let Some(year) = year {
        params.push(("year", year.to_string()));
    }
    params
}

impl Client {
    // =========================================================================
    // Batch Operations
    // =========================================================================

    /// List batches
    pub async fn list_batches(&self) -> ClientResult<Vec<Batch>> {
        let req = self.request(Method::GET, "/batches");
        self.execute_as(req, "batches").await
    }

    /// Create a batch
    pub async fn create_batch(&self, batch: &BatchForm) -> ClientResult<Batch> {
        batch.validate()?;

        let req = self.request(Method::POST, "/batches").json(batch);
        self.execute_as(req, "batch").await
    }

    /// Update a batch
    pub async fn update_batch(&self, id: &str, batch: &BatchForm) -> ClientResult<Batch> {
        batch.validate()?;

        let req = self
            .request(Method::PUT, &format!("/batches/{}", id))
            .json(batch);
        self.execute_as(req, "batch").await
    }

    /// Delete a batch
    pub async fn delete_batch(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/batches/{}", id));
        self.execute(req).await
    }

    /// Enrollment and fee report for a batch
    pub async fn get_batch_report(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/batches/{}/report", id));
        self.execute(req).await
    }

    // =========================================================================
    // Admission Targets & Metrics
    // =========================================================================

    /// Targets for a period (all periods when unset)
    pub async fn get_admission_targets(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> ClientResult<Vec<AdmissionTarget>> {
        let req = self.request_with_query(
            Method::GET,
            "/admission-targets",
            &period_params(month, year),
        )?;
        self.execute_as(req, "targets").await
    }

    /// Set (create or replace) a member's monthly target
    pub async fn set_admission_target(
        &self,
        target: &AdmissionTargetForm,
    ) -> ClientResult<AdmissionTarget> {
        target.validate()?;

        let req = self.request(Method::POST, "/admission-targets").json(target);
        self.execute_as(req, "target").await
    }

    /// Delete a target
    pub async fn delete_admission_target(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/admission-targets/{}", id));
        self.execute(req).await
    }

    /// Per-member pipeline counts against targets, computed server-side
    pub async fn get_admission_metrics(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> ClientResult<Vec<AdmissionMetric>> {
        let req = self.request_with_query(
            Method::GET,
            "/admission-targets/metrics",
            &period_params(month, year),
        )?;
        self.execute_as(req, "metrics").await
    }
}
