use crate::{Client, ClientResult};

use acad_core::{Course, Lead, LeadStatus, LeadStatusUpdate, NewLead};

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Server-side filters for the lead list
#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    pub status: Option<LeadStatus>,
    pub assigned_to: Option<String>,
    pub search: Option<String>,
    pub unassigned_only: bool,
}

impl LeadQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(ref assigned_to) = self.assigned_to {
            params.push(("assignedTo", assigned_to.clone()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        if self.unassigned_only {
            params.push(("unassigned", "true".to_string()));
        }
        params
    }
}

impl Client {
    // =========================================================================
    // Lead Operations
    // =========================================================================

    /// List leads
    pub async fn list_leads(&self, query: &LeadQuery) -> ClientResult<Vec<Lead>> {
        let req = self.request_with_query(Method::GET, "/leads", &query.params())?;
        self.execute_as(req, "leads").await
    }

    /// Register a new lead
    pub async fn create_lead(&self, lead: &NewLead) -> ClientResult<Lead> {
        lead.validate()?;

        let req = self.request(Method::POST, "/leads").json(lead);
        self.execute_as(req, "lead").await
    }

    /// List offered courses
    pub async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        let req = self.request(Method::GET, "/courses");
        self.execute_as(req, "courses").await
    }

    /// Leads assigned today, grouped by member
    pub async fn get_today_assignments(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, "/leads/today-assignments");
        self.execute(req).await
    }

    /// Assign a single lead to a member
    pub async fn assign_lead(&self, lead_id: &str, member_id: &str) -> ClientResult<Lead> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AssignRequest<'a> {
            assigned_to: &'a str,
        }

        let req = self
            .request(Method::POST, &format!("/leads/{}/assign", lead_id))
            .json(&AssignRequest {
                assigned_to: member_id,
            });
        self.execute_as(req, "lead").await
    }

    /// Assign a batch of leads to one member in a single call
    pub async fn bulk_assign_leads(
        &self,
        lead_ids: &[String],
        member_id: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct BulkAssignRequest<'a> {
            lead_ids: &'a [String],
            assigned_to: &'a str,
        }

        let body = BulkAssignRequest {
            lead_ids,
            assigned_to: member_id,
        };
        let req = self.idempotent_request(Method::POST, "/leads/bulk-assign", &body, "")?;
        self.execute(req).await
    }

    /// Move a lead through the pipeline
    pub async fn update_lead_status(
        &self,
        lead_id: &str,
        update: &LeadStatusUpdate,
    ) -> ClientResult<Lead> {
        update.validate()?;

        let req = self
            .request(Method::PATCH, &format!("/leads/{}/status", lead_id))
            .json(update);
        self.execute_as(req, "lead").await
    }

    /// Delete a lead
    pub async fn delete_lead(&self, lead_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/leads/{}", lead_id));
        self.execute(req).await
    }

    /// Status and assignment history of a lead
    pub async fn get_lead_history(&self, lead_id: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, &format!("/leads/{}/history", lead_id));
        self.execute(req).await
    }
}
