use crate::{Client, ClientResult};

use acad_core::{
    ApplicationStatus, HandoverStatus, LeaveApplication, LeaveRequest, RecruitmentIncome,
    RecruitmentIncomeForm, TadaApplication, TadaRequest,
};

use std::fmt;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Kind of application whose duties are handed over to a colleague
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoverKind {
    Leave,
    Tada,
}

impl HandoverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Tada => "tada",
        }
    }
}

impl fmt::Display for HandoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
}

impl Client {
    // =========================================================================
    // Leave Applications
    // =========================================================================

    pub async fn apply_leave(&self, request: &LeaveRequest) -> ClientResult<LeaveApplication> {
        request.validate()?;

        let req = self.request(Method::POST, "/leaves").json(request);
        self.execute_as(req, "leave").await
    }

    pub async fn list_my_leaves(&self) -> ClientResult<Vec<LeaveApplication>> {
        let req = self.request(Method::GET, "/leaves/my");
        self.execute_as(req, "leaves").await
    }

    pub async fn list_all_leaves(&self) -> ClientResult<Vec<LeaveApplication>> {
        let req = self.request(Method::GET, "/leaves");
        self.execute_as(req, "leaves").await
    }

    /// Approve or reject a leave application
    pub async fn update_leave_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        remarks: Option<&str>,
    ) -> ClientResult<LeaveApplication> {
        let req = self
            .request(Method::PATCH, &format!("/leaves/{}/status", id))
            .json(&StatusRequest {
                status: status.as_str(),
                remarks,
            });
        self.execute_as(req, "leave").await
    }

    pub async fn delete_leave(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/leaves/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // TA/DA Applications
    // =========================================================================

    pub async fn apply_tada(&self, request: &TadaRequest) -> ClientResult<TadaApplication> {
        request.validate()?;

        let req = self.request(Method::POST, "/tada").json(request);
        self.execute_as(req, "tada").await
    }

    pub async fn list_my_tada(&self) -> ClientResult<Vec<TadaApplication>> {
        let req = self.request(Method::GET, "/tada/my");
        self.execute_as(req, "tada").await
    }

    pub async fn list_all_tada(&self) -> ClientResult<Vec<TadaApplication>> {
        let req = self.request(Method::GET, "/tada");
        self.execute_as(req, "tada").await
    }

    /// Approve, reject or mark a TA/DA claim as paid
    pub async fn update_tada_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        remarks: Option<&str>,
    ) -> ClientResult<TadaApplication> {
        let req = self
            .request(Method::PATCH, &format!("/tada/{}/status", id))
            .json(&StatusRequest {
                status: status.as_str(),
                remarks,
            });
        self.execute_as(req, "tada").await
    }

    pub async fn delete_tada(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/tada/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Handovers
    // =========================================================================

    /// Handover requests waiting on the signed-in user
    pub async fn list_pending_handovers(&self) -> ClientResult<Value> {
        let req = self.request(Method::GET, "/handovers/pending");
        self.execute(req).await
    }

    /// Accept or deny a handover
    pub async fn respond_to_handover(
        &self,
        kind: HandoverKind,
        id: &str,
        status: HandoverStatus,
    ) -> ClientResult<Value> {
        let req = self
            .request(Method::PATCH, &format!("/handovers/{}/{}", kind, id))
            .json(&StatusRequest {
                status: status.as_str(),
                remarks: None,
            });
        self.execute(req).await
    }

    // =========================================================================
    // Recruitment Income
    // =========================================================================

    pub async fn list_recruitment_income(&self) -> ClientResult<Vec<RecruitmentIncome>> {
        let req = self.request(Method::GET, "/recruitment-income");
        self.execute_as(req, "incomes").await
    }

    pub async fn create_recruitment_income(
        &self,
        form: &RecruitmentIncomeForm,
    ) -> ClientResult<RecruitmentIncome> {
        form.validate()?;

        let req = self.request(Method::POST, "/recruitment-income").json(form);
        self.execute_as(req, "income").await
    }

    pub async fn update_recruitment_income(
        &self,
        id: &str,
        form: &RecruitmentIncomeForm,
    ) -> ClientResult<RecruitmentIncome> {
        form.validate()?;

        let req = self
            .request(Method::PUT, &format!("/recruitment-income/{}", id))
            .json(form);
        self.execute_as(req, "income").await
    }

    pub async fn delete_recruitment_income(&self, id: &str) -> ClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/recruitment-income/{}", id));
        self.execute(req).await
    }

    pub async fn approve_recruitment_income(&self, id: &str) -> ClientResult<RecruitmentIncome> {
        let req = self.request(Method::PATCH, &format!("/recruitment-income/{}/approve", id));
        self.execute_as(req, "income").await
    }

    pub async fn reject_recruitment_income(&self, id: &str) -> ClientResult<RecruitmentIncome> {
        let req = self.request(Method::PATCH, &format!("/recruitment-income/{}/reject", id));
        self.execute_as(req, "income").await
    }
}
