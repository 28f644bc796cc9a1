use crate::{Client, ClientResult};

use acad_core::{FeeFollowUpForm, PaymentCollection, StudentDue};

use reqwest::Method;
use serde_json::Value;

impl Client {
    // =========================================================================
    // Admission Fee Operations
    // =========================================================================

    /// Admitted students with an outstanding balance
    pub async fn get_students_with_dues(&self) -> ClientResult<Vec<StudentDue>> {
        let req = self.request(Method::GET, "/admission-fees/dues");
        self.execute_as(req, "students").await
    }

    /// Payment and follow-up history of a student
    pub async fn get_student_history(&self, student_id: &str) -> ClientResult<Value> {
        let req = self.request(
            Method::GET,
            &format!("/admission-fees/{}/history", student_id),
        );
        self.execute(req).await
    }

    /// Record a follow-up call about dues
    pub async fn add_follow_up(
        &self,
        student_id: &str,
        follow_up: &FeeFollowUpForm,
    ) -> ClientResult<Value> {
        follow_up.validate()?;

        let req = self
            .request(
                Method::POST,
                &format!("/admission-fees/{}/follow-ups", student_id),
            )
            .json(follow_up);
        self.execute(req).await
    }

    /// Submit a partial or full payment.
    ///
    /// Sends without checking the balance; use `fees::collect_payment` for
    /// the validated path.
    pub async fn update_admission_fee_payment(
        &self,
        student_id: &str,
        payment: &PaymentCollection,
    ) -> ClientResult<Value> {
        self.submit_fee_payment(student_id, payment, "").await
    }

    /// Payment PATCH whose idempotency key also covers `scope`
    pub(crate) async fn submit_fee_payment(
        &self,
        student_id: &str,
        payment: &PaymentCollection,
        scope: &str,
    ) -> ClientResult<Value> {
        let req = self.idempotent_request(
            Method::PATCH,
            &format!("/admission-fees/{}/payment", student_id),
            payment,
            scope,
        )?;
        self.execute(req).await
    }
}
