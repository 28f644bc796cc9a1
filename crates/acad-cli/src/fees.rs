use crate::submit_guard::SubmitGuard;
use crate::{Client, ClientError, ClientResult};

use acad_core::{PaymentCollection, StudentDue};

use log::info;
use serde_json::Value;

/// Collect a payment against a student's outstanding balance.
///
/// The amount must be positive and no larger than the current due amount;
/// anything else is rejected before a request is made. The server stays the
/// authority on the resulting balance.
///
/// The idempotency key covers the balance seen before submitting, so a
/// resent payment repeats its key while a later equal installment does not.
pub async fn collect_payment(
    client: &Client,
    guard: &SubmitGuard,
    student: &StudentDue,
    payment: &PaymentCollection,
) -> ClientResult<Value> {
    payment.validate_against(student)?;
    let _permit = guard.try_acquire()?;

    let balance = format!("{:.2}", student.due_amount);
    let response = client
        .submit_fee_payment(&student.id, payment, &balance)
        .await?;

    info!(
        "Collected {:.2} from {} (due was {:.2})",
        payment.collecting_amount, student.student_name, student.due_amount
    );

    Ok(response)
}

/// Look up a student in the dues list
pub async fn find_student_due(client: &Client, student_id: &str) -> ClientResult<StudentDue> {
    client
        .get_students_with_dues()
        .await?
        .into_iter()
        .find(|student| student.id == student_id)
        .ok_or_else(|| {
            ClientError::api_error(
                404,
                "NOT_FOUND".to_string(),
                format!("no outstanding dues for student {student_id}"),
            )
        })
}
