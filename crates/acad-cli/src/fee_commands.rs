use crate::commands::to_output;
use crate::error::Result as CliResult;
use crate::fees::{collect_payment, find_student_due};
use crate::session::AppContext;

use acad_core::{FeeFollowUpForm, PaymentCollection};

use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand)]
pub enum FeeCommands {
    /// Students with outstanding admission fees
    Dues,

    /// Payment and follow-up history of a student
    History {
        student_id: String,
    },

    /// Record a follow-up about dues
    FollowUp {
        student_id: String,

        #[arg(long)]
        note: String,

        /// Next follow-up date (YYYY-MM-DD)
        #[arg(long)]
        next: Option<NaiveDate>,
    },

    /// Collect a payment (must not exceed the due amount)
    Collect {
        student_id: String,

        #[arg(long)]
        amount: f64,

        /// Payment method (cash, bank, mobile banking, ...)
        #[arg(long)]
        method: Option<String>,

        /// Next payment date (YYYY-MM-DD)
        #[arg(long)]
        next: Option<NaiveDate>,

        #[arg(long)]
        note: Option<String>,
    },
}

impl FeeCommands {
    pub(crate) async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        ctx.require_fee_collector()?;

        match self {
            FeeCommands::Dues => to_output(&ctx.client.get_students_with_dues().await?),
            FeeCommands::History { student_id } => {
                Ok(ctx.client.get_student_history(&student_id).await?)
            }
            FeeCommands::FollowUp {
                student_id,
                note,
                next,
            } => {
                let form = FeeFollowUpForm {
                    note,
                    next_follow_up_date: next,
                };
                Ok(ctx.client.add_follow_up(&student_id, &form).await?)
            }
            FeeCommands::Collect {
                student_id,
                amount,
                method,
                next,
                note,
            } => {
                let payment = PaymentCollection {
                    collecting_amount: amount,
                    payment_method: method,
                    next_payment_date: next,
                    note,
                };
                let student = find_student_due(&ctx.client, &student_id).await?;
                Ok(collect_payment(&ctx.client, &ctx.guards.payment, &student, &payment).await?)
            }
        }
    }
}
