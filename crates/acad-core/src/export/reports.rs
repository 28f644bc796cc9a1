use crate::{AdmissionMetric, CsvReport, Task};

use chrono::{DateTime, Utc};
use serde_json::Value;

const LIST_SEPARATOR: &str = "; ";

pub const TASK_REPORT_HEADER: [&str; 9] = [
    "Title",
    "Priority",
    "Board Column",
    "Status",
    "Assigned To",
    "Assigned By",
    "Due Date",
    "Tags",
    "Checklist",
];

/// Task list export, one row per task in the given order
pub fn tasks_report<'a, I>(tasks: I) -> CsvReport
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut report = CsvReport::new(TASK_REPORT_HEADER);

    for task in tasks {
        let assignees = task
            .assigned_to
            .iter()
            .map(|user| user.display_name())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        let tags = task
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);
        let checklist = task
            .checklist_progress()
            .map(|(done, total)| format!("{done}/{total}"))
            .unwrap_or_default();

        report.push_row([
            task.title.clone(),
            task.priority.to_string(),
            task.board_column.to_string(),
            task.status.clone().unwrap_or_default(),
            assignees,
            task.assigned_by
                .as_ref()
                .map(|user| user.display_name().to_string())
                .unwrap_or_default(),
            task.due_date
                .map(|due| due.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            tags,
            checklist,
        ]);
    }

    report
}

/// Admission metrics export with a header block naming the period
pub fn admission_metrics_report(
    metrics: &[AdmissionMetric],
    period: &str,
    generated_at: DateTime<Utc>,
) -> CsvReport {
    let mut report = CsvReport::new([
        "Member",
        "Target",
        "Assigned",
        "Counseling",
        "In Follow Up",
        "Admitted",
        "Not Admitted",
        "Achievement %",
    ])
    .preamble_line(["Admission Metrics Report"])
    .preamble_line(["Period", period])
    .preamble_line([
        "Generated".to_string(),
        generated_at.format("%Y-%m-%d %H:%M").to_string(),
    ]);

    for metric in metrics {
        report.push_row([
            metric.user.display_name().to_string(),
            metric.target.to_string(),
            metric.assigned.to_string(),
            metric.counseling.to_string(),
            metric.in_follow_up.to_string(),
            metric.admitted.to_string(),
            metric.not_admitted.to_string(),
            format!("{:.1}", metric.achievement_percent()),
        ]);
    }

    report
}

/// Generic export of a list of flat JSON objects (batch reports, history).
///
/// Columns come from the keys of the first object; nested values are
/// written as compact JSON.
pub fn json_rows_report(title: &str, rows: &[Value]) -> CsvReport {
    let columns: Vec<String> = rows
        .first()
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();

    let mut report = CsvReport::new(columns.clone()).preamble_line([title]);

    for row in rows {
        report.push_row(columns.iter().map(|column| match row.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }));
    }

    report
}
