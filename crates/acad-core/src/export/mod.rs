pub mod csv_report;
pub mod reports;
