pub mod alerts;
pub mod dispatch;
pub mod operator_cli;
pub mod report;
pub mod selection;
