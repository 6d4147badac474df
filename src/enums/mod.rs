pub mod commands;
pub mod month;
pub mod record_kind;
pub mod row_rejection;
