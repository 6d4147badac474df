use serde::Serialize;
use crate::enums::row_rejection::RowRejection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub line: usize,
    #[serde(flatten)]
    pub rejection: RowRejection,
}
