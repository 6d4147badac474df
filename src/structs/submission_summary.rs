use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub created: usize,
    pub failed: usize,
}

impl SubmissionSummary {
    pub fn all_failed(&self) -> bool {
        self.created == 0 && self.failed > 0
    }
}
