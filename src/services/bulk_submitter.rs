use std::sync::Arc;
use serde_json::Value;
use crate::services::rate_limiter::ApiRateLimiter;
use crate::structs::submission_summary::SubmissionSummary;
use crate::traits::record_api::RecordApi;

/// Posts payloads one at a time, waiting for each response before sending
/// the next. A failed call is logged and counted; it never stops the batch.
pub struct BulkSubmitter {
    api: Arc<dyn RecordApi>,
    rate_limiter: Option<ApiRateLimiter>,
}

impl BulkSubmitter {
    pub fn new(api: Arc<dyn RecordApi>, rate_limiter: Option<ApiRateLimiter>) -> Self {
        Self { api, rate_limiter }
    }

    pub async fn submit_all<F>(&self, endpoint: &str, payloads: &[Value], mut on_progress: F) -> SubmissionSummary
    where
        F: FnMut(usize, usize),
    {
        let mut summary = SubmissionSummary::default();
        let total = payloads.len();

        for (index, payload) in payloads.iter().enumerate() {
            if let Some(limiter) = &self.rate_limiter {
                limiter.acquire().await;
            }

            match self.api.create_record(endpoint, payload).await {
                Ok(()) => summary.created += 1,
                Err(e) => {
                    log::error!("❌ Record {} of {} failed: {}", index + 1, total, e);
                    summary.failed += 1;
                }
            }

            on_progress(index + 1, total);
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use serde_json::json;
    use crate::errors::SecdashError;
    use crate::traits::record_api::MockRecordApi;

    #[tokio::test]
    async fn counts_successes_and_failures_without_aborting() {
        let mut api = MockRecordApi::new();
        let mut seq = Sequence::new();

        api.expect_create_record()
            .withf(|endpoint, payload| endpoint.to_string() == "/bu-vulnerabilities" && payload["month"] == "Jan")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        api.expect_create_record()
            .withf(|_, payload| payload["month"] == "Feb")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|endpoint, _| Err(SecdashError::api_error(endpoint, 500, "boom")));
        api.expect_create_record()
            .withf(|_, payload| payload["month"] == "Mar")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let submitter = BulkSubmitter::new(Arc::new(api), None);
        let payloads = vec![json!({"month": "Jan"}), json!({"month": "Feb"}), json!({"month": "Mar"})];

        let mut progress = Vec::new();
        let summary = submitter
            .submit_all("/bu-vulnerabilities", &payloads, |done, total| progress.push((done, total)))
            .await;

        assert_eq!(summary.created, 2);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_failed());
        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn reports_total_failure() {
        let mut api = MockRecordApi::new();
        api.expect_create_record()
            .times(2)
            .returning(|endpoint, _| Err(SecdashError::api_error(endpoint, 422, "invalid")));

        let submitter = BulkSubmitter::new(Arc::new(api), None);
        let summary = submitter
            .submit_all("/compliance-gaps", &[json!({}), json!({})], |_, _| {})
            .await;

        assert_eq!(summary.created, 0);
        assert_eq!(summary.failed, 2);
        assert!(summary.all_failed());
    }

    #[tokio::test]
    async fn empty_batch_makes_no_calls() {
        let mut api = MockRecordApi::new();
        api.expect_create_record().never();

        let submitter = BulkSubmitter::new(Arc::new(api), None);
        let summary = submitter.submit_all("/attack-surface", &[], |_, _| {}).await;

        assert_eq!(summary, SubmissionSummary::default());
        assert!(!summary.all_failed());
    }
}
