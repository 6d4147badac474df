use std::num::NonZeroU32;
use std::sync::Arc;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Spaces out bulk submissions so a large import does not flood the API.
#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn per_second(requests: NonZeroU32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(requests))),
        }
    }

    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }
}
