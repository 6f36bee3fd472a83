// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP token bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

/// Returns `None` when the settings describe an empty bucket.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.per_second);
    builder.burst_size(settings.burst);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        tracing::warn!(?settings, "invalid rate limit settings, limiter disabled");
        return None;
    };

    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_burst_disables_the_limiter() {
        let settings = RateLimitSettings {
            per_second: 1,
            burst: 0,
        };
        assert!(rate_limit_layer(settings).is_none());
    }

    #[test]
    fn default_settings_build_a_layer() {
        assert!(rate_limit_layer(RateLimitSettings::default()).is_some());
    }
}
