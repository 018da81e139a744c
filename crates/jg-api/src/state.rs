use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use jg_core::normalize::NormalizerConfig;
use jg_core::skills::SkillVocabulary;
use jg_core::sources::{JobFeed, ResumeParser};

use crate::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub feed: Arc<dyn JobFeed>,
    pub parser: Arc<dyn ResumeParser>,
    pub normalizer: NormalizerConfig,
    /// Flipped off when shutdown starts so /health reports draining.
    pub readiness: AtomicBool,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(
        config: AppConfig,
        feed: Arc<dyn JobFeed>,
        parser: Arc<dyn ResumeParser>,
    ) -> SharedState {
        let normalizer = NormalizerConfig {
            source: config.feed_source,
            default_work_mode: config.default_work_mode,
            vocabulary: SkillVocabulary::default(),
        };

        Arc::new(Self {
            config,
            feed,
            parser,
            normalizer,
            readiness: AtomicBool::new(true),
        })
    }
}
