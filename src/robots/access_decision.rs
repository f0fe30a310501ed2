use crate::robots::path_rule::PathRule;
use crate::robots::policy_config::PolicyConfig;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AccessDecision {
    pub allowed: bool,
    /// The rule that decided the outcome; `None` means the default allow applied.
    pub matched_rule: Option<PathRule>,
    /// Crawl delay published for the selected group, if any.
    pub crawl_delay: Option<Duration>,
}

impl AccessDecision {
    pub fn allow_all() -> Self {
        Self {
            allowed: true,
            matched_rule: None,
            crawl_delay: None,
        }
    }

    /// The spacing a scheduler should honor: the published delay, else the
    /// configured default, capped by the configured maximum.
    pub fn crawl_delay_or_default(&self, config: &PolicyConfig) -> Option<Duration> {
        let crawl_delay = self.crawl_delay.or(config.default_crawl_delay());
        match (crawl_delay, config.max_crawl_delay()) {
            (Some(crawl_delay), Some(max_crawl_delay)) => Some(crawl_delay.min(max_crawl_delay)),
            (crawl_delay, _) => crawl_delay,
        }
    }
}
