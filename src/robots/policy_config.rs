use std::time::Duration;

/// How rule paths are compared against request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Byte-wise prefix match; `*` and `$` are literal characters.
    #[default]
    Prefix,
    /// Prefix match with `*` matching any run of bytes and a trailing `$`
    /// anchoring the pattern to the end of the path.
    Extended,
}

#[derive(Debug, Clone, Default)]
pub struct PolicyConfig {
    match_mode: MatchMode,
    default_crawl_delay: Option<Duration>,
    max_crawl_delay: Option<Duration>,
}

impl PolicyConfig {
    pub fn new(
        match_mode: MatchMode,
        default_crawl_delay: Option<Duration>,
        max_crawl_delay: Option<Duration>,
    ) -> Self {
        Self {
            match_mode,
            default_crawl_delay,
            max_crawl_delay,
        }
    }

    /// Builds a config whose default delay spaces requests to the given rate.
    /// Non-positive or non-finite rates leave the default unset.
    pub fn from_requests_per_second(match_mode: MatchMode, requests_per_second: f64) -> Self {
        let default_crawl_delay = if requests_per_second.is_finite() && requests_per_second > 0.0 {
            let crawl_delay_in_ms = (1000.0 / requests_per_second) as u64;
            Some(Duration::from_millis(crawl_delay_in_ms))
        } else {
            None
        };
        Self::new(match_mode, default_crawl_delay, None)
    }

    pub fn with_max_crawl_delay(mut self, max_crawl_delay: Duration) -> Self {
        self.max_crawl_delay = Some(max_crawl_delay);
        self
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn default_crawl_delay(&self) -> Option<Duration> {
        self.default_crawl_delay
    }

    pub fn max_crawl_delay(&self) -> Option<Duration> {
        self.max_crawl_delay
    }
}
