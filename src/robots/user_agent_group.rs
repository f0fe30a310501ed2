use crate::robots::path_rule::{PathRule, RuleKind};
use std::time::Duration;

/// Rules shared by one or more adjacent `User-agent:` lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserAgentGroup {
    agents: Vec<String>,
    rules: Vec<PathRule>,
    crawl_delay: Option<Duration>,
}

impl UserAgentGroup {
    pub(crate) fn new(agent: &str) -> Self {
        Self {
            agents: vec![agent.to_owned()],
            rules: Vec::new(),
            crawl_delay: None,
        }
    }

    pub(crate) fn add_agent(&mut self, agent: &str) {
        if !self.matches_agent(agent) {
            self.agents.push(agent.to_owned());
        }
    }

    pub(crate) fn add_rule(&mut self, kind: RuleKind, path: &str, line: usize) {
        self.rules.push(PathRule::new(kind, path, line));
    }

    pub(crate) fn set_crawl_delay(&mut self, crawl_delay: Duration) {
        self.crawl_delay = Some(crawl_delay);
    }

    /// Agent tokens as declared in the document.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Path rules in declaration order.
    pub fn rules(&self) -> &[PathRule] {
        &self.rules
    }

    pub fn crawl_delay(&self) -> Option<Duration> {
        self.crawl_delay
    }

    pub fn matches_agent(&self, agent: &str) -> bool {
        self.agents
            .iter()
            .any(|declared| declared.trim().eq_ignore_ascii_case(agent.trim()))
    }
}
