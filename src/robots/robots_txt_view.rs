use crate::robots::policy_config::MatchMode;
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;
use crate::robots::rule_set::RuleSet;
use crate::robots::user_agent_group::UserAgentGroup;
use std::time::Duration;

/// A rule set seen through the eyes of one user agent.
#[derive(Clone)]
pub struct RobotsTxtView<'a> {
    group: Option<&'a UserAgentGroup>,
    agent: String,
}

impl<'a> RobotsTxtView<'a> {
    pub fn new(rule_set: &'a RuleSet, agent: &str) -> Self {
        Self {
            group: rule_set.choose_group(agent),
            agent: agent.to_owned(),
        }
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    /// `None` when neither the agent nor `*` has a group.
    pub fn group(&self) -> Option<&'a UserAgentGroup> {
        self.group
    }

    pub fn crawl_delay(&self) -> Option<Duration> {
        self.group.and_then(UserAgentGroup::crawl_delay)
    }

    pub fn matcher(&self, match_mode: MatchMode) -> RobotsTxtMatcher<'a> {
        let rules = self.group.map(UserAgentGroup::rules).unwrap_or_default();
        RobotsTxtMatcher::new(rules, match_mode)
    }
}
