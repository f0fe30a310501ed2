use crate::robots::robots_txt_view::RobotsTxtView;
use crate::robots::user_agent_group::UserAgentGroup;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

pub(crate) const WILDCARD_AGENT: &str = "*";

/// Everything parsed out of one robots.txt document. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    groups: Vec<UserAgentGroup>,
    agent_index: HashMap<String, usize>,
    sitemaps: Vec<String>,
}

impl RuleSet {
    pub(crate) fn new(groups: Vec<UserAgentGroup>, sitemaps: Vec<String>) -> Self {
        // Later groups overwrite earlier ones for a repeated agent token.
        let mut agent_index = HashMap::new();
        for (group_index, group) in groups.iter().enumerate() {
            for agent in group.agents() {
                agent_index.insert(normalize_agent(agent), group_index);
            }
        }
        Self {
            groups,
            agent_index,
            sitemaps,
        }
    }

    /// The rule set used when no robots.txt exists: everything is allowed.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// All groups in declaration order, including ones shadowed by a later
    /// group for the same agent.
    pub fn groups(&self) -> &[UserAgentGroup] {
        &self.groups
    }

    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Sitemap entries that are absolute URLs.
    pub fn sitemap_urls(&self) -> Vec<Url> {
        self.sitemaps
            .iter()
            .filter_map(|sitemap| Url::parse(sitemap).ok())
            .collect()
    }

    /// The group declared for exactly this agent token, ignoring case.
    pub fn group_for_agent(&self, agent: &str) -> Option<&UserAgentGroup> {
        self.agent_index
            .get(&normalize_agent(agent))
            .map(|group_index| &self.groups[*group_index])
    }

    /// The group that governs `agent`: its own group, else the `*` group.
    /// An empty agent only ever matches `*`.
    pub fn choose_group(&self, agent: &str) -> Option<&UserAgentGroup> {
        let agent = agent.trim();
        if !agent.is_empty() {
            if let Some(group) = self.group_for_agent(agent) {
                return Some(group);
            }
            tracing::trace!(agent, "no dedicated robots.txt group, falling back to '*'");
        }
        self.group_for_agent(WILDCARD_AGENT)
    }

    pub fn crawl_delay(&self, agent: &str) -> Option<Duration> {
        self.choose_group(agent).and_then(UserAgentGroup::crawl_delay)
    }

    pub fn view(&self, agent: &str) -> RobotsTxtView<'_> {
        RobotsTxtView::new(self, agent)
    }
}

fn normalize_agent(agent: &str) -> String {
    agent.trim().to_ascii_lowercase()
}
