use crate::robots::access_decision::AccessDecision;
use crate::robots::path_rule::PathRule;
use crate::robots::policy_config::PolicyConfig;
use crate::robots::robots_error::RobotsError;
use crate::robots::rule_set::RuleSet;
use url::Url;

/// Answers "may this agent fetch this path" against any [`RuleSet`].
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    config: PolicyConfig,
}

impl PolicyEvaluator {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn is_allowed(&self, rule_set: &RuleSet, user_agent: &str, path: &str) -> AccessDecision {
        let view = rule_set.view(user_agent);
        let Some(group) = view.group() else {
            tracing::trace!(user_agent, "no applicable robots.txt group, allowing");
            return AccessDecision::allow_all();
        };

        let path = if path.is_empty() { "/" } else { path };
        let matched_rule = view.matcher(self.config.match_mode()).best_match(path);
        AccessDecision {
            allowed: matched_rule.is_none_or(PathRule::is_allow),
            matched_rule: matched_rule.cloned(),
            crawl_delay: group.crawl_delay(),
        }
    }

    /// Checks the path and query of `url`; scheme and host are the caller's concern.
    pub fn is_url_allowed(
        &self,
        rule_set: &RuleSet,
        user_agent: &str,
        url: &Url,
    ) -> AccessDecision {
        let mut target = url.path().to_owned();
        if let Some(query) = url.query() {
            target.push('?');
            target.push_str(query);
        }
        self.is_allowed(rule_set, user_agent, &target)
    }

    pub fn is_url_str_allowed(
        &self,
        rule_set: &RuleSet,
        user_agent: &str,
        url: &str,
    ) -> Result<AccessDecision, RobotsError> {
        let url = Url::parse(url)?;
        Ok(self.is_url_allowed(rule_set, user_agent, &url))
    }
}

/// Evaluates with plain prefix matching and no configured delays.
pub fn is_allowed(rule_set: &RuleSet, user_agent: &str, path: &str) -> AccessDecision {
    PolicyEvaluator::default().is_allowed(rule_set, user_agent, path)
}
