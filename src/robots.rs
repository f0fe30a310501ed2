mod access_decision;
mod directive;
mod path_rule;
mod policy_config;
mod policy_evaluator;
mod policy_store;
mod robots_error;
mod robots_txt_matcher;
mod robots_txt_parser;
mod robots_txt_source;
mod robots_txt_view;
mod rule_set;
mod user_agent_group;

pub use access_decision::AccessDecision;
pub use directive::Directive;
pub use path_rule::{PathRule, RuleKind};
pub use policy_config::{MatchMode, PolicyConfig};
pub use policy_evaluator::{PolicyEvaluator, is_allowed};
pub use policy_store::PolicyStore;
pub use robots_error::RobotsError;
pub use robots_txt_matcher::RobotsTxtMatcher;
pub use robots_txt_parser::{ParseReport, RobotsTxtParser, parse, parse_with_report};
pub use robots_txt_source::{FetchOutcome, RobotsTxtSource};
pub use robots_txt_view::RobotsTxtView;
pub use rule_set::RuleSet;
pub use user_agent_group::UserAgentGroup;
