use crate::robots::directive::Directive;
use crate::robots::path_rule::RuleKind;
use crate::robots::robots_error::RobotsError;
use crate::robots::rule_set::RuleSet;
use crate::robots::user_agent_group::UserAgentGroup;
use std::time::Duration;

/// A parsed rule set together with every line the parser chose to ignore.
#[derive(Debug, Clone)]
pub struct ParseReport {
    pub rule_set: RuleSet,
    pub issues: Vec<RobotsError>,
}

/// Sitemap lines and unknown keys never move the state, so they do not split an agent block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    AwaitingGroup,
    InAgentBlock,
    InRuleBlock,
}

/// Line-by-line robots.txt reader. Never fails; bad lines are skipped.
pub struct RobotsTxtParser {
    state: ParserState,
    groups: Vec<UserAgentGroup>,
    sitemaps: Vec<String>,
    issues: Vec<RobotsError>,
}

impl RobotsTxtParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingGroup,
            groups: Vec::new(),
            sitemaps: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Feeds one raw line; `line_number` is 1-based and only used for reporting.
    pub fn feed_line(&mut self, line_number: usize, raw_line: &str) {
        let Some(directive) = Directive::parse_line(raw_line) else {
            self.malformed(line_number, raw_line);
            return;
        };

        if directive.is_group_member() && self.state == ParserState::AwaitingGroup {
            // Rules before the first User-agent line have no group to join.
            self.malformed(line_number, raw_line);
            return;
        }

        match directive {
            Directive::Blank => {}
            Directive::UserAgent(agent) => self.user_agent(line_number, raw_line, agent),
            Directive::Allow(path) => self.path_rule(RuleKind::Allow, path, line_number),
            Directive::Disallow(path) => self.path_rule(RuleKind::Disallow, path, line_number),
            Directive::CrawlDelay(value) => self.crawl_delay(line_number, value),
            Directive::Sitemap(url) => {
                if url.is_empty() {
                    self.malformed(line_number, raw_line);
                } else {
                    self.sitemaps.push(url.to_owned());
                }
            }
            Directive::Unknown { key, .. } => {
                tracing::debug!(line = line_number, key, "ignoring unknown robots.txt directive");
            }
        }
    }

    pub fn finish(self) -> ParseReport {
        ParseReport {
            rule_set: RuleSet::new(self.groups, self.sitemaps),
            issues: self.issues,
        }
    }

    fn user_agent(&mut self, line_number: usize, raw_line: &str, agent: &str) {
        if agent.is_empty() {
            self.malformed(line_number, raw_line);
            // Outside an agent block the rules that follow belong to no group; drop them.
            if self.state != ParserState::InAgentBlock {
                self.state = ParserState::AwaitingGroup;
            }
            return;
        }
        let joins_pending_group = self.state == ParserState::InAgentBlock;
        self.state = ParserState::InAgentBlock;
        if joins_pending_group {
            if let Some(group) = self.groups.last_mut() {
                group.add_agent(agent);
                return;
            }
        }
        self.groups.push(UserAgentGroup::new(agent));
    }

    fn path_rule(&mut self, kind: RuleKind, path: &str, line_number: usize) {
        // An empty Allow or Disallow restricts nothing but still closes the agent block.
        if !path.is_empty() {
            if let Some(group) = self.groups.last_mut() {
                group.add_rule(kind, path, line_number);
            }
        }
        self.state = ParserState::InRuleBlock;
    }

    fn crawl_delay(&mut self, line_number: usize, value: &str) {
        match parse_crawl_delay(value) {
            Some(crawl_delay) => {
                if let Some(group) = self.groups.last_mut() {
                    group.set_crawl_delay(crawl_delay);
                }
            }
            None => {
                tracing::debug!(line = line_number, value, "ignoring invalid Crawl-delay");
                self.issues.push(RobotsError::InvalidCrawlDelay {
                    line: line_number,
                    value: value.to_owned(),
                });
            }
        }
        self.state = ParserState::InRuleBlock;
    }

    fn malformed(&mut self, line_number: usize, raw_line: &str) {
        tracing::debug!(
            line = line_number,
            content = raw_line,
            "ignoring malformed robots.txt line"
        );
        self.issues.push(RobotsError::MalformedLine {
            line: line_number,
            content: raw_line.to_owned(),
        });
    }
}

impl Default for RobotsTxtParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a whole robots.txt document.
pub fn parse(text: &str) -> RuleSet {
    parse_with_report(text).rule_set
}

/// Like [`parse`], but also returns the lines that were ignored.
pub fn parse_with_report(text: &str) -> ParseReport {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut parser = RobotsTxtParser::new();
    // `lines` handles "\n" and "\r\n"; what is left of '\r' are old Mac line breaks.
    for (index, line) in text.lines().flat_map(|line| line.split('\r')).enumerate() {
        parser.feed_line(index + 1, line);
    }
    parser.finish()
}

fn parse_crawl_delay(value: &str) -> Option<Duration> {
    let seconds = value.parse::<f64>().ok()?;
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds).ok()
}
