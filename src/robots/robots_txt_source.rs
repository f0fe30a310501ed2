use crate::robots::robots_error::RobotsError;
use crate::robots::robots_txt_parser::{ParseReport, parse_with_report};
use crate::robots::rule_set::RuleSet;

/// What the fetcher managed to retrieve from a site's `/robots.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Document(String),
    NotFound,
    Unreachable(String),
}

/// Turns a fetch outcome into the rule set a crawl session should use.
#[derive(Debug, Clone)]
pub struct RobotsTxtSource {
    content: String,
    issues: Vec<RobotsError>,
}

impl RobotsTxtSource {
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Document(content) => Self {
                content,
                issues: Vec::new(),
            },
            FetchOutcome::NotFound => Self {
                content: String::new(),
                issues: Vec::new(),
            },
            FetchOutcome::Unreachable(reason) => {
                tracing::warn!(%reason, "robots.txt unreachable, allowing all paths");
                Self {
                    content: String::new(),
                    issues: vec![RobotsError::UnreachableDocument(reason)],
                }
            }
        }
    }

    /// Invalid UTF-8 sequences become U+FFFD rather than failing the document.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_outcome(FetchOutcome::Document(
            String::from_utf8_lossy(bytes).into_owned(),
        ))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parses the document, prepending any retrieval problem to the line issues.
    pub fn report(&self) -> ParseReport {
        let mut report = parse_with_report(&self.content);
        if !self.issues.is_empty() {
            let mut issues = self.issues.clone();
            issues.append(&mut report.issues);
            report.issues = issues;
        }
        report
    }

    pub fn rule_set(&self) -> RuleSet {
        self.report().rule_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::policy_evaluator::is_allowed;

    #[test]
    fn test_document_is_parsed() {
        let source = RobotsTxtSource::from_outcome(FetchOutcome::Document(
            "User-agent: *\nDisallow: /private/\n".to_owned(),
        ));
        let rule_set = source.rule_set();
        assert!(!is_allowed(&rule_set, "anybot", "/private/a").allowed);
    }

    #[test]
    fn test_not_found_allows_all() {
        let source = RobotsTxtSource::from_outcome(FetchOutcome::NotFound);
        let report = source.report();
        assert_eq!(report.rule_set, RuleSet::allow_all());
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_unreachable_allows_all_and_reports() {
        let source = RobotsTxtSource::from_outcome(FetchOutcome::Unreachable(
            "connection reset".to_owned(),
        ));
        let report = source.report();
        assert_eq!(report.rule_set, RuleSet::allow_all());
        assert_eq!(
            report.issues,
            vec![RobotsError::UnreachableDocument("connection reset".to_owned())]
        );
    }

    #[test]
    fn test_from_bytes_is_lossy() {
        let mut bytes = b"User-agent: *\nDisallow: /a\xff\n".to_vec();
        bytes.extend_from_slice(b"Disallow: /b\n");
        let rule_set = RobotsTxtSource::from_bytes(&bytes).rule_set();
        let rules = rule_set.groups()[0].rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].path(), "/a\u{fffd}");
        assert_eq!(rules[1].path(), "/b");
    }
}
