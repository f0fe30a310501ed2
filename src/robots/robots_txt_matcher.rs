use crate::robots::path_rule::PathRule;
use crate::robots::policy_config::MatchMode;

/// Resolves a path against the rules of a single group.
#[derive(Clone)]
pub struct RobotsTxtMatcher<'a> {
    rules: &'a [PathRule],
    match_mode: MatchMode,
}

impl<'a> RobotsTxtMatcher<'a> {
    pub fn new(rules: &'a [PathRule], match_mode: MatchMode) -> Self {
        Self { rules, match_mode }
    }

    pub fn check_path(&self, path: &str) -> bool {
        self.best_match(path).is_none_or(PathRule::is_allow)
    }

    /// The rule that decides `path`: the longest matching rule, Allow
    /// winning a tie, the earliest declaration winning among equals.
    pub fn best_match(&self, path: &str) -> Option<&'a PathRule> {
        let mut best: Option<&'a PathRule> = None;
        for rule in self.rules {
            if !path_matches(rule.path(), path, self.match_mode) {
                continue;
            }
            best = match best {
                Some(current) if !takes_precedence(rule, current) => Some(current),
                _ => Some(rule),
            };
        }
        best
    }
}

fn takes_precedence(candidate: &PathRule, current: &PathRule) -> bool {
    let candidate_len = candidate.path().len();
    let current_len = current.path().len();
    candidate_len > current_len
        || (candidate_len == current_len && candidate.is_allow() && !current.is_allow())
}

pub(crate) fn path_matches(pattern: &str, path: &str, match_mode: MatchMode) -> bool {
    if pattern.is_empty() {
        return false;
    }
    match match_mode {
        MatchMode::Prefix => path.as_bytes().starts_with(pattern.as_bytes()),
        MatchMode::Extended => wildcard_matches(pattern.as_bytes(), path.as_bytes()),
    }
}

/// Prefix match where `*` spans any bytes and a final `$` pins the end of the path.
/// Tracks every path offset the pattern could have reached so far, so no backtracking.
fn wildcard_matches(pattern: &[u8], path: &[u8]) -> bool {
    let mut offsets: Vec<usize> = vec![0];
    for (index, &byte) in pattern.iter().enumerate() {
        if byte == b'$' && index + 1 == pattern.len() {
            return offsets.contains(&path.len());
        }
        if byte == b'*' {
            offsets = (offsets[0]..=path.len()).collect();
            continue;
        }
        offsets = offsets
            .into_iter()
            .filter(|&offset| offset < path.len() && path[offset] == byte)
            .map(|offset| offset + 1)
            .collect();
        if offsets.is_empty() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robots::path_rule::RuleKind;

    fn rules(declared: &[(RuleKind, &str)]) -> Vec<PathRule> {
        declared
            .iter()
            .enumerate()
            .map(|(index, (kind, path))| PathRule::new(*kind, *path, index + 1))
            .collect()
    }

    #[test]
    fn test_longest_match_wins() {
        let rules = rules(&[(RuleKind::Disallow, "/a"), (RuleKind::Allow, "/a/b")]);
        let matcher = RobotsTxtMatcher::new(&rules, MatchMode::Prefix);
        assert!(matcher.check_path("/a/b/c"));
        assert!(!matcher.check_path("/a/x"));
        assert!(matcher.check_path("/b"));
    }

    #[test]
    fn test_allow_wins_tie_regardless_of_order() {
        let disallow_first = rules(&[(RuleKind::Disallow, "/x"), (RuleKind::Allow, "/x")]);
        let allow_first = rules(&[(RuleKind::Allow, "/x"), (RuleKind::Disallow, "/x")]);
        for rules in [disallow_first, allow_first] {
            let matcher = RobotsTxtMatcher::new(&rules, MatchMode::Prefix);
            let best = matcher.best_match("/x").unwrap();
            assert_eq!(best.kind(), RuleKind::Allow);
        }
    }

    #[test]
    fn test_earliest_declaration_wins_among_equals() {
        let rules = rules(&[(RuleKind::Disallow, "/ab"), (RuleKind::Disallow, "/ab")]);
        let matcher = RobotsTxtMatcher::new(&rules, MatchMode::Prefix);
        assert_eq!(matcher.best_match("/abc").unwrap().line(), 1);
    }

    #[test]
    fn test_root_allow_loses_to_longer_disallow() {
        let rules = rules(&[(RuleKind::Allow, "/"), (RuleKind::Disallow, "/admin/")]);
        let matcher = RobotsTxtMatcher::new(&rules, MatchMode::Prefix);
        assert!(!matcher.check_path("/admin/users"));
        assert!(matcher.check_path("/admin"));
        assert!(matcher.check_path("/"));
    }

    #[test]
    fn test_no_rules_allows_everything() {
        let matcher = RobotsTxtMatcher::new(&[], MatchMode::Prefix);
        assert!(matcher.check_path("/anything"));
        assert!(matcher.best_match("/anything").is_none());
    }

    #[test]
    fn test_prefix_mode_treats_wildcards_literally() {
        assert!(!path_matches("/*.php", "/index.php", MatchMode::Prefix));
        assert!(path_matches("/*.php", "/*.php", MatchMode::Prefix));
        assert!(!path_matches("private", "/private", MatchMode::Prefix));
    }

    #[test]
    fn test_extended_mode_wildcards() {
        assert!(path_matches("/*.php", "/index.php", MatchMode::Extended));
        assert!(path_matches("/*.php", "/dir/index.php?x=1", MatchMode::Extended));
        assert!(!path_matches("/*.php", "/index.html", MatchMode::Extended));
        assert!(path_matches("/a*b*c", "/a-b-c-d", MatchMode::Extended));
        assert!(path_matches("*", "/", MatchMode::Extended));
    }

    #[test]
    fn test_extended_mode_end_anchor() {
        assert!(path_matches("/*.php$", "/index.php", MatchMode::Extended));
        assert!(!path_matches("/*.php$", "/index.php?x=1", MatchMode::Extended));
        assert!(path_matches("/exact$", "/exact", MatchMode::Extended));
        assert!(!path_matches("/exact$", "/exactly", MatchMode::Extended));
        // '$' anywhere but the end is literal.
        assert!(path_matches("/a$b", "/a$b/c", MatchMode::Extended));
    }
}
