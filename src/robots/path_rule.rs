use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Allow,
    Disallow,
}

/// One `Allow:` or `Disallow:` line of a group, path kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRule {
    kind: RuleKind,
    path: String,
    line: usize,
}

impl PathRule {
    pub fn new(kind: RuleKind, path: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            path: path.into(),
            line,
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based line number in the source document.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_allow(&self) -> bool {
        self.kind == RuleKind::Allow
    }
}

impl fmt::Display for PathRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Allow => write!(f, "Allow: {}", self.path),
            RuleKind::Disallow => write!(f, "Disallow: {}", self.path),
        }
    }
}
