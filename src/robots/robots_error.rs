#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RobotsError {
    #[error("Malformed robots.txt line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Invalid Crawl-delay on line {line}: {value:?}")]
    InvalidCrawlDelay { line: usize, value: String },

    #[error("robots.txt could not be retrieved: {0}")]
    UnreachableDocument(String),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}
