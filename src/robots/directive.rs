/// A single robots.txt line, split into its key and raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    UserAgent(&'a str),
    Allow(&'a str),
    Disallow(&'a str),
    CrawlDelay(&'a str),
    Sitemap(&'a str),
    Unknown { key: &'a str, value: &'a str },
    /// Blank line or comment.
    Blank,
}

impl<'a> Directive<'a> {
    /// Returns `None` when the line has content but no `key: value` shape.
    pub fn parse_line(line: &'a str) -> Option<Self> {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            return Some(Directive::Blank);
        }

        let (key, value) = line.split_once(':')?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return None;
        }

        let directive = match key.to_ascii_lowercase().as_str() {
            "user-agent" | "useragent" | "user agent" => Directive::UserAgent(value),
            "allow" => Directive::Allow(value),
            "disallow" | "dissallow" | "disalow" | "diasllow" | "disallaw" => {
                Directive::Disallow(value)
            }
            "crawl-delay" | "crawldelay" | "crawl delay" => Directive::CrawlDelay(value),
            "sitemap" | "site-map" => Directive::Sitemap(value),
            _ => Directive::Unknown { key, value },
        };
        Some(directive)
    }

    /// Whether the line belongs to a user-agent group rather than the document.
    pub fn is_group_member(&self) -> bool {
        matches!(
            self,
            Directive::Allow(_) | Directive::Disallow(_) | Directive::CrawlDelay(_)
        )
    }
}

/// Cuts at the first `#`, so a fragment in a Sitemap URL or rule path is dropped too.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(comment_start) => &line[..comment_start],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_case_insensitive_and_trimmed() {
        assert_eq!(
            Directive::parse_line("  USER-AGENT :  Googlebot "),
            Some(Directive::UserAgent("Googlebot"))
        );
        assert_eq!(
            Directive::parse_line("disallow:/private/"),
            Some(Directive::Disallow("/private/"))
        );
        assert_eq!(
            Directive::parse_line("Crawl-Delay: 2.5"),
            Some(Directive::CrawlDelay("2.5"))
        );
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(Directive::parse_line(""), Some(Directive::Blank));
        assert_eq!(Directive::parse_line("   "), Some(Directive::Blank));
        assert_eq!(Directive::parse_line("  # a comment"), Some(Directive::Blank));
        assert_eq!(
            Directive::parse_line("Disallow: /tmp/ # scratch space"),
            Some(Directive::Disallow("/tmp/"))
        );
    }

    #[test]
    fn test_misspelled_keys() {
        assert_eq!(Directive::parse_line("useragent: a"), Some(Directive::UserAgent("a")));
        assert_eq!(Directive::parse_line("User Agent: a"), Some(Directive::UserAgent("a")));
        assert_eq!(Directive::parse_line("Dissallow: /x"), Some(Directive::Disallow("/x")));
        assert_eq!(Directive::parse_line("disalow: /x"), Some(Directive::Disallow("/x")));
        assert_eq!(Directive::parse_line("CrawlDelay: 3"), Some(Directive::CrawlDelay("3")));
        assert_eq!(
            Directive::parse_line("Site-map: https://example.com/s.xml"),
            Some(Directive::Sitemap("https://example.com/s.xml"))
        );
    }

    #[test]
    fn test_hash_always_starts_a_comment() {
        assert_eq!(
            Directive::parse_line("Sitemap: https://example.com/sitemap.xml#latest"),
            Some(Directive::Sitemap("https://example.com/sitemap.xml"))
        );
        assert_eq!(
            Directive::parse_line("Disallow: /page#section"),
            Some(Directive::Disallow("/page"))
        );
    }

    #[test]
    fn test_sitemap_value_keeps_its_colon() {
        assert_eq!(
            Directive::parse_line("Sitemap: https://vidgrab.com/sitemap.xml"),
            Some(Directive::Sitemap("https://vidgrab.com/sitemap.xml"))
        );
    }

    #[test]
    fn test_unknown_and_malformed_lines() {
        assert_eq!(
            Directive::parse_line("Host: example.com"),
            Some(Directive::Unknown {
                key: "Host",
                value: "example.com"
            })
        );
        assert_eq!(Directive::parse_line("Disallow /nothing"), None);
        assert_eq!(Directive::parse_line(": /orphan"), None);
    }

    #[test]
    fn test_empty_value_is_kept() {
        assert_eq!(Directive::parse_line("Disallow:"), Some(Directive::Disallow("")));
    }
}
