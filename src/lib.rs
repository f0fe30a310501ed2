//! robots.txt compliance engine.
//!
//! Parses a robots.txt document into an immutable [`RuleSet`] and answers,
//! for a user agent and a path, whether the path may be fetched and how long
//! to wait between requests.
//!
//! ```
//! use robots_policy::{is_allowed, parse};
//! use std::time::Duration;
//!
//! let rule_set = parse("User-agent: *\nCrawl-delay: 1\nDisallow: /admin/\nAllow: /css/\n");
//!
//! let decision = is_allowed(&rule_set, "Googlebot", "/admin/x");
//! assert!(!decision.allowed);
//! assert_eq!(decision.matched_rule.unwrap().path(), "/admin/");
//! assert_eq!(decision.crawl_delay, Some(Duration::from_secs(1)));
//!
//! assert!(is_allowed(&rule_set, "Googlebot", "/css/app.css").allowed);
//! ```

mod robots;

pub use robots::*;
