//! Rule file parser
//!
//! Each line holds `<modulePath> <ruleExpression>`:
//! - `=v1.0.0,v1.1.0`: exact versions
//! - `v1.0.0>=v2.0.0`: range with inclusive lower bound, exclusive upper bound
//! - `v1.0.0>v2.0.0`: range with exclusive lower bound, exclusive upper bound
//! - a leading `!` sends the directive to the deny list instead of the allow list
//!
//! A bare version list without `=` (e.g. `!v1.0.0`) is accepted as an exact list.
//! Any other bare expression (e.g. the `versions` in `# pinned versions below`)
//! is not a directive and the line is skipped.

use crate::domain::{Range, RangeLimit, Rule, RuleSet, RuleSide, Version};
use crate::error::PolicyError;
use std::collections::HashMap;
use std::io::BufRead;
use tracing::debug;

/// What a single rule expression contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Exact versions
    Versions(Vec<Version>),
    /// A version range
    Range(Range),
}

/// A parsed rule expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub side: RuleSide,
    pub kind: DirectiveKind,
}

impl Directive {
    /// Parses a rule expression such as `!=v1.0.0,v1.0.1` or `v1.0.0>=v2.0.0`
    ///
    /// Returns `Ok(None)` when the expression is not a directive at all.
    pub fn parse(expr: &str) -> Result<Option<Self>, PolicyError> {
        let (side, body) = match expr.strip_prefix('!') {
            Some(rest) => (RuleSide::Deny, rest),
            None => (RuleSide::Allow, expr),
        };

        if let Some(idx) = body.find('>') {
            let lower_token = &body[..idx];
            let after = &body[idx + 1..];
            // Upper token starts right after the operator, whatever its length
            let (inclusive, upper_token) = match after.strip_prefix('=') {
                Some(rest) => (true, rest),
                None => (false, after),
            };

            let lower = Version::parse(lower_token)?;
            let upper = Version::parse(upper_token)?;
            let range = Range::between(
                RangeLimit { version: lower, inclusive },
                RangeLimit::exclusive(upper),
            )?;

            return Ok(Some(Self {
                side,
                kind: DirectiveKind::Range(range),
            }));
        }

        let list = match body.strip_prefix('=') {
            Some(list) => list,
            None if side == RuleSide::Deny || is_version_shaped(body) => body,
            None => return Ok(None),
        };
        let versions = list
            .split(',')
            .map(Version::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self {
            side,
            kind: DirectiveKind::Versions(versions),
        }))
    }
}

/// `v` followed by a digit
fn is_version_shaped(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('v') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Accumulates directives per module path into a [`RuleSet`]
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    modules: HashMap<String, Rule>,
}

impl RuleSetBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a directive into the rule for `path`
    pub fn add(&mut self, path: &str, directive: Directive) {
        let rule = self.modules.entry(path.to_string()).or_default();
        match directive.kind {
            DirectiveKind::Versions(versions) => {
                for version in versions {
                    rule.add_version(directive.side, version);
                }
            }
            DirectiveKind::Range(range) => rule.add_range(directive.side, range),
        }
    }

    /// Finishes the rule set
    pub fn build(self) -> RuleSet {
        RuleSet::from(self.modules)
    }
}

/// Parses rule text into a [`RuleSet`]
///
/// Lines with fewer than two whitespace-separated tokens are skipped and tokens
/// after the second are ignored. Lines whose expression is not a directive are
/// skipped. Any malformed directive fails the whole parse.
pub fn parse_rules<R: BufRead>(reader: R) -> Result<RuleSet, PolicyError> {
    let mut builder = RuleSetBuilder::new();
    let mut directives = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (Some(path), Some(expr)) = (tokens.next(), tokens.next()) else {
            continue;
        };

        let Some(directive) = Directive::parse(expr).map_err(|e| e.at_line(idx + 1))? else {
            debug!(line = idx + 1, expr, "skipping line without a rule directive");
            continue;
        };
        builder.add(path, directive);
        directives += 1;
    }

    let rules = builder.build();
    debug!(directives, modules = rules.len(), "parsed rule set");
    Ok(rules)
}

/// Parses rule text held in memory
pub fn parse_rules_str(content: &str) -> Result<RuleSet, PolicyError> {
    parse_rules(content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolicyErrorKind;
    use std::io::{self, Read};

    fn v(major: u64, minor: u64, patch: u64) -> Version {
        Version::new(major, minor, patch)
    }

    fn directive(expr: &str) -> Directive {
        Directive::parse(expr).unwrap().unwrap()
    }

    #[test]
    fn test_directive_allow_list() {
        let d = directive("=v1.0.0,v1.2.0");
        assert_eq!(d.side, RuleSide::Allow);
        assert_eq!(
            d.kind,
            DirectiveKind::Versions(vec![v(1, 0, 0), v(1, 2, 0)])
        );
    }

    #[test]
    fn test_directive_deny_list() {
        let d = directive("!=v0.7.0");
        assert_eq!(d.side, RuleSide::Deny);
        assert_eq!(d.kind, DirectiveKind::Versions(vec![v(0, 7, 0)]));
    }

    #[test]
    fn test_directive_bare_version() {
        let d = directive("!v1.0.0");
        assert_eq!(d.side, RuleSide::Deny);
        assert_eq!(d.kind, DirectiveKind::Versions(vec![v(1, 0, 0)]));
    }

    #[test]
    fn test_directive_inclusive_range() {
        let d = directive("v1.0.0>=v2.0.0");
        assert_eq!(d.side, RuleSide::Allow);
        let DirectiveKind::Range(range) = d.kind else {
            panic!("expected range");
        };
        assert_eq!(range.lower(), Some(RangeLimit::inclusive(v(1, 0, 0))));
        assert_eq!(range.upper(), Some(RangeLimit::exclusive(v(2, 0, 0))));
    }

    #[test]
    fn test_directive_exclusive_range_uses_single_char_operator() {
        let d = directive("!v1.0.0>v2.0.0");
        assert_eq!(d.side, RuleSide::Deny);
        let DirectiveKind::Range(range) = d.kind else {
            panic!("expected range");
        };
        assert_eq!(range.lower(), Some(RangeLimit::exclusive(v(1, 0, 0))));
        assert_eq!(range.upper(), Some(RangeLimit::exclusive(v(2, 0, 0))));
        assert!(!range.contains(&v(1, 0, 0)));
        assert!(range.contains(&v(1, 0, 1)));
        assert!(!range.contains(&v(2, 0, 0)));
    }

    #[test]
    fn test_directive_inverted_range_fails() {
        let err = Directive::parse("v2.0.0>=v1.0.0").unwrap_err();
        assert!(err.is_invalid_range());

        let err = Directive::parse("v1.0.0>v1.0.0").unwrap_err();
        assert!(err.is_invalid_range());
    }

    #[test]
    fn test_directive_malformed_tokens() {
        for expr in [
            "=",
            "!",
            "!x",
            "=v1.0.0,",
            "=v1.0",
            "v1.0",
            "v1.0.0,,v2.0.0",
            "1.0.0>=v2.0.0",
            "v1.0.0>=",
            "=v1.0.0,,v2.0.0",
        ] {
            let err = Directive::parse(expr).unwrap_err();
            assert_eq!(err.kind(), PolicyErrorKind::MalformedVersion, "{}", expr);
        }
    }

    #[test]
    fn test_directive_non_version_words_are_not_directives() {
        for expr in ["pinned", "versions", "x", "1.0.0", "v", "vendor"] {
            assert_eq!(Directive::parse(expr).unwrap(), None, "{}", expr);
        }
    }

    #[test]
    fn test_parse_rules_accumulates_per_module() {
        let text = "\
acme/pkg =v1.0.0
acme/pkg =v1.1.0,v1.2.0
acme/pkg !=v1.1.0
other/pkg v0.1.0>=v0.2.0
";
        let rules = parse_rules_str(text).unwrap();
        assert_eq!(rules.len(), 2);

        let acme = rules.get("acme/pkg").unwrap();
        assert_eq!(
            acme.allow_versions,
            vec![v(1, 0, 0), v(1, 1, 0), v(1, 2, 0)]
        );
        assert_eq!(acme.deny_versions, vec![v(1, 1, 0)]);

        let other = rules.get("other/pkg").unwrap();
        assert_eq!(other.allow_ranges.len(), 1);
        assert!(other.deny_ranges.is_empty());
    }

    #[test]
    fn test_parse_rules_skips_short_lines() {
        let text = "\n   \nlonely\nacme/pkg =v1.0.0\n";
        let rules = parse_rules_str(text).unwrap();
        assert_eq!(rules.paths(), vec!["acme/pkg"]);
    }

    #[test]
    fn test_parse_rules_ignores_extra_tokens_and_whitespace() {
        let text = "  acme/pkg\t=v1.0.0   trailing words\n";
        let rules = parse_rules_str(text).unwrap();
        assert_eq!(
            rules.get("acme/pkg").unwrap().allow_versions,
            vec![v(1, 0, 0)]
        );
    }

    #[test]
    fn test_parse_rules_skips_comment_lines() {
        let text = "# pinned versions below\nacme/pkg =v1.0.0\n";
        let rules = parse_rules_str(text).unwrap();
        assert_eq!(rules.paths(), vec!["acme/pkg"]);
        assert_eq!(
            rules.get("acme/pkg").unwrap().allow_versions,
            vec![v(1, 0, 0)]
        );
    }

    #[test]
    fn test_parse_rules_empty_input() {
        let rules = parse_rules_str("").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_parse_rules_is_all_or_nothing() {
        let text = "acme/pkg =v1.0.0\nacme/pkg =v1.0\nother/pkg =v2.0.0\n";
        let err = parse_rules_str(text).unwrap_err();
        assert_eq!(err.kind(), PolicyErrorKind::MalformedVersion);
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_parse_rules_invalid_range_is_detectable() {
        let err = parse_rules_str("acme/pkg v3.0.0>v1.0.0\n").unwrap_err();
        assert!(err.is_invalid_range());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_parse_rules_stream_failure() {
        let err = parse_rules(io::BufReader::new(FailingReader)).unwrap_err();
        assert_eq!(err.kind(), PolicyErrorKind::StreamFailure);
    }

    #[test]
    fn test_parse_rules_invalid_utf8_is_stream_failure() {
        let bytes: &[u8] = b"acme/pkg =v1.0.0\n\xff\xfe\n";
        let err = parse_rules(bytes).unwrap_err();
        assert_eq!(err.kind(), PolicyErrorKind::StreamFailure);
    }
}
