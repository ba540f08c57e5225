//! Candidate value extraction from a single line.
//!
//! Each supported line syntax is a `LineSyntax` variant with its own
//! pattern.  Variants are tried in `LineSyntax::ALL` order and the first
//! that matches yields the byte span of the value, which is then trimmed
//! of whitespace, a trailing comma, and surrounding quotes.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// A key/value line syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSyntax {
    /// `"key": "value",`
    JsonPair,
    /// `key: value` (optionally a `- key: value` list item)
    YamlPair,
    /// `KEY=value`, `export KEY=value`, `key = "value"`
    Assignment,
    /// A line that is one whitespace-free token.
    BareToken,
}

static JSON_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"[^"\\]+"\s*:\s*(?P<value>.+?)\s*$"#).expect("static regex")
});

static YAML_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:-\s+)?[A-Za-z_][\w.-]*\s*:\s+(?P<value>.+?)\s*$").expect("static regex")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?[A-Za-z_][\w.-]*\s*=\s*(?P<value>.+?)\s*$")
        .expect("static regex")
});

static BARE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?P<value>\S+)\s*$").expect("static regex"));

impl LineSyntax {
    /// Strategies in the order they are tried.
    pub const ALL: [LineSyntax; 4] = [
        LineSyntax::JsonPair,
        LineSyntax::YamlPair,
        LineSyntax::Assignment,
        LineSyntax::BareToken,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            LineSyntax::JsonPair => &JSON_PAIR,
            LineSyntax::YamlPair => &YAML_PAIR,
            LineSyntax::Assignment => &ASSIGNMENT,
            LineSyntax::BareToken => &BARE_TOKEN,
        }
    }

    /// Raw span of the value if this syntax matches `line`.
    pub fn value_span(self, line: &str) -> Option<Range<usize>> {
        self.pattern()
            .captures(line)
            .and_then(|caps| caps.name("value"))
            .map(|m| m.range())
    }
}

/// A value found on a line, as a byte range into that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub syntax: LineSyntax,
    pub span: Range<usize>,
}

impl Candidate {
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.span.clone()]
    }
}

/// Extract the candidate value from `line`.
///
/// The first matching syntax decides; an empty value after cleaning
/// means no candidate.
pub fn extract_candidate(line: &str) -> Option<Candidate> {
    let (syntax, raw) = LineSyntax::ALL
        .iter()
        .find_map(|&syntax| syntax.value_span(line).map(|span| (syntax, span)))?;

    let span = clean_span(line, raw);
    (!span.is_empty()).then_some(Candidate { syntax, span })
}

/// Trim whitespace, one trailing comma, and one pair of matching quotes.
fn clean_span(line: &str, span: Range<usize>) -> Range<usize> {
    let (mut start, mut end) = (span.start, span.end);

    let trim = |start: &mut usize, end: &mut usize| {
        let s = &line[*start..*end];
        *start += s.len() - s.trim_start().len();
        let s = &line[*start..*end];
        *end -= s.len() - s.trim_end().len();
    };

    trim(&mut start, &mut end);
    if line[start..end].ends_with(',') {
        end -= 1;
        trim(&mut start, &mut end);
    }

    let value = &line[start..end];
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        start += 1;
        end -= 1;
        trim(&mut start, &mut end);
    }

    start..end
}
