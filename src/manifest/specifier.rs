//! Dependency specifier classification.
//!
//! Only exact pins (`name==version`) are checked. Every other form is
//! reported back as a [`SkippedSpecifier`] so the caller can warn about it
//! without failing the run.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Valid distribution name (PEP 508): alphanumerics, inner `.`, `-`, `_`.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9](?:[a-z0-9._-]*[a-z0-9])?$").expect("NAME_REGEX must compile")
});

/// Characters a version string may use (epoch `!`, local `+`).
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.+!_-]+$").expect("VERSION_REGEX must compile"));

/// A declared `name==version` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactPin {
    /// Distribution name as written in the manifest (extras removed).
    pub name: String,
    /// Expected version string, compared verbatim.
    pub version: String,
}

impl ExactPin {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Why a specifier was not accepted as an exact pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `==` operator at all (ranges, compatible release, bare names).
    NotExact,
    /// `===` arbitrary equality.
    ArbitraryEquality,
    /// More than one `==` operator.
    MultipleOperators,
    /// `==` combined with other constraints (`==1.0,<2`).
    CombinedConstraints,
    /// Prefix match such as `==1.2.*`.
    Wildcard,
    /// Nothing before `==`.
    EmptyName,
    /// Nothing after `==`.
    EmptyVersion,
    /// The text before `==` is not a distribution name.
    InvalidName,
    /// The text after `==` is not a single version (`1.0<2`, `1.0 2.0`).
    InvalidVersion,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotExact => "non-exact version specifier",
            Self::ArbitraryEquality => "arbitrary equality specifier",
            Self::MultipleOperators => "specifier with multiple '==' operators",
            Self::CombinedConstraints => "specifier with combined constraints",
            Self::Wildcard => "wildcard version specifier",
            Self::EmptyName => "specifier without a package name",
            Self::EmptyVersion => "specifier without a version",
            Self::InvalidName => "specifier with an invalid package name",
            Self::InvalidVersion => "specifier with an invalid version",
        };
        f.write_str(text)
    }
}

/// A dependency string that was not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSpecifier {
    /// The specifier with its inline comment removed.
    pub raw: String,
    pub reason: SkipReason,
}

impl SkippedSpecifier {
    /// Human-readable warning line for this specifier.
    pub fn warning(&self) -> String {
        format!("Skipping {}: {}", self.reason, self.raw)
    }
}

/// Outcome of classifying one entry of `[project].dependencies`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSpecifier {
    Exact(ExactPin),
    Skipped(SkippedSpecifier),
    /// Empty, or only a comment.
    Blank,
}

/// Classify a single dependency string.
pub fn parse_specifier(entry: &str) -> ParsedSpecifier {
    let spec = entry.split('#').next().unwrap_or_default().trim();
    if spec.is_empty() {
        return ParsedSpecifier::Blank;
    }

    let skip = |reason| {
        ParsedSpecifier::Skipped(SkippedSpecifier {
            raw: spec.to_string(),
            reason,
        })
    };

    // Environment markers do not affect which version must be installed.
    let requirement = spec.split(';').next().unwrap_or_default().trim();

    if !requirement.contains("==") {
        return skip(SkipReason::NotExact);
    }
    if requirement.contains("===") {
        return skip(SkipReason::ArbitraryEquality);
    }

    let parts: Vec<&str> = requirement.split("==").collect();
    let [name, version] = parts.as_slice() else {
        return skip(SkipReason::MultipleOperators);
    };

    let name = strip_extras(name.trim());
    let version = version.trim();

    if name.is_empty() {
        return skip(SkipReason::EmptyName);
    }
    if version.is_empty() {
        return skip(SkipReason::EmptyVersion);
    }
    if version.contains(',') {
        return skip(SkipReason::CombinedConstraints);
    }
    if version.ends_with(".*") {
        return skip(SkipReason::Wildcard);
    }
    if !VERSION_REGEX.is_match(version) {
        return skip(SkipReason::InvalidVersion);
    }
    if !NAME_REGEX.is_match(name) {
        return skip(SkipReason::InvalidName);
    }

    ParsedSpecifier::Exact(ExactPin::new(name, version))
}

fn strip_extras(name: &str) -> &str {
    match name.find('[') {
        Some(idx) => name[..idx].trim_end(),
        None => name,
    }
}
