//! Version string parsing
//!
//! Parses specification and implementation version strings against the fixed
//! `MAJOR('.'MINOR('.'MICRO)?)?('-SNAPSHOT')?` grammar.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Pattern accepted for version strings, anchored at both ends.
pub const VERSION_PATTERN: &str = r"^([0-9]+)(?:\.([0-9]+)(?:\.([0-9]+))?)?(-SNAPSHOT)?$";

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("VERSION_PATTERN must compile"));

/// Error raised when a version string does not match [`VERSION_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("version string \"{raw}\" does not match the pattern: {}", VERSION_PATTERN)]
pub struct MalformedVersionError {
    /// The offending input, verbatim.
    pub raw: String,
}

/// A fully parsed version. Only ever constructed from a string matching the
/// whole grammar; partial matches are rejected, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub snapshot: bool,
}

/// Parse a raw version string into a [`ParsedVersion`].
///
/// Minor and micro default to 0 when their groups are absent in the match.
/// The snapshot flag is set iff the exact-case `-SNAPSHOT` suffix matched.
pub fn parse(raw: &str) -> Result<ParsedVersion, MalformedVersionError> {
    let malformed = || MalformedVersionError {
        raw: raw.to_string(),
    };
    let caps = VERSION_RE.captures(raw).ok_or_else(malformed)?;

    // A component wider than u32 is outside the supported grammar
    let component = |index: usize| match caps.get(index) {
        Some(group) => group.as_str().parse::<u32>().map_err(|_| malformed()),
        None => Ok(0),
    };

    Ok(ParsedVersion {
        major: component(1)?,
        minor: component(2)?,
        micro: component(3)?,
        snapshot: caps.get(4).is_some(),
    })
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if self.snapshot {
            write!(f, "-SNAPSHOT")?;
        }
        Ok(())
    }
}

impl FromStr for ParsedVersion {
    type Err = MalformedVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
