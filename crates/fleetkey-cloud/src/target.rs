//! Fleet or build identifier entered by the operator

use crate::error::{AccessError, Result};
use std::fmt;
use std::str::FromStr;

/// The hyphen must appear within this many leading characters
const PREFIX_WINDOW: usize = 6;

/// What the operator asked to open up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single fleet, used as-is
    Fleet(String),
    /// A build, resolved to every fleet created from it
    Build(String),
}

impl Target {
    /// Parse an identifier such as `fleet-1a2b` or `Build-9f8e`
    ///
    /// Accepts a hyphen among the first six characters and a `fleet` or
    /// `build` prefix (case-insensitive). The identifier itself is kept verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        let id = input.trim();
        if !has_prefix_hyphen(id) {
            return Err(AccessError::InvalidIdentifier(id.to_string()));
        }

        let prefix = id.split('-').next().unwrap_or_default().to_lowercase();
        match prefix.as_str() {
            "fleet" => Ok(Target::Fleet(id.to_string())),
            "build" => Ok(Target::Build(id.to_string())),
            _ => Err(AccessError::InvalidIdentifier(id.to_string())),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Target::Fleet(id) | Target::Build(id) => id,
        }
    }
}

impl FromStr for Target {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Target::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn has_prefix_hyphen(id: &str) -> bool {
    id.chars().take(PREFIX_WINDOW).any(|c| c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fleet() {
        let target = Target::parse("fleet-2222bbbb-33cc-44dd-55ee-6666ffff77aa").unwrap();
        assert_eq!(
            target,
            Target::Fleet("fleet-2222bbbb-33cc-44dd-55ee-6666ffff77aa".to_string())
        );
    }

    #[test]
    fn test_parse_build_case_insensitive_prefix() {
        let target = Target::parse("BUILD-1111aaaa").unwrap();
        assert_eq!(target, Target::Build("BUILD-1111aaaa".to_string()));
        assert_eq!(target.id(), "BUILD-1111aaaa");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let target: Target = "  fleet-abc \n".parse().unwrap();
        assert_eq!(target.to_string(), "fleet-abc");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            Target::parse(""),
            Err(AccessError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_parse_rejects_late_hyphen() {
        // hyphen at index 6 is outside the window
        assert!(Target::parse("fleets-abc").is_err());
        assert!(Target::parse("fleetabc").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_prefix() {
        assert!(Target::parse("alias-abc").is_err());
        assert!(Target::parse("-abc").is_err());
    }
}
