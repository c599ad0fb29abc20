// src/core/capability.rs

//! # Capability Policy
//!
//! Decides whether a command-line option existed for a command in a given
//! year. Rules map `(command, option)` to the first year the option appeared.
//!
//! Commands without any rules are allowed every option. This is an explicit
//! policy ([`OptionSupport::Unruled`]), not an accident of lookup: it is a
//! known gap in coverage, not a claim that those commands never changed.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// `(command, [(option, since)])` pairs for the built-in policy.
static BUILTIN_RULES: &[(&str, &[(&str, i32)])] = &[
    (
        "ls",
        &[
            ("-a", 1973),
            ("-l", 1973),
            ("-R", 1989),
            ("-t", 1989),
            ("-r", 1989),
            ("--color", 1990),
        ],
    ),
    (
        "cat",
        &[("-n", 1989), ("-v", 1989), ("-E", 1990), ("-T", 1990)],
    ),
];

lazy_static! {
    static ref BUILTIN_POLICY: CapabilityPolicy = CapabilityPolicy::from_rules(BUILTIN_RULES);
}

/// The outcome of checking one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSupport {
    /// The command has no rules, so every option is allowed.
    Unruled,
    /// The option exists for this command since `since`, and `since <= year`.
    Supported {
        /// First year the option existed.
        since: i32,
    },
    /// The option exists, but only from `since` onwards.
    TooEarly {
        /// First year the option existed.
        since: i32,
    },
    /// The command is ruled and this option is not one of its known options.
    Unknown,
}

impl OptionSupport {
    /// Whether the option may be used.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Unruled | Self::Supported { .. })
    }
}

/// Immutable table of per-command option rules.
#[derive(Debug, Clone, Default)]
pub struct CapabilityPolicy {
    rules: HashMap<&'static str, HashMap<&'static str, i32>>,
}

impl CapabilityPolicy {
    /// The process-wide built-in policy. Built once, never mutated.
    pub fn builtin() -> &'static Self {
        &BUILTIN_POLICY
    }

    /// Builds a policy from a static rule table.
    pub fn from_rules(table: &[(&'static str, &[(&'static str, i32)])]) -> Self {
        let rules = table
            .iter()
            .map(|(command, options)| (*command, options.iter().copied().collect()))
            .collect();
        Self { rules }
    }

    /// Returns true if `command` has any option rules.
    pub fn is_ruled(&self, command: &str) -> bool {
        self.rules.contains_key(command)
    }

    /// Classifies `option` for `command` in `year`. Options match by exact text.
    pub fn check(&self, command: &str, option: &str, year: i32) -> OptionSupport {
        let Some(options) = self.rules.get(command) else {
            return OptionSupport::Unruled;
        };
        match options.get(option) {
            Some(&since) if year >= since => OptionSupport::Supported { since },
            Some(&since) => OptionSupport::TooEarly { since },
            None => OptionSupport::Unknown,
        }
    }

    /// Whether `option` is available for `command` in `year`.
    pub fn is_option_supported(&self, command: &str, option: &str, year: i32) -> bool {
        self.check(command, option, year).is_supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ls_basic_and_extended_flags() {
        let policy = CapabilityPolicy::builtin();
        assert!(!policy.is_option_supported("ls", "-l", 1971));
        assert!(policy.is_option_supported("ls", "-l", 1973));
        assert!(policy.is_option_supported("ls", "-a", 1973));
        assert!(!policy.is_option_supported("ls", "-R", 1973));
        assert!(policy.is_option_supported("ls", "-R", 1989));
        assert!(!policy.is_option_supported("ls", "--color", 1989));
        assert!(policy.is_option_supported("ls", "--color", 1990));
    }

    #[test]
    fn test_cat_flags() {
        let policy = CapabilityPolicy::builtin();
        assert_eq!(
            policy.check("cat", "-n", 1973),
            OptionSupport::TooEarly { since: 1989 }
        );
        assert_eq!(
            policy.check("cat", "-n", 1989),
            OptionSupport::Supported { since: 1989 }
        );
        assert!(!policy.is_option_supported("cat", "-T", 1989));
        assert!(policy.is_option_supported("cat", "-T", 2023));
    }

    #[test]
    fn test_unknown_option_on_ruled_command_is_blocked() {
        let policy = CapabilityPolicy::builtin();
        assert_eq!(policy.check("ls", "-z", 2023), OptionSupport::Unknown);
        // Matching is exact: combined flags are not split.
        assert!(!policy.is_option_supported("ls", "-la", 2023));
        assert!(!policy.is_option_supported("cat", "-", 2023));
    }

    #[test]
    fn test_unruled_commands_allow_everything() {
        let policy = CapabilityPolicy::builtin();
        assert!(!policy.is_ruled("grep"));
        assert_eq!(policy.check("grep", "-P", 1971), OptionSupport::Unruled);
        assert!(policy.is_option_supported("echo", "--anything", 0));
    }

    #[test]
    fn test_support_is_monotonic_in_year() {
        let policy = CapabilityPolicy::builtin();
        for (command, options) in BUILTIN_RULES {
            for (option, _) in *options {
                let mut seen_supported = false;
                for year in 1960..2030 {
                    let supported = policy.is_option_supported(command, option, year);
                    assert!(
                        !(seen_supported && !supported),
                        "{command} {option} regressed in {year}"
                    );
                    seen_supported |= supported;
                }
                assert!(seen_supported);
            }
        }
    }

    #[test]
    fn test_custom_rules() {
        static RULES: &[(&str, &[(&str, i32)])] = &[("grep", &[("-E", 1992)])];
        let policy = CapabilityPolicy::from_rules(RULES);
        assert!(policy.is_ruled("grep"));
        assert!(!policy.is_ruled("ls"));
        assert!(policy.is_option_supported("ls", "-Z", 1971));
        assert!(!policy.is_option_supported("grep", "-E", 1991));
    }
}
