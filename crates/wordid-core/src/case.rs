use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::WordIdError;
use crate::generator::PostProcessor;

/// Named casing applied to every word of an identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Words as they appear in the dictionary.
    #[default]
    Keep,
    Lower,
    Upper,
    /// First character uppercased, the rest untouched.
    Capitalize,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Keep, Case::Lower, Case::Upper, Case::Capitalize];

    pub fn apply(self, word: &str) -> String {
        match self {
            Case::Keep => word.to_string(),
            Case::Lower => word.to_lowercase(),
            Case::Upper => word.to_uppercase(),
            Case::Capitalize => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }

    pub fn post_processor(self) -> PostProcessor {
        Arc::new(move |word: &str| self.apply(word))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Keep => "keep",
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Capitalize => "capitalize",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = WordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|case| case.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let valid: Vec<_> = Case::ALL.iter().map(|c| c.as_str()).collect();
                WordIdError::InvalidArgument(format!(
                    "unknown case '{s}'. Valid cases: {}",
                    valid.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(Case::Capitalize.apply("coral"), "Coral");
        assert_eq!(Case::Capitalize.apply("mcKay"), "McKay");
        assert_eq!(Case::Capitalize.apply("éclair"), "Éclair");
        assert_eq!(Case::Capitalize.apply(""), "");
    }

    #[test]
    fn upper_lower_keep() {
        assert_eq!(Case::Upper.apply("Tide"), "TIDE");
        assert_eq!(Case::Lower.apply("Tide"), "tide");
        assert_eq!(Case::Keep.apply("Tide"), "Tide");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("capitalize".parse::<Case>().unwrap(), Case::Capitalize);
        assert_eq!("UPPER".parse::<Case>().unwrap(), Case::Upper);
        for case in Case::ALL {
            assert_eq!(case.to_string().parse::<Case>().unwrap(), case);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "title".parse::<Case>().unwrap_err();
        assert!(matches!(err, WordIdError::InvalidArgument(_)));
        assert!(err.to_string().contains("Valid cases: keep, lower, upper, capitalize"));
    }

    #[test]
    fn post_processor_matches_apply() {
        let f = Case::Upper.post_processor();
        assert_eq!(f("reef"), "REEF");
    }
}
