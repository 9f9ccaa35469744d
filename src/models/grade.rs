//! Letter grades and their grade points

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Final grade for an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
    /// No grade recorded yet; excluded from GPA arithmetic
    #[default]
    #[serde(rename = "NOT_GRADED")]
    NotGraded,
}

impl Grade {
    /// Numeric grade point (`NotGraded` is the -1.0 sentinel)
    pub fn grade_point(&self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
            Self::NotGraded => -1.0,
        }
    }

    /// Whether a final grade has been recorded
    pub fn is_graded(&self) -> bool {
        !matches!(self, Self::NotGraded)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::NotGraded => "NOT_GRADED",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = crate::error::CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "NOT_GRADED" => Ok(Self::NotGraded),
            other => Err(crate::error::CampusError::Validation(format!(
                "Unknown grade '{}' (expected one of S, A, B, C, D, E, F, NOT_GRADED)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points() {
        assert_eq!(Grade::S.grade_point(), 10.0);
        assert_eq!(Grade::A.grade_point(), 9.0);
        assert_eq!(Grade::E.grade_point(), 5.0);
        assert_eq!(Grade::F.grade_point(), 0.0);
        assert_eq!(Grade::NotGraded.grade_point(), -1.0);
    }

    #[test]
    fn test_default_is_not_graded() {
        assert_eq!(Grade::default(), Grade::NotGraded);
        assert!(!Grade::default().is_graded());
        assert!(Grade::F.is_graded());
    }

    #[test]
    fn test_parse() {
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" S ".parse::<Grade>().unwrap(), Grade::S);
        assert_eq!("not_graded".parse::<Grade>().unwrap(), Grade::NotGraded);
        assert!("G".parse::<Grade>().unwrap_err().is_validation());
    }

    #[test]
    fn test_display_matches_persisted_names() {
        assert_eq!(Grade::B.to_string(), "B");
        assert_eq!(Grade::NotGraded.to_string(), "NOT_GRADED");
        assert_eq!(serde_json::to_string(&Grade::NotGraded).unwrap(), "\"NOT_GRADED\"");
    }
}
