//! Letter grades and the fixed grade-point table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GradeError;

/// A letter grade from the closed enumeration the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeToken {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl GradeToken {
    /// Every token, best to worst.
    pub const ALL: [GradeToken; 12] = [
        GradeToken::APlus,
        GradeToken::A,
        GradeToken::AMinus,
        GradeToken::BPlus,
        GradeToken::B,
        GradeToken::BMinus,
        GradeToken::CPlus,
        GradeToken::C,
        GradeToken::CMinus,
        GradeToken::DPlus,
        GradeToken::D,
        GradeToken::F,
    ];

    /// Grade points on the 0.0-4.0 scale.
    pub fn points(self) -> f64 {
        match self {
            GradeToken::APlus | GradeToken::A => 4.0,
            GradeToken::AMinus => 3.7,
            GradeToken::BPlus => 3.3,
            GradeToken::B => 3.0,
            GradeToken::BMinus => 2.7,
            GradeToken::CPlus => 2.3,
            GradeToken::C => 2.0,
            GradeToken::CMinus => 1.7,
            GradeToken::DPlus => 1.3,
            GradeToken::D => 1.0,
            GradeToken::F => 0.0,
        }
    }

    /// The letter as written on a transcript.
    pub fn as_str(self) -> &'static str {
        match self {
            GradeToken::APlus => "A+",
            GradeToken::A => "A",
            GradeToken::AMinus => "A-",
            GradeToken::BPlus => "B+",
            GradeToken::B => "B",
            GradeToken::BMinus => "B-",
            GradeToken::CPlus => "C+",
            GradeToken::C => "C",
            GradeToken::CMinus => "C-",
            GradeToken::DPlus => "D+",
            GradeToken::D => "D",
            GradeToken::F => "F",
        }
    }

    /// Below `B` quality (fewer than 3.0 grade points).
    pub fn is_low_quality(self) -> bool {
        self.points() < GradeToken::B.points()
    }
}

impl fmt::Display for GradeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeToken {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        GradeToken::ALL
            .into_iter()
            .find(|token| token.as_str() == normalized)
            .ok_or_else(|| GradeError::InvalidGradeToken(s.to_string()))
    }
}

/// Look up the grade points for a raw letter.
///
/// Unknown letters are an error; the table never substitutes a default, so
/// callers that tolerate "ungraded" rows must filter them out first.
pub fn grade_points(raw: &str) -> Result<f64, GradeError> {
    raw.parse::<GradeToken>().map(GradeToken::points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_maps_into_scale() {
        for token in GradeToken::ALL {
            let points = token.points();
            assert!((0.0..=4.0).contains(&points), "{token} -> {points}");
        }
    }

    #[test]
    fn a_plus_equals_a() {
        assert_eq!(GradeToken::APlus.points(), GradeToken::A.points());
        assert_eq!(GradeToken::A.points(), 4.0);
    }

    #[test]
    fn table_is_monotonic_non_increasing() {
        for pair in GradeToken::ALL.windows(2) {
            assert!(pair[0].points() >= pair[1].points());
        }
    }

    #[test]
    fn fixed_values() {
        assert_eq!(grade_points("A-").unwrap(), 3.7);
        assert_eq!(grade_points("B+").unwrap(), 3.3);
        assert_eq!(grade_points("C-").unwrap(), 1.7);
        assert_eq!(grade_points("D+").unwrap(), 1.3);
        assert_eq!(grade_points("F").unwrap(), 0.0);
    }

    #[test]
    fn display_and_parse() {
        for token in GradeToken::ALL {
            assert_eq!(token.to_string().parse::<GradeToken>().unwrap(), token);
        }
        assert_eq!(" b+ ".parse::<GradeToken>().unwrap(), GradeToken::BPlus);
    }

    #[test]
    fn unknown_token_is_an_error() {
        assert_eq!(
            grade_points("E"),
            Err(GradeError::InvalidGradeToken("E".into()))
        );
        assert!("A++".parse::<GradeToken>().is_err());
        assert!("".parse::<GradeToken>().is_err());
    }

    #[test]
    fn low_quality_is_strictly_below_b() {
        assert!(!GradeToken::B.is_low_quality());
        assert!(GradeToken::BMinus.is_low_quality());
        assert!(GradeToken::F.is_low_quality());
    }

    #[test]
    fn serde_uses_letters() {
        let json = serde_json::to_string(&GradeToken::AMinus).unwrap();
        assert_eq!(json, "\"A-\"");
        let token: GradeToken = serde_json::from_str("\"C+\"").unwrap();
        assert_eq!(token, GradeToken::CPlus);
    }
}
