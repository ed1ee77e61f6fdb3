//! Solver move tokens: `[UDLRFB]('|2)?`
//!
//! A token names one face turn. No modifier is a clockwise quarter turn,
//! `2` a half turn and `'` a counter-clockwise quarter turn, as seen from
//! outside the face being turned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum FaceName {
    #[strum(serialize = "U")]
    #[serde(rename = "U")]
    Up,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Down,
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Left,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Right,
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    Front,
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    Back,
}

impl FaceName {
    pub fn from_letter(letter: char) -> Option<Self> {
        letter.encode_utf8(&mut [0; 4]).parse().ok()
    }

    /// How the face is called in user instructions
    pub fn spoken(self) -> &'static str {
        match self {
            FaceName::Up => "Top Face",
            FaceName::Down => "Down Face",
            FaceName::Left => "Left Face",
            FaceName::Right => "Right Face",
            FaceName::Front => "Front Face",
            FaceName::Back => "Back Face",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RotationSense {
    Clockwise,
    CounterClockwise,
    OneHundredEighty,
}

impl RotationSense {
    pub fn amount(self) -> RotationAmount {
        match self {
            RotationSense::Clockwise | RotationSense::CounterClockwise => RotationAmount::QuarterTurn,
            RotationSense::OneHundredEighty => RotationAmount::HalfTurn,
        }
    }

    pub fn spoken(self) -> &'static str {
        match self {
            RotationSense::Clockwise => " Clockwise",
            RotationSense::CounterClockwise => " Counter Clockwise",
            RotationSense::OneHundredEighty => " 180 Degrees",
        }
    }
}

/// Selects which of the two prebuilt arrow meshes gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RotationAmount {
    QuarterTurn,
    HalfTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: FaceName,
    pub sense: RotationSense,
}

impl Move {
    pub fn amount(&self) -> RotationAmount {
        self.sense.amount()
    }
}

impl FromStr for Move {
    type Err = GuideError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            return Err(GuideError::EmptyMove);
        };
        let face = FaceName::from_letter(letter)
            .ok_or_else(|| GuideError::UnrecognizedFace { token: token.to_string() })?;
        let sense = parse_sense(token, chars.as_str())?;
        Ok(Move { face, sense })
    }
}

pub fn interpret(token: &str) -> Result<(RotationSense, RotationAmount), GuideError> {
    let Move { sense, .. } = token.parse::<Move>()?;
    Ok((sense, sense.amount()))
}

fn parse_sense(token: &str, modifier: &str) -> Result<RotationSense, GuideError> {
    match modifier {
        "" => Ok(RotationSense::Clockwise),
        "2" => Ok(RotationSense::OneHundredEighty),
        "'" => Ok(RotationSense::CounterClockwise),
        _ => Err(GuideError::UnrecognizedRotation { token: token.to_string() }),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modifier = match self.sense {
            RotationSense::Clockwise => "",
            RotationSense::CounterClockwise => "'",
            RotationSense::OneHundredEighty => "2",
        };
        write!(f, "{}{}", self.face, modifier)
    }
}

/// Human readable move description. A bad modifier shows as `?`; reporting it
/// is left to the overlay path.
pub fn describe(token: &str) -> String {
    let mut chars = token.chars();
    let mut description = String::from("Rotate ");
    if let Some(face) = chars.next().and_then(FaceName::from_letter) {
        description.push_str(face.spoken());
    }
    match parse_sense(token, chars.as_str()) {
        Ok(sense) => description.push_str(sense.spoken()),
        Err(_) => description.push('?'),
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_plain_token_is_clockwise_quarter() {
        assert_eq!(
            interpret("U").unwrap(),
            (RotationSense::Clockwise, RotationAmount::QuarterTurn)
        );
    }

    #[test]
    fn test_two_is_half_turn() {
        assert_eq!(
            interpret("R2").unwrap(),
            (RotationSense::OneHundredEighty, RotationAmount::HalfTurn)
        );
    }

    #[test]
    fn test_prime_is_counter_clockwise() {
        assert_eq!(
            interpret("F'").unwrap(),
            (RotationSense::CounterClockwise, RotationAmount::QuarterTurn)
        );
    }

    #[test]
    fn test_every_grammar_token_parses() {
        for face in FaceName::iter() {
            for (modifier, sense) in [
                ("", RotationSense::Clockwise),
                ("2", RotationSense::OneHundredEighty),
                ("'", RotationSense::CounterClockwise),
            ] {
                let token = format!("{face}{modifier}");
                let parsed: Move = token.parse().unwrap();
                assert_eq!(parsed, Move { face, sense });
                assert_eq!(parsed.to_string(), token);
            }
        }
    }

    #[test]
    fn test_bad_modifier_is_rejected() {
        for token in ["U#", "D3", "L\"", "B''", "F2'"] {
            assert_eq!(
                interpret(token),
                Err(GuideError::UnrecognizedRotation { token: token.to_string() }),
                "{token}"
            );
        }
    }

    #[test]
    fn test_bad_face_is_rejected() {
        assert!(interpret("X").is_err());
        assert_eq!(
            "X".parse::<Move>(),
            Err(GuideError::UnrecognizedFace { token: "X".to_string() })
        );
        assert!(matches!("u".parse::<Move>(), Err(GuideError::UnrecognizedFace { .. })));
        assert!(matches!("U#".parse::<Move>(), Err(GuideError::UnrecognizedRotation { .. })));
        assert_eq!("".parse::<Move>(), Err(GuideError::EmptyMove));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("U"), "Rotate Top Face Clockwise");
        assert_eq!(describe("D2"), "Rotate Down Face 180 Degrees");
        assert_eq!(describe("B'"), "Rotate Back Face Counter Clockwise");
        assert_eq!(describe("L#"), "Rotate Left Face?");
    }

    #[test]
    fn test_face_letters() {
        for face in FaceName::iter() {
            let letter = face.to_string().chars().next().unwrap();
            assert_eq!(FaceName::from_letter(letter), Some(face));
        }
        assert_eq!(FaceName::from_letter('u'), None);
        assert_eq!(FaceName::from_letter('X'), None);
    }
}
