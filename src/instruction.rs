//! What to tell the user, per application state.

use glam::Vec2;
use log::debug;

use crate::arrow::{body_turn_arrow, face_turn_arrow, ArrowOverlay};
use crate::error::GuideError;
use crate::move_token::{describe, Move};
use crate::snapshot::{AppState, FrameSnapshot};

pub const LARGE: f32 = 5.0;
pub const MEDIUM: f32 = 4.0;
pub const SMALL: f32 = 2.0;

pub const HEADLINE: Vec2 = Vec2::new(0.0, 60.0);
pub const SUBLINE: Vec2 = Vec2::new(0.0, 120.0);

enum Text {
    Fixed(&'static str),
    ObservedFaces(&'static str),
    PreloadCount(&'static str),
    Verification(&'static str),
    Solution(&'static str),
    MoveDescription,
}

enum Overlay {
    None,
    BodyTurn,
    FaceTurn,
}

struct StateEntry {
    text: Text,
    scale: f32,
    /// Drawn even with text display turned off
    always_shown: bool,
    overlay: Overlay,
}

impl StateEntry {
    fn text(text: Text, scale: f32) -> Self {
        Self {
            text,
            scale,
            always_shown: false,
            overlay: Overlay::None,
        }
    }

    fn always_shown(self) -> Self {
        Self {
            always_shown: true,
            ..self
        }
    }

    fn with_overlay(self, overlay: Overlay) -> Self {
        Self { overlay, ..self }
    }
}

fn entry(state: AppState) -> StateEntry {
    use AppState::*;
    use Text::*;
    match state {
        Start => StateEntry::text(Fixed("Show Me The Rubik Cube"), LARGE),
        GotIt => StateEntry::text(Fixed("OK, Got It"), LARGE),
        Rotate => StateEntry::text(ObservedFaces("Please Rotate: "), LARGE)
            .with_overlay(Overlay::BodyTurn),
        Searching => StateEntry::text(Fixed("Searching for Another Face"), LARGE),
        Complete => StateEntry::text(Fixed("Cube is Complete and has Good Colors"), MEDIUM),
        Waiting => StateEntry::text(PreloadCount("Waiting - Preload Next: "), LARGE),
        BadColors => {
            StateEntry::text(Fixed("Cube is Complete but has Bad Colors"), MEDIUM).always_shown()
        }
        Verified => StateEntry::text(Fixed("Cube is Complete and Verified"), MEDIUM),
        Incorrect => StateEntry::text(Verification("Cube is Complete but Incorrect: "), MEDIUM)
            .always_shown(),
        Solved => StateEntry::text(Solution("SOLUTION: "), MEDIUM),
        DoMove => StateEntry::text(MoveDescription, MEDIUM).with_overlay(Overlay::FaceTurn),
        WaitingForMoveComplete => {
            StateEntry::text(Fixed("Waiting for move to be completed"), MEDIUM)
        }
        Done => StateEntry::text(Fixed("Cube is Solved"), MEDIUM),
        Unknown => StateEntry::text(Fixed("Oops - Unexpected State"), LARGE),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub position: Vec2,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub lines: Vec<TextLine>,
    pub always_shown: bool,
    /// Only the rotate and move states point at the cube
    pub wants_overlay: bool,
    /// `None` with `wants_overlay` means the face color is not known yet
    pub overlay: Option<ArrowOverlay>,
}

impl Instruction {
    pub fn headline(&self) -> &str {
        self.lines.first().map(|line| line.text.as_str()).unwrap_or_default()
    }

    pub fn select(snapshot: &FrameSnapshot) -> Result<Self, GuideError> {
        let StateEntry {
            text,
            scale,
            always_shown,
            overlay,
        } = entry(snapshot.app_state);
        let headline = |text: String| TextLine {
            text,
            position: HEADLINE,
            scale,
        };
        let lines = match text {
            Text::Fixed(text) => vec![headline(text.to_string())],
            Text::ObservedFaces(prefix) => {
                vec![headline(format!("{prefix}{}", snapshot.observed_faces))]
            }
            Text::PreloadCount(prefix) => {
                vec![headline(format!("{prefix}{}", snapshot.preload_count))]
            }
            Text::Verification(prefix) => vec![headline(format!(
                "{prefix}{}",
                snapshot.verification.as_deref().unwrap_or_default()
            ))],
            Text::Solution(prefix) => vec![
                headline(prefix.to_string()),
                TextLine {
                    text: snapshot.solution.clone().unwrap_or_default(),
                    position: SUBLINE,
                    scale: SMALL,
                },
            ],
            Text::MoveDescription => {
                let token = snapshot.current_move()?;
                debug!("Move:{token}:");
                vec![headline(describe(token))]
            }
        };
        let (wants_overlay, overlay) = match overlay {
            Overlay::None => (false, None),
            Overlay::BodyTurn => (true, Some(body_turn_arrow(snapshot.observed_faces))),
            Overlay::FaceTurn => {
                let face_move: Move = snapshot.current_move()?.parse()?;
                let arrow = face_turn_arrow(face_move, |face| snapshot.center_color(face));
                if arrow.is_none() {
                    debug!("No center color for {}, skipping arrow", face_move.face);
                }
                (true, arrow)
            }
        };
        Ok(Self {
            lines,
            always_shown,
            wants_overlay,
            overlay,
        })
    }
}
