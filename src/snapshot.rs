//! The per-frame view of upstream state.
//!
//! The recognizer and solver run on their own thread and publish into shared
//! state without coordination. Each frame copies what it needs into a
//! [`FrameSnapshot`] and the guide only ever reads that copy, so a torn read
//! (say an index bumped before the list grew) lasts one frame at most.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::GuideError;
use crate::move_token::FaceName;
use crate::painter::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppState {
    #[default]
    Start,
    GotIt,
    Rotate,
    Searching,
    Complete,
    Waiting,
    BadColors,
    Verified,
    Incorrect,
    Solved,
    DoMove,
    WaitingForMoveComplete,
    Done,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecognitionStatus {
    #[default]
    Unknown,
    Insufficient,
    BadMetrics,
    Incomplete,
    Inadequate,
    Blocked,
    Unstable,
    InvalidMath,
    Solved,
}

/// Result of fitting the 3x3 tile lattice to the tracked face.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatticeFit {
    pub origin: [f32; 2],
    pub sigma: f32,
}

/// The face currently in front of the camera, as the recognizer saw it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackedFace {
    pub status: RecognitionStatus,
    /// Planar angle of the alpha lattice axis, radians
    pub alpha_angle: f64,
    /// Planar angle of the beta lattice axis, radians
    pub beta_angle: f64,
    #[serde(default)]
    pub lattice: Option<LatticeFit>,
}

/// Screen placement of the reconstructed cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubePlacement {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for CubePlacement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSnapshot {
    pub app_state: AppState,
    pub observed_faces: usize,
    pub preload_count: usize,
    pub verification: Option<String>,
    pub solution: Option<String>,
    pub moves: Vec<String>,
    pub move_index: usize,
    /// Center tile color of every face observed so far
    pub center_colors: HashMap<FaceName, Rgba>,
    pub tracked_face: Option<TrackedFace>,
    pub placement: Option<CubePlacement>,
}

impl FrameSnapshot {
    pub fn new(app_state: AppState) -> Self {
        Self {
            app_state,
            ..Self::default()
        }
    }

    pub fn current_move(&self) -> Result<&str, GuideError> {
        self.moves
            .get(self.move_index)
            .map(String::as_str)
            .ok_or(GuideError::MoveIndexOutOfRange {
                index: self.move_index,
                len: self.moves.len(),
            })
    }

    pub fn center_color(&self, face: FaceName) -> Option<Rgba> {
        self.center_colors.get(&face).copied()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_move_out_of_range() {
        let mut snapshot = FrameSnapshot::new(AppState::DoMove);
        snapshot.moves = vec!["U".into(), "R2".into()];
        snapshot.move_index = 1;
        assert_eq!(snapshot.current_move(), Ok("R2"));
        snapshot.move_index = 2;
        assert_eq!(
            snapshot.current_move(),
            Err(GuideError::MoveIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_from_json() {
        let snapshot = FrameSnapshot::from_json(
            r#"{
                "app_state": "DO_MOVE",
                "moves": ["F'", "U"],
                "center_colors": { "F": [1.0, 0.0, 0.0, 1.0] },
                "tracked_face": {
                    "status": "SOLVED",
                    "alpha_angle": 0.7,
                    "beta_angle": 2.3,
                    "lattice": { "origin": [320.0, 240.0], "sigma": 4.0 }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.app_state, AppState::DoMove);
        assert_eq!(snapshot.current_move(), Ok("F'"));
        assert_eq!(snapshot.center_color(FaceName::Front), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(snapshot.center_color(FaceName::Back), None);
        let face = snapshot.tracked_face.unwrap();
        assert_eq!(face.status, RecognitionStatus::Solved);
        assert!(face.lattice.is_some());
        assert!(snapshot.placement.is_none());
    }

    #[test]
    fn test_unrecognized_state_reads_as_unknown() {
        let snapshot = FrameSnapshot::from_json(r#"{ "app_state": "CALIBRATING" }"#).unwrap();
        assert_eq!(snapshot.app_state, AppState::Unknown);
    }

    #[test]
    fn test_state_names() {
        assert_eq!(AppState::WaitingForMoveComplete.to_string(), "WAITING_FOR_MOVE_COMPLETE");
        assert_eq!("BAD_COLORS".parse::<AppState>().unwrap(), AppState::BadColors);
    }
}
