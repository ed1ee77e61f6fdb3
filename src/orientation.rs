//! Rough 3D pose of the physical cube from the tracked face's lattice angles.
//!
//! Recovering the two rotations exactly means solving two non-linear equations
//! in two unknowns. The linear fit used here was tuned by eye; it keeps the
//! overlay close enough to the cube to be readable and makes no stronger claim.

use glam::Vec3;

use crate::painter::{CubeStyle, Painter};
use crate::snapshot::{CubePlacement, RecognitionStatus, TrackedFace};
use crate::units::Degrees;

/// Pose assumed while nothing is tracked
pub const NEUTRAL_X: Degrees = Degrees(35.0);
pub const NEUTRAL_Y: Degrees = Degrees(45.0);

/// Where the overlay scene sits in front of the camera
pub const SCENE_DEPTH: f32 = -10.0;
const PILOT_OFFSET: Vec3 = Vec3::new(-6.0, 0.0, SCENE_DEPTH);
/// Extra yaw so the pilot cube shows three faces
const PILOT_YAW: Degrees = Degrees(25.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationEstimate {
    /// Unset unless the estimate is valid and upstream reported one
    pub placement: Option<CubePlacement>,
    pub rotation_x: Degrees,
    pub rotation_y: Degrees,
    pub is_valid: bool,
}

impl Default for OrientationEstimate {
    fn default() -> Self {
        Self {
            placement: None,
            rotation_x: NEUTRAL_X,
            rotation_y: NEUTRAL_Y,
            is_valid: false,
        }
    }
}

impl OrientationEstimate {
    /// Computed from scratch every frame; nothing carries over.
    pub fn estimate(face: Option<&TrackedFace>, placement: Option<CubePlacement>) -> Self {
        let Some(face) = face else {
            return Self::default();
        };
        if face.status != RecognitionStatus::Solved || face.lattice.is_none() {
            return Self::default();
        }
        let (rotation_x, rotation_y) = rotations(
            Degrees::from_radians(face.alpha_angle),
            Degrees::from_radians(face.beta_angle),
        );
        Self {
            placement,
            rotation_x,
            rotation_y,
            is_valid: true,
        }
    }

    /// Move the scene onto the physical cube. Returns false when there is no
    /// placement to move to.
    pub fn place_scene(&self, painter: &mut impl Painter) -> bool {
        let Some(CubePlacement { scale, x, y }) = self.placement else {
            return false;
        };
        painter.load_identity();
        painter.translate(Vec3::new(x, y, SCENE_DEPTH));
        painter.scale(Vec3::splat(scale));
        painter.rotate(self.rotation_x, Vec3::X);
        painter.rotate(self.rotation_y, Vec3::Y);
        true
    }

    /// The pilot cube mirrors the estimate beside the camera view. Nothing is
    /// drawn without a valid estimate.
    pub fn draw_pilot(&self, painter: &mut impl Painter) -> bool {
        if !self.is_valid {
            return false;
        }
        painter.load_identity();
        painter.translate(PILOT_OFFSET);
        painter.rotate(self.rotation_x, Vec3::X);
        painter.rotate(self.rotation_y + PILOT_YAW, Vec3::Y);
        painter.draw_cube(CubeStyle::Pilot);
        true
    }
}

fn rotations(alpha_angle: Degrees, beta_angle: Degrees) -> (Degrees, Degrees) {
    let alpha = 90.0 - *alpha_angle;
    let beta = *beta_angle - 90.0;
    let rotation_y = 45.0 + (alpha - beta) / 2.0;
    let rotation_x = 90.0 + ((alpha - 45.0) + (beta - 45.0)) / -0.5;
    (Degrees(rotation_x), Degrees(rotation_y))
}
