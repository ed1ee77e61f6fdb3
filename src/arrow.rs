//! Arrow placement for face turns and whole-cube rotations.
//!
//! The cube model is two units wide, centered on the origin, with Y up and Z
//! toward the viewer. A face arrow sits on the face plane, two units out.

use glam::Vec3;

use crate::move_token::{FaceName, Move, RotationAmount, RotationSense};
use crate::painter::{Painter, Rgba, WHITE};
use crate::units::{Degrees, HALF, QUARTER};

/// Distance from the cube center to the plane an arrow is drawn on
pub const FACE_OFFSET: f32 = 2.0;
/// Rotation about the depth axis so arrows are not seen edge-on
pub const TILT: Degrees = Degrees(30.0);
/// Offset of the whole-cube arrow from the center, along each of its two axes
pub const BODY_OFFSET: f32 = 1.5;
/// Stretch of the whole-cube arrow along depth, so it reads as wide
pub const BODY_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(Vec3),
    Rotate(Degrees, Vec3),
    Scale(Vec3),
}

impl Transform {
    pub fn apply(&self, painter: &mut impl Painter) {
        match *self {
            Transform::Translate(offset) => painter.translate(offset),
            Transform::Rotate(angle, axis) => painter.rotate(angle, axis),
            Transform::Scale(factors) => painter.scale(factors),
        }
    }
}

/// Turns the arrow around: −90° about depth, then half a turn about vertical.
pub const REVERSE: [Transform; 2] = [
    Transform::Rotate(Degrees(-90.0), Vec3::Z),
    Transform::Rotate(HALF, Vec3::Y),
];

struct FaceGeometry {
    face: FaceName,
    translation: Vec3,
    primary: Option<Vec3>,
    tilt: bool,
    /// Indexed by [`sense_index`]: clockwise, counter-clockwise, 180
    reverse: [bool; 3],
}

// The bare arrow mesh reads clockwise on U, L and B but counter-clockwise on
// D, R and F. Half turns are drawn reversed on U, L, B and bare on D, R, F.
// Order must follow FaceName.
const FACE_TABLE: [FaceGeometry; 6] = [
    FaceGeometry {
        face: FaceName::Up,
        translation: Vec3::new(0.0, FACE_OFFSET, 0.0),
        primary: Some(Vec3::X),
        tilt: false,
        reverse: [false, true, true],
    },
    FaceGeometry {
        face: FaceName::Down,
        translation: Vec3::new(0.0, -FACE_OFFSET, 0.0),
        primary: Some(Vec3::X),
        tilt: false,
        reverse: [true, false, false],
    },
    FaceGeometry {
        face: FaceName::Left,
        translation: Vec3::new(-FACE_OFFSET, 0.0, 0.0),
        primary: Some(Vec3::Y),
        tilt: true,
        reverse: [false, true, true],
    },
    FaceGeometry {
        face: FaceName::Right,
        translation: Vec3::new(FACE_OFFSET, 0.0, 0.0),
        primary: Some(Vec3::Y),
        tilt: true,
        reverse: [true, false, false],
    },
    FaceGeometry {
        face: FaceName::Front,
        translation: Vec3::new(0.0, 0.0, FACE_OFFSET),
        primary: None,
        tilt: true,
        reverse: [true, false, false],
    },
    FaceGeometry {
        face: FaceName::Back,
        translation: Vec3::new(0.0, 0.0, -FACE_OFFSET),
        primary: None,
        tilt: true,
        reverse: [false, true, true],
    },
];

const _: () = {
    let mut i = 0;
    while i < FACE_TABLE.len() {
        assert!(FACE_TABLE[i].face as usize == i, "FACE_TABLE out of FaceName order");
        i += 1;
    }
};

fn sense_index(sense: RotationSense) -> usize {
    match sense {
        RotationSense::Clockwise => 0,
        RotationSense::CounterClockwise => 1,
        RotationSense::OneHundredEighty => 2,
    }
}

fn geometry(face: FaceName) -> &'static FaceGeometry {
    &FACE_TABLE[face as usize]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTransformRecipe {
    pub translation: Vec3,
    /// Always a quarter turn when present
    pub primary_axis: Option<Vec3>,
    /// About the depth axis
    pub tilt: Option<Degrees>,
    pub reverse: bool,
}

impl FaceTransformRecipe {
    pub fn for_face(face: FaceName, sense: RotationSense) -> Self {
        let geometry = geometry(face);
        Self {
            translation: geometry.translation,
            primary_axis: geometry.primary,
            tilt: geometry.tilt.then_some(TILT),
            reverse: geometry.reverse[sense_index(sense)],
        }
    }

    pub fn transforms(&self) -> Vec<Transform> {
        let mut transforms = vec![Transform::Translate(self.translation)];
        if let Some(axis) = self.primary_axis {
            transforms.push(Transform::Rotate(QUARTER, axis));
        }
        if let Some(tilt) = self.tilt {
            transforms.push(Transform::Rotate(tilt, Vec3::Z));
        }
        if self.reverse {
            transforms.extend(REVERSE);
        }
        transforms
    }
}

/// Everything needed to draw one arrow relative to the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowOverlay {
    pub transforms: Vec<Transform>,
    pub amount: RotationAmount,
    pub color: Rgba,
}

impl ArrowOverlay {
    pub fn draw(&self, painter: &mut impl Painter) {
        for transform in &self.transforms {
            transform.apply(painter);
        }
        painter.draw_arrow(self.amount, self.color);
    }
}

/// Arrow for turning one face, colored like the face's center tile.
/// `None` when that face has not been observed yet.
pub fn face_turn_arrow(
    face_move: Move,
    center_color: impl Fn(FaceName) -> Option<Rgba>,
) -> Option<ArrowOverlay> {
    let color = center_color(face_move.face)?;
    let recipe = FaceTransformRecipe::for_face(face_move.face, face_move.sense);
    Some(ArrowOverlay {
        transforms: recipe.transforms(),
        amount: face_move.amount(),
        color,
    })
}

/// Wide white arrow asking for the whole cube to be turned so the next face shows.
/// Alternates between front-to-top and left-to-top with each observed face.
pub fn body_turn_arrow(observed_faces: usize) -> ArrowOverlay {
    let mut transforms = if observed_faces % 2 != 0 {
        vec![
            Transform::Translate(Vec3::new(0.0, BODY_OFFSET, BODY_OFFSET)),
            Transform::Rotate(-QUARTER, Vec3::Y),
            Transform::Rotate(TILT, Vec3::Z),
        ]
    } else {
        vec![
            Transform::Translate(Vec3::new(-BODY_OFFSET, BODY_OFFSET, 0.0)),
            Transform::Rotate(HALF, Vec3::Y),
            Transform::Rotate(TILT, Vec3::Z),
        ]
    };
    transforms.extend(REVERSE);
    transforms.push(Transform::Scale(Vec3::new(1.0, 1.0, BODY_WIDTH)));
    ArrowOverlay {
        transforms,
        amount: RotationAmount::QuarterTurn,
        color: WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::{RecordingPainter, RED};
    use strum::IntoEnumIterator;

    fn axis_of(v: Vec3) -> usize {
        [v.x, v.y, v.z].iter().position(|c| *c != 0.0).unwrap()
    }

    #[test]
    fn test_face_table_order() {
        for face in FaceName::iter() {
            assert_eq!(geometry(face).face, face);
        }
    }

    #[test]
    fn test_face_table_matches_layout() {
        use FaceName::*;
        use RotationSense::*;
        // (face, translation axis, sign, primary axis, tilted, not reversed for)
        let expected = [
            (Up, 1, 1.0, Some(Vec3::X), false, Clockwise),
            (Down, 1, -1.0, Some(Vec3::X), false, CounterClockwise),
            (Left, 0, -1.0, Some(Vec3::Y), true, Clockwise),
            (Right, 0, 1.0, Some(Vec3::Y), true, CounterClockwise),
            (Front, 2, 1.0, None, true, CounterClockwise),
            (Back, 2, -1.0, None, true, Clockwise),
        ];
        for (face, axis, sign, primary, tilted, plain) in expected {
            for sense in [Clockwise, CounterClockwise] {
                let recipe = FaceTransformRecipe::for_face(face, sense);
                assert_eq!(axis_of(recipe.translation), axis, "{face}");
                assert_eq!(recipe.translation.length(), FACE_OFFSET);
                assert_eq!(recipe.translation.to_array()[axis].signum(), sign);
                assert_eq!(recipe.primary_axis, primary, "{face}");
                assert_eq!(recipe.tilt.is_some(), tilted, "{face}");
                assert_eq!(recipe.reverse, sense != plain, "{face} {sense}");
            }
        }
    }

    #[test]
    fn test_half_turn_reverse_split() {
        for face in FaceName::iter() {
            let recipe = FaceTransformRecipe::for_face(face, RotationSense::OneHundredEighty);
            let expected = matches!(face, FaceName::Up | FaceName::Left | FaceName::Back);
            assert_eq!(recipe.reverse, expected, "{face}");
        }
    }

    #[test]
    fn test_reverse_appends_twist_last() {
        let recipe = FaceTransformRecipe::for_face(FaceName::Left, RotationSense::CounterClockwise);
        let transforms = recipe.transforms();
        assert_eq!(
            transforms,
            vec![
                Transform::Translate(Vec3::new(-2.0, 0.0, 0.0)),
                Transform::Rotate(QUARTER, Vec3::Y),
                Transform::Rotate(TILT, Vec3::Z),
                REVERSE[0],
                REVERSE[1],
            ]
        );
    }

    #[test]
    fn test_front_has_only_translation_and_tilt() {
        let recipe = FaceTransformRecipe::for_face(FaceName::Front, RotationSense::CounterClockwise);
        assert_eq!(
            recipe.transforms(),
            vec![
                Transform::Translate(Vec3::new(0.0, 0.0, 2.0)),
                Transform::Rotate(TILT, Vec3::Z),
            ]
        );
    }

    #[test]
    fn test_face_turn_arrow_uses_center_color() {
        let up: Move = "U".parse().unwrap();
        let arrow = face_turn_arrow(up, |face| (face == FaceName::Up).then_some(RED)).unwrap();
        assert_eq!(arrow.color, RED);
        assert_eq!(arrow.amount, RotationAmount::QuarterTurn);

        let mut painter = RecordingPainter::new();
        arrow.draw(&mut painter);
        let (_, _, model) = painter.arrows().next().unwrap();
        let center = model.transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_face_turn_arrow_needs_color() {
        let down: Move = "D2".parse().unwrap();
        assert!(face_turn_arrow(down, |_| None).is_none());
    }

    #[test]
    fn test_body_turn_alternates() {
        let odd = body_turn_arrow(1);
        let even = body_turn_arrow(2);
        assert_eq!(odd.transforms[0], Transform::Translate(Vec3::new(0.0, 1.5, 1.5)));
        assert_eq!(even.transforms[0], Transform::Translate(Vec3::new(-1.5, 1.5, 0.0)));
        for arrow in [odd, even] {
            assert_eq!(arrow.color, WHITE);
            assert_eq!(arrow.amount, RotationAmount::QuarterTurn);
            assert_eq!(&arrow.transforms[3..5], &REVERSE);
            assert_eq!(arrow.transforms.last(), Some(&Transform::Scale(Vec3::new(1.0, 1.0, 3.0))));
        }
    }
}
