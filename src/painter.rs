use glam::{Mat4, Vec2, Vec3};

use crate::move_token::RotationAmount;
use crate::units::Degrees;

pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];

/// How the reference cube is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeStyle {
    /// Outline over the physical cube in the camera view
    Overlay,
    /// Small pilot cube beside the view, shown only while tracking
    Pilot,
}

/// The drawing collaborator. Meshes, shaders and the matrix stack live behind this.
pub trait Painter {
    /// Reset the model matrix at the start of a 3D pass
    fn load_identity(&mut self);

    fn translate(&mut self, offset: Vec3);

    fn rotate(&mut self, angle: Degrees, axis: Vec3);

    fn scale(&mut self, factors: Vec3);

    fn draw_arrow(&mut self, amount: RotationAmount, color: Rgba);

    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32);

    fn draw_cube(&mut self, _style: CubeStyle) {}

    /// The thin bar along the top edge of the view
    fn draw_indicator(&mut self, _color: Rgba) {}
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCall {
    LoadIdentity,
    Translate(Vec3),
    Rotate(Degrees, Vec3),
    Scale(Vec3),
    Arrow {
        amount: RotationAmount,
        color: Rgba,
        model: Mat4,
    },
    Text {
        text: String,
        position: Vec2,
        scale: f32,
    },
    Cube {
        style: CubeStyle,
        model: Mat4,
    },
    Indicator(Rgba),
}

/// Keeps every call along with the model matrix a fixed-function pipeline
/// would have built, so the arrow placement can be inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    pub calls: Vec<PaintCall>,
    model: Mat4,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            model: Mat4::IDENTITY,
        }
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn arrows(&self) -> impl Iterator<Item = (RotationAmount, Rgba, Mat4)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            PaintCall::Arrow { amount, color, model } => Some((*amount, *color, *model)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|call| match call {
            PaintCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn cubes(&self) -> impl Iterator<Item = CubeStyle> + '_ {
        self.calls.iter().filter_map(|call| match call {
            PaintCall::Cube { style, .. } => Some(*style),
            _ => None,
        })
    }

    pub fn indicator(&self) -> Option<Rgba> {
        self.calls.iter().find_map(|call| match call {
            PaintCall::Indicator(color) => Some(*color),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn load_identity(&mut self) {
        self.model = Mat4::IDENTITY;
        self.calls.push(PaintCall::LoadIdentity);
    }

    fn translate(&mut self, offset: Vec3) {
        self.model *= Mat4::from_translation(offset);
        self.calls.push(PaintCall::Translate(offset));
    }

    fn rotate(&mut self, angle: Degrees, axis: Vec3) {
        self.model *= Mat4::from_axis_angle(axis.normalize(), angle.radians());
        self.calls.push(PaintCall::Rotate(angle, axis));
    }

    fn scale(&mut self, factors: Vec3) {
        self.model *= Mat4::from_scale(factors);
        self.calls.push(PaintCall::Scale(factors));
    }

    fn draw_arrow(&mut self, amount: RotationAmount, color: Rgba) {
        self.calls.push(PaintCall::Arrow {
            amount,
            color,
            model: self.model,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32) {
        self.calls.push(PaintCall::Text {
            text: text.to_string(),
            position,
            scale,
        });
    }

    fn draw_cube(&mut self, style: CubeStyle) {
        self.calls.push(PaintCall::Cube {
            style,
            model: self.model,
        });
    }

    fn draw_indicator(&mut self, color: Rgba) {
        self.calls.push(PaintCall::Indicator(color));
    }
}
