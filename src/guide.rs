use log::debug;

use crate::error::GuideError;
use crate::instruction::Instruction;
use crate::orientation::OrientationEstimate;
use crate::painter::{CubeStyle, Painter, GREEN, RED};
use crate::snapshot::FrameSnapshot;

/// Number of solver pruning tables that must be loaded before solving is quick
pub const PRELOAD_TARGET: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideConfig {
    pub user_text_display: bool,
    /// Outline the cube where the scene thinks it is
    pub render_cube_overlay: bool,
    pub render_pilot_cube: bool,
    pub preload_target: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            user_text_display: true,
            render_cube_overlay: true,
            render_pilot_cube: true,
            preload_target: PRELOAD_TARGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub instruction: Instruction,
    pub estimate: OrientationEstimate,
    pub arrow_drawn: bool,
}

/// Runs once per rendered frame. Holds configuration only; every frame starts
/// from the snapshot it is handed.
#[derive(Debug, Clone, Default)]
pub struct Guide {
    pub config: GuideConfig,
}

impl Guide {
    pub fn new(config: GuideConfig) -> Self {
        Self { config }
    }

    pub fn frame(
        &self,
        snapshot: &FrameSnapshot,
        painter: &mut impl Painter,
    ) -> Result<FrameReport, GuideError> {
        let instruction = Instruction::select(snapshot)?;
        self.draw_text(&instruction, painter);
        self.draw_indicator(snapshot, painter);
        let estimate = OrientationEstimate::estimate(snapshot.tracked_face.as_ref(), snapshot.placement);
        let arrow_drawn = self.draw_overlay(&instruction, &estimate, painter);
        if self.config.render_pilot_cube && estimate.is_valid {
            estimate.draw_pilot(painter);
        }
        Ok(FrameReport {
            instruction,
            estimate,
            arrow_drawn,
        })
    }

    fn draw_text(&self, instruction: &Instruction, painter: &mut impl Painter) {
        if !self.config.user_text_display && !instruction.always_shown {
            return;
        }
        for line in &instruction.lines {
            painter.draw_text(&line.text, line.position, line.scale);
        }
    }

    fn draw_indicator(&self, snapshot: &FrameSnapshot, painter: &mut impl Painter) {
        let color = if snapshot.preload_count < self.config.preload_target {
            RED
        } else {
            GREEN
        };
        painter.draw_indicator(color);
    }

    fn draw_overlay(
        &self,
        instruction: &Instruction,
        estimate: &OrientationEstimate,
        painter: &mut impl Painter,
    ) -> bool {
        if !instruction.wants_overlay {
            return false;
        }
        if !estimate.place_scene(painter) {
            debug!("Cube not tracked, no overlay");
            return false;
        }
        if self.config.render_cube_overlay {
            painter.draw_cube(CubeStyle::Overlay);
        }
        match &instruction.overlay {
            Some(arrow) => {
                arrow.draw(painter);
                true
            }
            None => false,
        }
    }
}
