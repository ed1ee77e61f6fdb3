pub use crate::error::GuideError;
pub use crate::guide::{FrameReport, Guide, GuideConfig};
pub use crate::snapshot::{AppState, FrameSnapshot};

pub mod arrow;
pub mod error;
pub mod guide;
pub mod instruction;
pub mod move_token;
pub mod orientation;
pub mod painter;
pub mod snapshot;
pub mod units;
