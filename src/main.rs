use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use cube_guide::painter::{PaintCall, RecordingPainter};
use cube_guide::{AppState, FrameSnapshot, Guide, GuideConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Replay a recorded frame snapshot (JSON)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Application state, when no snapshot is given
    #[arg(long, default_value = "DO_MOVE")]
    state: AppState,

    /// Solver moves separated by spaces, like "U R2 F'"
    #[arg(long, default_value = "")]
    moves: String,

    /// Index of the move to show
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Number of faces observed so far
    #[arg(long, default_value_t = 0)]
    faces: usize,

    #[arg(long)]
    no_text: bool,

    #[arg(long)]
    no_cube_overlay: bool,

    #[arg(long)]
    no_pilot: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let snapshot = match &args.snapshot {
        Some(path) => {
            let loaded = std::fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|json| FrameSnapshot::from_json(&json).map_err(|e| e.to_string()));
            match loaded {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    error!("Cannot read snapshot {}: {e}", path.display());
                    return ExitCode::FAILURE;
                }
            }
        }
        None => FrameSnapshot {
            moves: args.moves.split_whitespace().map(String::from).collect(),
            move_index: args.index,
            observed_faces: args.faces,
            ..FrameSnapshot::new(args.state)
        },
    };

    let guide = Guide::new(GuideConfig {
        user_text_display: !args.no_text,
        render_cube_overlay: !args.no_cube_overlay,
        render_pilot_cube: !args.no_pilot,
        ..GuideConfig::default()
    });
    let mut painter = RecordingPainter::new();
    match guide.frame(&snapshot, &mut painter) {
        Ok(report) => {
            info!(
                "{}: valid pose {}, arrow drawn {}",
                snapshot.app_state, report.estimate.is_valid, report.arrow_drawn
            );
            for call in &painter.calls {
                match call {
                    PaintCall::Arrow { amount, color, model } => {
                        println!("Arrow {amount} {color:?} at {}", model.transform_point3(glam::Vec3::ZERO))
                    }
                    PaintCall::Cube { style, model } => {
                        println!("Cube {style:?} at {}", model.transform_point3(glam::Vec3::ZERO))
                    }
                    other => println!("{other:?}"),
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Guidance stopped: {e}");
            ExitCode::FAILURE
        }
    }
}
