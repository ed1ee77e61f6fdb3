use std::fmt;

/// Upstream contract violations. None of these can be drawn around:
/// the move list handed over by the solver is corrupt or exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// The move token was empty
    EmptyMove,
    /// The first character of a move token is not one of U, D, L, R, F, B
    UnrecognizedFace { token: String },
    /// The modifier of a move token is neither `'` nor `2`
    UnrecognizedRotation { token: String },
    /// The solution index points past the end of the move list
    MoveIndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for GuideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuideError::EmptyMove => write!(f, "Empty move token"),
            GuideError::UnrecognizedFace { token } => {
                write!(f, "Unrecognized face in move {token:?}")
            }
            GuideError::UnrecognizedRotation { token } => {
                write!(f, "Unrecognized rotation amount in move {token:?}")
            }
            GuideError::MoveIndexOutOfRange { index, len } => {
                write!(f, "Move index {index} out of range for {len} moves")
            }
        }
    }
}

impl std::error::Error for GuideError {}
