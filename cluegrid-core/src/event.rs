use crate::board::Board;

/// Events that arrive asynchronously from background tasks.
/// These get merged into the main event loop alongside keyboard input.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A background acquisition produced a complete game dataset
    GameReady { board: Board },

    /// A background acquisition failed
    AcquisitionFailed { error: String },
}
