use serde::Serialize;

/// Phase of the conversion pipeline, published for the presentation layer.
///
/// `Ready` and `Failed` are terminal for one conversion; a new request
/// restarts the cycle from `Chunking` (or `Summarizing` for over-length
/// input).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    Idle,
    Summarizing,
    Chunking,
    Synthesizing {
        completed: usize,
        total: usize,
    },
    Assembling,
    Ready,
    Failed {
        message: String,
    },
}
