/// Content type of every asset the pipeline produces. Polly returns MP3
/// frames and concatenated MP3 frames stay playable, so assembly is a plain
/// byte-level join under this one type.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// One playable audio asset, assembled from per-chunk synthesis results.
///
/// Never persisted; the presentation layer owns it for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledAudio {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl AssembledAudio {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Concatenate per-chunk audio buffers preserving input order.
///
/// No re-encoding and no validation of the inner frames. An empty input
/// yields an empty asset; the caller decides whether that is presentable.
pub fn assemble(buffers: Vec<Vec<u8>>) -> AssembledAudio {
    let total: usize = buffers.iter().map(Vec::len).sum();
    let mut bytes = Vec::with_capacity(total);
    for buffer in buffers {
        bytes.extend(buffer);
    }

    AssembledAudio {
        bytes,
        content_type: AUDIO_CONTENT_TYPE,
    }
}
