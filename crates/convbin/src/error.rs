use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// Failures surfaced by the encoders and readers.
///
/// Validation variants are reported before any file is opened, so a failed
/// encode never leaves a partial file behind. I/O failures mid-write leave
/// the destination truncated; callers retry by overwriting.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unsupported rank {rank}: the format stores at most 3 axes")]
    UnsupportedRank { rank: usize },
    #[error("rank mismatch: expected rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid label {value}: labels must be non-negative")]
    NegativeLabel { value: i64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
