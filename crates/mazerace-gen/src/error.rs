/// Errors raised before any carving starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// A requested dimension is outside
    /// [`MIN_REQUEST`](crate::MIN_REQUEST)..=[`MAX_SIDE`](crate::MAX_SIDE).
    #[error(
        "invalid maze size {width}x{height}: sides must be between {} and {}",
        crate::MIN_REQUEST,
        crate::MAX_SIDE
    )]
    InvalidSize { width: i32, height: i32 },
    /// The dead-end percentage is above 100.
    #[error("invalid dead-end percentage {0}: must be between 0 and 100")]
    InvalidDeadEndPercent(u32),
}
