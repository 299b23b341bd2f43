use crate::error::GenError;

/// Smallest side accepted by [`MazeConfig::normalized`]. Anything below is
/// rejected rather than producing a degenerate grid.
pub const MIN_REQUEST: i32 = 3;

/// Smallest side of a generated maze. Smaller valid requests are raised to
/// this.
pub const MIN_SIDE: i32 = 9;

/// Largest side accepted, and the cap for [`MazeConfig::resized`].
pub const MAX_SIDE: i32 = 999;

/// Parameters for maze generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Requested number of columns.
    pub width: i32,
    /// Requested number of rows.
    pub height: i32,
    /// Share of the discovered dead ends, in percent, that get an extra
    /// opening to a neighbouring corridor.
    pub dead_end_percent: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 31,
            height: 21,
            dead_end_percent: 50,
        }
    }
}

impl MazeConfig {
    /// A config with the given size and the default dead-end share.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validate and normalize: even sides are bumped to the next odd
    /// number, then raised to at least [`MIN_SIDE`].
    pub fn normalized(self) -> Result<Self, GenError> {
        let valid = MIN_REQUEST..=MAX_SIDE;
        if !valid.contains(&self.width) || !valid.contains(&self.height) {
            return Err(GenError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.dead_end_percent > 100 {
            return Err(GenError::InvalidDeadEndPercent(self.dead_end_percent));
        }
        Ok(Self {
            width: normalize_side(self.width),
            height: normalize_side(self.height),
            ..self
        })
    }

    /// The same config with `delta` added to each side, capped at
    /// [`MAX_SIDE`]. A shrink only happens while both sides are above
    /// [`MIN_SIDE`]; otherwise the config is returned unchanged.
    pub fn resized(self, delta: i32) -> Self {
        if delta < 0 && (self.width <= MIN_SIDE || self.height <= MIN_SIDE) {
            return self;
        }
        let side = |n: i32| n.saturating_add(delta).clamp(MIN_SIDE, MAX_SIDE);
        Self {
            width: side(self.width),
            height: side(self.height),
            ..self
        }
    }
}

fn normalize_side(n: i32) -> i32 {
    let odd = if n % 2 == 0 { n + 1 } else { n };
    odd.max(MIN_SIDE)
}
