//! High-level runtime engine settings
//!
//! Frame clock (per-frame clamp and time scale), the pause flag and the
//! visualization toggles handed down from the controls

/// Smallest positive value accepted for the clock settings
pub const MIN_CLOCK_VALUE: f64 = 1.0e-6;

#[derive(Debug, Clone)]
pub struct Engine {
    pub max_dt: f64, // clamp on the raw frame time before scaling
    pub time_scale: f64, // multiplies the clamped frame time
    pub paused: bool, // freezes every update
    pub disks_enabled: bool, // gates the disk particle updates
    pub lensing_enabled: bool, // only read by the lensing collaborator
    pub waves_enabled: bool, // only read by the wave collaborator
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            max_dt: 0.016,
            time_scale: 1.0,
            paused: false,
            disks_enabled: true,
            lensing_enabled: true,
            waves_enabled: true,
        }
    }
}

impl Engine {
    /// Simulated step for one frame: `min(elapsed, max_dt) * time_scale`.
    ///
    /// Returns `None` while paused or when the step would not move time forward,
    /// in which case nothing in the simulation may change.
    pub fn frame_dt(&self, elapsed: f64) -> Option<f64> {
        if self.paused {
            return None;
        }
        let dt = elapsed.min(self.max_dt) * self.time_scale;
        if dt > 0.0 && dt.is_finite() {
            Some(dt)
        } else {
            None
        }
    }
}
