use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_PREVIEW_FACTOR: u32 = 4;
const DEFAULT_PREVIEW_WEIGHT: u8 = 10;
const DEFAULT_STRIPE_HEIGHT: u32 = 50;
const DEFAULT_SUPERSEDE_TIMEOUT_MS: u64 = 500;

/// Tuning for the stripe scheduler and the compute coordinator.
///
/// Missing fields fall back to their defaults when deserialising, so a
/// settings file only needs to name what it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeSettings {
    /// Linear reduction of the preview canvas.
    pub preview_factor: u32,
    /// Progress percentage credited once the preview is delivered.
    pub preview_weight: u8,
    pub stripe_height: u32,
    /// How long a new submission waits for the superseded job to stop.
    pub supersede_timeout_ms: u64,
    /// Rayon pool size; `None` lets rayon pick one per core.
    pub worker_threads: Option<usize>,
}

impl Default for ComputeSettings {
    fn default() -> Self {
        Self {
            preview_factor: DEFAULT_PREVIEW_FACTOR,
            preview_weight: DEFAULT_PREVIEW_WEIGHT,
            stripe_height: DEFAULT_STRIPE_HEIGHT,
            supersede_timeout_ms: DEFAULT_SUPERSEDE_TIMEOUT_MS,
            worker_threads: None,
        }
    }
}

impl ComputeSettings {
    #[must_use]
    pub fn preview_factor(&self) -> NonZeroU32 {
        NonZeroU32::new(self.preview_factor).unwrap_or(NonZeroU32::MIN)
    }

    #[must_use]
    pub fn preview_weight(&self) -> u8 {
        self.preview_weight.min(100)
    }

    #[must_use]
    pub fn stripe_height(&self) -> NonZeroU32 {
        NonZeroU32::new(self.stripe_height).unwrap_or(NonZeroU32::MIN)
    }

    #[must_use]
    pub fn supersede_timeout(&self) -> Duration {
        Duration::from_millis(self.supersede_timeout_ms)
    }
}
