/*
 * Error Module
 *
 * Errors raised while configuring a night sky run. Everything that happens
 * once the sky is running (depth walk, slider, colour channels) clamps instead
 * of failing, so these only surface at startup.
 */

use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkyError {
    /// The per-type cap can never add up to the requested population.
    #[error(
        "cannot spawn {total_count} objects with at most {per_type_cap} of each of {type_count} types"
    )]
    UnsatisfiableSpawn {
        total_count: usize,
        per_type_cap: usize,
        type_count: usize,
    },

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(f32),

    #[error("weighted sampling failed: {0}")]
    Sampling(#[from] WeightedError),
}
