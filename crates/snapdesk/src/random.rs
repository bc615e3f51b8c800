//! Random sources for window placement and color
//!
//! The engine never calls the platform directly so tests can script exact
//! positions and hues.

use std::collections::VecDeque;
use crate::error::{DesktopError, DesktopResult};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> DesktopResult<u32>;

    /// Uniform value in `[0, bound)`; `bound` of 0 always yields 0
    ///
    /// Draws at or above the largest multiple of `bound` are rejected and
    /// redrawn so every residue is equally likely.
    fn below(&mut self, bound: u32) -> DesktopResult<u32> {
        if bound == 0 {
            return Ok(0);
        }
        let bound = u64::from(bound);
        let limit = (u64::from(u32::MAX) + 1) / bound * bound;
        loop {
            let value = u64::from(self.next_u32()?);
            if value < limit {
                return Ok((value % bound) as u32);
            }
        }
    }
}

/// Platform entropy via `getrandom` (crypto.getRandomValues on wasm32)
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> DesktopResult<u32> {
        let mut bytes = [0u8; 4];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| DesktopError::Entropy(format!("random draw failed: {:?}", e)))?;
        Ok(u32::from_le_bytes(bytes))
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Create a source that yields `values` in order
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: values.into(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u32(&mut self) -> DesktopResult<u32> {
        let value = self
            .values
            .pop_front()
            .ok_or_else(|| DesktopError::Entropy("scripted source is empty".to_string()))?;
        self.values.push_back(value);
        Ok(value)
    }
}
