//! Test helpers shared by the simulation tests

use std::collections::VecDeque;

use super::rng::RandomSource;

/// Hands out pre-chosen values and records every range it was asked for
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<i32>,
    calls: Vec<(i32, i32)>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[(i32, i32)] {
        &self.calls
    }
}

impl RandomSource for ScriptedRandom {
    /// Next scripted value, or `min` once the script runs out
    fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.calls.push((min, max));
        self.values.pop_front().unwrap_or(min)
    }
}
