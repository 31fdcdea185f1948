//! Seeded, replayable random self-maps and marked trees.
//!
//! Purpose
//! - Provide reproducible inputs for property tests, benches and demo
//!   commands. Determinism uses a replay token `(seed, index)` mixed into
//!   a single RNG, so a draw can be regenerated from its token alone.
//!
//! Model
//! - A uniform draw over all `n^n` total functions, pushed through the
//!   function -> tree direction, is a uniform draw over marked trees;
//!   that is the bijection doing the sampling.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bijection::function_to_tree;
use crate::func::SelfMap;
use crate::tree::Tree;

/// Error type shared by the samplers.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Domain size; functions map `[0, n)` to itself.
    pub n: usize,
}

impl SampleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        if self.n == 0 {
            return Err(SampleError::invalid("need at least one vertex"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Uniform random total self-map on `[0, n)`.
pub fn self_map(cfg: &SampleCfg, tok: ReplayToken) -> Result<SelfMap, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let values: Vec<usize> = (0..cfg.n).map(|_| rng.gen_range(0..cfg.n)).collect();
    Ok(SelfMap::from_values_unchecked(values))
}

/// Uniform random marked tree `(tree, start, end)` on `n` vertices.
pub fn marked_tree(
    cfg: &SampleCfg,
    tok: ReplayToken,
) -> Result<(Tree, usize, usize), SampleError> {
    let f = self_map(cfg, tok)?;
    let back = function_to_tree(&f);
    let (start, end) = back
        .marks()
        .ok_or_else(|| SampleError::degenerate("empty vertebra"))?;
    let tree = back
        .to_tree(cfg.n)
        .map_err(|e| SampleError::degenerate(format!("edge set is not a tree: {e}")))?;
    Ok((tree, start, end))
}
