use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// An alignment score.
///
/// The largest magnitude a solve can reach is
/// `max|weight| * (sum of sequence lengths) * N(N-1)/2`: every column of
/// an alignment consumes at least one symbol, and every column scores
/// N(N-1)/2 pairs. With `i32` weights that stays below `i64::MAX` for any
/// lattice small enough to allocate.
pub type Score = i64;

/// The four weights of the linear scoring scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreParams {
    /// The reward for a pair of identical symbols
    #[serde(rename = "match")]
    pub match_score: i32,
    /// The score for a pair of differing symbols
    #[serde(rename = "mismatch")]
    pub mismatch_score: i32,
    /// The score for a pair of one symbol and one gap
    #[serde(rename = "gap")]
    pub gap_score: i32,
    /// The score for a pair of two gaps
    #[serde(rename = "twogaps")]
    pub two_gaps_score: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: 5,
            mismatch_score: -2,
            gap_score: -4,
            two_gaps_score: 0,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32, two_gaps_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
            two_gaps_score,
        }
    }

    /// Load parameters from a JSON object; omitted weights keep their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse score parameters")
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "failed to read score parameter file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;
        Self::from_json_str(&json)
    }

    /// The largest absolute weight.
    pub fn max_magnitude(&self) -> Score {
        [
            self.match_score,
            self.mismatch_score,
            self.gap_score,
            self.two_gaps_score,
        ]
        .iter()
        .map(|w| (*w as Score).abs())
        .max()
        .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ScoreParams::default();
        assert_eq!(params, ScoreParams::new(5, -2, -4, 0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() -> anyhow::Result<()> {
        let params = ScoreParams::from_json_str(r#"{ "match": 2, "twogaps": -1 }"#)?;
        assert_eq!(params.match_score, 2);
        assert_eq!(params.mismatch_score, -2);
        assert_eq!(params.gap_score, -4);
        assert_eq!(params.two_gaps_score, -1);
        Ok(())
    }

    #[test]
    fn test_bad_json() {
        assert!(ScoreParams::from_json_str(r#"{ "match": "five" }"#).is_err());
    }

    #[test]
    fn test_max_magnitude() {
        assert_eq!(ScoreParams::default().max_magnitude(), 5);
        assert_eq!(ScoreParams::new(1, -9, 0, 0).max_magnitude(), 9);
    }
}
