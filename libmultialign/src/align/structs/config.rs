use derive_builder::Builder;
use strum::{Display, EnumIter, EnumString};

use super::ScoreParams;

/// Which scoring recurrence fills the lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Recurrence {
    /// Needleman-Wunsch: end-to-end alignment of every sequence
    #[default]
    Global,
    /// Smith-Waterman: best-scoring contiguous substrings, floored at zero
    Local,
}

/// How the lattice is traversed while solving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// One coordinate at a time, in odometer order
    #[default]
    Sequential,
    /// One wavefront (constant coordinate sum) at a time, cells in parallel
    Wavefront,
}

#[derive(Builder, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[builder(default)]
pub struct EngineConfig {
    pub recurrence: Recurrence,
    pub strategy: Strategy,
    pub params: ScoreParams,
}

impl EngineConfig {
    pub fn global(params: ScoreParams) -> Self {
        Self {
            recurrence: Recurrence::Global,
            params,
            ..Default::default()
        }
    }

    pub fn local(params: ScoreParams) -> Self {
        Self {
            recurrence: Recurrence::Local,
            params,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_recurrence_names() {
        assert_eq!(Recurrence::Global.to_string(), "global");
        assert_eq!(Recurrence::from_str("local").ok(), Some(Recurrence::Local));
        assert!(Recurrence::from_str("semiglobal").is_err());
    }

    #[test]
    fn test_builder() -> anyhow::Result<()> {
        let config = EngineConfigBuilder::default()
            .recurrence(Recurrence::Local)
            .strategy(Strategy::Wavefront)
            .build()?;

        assert_eq!(config.recurrence, Recurrence::Local);
        assert_eq!(config.strategy, Strategy::Wavefront);
        assert_eq!(config.params, ScoreParams::default());
        Ok(())
    }
}
