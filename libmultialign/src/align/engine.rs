use log::{debug, info};

use crate::align::cancel::CancelToken;
use crate::align::moves::MAX_SEQUENCES;
use crate::align::needleman_wunsch::needleman_wunsch;
use crate::align::smith_waterman::{smith_waterman, LocalBest};
use crate::align::structs::{
    AlignmentMatrix, EngineConfig, GlobalAlignment, LocalAlignment, Recurrence, Score,
    ScoreParams, Strategy,
};
use crate::align::traceback::{traceback_global, traceback_local};
use crate::align::wavefront::{wavefront_needleman_wunsch, wavefront_smith_waterman};
use crate::error::AlignError;
use crate::structs::Sequence;

/// The outcome of a completed solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Global { score: Score },
    Local(LocalBest),
}

impl Solution {
    pub fn score(&self) -> Score {
        match self {
            Solution::Global { score } => *score,
            Solution::Local(best) => best.score,
        }
    }

    pub fn recurrence(&self) -> Recurrence {
        match self {
            Solution::Global { .. } => Recurrence::Global,
            Solution::Local(_) => Recurrence::Local,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum EngineState {
    #[default]
    Unsolved,
    Solved(Solution),
}

/// Owns the alignment matrix for a set of sequences and runs one recurrence over it.
///
/// Results can only be read after a successful [`solve`](Engine::solve).
/// Solving again recomputes the matrix from scratch and produces the same result.
#[derive(Debug)]
pub struct Engine<'a> {
    sequences: &'a [Sequence],
    config: EngineConfig,
    matrix: AlignmentMatrix,
    state: EngineState,
}

impl<'a> Engine<'a> {
    pub fn new(sequences: &'a [Sequence], config: EngineConfig) -> Result<Self, AlignError> {
        validate(sequences)?;
        let lengths: Vec<usize> = sequences.iter().map(|s| s.length).collect();
        let matrix = AlignmentMatrix::new(&lengths)?;

        debug!(
            "allocated a {}-dimensional matrix of {} cells for {} alignment",
            matrix.dimensions(),
            matrix.len(),
            config.recurrence
        );

        Ok(Self {
            sequences,
            config,
            matrix,
            state: EngineState::Unsolved,
        })
    }

    pub fn global(sequences: &'a [Sequence], params: ScoreParams) -> Result<Self, AlignError> {
        Self::new(sequences, EngineConfig::global(params))
    }

    pub fn local(sequences: &'a [Sequence], params: ScoreParams) -> Result<Self, AlignError> {
        Self::new(sequences, EngineConfig::local(params))
    }

    pub fn solve(&mut self) -> Result<&Solution, AlignError> {
        self.solve_with_cancel(&CancelToken::new())
    }

    /// Fill the matrix, stopping early if `cancel` is triggered.
    ///
    /// A cancelled solve leaves the engine unsolved.
    pub fn solve_with_cancel(&mut self, cancel: &CancelToken) -> Result<&Solution, AlignError> {
        validate(self.sequences)?;
        self.state = EngineState::Unsolved;

        let params = &self.config.params;
        let matrix = &mut self.matrix;
        let sequences = self.sequences;

        let result = match (self.config.recurrence, self.config.strategy) {
            (Recurrence::Global, Strategy::Sequential) => {
                needleman_wunsch(matrix, sequences, params, cancel)
                    .map(|score| Solution::Global { score })
            }
            (Recurrence::Global, Strategy::Wavefront) => {
                wavefront_needleman_wunsch(matrix, sequences, params, cancel)
                    .map(|score| Solution::Global { score })
            }
            (Recurrence::Local, Strategy::Sequential) => {
                smith_waterman(matrix, sequences, params, cancel).map(Solution::Local)
            }
            (Recurrence::Local, Strategy::Wavefront) => {
                wavefront_smith_waterman(matrix, sequences, params, cancel).map(Solution::Local)
            }
        };

        match result {
            Ok(solution) => {
                debug!(
                    "{} {} solve finished with score {}",
                    self.config.strategy,
                    self.config.recurrence,
                    solution.score()
                );
                self.state = EngineState::Solved(solution);
                self.solution()
            }
            Err(err) => {
                if let AlignError::Cancelled { .. } = err {
                    info!("{} solve cancelled", self.config.recurrence);
                }
                Err(err)
            }
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, EngineState::Solved(_))
    }

    pub fn solution(&self) -> Result<&Solution, AlignError> {
        match &self.state {
            EngineState::Solved(solution) => Ok(solution),
            EngineState::Unsolved => Err(AlignError::NotSolved),
        }
    }

    fn expect_recurrence(&self, requested: Recurrence) -> Result<(), AlignError> {
        if self.config.recurrence != requested {
            return Err(AlignError::WrongRecurrence {
                requested,
                solved: self.config.recurrence,
            });
        }
        Ok(())
    }

    /// The optimal global alignment score.
    pub fn global_score(&self) -> Result<Score, AlignError> {
        let solution = self.solution()?;
        self.expect_recurrence(Recurrence::Global)?;
        Ok(solution.score())
    }

    /// Trace back the optimal global alignment.
    pub fn global_alignment(&self) -> Result<GlobalAlignment, AlignError> {
        let score = self.global_score()?;
        let trace = traceback_global(&self.matrix)?;
        Ok(GlobalAlignment::new(score, &trace, self.sequences))
    }

    /// The best local score and the coordinate where it was found.
    pub fn local_best(&self) -> Result<&LocalBest, AlignError> {
        let solution = self.solution()?;
        self.expect_recurrence(Recurrence::Local)?;
        match solution {
            Solution::Local(best) => Ok(best),
            Solution::Global { .. } => Err(AlignError::WrongRecurrence {
                requested: Recurrence::Local,
                solved: Recurrence::Global,
            }),
        }
    }

    /// The optimal local alignment score, never negative.
    pub fn local_score(&self) -> Result<Score, AlignError> {
        Ok(self.local_best()?.score)
    }

    /// Trace back the optimal local alignment.
    pub fn local_alignment(&self) -> Result<LocalAlignment, AlignError> {
        let best = self.local_best()?;
        let trace = traceback_local(&self.matrix, &best.end)?;
        Ok(LocalAlignment::new(best.score, &trace, self.sequences))
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sequences(&self) -> &[Sequence] {
        self.sequences
    }
}

fn validate(sequences: &[Sequence]) -> Result<(), AlignError> {
    if sequences.len() < 2 {
        return Err(AlignError::InvalidInput {
            count: sequences.len(),
        });
    }

    // empty sequences never consume, so they take no bit in a move mask
    let non_empty = sequences.iter().filter(|s| s.length > 0).count();
    if non_empty > MAX_SEQUENCES {
        return Err(AlignError::TooManySequences {
            count: non_empty,
            max: MAX_SEQUENCES,
        });
    }
    Ok(())
}
