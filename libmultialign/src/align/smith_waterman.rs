use log::debug;

use crate::align::cancel::CancelToken;
use crate::align::moves::{best_transition, MoveEnumerator};
use crate::align::structs::{AlignmentMatrix, Cell, Coordinate, Odometer, Score, ScoreParams};
use crate::error::AlignError;
use crate::structs::Sequence;

/// The highest scoring cell of a local alignment matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalBest {
    pub score: Score,
    /// Where the best local alignment ends
    pub end: Coordinate,
}

impl LocalBest {
    pub(crate) fn empty(dimensions: usize) -> Self {
        Self {
            score: 0,
            end: Coordinate::origin(dimensions),
        }
    }
}

/// Solve one cell of the local recurrence.
///
/// The cell takes the best candidate if it is positive. Otherwise the cell
/// scores 0 with no predecessor, which makes it a place where a local
/// alignment can start.
pub(crate) fn local_cell(
    matrix: &AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    coordinate: &Coordinate,
    idx: usize,
) -> Result<Cell, AlignError> {
    let enumerator = MoveEnumerator::new(coordinate, sequences);
    match best_transition(matrix, &enumerator, idx, params)? {
        Some((score, predecessor_idx)) if score > 0 => {
            Ok(Cell::solved(score, Some(predecessor_idx)))
        }
        _ => Ok(Cell::solved(0, None)),
    }
}

/// Find the best cell of a (possibly partially) solved local matrix.
///
/// Cells are scanned in traversal order and the best only changes on a
/// strict improvement, so ties keep the earliest cell.
pub(crate) fn scan_local_best(matrix: &AlignmentMatrix) -> LocalBest {
    let mut best_score: Score = 0;
    let mut best_idx: usize = 0;

    for (idx, cell) in matrix.cells().iter().enumerate() {
        if let Some(score) = cell.score() {
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
    }

    LocalBest {
        score: best_score,
        end: matrix.coordinate_of(best_idx),
    }
}

/// Fill the matrix with the N-dimensional Smith-Waterman recurrence.
///
/// Returns the highest scoring cell, which is where the optimal local
/// alignment ends. On cancellation, the best cell solved so far is reported
/// as a partial answer.
pub fn smith_waterman(
    matrix: &mut AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    cancel: &CancelToken,
) -> Result<LocalBest, AlignError> {
    debug_assert_eq!(matrix.dimensions(), sequences.len());

    let odometer = Odometer::new(sequences.iter().map(|s| s.length).collect());

    matrix.reset();
    matrix.set_idx(0, Cell::solved(0, None));

    let mut best_score: Score = 0;
    let mut best_idx: usize = 0;

    let cancelled = |best_score: Score, best_idx: usize, matrix: &AlignmentMatrix| {
        AlignError::Cancelled {
            partial: Some(LocalBest {
                score: best_score,
                end: matrix.coordinate_of(best_idx),
            }),
        }
    };

    if cancel.is_cancelled() {
        return Err(cancelled(best_score, best_idx, matrix));
    }

    for (idx, coordinate) in (1..).zip(odometer.iter()) {
        debug_assert_eq!(matrix.index_of(&coordinate), Ok(idx));

        if coordinate[0] == 0 && cancel.is_cancelled() {
            return Err(cancelled(best_score, best_idx, matrix));
        }

        let cell = local_cell(matrix, sequences, params, &coordinate, idx)?;
        if let Some(score) = cell.score() {
            // strict improvement: ties keep the earliest cell
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
        matrix.set_idx(idx, cell);
    }

    let best = LocalBest {
        score: best_score,
        end: matrix.coordinate_of(best_idx),
    };
    debug!(
        "local recurrence filled {} cells, score: {} ending at {}",
        matrix.len(),
        best.score,
        best.end
    );
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn solve(seqs: &[&[u8]], params: &ScoreParams) -> Result<(AlignmentMatrix, LocalBest)> {
        let seqs: Vec<Sequence> = seqs
            .iter()
            .map(|s| Sequence::from_utf8(s))
            .collect::<Result<_>>()?;
        let lengths: Vec<usize> = seqs.iter().map(|s| s.length).collect();
        let mut matrix = AlignmentMatrix::new(&lengths)?;
        let best = smith_waterman(&mut matrix, &seqs, params, &CancelToken::new())?;
        Ok((matrix, best))
    }

    #[test]
    fn test_shared_substring() -> Result<()> {
        let (_, best) = solve(&[b"TTTACGTTT", b"GGACGGG"], &ScoreParams::default())?;
        assert_eq!(best.score, 3 * 5);
        assert_eq!(best.end, Coordinate::new(vec![6, 5]));
        Ok(())
    }

    #[test]
    fn test_no_shared_symbols() -> Result<()> {
        let (matrix, best) = solve(&[b"AAAA", b"CCCC"], &ScoreParams::default())?;
        assert_eq!(best, LocalBest::empty(2));
        assert!(matrix
            .cells()
            .iter()
            .all(|c| *c == Cell::solved(0, None)));
        Ok(())
    }

    #[test]
    fn test_scores_are_never_negative() -> Result<()> {
        let (matrix, _) = solve(&[b"ACGTAC", b"TGCA", b"AAGC"], &ScoreParams::default())?;
        for cell in matrix.cells() {
            match cell {
                Cell::Solved {
                    score,
                    predecessor_idx,
                } => {
                    assert!(*score >= 0);
                    // a cell without a predecessor is a restart boundary
                    if predecessor_idx.is_none() {
                        assert_eq!(*score, 0);
                    }
                }
                Cell::Unset => panic!("unset cell after solve"),
            }
        }
        Ok(())
    }

    #[test]
    fn test_ties_keep_the_earliest_cell() -> Result<()> {
        // "A" matches at two places with the same score
        let (_, best) = solve(&[b"ACA", b"A"], &ScoreParams::default())?;
        assert_eq!(best.score, 5);
        assert_eq!(best.end, Coordinate::new(vec![1, 1]));
        Ok(())
    }

    #[test]
    fn test_scan_agrees_with_running_best() -> Result<()> {
        let (matrix, best) = solve(&[b"GATTACA", b"TACAGAT", b"ATTAC"], &ScoreParams::default())?;
        assert_eq!(scan_local_best(&matrix), best);
        Ok(())
    }

    #[test]
    fn test_cancelled_reports_partial() -> Result<()> {
        let seqs = vec![Sequence::from_utf8(b"ACGT")?, Sequence::from_utf8(b"ACGT")?];
        let mut matrix = AlignmentMatrix::new(&[4, 4])?;
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = smith_waterman(&mut matrix, &seqs, &ScoreParams::default(), &cancel);
        assert_eq!(
            result,
            Err(AlignError::Cancelled {
                partial: Some(LocalBest::empty(2))
            })
        );
        Ok(())
    }
}
