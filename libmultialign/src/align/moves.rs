use crate::align::scoring::score_pair;
use crate::align::structs::{AlignmentMatrix, Column, Coordinate, Entry, Score, ScoreParams};
use crate::error::AlignError;
use crate::structs::Sequence;

/// The most non-empty sequences a move can describe: moves are stored as a
/// bitmask over the dimensions that still have a symbol to consume.
pub const MAX_SEQUENCES: usize = 63;

/// A candidate transition into a destination coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// The dimensions that consume a symbol in this move, ascending
    pub consumed: Vec<usize>,
    /// The coordinate the move starts from
    pub predecessor: Coordinate,
    /// The alignment column the move produces
    pub column: Column,
}

impl Move {
    pub fn consumes(&self, dimension: usize) -> bool {
        self.consumed.contains(&dimension)
    }
}

/// Enumerates every admissible move into a destination coordinate.
///
/// Each dimension first gets a base entry: a gap if the destination's
/// component is 0 (nothing to consume yet), otherwise the symbol at that
/// position. Each move picks a non-empty subset of the k dimensions with a
/// symbol base entry to consume; the rest stay gap, so there are exactly
/// `2^k - 1` moves.
///
/// Moves are produced by ascending gap mask over the active dimensions in
/// ascending dimension order: bit `j` of the gap mask set means the `j`-th
/// active dimension is gapped. The first move therefore consumes in every
/// active dimension and the all-gap mask `2^k - 1` is never produced. The
/// recurrences keep the first move on score ties, so this order is the
/// tie-break rule.
///
/// A move mask is indexed the same way: bit `j` set means the `j`-th active
/// dimension consumes. Dimensions that are still at 0 take no bits, so only
/// the non-empty sequences count towards [`MAX_SEQUENCES`].
#[derive(Clone, Debug)]
pub struct MoveEnumerator {
    destination: Coordinate,
    base: Vec<Entry>,
    active: Vec<usize>,
    /// The bit of each dimension in a move mask, or None for an inactive dimension
    bits: Vec<Option<u64>>,
}

impl MoveEnumerator {
    pub fn new(destination: &Coordinate, sequences: &[Sequence]) -> Self {
        debug_assert_eq!(destination.dimensions(), sequences.len());

        let base: Vec<Entry> = destination
            .iter()
            .zip(sequences.iter())
            .map(|(&position, seq)| match position {
                0 => Entry::Gap,
                p => Entry::Symbol(seq.symbol(p)),
            })
            .collect();

        let active: Vec<usize> = base
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_gap())
            .map(|(dim, _)| dim)
            .collect();
        debug_assert!(active.len() <= MAX_SEQUENCES);

        let mut bits: Vec<Option<u64>> = vec![None; base.len()];
        for (j, &dim) in active.iter().enumerate() {
            bits[dim] = Some(1 << j);
        }

        Self {
            destination: destination.clone(),
            base,
            active,
            bits,
        }
    }

    pub fn destination(&self) -> &Coordinate {
        &self.destination
    }

    pub fn base_entries(&self) -> &[Entry] {
        &self.base
    }

    /// The dimensions that can consume a symbol in some move.
    pub fn active_dimensions(&self) -> &[usize] {
        &self.active
    }

    /// The number of moves, `2^k - 1`.
    pub fn len(&self) -> usize {
        ((1u64 << self.active.len()) - 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// The move mask of every move, in enumeration order.
    pub fn masks(&self) -> impl Iterator<Item = u64> {
        let all_gap = (1u64 << self.active.len()) - 1;
        (0..all_gap).map(move |gap_mask| !gap_mask & all_gap)
    }

    /// The dimensions a move mask consumes in, ascending.
    pub fn consumed_dimensions(&self, mask: u64) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(move |(j, _)| mask >> *j & 1 == 1)
            .map(|(_, &dim)| dim)
    }

    #[inline]
    fn consumes(&self, dimension: usize, mask: u64) -> bool {
        matches!(self.bits[dimension], Some(bit) if mask & bit != 0)
    }

    #[inline]
    fn entry(&self, dimension: usize, mask: u64) -> Entry {
        if self.consumes(dimension, mask) {
            self.base[dimension]
        } else {
            Entry::Gap
        }
    }

    pub fn column(&self, mask: u64) -> Column {
        Column((0..self.base.len()).map(|dim| self.entry(dim, mask)).collect())
    }

    pub fn predecessor(&self, mask: u64) -> Coordinate {
        self.destination
            .iter()
            .enumerate()
            .map(|(dim, &c)| if self.consumes(dim, mask) { c - 1 } else { c })
            .collect::<Vec<usize>>()
            .into()
    }

    /// The column score of a move, summed over every unordered pair of its entries.
    pub fn column_score(&self, mask: u64, params: &ScoreParams) -> Score {
        let n = self.base.len();
        let mut total: Score = 0;
        for i in 0..n {
            let a = self.entry(i, mask);
            for j in (i + 1)..n {
                total += score_pair(a, self.entry(j, mask), params);
            }
        }
        total
    }

    /// Every move, fully materialized, in enumeration order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.masks().map(|mask| Move {
            consumed: self.consumed_dimensions(mask).collect(),
            predecessor: self.predecessor(mask),
            column: self.column(mask),
        })
    }
}

/// Find the best scoring move into a destination cell.
///
/// Returns the best candidate score and the flat index of its predecessor,
/// keeping the first-enumerated move on ties, or None if the destination
/// admits no moves (only the origin).
pub(crate) fn best_transition(
    matrix: &AlignmentMatrix,
    enumerator: &MoveEnumerator,
    destination_idx: usize,
    params: &ScoreParams,
) -> Result<Option<(Score, usize)>, AlignError> {
    let mut best: Option<(Score, usize)> = None;

    for mask in enumerator.masks() {
        let predecessor_idx =
            matrix.step_back(destination_idx, enumerator.consumed_dimensions(mask));
        let candidate = matrix.score_idx(predecessor_idx)? + enumerator.column_score(mask, params);

        match best {
            Some((best_score, _)) if candidate <= best_score => {}
            _ => best = Some((candidate, predecessor_idx)),
        }
    }

    Ok(best)
}
