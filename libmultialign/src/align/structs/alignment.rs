use std::fmt::{Display, Formatter};
use std::ops::Range;

use crate::alphabet::{BOUNDARY_MARKER, UTF8_SPACE};
use crate::structs::Sequence;

use super::{Coordinate, Score, Trace};

/// The first words of the line that reports an alignment's score.
pub const SCORE_HEADER: &str = "The score for this alignment is:";

/// An end-to-end alignment of every sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlobalAlignment {
    /// The optimal global alignment score
    pub score: Score,
    /// The number of alignment columns
    pub length: usize,
    /// The names of the aligned sequences
    pub names: Vec<String>,
    /// The lengths of the aligned sequences
    pub lengths: Vec<usize>,
    /// One display row per sequence, with gap markers
    pub rows: Vec<String>,
}

impl GlobalAlignment {
    pub fn new(score: Score, trace: &Trace, sequences: &[Sequence]) -> Self {
        Self {
            score,
            length: trace.length(),
            names: sequences.iter().map(|s| s.name.clone()).collect(),
            lengths: sequences.iter().map(|s| s.length).collect(),
            rows: trace.rows(sequences),
        }
    }
}

impl Display for GlobalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SCORE_HEADER} {}", self.score)?;
        writeln!(f)?;
        for row in self.rows.iter() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// An alignment of the highest scoring contiguous substrings of every sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalAlignment {
    /// The optimal local alignment score
    pub score: Score,
    /// The number of alignment columns
    pub length: usize,
    /// Where the aligned region starts: the number of symbols of each sequence before it
    pub start: Coordinate,
    /// Where the aligned region ends: the number of symbols of each sequence up to its end
    pub end: Coordinate,
    /// The names of the aligned sequences
    pub names: Vec<String>,
    /// The lengths of the aligned sequences
    pub lengths: Vec<usize>,
    /// One display row per sequence, with gap markers
    pub rows: Vec<String>,
    /// The unaligned symbols of each sequence before the aligned region
    pub prefixes: Vec<String>,
    /// The unaligned symbols of each sequence after the aligned region
    pub suffixes: Vec<String>,
}

impl LocalAlignment {
    pub fn new(score: Score, trace: &Trace, sequences: &[Sequence]) -> Self {
        let start = trace
            .start()
            .cloned()
            .unwrap_or_else(|| Coordinate::origin(sequences.len()));
        let end = trace.end().cloned().unwrap_or_else(|| start.clone());

        let (prefixes, suffixes): (Vec<String>, Vec<String>) = sequences
            .iter()
            .enumerate()
            .map(|(dim, seq)| {
                let symbols = seq.symbols();
                (
                    String::from_utf8_lossy(&symbols[..start[dim]]).to_string(),
                    String::from_utf8_lossy(&symbols[end[dim]..]).to_string(),
                )
            })
            .unzip();

        Self {
            score,
            length: trace.length(),
            names: sequences.iter().map(|s| s.name.clone()).collect(),
            lengths: sequences.iter().map(|s| s.length).collect(),
            rows: trace.rows(sequences),
            start,
            end,
            prefixes,
            suffixes,
        }
    }

    /// The 0-based, end-exclusive range of each sequence covered by the aligned region.
    pub fn ranges(&self) -> Vec<Range<usize>> {
        self.start
            .iter()
            .zip(self.end.iter())
            .map(|(&s, &e)| s..e)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl Display for LocalAlignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let boundary = char::from(BOUNDARY_MARKER);
        let space = char::from(UTF8_SPACE);

        writeln!(f, "The aligned portion of the sequences is bounded by {boundary}")?;
        writeln!(
            f,
            "All symbols outside of these bounds are only there to show the entire sequence,"
        )?;
        writeln!(
            f,
            "and there is no alignment between the sequences outside of these bounds."
        )?;
        writeln!(f)?;
        writeln!(f, "{SCORE_HEADER} {}", self.score)?;
        writeln!(f)?;

        // pad each line so that the opening boundaries line up
        let widest_prefix = self.start.iter().max().copied().unwrap_or(0);

        for (dim, row) in self.rows.iter().enumerate() {
            let padding = space.to_string().repeat(widest_prefix - self.start[dim]);
            writeln!(
                f,
                "{padding}{}{boundary}{row}{boundary}{}",
                self.prefixes[dim], self.suffixes[dim]
            )?;
        }
        Ok(())
    }
}
