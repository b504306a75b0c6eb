use std::fmt::{Display, Formatter};

use crate::align::structs::{GlobalAlignment, LocalAlignment, Recurrence, Score};

pub mod output_standard;
pub mod output_tabular;

/// A finished alignment, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Global(GlobalAlignment),
    Local(LocalAlignment),
}

/// The per-sequence summary of a report, one line of tabular output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSummary {
    pub name: String,
    pub length: usize,
    /// 1-based position of the first aligned symbol
    pub start: usize,
    /// 1-based position of the last aligned symbol; less than `start` if nothing was aligned
    pub end: usize,
    /// The number of alignment columns this sequence does not advance in
    pub gaps: usize,
    pub score: Score,
    pub recurrence: Recurrence,
}

impl Report {
    pub fn score(&self) -> Score {
        match self {
            Report::Global(ali) => ali.score,
            Report::Local(ali) => ali.score,
        }
    }

    pub fn recurrence(&self) -> Recurrence {
        match self {
            Report::Global(_) => Recurrence::Global,
            Report::Local(_) => Recurrence::Local,
        }
    }

    pub fn summaries(&self) -> Vec<SequenceSummary> {
        match self {
            Report::Global(ali) => ali
                .names
                .iter()
                .zip(ali.lengths.iter())
                .map(|(name, &length)| SequenceSummary {
                    name: name.clone(),
                    length,
                    start: 1,
                    end: length,
                    gaps: ali.length - length,
                    score: ali.score,
                    recurrence: Recurrence::Global,
                })
                .collect(),
            Report::Local(ali) => ali
                .names
                .iter()
                .enumerate()
                .map(|(dim, name)| SequenceSummary {
                    name: name.clone(),
                    length: ali.lengths[dim],
                    start: ali.start[dim] + 1,
                    end: ali.end[dim],
                    gaps: ali.length - (ali.end[dim] - ali.start[dim]),
                    score: ali.score,
                    recurrence: Recurrence::Local,
                })
                .collect(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Global(ali) => write!(f, "{ali}"),
            Report::Local(ali) => write!(f, "{ali}"),
        }
    }
}

impl From<GlobalAlignment> for Report {
    fn from(alignment: GlobalAlignment) -> Self {
        Report::Global(alignment)
    }
}

impl From<LocalAlignment> for Report {
    fn from(alignment: LocalAlignment) -> Self {
        Report::Local(alignment)
    }
}
