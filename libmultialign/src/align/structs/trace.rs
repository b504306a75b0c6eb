use crate::structs::Sequence;

use super::{Column, Coordinate, Entry};

/// A path through the alignment lattice, stored from its start to its end.
///
/// Each consecutive pair of coordinates is one alignment column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    pub coordinates: Vec<Coordinate>,
}

impl Trace {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// The number of alignment columns in the trace.
    pub fn length(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Coordinate> {
        self.coordinates.first()
    }

    pub fn end(&self) -> Option<&Coordinate> {
        self.coordinates.last()
    }

    /// The columns of the trace, in forward order.
    ///
    /// Moving from `origin` to `destination`, sequence `i` contributed a gap if its
    /// component did not change, otherwise it consumed the symbol at `destination[i]`.
    pub fn columns<'a>(&'a self, sequences: &'a [Sequence]) -> impl Iterator<Item = Column> + 'a {
        self.coordinates.windows(2).map(move |step| {
            let (origin, destination) = (&step[0], &step[1]);
            Column(
                sequences
                    .iter()
                    .enumerate()
                    .map(|(dim, seq)| {
                        if origin[dim] == destination[dim] {
                            Entry::Gap
                        } else {
                            Entry::Symbol(seq.symbol(destination[dim]))
                        }
                    })
                    .collect(),
            )
        })
    }

    /// One display row per sequence, with gap markers where the sequence did not advance.
    pub fn rows(&self, sequences: &[Sequence]) -> Vec<String> {
        let mut row_bytes: Vec<Vec<u8>> = vec![Vec::with_capacity(self.length()); sequences.len()];

        self.columns(sequences).for_each(|column| {
            column
                .entries()
                .iter()
                .zip(row_bytes.iter_mut())
                .for_each(|(entry, row)| row.push(entry.display_byte()));
        });

        row_bytes
            .into_iter()
            .map(|bytes| String::from_utf8_lossy(&bytes).to_string())
            .collect()
    }
}
