use std::io::Write;

use anyhow::Result;

use crate::error::AlignError;
use crate::util::{checked_lattice_size, VecUtils};

use super::{Coordinate, Score};

/// One slot of the alignment matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// The cell has not been visited by the current solve
    #[default]
    Unset,
    Solved {
        score: Score,
        /// The flat index of the cell this one was reached from.
        ///
        /// None at the origin, and at local alignment restart boundaries.
        predecessor_idx: Option<usize>,
    },
}

impl Cell {
    pub fn solved(score: Score, predecessor_idx: Option<usize>) -> Self {
        Cell::Solved {
            score,
            predecessor_idx,
        }
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            Cell::Unset => None,
            Cell::Solved { score, .. } => Some(*score),
        }
    }

    pub fn predecessor_idx(&self) -> Option<usize> {
        match self {
            Cell::Unset => None,
            Cell::Solved {
                predecessor_idx, ..
            } => *predecessor_idx,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Cell::Solved { .. })
    }
}

/// Dense N-dimensional storage for the alignment lattice.
///
/// The cells are stored as a flat vector in odometer order: the flat index
/// of a coordinate `c` is `sum(c[i] * stride[i])`, where `stride[0] = 1` and
/// `stride[i + 1] = stride[i] * extent[i]`. Because dimension 0 varies
/// fastest, ascending flat index is exactly odometer traversal order.
#[derive(Clone, Debug)]
pub struct AlignmentMatrix {
    /// The number of coordinate values in each dimension (sequence length + 1)
    extents: Vec<usize>,
    /// The flat index distance between neighbors in each dimension
    strides: Vec<usize>,
    cells: Vec<Cell>,
}

impl AlignmentMatrix {
    /// Allocate an unset matrix for sequences of the given lengths.
    pub fn new(lengths: &[usize]) -> Result<Self, AlignError> {
        let extents: Vec<usize> = lengths
            .iter()
            .map(|l| l.checked_add(1).ok_or(AlignError::LatticeTooLarge))
            .collect::<Result<_, _>>()?;

        let size = checked_lattice_size(&extents).ok_or(AlignError::LatticeTooLarge)?;

        let mut strides = Vec::with_capacity(extents.len());
        let mut stride = 1usize;
        for extent in extents.iter() {
            strides.push(stride);
            // can't overflow: the product of every extent fit above
            stride *= extent;
        }

        Ok(Self {
            extents,
            strides,
            cells: vec![Cell::Unset; size],
        })
    }

    pub fn dimensions(&self) -> usize {
        self.extents.len()
    }

    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of cells in the lattice.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark every cell as unset.
    pub fn reset(&mut self) {
        self.cells.reset(Cell::Unset);
    }

    /// The flat index of a coordinate.
    pub fn index_of(&self, coordinate: &Coordinate) -> Result<usize, AlignError> {
        if coordinate.dimensions() != self.dimensions() {
            return Err(AlignError::DimensionMismatch {
                expected: self.dimensions(),
                found: coordinate.dimensions(),
            });
        }

        coordinate
            .iter()
            .zip(self.extents.iter().zip(self.strides.iter()))
            .try_fold(0usize, |idx, (&component, (&extent, &stride))| {
                if component < extent {
                    Ok(idx + component * stride)
                } else {
                    Err(AlignError::OutOfBounds {
                        coordinate: coordinate.clone(),
                        shape: self.extents.clone(),
                    })
                }
            })
    }

    /// The coordinate at a flat index.
    pub fn coordinate_of(&self, idx: usize) -> Coordinate {
        debug_assert!(idx < self.len());
        let mut remainder = idx;
        self.extents
            .iter()
            .map(|&extent| {
                let component = remainder % extent;
                remainder /= extent;
                component
            })
            .collect::<Vec<usize>>()
            .into()
    }

    pub fn get(&self, coordinate: &Coordinate) -> Result<&Cell, AlignError> {
        let idx = self.index_of(coordinate)?;
        Ok(&self.cells[idx])
    }

    pub fn set(&mut self, coordinate: &Coordinate, cell: Cell) -> Result<(), AlignError> {
        let idx = self.index_of(coordinate)?;
        self.cells[idx] = cell;
        Ok(())
    }

    #[inline]
    pub fn get_idx(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    /// The score of a solved cell; reading an unset cell is an error.
    #[inline]
    pub fn score_idx(&self, idx: usize) -> Result<Score, AlignError> {
        self.cells[idx]
            .score()
            .ok_or_else(|| AlignError::UnsetCell {
                coordinate: self.coordinate_of(idx),
            })
    }

    /// The flat index reached by stepping back one position in each of the given dimensions.
    #[inline]
    pub fn step_back(&self, idx: usize, dimensions: impl IntoIterator<Item = usize>) -> usize {
        dimensions
            .into_iter()
            .fold(idx, |predecessor_idx, dim| predecessor_idx - self.strides[dim])
    }

    /// The coordinate a solved cell was reached from.
    pub fn predecessor(&self, coordinate: &Coordinate) -> Result<Option<Coordinate>, AlignError> {
        match self.get(coordinate)? {
            Cell::Unset => Err(AlignError::UnsetCell {
                coordinate: coordinate.clone(),
            }),
            Cell::Solved {
                predecessor_idx, ..
            } => Ok(predecessor_idx.map(|idx| self.coordinate_of(idx))),
        }
    }

    /// The last coordinate in traversal order, where every dimension is at its maximum.
    pub fn terminal(&self) -> Coordinate {
        self.extents
            .iter()
            .map(|e| e - 1)
            .collect::<Vec<usize>>()
            .into()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write every cell as `coordinate score predecessor`, one per line, in traversal order.
    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let coordinate_width = self
            .extents
            .iter()
            .map(|e| (e - 1).to_string().len() + 2)
            .sum::<usize>()
            + 2;
        let column_width = 8;

        writeln!(
            out,
            "{:cw$} {:>w$} predecessor",
            "coordinate",
            "score",
            cw = coordinate_width,
            w = column_width
        )?;

        for (idx, cell) in self.cells.iter().enumerate() {
            let coordinate = self.coordinate_of(idx).to_string();
            match cell {
                Cell::Unset => writeln!(
                    out,
                    "{:cw$} {:>w$}",
                    coordinate,
                    "unset",
                    cw = coordinate_width,
                    w = column_width
                )?,
                Cell::Solved {
                    score,
                    predecessor_idx,
                } => {
                    let predecessor = match predecessor_idx {
                        Some(p) => self.coordinate_of(*p).to_string(),
                        None => char::from(crate::alphabet::UTF8_DASH).to_string(),
                    };
                    writeln!(
                        out,
                        "{:cw$} {:>w$} {}",
                        coordinate,
                        score,
                        predecessor,
                        cw = coordinate_width,
                        w = column_width
                    )?
                }
            }
        }
        Ok(())
    }
}
