use std::fmt::{Display, Formatter};
use std::ops::Index;

/// A point in the alignment lattice.
///
/// Component `i` is the number of leading symbols of sequence `i`
/// that have been consumed, so it ranges over `0..=length_i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(Vec<usize>);

impl Coordinate {
    pub fn new(components: Vec<usize>) -> Self {
        Self(components)
    }

    /// The all-zero coordinate in `dimensions` dimensions.
    pub fn origin(dimensions: usize) -> Self {
        Self(vec![0; dimensions])
    }

    pub fn dimensions(&self) -> usize {
        self.0.len()
    }

    pub fn is_origin(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// The sum of the components, which is the index of the wavefront this coordinate lies on.
    pub fn wavefront(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }
}

impl Index<usize> for Coordinate {
    type Output = usize;

    fn index(&self, dimension: usize) -> &Self::Output {
        &self.0[dimension]
    }
}

impl From<Vec<usize>> for Coordinate {
    fn from(components: Vec<usize>) -> Self {
        Self(components)
    }
}

impl From<&[usize]> for Coordinate {
    fn from(components: &[usize]) -> Self {
        Self(components.to_vec())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (idx, component) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, ")")
    }
}

/// Enumerates the coordinates of a lattice like a mechanical odometer.
///
/// Dimension 0 varies fastest; when dimension `i` passes its maximum it
/// resets to 0 and carries into dimension `i + 1`. Every move in the
/// alignment recurrences steps to a coordinate that is componentwise
/// smaller, so it has always been visited before the move's destination.
///
/// The odometer holds no traversal state: [`Odometer::next_after`] is a pure
/// function of the previous coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Odometer {
    /// The maximum value of each dimension (the sequence lengths).
    maxima: Vec<usize>,
}

impl Odometer {
    pub fn new(maxima: Vec<usize>) -> Self {
        Self { maxima }
    }

    pub fn dimensions(&self) -> usize {
        self.maxima.len()
    }

    pub fn maxima(&self) -> &[usize] {
        &self.maxima
    }

    /// The far corner of the lattice, where every dimension is at its maximum.
    pub fn terminal(&self) -> Coordinate {
        Coordinate(self.maxima.clone())
    }

    pub fn is_terminal(&self, coordinate: &Coordinate) -> bool {
        coordinate.0 == self.maxima
    }

    /// The coordinate that follows `coordinate`, or None if `coordinate` is the last one.
    pub fn next_after(&self, coordinate: &Coordinate) -> Option<Coordinate> {
        debug_assert_eq!(coordinate.dimensions(), self.dimensions());
        let mut next = coordinate.clone();

        for (component, &max) in next.0.iter_mut().zip(self.maxima.iter()) {
            if *component < max {
                *component += 1;
                return Some(next);
            }
            *component = 0;
        }

        // every dimension overflowed
        None
    }

    /// Every coordinate after the origin, in traversal order.
    ///
    /// The origin is excluded because the recurrences seed it separately.
    pub fn iter(&self) -> OdometerIter<'_> {
        OdometerIter {
            odometer: self,
            current: Some(Coordinate::origin(self.dimensions())),
        }
    }
}

pub struct OdometerIter<'a> {
    odometer: &'a Odometer,
    current: Option<Coordinate>,
}

impl Iterator for OdometerIter<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.odometer.next_after(self.current.as_ref()?);
        self.current = next.clone();
        next
    }
}
