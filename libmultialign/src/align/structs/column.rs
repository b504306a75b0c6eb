use std::fmt::{Display, Formatter};

use crate::alphabet::GAP_MARKER;

/// One entry of an alignment column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The sequence did not advance at this column
    Gap,
    /// The sequence consumed this symbol at this column
    Symbol(u8),
}

impl Entry {
    pub fn is_gap(&self) -> bool {
        matches!(self, Entry::Gap)
    }

    /// The byte used to display this entry in an alignment row.
    pub fn display_byte(&self) -> u8 {
        match self {
            Entry::Gap => GAP_MARKER,
            Entry::Symbol(b) => *b,
        }
    }
}

/// One alignment step: an entry for every sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column(pub Vec<Entry>);

impl Column {
    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn is_all_gap(&self) -> bool {
        self.0.iter().all(|e| e.is_gap())
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for entry in self.0.iter() {
            write!(f, "{}", char::from(entry.display_byte()))?;
        }
        Ok(())
    }
}
