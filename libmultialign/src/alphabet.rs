pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_DOT: u8 = 46;
pub const UTF8_PIPE: u8 = 124;

/// The byte that marks "this sequence did not advance" in a displayed alignment row.
pub const GAP_MARKER: u8 = UTF8_DOT;

/// The byte that brackets the aligned region of a local alignment.
pub const BOUNDARY_MARKER: u8 = UTF8_PIPE;
