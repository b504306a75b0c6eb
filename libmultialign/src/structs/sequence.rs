use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use crate::alphabet::UTF8_SPACE;
use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no fasta records found in: {path}")]
pub struct EmptyFastaError {
    path: String,
}

/// This holds the symbols of a biological sequence, along with its name.
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The UTF8 bytes that make up the sequence.
    ///
    /// Position 1 of the sequence is at index 1; index 0 holds a padding byte.
    pub utf8_bytes: Vec<u8>,
}

impl Sequence {
    /// Read every record in a fasta file.
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::from_path(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let mut header_bytes = record.head().to_vec();
            let first_space_idx = header_bytes.iter().position(|&b| b == UTF8_SPACE);

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match first_space_idx {
                Some(idx) => {
                    let details_bytes = header_bytes.split_off(idx + 1);
                    header_bytes.pop();
                    (
                        String::from_utf8(header_bytes).with_context(error_context)?,
                        Some(String::from_utf8(details_bytes).with_context(error_context)?),
                    )
                }
                None => (
                    String::from_utf8(header_bytes).with_context(error_context)?,
                    None,
                ),
            };

            let symbols: Vec<u8> = record.seq_lines().flatten().copied().collect();
            let mut seq = Self::from_utf8(&symbols)
                .with_context(|| format!("invalid sequence in fasta record: {name}"))?;
            seq.name = name;
            seq.details = details;
            seqs.push(seq);
        }
        Ok(seqs)
    }

    /// Read the first record in a fasta file.
    pub fn first_from_fasta<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_fasta(&path)?.into_iter().next().ok_or_else(|| {
            EmptyFastaError {
                path: path.as_ref().to_string_lossy().to_string(),
            }
            .into()
        })
    }

    /// Every byte is taken as a literal symbol, including the bytes used as
    /// display markers in alignment output.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
        let mut utf8_bytes: Vec<u8> = vec![255; bytes.len() + 1];
        utf8_bytes[1..].copy_from_slice(bytes);

        Ok(Sequence {
            name: "".to_string(),
            details: None,
            length: bytes.len(),
            utf8_bytes,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// The symbol at a 1-based position.
    #[inline]
    pub fn symbol(&self, position: usize) -> u8 {
        debug_assert!(position >= 1 && position <= self.length);
        self.utf8_bytes[position]
    }

    /// The symbols of the sequence, without the leading padding byte.
    pub fn symbols(&self) -> &[u8] {
        &self.utf8_bytes[1..]
    }

    /// The symbols as a string, replacing any invalid UTF8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.symbols()).to_string()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ">{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.symbols().chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            write!(f, "{}", String::from_utf8_lossy(byte_chunk))?;
            if iter.peek().is_some() {
                // if we're not on the last
                // line, add a linebreak
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_utf8() -> Result<()> {
        let seq = Sequence::from_utf8(b"GATTACA")?;
        assert_eq!(seq.length, 7);
        assert_eq!(seq.symbol(1), b'G');
        assert_eq!(seq.symbol(7), b'A');
        assert_eq!(seq.symbols(), b"GATTACA");
        Ok(())
    }

    #[test]
    fn test_empty_sequence() -> Result<()> {
        let seq = Sequence::from_utf8(b"")?;
        assert_eq!(seq.length, 0);
        assert!(seq.symbols().is_empty());
        Ok(())
    }

    #[test]
    fn test_marker_bytes_are_symbols() -> Result<()> {
        let dotted = Sequence::from_utf8(b"AC.GT")?;
        assert_eq!(dotted.length, 5);
        assert_eq!(dotted.symbol(3), b'.');

        let piped = Sequence::from_utf8(b"AC|GT")?;
        assert_eq!(piped.symbols(), b"AC|GT");
        Ok(())
    }

    #[test]
    fn test_display_wraps_lines() -> Result<()> {
        let seq = Sequence::from_utf8(&[b'A'; 100])?.with_name("long");
        let text = seq.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ">long");
        assert_eq!(lines[1], "A".repeat(80));
        assert_eq!(lines[2], "A".repeat(20));
        Ok(())
    }

    #[test]
    fn test_display_replaces_invalid_utf8() -> Result<()> {
        let mut seq = Sequence::from_utf8(&[0xFF, b'A', b'C'])?.with_name("raw");
        seq.details = Some("bytes".to_string());
        assert_eq!(seq.to_string(), ">raw bytes\n\u{FFFD}AC");
        Ok(())
    }

    #[test]
    fn test_from_fasta() -> Result<()> {
        let path = std::env::temp_dir().join(format!(
            "libmultialign-sequence-test-{}.fasta",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path)?;
            writeln!(file, ">seq1 first test sequence")?;
            writeln!(file, "GATT")?;
            writeln!(file, "ACA")?;
            writeln!(file, ">seq2")?;
            writeln!(file, "GCATGCU")?;
        }

        let seqs = Sequence::from_fasta(&path)?;
        std::fs::remove_file(&path)?;

        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].name, "seq1");
        assert_eq!(seqs[0].details.as_deref(), Some("first test sequence"));
        assert_eq!(seqs[0].symbols(), b"GATTACA");
        assert_eq!(seqs[1].name, "seq2");
        assert_eq!(seqs[1].details, None);
        assert_eq!(seqs[1].length, 7);
        Ok(())
    }
}
