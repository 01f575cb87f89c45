use std::fmt;

/// One FASTA record: a `>` header line and its sequence body with all line breaks removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastaRecord {
    header: Vec<u8>,
    seq: Vec<u8>,
    substitutions: usize,
}

impl FastaRecord {
    pub fn new(header: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            seq: Vec::new(),
            substitutions: 0,
        }
    }

    pub fn with_seq(header: impl Into<Vec<u8>>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            seq: seq.into(),
            substitutions: 0,
        }
    }

    /// Header line, including the leading `>`.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    /// Number of needle occurrences replaced in this record's sequence.
    pub fn substitutions(&self) -> usize {
        self.substitutions
    }

    pub(crate) fn extend_seq(&mut self, line: &[u8]) {
        self.seq.extend_from_slice(line);
    }

    pub(crate) fn set_seq(&mut self, seq: Vec<u8>, substitutions: usize) {
        self.seq = seq;
        self.substitutions += substitutions;
    }
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", String::from_utf8_lossy(&self.header))?;
        write!(
            f,
            " len: {}, substitutions: {}",
            self.seq.len(),
            self.substitutions
        )
    }
}
