use std::fs::File;
use std::io::BufReader;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::Deserialize;

use crate::errors::*;
use crate::substitution::Substitution;
use crate::wrap::{line_width, DEFAULT_WIDTH};

/// eGFP coding sequence, replaced by default.
pub const EGFP_SEQUENCE: &str = concat!(
    "ATGGTGAGCAAGGGCGAGGAGCTGTTCACCGGGGTGGTGCCCATCCTGGTCGAGCTGGACGGCGACGTAAACGGCCACAA",
    "GTTCAGCGTGTCCGGCGAGGGCGAGGGCGATGCCACCTACGGCAAGCTGACCCTGAAGTTCATCTGCACCACCGGCAAGC",
    "TGCCCGTGCCCTGGCCCACCCTCGTGACCACCCTGACCTACGGCGTGCAGTGCTTCAGCCGCTACCCCGACCACATGAAG",
    "CAGCACGACTTCTTCAAGTCCGCCATGCCCGAAGGCTACGTCCAGGAGCGCACCATCTTCTTCAAGGACGACGGCAACTA",
    "CAAGACCCGCGCCGAGGTGAAGTTCGAGGGCGACACCCTGGTGAACCGCATCGAGCTGAAGGGCATCGACTTCAAGGAGG",
    "ACGGCAACATCCTGGGGCACAAGCTGGAGTACAACTACAACAGCCACAACGTCTATATCATGGCCGACAAGCAGAAGAAC",
    "GGCATCAAGGTGAACTTCAAGATCCGCCACAACATCGAGGACGGCAGCGTGCAGCTCGCCGACCACTACCAGCAGAACAC",
    "CCCCATCGGCGACGGCCCCGTGCTGCTGCCCGACAACCACTACCTGAGCACCCAGTCCGCCCTGAGCAAAGACCCCAACG",
    "AGAAGCGCGATCACATGGTCCTGCTGGAGTTCGTGACCGCCGCCGGGATCACTCTCGGCATGGACGAGCTGTACAAG",
);

/// mCherry coding sequence, the default replacement.
pub const MCHERRY_SEQUENCE: &str = concat!(
    "ATGGTGAGCAAGGGCGAGGAGGATAACATGGCCATCATCAAGGAGTTCATGCGCTTCAAGGTGCACATGGAGGGCTCCGT",
    "GAACGGCCACGAGTTCGAGATCGAGGGCGAGGGCGAGGGCCGCCCCTACGAGGGCACCCAGACCGCCAAGCTGAAGGTGA",
    "CCAAGGGTGGCCCCCTGCCCTTCGCCTGGGACATCCTGTCCCCTCAGTTCATGTACGGCTCCAAGGCCTACGTGAAGCAC",
    "CCCGCCGACATCCCCGACTACTTGAAGCTGTCCTTCCCCGAGGGCTTCAAGTGGGAGCGCGTGATGAACTTCGAGGACGG",
    "CGGCGTGGTGACCGTGACCCAGGACTCCTCCCTGCAGGACGGCGAGTTCATCTACAAGGTGAAGCTGCGCGGCACCAACT",
    "TCCCCTCCGACGGCCCCGTAATGCAGAAGAAGACCATGGGCTGGGAGGCCTCCTCCGAGCGGATGTACCCCGAGGACGGC",
    "GCCCTGAAGGGCGAGATCAAGCAGAGGCTGAAGCTGAAGGACGGCGGCCACTACGACGCTGAGGTCAAGACCACCTACAA",
    "GGCCAAGAAGCCCGTGCAGCTGCCCGGCGCCTACAACGTCAACATCAAGTTGGACATCACCTCCCACAACGAGGACTACA",
    "CCATCGTGGAACAGTACGAACGCGCCGAGGGCCGCCACTCCACCGGCGGCATGGACGAGCTGTACAAG",
);

/// Settings for one run: what to replace and how wide to wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub needle: Vec<u8>,
    pub replacement: Vec<u8>,
    pub width: NonZeroUsize,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    needle: String,
    replacement: String,
    width: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            needle: EGFP_SEQUENCE.as_bytes().to_owned(),
            replacement: MCHERRY_SEQUENCE.as_bytes().to_owned(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    pub fn new(
        needle: impl AsRef<[u8]>,
        replacement: impl AsRef<[u8]>,
        width: usize,
    ) -> Result<Self> {
        let config = Self {
            needle: needle.as_ref().to_owned(),
            replacement: replacement.as_ref().to_owned(),
            width: line_width(width)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a substitution pair (and optionally a width) from a YAML file.
    ///
    /// ```yaml
    /// needle: ATGGTGAGC
    /// replacement: ATGGTGAGCAAG
    /// width: 60
    /// ```
    pub fn from_yaml_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let reader = BufReader::new(File::open(file).map_err(|e| Error::file_io(file, e))?);
        Self::from_yaml_reader(reader).map_err(|e| match e {
            Error::Config { source, .. } => Error::Config {
                file: file.display().to_string(),
                source,
            },
            e => e,
        })
    }

    pub fn from_yaml_reader(reader: impl std::io::Read) -> Result<Self> {
        let parsed: ConfigFile = serde_yaml::from_reader(reader).map_err(|e| Error::Config {
            file: "<reader>".to_owned(),
            source: Box::new(e),
        })?;

        let width = match parsed.width {
            Some(w) => line_width(w)?,
            None => DEFAULT_WIDTH,
        };

        let config = Self {
            needle: parsed.needle.trim().as_bytes().to_owned(),
            replacement: parsed.replacement.trim().as_bytes().to_owned(),
            width,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_width(mut self, width: usize) -> Result<Self> {
        self.width = line_width(width)?;
        Ok(self)
    }

    pub fn substitution(&self) -> Result<Substitution> {
        Substitution::new(&self.needle, &self.replacement)
    }

    fn validate(&self) -> Result<()> {
        if self.needle.is_empty() {
            return Err(Error::EmptyNeedle);
        }
        Ok(())
    }
}
