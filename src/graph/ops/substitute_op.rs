use crate::graph::*;

pub struct SubstituteOp {
    substitution: Substitution,
}

impl SubstituteOp {
    const NAME: &'static str = "SubstituteOp";

    /// Replace every occurrence of the substitution's needle in each record's sequence.
    pub fn new(substitution: Substitution) -> Self {
        Self { substitution }
    }
}

impl GraphNode for SubstituteOp {
    fn run(&mut self, record: Option<FastaRecord>) -> Result<(Option<FastaRecord>, bool)> {
        let Some(mut record) = record else {
            panic!("Expected some record!")
        };

        if let Some((seq, count)) = self.substitution.replace_all(record.seq()) {
            log::debug!(
                "{}: replaced {count} occurrence(s) in {}",
                Self::NAME,
                display_header(record.header())
            );
            record.set_seq(seq, count);
        }

        Ok((Some(record), false))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_matching_sequences() {
        let mut op = SubstituteOp::new(Substitution::new("ATGGTGAG", "XX").unwrap());

        let (record, done) = op
            .run(Some(FastaRecord::with_seq(">seq1", "ATGGTGAGCATGGTGAG")))
            .unwrap();
        let record = record.unwrap();
        assert!(!done);
        assert_eq!(record.seq(), b"XXCXX");
        assert_eq!(record.substitutions(), 2);
        assert_eq!(record.header(), b">seq1");
    }

    #[test]
    fn leaves_other_sequences_alone() {
        let mut op = SubstituteOp::new(Substitution::new("ATGGTGAG", "XX").unwrap());

        let (record, _) = op
            .run(Some(FastaRecord::with_seq(">seq2", "CCCC")))
            .unwrap();
        assert_eq!(record, Some(FastaRecord::with_seq(">seq2", "CCCC")));
    }
}
