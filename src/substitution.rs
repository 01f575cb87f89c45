use memchr::memmem;

use crate::errors::*;

/// A literal `needle -> replacement` rewrite over byte strings.
pub struct Substitution {
    finder: memmem::Finder<'static>,
    replacement: Vec<u8>,
}

impl Substitution {
    /// Build a substitution. The needle must not be empty.
    pub fn new(needle: impl AsRef<[u8]>, replacement: impl AsRef<[u8]>) -> Result<Self> {
        let needle = needle.as_ref();

        if needle.is_empty() {
            return Err(Error::EmptyNeedle);
        }

        Ok(Self {
            finder: memmem::Finder::new(needle).into_owned(),
            replacement: replacement.as_ref().to_owned(),
        })
    }

    pub fn needle(&self) -> &[u8] {
        self.finder.needle()
    }

    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }

    /// Replace every non-overlapping occurrence of the needle, scanning left to right.
    ///
    /// Returns `None` when the needle does not occur, so unchanged sequences are not copied.
    /// Otherwise returns the rewritten sequence and the number of replacements made.
    pub fn replace_all(&self, seq: &[u8]) -> Option<(Vec<u8>, usize)> {
        let needle_len = self.finder.needle().len();
        let mut matches = self.finder.find_iter(seq).peekable();
        matches.peek()?;

        let mut res = Vec::with_capacity(seq.len());
        let mut last = 0;
        let mut count = 0;

        for start in matches {
            res.extend_from_slice(&seq[last..start]);
            res.extend_from_slice(&self.replacement);
            last = start + needle_len;
            count += 1;
        }

        res.extend_from_slice(&seq[last..]);
        Some((res, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        memmem::find_iter(haystack, needle).count()
    }

    #[test]
    fn no_match_leaves_sequence_alone() {
        let sub = Substitution::new("GGG", "T").unwrap();
        assert_eq!(sub.replace_all(b"ACGTACGT"), None);
        assert_eq!(sub.replace_all(b""), None);
    }

    #[test]
    fn replaces_every_occurrence() {
        let sub = Substitution::new("ATG", "X").unwrap();
        let (res, count) = sub.replace_all(b"ATGCATGGATG").unwrap();
        assert_eq!(res, b"XCXGX");
        assert_eq!(count, 3);
        assert_eq!(count_occurrences(&res, b"ATG"), 0);
    }

    #[test]
    fn overlapping_matches_scan_left_to_right() {
        let sub = Substitution::new("AA", "B").unwrap();
        let (res, count) = sub.replace_all(b"AAAAA").unwrap();
        assert_eq!(res, b"BBA");
        assert_eq!(count, 2);
    }

    #[test]
    fn replacement_is_not_rescanned() {
        let sub = Substitution::new("AC", "ACAC").unwrap();
        let (res, count) = sub.replace_all(b"ACGAC").unwrap();
        assert_eq!(res, b"ACACGACAC");
        assert_eq!(count, 2);
    }

    #[test]
    fn replacement_may_change_length() {
        let sub = Substitution::new("ATGGTGAG", "XX").unwrap();
        let (res, _) = sub.replace_all(b"ATGGTGAG").unwrap();
        assert_eq!(res, b"XX");

        let sub = Substitution::new("C", "").unwrap();
        let (res, count) = sub.replace_all(b"CCAC").unwrap();
        assert_eq!(res, b"A");
        assert_eq!(count, 3);
    }

    #[test]
    fn empty_needle_is_rejected() {
        assert!(matches!(Substitution::new("", "A"), Err(Error::EmptyNeedle)));
    }
}
