use std::num::NonZeroUsize;

use crate::errors::*;

/// Default number of sequence characters per output line.
pub const DEFAULT_WIDTH: NonZeroUsize = match NonZeroUsize::new(80) {
    Some(w) => w,
    None => unreachable!(),
};

pub fn line_width(width: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(width).ok_or(Error::InvalidWidth(width))
}

/// Split a sequence into lines of exactly `width` bytes, except for a shorter final line.
///
/// An empty sequence produces no lines.
pub fn wrap_seq(seq: &[u8], width: NonZeroUsize) -> impl Iterator<Item = &[u8]> {
    seq.chunks(width.get())
}
