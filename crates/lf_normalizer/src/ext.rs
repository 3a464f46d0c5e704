use std::io::Read;

use crate::reader::LfNormalizer;

/// Adds [`normalize_line_endings`](NormalizeLineEndingsExt::normalize_line_endings)
/// to every [`Read`] implementation.
pub trait NormalizeLineEndingsExt: Read + Sized {
    fn normalize_line_endings(self) -> LfNormalizer<Self> {
        LfNormalizer::new(self)
    }
}

impl<R: Read> NormalizeLineEndingsExt for R {}
