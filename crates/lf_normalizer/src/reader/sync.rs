use std::io::{self, Read};

use tracing::trace;

use crate::marker::{LineEndingState, PendingMarker};

#[derive(Debug)]
pub struct LfNormalizer<R: Read> {
    reader: R,
    state: LineEndingState,
}

impl<R: Read> LfNormalizer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_state(reader, LineEndingState::new())
    }

    /// Wraps `reader` as the continuation of a stream that already went
    /// through `state`.
    pub fn with_state(reader: R, state: LineEndingState) -> Self {
        Self { reader, state }
    }

    pub fn pending_marker(&self) -> PendingMarker {
        self.state.pending()
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill_and_normalize(&mut self, buf: &mut [u8]) -> io::Result<(usize, usize)> {
        let raw = self.reader.read(buf)?;
        let normalized = if raw > 0 {
            self.state.normalize_in_place(&mut buf[..raw])
        } else {
            0
        };
        Ok((raw, normalized))
    }
}

impl<R: Read> Read for LfNormalizer<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let (raw, normalized) = self.fill_and_normalize(buf)?;
        if raw == 0 || normalized > 0 {
            return Ok(normalized);
        }

        // Ok(0) means end-of-stream to callers, so a read whose bytes were
        // all absorbed gets one more upstream read. Upstream EOF is not retried.
        trace!(absorbed_bytes = raw, "normalized read was empty; reading once more");
        let (_, normalized) = self.fill_and_normalize(buf)?;
        Ok(normalized)
    }
}
