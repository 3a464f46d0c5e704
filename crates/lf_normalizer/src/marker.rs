const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// The line-ending byte most recently turned into `\n`, if the sequence it
/// started is still open.
///
/// When the next byte is the *other* marker kind it belongs to the same line
/// ending and gets dropped.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum PendingMarker {
    #[default]
    None,
    SawCr,
    SawLf,
}

impl PendingMarker {
    fn from_byte(byte: u8) -> Self {
        match byte {
            CR => PendingMarker::SawCr,
            LF => PendingMarker::SawLf,
            _ => PendingMarker::None,
        }
    }

    fn closes_with(self, byte: u8) -> bool {
        matches!(
            (self, byte),
            (PendingMarker::SawCr, LF) | (PendingMarker::SawLf, CR)
        )
    }
}

/// Line-ending normalization state that survives across chunk boundaries.
///
/// Feed consecutive chunks of one stream through the same state to get output
/// that does not depend on how the stream was split.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LineEndingState {
    pending: PendingMarker,
}

impl LineEndingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a marker left over by a previous chunk.
    pub fn with_pending(pending: PendingMarker) -> Self {
        Self { pending }
    }

    pub fn pending(&self) -> PendingMarker {
        self.pending
    }

    pub fn reset(&mut self) {
        self.pending = PendingMarker::None;
    }

    /// Rewrites `buf` so every `\r`, `\n`, `\r\n` and `\n\r` becomes a single
    /// `\n`, and returns the length of the normalized prefix.
    ///
    /// - Same-kind repeats (`\r\r`, `\n\n`) are separate line endings.
    /// - A kind switch right after a marker is dropped, once.
    /// - Bytes past the returned length are left in an unspecified state.
    pub fn normalize_in_place(&mut self, buf: &mut [u8]) -> usize {
        let mut written = 0usize;
        for read in 0..buf.len() {
            let byte = buf[read];
            if byte == CR || byte == LF {
                if self.pending.closes_with(byte) {
                    self.pending = PendingMarker::None;
                    continue;
                }
                self.pending = PendingMarker::from_byte(byte);
                buf[written] = LF;
            } else {
                self.pending = PendingMarker::None;
                buf[written] = byte;
            }
            written += 1;
        }
        written
    }
}

/// Normalizes a complete input in one pass.
pub fn normalize_line_endings(input: &[u8]) -> Vec<u8> {
    let mut out = input.to_vec();
    let len = LineEndingState::new().normalize_in_place(&mut out);
    out.truncate(len);
    out
}
