use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};
use tracing::trace;

use crate::marker::{LineEndingState, PendingMarker};

/// Async counterpart of [`crate::LfNormalizer`].
///
/// Upstream bytes land directly in the caller's unfilled region and are
/// normalized there; a poll that absorbs everything it received polls
/// upstream exactly once more before completing.
#[derive(Debug)]
pub struct AsyncLfNormalizer<R: AsyncRead + Unpin> {
    reader: R,
    state: LineEndingState,
}

impl<R: AsyncRead + Unpin> AsyncLfNormalizer<R> {
    pub fn new(reader: R) -> Self {
        Self::with_state(reader, LineEndingState::new())
    }

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

    fn poll_fill_and_normalize(
        &mut self,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<(usize, usize)>> {
        let dst = buf.initialize_unfilled();
        let mut upstream = ReadBuf::new(dst);
        ready!(Pin::new(&mut self.reader).poll_read(cx, &mut upstream))?;
        let raw = upstream.filled().len();

        let normalized = if raw > 0 {
            self.state.normalize_in_place(&mut dst[..raw])
        } else {
            0
        };
        buf.advance(normalized);
        Poll::Ready(Ok((raw, normalized)))
    }
}

impl<R: AsyncRead + Unpin> AsyncRead for AsyncLfNormalizer<R> {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();
        if buf.remaining() == 0 {
            return Poll::Ready(Ok(()));
        }

        let (raw, normalized) = ready!(this.poll_fill_and_normalize(cx, buf))?;
        if raw == 0 || normalized > 0 {
            return Poll::Ready(Ok(()));
        }

        trace!(absorbed_bytes = raw, "normalized read was empty; polling once more");
        ready!(this.poll_fill_and_normalize(cx, buf))?;
        Poll::Ready(Ok(()))
    }
}
