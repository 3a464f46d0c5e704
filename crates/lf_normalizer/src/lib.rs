#![forbid(unsafe_code)]
//! Line-ending normalization for byte streams.
//!
//! [`LfNormalizer`] wraps any [`std::io::Read`] and rewrites `\r`, `\n`,
//! `\r\n` and `\n\r` into a single `\n` as bytes pass through. Two-byte
//! endings split across reads are handled; runs of the same marker are not
//! collapsed (`\r\r` is two line endings).
//!
//! ```
//! use std::io::Read;
//!
//! use lf_normalizer::LfNormalizer;
//!
//! let mut reader = LfNormalizer::new(&b"a\r\nb\rc\n\rd"[..]);
//! let mut text = String::new();
//! reader.read_to_string(&mut text)?;
//! assert_eq!(text, "a\nb\nc\nd");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! - The engine ([`LineEndingState`]) is usable on its own for buffers that do
//!   not come from a reader.
//! - With the `tokio` feature, [`AsyncLfNormalizer`] offers the same
//!   behavior over `tokio::io::AsyncRead`.

mod ext;
mod marker;
mod reader;

pub use ext::NormalizeLineEndingsExt;
pub use marker::{normalize_line_endings, LineEndingState, PendingMarker};
pub use reader::LfNormalizer;

#[cfg(feature = "tokio")]
pub use reader::AsyncLfNormalizer;
