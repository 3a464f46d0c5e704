mod sync;

#[cfg(feature = "tokio")]
mod tokio;

pub use sync::LfNormalizer;

#[cfg(feature = "tokio")]
pub use self::tokio::AsyncLfNormalizer;
