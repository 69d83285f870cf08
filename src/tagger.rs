//! Seam between the extractor and a morphological analyzer.
//!
//! The analyzer itself lives outside this crate. Anything that can turn a
//! line of text into a [`Lattice`] implements [`Tagger`]; closures do so
//! through the blanket impl.

use std::sync::Mutex;

use crate::lattice::Lattice;

#[derive(Debug, thiserror::Error)]
pub enum TaggerError {
    #[error("analyzer failed: {0}")]
    Parse(String),
    #[error("analyzer unavailable: {0}")]
    Unavailable(String),
}

pub trait Tagger {
    fn parse(&self, text: &str) -> Result<Lattice, TaggerError>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Lattice, TaggerError>,
{
    fn parse(&self, text: &str) -> Result<Lattice, TaggerError> {
        self(text)
    }
}

/// Shares a non-reentrant analyzer between threads by serializing calls.
pub struct SerializedTagger<T> {
    inner: Mutex<T>,
}

impl<T> SerializedTagger<T> {
    pub fn new(tagger: T) -> Self {
        Self {
            inner: Mutex::new(tagger),
        }
    }

    pub fn into_inner(self) -> Result<T, TaggerError> {
        self.inner
            .into_inner()
            .map_err(|e| TaggerError::Unavailable(e.to_string()))
    }
}

impl<T: Tagger> Tagger for SerializedTagger<T> {
    fn parse(&self, text: &str) -> Result<Lattice, TaggerError> {
        let tagger = self
            .inner
            .lock()
            .map_err(|e| TaggerError::Unavailable(e.to_string()))?;
        tagger.parse(text)
    }
}
