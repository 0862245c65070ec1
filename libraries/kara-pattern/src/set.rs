//! Ordered fallback over several format specifications
//!
//! A library usually mixes naming schemes. The scanner tries each pattern in
//! order and keeps the first one that describes the path.

use crate::cache::PatternCache;
use crate::compile::CompiledPattern;
use crate::types::SongMetadata;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Metadata plus the index of the pattern that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMatch {
    pub pattern_index: usize,
    pub metadata: SongMetadata,
}

#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Arc<CompiledPattern>>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every specification; the first defective one aborts
    pub fn compile<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = specs
            .into_iter()
            .map(|spec| CompiledPattern::compile(spec.as_ref()).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Same as [`compile`](Self::compile), sharing compiled patterns through a cache
    pub fn from_cache<I, S>(cache: &PatternCache, specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = specs
            .into_iter()
            .map(|spec| cache.get_or_compile(spec.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn push(&mut self, pattern: Arc<CompiledPattern>) {
        self.patterns.push(pattern);
    }

    /// First pattern, in order, that describes the path
    pub fn match_first(&self, path: &str) -> Option<SetMatch> {
        self.patterns
            .iter()
            .enumerate()
            .find_map(|(pattern_index, pattern)| {
                pattern.matches(path).map(|metadata| SetMatch {
                    pattern_index,
                    metadata,
                })
            })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter().map(|p| p.as_ref())
    }
}
