//! Feature token matching

use crate::ast::REGEX_PREFIX;
use dashmap::DashMap;
use regex::Regex;

/// Decides whether a feature token is present in a feature set
pub trait TokenMatcher {
    /// Search every feature for `pattern` (the token without its `~` prefix)
    fn matches_regex<S: AsRef<str>>(&self, pattern: &str, features: &[S]) -> bool;

    /// Match a token: regex search when `~`-prefixed, exact equality otherwise
    fn matches<S: AsRef<str>>(&self, token: &str, features: &[S]) -> bool {
        match token.strip_prefix(REGEX_PREFIX) {
            Some(pattern) => self.matches_regex(pattern, features),
            None => features.iter().any(|feature| feature.as_ref() == token),
        }
    }
}

/// Compiles the pattern on every visit
#[derive(Debug, Clone, Copy, Default)]
pub struct CompilingMatcher;

impl TokenMatcher for CompilingMatcher {
    fn matches_regex<S: AsRef<str>>(&self, pattern: &str, features: &[S]) -> bool {
        compile_pattern(pattern).is_some_and(|regex| search(&regex, features))
    }
}

/// Memoizes compiled patterns keyed by pattern text
///
/// Patterns that fail to compile are cached as well, so the warning is
/// logged once per pattern.
#[derive(Debug, Default)]
pub struct CachedMatcher {
    patterns: DashMap<String, Option<Regex>>,
}

impl CachedMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct patterns seen so far
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn clear(&self) {
        self.patterns.clear();
    }

    fn lookup(&self, pattern: &str) -> Option<Regex> {
        if let Some(entry) = self.patterns.get(pattern) {
            return entry.value().clone();
        }

        let compiled = compile_pattern(pattern);
        self.patterns.insert(pattern.to_string(), compiled.clone());
        compiled
    }
}

impl TokenMatcher for CachedMatcher {
    fn matches_regex<S: AsRef<str>>(&self, pattern: &str, features: &[S]) -> bool {
        self.lookup(pattern)
            .is_some_and(|regex| search(&regex, features))
    }
}

/// An uncompilable pattern never matches
fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Invalid feature pattern '{}' never matches: {}", pattern, e);
            None
        }
    }
}

fn search<S: AsRef<str>>(regex: &Regex, features: &[S]) -> bool {
    features.iter().any(|feature| regex.is_match(feature.as_ref()))
}
