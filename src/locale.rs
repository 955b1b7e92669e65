//! Culture names and their resource fallback order.
//!
//! Localized documentation files live in subdirectories named after a culture
//! (`en-US/`, `en/`). Lookups walk from the most specific culture to its
//! parents and stop before the invariant culture.

use std::fmt;

/// Environment variables consulted for the ambient locale, in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A culture name such as `en-US` or `zh-Hant-TW`. The empty name is the
/// invariant culture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Culture {
    name: String,
}

impl Culture {
    /// Build a culture from a BCP-47 tag or a POSIX locale string.
    ///
    /// `en_US.UTF-8@euro` becomes `en-US`; `C` and `POSIX` are invariant.
    pub fn new(name: &str) -> Self {
        let tag = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
            return Self::invariant();
        }

        let subtags: Vec<String> = tag
            .split(['-', '_'])
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(i, s)| normalize_subtag(i, s))
            .collect();

        Self {
            name: subtags.join("-"),
        }
    }

    pub fn invariant() -> Self {
        Self::default()
    }

    /// Ambient locale of the process, read at call time.
    pub fn current() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Resolve the ambient locale through `lookup` instead of the process
    /// environment. The first non-empty of `LC_ALL`, `LC_MESSAGES`, `LANG` wins.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::new(&value))
            .unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    /// Drop the last subtag. `en-US` -> `en` -> invariant.
    pub fn parent(&self) -> Self {
        match self.name.rfind('-') {
            Some(idx) => Self {
                name: self.name[..idx].to_string(),
            },
            None => Self::invariant(),
        }
    }

    /// Culture names to probe, most specific first, invariant excluded.
    pub fn fallback_chain(&self) -> FallbackChain {
        FallbackChain {
            next: Some(self.clone()).filter(|c| !c.is_invariant()),
        }
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lazy walk up the culture hierarchy. Clone it to restart.
#[derive(Debug, Clone)]
pub struct FallbackChain {
    next: Option<Culture>,
}

impl Iterator for FallbackChain {
    type Item = Culture;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let parent = current.parent();
        if !parent.is_invariant() {
            self.next = Some(parent);
        }
        Some(current)
    }
}

// language: lowercase, script (4 letters): Titlecase, region: UPPERCASE
fn normalize_subtag(index: usize, subtag: &str) -> String {
    if index == 0 {
        return subtag.to_ascii_lowercase();
    }
    let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
    let is_digit = subtag.chars().all(|c| c.is_ascii_digit());
    match subtag.len() {
        2 if is_alpha => subtag.to_ascii_uppercase(),
        3 if is_digit => subtag.to_string(),
        4 if is_alpha => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => lower,
            }
        }
        _ => subtag.to_ascii_lowercase(),
    }
}
