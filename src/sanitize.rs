//! Basename sanitization.
//!
//! Converts arbitrary strings into values safe to use as a single path
//! component across operating systems. Classification happens per Unicode
//! code point against an explicit [`DispositionTable`] rather than a regex
//! chain, so multi-byte scripts and emoji survive intact.

/// Characters deleted outright, with no gap-filling space.
const STRIPPED_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{00AB}', '\u{00BB}'];

/// Characters replaced by a single space. Whitespace code points join this
/// set implicitly via [`char::is_whitespace`].
const REPLACED_CHARS: &[char] = &['.', ',', ';', ':', '*', '?', '|', '_', '<', '>', '/', '\\'];

/// Action taken for a single code point during sanitization.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Disposition {
    /// Remove the code point with no replacement.
    Strip,
    /// Replace the code point with a single space.
    ReplaceWithSpace,
    /// Keep the code point as-is.
    PassThrough,
}

/// Immutable per-code-point classification used by [`safe_basename_with`].
///
/// The default table strips straight and curly quotes and guillemets,
/// replaces Windows-reserved characters, path separators, underscore and all
/// whitespace with a space, and passes everything else through (hyphens and
/// dashes, brackets, letters of any script, digits, emoji, currency symbols).
/// Builders extend the table for OS-specific rules; a code point moved into
/// one set is removed from the other, so every code point keeps exactly one
/// disposition.
#[derive(Debug, Clone)]
pub struct DispositionTable {
    stripped: Vec<char>,
    replaced: Vec<char>,
}

impl Default for DispositionTable {
    fn default() -> Self {
        Self {
            stripped: STRIPPED_CHARS.to_vec(),
            replaced: REPLACED_CHARS.to_vec(),
        }
    }
}

impl DispositionTable {
    /// Adds code points that should be deleted without replacement.
    pub fn with_stripped(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        for c in chars {
            self.replaced.retain(|&existing| existing != c);
            if !self.stripped.contains(&c) {
                self.stripped.push(c);
            }
        }
        self
    }

    /// Adds code points that should become a single space.
    pub fn with_replaced(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        for c in chars {
            self.stripped.retain(|&existing| existing != c);
            if !self.replaced.contains(&c) {
                self.replaced.push(c);
            }
        }
        self
    }

    /// Classifies one code point. Strip rules win over replace rules;
    /// unclassified whitespace is replaced.
    pub fn disposition_for(&self, c: char) -> Disposition {
        if self.stripped.contains(&c) {
            Disposition::Strip
        } else if self.replaced.contains(&c) || c.is_whitespace() {
            Disposition::ReplaceWithSpace
        } else {
            Disposition::PassThrough
        }
    }
}

/// Sanitizes `input` into a path-component-safe string using the built-in
/// rules. See [`safe_basename_with`] for the guarantees.
pub fn safe_basename(input: &str) -> String {
    safe_basename_with(input, &DispositionTable::default())
}

/// Sanitizes `input` against a caller-supplied [`DispositionTable`].
///
/// The result contains no stripped or replaced characters, no run of two or
/// more spaces, and no leading or trailing space; pass-through code points
/// keep their original order and multiplicity. The empty string maps to
/// itself, and the function is idempotent. Strip and replace stay distinct
/// on purpose: `"alpha" bravo` becomes `alpha bravo` with a single space,
/// because deleting a quote leaves no gap while replacing a character does.
pub fn safe_basename_with(input: &str, table: &DispositionTable) -> String {
    let mut substituted = String::with_capacity(input.len());
    for c in input.chars() {
        match table.disposition_for(c) {
            Disposition::Strip => {}
            Disposition::ReplaceWithSpace => substituted.push(' '),
            Disposition::PassThrough => substituted.push(c),
        }
    }
    collapse_whitespace(&substituted)
}

/// Collapses every maximal whitespace run to one space and trims the edges.
fn collapse_whitespace(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    for segment in s.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
