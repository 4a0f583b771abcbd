//! Keyword interning and hierarchical context keys.
//!
//! Converts identifier strings into cheap integer handles (`Keyword`) and
//! builds qualified-name paths (`ContextKey`) out of a parent path plus a
//! keyword. Equal paths share one `ContextKey`, which makes a path usable as
//! the durable identity of a named type.

use std::collections::HashMap;
use std::fmt;

/// A lightweight handle to an interned string.
///
/// Comparing two keywords is O(1). Keywords are ordered by insertion order,
/// not lexicographically - use `Interner::resolve` if you need string ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Keyword(u32);

impl Keyword {
    /// Raw index for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a Keyword from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl PartialOrd for Keyword {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyword {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// An interned qualified-name path.
///
/// `ContextKey::ROOT` is the empty path. Every other key is a
/// `(parent, keyword)` pair; two keys are equal exactly when their paths are.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ContextKey(u32);

impl ContextKey {
    /// The empty path.
    pub const ROOT: ContextKey = ContextKey(0);

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

/// String interner. Deduplicates strings and paths.
#[derive(Debug, Clone)]
pub struct Interner {
    /// Map from string to keyword for deduplication.
    map: HashMap<String, Keyword>,
    /// Storage for interned strings, indexed by Keyword.
    strings: Vec<String>,
    /// Path nodes, indexed by ContextKey. Slot 0 is the root and has no link.
    keys: Vec<Option<(ContextKey, Keyword)>>,
    key_map: HashMap<(ContextKey, Keyword), ContextKey>,
}

impl Default for Interner {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            strings: Vec::new(),
            keys: vec![None],
            key_map: HashMap::new(),
        }
    }
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its Keyword.
    /// If the string was already interned, returns the existing Keyword.
    pub fn intern(&mut self, s: &str) -> Keyword {
        if let Some(&kw) = self.map.get(s) {
            return kw;
        }

        let kw = Keyword(self.strings.len() as u32);
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), kw);
        kw
    }

    /// Intern an owned string, avoiding clone if not already present.
    pub fn intern_owned(&mut self, s: String) -> Keyword {
        if let Some(&kw) = self.map.get(&s) {
            return kw;
        }

        let kw = Keyword(self.strings.len() as u32);
        self.strings.push(s.clone());
        self.map.insert(s, kw);
        kw
    }

    /// Look up a string without interning it.
    pub fn lookup(&self, s: &str) -> Option<Keyword> {
        self.map.get(s).copied()
    }

    /// Resolve a Keyword back to its string.
    ///
    /// # Panics
    /// Panics if the keyword was not created by this interner.
    #[inline]
    pub fn resolve(&self, kw: Keyword) -> &str {
        &self.strings[kw.0 as usize]
    }

    /// Try to resolve a Keyword, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, kw: Keyword) -> Option<&str> {
        self.strings.get(kw.0 as usize).map(|s| s.as_str())
    }

    /// Number of interned strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the interner is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all interned strings with their keywords.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Keyword, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Keyword(i as u32), s.as_str()))
    }

    // ------------------------------------------------------------------------
    // Context keys
    // ------------------------------------------------------------------------

    /// Extend `parent` by one segment.
    pub fn key(&mut self, parent: ContextKey, name: Keyword) -> ContextKey {
        self.ensure_key(parent);
        if let Some(&key) = self.key_map.get(&(parent, name)) {
            return key;
        }

        let key = ContextKey(self.keys.len() as u32);
        self.keys.push(Some((parent, name)));
        self.key_map.insert((parent, name), key);
        key
    }

    /// Extend `parent` by one segment given as a string.
    pub fn key_str(&mut self, parent: ContextKey, name: &str) -> ContextKey {
        let kw = self.intern(name);
        self.key(parent, kw)
    }

    /// Build a path from the root, one segment per element.
    pub fn key_path(&mut self, segments: &[&str]) -> ContextKey {
        segments
            .iter()
            .fold(ContextKey::ROOT, |parent, seg| self.key_str(parent, seg))
    }

    /// Parent path, or `None` for the root.
    pub fn key_parent(&self, key: ContextKey) -> Option<ContextKey> {
        self.key_link(key).map(|(parent, _)| parent)
    }

    /// Last segment, or `None` for the root.
    pub fn key_name(&self, key: ContextKey) -> Option<Keyword> {
        self.key_link(key).map(|(_, name)| name)
    }

    /// Segments from the root down to `key`.
    pub fn key_segments(&self, key: ContextKey) -> Vec<Keyword> {
        let mut segments = Vec::new();
        let mut cur = key;
        while let Some((parent, name)) = self.key_link(cur) {
            segments.push(name);
            cur = parent;
        }
        segments.reverse();
        segments
    }

    /// Segments from the root down to `key`, resolved to strings.
    pub fn key_strings(&self, key: ContextKey) -> Vec<&str> {
        self.key_segments(key)
            .into_iter()
            .map(|kw| self.resolve(kw))
            .collect()
    }

    /// Render a key as `::a::b`. The root renders as `::`.
    pub fn display_key(&self, key: ContextKey) -> String {
        if key.is_root() {
            return "::".to_owned();
        }
        let mut out = String::new();
        for seg in self.key_strings(key) {
            out.push_str("::");
            out.push_str(seg);
        }
        out
    }

    /// Number of interned paths, including the root.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    fn key_link(&self, key: ContextKey) -> Option<(ContextKey, Keyword)> {
        self.ensure_key(key);
        self.keys[key.index()]
    }
}
