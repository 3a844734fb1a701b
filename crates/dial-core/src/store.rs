//! The one shared string value every context reads and writes.
//!
//! There is no locking or versioning: each `set` overwrites whatever was
//! there and the last writer wins.

use std::cell::RefCell;

pub trait SharedStore {
    /// Raw stored text, `None` if never written.
    fn get(&self) -> Option<String>;
    fn set(&self, value: &str);
}

/// Name and scope of a cookie-backed store entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieScope {
    pub prefix: String,
    pub name: String,
    pub domain: String,
    pub path: String,
}

impl Default for CookieScope {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            name: String::new(),
            domain: String::new(),
            path: "/".to_string(),
        }
    }
}

impl CookieScope {
    #[inline]
    pub fn key(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }

    /// Assignment string for `document.cookie`. No expiry is written, so the
    /// entry lives for the browser session. An empty domain is left out
    /// rather than written as `domain=`.
    pub fn directive(&self, value: &str) -> String {
        let mut out = format!("{}={}", self.key(), value);
        if !self.domain.is_empty() {
            out.push_str(";domain=");
            out.push_str(&self.domain);
        }
        out.push_str(";path=");
        out.push_str(&self.path);
        out
    }

    /// Find this entry's value in a serialized cookie jar (`a=1; b=2`).
    pub fn lookup<'a>(&self, jar: &'a str) -> Option<&'a str> {
        let needle = format!("{}=", self.key());
        jar.split(';')
            .map(str::trim)
            .find_map(|entry| entry.strip_prefix(needle.as_str()))
    }
}

/// In-process store; share one between contexts with `Rc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            slot: RefCell::new(Some(value.to_string())),
        }
    }
}

impl SharedStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.slot.borrow_mut() = Some(value.to_string());
    }
}

/// Shortest text that parses back to the same `f64`.
#[inline]
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Parse stored text as a dial value. Anything that is not a finite number in
/// `[0, 1]` counts as corrupt.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (0.0..=1.0).contains(v))
}
