// Copyright 2025 the Spanwiz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;
use peniko::Color;

/// A memo of hex color strings to resolved colors.
///
/// Keys are canonicalized by prefixing `#` when it is missing, so `"FF0000"` and `"#FF0000"`
/// share an entry. Accepted forms are `#RRGGBB` (opaque) and `#AARRGGBB` (alpha first).
/// Strings that fail to parse are not stored.
///
/// Cloning is cheap and clones share one store, so a cache can be handed to several
/// [`Resolver`](crate::Resolver)s. The store only grows; call [`clear`](Self::clear) to drop
/// everything.
#[derive(Clone, Debug, Default)]
pub struct ColorCache {
    shared: Arc<RwLock<HashMap<String, Color>>>,
}

impl ColorCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `hex`, parsing and storing it on first use.
    pub fn get(&self, hex: &str) -> Result<Color, ColorFormatError> {
        let key = canonicalize(hex);
        if let Some(color) = self.read().get(key.as_ref()) {
            return Ok(*color);
        }
        let color = parse_hex(&key).ok_or_else(|| ColorFormatError::new(hex))?;
        log::debug!("color cache miss: {key}");
        // Another thread may have stored the same key since the read lock was released.
        Ok(*self.write().entry(key.into_owned()).or_insert(color))
    }

    /// Returns `true` if `hex` has already been resolved.
    pub fn contains(&self, hex: &str) -> bool {
        self.read().contains_key(canonicalize(hex).as_ref())
    }

    /// The number of distinct colors stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Removes every entry, for this cache and all of its clones.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Returns `true` if `self` and `other` share one store.
    pub fn shares_store_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Color>> {
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Color>> {
        self.shared.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn canonicalize(hex: &str) -> Cow<'_, str> {
    if hex.starts_with('#') {
        Cow::Borrowed(hex)
    } else {
        Cow::Owned(format!("#{hex}"))
    }
}

/// Parses `#RRGGBB` or `#AARRGGBB`.
fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    // `from_str_radix` would also accept a sign.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let [a, r, g, b] = value.to_be_bytes();
    match digits.len() {
        6 => Some(Color::from_rgba8(r, g, b, 0xFF)),
        8 => Some(Color::from_rgba8(r, g, b, a)),
        _ => None,
    }
}

/// Error returned for a color string that is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFormatError {
    input: String,
}

impl ColorFormatError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The string that failed to parse, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?}: expected #RRGGBB or #AARRGGBB",
            self.input
        )
    }
}

impl core::error::Error for ColorFormatError {}
