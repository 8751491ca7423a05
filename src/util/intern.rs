use std::collections::HashMap;

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// An interned string handle.
///
/// Symbols are cheap to copy and compare. Equal strings interned through the
/// same [`Interner`] always produce equal symbols; the text is recovered with
/// [`Interner::text_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u64);

impl Symbol {
    /// The raw handle value.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Hashes a string by xoring each byte in at a rotating bit offset.
///
/// The offset advances by 13 bits per byte, modulo 57, so a short identifier
/// spreads across the whole word.
#[must_use]
pub fn text_hash(text: &str) -> u64 {
    let mut hash = 0u64;
    let mut offset = 0u32;
    for byte in text.bytes() {
        hash ^= u64::from(byte) << offset;
        offset = (offset + 13) % 57;
    }
    hash
}

/// A growable string table mapping text to [`Symbol`]s.
///
/// Entries are never removed. A handle is the hash of its text; when that
/// slot is already taken by a different string the hash is perturbed with a
/// random value until a free slot turns up, so two different strings never
/// share a handle.
///
/// # Example
/// ```
/// use symcalc::util::intern::Interner;
///
/// let mut symbols = Interner::new();
/// let x = symbols.intern("x");
///
/// assert_eq!(x, symbols.intern("x"));
/// assert_ne!(x, symbols.intern("y"));
/// assert_eq!(symbols.text_of(x), Some("x"));
/// ```
pub struct Interner {
    texts:   HashMap<u64, Box<str>>,
    symbols: HashMap<Box<str>, Symbol>,
    rng:     StdRng,
}

impl Interner {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { texts:   HashMap::new(),
               symbols: HashMap::new(),
               rng:     StdRng::from_entropy(), }
    }

    /// Returns the symbol for `text`, inserting it on first use.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(symbol) = self.symbols.get(text) {
            return *symbol;
        }

        let mut hash = text_hash(text);
        while self.texts.contains_key(&hash) {
            let perturbed = hash ^ self.rng.r#gen::<u64>();
            trace!("intern: hash collision for '{text}' at {hash:#x}, retrying at {perturbed:#x}");
            hash = perturbed;
        }

        let symbol = Symbol(hash);
        self.texts.insert(hash, text.into());
        self.symbols.insert(text.into(), symbol);
        symbol
    }

    /// Returns the text a symbol was interned from.
    ///
    /// `None` for a symbol that did not come from this table.
    #[must_use]
    pub fn text_of(&self, symbol: Symbol) -> Option<&str> {
        self.texts.get(&symbol.0).map(AsRef::as_ref)
    }

    /// Returns the symbol for `text` if it has been interned already.
    #[must_use]
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.symbols.get(text).copied()
    }

    /// Number of distinct strings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_text_gives_equal_symbols() {
        let mut symbols = Interner::new();
        let a = symbols.intern("alpha");
        let b = symbols.intern("beta");
        assert_eq!(a, symbols.intern("alpha"));
        assert_ne!(a, b);
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn colliding_texts_get_distinct_symbols() {
        // Trailing NUL bytes leave the hash unchanged.
        let mut symbols = Interner::new();
        let first = "\u{1}";
        let second = "\u{1}\u{0}";
        assert_eq!(text_hash(first), text_hash(second));

        let a = symbols.intern(first);
        let b = symbols.intern(second);
        assert_ne!(a, b);
        assert_eq!(symbols.text_of(a), Some(first));
        assert_eq!(symbols.text_of(b), Some(second));
        assert_eq!(symbols.intern(second), b);
    }

    #[test]
    fn hash_rotates_offsets() {
        assert_eq!(text_hash(""), 0);
        assert_eq!(text_hash("a"), 0x61);
        assert_eq!(text_hash("ab"), 0x61 ^ (0x62 << 13));
    }

    #[test]
    fn unknown_symbol_has_no_text() {
        let mut other = Interner::new();
        let foreign = other.intern("elsewhere");
        let symbols = Interner::new();
        assert_eq!(symbols.text_of(foreign), None);
        assert!(symbols.is_empty());
    }
}
