//! Single-entry memo cache
//!
//! Holds the last computed value together with the key it was computed
//! for. A lookup with the same key returns the cached value; any other key
//! recomputes and replaces it.

/// Last-value cache keyed on an input fingerprint
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: usize,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, running `compute` only on a miss.
    ///
    /// The flag is true when the value was just computed.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> (&V, bool) {
        let (entry, fresh) = match self.entry.take() {
            Some(entry) if entry.0 == key => (entry, false),
            _ => {
                self.computations += 1;
                ((key, compute()), true)
            }
        };
        let (_, value) = self.entry.insert(entry);
        (&*value, fresh)
    }

    /// Cached value if it was computed for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((cached, value)) if cached == key => Some(value),
            _ => None,
        }
    }

    /// How many times a value has been computed
    pub fn computations(&self) -> usize {
        self.computations
    }
}
