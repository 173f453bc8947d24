//! Two-state cache for derived artifacts.

/// A derived artifact that is either current for its inputs or absent.
///
/// Transitions: inputs changed → `Invalid`; computed → `Valid`.
#[derive(Clone, Debug, PartialEq)]
pub enum Cached<T> {
    Invalid,
    Valid(T),
}

impl<T> Default for Cached<T> {
    fn default() -> Self {
        Cached::Invalid
    }
}

impl<T> Cached<T> {
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            Cached::Valid(v) => Some(v),
            Cached::Invalid => None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Cached::Valid(_))
    }

    #[inline]
    pub fn invalidate(&mut self) {
        *self = Cached::Invalid;
    }

    /// Compute and store the value if absent. On error the cache stays `Invalid`.
    pub fn try_fill<E>(&mut self, f: impl FnOnce() -> Result<T, E>) -> Result<(), E> {
        if !self.is_valid() {
            *self = Cached::Valid(f()?);
        }
        Ok(())
    }
}
