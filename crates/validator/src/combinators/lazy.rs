//! LAZY combinator - validator computed at validation time

use crate::foundation::{Field, Validate, ValidationResult};

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// Builds a fresh validator from a factory on every call.
///
/// Nothing is memoized: the factory runs once per `validate`, and the
/// validator it returns does all the work. Useful for:
/// - Bounds that must be re-read each time (e.g. a configurable limit)
/// - Mutually recursive schemas that cannot be built up front
///
/// A `Lazy` shared across threads calls its factory concurrently, so
/// anything the factory captures must tolerate that.
///
/// # Examples
///
/// ```rust,ignore
/// use veritas_validator::prelude::*;
///
/// let limit = AtomicUsize::new(5);
/// let validator = lazy(|| len(0, limit.load(Ordering::Relaxed)));
///
/// limit.store(2, Ordering::Relaxed);
/// assert!(validator.validate(&field("tags", &vec![1, 2, 3])).is_err());
/// ```
pub struct Lazy<F> {
    factory: F,
}

impl<F, V> Lazy<F>
where
    F: Fn() -> V,
{
    /// Creates a new LAZY combinator.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, V> Validate for Lazy<F>
where
    F: Fn() -> V,
    V: Validate,
{
    fn validate(&self, field: &Field<'_>) -> ValidationResult {
        (self.factory)().validate(field)
    }
}

impl<F> std::fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}

/// Creates a LAZY combinator.
pub fn lazy<F, V>(factory: F) -> Lazy<F>
where
    F: Fn() -> V,
    V: Validate,
{
    Lazy::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::assert::assert;
    use crate::foundation::field;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[test]
    fn factory_not_called_before_use() {
        let calls = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&calls);

        let _validator = lazy(move || {
            count.fetch_add(1, Ordering::SeqCst);
            assert(true)
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn factory_called_once_per_validate() {
        let calls = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&calls);

        let validator = lazy(move || {
            count.fetch_add(1, Ordering::SeqCst);
            assert(true)
        });

        for expected in 1..=3 {
            validator.validate(&field("x", &0)).unwrap();
            assert_eq!(calls.load(Ordering::SeqCst), expected);
        }
    }

    #[test]
    fn result_tracks_current_state() {
        let healthy = Arc::new(AtomicBool::new(true));
        let state = Arc::clone(&healthy);
        let validator = lazy(move || assert(state.load(Ordering::SeqCst)));

        assert!(validator.validate(&field("x", &0)).is_ok());
        healthy.store(false, Ordering::SeqCst);
        assert!(validator.validate(&field("x", &0)).is_err());
    }

    #[test]
    fn matches_direct_validation() {
        let validator = lazy(|| assert(false));
        let f = field("flag", &true);
        assert_eq!(validator.validate(&f), assert(false).validate(&f));
    }
}
