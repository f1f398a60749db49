//! Strict weak orders injected into the trees.

/// A strict weak order over `T`.
///
/// Only `less` is required; the trees derive every other relation from it.
///
/// # Examples
///
/// ```
/// use treap_bimap::compare::{Compare, Natural};
///
/// assert!(Natural.less(&1, &2));
/// assert!(Natural.equal(&2, &2));
///
/// let reversed = |a: &u32, b: &u32| b < a;
/// assert!(reversed.less(&2, &1));
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    fn less_or_equal(&self, a: &T, b: &T) -> bool {
        !self.less(b, a)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The order given by `Ord`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{Compare, Natural};

    #[test]
    fn test_natural() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &2));
        assert!(Natural.greater(&3, &2));
        assert!(Natural.less_or_equal(&2, &2));
        assert!(Natural.equal("a", "a"));
        assert!(!Natural.equal("a", "b"));
    }

    #[test]
    fn test_closure() {
        let by_len = |a: &String, b: &String| a.len() < b.len();
        assert!(by_len.less(&"a".to_string(), &"bb".to_string()));
        assert!(by_len.equal(&"ab".to_string(), &"cd".to_string()));
    }
}
