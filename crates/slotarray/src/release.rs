//! Release policies for elements leaving an array.
//!
//! Every element accepted by an [`OwningArray`](crate::OwningArray) is
//! handed to the array's [`Release`] policy exactly once: when it is
//! overwritten, when it is deleted, or when the array is dropped.

/// Disposes of an element the array no longer holds.
///
/// Implemented for every `FnMut(T)`, so a closure is the usual way to
/// supply a custom policy:
///
/// ```
/// use slotarray::OwningArray;
///
/// let mut freed = Vec::new();
/// {
///     let mut arr = OwningArray::new(|s: String| freed.push(s)).unwrap();
///     arr.add("a".to_string()).unwrap();
///     arr.put(0, "b".to_string()).unwrap();
/// }
/// assert_eq!(freed, ["a", "b"]);
/// ```
pub trait Release<T> {
    /// Take final ownership of `element`.
    fn release(&mut self, element: T);
}

impl<T, F> Release<T> for F
where
    F: FnMut(T),
{
    fn release(&mut self, element: T) {
        self(element)
    }
}

/// Release policy that simply drops the element.
///
/// For element types that clean up after themselves this is all that is
/// needed; it is the default policy of [`OwningArray`](crate::OwningArray).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropRelease;

impl<T> Release<T> for DropRelease {
    fn release(&mut self, element: T) {
        drop(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn closure_receives_element() {
        let mut seen = Vec::new();
        let mut policy = |v: u32| seen.push(v);
        policy.release(3);
        policy.release(9);
        assert_eq!(seen, [3, 9]);
    }

    #[test]
    fn drop_release_drops() {
        let shared = Rc::new(());
        let element = Rc::clone(&shared);
        assert_eq!(Rc::strong_count(&shared), 2);
        DropRelease.release(element);
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
