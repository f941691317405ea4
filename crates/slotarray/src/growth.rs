//! Capacity growth policy.
//!
//! Capacity never shrinks. When a write needs more slots than are
//! allocated, the slot count doubles, or jumps straight to the required
//! count if doubling is not enough.

/// Slot count to grow to so that at least `required` slots exist.
///
/// Returns `current` unchanged when it already suffices. Otherwise returns
/// `max(current * 2, required)`, falling back to `required` when the
/// doubling would overflow.
pub fn grown_capacity(current: usize, required: usize) -> usize {
    if required <= current {
        return current;
    }
    current.checked_mul(2).map_or(required, |doubled| doubled.max(required))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sufficient_capacity_is_unchanged() {
        assert_eq!(grown_capacity(32, 0), 32);
        assert_eq!(grown_capacity(32, 32), 32);
    }

    #[test]
    fn one_past_capacity_doubles() {
        assert_eq!(grown_capacity(32, 33), 64);
    }

    #[test]
    fn far_past_capacity_jumps_to_required() {
        assert_eq!(grown_capacity(32, 1000), 1000);
    }

    #[test]
    fn zero_capacity_grows_to_required() {
        assert_eq!(grown_capacity(0, 1), 1);
        assert_eq!(grown_capacity(0, 17), 17);
    }

    #[test]
    fn doubling_overflow_falls_back_to_required() {
        let current = usize::MAX / 2 + 1;
        assert_eq!(grown_capacity(current, current + 1), current + 1);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn result_covers_required_and_never_shrinks(
                current in 0usize..1 << 20,
                required in 0usize..1 << 22,
            ) {
                let grown = grown_capacity(current, required);
                prop_assert!(grown >= current);
                prop_assert!(grown >= required);
            }

            #[test]
            fn growth_is_doubling_or_exact(
                current in 0usize..1 << 20,
                required in 0usize..1 << 22,
            ) {
                let grown = grown_capacity(current, required);
                if required > current {
                    prop_assert!(grown == current * 2 || grown == required);
                } else {
                    prop_assert_eq!(grown, current);
                }
            }
        }
    }
}
