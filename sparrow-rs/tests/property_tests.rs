use proptest::prelude::*;
use sparrow_bench::builtins::range;
use sparrow_bench::range::{KeyValues, Loop};
use sparrow_bench::script::{fib, sum};

#[test]
fn ten_million_sum() {
    assert_eq!(sum(&Loop::new(1, 10_000_000, 1)), 50_000_005_000_000);
}

#[test]
fn fib_recurrence_holds_past_base() {
    for x in 3..25 {
        assert_eq!(fib(x), fib(x - 1) + fib(x - 2), "x = {x}");
    }
}

proptest! {
    /// Reordering a list does not change its sum.
    #[test]
    fn sum_is_order_independent(
        v in prop::collection::vec(-1_000_000i64..1_000_000, 0..64),
        seed in any::<u64>(),
    ) {
        let mut shuffled = v.clone();
        // Deterministic permutation driven by `seed`.
        let n = shuffled.len();
        if n > 1 {
            let mut s = seed;
            for i in (1..n).rev() {
                s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                let j = (s >> 33) as usize % (i + 1);
                shuffled.swap(i, j);
            }
        }
        prop_assert_eq!(sum(&v), sum(&shuffled));
        prop_assert_eq!(sum(&v), v.iter().sum::<i64>());
    }
}

proptest! {
    /// A loop yields the same values as the equivalent std inclusive range.
    #[test]
    fn loop_matches_step_by(start in -500i64..500, end in -500i64..500, step in 1i64..20) {
        let got: Vec<i64> = Loop::new(start, end, step).into_iter().collect();
        let want: Vec<i64> = (start..=end).step_by(step as usize).collect();
        prop_assert_eq!(got, want);
    }
}

proptest! {
    /// Iterating the same loop twice gives the same sequence.
    #[test]
    fn loop_is_restartable(start in -1000i64..1000, len in 0i64..200, step in -3i64..10) {
        let lp = Loop::new(start, start + len, step);
        let first: Vec<i64> = lp.iter().collect();
        let second: Vec<i64> = lp.iter().collect();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len() as u128, lp.len());
    }
}

proptest! {
    /// `len` and `size_hint` agree with what the loop actually yields, all the
    /// way out to the `i64` limits.
    #[test]
    fn len_agrees_with_iteration_at_any_bounds(
        start in any::<i64>(),
        end in any::<i64>(),
        step in 1i64..=i64::MAX,
    ) {
        const CAP: usize = 256;
        let lp = Loop::new(start, end, step);
        let len = lp.len();
        prop_assert_eq!(len == 0, lp.is_empty());

        let mut it = lp.iter();
        let (lo, hi) = it.size_hint();
        match usize::try_from(len) {
            Ok(n) => prop_assert_eq!((lo, hi), (n, Some(n))),
            Err(_) => prop_assert_eq!((lo, hi), (usize::MAX, None)),
        }

        let taken = it.by_ref().take(CAP).count();
        prop_assert_eq!(taken as u128, len.min(CAP as u128));
        if len <= CAP as u128 {
            prop_assert_eq!(it.next(), None);
            prop_assert_eq!(it.size_hint(), (0, Some(0)));
        } else {
            let left = len - CAP as u128;
            let (lo, _) = it.size_hint();
            prop_assert_eq!(lo as u128, left.min(usize::MAX as u128));
        }
    }
}

proptest! {
    /// Non-positive steps never loop forever; they yield nothing.
    #[test]
    fn non_positive_step_is_empty(start in any::<i64>(), end in any::<i64>(), step in i64::MIN..=0) {
        prop_assert_eq!(Loop::new(start, end, step).iter().count(), 0);
    }
}

proptest! {
    /// Key/value iteration over a loop pairs each index with itself.
    #[test]
    fn loop_key_values_pair_index(start in -100i64..100, end in -100i64..100) {
        for (k, v) in Loop::new(start, end, 1).key_values() {
            prop_assert_eq!(k, v);
        }
    }
}

proptest! {
    /// Successful range() output is strictly increasing and stays below `end`.
    #[test]
    fn range_below_end(start in -1000i64..1000, end in -1000i64..1000, step in -10i64..10) {
        if let Ok(v) = range(start, end, step) {
            prop_assert!(v.iter().all(|&x| x >= start && x < end));
            prop_assert!(v.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
