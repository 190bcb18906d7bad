//! Property-based tests, with native `i128` as oracle where it can keep up.

use core::convert::TryFrom;

use proptest::prelude::*;

use crate::{BigInt, Digit, One, Zero};

#[cfg(not(feature = "extended-testing"))]
const CASES: u32 = 256;
#[cfg(feature = "extended-testing")]
const CASES: u32 = 16_384;

// Strategy for values of any length, up to a dozen limbs
fn big_int() -> impl Strategy<Value = BigInt> {
    (prop::collection::vec(any::<Digit>(), 0..12), any::<bool>()).prop_map(|(limbs, negative)| {
        let magnitude = BigInt::from_magnitude(limbs);
        if negative { -magnitude } else { magnitude }
    })
}

fn non_zero_big_int() -> impl Strategy<Value = BigInt> {
    big_int().prop_filter("divisor must be non-zero", |x| !x.is_zero())
}

// Products of these still fit an i128
fn small_int() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -1000i64..1000i64,
        Just(i64::MIN),
        Just(i64::MAX),
        Just(i32::MIN as i64),
        Just(u32::MAX as i64),
    ]
}

/// Every limb the value needs, and not one more. Zero is `[0]`.
fn is_canonical(x: &BigInt) -> bool {
    let Some(&top) = x.limbs.last() else {
        return false;
    };
    let top_bit = top >> (Digit::BITS - 1) == 1;
    if top_bit != x.negative {
        return false;
    }
    if x.limbs.len() == 1 {
        return true;
    }
    // the top limb is only allowed to be pure sign extension if the one below
    // would otherwise suggest the wrong sign
    let below = x.limbs[x.limbs.len() - 2];
    top != x.sign_fill() || (below >> (Digit::BITS - 1) == 1) != x.negative
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn arithmetic_matches_native(a in small_int(), b in small_int()) {
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (a, b) = (a as i128, b as i128);

        prop_assert_eq!(&x + &y, BigInt::from(a + b));
        prop_assert_eq!(&x - &y, BigInt::from(a - b));
        prop_assert_eq!(&x * &y, BigInt::from(a * b));
        prop_assert_eq!(&x & &y, BigInt::from(a & b));
        prop_assert_eq!(&x | &y, BigInt::from(a | b));
        prop_assert_eq!(&x ^ &y, BigInt::from(a ^ b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInt::from(a / b));
            prop_assert_eq!(&x % &y, BigInt::from(a % b));
        }
    }

    #[test]
    fn shifts_match_native(a in small_int(), bits in 0usize..60) {
        let x = BigInt::from(a);
        prop_assert_eq!(&x << bits, BigInt::from((a as i128) << bits));
        prop_assert_eq!(&x >> bits, BigInt::from(a >> bits));
    }

    #[test]
    fn native_round_trip(a in any::<i128>(), b in any::<u128>()) {
        prop_assert_eq!(i128::try_from(&BigInt::from(a)), Ok(a));
        prop_assert_eq!(u128::try_from(&BigInt::from(b)), Ok(b));
        prop_assert_eq!(BigInt::from(a).to_string(), a.to_string());
        prop_assert_eq!(BigInt::from(b).to_string(), b.to_string());
    }

    #[test]
    fn decimal_round_trip(x in big_int()) {
        let text = x.to_string();
        prop_assert_eq!(text.parse::<BigInt>(), Ok(x));
    }

    #[test]
    fn additive_inverse(x in big_int()) {
        prop_assert!((&x + &-&x).is_zero());
        prop_assert_eq!(&x - &x, BigInt::ZERO);
        prop_assert_eq!(-(-&x), x);
    }

    #[test]
    fn not_is_negate_minus_one(x in big_int()) {
        prop_assert_eq!(!&x, -&x - BigInt::one());
        prop_assert_eq!(!!&x, x);
    }

    #[test]
    fn division_law(x in big_int(), n in non_zero_big_int()) {
        let (q, r) = x.div_rem(&n);
        prop_assert_eq!(&q * &n + &r, x.clone());
        prop_assert!(r.abs() < n.abs());
        prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
        prop_assert!(is_canonical(&q));
        prop_assert!(is_canonical(&r));
    }

    #[test]
    fn increment_decrement(x in big_int()) {
        let mut y = x.clone();
        y.increment();
        prop_assert_eq!(&y, &(&x + BigInt::one()));
        y.decrement();
        y.decrement();
        prop_assert_eq!(&y, &(&x - BigInt::one()));
    }

    #[test]
    fn ring_laws(x in big_int(), y in big_int(), z in big_int()) {
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
        prop_assert_eq!(&x * &(&y + &z), &x * &y + &x * &z);
        prop_assert_eq!((&x + &y) - &y, x.clone());
    }

    #[test]
    fn shifts_are_powers_of_two(x in big_int(), bits in 0usize..200) {
        let power = BigInt::one() << bits;
        prop_assert_eq!(&x << bits, &x * &power);
        prop_assert_eq!((&x << bits) >> bits, x.clone());
        // arithmetic shift floors, division truncates
        let (q, r) = x.div_rem(&power);
        let floor = if r.is_negative() { q - BigInt::one() } else { q };
        prop_assert_eq!(&x >> bits, floor);
    }

    #[test]
    fn ordering_is_consistent(x in big_int(), y in big_int()) {
        let difference = &x - &y;
        prop_assert_eq!(x.cmp(&y), difference.cmp(&BigInt::ZERO));
        prop_assert_eq!(x == y, difference.is_zero());
    }

    #[test]
    fn results_are_canonical(x in big_int(), y in big_int(), bits in 0usize..100) {
        prop_assert!(is_canonical(&x));
        prop_assert!(is_canonical(&(&x + &y)));
        prop_assert!(is_canonical(&(&x - &y)));
        prop_assert!(is_canonical(&(&x * &y)));
        prop_assert!(is_canonical(&(&x & &y)));
        prop_assert!(is_canonical(&(&x | &y)));
        prop_assert!(is_canonical(&(&x ^ &y)));
        prop_assert!(is_canonical(&!&x));
        prop_assert!(is_canonical(&(&x << bits)));
        prop_assert!(is_canonical(&(&x >> bits)));
        prop_assert!(is_canonical(&x.signum()));
        prop_assert!(is_canonical(&x.abs()));
    }

    #[test]
    fn zero_results_are_canonical(x in big_int(), n in non_zero_big_int(), bits in 0usize..100) {
        let zero = BigInt::ZERO;
        prop_assert!(is_canonical(&(&zero * &x)));
        prop_assert!(is_canonical(&(&x * &zero)));
        prop_assert!(is_canonical(&(&zero / &n)));
        prop_assert!(is_canonical(&(&zero % &n)));
        prop_assert!(is_canonical(&(&zero << bits)));
        prop_assert!(is_canonical(&-&zero));
        prop_assert!(is_canonical(&zero.signum()));
        prop_assert!(is_canonical(&zero.abs()));

        // a dividend smaller than the divisor
        let small = &n - &n.signum();
        let (q, r) = small.div_rem(&n);
        prop_assert!(q.is_zero());
        prop_assert!(is_canonical(&q));
        prop_assert_eq!(&r, &small);
        prop_assert!(is_canonical(&r));
    }
}
