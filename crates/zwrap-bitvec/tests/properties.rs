// SPDX-License-Identifier: AGPL-3.0

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use proptest::prelude::*;
use zwrap_bitvec::BitVec;

fn size_strategy() -> impl Strategy<Value = u32> {
    1u32..=130
}

proptest! {
    #[test]
    fn prop_magnitude_in_range(value in any::<i64>(), size in size_strategy()) {
        let bv = BitVec::from_i64(value, size).unwrap();
        prop_assert!(bv.value() < &(BigUint::one() << size as usize));
    }

    #[test]
    fn prop_signed_round_trip(value in any::<i64>(), size in 64u32..=130) {
        // wide enough to hold every i64
        let bv = BitVec::from_i64(value, size).unwrap();
        prop_assert_eq!(bv.to_signed_bigint(), BigInt::from(value));
    }

    #[test]
    fn prop_value_congruent_mod_size(value in any::<i64>(), size in size_strategy()) {
        let bv = BitVec::from_i64(value, size).unwrap();
        let modulus = BigInt::one() << size as usize;
        let difference = bv.to_unsigned_bigint() - BigInt::from(value);
        prop_assert_eq!(difference % modulus, BigInt::from(0));
    }

    #[test]
    fn prop_add_sub_inverse(a in any::<u64>(), b in any::<u64>(), size in size_strategy()) {
        let a = BitVec::from_u64(a, size).unwrap();
        let b = BitVec::from_u64(b, size).unwrap();
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    #[test]
    fn prop_neg_is_sub_from_zero(a in any::<i64>(), size in size_strategy()) {
        let a = BitVec::from_i64(a, size).unwrap();
        let zero = BitVec::zero(size).unwrap();
        prop_assert_eq!(-&a, zero.sub(&a).unwrap());
    }

    #[test]
    fn prop_double_not(a in any::<u64>(), size in size_strategy()) {
        let a = BitVec::from_u64(a, size).unwrap();
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn prop_sdiv_srem_identity(a in any::<i32>(), b in any::<i32>()) {
        let a = BitVec::from_i32(a, 32).unwrap();
        let b = BitVec::from_i32(b, 32).unwrap();
        prop_assume!(!b.is_zero());
        let quotient = a.sdiv(&b).unwrap();
        let remainder = a.srem(&b).unwrap();
        prop_assert_eq!(quotient.mul(&b).unwrap().add(&remainder).unwrap(), a);
    }

    #[test]
    fn prop_concat_then_extract(high in any::<u16>(), low in any::<u16>()) {
        let high_bv = BitVec::from_u32(high.into(), 16).unwrap();
        let low_bv = BitVec::from_u32(low.into(), 16).unwrap();
        let joined = high_bv.concat(&low_bv).unwrap();
        prop_assert_eq!(joined.extract(31, 16).unwrap(), high_bv);
        prop_assert_eq!(joined.extract(15, 0).unwrap(), low_bv);
    }

    #[test]
    fn prop_binary_string_parses_back(a in any::<u64>(), size in size_strategy()) {
        let a = BitVec::from_u64(a, size).unwrap();
        let text = a.to_binary_string();
        prop_assert_eq!(text.len(), size as usize);
        prop_assert_eq!(BitVec::from_binary(&text, size).unwrap(), a);
    }
}
