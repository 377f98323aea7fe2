// SPDX-License-Identifier: AGPL-3.0

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use zwrap_real::{real, MidpointRounding, Real, RealFormat, ValueError};

    #[test]
    fn test_canonical_form_after_construction() {
        let value = Real::new(6, -4).unwrap();
        assert_eq!(value.numerator(), &BigInt::from(-3));
        assert_eq!(value.denominator(), &BigInt::from(2));
        assert_eq!(value.to_string(), "-3/2");
    }

    #[test]
    fn test_exact_arithmetic_chain() {
        let third = real!(1, 3);
        let sum = &third + &third + &third;
        assert_eq!(sum, Real::one());
        assert!(sum.is_integer());

        let mixed = (real!(1, 2) - real!(1, 3)) * real!(6);
        assert_eq!(mixed, Real::one());
    }

    #[test]
    fn test_half_plus_third() {
        assert_eq!((real!(1, 2) + real!(1, 3)).to_string(), "5/6");
    }

    #[test]
    fn test_division_and_reciprocal() {
        let quotient = real!(3, 4).div(&real!(3, 8)).unwrap();
        assert_eq!(quotient, real!(2));
        assert_eq!(quotient.reciprocal().unwrap(), real!(1, 2));

        match real!(5).div(&Real::zero()) {
            Err(ValueError::DivisionByZero(_)) => {}
            other => panic!("expected division error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_then_format() {
        let value: Real = "0.125".parse().unwrap();
        assert_eq!(value, real!(1, 8));
        assert_eq!(value.format("F").unwrap(), "1/8");
        assert_eq!(value.format_with(RealFormat::Decimal), "0.125");
    }

    #[test]
    fn test_round_half_cases() {
        assert_eq!(real!(5, 2).round(MidpointRounding::ToEven), BigInt::from(2));
        assert_eq!(real!(7, 2).round(MidpointRounding::ToEven), BigInt::from(4));
        assert_eq!(real!(5, 2).round(MidpointRounding::AwayFromZero), BigInt::from(3));
        assert_eq!(real!(-5, 2).round(MidpointRounding::ToPositiveInfinity), BigInt::from(-2));
    }

    #[test]
    fn test_values_as_map_keys() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(real!(1, 2));
        seen.insert(real!(2, 4));
        seen.insert("0.5".parse::<Real>().unwrap());
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let value = real!(-22, 7);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"-22/7\"");

        let back: Real = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Real>("\"1/0\"").is_err());
        assert!(serde_json::from_str::<Real>("\"pi\"").is_err());
        assert!(serde_json::from_str::<Real>("3").is_err());
    }

    #[test]
    fn test_large_values_stay_exact() {
        let big: Real = "123456789012345678901234567890/7".parse().unwrap();
        let back = &big * &real!(7);
        assert_eq!(
            back.to_bigint().unwrap().to_string(),
            "123456789012345678901234567890"
        );
    }
}
