//! Property-based tests for the game rules.
//!
//! 1. **Secret shape**: any generated secret has three distinct digits in 1..=9
//! 2. **Round-trip**: parsing a distinct-digit string returns those digits in order
//! 3. **Count bounds**: strikes + balls <= 3, and a strikeout has no balls
//! 4. **Self match**: a secret judged against itself is always complete

use proptest::prelude::*;
use proptest::sample::subsequence;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_baseball::{Guess, RandomPicker, Secret, generate_secret, judge, parse_guess};

fn distinct_digits() -> impl Strategy<Value = Vec<u8>> {
    subsequence((1u8..=9).collect::<Vec<_>>(), 3).prop_shuffle()
}

fn as_array(values: &[u8]) -> [u8; 3] {
    [values[0], values[1], values[2]]
}

proptest! {
    #[test]
    fn prop_generated_secret_is_well_formed(seed in any::<u64>()) {
        let secret = generate_secret(&mut RandomPicker::new(StdRng::seed_from_u64(seed)));
        let values: Vec<u8> = secret.digits().iter().map(|d| d.value()).collect();

        prop_assert_eq!(values.len(), 3);
        prop_assert!(values.iter().all(|v| (1..=9).contains(v)));
        prop_assert_ne!(values[0], values[1]);
        prop_assert_ne!(values[0], values[2]);
        prop_assert_ne!(values[1], values[2]);
    }

    #[test]
    fn prop_parse_round_trips(values in distinct_digits()) {
        let raw: String = values.iter().map(|v| char::from(b'0' + v)).collect();
        let guess = parse_guess(&raw).unwrap();
        let parsed: Vec<u8> = guess.digits().iter().map(|d| d.value()).collect();
        prop_assert_eq!(parsed, values);
    }

    #[test]
    fn prop_judgment_counts_bounded(secret in distinct_digits(), guess in distinct_digits()) {
        let secret = Secret::try_from(as_array(&secret)).unwrap();
        let guess = Guess::try_from(as_array(&guess)).unwrap();
        let judgment = judge(&secret, &guess);

        prop_assert!(judgment.strike_count() + judgment.ball_count() <= 3);
        if judgment.strike_count() == 3 {
            prop_assert_eq!(judgment.ball_count(), 0);
            prop_assert!(judgment.is_complete());
        } else {
            prop_assert!(!judgment.is_complete());
        }
    }

    #[test]
    fn prop_self_match_is_complete(values in distinct_digits()) {
        let secret = Secret::try_from(as_array(&values)).unwrap();
        let guess = Guess::try_from(as_array(&values)).unwrap();
        prop_assert!(judge(&secret, &guess).is_complete());
    }
}

#[test]
fn test_digits_reject_invalid_json() {
    assert!(serde_json::from_str::<Secret>("[1,2,3]").is_ok());
    assert!(serde_json::from_str::<Secret>("[1,1,3]").is_err());
    assert!(serde_json::from_str::<Secret>("[0,2,3]").is_err());
    assert_eq!(
        serde_json::to_string(&Secret::try_from([4u8, 5, 6]).unwrap()).unwrap(),
        "[4,5,6]"
    );
}
