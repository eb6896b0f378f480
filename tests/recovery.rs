use lcg48::{recover_generator, recover_state, Candidates, LcgError, Lcg48};
use proptest::prelude::*;
use rstest::*;

#[rstest]
#[case(48)]
#[case(40)]
#[case(32)]
fn recovered_generator_follows_the_original_stream(#[case] bits: u32) {
    let mut victim = Lcg48::new(5);
    let first = victim.next(bits).unwrap();
    let second = victim.next(bits).unwrap();

    let mut clone = recover_generator(first, second, bits).unwrap();
    assert_eq!(clone.next(bits).unwrap(), second);
    assert_eq!(clone.state(), victim.state());
    assert_eq!(
        clone.next_values(16, bits).unwrap(),
        victim.next_values(16, bits).unwrap()
    );
}

#[test]
fn ties_resolve_to_the_lowest_candidate() {
    // Both states turn 0xbb0359 into 0x2d35cb at 24 bits; seed 5 took the second.
    let all: Vec<u64> = Candidates::new(0xbb_0359, 0x2d_35cb, 24)
        .unwrap()
        .map(|s| s.get())
        .collect();
    assert_eq!(all, vec![0xbb03_5947_cb92, 0xbb03_59bf_8a53]);

    let state = recover_state(0xbb_0359, 0x2d_35cb, 24).unwrap();
    assert_eq!(state.get(), 0xbb03_5947_cb92);
    assert_eq!(Lcg48::with_state(state).next(24).unwrap(), 0x2d_35cb);
}

#[rstest]
#[case(0xbb03_59bf, 0x2d35_cb59, 32)]
#[case(0xbb03_59bf, 0x2d35_cb50, 32)]
#[case(0xbb03_59bf_8a53, 0x2d35_cb58_7763, 48)]
fn non_consecutive_outputs_are_not_found(
    #[case] output1: u64,
    #[case] output2: u64,
    #[case] bits: u32,
) {
    match recover_state(output1, output2, bits) {
        Err(LcgError::NotFound {
            output1: o1,
            output2: o2,
            bits: b,
        }) => assert_eq!((o1, o2, b), (output1, output2, bits)),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn exhausted_candidates_stay_exhausted() {
    let mut candidates = Candidates::new(0xbb03_59bf, 0x2d35_cb59, 32).unwrap();
    assert_eq!(candidates.next(), None);
    assert_eq!(candidates.tried(), 1 << 16);
    assert_eq!(candidates.remaining(), 0);
    assert_eq!(candidates.next(), None);
}

#[rstest]
#[case(0, 0, 0)]
#[case(0, 0, 49)]
#[case(2, 0, 1)]
#[case(0, 1 << 40, 40)]
fn bad_arguments_are_rejected(#[case] output1: u64, #[case] output2: u64, #[case] bits: u32) {
    let err = recover_state(output1, output2, bits).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(!err.is_not_found());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recovered_state_reproduces_second_output(seed in any::<u64>(), bits in 32u32..=48) {
        let mut victim = Lcg48::new(seed);
        let first = victim.next(bits).unwrap();
        let second = victim.next(bits).unwrap();

        let state = recover_state(first, second, bits).unwrap();
        prop_assert_eq!(state.get() >> (48 - bits), first);
        prop_assert_eq!(Lcg48::with_state(state).next(bits).unwrap(), second);
    }
}
