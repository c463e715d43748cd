//! Property-based tests for the pure gating core.
//!
//! These tests use proptest to verify the rate-limit invariants hold
//! across many randomly generated states, clocks, and policies.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use proptest::prelude::*;
use resend_gate::{Gate, Rejection, ResendOutcome, ResendPolicy, ResendState};

const COOLDOWN_MS: i64 = 60_000;

prop_compose! {
    fn arbitrary_instant()(secs in 0i64..4_102_444_800) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(secs, 0).expect("in range")
    }
}

prop_compose! {
    fn state_with_attempts(max: u32)
        (count in 0..max, last in arbitrary_instant()) -> ResendState
    {
        let mut state = ResendState::new();
        for _ in 0..count {
            state = state.record_success(last);
        }
        state
    }
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(
        state in state_with_attempts(8),
        now in arbitrary_instant()
    ) {
        let policy = ResendPolicy::default();
        let first = policy.evaluate(&state, now);
        let second = policy.evaluate(&state, now);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn at_or_above_ceiling_is_always_terminal(
        count in 5u32..100,
        last in arbitrary_instant(),
        elapsed_ms in 0i64..1_000_000_000
    ) {
        let policy = ResendPolicy::default();
        let mut state = ResendState::new();
        for _ in 0..count {
            state = state.record_success(last);
        }

        let now = last + ChronoDuration::milliseconds(elapsed_ms);
        prop_assert_eq!(
            policy.evaluate(&state, now),
            Gate::Blocked(Rejection::LimitExceeded)
        );
    }

    #[test]
    fn inside_cooldown_is_blocked_with_exact_countdown(
        count in 1u32..5,
        last in arbitrary_instant(),
        elapsed_ms in 0i64..COOLDOWN_MS
    ) {
        let policy = ResendPolicy::default();
        let mut state = ResendState::new();
        for _ in 0..count {
            state = state.record_success(last);
        }

        let now = last + ChronoDuration::milliseconds(elapsed_ms);
        let expected = ((COOLDOWN_MS - elapsed_ms) as u64).div_ceil(1000);

        prop_assert_eq!(
            policy.evaluate(&state, now),
            Gate::Blocked(Rejection::CooldownActive { seconds_remaining: expected })
        );
        prop_assert!(expected >= 1);
        prop_assert!(expected <= 60);
    }

    #[test]
    fn past_cooldown_below_ceiling_is_open(
        count in 1u32..5,
        last in arbitrary_instant(),
        extra_ms in 0i64..1_000_000_000
    ) {
        let policy = ResendPolicy::default();
        let mut state = ResendState::new();
        for _ in 0..count {
            state = state.record_success(last);
        }

        let now = last + ChronoDuration::milliseconds(COOLDOWN_MS + extra_ms);
        prop_assert_eq!(policy.evaluate(&state, now), Gate::Open);
    }

    #[test]
    fn fresh_state_is_open_at_any_time(now in arbitrary_instant()) {
        let policy = ResendPolicy::default();
        prop_assert_eq!(policy.evaluate(&ResendState::new(), now), Gate::Open);
    }

    #[test]
    fn record_success_is_pure_and_monotonic(
        state in state_with_attempts(8),
        now in arbitrary_instant()
    ) {
        let before = state.attempt_count();
        let updated = state.record_success(now);

        // Original unchanged, new state advanced by exactly one.
        prop_assert_eq!(state.attempt_count(), before);
        prop_assert_eq!(updated.attempt_count(), before + 1);
        prop_assert_eq!(updated.last_attempt_at(), Some(now));
    }

    #[test]
    fn state_roundtrip_serialization(state in state_with_attempts(8)) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ResendState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn cooldown_outcome_roundtrips_with_camel_case_field(
        seconds_remaining in 1u64..=60
    ) {
        let outcome = ResendOutcome::Cooldown { seconds_remaining };
        let value = serde_json::to_value(&outcome).unwrap();

        prop_assert_eq!(value["kind"].as_str(), Some("cooldown"));
        prop_assert_eq!(value["secondsRemaining"].as_u64(), Some(seconds_remaining));

        let back: ResendOutcome = serde_json::from_value(value).unwrap();
        prop_assert_eq!(outcome, back);
    }
}
