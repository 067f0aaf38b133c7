#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use memdrift_agent::domain::{draw_step, next_value, CounterTable};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn sum_below_ceiling_is_kept() {
    assert_eq!(next_value(10, 20, 100), 30);
}

#[test]
fn sum_at_ceiling_is_not_a_reset() {
    assert_eq!(next_value(20, 80, 100), 100);
}

#[test]
fn overflow_yields_the_step_itself() {
    assert_eq!(next_value(80, 80, 100), 80);
    assert_eq!(next_value(100, 1, 100), 1);
}

#[test]
fn forced_draws_of_eighty_twice() {
    let first = next_value(0, 80, 100);
    assert_eq!(first, 80);
    let second = next_value(first, 80, 100);
    assert_eq!(second, 80);
}

#[test]
fn zero_step_keeps_the_value() {
    assert_eq!(next_value(42, 0, 100), 42);
}

#[test]
fn u64_overflow_counts_as_exceeding_the_ceiling() {
    assert_eq!(next_value(u64::MAX, 5, u64::MAX), 5);
}

#[test]
fn draws_stay_within_the_half_open_range() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..10_000 {
        assert!(draw_step(&mut rng, 50) < 50);
    }
}

#[test]
fn max_increase_of_one_always_draws_zero() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..1_000 {
        assert_eq!(draw_step(&mut rng, 1), 0);
    }
}

#[test]
fn walk_stays_bounded_and_saws() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut value = 0u64;
    let mut resets = 0u32;
    for _ in 0..1_000 {
        let step = draw_step(&mut rng, 50);
        let next = next_value(value, step, 100);
        assert!(next <= 100);
        if next < value {
            resets += 1;
        } else {
            assert_eq!(next, value + step);
        }
        value = next;
    }
    assert!(resets > 0, "a long walk under a low ceiling must wrap");
}

#[test]
fn table_registers_teams_at_zero() {
    let teams = vec!["a".to_string(), "b".to_string()];
    let table = CounterTable::new(&teams);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("a"), Some(0));
    assert_eq!(table.get("b"), Some(0));
}

#[test]
fn advancing_an_unknown_team_is_rejected() {
    let table = CounterTable::new(&["a".to_string()]);
    assert_eq!(table.advance("ghost", 10, 100), None);
    assert_eq!(table.get("ghost"), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn advance_applies_the_walk_rule() {
    let table = CounterTable::new(&["a".to_string()]);
    assert_eq!(table.advance("a", 80, 100), Some(80));
    assert_eq!(table.advance("a", 80, 100), Some(80));
    assert_eq!(table.get("a"), Some(80));
}

#[test]
fn duplicate_teams_share_one_entry() {
    let teams = vec!["a".to_string(), "a".to_string()];
    let table = CounterTable::new(&teams);
    assert_eq!(table.len(), 1);
    assert_eq!(table.advance("a", 10, 100), Some(10));
    assert_eq!(table.advance("a", 10, 100), Some(20));
}

#[test]
fn empty_table_reports_empty() {
    let table = CounterTable::new(&[]);
    assert!(table.is_empty());
}
