//! End-to-end evaluator vectors through the public library API.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stakelord::domain::{
    evaluate, evaluate_form, Bankroll, DomainError, Odds, OddsError, OddsFormat, StakeForm,
    StakeInput, WinProbability,
};

fn input(bankroll: Decimal, odds: Odds, probability: Decimal) -> StakeInput {
    StakeInput::new(
        Bankroll::try_new(bankroll).unwrap(),
        odds,
        WinProbability::try_new(probability).unwrap(),
    )
}

#[test]
fn plus_200_normalizes_to_three_and_a_third() {
    let quote = Odds::american(dec!(200)).quote().unwrap();

    assert_eq!(quote.decimal(), dec!(3.0));
    assert_eq!(quote.net(), dec!(2.0));
    assert_eq!(quote.implied_probability().round_dp(2), dec!(33.33));
}

#[test]
fn minus_150_normalizes_to_sixty_percent() {
    let quote = Odds::american(dec!(-150)).quote().unwrap();

    assert_eq!(quote.decimal().round_dp(4), dec!(1.6667));
    assert_eq!(quote.implied_probability(), dec!(60));
}

#[test]
fn decimal_odds_at_or_below_even_are_invalid() {
    for value in [dec!(1.0), dec!(0.99), dec!(0.5), Decimal::ZERO, dec!(-2)] {
        assert_eq!(
            Odds::decimal(value).quote(),
            Err(DomainError::InvalidOdds(OddsError::NotAboveEven)),
            "decimal odds {value} should be rejected"
        );
    }
}

#[test]
fn favorable_bet_sizes_a_third_of_bankroll() {
    // 55% against +200: f* = (2 * 0.55 - 0.45) / 2 = 0.325
    let rec = evaluate(&input(dec!(1000), Odds::american(dec!(200)), dec!(55))).unwrap();

    assert_eq!(rec.kelly_fraction(), dec!(0.325));
    assert_eq!(rec.full_stake(), dec!(325));
    assert_eq!(rec.half_stake(), dec!(162.5));
    assert_eq!(rec.edge().round_dp(2), dec!(21.67));
    assert!(rec.positive_edge());
}

#[test]
fn unfavorable_bet_displays_zero() {
    // 40% against +100: implied 50%, edge -10 points
    let rec = evaluate(&input(dec!(1000), Odds::american(dec!(100)), dec!(40))).unwrap();

    assert_eq!(rec.implied_probability(), dec!(50));
    assert_eq!(rec.edge(), dec!(-10));
    assert!(!rec.positive_edge());
    assert_eq!(rec.display_full_stake(), Decimal::ZERO);
    assert_eq!(rec.display_half_stake(), Decimal::ZERO);
}

#[test]
fn form_fields_round_trip_through_parse() {
    let form = StakeForm {
        bankroll: " 1000 ".into(),
        odds: "+200".into(),
        odds_format: OddsFormat::American,
        win_probability: "55".into(),
    };

    let rec = evaluate_form(&form).unwrap();
    assert_eq!(rec.full_stake(), dec!(325));
}

#[test]
fn validation_order_is_probability_bankroll_odds() {
    let all_bad = StakeForm {
        bankroll: "-1".into(),
        odds: "garbage".into(),
        odds_format: OddsFormat::Decimal,
        win_probability: "-5".into(),
    };
    assert_eq!(all_bad.parse(), Err(DomainError::InvalidProbability));

    let bad_bankroll_and_odds = StakeForm {
        win_probability: "55".into(),
        ..all_bad.clone()
    };
    assert_eq!(
        bad_bankroll_and_odds.parse(),
        Err(DomainError::InvalidBankroll)
    );

    let bad_odds_only = StakeForm {
        bankroll: "100".into(),
        ..bad_bankroll_and_odds.clone()
    };
    assert_eq!(
        bad_odds_only.parse(),
        Err(DomainError::InvalidOdds(OddsError::NotANumber))
    );
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let stake = input(dec!(987.65), Odds::american(dec!(-115)), dec!(58.2));

    let runs: Vec<_> = (0..3).map(|_| evaluate(&stake).unwrap()).collect();

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}
