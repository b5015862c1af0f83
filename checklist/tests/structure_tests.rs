use checklist::{Direction, market_structure};

#[test]
fn break_above_prior_window_high_wins_over_three_back_rule() {
    // Last close exceeds both the prior window high and the close
    // three bars back; the break rule must win.
    let closes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 20.0];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Bullish);
    assert_eq!(result.confidence, 100);
}

#[test]
fn break_below_prior_window_low_is_bearish_100() {
    let closes = [9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.5, 0.5];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Bearish);
    assert_eq!(result.confidence, 100);
}

#[test]
fn above_three_back_without_break_is_bullish_70() {
    let closes = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 4.0, 5.0, 4.5];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Bullish);
    assert_eq!(result.confidence, 70);
}

#[test]
fn below_three_back_without_break_is_bearish_70() {
    let closes = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 6.0, 5.0, 5.5];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Bearish);
    assert_eq!(result.confidence, 70);
}

#[test]
fn flat_window_is_neutral_40() {
    let closes = [5.0; 10];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Neutral);
    assert_eq!(result.confidence, 40);
}

#[test]
fn only_the_last_ten_closes_are_inspected() {
    // A huge close outside the window must not suppress the break.
    let closes = [100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 20.0];
    let result = market_structure(&closes);
    assert_eq!(result.direction, Direction::Bullish);
    assert_eq!(result.confidence, 100);
}
