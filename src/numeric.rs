/// Rounds to one decimal place on the exact binary value, sending exact ties
/// to the even digit.
///
/// `2.15` is stored just below the midpoint and becomes `2.1`; `2.25` is an
/// exact tie and becomes `2.2`.
pub fn round_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_and_near_ties_follow_the_stored_value() {
        assert_eq!(round_tenth(2.25), 2.2);
        assert_eq!(round_tenth(2.15), 2.1);
        assert_eq!(round_tenth(3.05), 3.0);
        assert_eq!(round_tenth(15.25), 15.2);
        assert_eq!(round_tenth(24.75), 24.8);
        assert_eq!(round_tenth(1.75), 1.8);
    }

    #[test]
    fn plain_values_round_to_nearest() {
        assert_eq!(round_tenth(25.0), 25.0);
        assert_eq!(round_tenth(9.04), 9.0);
        assert_eq!(round_tenth(-0.96), -1.0);
    }
}
