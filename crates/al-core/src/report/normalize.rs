//! Percentage renormalization for model-produced breakdowns.
//!
//! The model is asked to make the percentages sum to 100, but the request is
//! not always honored. The pie chart in the Results view depends on an exact
//! total, so the breakdown is rescaled here: every entry except the last is
//! rounded to the nearest integer, and the last entry absorbs the rounding
//! drift.

use super::AncestryRegion;

/// Rescale `breakdown` in place so the percentages sum to exactly 100.
///
/// Rules:
/// - empty input, a raw sum of exactly 100, or a non-positive raw sum are
///   left unchanged (no scale factor is defined for a zero sum);
/// - otherwise each entry but the last becomes `round(raw * 100 / sum)` and
///   the last becomes `100 - running_total`;
/// - a negative last value is clamped to 0. The clamped total may then fall
///   short of 100; this is intentional and not corrected further.
///
/// Order and entry count are always preserved.
pub fn normalize_breakdown(breakdown: &mut [AncestryRegion]) {
    if breakdown.is_empty() {
        return;
    }

    let raw_sum: f64 = breakdown.iter().map(|r| r.percentage).sum();
    if raw_sum <= 0.0 || raw_sum == 100.0 {
        return;
    }

    let scale = 100.0 / raw_sum;
    let last = breakdown.len() - 1;
    let mut running_total = 0.0;

    for region in &mut breakdown[..last] {
        region.percentage = (region.percentage * scale).round();
        running_total += region.percentage;
    }

    breakdown[last].percentage = 100.0 - running_total;
    if breakdown[last].percentage < 0.0 {
        breakdown[last].percentage = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(percentages: &[f64]) -> Vec<AncestryRegion> {
        percentages
            .iter()
            .enumerate()
            .map(|(i, &p)| AncestryRegion {
                region: format!("region-{i}"),
                percentage: p,
                confidence: None,
            })
            .collect()
    }

    fn total(breakdown: &[AncestryRegion]) -> f64 {
        breakdown.iter().map(|r| r.percentage).sum()
    }

    #[test]
    fn empty_input_is_untouched() {
        let mut breakdown = regions(&[]);
        normalize_breakdown(&mut breakdown);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn exact_hundred_is_untouched() {
        let mut breakdown = regions(&[55.0, 30.0, 15.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(
            breakdown.iter().map(|r| r.percentage).collect::<Vec<_>>(),
            vec![55.0, 30.0, 15.0]
        );
    }

    #[test]
    fn zero_sum_is_a_no_op() {
        let mut breakdown = regions(&[0.0, 0.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(total(&breakdown), 0.0);
    }

    #[test]
    fn overshooting_sum_is_scaled_to_hundred() {
        // 30 + 30 + 55 = 115; the last entry absorbs the rounding drift.
        let mut breakdown = regions(&[30.0, 30.0, 55.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(breakdown[0].percentage, 26.0);
        assert_eq!(breakdown[1].percentage, 26.0);
        assert_eq!(breakdown[2].percentage, 48.0);
        assert_eq!(total(&breakdown), 100.0);
    }

    #[test]
    fn undershooting_sum_is_scaled_to_hundred() {
        let mut breakdown = regions(&[10.0, 20.0, 30.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(total(&breakdown), 100.0);
    }

    #[test]
    fn order_and_count_are_preserved() {
        let mut breakdown = regions(&[5.0, 90.0, 40.0, 2.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(breakdown.len(), 4);
        for (i, region) in breakdown.iter().enumerate() {
            assert_eq!(region.region, format!("region-{i}"));
        }
        assert_eq!(total(&breakdown), 100.0);
    }

    #[test]
    fn single_entry_becomes_hundred() {
        let mut breakdown = regions(&[37.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(breakdown[0].percentage, 100.0);
    }

    #[test]
    fn negative_last_value_is_clamped_to_zero() {
        // Scaled values are [49.5, 50.5, 0]; both ties round away from zero,
        // so the prefix overshoots 100 and the last entry lands at -1. The
        // clamp sets it to 0 and leaves the total off by the clamped amount.
        let mut breakdown = regions(&[99.0, 101.0, 0.0]);
        normalize_breakdown(&mut breakdown);
        assert_eq!(breakdown[0].percentage, 50.0);
        assert_eq!(breakdown[1].percentage, 51.0);
        assert_eq!(breakdown[2].percentage, 0.0);
        assert_eq!(total(&breakdown), 101.0);
    }
}
