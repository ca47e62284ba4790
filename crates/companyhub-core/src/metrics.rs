//! Generic aggregation utilities
//!
//! Every view derives its summary figures through these three operations
//! instead of hand-writing its own reduce pass: sum of a field over matching
//! records, count of matching records, and a rounded mean.

use rust_decimal::Decimal;

/// Sum a money field over the items matching a predicate
pub fn sum_by<T>(
    items: &[T],
    predicate: impl Fn(&T) -> bool,
    selector: impl Fn(&T) -> Decimal,
) -> Decimal {
    items
        .iter()
        .filter(|item| predicate(item))
        .map(|item| selector(item))
        .sum()
}

/// Count the items matching a predicate
pub fn count_by<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// Mean of a numeric field over all items, 0.0 for an empty collection
pub fn mean<T>(items: &[T], selector: impl Fn(&T) -> f64) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let total: f64 = items.iter().map(|item| selector(item)).sum();
    total / items.len() as f64
}

/// Mean of a numeric field rounded to the nearest integer, 0 for an empty
/// collection
pub fn mean_round<T>(items: &[T], selector: impl Fn(&T) -> f64) -> u32 {
    mean(items, selector).round() as u32
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_by() {
        let values = [1i64, -2, 3, -4, 5];
        let positives = sum_by(&values, |v| *v > 0, |v| Decimal::from(*v));
        assert_eq!(positives, Decimal::from(9));
        let negatives = sum_by(&values, |v| *v < 0, |v| Decimal::from(*v));
        assert_eq!(negatives, Decimal::from(-6));
    }

    #[test]
    fn test_sum_by_empty() {
        let values: [i64; 0] = [];
        assert_eq!(sum_by(&values, |_| true, |v| Decimal::from(*v)), Decimal::ZERO);
    }

    #[test]
    fn test_count_by() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(count_by(&values, |v| v % 2 == 0), 2);
        assert_eq!(count_by(&values, |_| false), 0);
        assert_eq!(count_by(&values, |_| true), 5);
    }

    #[test]
    fn test_mean_round() {
        let values = [75.0, 15.0, 100.0, 30.0];
        assert_eq!(mean_round(&values, |v| *v), 55);

        let values = [1.0, 2.0];
        assert_eq!(mean_round(&values, |v| *v), 2); // 1.5 rounds up
    }

    #[test]
    fn test_mean_empty() {
        let values: [f64; 0] = [];
        assert_eq!(mean(&values, |v| *v), 0.0);
        assert_eq!(mean_round(&values, |v| *v), 0);
    }

    #[test]
    fn test_mean_unrounded() {
        let values = [85.0, 92.0, 78.0, 88.0, 95.0];
        let avg = mean(&values, |v| *v);
        assert!((avg - 87.6).abs() < 1e-9);
    }
}
