use super::super::domain::{Dimension, Polarity, ResponseSet, LIKERT_MAX, LIKERT_MIN};

/// Sum of the scale bounds; inverting a value on the 1..=5 scale is `6 - v`.
const SCALE_PIVOT: f64 = (LIKERT_MIN + LIKERT_MAX) as f64;

/// Inverts a single answer when its item is phrased against the dimension's direction.
pub fn apply_reverse_scoring(value: f64, reverse_scored: bool) -> f64 {
    if reverse_scored {
        SCALE_PIVOT - value
    } else {
        value
    }
}

/// Turns a dimension mean into the shared "higher = more risk" orientation.
pub fn apply_polarity_adjustment(mean: f64, polarity: Polarity) -> f64 {
    match polarity {
        Polarity::Positive => SCALE_PIVOT - mean,
        Polarity::Negative => mean,
    }
}

/// Unclassified statistics for one dimension.
///
/// When nothing was answered every mean is `0.0` and `answered_count` is `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionStatistic {
    pub raw_mean: f64,
    pub scored_mean: f64,
    pub adjusted_mean: f64,
    pub answered_count: usize,
    pub item_count: usize,
}

impl DimensionStatistic {
    pub fn is_answered(&self) -> bool {
        self.answered_count > 0
    }

    pub fn completeness(&self) -> f64 {
        if self.item_count == 0 {
            0.0
        } else {
            self.answered_count as f64 / self.item_count as f64
        }
    }
}

/// Averages the answered items of a dimension.
///
/// Reverse scoring is applied per item before averaging, polarity once on the mean.
/// Unanswered items are left out of the average.
pub fn aggregate(dimension: &Dimension, responses: &ResponseSet) -> DimensionStatistic {
    let mut raw_sum = 0.0;
    let mut scored_sum = 0.0;
    let mut answered_count = 0usize;

    for item in &dimension.items {
        let Some(value) = responses.get(item.id) else {
            continue;
        };
        let value = f64::from(value);
        raw_sum += value;
        scored_sum += apply_reverse_scoring(value, item.reverse_scored);
        answered_count += 1;
    }

    if answered_count == 0 {
        return DimensionStatistic {
            raw_mean: 0.0,
            scored_mean: 0.0,
            adjusted_mean: 0.0,
            answered_count: 0,
            item_count: dimension.items.len(),
        };
    }

    let count = answered_count as f64;
    let scored_mean = scored_sum / count;

    DimensionStatistic {
        raw_mean: raw_sum / count,
        scored_mean,
        adjusted_mean: apply_polarity_adjustment(scored_mean, dimension.polarity),
        answered_count,
        item_count: dimension.items.len(),
    }
}
