use crate::chain::Chain;
use crate::types::Value;

/// Aggregate statistics over the values in a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueSummary {
    pub count: usize,
    pub total: u128,
    pub min: Value,
    pub max: Value,
    pub mean: f64,
}

/// Compute value statistics for a chain in a single traversal.
pub fn value_summary(chain: &Chain) -> ValueSummary {
    let mut count = 0usize;
    let mut total = 0u128;
    let mut min = Value::MAX;
    let mut max = Value::MIN;
    for record in chain {
        count += 1;
        total += u128::from(record.value);
        min = min.min(record.value);
        max = max.max(record.value);
    }
    ValueSummary {
        count,
        total,
        min,
        max,
        mean: total as f64 / count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn chain_of(values: &[Value]) -> Chain {
        Chain::from_records(
            values
                .iter()
                .enumerate()
                .map(|(idx, &value)| Record::new(format!("r{idx}"), value)),
        )
        .expect("test chains are non-empty")
    }

    #[test]
    fn value_summary_reports_extremes_and_mean() {
        let summary = value_summary(&chain_of(&[4, 2, 6]));
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, 12);
        assert_eq!(summary.min, 2);
        assert_eq!(summary.max, 6);
        assert!((summary.mean - 4.0).abs() < 1e-9);
    }

    #[test]
    fn value_summary_of_a_singleton_uses_its_value_throughout() {
        let summary = value_summary(&chain_of(&[7]));
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.min, 7);
        assert_eq!(summary.max, 7);
        assert!((summary.mean - 7.0).abs() < 1e-9);
    }
}
