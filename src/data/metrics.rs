use serde::Serialize;

use super::model::Dataset;

/// Placeholder shown for metrics that are undefined on an empty selection.
pub const NOT_AVAILABLE: &str = "N/A";

/// Headline numbers over the current filtered+sorted records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub count: usize,
    /// Mean over present watch times; `None` when there are none.
    pub mean_watchtime: Option<f64>,
    pub latest_year: Option<i32>,
}

impl Metrics {
    pub fn compute(dataset: &Dataset, indices: &[usize]) -> Self {
        let records = indices.iter().map(|&i| &dataset.records[i]);

        let (sum, n) = records
            .clone()
            .filter_map(|r| r.watchtime)
            .fold((0.0, 0usize), |(sum, n), w| (sum + w, n + 1));
        let mean_watchtime = (n > 0).then(|| sum / n as f64);

        Metrics {
            count: indices.len(),
            mean_watchtime,
            latest_year: records.filter_map(|r| r.premiere).max(),
        }
    }

    pub fn mean_label(&self) -> String {
        match self.mean_watchtime {
            Some(mean) => format!("{mean:.2}M"),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn latest_year_label(&self) -> String {
        match self.latest_year {
            Some(year) => year.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ContentType;
    use crate::data::model::tests::record;

    #[test]
    fn aggregates_present_values() {
        let ds = Dataset::from_records(vec![
            record("A", ContentType::Movie, Some("Drama"), Some(2015), Some(50.0)),
            record("B", ContentType::Movie, Some("Drama"), Some(2018), Some(90.0)),
            record("C", ContentType::Movie, Some("Drama"), Some(2012), None),
        ]);
        let m = Metrics::compute(&ds, &[1, 0, 2]);
        assert_eq!(m.count, 3);
        assert_eq!(m.mean_watchtime, Some(70.0));
        assert_eq!(m.latest_year, Some(2018));
        assert_eq!(m.mean_label(), "70.00M");
        assert_eq!(m.latest_year_label(), "2018");
    }

    #[test]
    fn empty_selection_renders_placeholders() {
        let ds = Dataset::default();
        let m = Metrics::compute(&ds, &[]);
        assert_eq!(m.count, 0);
        assert_eq!(m.mean_watchtime, None);
        assert_eq!(m.latest_year, None);
        assert_eq!(m.mean_label(), NOT_AVAILABLE);
        assert_eq!(m.latest_year_label(), NOT_AVAILABLE);
    }
}
