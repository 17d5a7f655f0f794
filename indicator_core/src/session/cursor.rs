use crate::common::time::Time;
use crate::common::utils::fmt_opt;
use crate::series::{
    derived::{ColumnId, ColumnSet},
    time_series::TimeSeries,
};

/// Values resolved for one cursor position
#[derive(Debug, Clone)]
pub struct DisplayValues {
    pub index: usize,
    pub time: Time,
    pub price: f64,
    pub indicators: Vec<(ColumnId, Option<f64>)>,
}

impl DisplayValues {
    /// Annotation text with two-decimal precision per line
    pub fn annotation(&self) -> String {
        let mut lines = vec![format!("Price: {:.2}", self.price)];
        for (id, value) in &self.indicators {
            lines.push(format!("{}: {}", id, fmt_opt(*value)));
        }
        lines.join("\n")
    }
}

/// Map a horizontal display coordinate to the nearest series index.
///
/// The coordinate is rounded to the nearest integer index; anything
/// landing outside `[0, len - 1]` resolves to `None` and the caller skips
/// the display update. Lookups are plain indexing, re-run per move event.
pub fn resolve_cursor(
    series: &TimeSeries,
    columns: &ColumnSet,
    ids: &[ColumnId],
    x: f64,
) -> Option<DisplayValues> {
    if !x.is_finite() {
        return None;
    }

    let rounded = x.round();
    if rounded < 0.0 || rounded >= series.len() as f64 {
        return None;
    }
    let index = rounded as usize;

    let candle = &series[index];
    let indicators = ids
        .iter()
        .map(|&id| (id, columns.value_at(id, index)))
        .collect();

    Some(DisplayValues {
        index,
        time: candle.time,
        price: candle.close,
        indicators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::Time;
    use crate::series::candle::Candle;
    use crate::series::derived::DerivedColumn;

    fn fixture() -> (TimeSeries, ColumnSet) {
        let candles = (0..10)
            .map(|i| {
                let close = 100.0 + i as f64;
                Candle::raw(Time::new(i as i64 * 3600), close, close, close, close, 50.0)
            })
            .collect();
        let series = TimeSeries::new(candles).unwrap();

        let mut columns = ColumnSet::new(series.len());
        let values = (0..10)
            .map(|i| if i < 4 { None } else { Some(10.0 * i as f64) })
            .collect();
        columns
            .insert(DerivedColumn::new(ColumnId::VolumeMa, values))
            .unwrap();

        (series, columns)
    }

    #[test]
    fn test_rounds_to_nearest_index() {
        let (series, columns) = fixture();
        let resolved = resolve_cursor(&series, &columns, &[ColumnId::VolumeMa], 4.6).unwrap();
        assert_eq!(resolved.index, 5);
        assert_eq!(resolved.price, 105.0);
        assert_eq!(resolved.indicators, vec![(ColumnId::VolumeMa, Some(50.0))]);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let (series, columns) = fixture();
        assert!(resolve_cursor(&series, &columns, &[], 12.0).is_none());
        assert!(resolve_cursor(&series, &columns, &[], -0.6).is_none());
        assert!(resolve_cursor(&series, &columns, &[], f64::NAN).is_none());
    }

    #[test]
    fn test_boundary_coordinates() {
        let (series, columns) = fixture();
        // -0.4 still rounds into the first index
        assert_eq!(resolve_cursor(&series, &columns, &[], -0.4).unwrap().index, 0);
        assert_eq!(resolve_cursor(&series, &columns, &[], 9.4).unwrap().index, 9);
        assert!(resolve_cursor(&series, &columns, &[], 9.6).is_none());
    }

    #[test]
    fn test_undefined_indicator_resolves_to_none() {
        let (series, columns) = fixture();
        let resolved = resolve_cursor(&series, &columns, &[ColumnId::VolumeMa], 2.0).unwrap();
        assert_eq!(resolved.indicators, vec![(ColumnId::VolumeMa, None)]);
    }

    #[test]
    fn test_annotation_formatting() {
        let (series, columns) = fixture();
        let resolved = resolve_cursor(&series, &columns, &[ColumnId::VolumeMa], 5.0).unwrap();
        assert_eq!(resolved.annotation(), "Price: 105.00\n24H_MOVING_VOLUME: 50.00");

        let unresolved = resolve_cursor(&series, &columns, &[ColumnId::VolumeMa], 1.0).unwrap();
        assert_eq!(unresolved.annotation(), "Price: 101.00\n24H_MOVING_VOLUME: n/a");
    }
}
