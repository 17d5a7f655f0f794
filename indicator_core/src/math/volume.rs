use super::rolling::rolling_mean;
use crate::common::{
    diagnostic::Diagnostic,
    error::{ErrCode, IndicatorError},
};
use crate::series::{
    derived::{ColumnId, DerivedColumn},
    time_series::TimeSeries,
};

// Window is a sample count, not a time duration; 24 matches hourly bars
pub const VOLUME_MA_WINDOW: usize = 24;

/// Rolling mean of traded volume.
///
/// The column is always returned; when the series is shorter than the
/// window every position is undefined and a warning diagnostic is attached
/// so the caller can decide whether to display it.
pub fn moving_volume_average(
    series: &TimeSeries,
    window: usize,
) -> Result<(DerivedColumn, Option<Diagnostic>), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::new(
            "volume average window must be positive",
            ErrCode::ParaError,
        ));
    }

    let column = DerivedColumn::new(ColumnId::VolumeMa, rolling_mean(&series.volumes(), window));

    let diagnostic = if column.is_all_undefined() {
        Some(Diagnostic::warning(format!(
            "insufficient records to compute the {}-sample moving volume average: got {}",
            window,
            series.len()
        )))
    } else {
        None
    };

    Ok((column, diagnostic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::Time;
    use crate::common::utils::fuzzy_eq;
    use crate::series::candle::Candle;

    fn series_with_volumes(volumes: &[f64]) -> TimeSeries {
        let candles = volumes
            .iter()
            .enumerate()
            .map(|(i, &v)| Candle::raw(Time::new(i as i64 * 3600), 1.0, 1.0, 1.0, 1.0, v))
            .collect();
        TimeSeries::new(candles).unwrap()
    }

    #[test]
    fn test_window_of_24_over_25_records() {
        let volumes: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        let series = series_with_volumes(&volumes);
        let (column, diagnostic) = moving_volume_average(&series, 24).unwrap();

        assert!(diagnostic.is_none());
        assert!(column.values[..23].iter().all(|v| v.is_none()));
        assert!(fuzzy_eq(column.value_at(23).unwrap(), 12.5));
        assert!(fuzzy_eq(column.value_at(24).unwrap(), 13.5));
    }

    #[test]
    fn test_short_series_diagnoses_insufficient_history() {
        let series = series_with_volumes(&[10.0, 20.0, 30.0]);
        let (column, diagnostic) = moving_volume_average(&series, 24).unwrap();

        assert_eq!(column.len(), 3);
        assert!(column.is_all_undefined());
        let diagnostic = diagnostic.unwrap();
        assert!(diagnostic.message.contains("moving volume average"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let series = series_with_volumes(&[1.0]);
        let err = moving_volume_average(&series, 0).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
    }
}
