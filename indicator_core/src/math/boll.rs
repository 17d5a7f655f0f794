use super::rolling::rolling_mean_std;
use crate::common::{
    diagnostic::Diagnostic,
    error::{ErrCode, IndicatorError},
};
use crate::series::{
    derived::{ColumnId, DerivedColumn},
    time_series::TimeSeries,
};

pub const BOLL_WINDOW: usize = 20;
// Band multiplier is a fixed policy constant
pub const BOLL_K: f64 = 2.0;

/// The three Bollinger columns, index-aligned with their source series
#[derive(Debug, Clone)]
pub struct BollBands {
    pub mid: DerivedColumn,
    pub upper: DerivedColumn,
    pub lower: DerivedColumn,
}

/// SMA envelope of the close price over `window`.
///
/// Mean and standard deviation share one window, so
/// `lower <= mid <= upper` holds wherever the columns are defined.
pub fn bollinger_bands(
    series: &TimeSeries,
    window: usize,
) -> Result<(BollBands, Option<Diagnostic>), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::new(
            "bollinger window must be positive",
            ErrCode::ParaError,
        ));
    }

    let (means, std_devs) = rolling_mean_std(&series.closes(), window);

    let upper: Vec<Option<f64>> = means
        .iter()
        .zip(&std_devs)
        .map(|(&m, &s)| Some(m? + BOLL_K * s?))
        .collect();
    let lower: Vec<Option<f64>> = means
        .iter()
        .zip(&std_devs)
        .map(|(&m, &s)| Some(m? - BOLL_K * s?))
        .collect();

    let bands = BollBands {
        mid: DerivedColumn::new(ColumnId::BollMid, means),
        upper: DerivedColumn::new(ColumnId::BollUpper, upper),
        lower: DerivedColumn::new(ColumnId::BollLower, lower),
    };

    let diagnostic = if bands.mid.is_all_undefined() {
        Some(Diagnostic::warning(format!(
            "insufficient records to compute {}-period Bollinger Bands: got {}",
            window,
            series.len()
        )))
    } else {
        None
    };

    Ok((bands, diagnostic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::time::Time;
    use crate::common::utils::fuzzy_eq;
    use crate::series::candle::Candle;

    fn series_with_closes(closes: &[f64]) -> TimeSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::raw(Time::new(i as i64 * 86400), c, c, c, c, 1.0))
            .collect();
        TimeSeries::new(candles).unwrap()
    }

    #[test]
    fn test_band_ordering_wherever_defined() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let series = series_with_closes(&closes);
        let (bands, _) = bollinger_bands(&series, 20).unwrap();

        for i in 0..series.len() {
            match (bands.mid.value_at(i), bands.upper.value_at(i), bands.lower.value_at(i)) {
                (Some(mid), Some(upper), Some(lower)) => {
                    assert!(lower <= mid && mid <= upper, "ordering broken at {}", i);
                }
                (None, None, None) => assert!(i < 19),
                other => panic!("bands not aligned at {}: {:?}", i, other),
            }
        }
    }

    #[test]
    fn test_constant_series_collapses_bands() {
        let series = series_with_closes(&[42.0; 20]);
        let (bands, diagnostic) = bollinger_bands(&series, 20).unwrap();

        assert!(diagnostic.is_none());
        assert!(bands.mid.values[..19].iter().all(|v| v.is_none()));
        assert!(fuzzy_eq(bands.mid.value_at(19).unwrap(), 42.0));
        assert!(fuzzy_eq(bands.upper.value_at(19).unwrap(), 42.0));
        assert!(fuzzy_eq(bands.lower.value_at(19).unwrap(), 42.0));
    }

    #[test]
    fn test_band_width_follows_std_dev() {
        // alternating 10/20 closes: window mean 15, population std dev 5
        let closes: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 10.0 } else { 20.0 }).collect();
        let series = series_with_closes(&closes);
        let (bands, _) = bollinger_bands(&series, 20).unwrap();

        assert!(fuzzy_eq(bands.mid.value_at(19).unwrap(), 15.0));
        assert!(fuzzy_eq(bands.upper.value_at(19).unwrap(), 25.0));
        assert!(fuzzy_eq(bands.lower.value_at(19).unwrap(), 5.0));
    }

    #[test]
    fn test_short_series_diagnoses_insufficient_history() {
        let series = series_with_closes(&[1.0, 2.0]);
        let (bands, diagnostic) = bollinger_bands(&series, 20).unwrap();
        assert!(bands.mid.is_all_undefined());
        assert!(bands.upper.is_all_undefined());
        assert!(diagnostic.unwrap().message.contains("Bollinger"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let series = series_with_closes(&[1.0]);
        let err = bollinger_bands(&series, 0).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
    }
}
