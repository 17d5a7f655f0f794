use super::rolling::RollingWindow;
use crate::common::{
    diagnostic::Diagnostic,
    error::{ErrCode, IndicatorError},
};
use crate::series::{
    derived::{ColumnId, DerivedColumn},
    time_series::TimeSeries,
};

pub const RSI_PERIOD: usize = 14;

// Simple rolling means of gain/loss, not Wilder smoothing
#[derive(Debug)]
pub struct RsiModel {
    last_price: Option<f64>,
    gains: RollingWindow,
    losses: RollingWindow,
}

impl RsiModel {
    pub fn new(period: usize) -> Self {
        Self {
            last_price: None,
            gains: RollingWindow::new(period),
            losses: RollingWindow::new(period),
        }
    }

    pub fn add(&mut self, price: f64) -> Option<f64> {
        let last_price = self.last_price.replace(price)?;
        let change = price - last_price;

        if change >= 0.0 {
            self.gains.push(change);
            self.losses.push(0.0);
        } else {
            self.gains.push(0.0);
            self.losses.push(-change);
        }

        let avg_gain = self.gains.mean()?;
        let avg_loss = self.losses.mean()?;

        if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                // flat window, no movement either way
                None
            } else {
                Some(100.0)
            }
        } else {
            let rs = avg_gain / avg_loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        }
        .map(|rsi| rsi.max(0.0).min(100.0))
    }
}

/// Relative Strength Index of the close price over `period`.
///
/// A series shorter than `period + 1` records cannot produce a single
/// defined value; the transform reports that as a warning diagnostic and
/// returns an all-undefined column rather than failing.
pub fn rsi(
    series: &TimeSeries,
    period: usize,
) -> Result<(DerivedColumn, Option<Diagnostic>), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::new(
            "rsi period must be positive",
            ErrCode::ParaError,
        ));
    }

    if series.len() < period + 1 {
        let column = DerivedColumn::new(ColumnId::Rsi, vec![None; series.len()]);
        let diagnostic = Diagnostic::warning(format!(
            "insufficient records to compute RSI: need at least {}, got {}",
            period + 1,
            series.len()
        ));
        return Ok((column, Some(diagnostic)));
    }

    let mut model = RsiModel::new(period);
    let values = series.iter().map(|candle| model.add(candle.close)).collect();

    Ok((DerivedColumn::new(ColumnId::Rsi, values), None))
}
