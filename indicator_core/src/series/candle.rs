use serde::{Deserialize, Serialize};
use crate::common::{
    error::{ErrCode, IndicatorError},
    time::Time,
};

/// One OHLCV record of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: Time,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(
        time: Time,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        autofix: bool,
    ) -> Result<Self, IndicatorError> {
        let mut candle = Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        };

        candle.check(autofix)?;
        Ok(candle)
    }

    /// Build a candle without consistency checks
    pub fn raw(time: Time, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn check(&mut self, autofix: bool) -> Result<(), IndicatorError> {
        for value in [self.open, self.high, self.low, self.close, self.volume] {
            if !value.is_finite() {
                return Err(IndicatorError::new(
                    format!(
                        "{} non-finite field in [open={}, high={}, low={}, close={}, volume={}]",
                        self.time, self.open, self.high, self.low, self.close, self.volume
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }

        if self.volume < 0.0 {
            return Err(IndicatorError::new(
                format!("{} volume={} is negative", self.time, self.volume),
                ErrCode::KlDataInvalid,
            ));
        }

        let min_price = self.low.min(self.open).min(self.high).min(self.close);
        let max_price = self.low.max(self.open).max(self.high).max(self.close);

        if self.low > min_price {
            if autofix {
                self.low = min_price;
            } else {
                return Err(IndicatorError::new(
                    format!(
                        "{} low price={} is not min of [low={}, open={}, high={}, close={}]",
                        self.time, self.low, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }

        if self.high < max_price {
            if autofix {
                self.high = max_price;
            } else {
                return Err(IndicatorError::new(
                    format!(
                        "{} high price={} is not max of [low={}, open={}, high={}, close={}]",
                        self.time, self.high, self.low, self.open, self.high, self.close
                    ),
                    ErrCode::KlDataInvalid,
                ));
            }
        }

        Ok(())
    }
}
