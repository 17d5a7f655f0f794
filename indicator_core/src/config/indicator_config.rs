use std::collections::HashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::common::error::{ErrCode, IndicatorError};
use crate::math::{boll::BOLL_WINDOW, rsi::RSI_PERIOD, volume::VOLUME_MA_WINDOW};

/// Indicator engine configuration
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub cal_volume_ma: bool,
    pub cal_boll: bool,
    pub cal_rsi: bool,
    pub volume_window: usize,
    pub boll_n: usize,
    pub rsi_cycle: usize,
    pub kl_data_check: bool,
    pub autofix: bool,
    pub print_warning: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        // Defaults mirror IndicatorConfig::new(None); keys absent -> defaults
        Self {
            cal_volume_ma: true,
            cal_boll: true,
            cal_rsi: true,
            volume_window: VOLUME_MA_WINDOW,
            boll_n: BOLL_WINDOW,
            rsi_cycle: RSI_PERIOD,
            kl_data_check: true,
            autofix: false,
            print_warning: true,
        }
    }
}

impl IndicatorConfig {
    pub fn new(conf: Option<HashMap<String, Value>>) -> Result<Self, IndicatorError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());

        let config = Self {
            cal_volume_ma: conf.get("cal_volume_ma").unwrap_or(true),
            cal_boll: conf.get("cal_boll").unwrap_or(true),
            cal_rsi: conf.get("cal_rsi").unwrap_or(true),
            volume_window: conf.get("volume_window").unwrap_or(VOLUME_MA_WINDOW),
            boll_n: conf.get("boll_n").unwrap_or(BOLL_WINDOW),
            rsi_cycle: conf.get("rsi_cycle").unwrap_or(RSI_PERIOD),
            kl_data_check: conf.get("kl_data_check").unwrap_or(true),
            autofix: conf.get("autofix").unwrap_or(false),
            print_warning: conf.get("print_warning").unwrap_or(true),
        };

        config.validate()?;
        conf.check()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), IndicatorError> {
        for (name, window) in [
            ("volume_window", self.volume_window),
            ("boll_n", self.boll_n),
            ("rsi_cycle", self.rsi_cycle),
        ] {
            if window == 0 {
                return Err(IndicatorError::new(
                    format!("{} must be positive", name),
                    ErrCode::ConfigError,
                ));
            }
        }
        Ok(())
    }
}

/// Config map wrapper that tracks consumed keys and rejects leftovers
struct ConfigWithCheck {
    conf: HashMap<String, Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, Value>) -> Self {
        Self { conf }
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = self.conf.remove(key)?;
        serde_json::from_value(value).ok()
    }

    fn check(&self) -> Result<(), IndicatorError> {
        if self.conf.is_empty() {
            return Ok(());
        }
        let mut unknown: Vec<&str> = self.conf.keys().map(String::as_str).collect();
        unknown.sort_unstable();
        Err(IndicatorError::new(
            format!("unknown config keys: {}", unknown.join(", ")),
            ErrCode::ConfigError,
        ))
    }
}
