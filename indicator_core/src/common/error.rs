use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the indicator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Engine errors (0-99)
    #[strum(serialize = "_ENGINE_ERR_BEGIN")]
    EngineErrBegin = 0,
    #[strum(serialize = "COMMON_ERROR")]
    CommonError = 1,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 2,
    #[strum(serialize = "CONFIG_ERROR")]
    ConfigError = 3,
    #[strum(serialize = "_ENGINE_ERR_END")]
    EngineErrEnd = 99,

    // KL data errors (200-299)
    #[strum(serialize = "_KL_ERR_BEGIN")]
    KlErrBegin = 200,
    #[strum(serialize = "KL_DATA_INVALID")]
    KlDataInvalid = 201,
    #[strum(serialize = "KL_NOT_MONOTONOUS")]
    KlNotMonotonous = 202,
    #[strum(serialize = "KL_TIME_INCONSISTENT")]
    KlTimeInconsistent = 203,
    #[strum(serialize = "NO_DATA")]
    NoData = 204,
    #[strum(serialize = "COLUMN_NOT_ALIGN")]
    ColumnNotAlign = 205,
    #[strum(serialize = "_KL_ERR_END")]
    KlErrEnd = 299,
}

impl ErrCode {
    pub fn is_kldata_err(&self) -> bool {
        let code = *self as i32;
        code > Self::KlErrBegin as i32 && code < Self::KlErrEnd as i32
    }

    pub fn is_engine_err(&self) -> bool {
        let code = *self as i32;
        code > Self::EngineErrBegin as i32 && code < Self::EngineErrEnd as i32
    }
}

#[derive(Debug, Error)]
#[error("{errcode}: {msg}")]
pub struct IndicatorError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl IndicatorError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_kldata_err(&self) -> bool {
        self.errcode.is_kldata_err()
    }

    pub fn is_engine_err(&self) -> bool {
        self.errcode.is_engine_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errcode_ranges() {
        assert!(ErrCode::KlDataInvalid.is_kldata_err());
        assert!(ErrCode::NoData.is_kldata_err());
        assert!(!ErrCode::ParaError.is_kldata_err());
        assert!(ErrCode::ParaError.is_engine_err());
        assert!(!ErrCode::KlNotMonotonous.is_engine_err());
    }

    #[test]
    fn test_error_display() {
        let err = IndicatorError::new("window must be positive", ErrCode::ParaError);
        assert_eq!(err.to_string(), "PARA_ERROR: window must be positive");
    }
}
