use std::fmt;
use std::str::FromStr;

use crate::core::AvError;

/// Sampling granularity of a historical series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    I1min,
    I5min,
    I15min,
    I30min,
    I60min,
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    /// The upstream spelling (`"5min"`, `"daily"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1min => "1min",
            Self::I5min => "5min",
            Self::I15min => "15min",
            Self::I30min => "30min",
            Self::I60min => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub const fn is_intraday(self) -> bool {
        matches!(
            self,
            Self::I1min | Self::I5min | Self::I15min | Self::I30min | Self::I60min
        )
    }

    /// The `function` parameter selecting the series endpoint.
    pub(crate) const fn function(self) -> &'static str {
        match self {
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
            _ => "TIME_SERIES_INTRADAY",
        }
    }

    /// The response key holding the `date -> bar` mapping.
    pub(crate) const fn series_key(self) -> &'static str {
        match self {
            Self::I1min => "Time Series (1min)",
            Self::I5min => "Time Series (5min)",
            Self::I15min => "Time Series (15min)",
            Self::I30min => "Time Series (30min)",
            Self::I60min => "Time Series (60min)",
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
            Self::Monthly => "Monthly Time Series",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = AvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "1min" => Self::I1min,
            "5min" => Self::I5min,
            "15min" => Self::I15min,
            "30min" => Self::I30min,
            "60min" => Self::I60min,
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => return Err(AvError::InvalidInterval(s.to_string())),
        })
    }
}
