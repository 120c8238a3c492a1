use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bar granularity for chart requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
    #[serde(rename = "1mo")]
    OneMonth,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneDay => "1d",
            Interval::OneWeek => "1wk",
            Interval::OneMonth => "1mo",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for a chart (history) request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartOptions {
    /// Start of the range (inclusive)
    pub period1: DateTime<Utc>,

    /// End of the range. `None` means "through the present".
    pub period2: Option<DateTime<Utc>>,

    pub interval: Interval,
}

impl ChartOptions {
    /// Daily bars from `period1` through the present.
    pub fn daily_since(period1: DateTime<Utc>) -> Self {
        Self {
            period1,
            period2: None,
            interval: Interval::OneDay,
        }
    }

    pub fn with_period2(mut self, period2: DateTime<Utc>) -> Self {
        self.period2 = Some(period2);
        self
    }
}
