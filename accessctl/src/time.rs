//! Wall-clock helpers localised to the configured time zone.
//!
//! The zone comes from [`TimeConfig::timezone`]. When the name is not a known IANA zone the
//! clock logs a warning and degrades to system local time with no zone attached, so callers
//! always get a usable timestamp.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::warn;

use crate::config::TimeConfig;

/// A timestamp produced by [`Clock::now`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AppTime {
    /// Localised to the configured zone
    Zoned(DateTime<Tz>),
    /// System local time, no zone attached
    Local(NaiveDateTime),
}

impl AppTime {
    /// Wall-clock date and time in whichever zone produced this value.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            AppTime::Zoned(dt) => dt.naive_local(),
            AppTime::Local(dt) => *dt,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.naive_local().date()
    }

    pub fn time(&self) -> NaiveTime {
        self.naive_local().time()
    }

    /// The zone this value is localised to, if any.
    pub fn timezone(&self) -> Option<Tz> {
        match self {
            AppTime::Zoned(dt) => Some(dt.timezone()),
            AppTime::Local(_) => None,
        }
    }
}

/// Resolves "now" in a fixed zone, parsed once.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    timezone: Option<Tz>,
}

impl Clock {
    pub fn new(timezone: &str) -> Self {
        let timezone = match timezone.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(e) => {
                warn!(timezone, error = %e, "Unknown time zone, falling back to system local time");
                None
            }
        };
        Self { timezone }
    }

    pub fn from_config(config: &TimeConfig) -> Self {
        Self::new(&config.timezone)
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    pub fn now(&self) -> AppTime {
        match self.timezone {
            Some(tz) => AppTime::Zoned(Utc::now().with_timezone(&tz)),
            None => AppTime::Local(Local::now().naive_local()),
        }
    }

    pub fn now_date(&self) -> NaiveDate {
        self.now().date()
    }

    pub fn now_time(&self) -> NaiveTime {
        self.now().time()
    }
}

/// Current instant in the configured zone, or local time if the zone is unavailable.
pub fn now(config: &TimeConfig) -> AppTime {
    Clock::from_config(config).now()
}

pub fn now_date(config: &TimeConfig) -> NaiveDate {
    now(config).date()
}

pub fn now_time(config: &TimeConfig) -> NaiveTime {
    now(config).time()
}
