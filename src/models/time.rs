use serde::{Deserialize, Serialize};

/// Julian Date representation.
/// JD 2440587.5 = 1970-01-01 00:00:00 UTC (Unix epoch)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(f64);

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2440587.5;

impl JulianDate {
    /// The J2000.0 reference epoch (2000-01-01 12:00:00 TT, close enough to UTC here).
    pub const J2000: JulianDate = JulianDate(2451545.0);

    /// Create a new JD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - Self::J2000.0
    }

    /// Julian centuries elapsed since the J2000.0 epoch.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / 36525.0
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.0 - UNIX_EPOCH_JD) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self(timestamp / 86400.0 + UNIX_EPOCH_JD)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9) as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos)
            .unwrap_or_else(|| chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }
}

impl From<f64> for JulianDate {
    fn from(v: f64) -> Self {
        JulianDate::new(v)
    }
}
