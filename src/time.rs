//! TDB epochs, evenly spaced time ranges and trajectory labels.

use core::{
    fmt,
    ops::{Add, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Julian date of the J2000 epoch (2000-01-01 12:00 TDB).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// An instant in Barycentric Dynamical Time.
///
/// Stored as seconds elapsed since J2000. Differences between epochs are
/// plain `f64` seconds.
///
/// # Example
/// ```
/// use orbit_plotter::Epoch;
///
/// let epoch = Epoch::from_calendar(2020, 1, 1, 0, 0, 0.0);
/// assert_eq!(epoch.to_string(), "TDB 2020-01-01 00:00");
/// assert_eq!((epoch + 86_400.0).to_string(), "TDB 2020-01-02 00:00");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Epoch {
    seconds: f64,
}

impl Epoch {
    /// The J2000 reference epoch.
    pub const J2000: Epoch = Epoch { seconds: 0.0 };

    /// Creates an epoch from seconds elapsed since J2000.
    pub const fn from_j2000_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Creates an epoch from a Julian date.
    pub fn from_julian_date(jd: f64) -> Self {
        Self {
            seconds: (jd - J2000_JD) * SECONDS_PER_DAY,
        }
    }

    /// Creates an epoch from a Gregorian calendar date and time of day.
    ///
    /// Uses the Fliegel–Van Flandern day number, valid for any date in the
    /// Gregorian calendar.
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let (y, m, d) = (year as i64, month as i64, day as i64);
        let a = (m - 14) / 12;
        let day_number = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075;

        let day_fraction =
            (hour as f64 - 12.0) / 24.0 + minute as f64 / 1440.0 + second / SECONDS_PER_DAY;

        Self::from_julian_date(day_number as f64 + day_fraction)
    }

    /// Approximates the current instant from the system clock.
    ///
    /// The UTC to TDB offset (about a minute) is ignored, which is
    /// irrelevant at plotting resolution.
    pub fn now() -> Self {
        let unix = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();

        Self::from_julian_date(2_440_587.5 + unix / SECONDS_PER_DAY)
    }

    /// Seconds elapsed since J2000.
    pub const fn j2000_seconds(self) -> f64 {
        self.seconds
    }

    /// The Julian date of this epoch.
    pub fn julian_date(self) -> f64 {
        J2000_JD + self.seconds / SECONDS_PER_DAY
    }

    /// Julian centuries elapsed since J2000.
    pub fn julian_centuries(self) -> f64 {
        self.seconds / (SECONDS_PER_DAY * DAYS_PER_CENTURY)
    }

    /// Splits the epoch into a Gregorian date and a time of day rounded
    /// to the minute: `(year, month, day, hour, minute)`.
    pub fn to_calendar_minutes(self) -> (i32, u32, u32, u32, u32) {
        // Round on the minute grid first so 23:59:59.9 rolls over the date.
        let minutes = ((self.julian_date() + 0.5) * 1440.0).round();
        let day_number = (minutes / 1440.0).floor();
        let minute_of_day = (minutes - day_number * 1440.0) as u32;

        // Richards' inverse of the Fliegel–Van Flandern day number.
        let j = day_number as i64;
        let f = j + 1401 + (((4 * j + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;

        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (14 - month) / 12;

        (
            year as i32,
            month as u32,
            day as u32,
            minute_of_day / 60,
            minute_of_day % 60,
        )
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, hour, minute) = self.to_calendar_minutes();
        write!(f, "TDB {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
    }
}

impl Add<f64> for Epoch {
    type Output = Epoch;

    fn add(self, seconds: f64) -> Epoch {
        Epoch {
            seconds: self.seconds + seconds,
        }
    }
}

impl Sub<f64> for Epoch {
    type Output = Epoch;

    fn sub(self, seconds: f64) -> Epoch {
        Epoch {
            seconds: self.seconds - seconds,
        }
    }
}

impl Sub for Epoch {
    type Output = f64;

    fn sub(self, other: Epoch) -> f64 {
        self.seconds - other.seconds
    }
}

/// Builds `periods` evenly spaced epochs from `start` to `end`, both
/// endpoints included.
///
/// A single period yields just `start`; zero periods yield nothing.
pub fn time_range(start: Epoch, end: Epoch, periods: usize) -> Vec<Epoch> {
    match periods {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (periods - 1) as f64;
            (0..periods)
                .map(|i| {
                    if i == periods - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Derives a trajectory label from its epoch and an optional user label.
///
/// # Example
/// ```
/// use orbit_plotter::{generate_label, Epoch};
///
/// let epoch = Epoch::from_calendar(2018, 2, 1, 12, 30, 0.0);
/// assert_eq!(generate_label(epoch, Some("Mars")), "TDB 2018-02-01 12:30 (Mars)");
/// assert_eq!(generate_label(epoch, None), "TDB 2018-02-01 12:30");
/// ```
pub fn generate_label(epoch: Epoch, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{epoch} ({label})"),
        _ => epoch.to_string(),
    }
}
