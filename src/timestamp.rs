//! ISO 8601 timestamp formatting without heap allocation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Serialize, Serializer};

/// A formatted UTC instant, exactly 24 bytes: `2024-01-15T10:30:00.123Z`.
///
/// The rendered form lives inline on the stack, so stamping an envelope
/// costs no allocation.
#[derive(Clone, Copy)]
pub struct Iso8601Timestamp {
    buf: [u8; 24],
}

impl Iso8601Timestamp {
    /// Capture and format the current time.
    #[inline]
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_duration(since_epoch)
    }

    /// Format an offset from the Unix epoch.
    pub fn from_duration(since_epoch: Duration) -> Self {
        let secs = since_epoch.as_secs();
        let (year, month, day) = civil_from_days(secs / 86_400);
        let day_secs = secs % 86_400;

        let mut buf = *b"0000-00-00T00:00:00.000Z";
        write_digits(&mut buf[0..4], u64::from(year));
        write_digits(&mut buf[5..7], u64::from(month));
        write_digits(&mut buf[8..10], u64::from(day));
        write_digits(&mut buf[11..13], day_secs / 3_600);
        write_digits(&mut buf[14..16], day_secs % 3_600 / 60);
        write_digits(&mut buf[17..19], day_secs % 60);
        write_digits(&mut buf[20..23], u64::from(since_epoch.subsec_millis()));

        Self { buf }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: the buffer only ever holds ASCII digits and punctuation.
        unsafe { std::str::from_utf8_unchecked(&self.buf) }
    }
}

impl AsRef<str> for Iso8601Timestamp {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Iso8601Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Iso8601Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes as a JSON string, e.g. `"2024-01-15T10:30:00.123Z"`.
impl Serialize for Iso8601Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Gregorian date from a day count since 1970-01-01.
///
/// Era-based civil calendar conversion; exact for any date from the epoch
/// onward, leap years included.
fn civil_from_days(days: u64) -> (u16, u8, u8) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;

    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { (mp + 3) as u8 } else { (mp - 9) as u8 };
    let mut year = yoe + era * 400;
    if month <= 2 {
        year += 1;
    }

    (year as u16, month, day)
}

/// Fill a slice with the zero-padded decimal digits of `value`.
fn write_digits(slot: &mut [u8], mut value: u64) {
    for byte in slot.iter_mut().rev() {
        *byte = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
