use chrono::{Local, SecondsFormat, TimeZone, Utc};

pub fn current_timestamp() -> i64 {
  Local::now().timestamp()
}

// The old API sent timestamps as ISO strings and the
// frontend sorts them as plain strings, so the output
// has to stay RFC 3339 in UTC.
// chrono formatting reference:
// https://docs.rs/chrono/0.4.19/chrono/format/strftime/index.html
pub fn timestamp_to_iso_string(timestamp: i64) -> String {
  Utc.timestamp(timestamp, 0)
    .to_rfc3339_opts(SecondsFormat::Secs, true)
}
