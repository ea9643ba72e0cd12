use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn epoch_millis(dt: DateTime<Utc>) -> i64 {
    dt.timestamp_millis()
}

/// Full 24h periods elapsed between `earlier` and `now`, never negative.
pub fn whole_days_since(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - earlier).num_days().max(0)
}
