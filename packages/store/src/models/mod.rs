//! # Domain records mirrored from the backend
//!
//! Every type here is a plain shape decoded from (or encoded to) the REST API's
//! JSON. The backend owns and mutates all of them; the client only holds
//! transient, re-fetchable copies, so no invariants beyond field presence are
//! enforced at this level.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`UserType`], [`UserDetail`] |
//! | [`campaign`] | [`Campaign`], [`CampaignStatus`], [`CampaignDraft`], [`StatusUpdate`], [`TargetGender`] |
//! | [`payment`] | [`Transaction`], [`PaymentMethod`], [`PaymentSession`], [`PaymentCheck`] |
//! | [`analytics`] | [`UserStats`], [`DailyAnalytics`] |
//!
//! Keys are camelCase on the wire and Mongo-style `_id` is accepted wherever an
//! `id` is expected.

pub mod analytics;
pub mod campaign;
pub mod payment;
pub mod user;

pub use analytics::{click_through_rate, DailyAnalytics, UserStats};
pub use campaign::{Campaign, CampaignDraft, CampaignStatus, StatusUpdate, TargetGender};
pub use payment::{PaymentCheck, PaymentMethod, PaymentSession, Transaction};
pub use user::{User, UserDetail, UserType};

use chrono::NaiveDate;

/// Country value meaning "target everywhere"; no city list is required.
pub const ALL_COUNTRIES: &str = "All Countries";

/// City token meaning "every city of the selected country".
pub const ALL_CITIES: &str = "*";

/// Parse a calendar day from either `2024-05-01` or an ISO timestamp such as
/// `2024-05-01T00:00:00.000Z`.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let day = match value.split_once('T') {
        Some((day, _)) => day,
        None => value,
    };
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_day("2024-05-01"), expected);
        assert_eq!(parse_day("2024-05-01T10:30:00.000Z"), expected);
        assert_eq!(parse_day(" 2024-05-01 "), expected);
        assert_eq!(parse_day(""), None);
        assert_eq!(parse_day("05/01/2024"), None);
        assert_eq!(parse_day("2024-13-01"), None);
        assert_eq!(parse_day("2024-05-01garbage"), None);
        assert_eq!(parse_day("2024-05-01 10:30"), None);
    }
}
