use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{analytics::click_through_rate, parse_day};

/// Lifecycle label attached to a campaign by the backend.
///
/// The client never enforces transitions; the status only drives badge
/// styling and which row actions are offered. Statuses we do not recognise
/// are kept verbatim in [`CampaignStatus::Other`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    #[default]
    Draft,
    InReview,
    Ready,
    Active,
    Stopped,
    Ended,
    WaitingForFunds,
    WaitingForEdit,
    Other(String),
}

impl CampaignStatus {
    pub const KNOWN: [CampaignStatus; 8] = [
        CampaignStatus::Draft,
        CampaignStatus::InReview,
        CampaignStatus::Ready,
        CampaignStatus::Active,
        CampaignStatus::Stopped,
        CampaignStatus::Ended,
        CampaignStatus::WaitingForFunds,
        CampaignStatus::WaitingForEdit,
    ];

    /// The exact string the backend uses.
    pub fn as_str(&self) -> &str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::InReview => "in review",
            CampaignStatus::Ready => "ready",
            CampaignStatus::Active => "active",
            CampaignStatus::Stopped => "stopped",
            CampaignStatus::Ended => "ended",
            CampaignStatus::WaitingForFunds => "waiting for funds",
            CampaignStatus::WaitingForEdit => "waiting for edit",
            CampaignStatus::Other(s) => s,
        }
    }

    /// CSS modifier used by the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "status-badge status-draft",
            CampaignStatus::InReview => "status-badge status-review",
            CampaignStatus::Ready => "status-badge status-ready",
            CampaignStatus::Active => "status-badge status-active",
            CampaignStatus::Stopped => "status-badge status-stopped",
            CampaignStatus::Ended => "status-badge status-ended",
            CampaignStatus::WaitingForFunds | CampaignStatus::WaitingForEdit => {
                "status-badge status-waiting"
            }
            CampaignStatus::Other(_) => "status-badge",
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(
            self,
            CampaignStatus::Draft
                | CampaignStatus::Ready
                | CampaignStatus::Stopped
                | CampaignStatus::WaitingForEdit
        )
    }

    pub fn can_stop(&self) -> bool {
        matches!(self, CampaignStatus::Active)
    }

    pub fn can_activate(&self) -> bool {
        matches!(self, CampaignStatus::Ready | CampaignStatus::Stopped)
    }

    pub fn can_delete(&self) -> bool {
        matches!(
            self,
            CampaignStatus::Draft | CampaignStatus::WaitingForEdit | CampaignStatus::Ended
        )
    }

    /// Whether an admin decision is pending.
    pub fn awaits_review(&self) -> bool {
        matches!(self, CampaignStatus::InReview)
    }

    pub fn awaits_funds(&self) -> bool {
        matches!(self, CampaignStatus::WaitingForFunds)
    }
}

impl From<String> for CampaignStatus {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => CampaignStatus::Draft,
            "in review" => CampaignStatus::InReview,
            "ready" => CampaignStatus::Ready,
            "active" => CampaignStatus::Active,
            "stopped" => CampaignStatus::Stopped,
            "ended" => CampaignStatus::Ended,
            "waiting for funds" => CampaignStatus::WaitingForFunds,
            "waiting for edit" => CampaignStatus::WaitingForEdit,
            _ => CampaignStatus::Other(s),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience gender targeting. Unknown values decode as [`TargetGender::All`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGender {
    Male,
    Female,
    #[default]
    #[serde(other)]
    All,
}

impl TargetGender {
    pub const ALL: [TargetGender; 3] = [TargetGender::All, TargetGender::Male, TargetGender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetGender::All => "all",
            TargetGender::Male => "male",
            TargetGender::Female => "female",
        }
    }

    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "male" => TargetGender::Male,
            "female" => TargetGender::Female,
            _ => TargetGender::All,
        }
    }
}

/// An advertising campaign owned by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub targeted_cities: Vec<String>,
    #[serde(default)]
    pub photo_path: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub gender: TargetGender,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub money_spent: f64,
    #[serde(default)]
    pub admin_message: Option<String>,
}

impl Campaign {
    pub fn start_day(&self) -> Option<NaiveDate> {
        parse_day(&self.start_date)
    }

    pub fn end_day(&self) -> Option<NaiveDate> {
        parse_day(&self.end_date)
    }

    /// Click-through rate in percent.
    pub fn click_through_rate(&self) -> f64 {
        click_through_rate(self.views, self.clicks)
    }

    /// Budget not yet spent, never negative.
    pub fn remaining_budget(&self) -> f64 {
        (self.budget - self.money_spent).max(0.0)
    }

    /// Editable copy of the user-controlled fields.
    pub fn to_draft(&self) -> CampaignDraft {
        CampaignDraft {
            title: self.title.clone(),
            start_date: self.start_day().map(|d| d.to_string()).unwrap_or_default(),
            end_date: self.end_day().map(|d| d.to_string()).unwrap_or_default(),
            budget: self.budget,
            country: self.country.clone(),
            targeted_cities: self.targeted_cities.clone(),
            photo_path: self.photo_path.clone(),
            link: self.link.clone(),
            gender: self.gender,
        }
    }
}

/// Body of a create or update request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub country: String,
    pub targeted_cities: Vec<String>,
    pub photo_path: String,
    pub link: String,
    pub gender: TargetGender,
}

/// Body of a status change, from an owner (stop/activate) or an admin review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: CampaignStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_message: Option<String>,
}

impl StatusUpdate {
    pub fn new(status: CampaignStatus) -> Self {
        Self {
            status,
            admin_message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.trim().is_empty() {
            self.admin_message = Some(message);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        for status in CampaignStatus::KNOWN {
            assert_eq!(CampaignStatus::from(status.as_str().to_string()), status);
        }
        assert_eq!(
            CampaignStatus::from("Waiting For Funds".to_string()),
            CampaignStatus::WaitingForFunds
        );
        assert_eq!(
            CampaignStatus::from("archived".to_string()),
            CampaignStatus::Other("archived".to_string())
        );
    }

    #[test]
    fn test_status_actions() {
        assert!(CampaignStatus::Active.can_stop());
        assert!(!CampaignStatus::Active.can_edit());
        assert!(!CampaignStatus::Active.can_delete());
        assert!(CampaignStatus::Stopped.can_activate());
        assert!(CampaignStatus::Draft.can_delete());
        assert!(CampaignStatus::WaitingForEdit.can_edit());
        assert!(!CampaignStatus::InReview.can_edit());
        assert!(CampaignStatus::InReview.awaits_review());

        let unknown = CampaignStatus::Other("archived".to_string());
        assert!(!unknown.can_edit() && !unknown.can_stop() && !unknown.can_delete());
        assert_eq!(unknown.badge_class(), "status-badge");
    }

    #[test]
    fn test_gender_wire_values() {
        #[derive(Deserialize)]
        struct Target {
            gender: TargetGender,
        }

        let decode = |json: &str| serde_json::from_str::<Target>(json).unwrap().gender;
        assert_eq!(decode(r#"{"gender":"female"}"#), TargetGender::Female);
        assert_eq!(decode(r#"{"gender":"all"}"#), TargetGender::All);
        assert_eq!(decode(r#"{"gender":"unknown"}"#), TargetGender::All);
        assert_eq!(serde_json::to_string(&TargetGender::Male).unwrap(), r#""male""#);
        assert_eq!(TargetGender::ALL[0], TargetGender::All);
    }

    #[test]
    fn test_decode_campaign() {
        let campaign: Campaign = serde_json::from_str(
            r#"{
                "_id": "c42",
                "title": "Ramadan promo",
                "startDate": "2024-03-10T00:00:00.000Z",
                "endDate": "2024-04-09T00:00:00.000Z",
                "budget": 300,
                "country": "Morocco",
                "targetedCities": ["Rabat", "Fes"],
                "photoPath": "uploads/promo.png",
                "link": "https://shop.example.com",
                "gender": "female",
                "status": "waiting for funds",
                "views": 2000,
                "clicks": 50,
                "moneySpent": 120.25,
                "adminMessage": null
            }"#,
        )
        .unwrap();

        assert_eq!(campaign.id, "c42");
        assert_eq!(campaign.status, CampaignStatus::WaitingForFunds);
        assert_eq!(campaign.gender, TargetGender::Female);
        assert_eq!(campaign.click_through_rate(), 2.5);
        assert_eq!(campaign.remaining_budget(), 179.75);

        let draft = campaign.to_draft();
        assert_eq!(draft.start_date, "2024-03-10");
        assert_eq!(draft.end_date, "2024-04-09");
        assert_eq!(draft.targeted_cities, vec!["Rabat", "Fes"]);
    }

    #[test]
    fn test_overspent_budget_is_zero_remaining() {
        let campaign: Campaign = serde_json::from_str(
            r#"{"id": "1", "title": "x", "budget": 10, "moneySpent": 12}"#,
        )
        .unwrap();
        assert_eq!(campaign.remaining_budget(), 0.0);
        assert_eq!(campaign.status, CampaignStatus::Draft);
    }

    #[test]
    fn test_encode_draft_and_status_update() {
        let draft = CampaignDraft {
            title: "Launch".to_string(),
            start_date: "2024-06-01".to_string(),
            end_date: "2024-06-30".to_string(),
            budget: 50.0,
            country: "All Countries".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["startDate"], "2024-06-01");
        assert_eq!(json["targetedCities"], serde_json::json!([]));
        assert_eq!(json["gender"], "all");

        let update = StatusUpdate::new(CampaignStatus::WaitingForEdit).with_message("Blurry photo");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "waiting for edit");
        assert_eq!(json["adminMessage"], "Blurry photo");

        let json = serde_json::to_value(StatusUpdate::new(CampaignStatus::Stopped).with_message(" ")).unwrap();
        assert!(json.get("adminMessage").is_none());
    }
}
