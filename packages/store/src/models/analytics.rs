use serde::{Deserialize, Serialize};

/// Account-wide totals from `analytics/user-stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub total_views: u64,
    pub total_clicks: u64,
    pub total_spent: f64,
}

impl UserStats {
    pub fn click_through_rate(&self) -> f64 {
        click_through_rate(self.total_views, self.total_clicks)
    }
}

/// One day of delivery figures from `analytics/user-analytics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyAnalytics {
    pub date: String,
    pub views: u64,
    pub clicks: u64,
    pub money_spent: f64,
}

/// Clicks per hundred views; zero when nothing was shown.
pub fn click_through_rate(views: u64, clicks: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    (clicks as f64 * 100.0) / views as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_through_rate() {
        assert_eq!(click_through_rate(0, 0), 0.0);
        assert_eq!(click_through_rate(0, 3), 0.0);
        assert_eq!(click_through_rate(200, 5), 2.5);
        assert_eq!(click_through_rate(10, 10), 100.0);
    }

    #[test]
    fn test_decode_stats_with_gaps() {
        let stats: UserStats =
            serde_json::from_str(r#"{"totalCampaigns": 4, "totalViews": 1000, "totalClicks": 20}"#)
                .unwrap();
        assert_eq!(stats.total_campaigns, 4);
        assert_eq!(stats.active_campaigns, 0);
        assert_eq!(stats.click_through_rate(), 2.0);

        let days: Vec<DailyAnalytics> = serde_json::from_str(
            r#"[{"date": "2024-05-01", "views": 10, "clicks": 1, "moneySpent": 0.4}, {"date": "2024-05-02"}]"#,
        )
        .unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].views, 0);
    }
}
