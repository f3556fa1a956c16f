use store::{DailyAnalytics, UserStats};

use crate::{ApiClient, ApiError, Endpoint};

impl ApiClient {
    /// Account-wide totals for the dashboard cards.
    pub async fn get_user_stats(&self) -> Result<UserStats, ApiError> {
        let endpoint = Endpoint::UserStats;
        let builder = self.request(&endpoint)?;
        self.send(&endpoint, builder).await
    }

    /// Per-day delivery figures, oldest first.
    pub async fn get_user_analytics(&self) -> Result<Vec<DailyAnalytics>, ApiError> {
        let endpoint = Endpoint::UserAnalytics;
        let builder = self.request(&endpoint)?;
        let mut days: Vec<DailyAnalytics> = self.send(&endpoint, builder).await?;
        days.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(days)
    }
}
