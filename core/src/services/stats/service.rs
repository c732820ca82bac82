//! Read-only issuance statistics over a caller-specified lookback window.

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};

use crate::domain::value_objects::OtpStats;
use crate::errors::DomainResult;
use crate::repositories::IssuanceLedger;

/// Derives issuance statistics from the ledger. Purely read-only; shares the
/// same immutable ledger the rate limiter counts against, so attempts and
/// successes are always consistent with each other.
pub struct StatsService<L: IssuanceLedger> {
    ledger: Arc<L>,
}

impl<L: IssuanceLedger> StatsService<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Compute stats for a phone over the trailing `lookback_hours`.
    ///
    /// `lookback_hours` must already be validated as positive by the caller.
    /// The success rate is rounded to two decimal places; with no attempts in
    /// the window it is defined as 0 rather than dividing by zero.
    pub async fn get_stats(&self, phone: &str, lookback_hours: i64) -> DomainResult<OtpStats> {
        let since = Utc::now() - ChronoDuration::hours(lookback_hours);

        let total = self.ledger.count_since(phone, since).await?;
        let successful = self.ledger.count_successful_since(phone, since).await?;
        let failed = total.saturating_sub(successful);

        let success_rate = if total > 0 {
            round_two_places(successful as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        Ok(OtpStats {
            phone_number: phone.to_string(),
            hours_looked_back: lookback_hours,
            total_requests: total,
            successful_requests: successful,
            failed_requests: failed,
            success_rate,
            since,
        })
    }
}

fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::mock::MockIssuanceLedger;
    use crate::repositories::IssuanceLedger as _;

    const PHONE: &str = "+14155552671";

    #[tokio::test]
    async fn test_stats_counts_and_rate() {
        let ledger = Arc::new(MockIssuanceLedger::new());
        let now = Utc::now();
        ledger.record_attempt(PHONE, now, true).await.unwrap();
        ledger.record_attempt(PHONE, now, true).await.unwrap();
        ledger.record_attempt(PHONE, now, false).await.unwrap();

        let stats = StatsService::new(ledger).get_stats(PHONE, 24).await.unwrap();
        assert_eq!(stats.total_requests, 3);
        assert_eq!(stats.successful_requests, 2);
        assert_eq!(stats.failed_requests, 1);
        assert_eq!(stats.success_rate, 66.67);
        assert_eq!(stats.hours_looked_back, 24);
    }

    #[tokio::test]
    async fn test_empty_window_reports_zero_rate() {
        let ledger = Arc::new(MockIssuanceLedger::new());
        let stats = StatsService::new(ledger).get_stats(PHONE, 24).await.unwrap();
        assert_eq!(stats.total_requests, 0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[tokio::test]
    async fn test_window_excludes_old_attempts() {
        let ledger = Arc::new(MockIssuanceLedger::new());
        let now = Utc::now();
        ledger
            .record_attempt(PHONE, now - ChronoDuration::hours(48), true)
            .await
            .unwrap();
        ledger.record_attempt(PHONE, now, true).await.unwrap();

        let stats = StatsService::new(ledger).get_stats(PHONE, 24).await.unwrap();
        assert_eq!(stats.total_requests, 1);
    }

    #[tokio::test]
    async fn test_other_phones_do_not_bleed_in() {
        let ledger = Arc::new(MockIssuanceLedger::new());
        let now = Utc::now();
        ledger.record_attempt(PHONE, now, true).await.unwrap();
        ledger
            .record_attempt("+442071838750", now, false)
            .await
            .unwrap();

        let stats = StatsService::new(ledger).get_stats(PHONE, 24).await.unwrap();
        assert_eq!(stats.total_requests, 1);
        assert_eq!(stats.success_rate, 100.0);
    }
}
