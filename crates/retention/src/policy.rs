//! Retention policy configuration

/// Retention policy configuration
#[derive(Debug, Clone)]
pub struct RetentionPolicy {
    /// Snapshots older than this many days keep one per ISO week (default: 30)
    pub weekly_after_days: i64,
    /// Snapshots older than this many days keep one per calendar month (default: 365)
    pub monthly_after_days: i64,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            weekly_after_days: 30,
            monthly_after_days: 365,
        }
    }
}

impl RetentionPolicy {
    /// Check the threshold ordering. The monthly threshold must be strictly
    /// greater than the weekly one, or every old snapshot would land in the
    /// monthly tier and the weekly tier would never apply.
    pub fn validate(&self) -> crate::Result<()> {
        anyhow::ensure!(
            self.weekly_after_days > 0,
            "weekly threshold must be positive (got {} days)",
            self.weekly_after_days
        );
        anyhow::ensure!(
            self.monthly_after_days > self.weekly_after_days,
            "monthly threshold ({} days) must be greater than weekly threshold ({} days)",
            self.monthly_after_days,
            self.weekly_after_days
        );
        Ok(())
    }
}
