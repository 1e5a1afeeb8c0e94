//! Dashboard data types.

use serde::{Deserialize, Serialize};

/// Dashboard summary response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DashboardSummary {
    /// Release queue items waiting to go out.
    pub ready_to_release: usize,
    /// Approvals waiting for a decision.
    pub approval_required: usize,
    /// Bank receipts imported.
    pub bank_receipts: usize,
    /// Beneficiary verification tallies.
    pub account_verification_statistics: VerificationStatistics,
    /// Approvals above the anomaly threshold.
    pub anomalies_detected: usize,
    /// Approvals escalated at evaluation time.
    pub escalations_triggered: usize,
    /// Pending approvals close to their deadline.
    #[serde(rename = "NearSLA")]
    pub near_sla: NearSla,
}

/// Verification tallies by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerificationStatistics {
    /// Passed verification.
    pub passed: WindowCounts,
    /// Still pending.
    pub outstanding: WindowCounts,
    /// Failed verification.
    pub failed: WindowCounts,
}

/// Counts over trailing windows ending at evaluation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindowCounts {
    /// Last 7 days.
    pub last_week: usize,
    /// Last 30 days.
    pub last_month: usize,
    /// Last 365 days.
    pub last_year: usize,
}

/// Pending approvals whose deadline is close but not yet passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NearSla {
    /// Due within 30 minutes.
    pub within30_minutes: usize,
    /// Due within 1 hour.
    #[serde(rename = "Within1Hour")]
    pub within1_hour: usize,
    /// Due within 2 hours.
    #[serde(rename = "Within2Hours")]
    pub within2_hours: usize,
}
