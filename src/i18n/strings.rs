use crate::i18n::MessageKey;

// ==================== English (UK) Strings ====================

/// MAS dashboard strings, British English (canonical).
///
/// Values are raw text. Templates use the host's `sprintf` directives and
/// `format_*` values use its `date()` pattern syntax.
pub const EN_GB_DASHBOARD: &[(MessageKey, &str)] = &[
    // Headings and navigation
    (MessageKey::HeadingTitle, "MAS Dashboard"),
    (MessageKey::TextExtension, "Extensions"),
    (MessageKey::NavDashboard, "Dashboard"),
    (MessageKey::NavSegments, "Segments"),
    (MessageKey::NavCampaigns, "Campaigns"),
    (MessageKey::NavWorkflows, "Workflows"),
    (MessageKey::NavAnalytics, "Analytics"),
    (MessageKey::NavHealth, "System Health"),
    (MessageKey::NavSettings, "Settings"),
    // Overview
    (MessageKey::TextWelcome, "Welcome back, %s"),
    (MessageKey::TextOverview, "Overview"),
    (MessageKey::TextPeriodToday, "Today"),
    (MessageKey::TextPeriod7d, "Last 7 days"),
    (MessageKey::TextPeriod30d, "Last 30 days"),
    (MessageKey::TextPeriod90d, "Last 90 days"),
    (MessageKey::TextPeriodCustom, "Custom range"),
    (MessageKey::TextLastUpdated, "Last updated: %s"),
    (MessageKey::TextNoData, "No data available for the selected period."),
    (MessageKey::TextLoading, "Loading dashboard data..."),
    // KPIs
    (MessageKey::TextRevenue, "Revenue"),
    (MessageKey::TextRevenueAttributed, "Attributed Revenue"),
    (MessageKey::TextOrders, "Orders"),
    (MessageKey::TextCustomers, "Customers"),
    (MessageKey::TextNewCustomers, "New Customers"),
    (MessageKey::TextConversionRate, "Conversion Rate"),
    (MessageKey::TextAverageOrderValue, "Average Order Value"),
    (MessageKey::TextOpenRate, "Open Rate"),
    (MessageKey::TextClickRate, "Click Rate"),
    (MessageKey::TextUnsubscribeRate, "Unsubscribe Rate"),
    (MessageKey::TextEmailsSent, "Emails Sent"),
    (MessageKey::TextActiveCampaigns, "Active Campaigns"),
    (MessageKey::TextActiveWorkflows, "Active Workflows"),
    (MessageKey::TextTotalSegments, "Total Segments"),
    (MessageKey::TextChangeUp, "Up %.1f%% on previous period"),
    (MessageKey::TextChangeDown, "Down %.1f%% on previous period"),
    (MessageKey::TextChangeNone, "No change on previous period"),
    // Recent activity
    (MessageKey::TextRecentActivity, "Recent Activity"),
    (MessageKey::TextActivitySegmentCreated, "Created segment \"%s\""),
    (MessageKey::TextActivitySegmentUpdated, "Updated segment \"%s\""),
    (MessageKey::TextActivityCampaignSent, "Sent campaign to %d recipients"),
    (MessageKey::TextActivityCampaignScheduled, "Scheduled campaign \"%s\" for %s"),
    (MessageKey::TextActivityWorkflowActivated, "Activated workflow \"%s\""),
    (MessageKey::TextActivityWorkflowPaused, "Paused workflow \"%s\""),
    (MessageKey::TextActivityExportCompleted, "Exported %d contacts"),
    (MessageKey::TextNoActivity, "No recent activity."),
    // Top lists
    (MessageKey::TextTopCampaigns, "Top Campaigns"),
    (MessageKey::TextTopSegments, "Top Segments"),
    (MessageKey::ColumnName, "Name"),
    (MessageKey::ColumnRecipients, "Recipients"),
    (MessageKey::ColumnOpens, "Opens"),
    (MessageKey::ColumnClicks, "Clicks"),
    (MessageKey::ColumnRevenue, "Revenue"),
    (MessageKey::ColumnStatus, "Status"),
    (MessageKey::ColumnDate, "Date"),
    (MessageKey::ColumnAction, "Action"),
    // System health
    (MessageKey::TextSystemHealth, "System Health"),
    (MessageKey::TextHealthCore, "MAS Core"),
    (MessageKey::TextHealthDatabase, "Database"),
    (MessageKey::TextHealthAiGateway, "AI Gateway"),
    (MessageKey::TextHealthQueue, "Message Queue"),
    (MessageKey::TextHealthResponseTime, "Response time: %d ms"),
    (MessageKey::TextHealthQueueDepth, "%d jobs pending"),
    (MessageKey::TextHealthLastCheck, "Last checked %s"),
    (MessageKey::StatusHealthy, "Healthy"),
    (MessageKey::StatusDegraded, "Degraded"),
    (MessageKey::StatusDown, "Down"),
    (MessageKey::StatusUnknown, "Unknown"),
    (MessageKey::StatusLoading, "Loading..."),
    (MessageKey::StatusRefreshing, "Refreshing..."),
    (MessageKey::StatusPending, "Pending"),
    (MessageKey::StatusRunning, "Running"),
    (MessageKey::StatusComplete, "Complete"),
    (MessageKey::StatusFailed, "Failed"),
    // Maintenance
    (MessageKey::TextMaintenance, "Maintenance"),
    (
        MessageKey::TextMaintenanceDescription,
        "Run housekeeping tasks to keep the marketing engine fast and tidy.",
    ),
    (MessageKey::TextTaskClearCache, "Clear cache"),
    (MessageKey::TextTaskRebuildSegments, "Rebuild segments"),
    (MessageKey::TextTaskPurgeLogs, "Purge old logs"),
    (MessageKey::TextTaskReindex, "Reindex analytics"),
    (
        MessageKey::TextConfirmMaintenance,
        "Are you sure you want to run this task? It may take several minutes.",
    ),
    (MessageKey::TextTaskStarted, "Task \"%s\" started"),
    (MessageKey::TextTaskCompleted, "Task \"%s\" completed in %d seconds"),
    // Quick actions and buttons
    (MessageKey::TextQuickActions, "Quick Actions"),
    (MessageKey::ButtonCreateCampaign, "Create Campaign"),
    (MessageKey::ButtonCreateSegment, "Create Segment"),
    (MessageKey::ButtonCreateWorkflow, "Create Workflow"),
    (MessageKey::ButtonRefresh, "Refresh"),
    (MessageKey::ButtonViewAll, "View All"),
    (MessageKey::ButtonRunTask, "Run Task"),
    (MessageKey::ButtonRunHealthCheck, "Run Health Check"),
    (MessageKey::ButtonExport, "Export"),
    (MessageKey::ButtonApply, "Apply"),
    (MessageKey::ButtonReset, "Reset"),
    // Filter form
    (MessageKey::EntryPeriod, "Period"),
    (MessageKey::EntryDateFrom, "Date From"),
    (MessageKey::EntryDateTo, "Date To"),
    // Help and tooltips
    (
        MessageKey::HelpRevenue,
        "Total value of orders placed within the selected period.",
    ),
    (
        MessageKey::HelpRevenueAttributed,
        "Revenue from orders attributed to a MAS campaign or workflow within the attribution window.",
    ),
    (
        MessageKey::HelpConversionRate,
        "Orders divided by unique visitors for the selected period.",
    ),
    (MessageKey::HelpOpenRate, "Unique opens divided by delivered messages."),
    (MessageKey::HelpClickRate, "Unique clicks divided by delivered messages."),
    (MessageKey::HelpHealth, "Health checks run automatically every %d minutes."),
    (MessageKey::TooltipRefresh, "Refresh dashboard data"),
    (MessageKey::TooltipExport, "Download the current view as CSV"),
    (MessageKey::TooltipHealthDetails, "Show detailed health information"),
    (MessageKey::TooltipPeriod, "Change the reporting period"),
    // Success messages
    (
        MessageKey::TextSuccess,
        "Success: You have modified the dashboard settings!",
    ),
    (MessageKey::TextSuccessCacheCleared, "Success: The cache has been cleared!"),
    (
        MessageKey::TextSuccessTask,
        "Success: The maintenance task has been queued!",
    ),
    (MessageKey::TextSuccessExport, "Success: Your export is ready to download!"),
    (MessageKey::TextSuccessHealthCheck, "Success: Health check completed!"),
    // Errors
    (
        MessageKey::ErrorPermission,
        "Warning: You do not have permission to access the MAS dashboard!",
    ),
    (MessageKey::ErrorNotInstalled, "The MAS extension is not installed."),
    (MessageKey::ErrorLoadKpis, "Unable to load KPI data. Please try again."),
    (MessageKey::ErrorLoadActivity, "Unable to load recent activity."),
    (MessageKey::ErrorHealthCheck, "Health check failed: %s"),
    (MessageKey::ErrorTaskUnknown, "Unknown maintenance task."),
    (MessageKey::ErrorTaskRunning, "A maintenance task is already running."),
    (MessageKey::ErrorTaskFailed, "Task \"%s\" failed: %s"),
    (MessageKey::ErrorDateRange, "The end date must be after the start date."),
    (MessageKey::ErrorExport, "Export failed. Please try again."),
    (
        MessageKey::ErrorAjax,
        "An unexpected error occurred while contacting the server.",
    ),
    // Date patterns
    (MessageKey::FormatDate, "d/m/Y"),
    (MessageKey::FormatDateLong, "l jS F Y"),
    (MessageKey::FormatDatetime, "d/m/Y H:i:s"),
    (MessageKey::FormatTime, "H:i"),
    (MessageKey::FormatChartDay, "D j M"),
    // Units
    (MessageKey::UnitPercent, "%"),
    (MessageKey::UnitMilliseconds, "ms"),
    (MessageKey::UnitSeconds, "s"),
    (MessageKey::UnitMinutes, "min"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::template::placeholders;
    use crate::i18n::KeyCategory;
    use std::collections::HashSet;

    #[test]
    fn test_every_declared_key_has_a_value() {
        let present: HashSet<MessageKey> = EN_GB_DASHBOARD.iter().map(|(key, _)| *key).collect();
        for key in MessageKey::ALL {
            assert!(present.contains(key), "en-gb is missing {}", key);
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        let mut seen = HashSet::new();
        for (key, _) in EN_GB_DASHBOARD {
            assert!(seen.insert(*key), "duplicate entry for {}", key);
        }
    }

    #[test]
    fn test_values_not_empty() {
        for (key, value) in EN_GB_DASHBOARD {
            assert!(!value.is_empty(), "{} is empty", key);
        }
    }

    #[test]
    fn test_templates_match_declared_signatures() {
        for (key, value) in EN_GB_DASHBOARD {
            assert_eq!(
                placeholders(value).as_slice(),
                key.signature(),
                "placeholder drift in {}",
                key
            );
        }
    }

    #[test]
    fn test_health_component_labels() {
        let lookup = |wanted: MessageKey| {
            EN_GB_DASHBOARD
                .iter()
                .find(|(key, _)| *key == wanted)
                .map(|(_, value)| *value)
        };
        assert_eq!(lookup(MessageKey::TextHealthCore), Some("MAS Core"));
        assert_eq!(lookup(MessageKey::TextHealthDatabase), Some("Database"));
        assert_eq!(lookup(MessageKey::TextHealthAiGateway), Some("AI Gateway"));
        assert_eq!(lookup(MessageKey::TextHealthQueue), Some("Message Queue"));
    }

    #[test]
    fn test_errors_distinct_from_success_messages() {
        let successes: HashSet<&str> = EN_GB_DASHBOARD
            .iter()
            .filter(|(key, _)| key.category() == KeyCategory::Success)
            .map(|(_, value)| *value)
            .collect();

        assert!(!successes.is_empty());
        for (key, value) in EN_GB_DASHBOARD {
            if key.category() == KeyCategory::Error {
                assert!(!successes.contains(value), "{} reuses a success message", key);
            }
        }
    }
}
