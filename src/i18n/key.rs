//! Typed message keys.
//!
//! Every key the dashboard views use is declared once here together with the
//! placeholders its template takes. Tables are keyed by these variants, so a
//! renamed or missing key is caught by the validator and the test suite
//! instead of surfacing as a raw key in the admin panel.

use crate::i18n::template::Placeholder;
use std::fmt;
use std::str::FromStr;

macro_rules! message_keys {
    ($( $variant:ident => $key:literal $([$($ph:ident),+])? ),* $(,)?) => {
        /// A known dashboard message key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageKey {
            $( $variant, )*
        }

        impl MessageKey {
            /// Every declared key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[ $( MessageKey::$variant, )* ];

            /// The string identifier used by templates and the host platform.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( MessageKey::$variant => $key, )*
                }
            }

            /// Placeholders the template value must contain, in order.
            pub const fn signature(self) -> &'static [Placeholder] {
                match self {
                    $( MessageKey::$variant => &[ $( $( Placeholder::$ph ),+ )? ], )*
                }
            }
        }
    };
}

message_keys! {
    // Headings and navigation
    HeadingTitle => "heading_title",
    TextExtension => "text_extension",
    NavDashboard => "nav_dashboard",
    NavSegments => "nav_segments",
    NavCampaigns => "nav_campaigns",
    NavWorkflows => "nav_workflows",
    NavAnalytics => "nav_analytics",
    NavHealth => "nav_health",
    NavSettings => "nav_settings",

    // Overview
    TextWelcome => "text_welcome" [Str],
    TextOverview => "text_overview",
    TextPeriodToday => "text_period_today",
    TextPeriod7d => "text_period_7d",
    TextPeriod30d => "text_period_30d",
    TextPeriod90d => "text_period_90d",
    TextPeriodCustom => "text_period_custom",
    TextLastUpdated => "text_last_updated" [Str],
    TextNoData => "text_no_data",
    TextLoading => "text_loading",

    // KPIs
    TextRevenue => "text_revenue",
    TextRevenueAttributed => "text_revenue_attributed",
    TextOrders => "text_orders",
    TextCustomers => "text_customers",
    TextNewCustomers => "text_new_customers",
    TextConversionRate => "text_conversion_rate",
    TextAverageOrderValue => "text_average_order_value",
    TextOpenRate => "text_open_rate",
    TextClickRate => "text_click_rate",
    TextUnsubscribeRate => "text_unsubscribe_rate",
    TextEmailsSent => "text_emails_sent",
    TextActiveCampaigns => "text_active_campaigns",
    TextActiveWorkflows => "text_active_workflows",
    TextTotalSegments => "text_total_segments",
    TextChangeUp => "text_change_up" [Float],
    TextChangeDown => "text_change_down" [Float],
    TextChangeNone => "text_change_none",

    // Recent activity
    TextRecentActivity => "text_recent_activity",
    TextActivitySegmentCreated => "text_activity_segment_created" [Str],
    TextActivitySegmentUpdated => "text_activity_segment_updated" [Str],
    TextActivityCampaignSent => "text_activity_campaign_sent" [Int],
    TextActivityCampaignScheduled => "text_activity_campaign_scheduled" [Str, Str],
    TextActivityWorkflowActivated => "text_activity_workflow_activated" [Str],
    TextActivityWorkflowPaused => "text_activity_workflow_paused" [Str],
    TextActivityExportCompleted => "text_activity_export_completed" [Int],
    TextNoActivity => "text_no_activity",

    // Top lists
    TextTopCampaigns => "text_top_campaigns",
    TextTopSegments => "text_top_segments",
    ColumnName => "column_name",
    ColumnRecipients => "column_recipients",
    ColumnOpens => "column_opens",
    ColumnClicks => "column_clicks",
    ColumnRevenue => "column_revenue",
    ColumnStatus => "column_status",
    ColumnDate => "column_date",
    ColumnAction => "column_action",

    // System health
    TextSystemHealth => "text_system_health",
    TextHealthCore => "text_health_core",
    TextHealthDatabase => "text_health_database",
    TextHealthAiGateway => "text_health_ai_gateway",
    TextHealthQueue => "text_health_queue",
    TextHealthResponseTime => "text_health_response_time" [Int],
    TextHealthQueueDepth => "text_health_queue_depth" [Int],
    TextHealthLastCheck => "text_health_last_check" [Str],
    StatusHealthy => "status_healthy",
    StatusDegraded => "status_degraded",
    StatusDown => "status_down",
    StatusUnknown => "status_unknown",
    StatusLoading => "status_loading",
    StatusRefreshing => "status_refreshing",
    StatusPending => "status_pending",
    StatusRunning => "status_running",
    StatusComplete => "status_complete",
    StatusFailed => "status_failed",

    // Maintenance
    TextMaintenance => "text_maintenance",
    TextMaintenanceDescription => "text_maintenance_description",
    TextTaskClearCache => "text_task_clear_cache",
    TextTaskRebuildSegments => "text_task_rebuild_segments",
    TextTaskPurgeLogs => "text_task_purge_logs",
    TextTaskReindex => "text_task_reindex",
    TextConfirmMaintenance => "text_confirm_maintenance",
    TextTaskStarted => "text_task_started" [Str],
    TextTaskCompleted => "text_task_completed" [Str, Int],

    // Quick actions and buttons
    TextQuickActions => "text_quick_actions",
    ButtonCreateCampaign => "button_create_campaign",
    ButtonCreateSegment => "button_create_segment",
    ButtonCreateWorkflow => "button_create_workflow",
    ButtonRefresh => "button_refresh",
    ButtonViewAll => "button_view_all",
    ButtonRunTask => "button_run_task",
    ButtonRunHealthCheck => "button_run_health_check",
    ButtonExport => "button_export",
    ButtonApply => "button_apply",
    ButtonReset => "button_reset",

    // Filter form
    EntryPeriod => "entry_period",
    EntryDateFrom => "entry_date_from",
    EntryDateTo => "entry_date_to",

    // Help and tooltips
    HelpRevenue => "help_revenue",
    HelpRevenueAttributed => "help_revenue_attributed",
    HelpConversionRate => "help_conversion_rate",
    HelpOpenRate => "help_open_rate",
    HelpClickRate => "help_click_rate",
    HelpHealth => "help_health" [Int],
    TooltipRefresh => "tooltip_refresh",
    TooltipExport => "tooltip_export",
    TooltipHealthDetails => "tooltip_health_details",
    TooltipPeriod => "tooltip_period",

    // Success messages
    TextSuccess => "text_success",
    TextSuccessCacheCleared => "text_success_cache_cleared",
    TextSuccessTask => "text_success_task",
    TextSuccessExport => "text_success_export",
    TextSuccessHealthCheck => "text_success_health_check",

    // Errors
    ErrorPermission => "error_permission",
    ErrorNotInstalled => "error_not_installed",
    ErrorLoadKpis => "error_load_kpis",
    ErrorLoadActivity => "error_load_activity",
    ErrorHealthCheck => "error_health_check" [Str],
    ErrorTaskUnknown => "error_task_unknown",
    ErrorTaskRunning => "error_task_running",
    ErrorTaskFailed => "error_task_failed" [Str, Str],
    ErrorDateRange => "error_date_range",
    ErrorExport => "error_export",
    ErrorAjax => "error_ajax",

    // Date patterns (host date() syntax)
    FormatDate => "format_date",
    FormatDateLong => "format_date_long",
    FormatDatetime => "format_datetime",
    FormatTime => "format_time",
    FormatChartDay => "format_chart_day",

    // Units
    UnitPercent => "unit_percent",
    UnitMilliseconds => "unit_milliseconds",
    UnitSeconds => "unit_seconds",
    UnitMinutes => "unit_minutes",
}

impl MessageKey {
    /// Category derived from the key prefix.
    pub fn category(self) -> KeyCategory {
        KeyCategory::of(self.as_str())
    }

    /// Whether the value takes runtime arguments.
    pub fn is_template(self) -> bool {
        !self.signature().is_empty()
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// Informal key category, read from the key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    Heading,
    Text,
    /// `text_success*` confirmation messages
    Success,
    Button,
    Error,
    Help,
    Tooltip,
    Status,
    Format,
    Unit,
    Nav,
    Column,
    Entry,
    Other,
}

impl KeyCategory {
    /// Classify a raw key by its prefix.
    pub fn of(key: &str) -> KeyCategory {
        // text_success must be checked before the generic text_ prefix
        if key.starts_with("text_success") {
            return KeyCategory::Success;
        }

        let prefix = key.split('_').next().unwrap_or_default();
        match prefix {
            "heading" => KeyCategory::Heading,
            "text" => KeyCategory::Text,
            "button" => KeyCategory::Button,
            "error" => KeyCategory::Error,
            "help" => KeyCategory::Help,
            "tooltip" => KeyCategory::Tooltip,
            "status" => KeyCategory::Status,
            "format" => KeyCategory::Format,
            "unit" => KeyCategory::Unit,
            "nav" => KeyCategory::Nav,
            "column" => KeyCategory::Column,
            "entry" => KeyCategory::Entry,
            _ => KeyCategory::Other,
        }
    }
}
