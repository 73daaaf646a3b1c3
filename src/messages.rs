//! Typed formatting functions, one per dashboard template.
//!
//! Each method fixes the number and type of its arguments, so a call site
//! cannot pass a segment name where a recipient count belongs.

use crate::i18n::{FormatArg, MessageKey};
use crate::translator::Translator;
use chrono::NaiveDateTime;

/// Typed view over a [`Translator`] for the dashboard templates.
pub struct DashboardMessages<'a> {
    translator: &'a Translator<'a>,
}

impl<'a> DashboardMessages<'a> {
    pub fn new(translator: &'a Translator<'a>) -> Self {
        Self { translator }
    }

    fn render(&self, key: MessageKey, args: &[FormatArg]) -> String {
        self.translator.format(key.as_str(), args)
    }

    // ==================== Overview ====================

    pub fn welcome(&self, user_name: &str) -> String {
        self.render(MessageKey::TextWelcome, &[user_name.into()])
    }

    pub fn last_updated(&self, when: &NaiveDateTime) -> String {
        let when = self.translator.date(MessageKey::FormatDatetime, when);
        self.render(MessageKey::TextLastUpdated, &[when.into()])
    }

    /// Period-over-period change of a KPI, in percent.
    ///
    /// Direction is decided on the value as displayed (one decimal), so a
    /// change that rounds to `0.0` reads as no change. A non-finite change
    /// renders as missing data.
    pub fn change(&self, percent: f64) -> String {
        if !percent.is_finite() {
            return self.translator.text(MessageKey::TextNoData);
        }

        // One decimal, as in the `text_change_*` templates
        let shown = (percent * 10.0).round() / 10.0;
        if shown > 0.0 {
            self.render(MessageKey::TextChangeUp, &[shown.into()])
        } else if shown < 0.0 {
            self.render(MessageKey::TextChangeDown, &[shown.abs().into()])
        } else {
            self.translator.text(MessageKey::TextChangeNone)
        }
    }

    // ==================== Recent Activity ====================

    pub fn segment_created(&self, segment: &str) -> String {
        self.render(MessageKey::TextActivitySegmentCreated, &[segment.into()])
    }

    pub fn segment_updated(&self, segment: &str) -> String {
        self.render(MessageKey::TextActivitySegmentUpdated, &[segment.into()])
    }

    pub fn campaign_sent(&self, recipients: u64) -> String {
        self.render(MessageKey::TextActivityCampaignSent, &[recipients.into()])
    }

    pub fn campaign_scheduled(&self, campaign: &str, send_at: &NaiveDateTime) -> String {
        let send_at = self.translator.date(MessageKey::FormatDatetime, send_at);
        self.render(
            MessageKey::TextActivityCampaignScheduled,
            &[campaign.into(), send_at.into()],
        )
    }

    pub fn workflow_activated(&self, workflow: &str) -> String {
        self.render(MessageKey::TextActivityWorkflowActivated, &[workflow.into()])
    }

    pub fn workflow_paused(&self, workflow: &str) -> String {
        self.render(MessageKey::TextActivityWorkflowPaused, &[workflow.into()])
    }

    pub fn export_completed(&self, contacts: u64) -> String {
        self.render(MessageKey::TextActivityExportCompleted, &[contacts.into()])
    }

    // ==================== System Health ====================

    pub fn health_response_time(&self, millis: u64) -> String {
        self.render(MessageKey::TextHealthResponseTime, &[millis.into()])
    }

    pub fn health_queue_depth(&self, jobs: u64) -> String {
        self.render(MessageKey::TextHealthQueueDepth, &[jobs.into()])
    }

    pub fn health_last_check(&self, checked_at: &NaiveDateTime) -> String {
        let checked_at = self.translator.date(MessageKey::FormatDatetime, checked_at);
        self.render(MessageKey::TextHealthLastCheck, &[checked_at.into()])
    }

    pub fn health_interval(&self, minutes: u32) -> String {
        self.render(MessageKey::HelpHealth, &[minutes.into()])
    }

    pub fn health_check_failed(&self, reason: &str) -> String {
        self.render(MessageKey::ErrorHealthCheck, &[reason.into()])
    }

    // ==================== Maintenance ====================

    pub fn task_started(&self, task: &str) -> String {
        self.render(MessageKey::TextTaskStarted, &[task.into()])
    }

    pub fn task_completed(&self, task: &str, seconds: u64) -> String {
        self.render(MessageKey::TextTaskCompleted, &[task.into(), seconds.into()])
    }

    pub fn task_failed(&self, task: &str, reason: &str) -> String {
        self.render(MessageKey::ErrorTaskFailed, &[task.into(), reason.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn translator() -> Translator<'static> {
        Translator::for_request(&Config::default(), Some("en-gb")).expect("en-gb is registered")
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    // ==================== Activity Tests ====================

    #[test]
    fn test_segment_created() {
        let t = translator();
        assert_eq!(
            t.messages().segment_created("VIP Customers"),
            "Created segment \"VIP Customers\""
        );
    }

    #[test]
    fn test_campaign_sent() {
        let t = translator();
        assert_eq!(
            t.messages().campaign_sent(1500),
            "Sent campaign to 1500 recipients"
        );
    }

    #[test]
    fn test_campaign_scheduled_uses_datetime_pattern() {
        let t = translator();
        assert_eq!(
            t.messages().campaign_scheduled("Summer Sale", &at(9, 0)),
            "Scheduled campaign \"Summer Sale\" for 01/06/2024 09:00:00"
        );
    }

    #[test]
    fn test_export_completed() {
        let t = translator();
        assert_eq!(t.messages().export_completed(42), "Exported 42 contacts");
    }

    // ==================== Overview Tests ====================

    #[test]
    fn test_welcome_escapes_name() {
        let t = translator();
        assert_eq!(t.messages().welcome("<Sam>"), "Welcome back, &lt;Sam&gt;");
    }

    #[test]
    fn test_change_directions() {
        let t = translator();
        let messages = t.messages();
        assert_eq!(messages.change(12.34), "Up 12.3% on previous period");
        assert_eq!(messages.change(-4.0), "Down 4.0% on previous period");
        assert_eq!(messages.change(0.0), "No change on previous period");
    }

    #[test]
    fn test_change_below_display_precision_is_no_change() {
        let t = translator();
        let messages = t.messages();
        assert_eq!(messages.change(0.04), "No change on previous period");
        assert_eq!(messages.change(-0.04), "No change on previous period");
    }

    #[test]
    fn test_change_rounds_half_away_from_zero() {
        let t = translator();
        let messages = t.messages();
        assert_eq!(messages.change(0.25), "Up 0.3% on previous period");
        assert_eq!(messages.change(-0.25), "Down 0.3% on previous period");
    }

    #[test]
    fn test_change_non_finite_is_no_data() {
        let t = translator();
        let messages = t.messages();
        let no_data = "No data available for the selected period.";
        assert_eq!(messages.change(f64::NAN), no_data);
        assert_eq!(messages.change(f64::INFINITY), no_data);
        assert_eq!(messages.change(f64::NEG_INFINITY), no_data);
    }

    #[test]
    fn test_last_updated() {
        let t = translator();
        assert_eq!(
            t.messages().last_updated(&at(17, 45)),
            "Last updated: 01/06/2024 17:45:00"
        );
    }

    // ==================== Health and Maintenance Tests ====================

    #[test]
    fn test_health_messages() {
        let t = translator();
        let messages = t.messages();
        assert_eq!(messages.health_response_time(87), "Response time: 87 ms");
        assert_eq!(messages.health_queue_depth(3), "3 jobs pending");
        assert_eq!(
            messages.health_interval(5),
            "Health checks run automatically every 5 minutes."
        );
        assert_eq!(
            messages.health_check_failed("timeout"),
            "Health check failed: timeout"
        );
    }

    #[test]
    fn test_task_messages() {
        let t = translator();
        let messages = t.messages();
        assert_eq!(messages.task_started("Clear cache"), "Task \"Clear cache\" started");
        assert_eq!(
            messages.task_completed("Clear cache", 12),
            "Task \"Clear cache\" completed in 12 seconds"
        );
        assert_eq!(
            messages.task_failed("Reindex analytics", "disk full"),
            "Task \"Reindex analytics\" failed: disk full"
        );
    }
}
