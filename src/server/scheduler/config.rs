pub mod maintenance {
    /// Cron expression for maintenance reminders
    /// Runs daily at 05:00 UTC so reminders are in the calendar before the working day
    pub const CRON_EXPRESSION: &str = "0 0 5 * * *";
}
