//! Scheduler for periodic background jobs.
//!
//! A cron-based job scheduler (tokio-cron-scheduler) running the daily maintenance reminder
//! job, which puts overdue and soon-due equipment and facility maintenance into the shared
//! calendar.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, util::functions::FunctionsClient};

pub mod config;
pub mod maintenance;

use self::{config::maintenance as maintenance_config, maintenance::send_maintenance_reminders};

/// Job scheduler for background jobs.
pub struct Scheduler {
    db: DatabaseConnection,
    functions: FunctionsClient,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection handed to every job
    /// - `functions` - Client for the serverless functions handed to every job
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(db: DatabaseConnection, functions: FunctionsClient) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            functions,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Maintenance reminders
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            maintenance_config::CRON_EXPRESSION,
            "maintenance reminder",
            send_maintenance_reminders,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// The job receives clones of the database connection and functions client. On execution
    /// it logs the count returned by the job or the error it failed with.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 5 * * *" for daily at 05:00)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job function returning the number of items it handled
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, FunctionsClient) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let functions = self.functions.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let functions = functions.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, functions).await {
                        Ok(count) => tracing::info!("Sent {} {}(s)", count, name),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use allevapp_test_utils::prelude::*;

    use super::*;

    /// Expect the maintenance job to register with its cron expression
    #[tokio::test]
    async fn test_start_registers_jobs() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        let functions = FunctionsClient::builder(&test.functions_url(), TEST_FUNCTIONS_API_KEY)
            .build()
            .unwrap();

        let scheduler = Scheduler::new(test.db.clone(), functions).await.unwrap();
        let result = scheduler.start().await;

        assert!(result.is_ok());

        Ok(())
    }

    /// Expect an invalid cron expression to be rejected
    #[tokio::test]
    async fn test_schedule_job_invalid_cron() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let functions = FunctionsClient::builder(&test.functions_url(), TEST_FUNCTIONS_API_KEY)
            .build()
            .unwrap();

        let mut scheduler = Scheduler::new(test.db.clone(), functions).await.unwrap();
        let result = scheduler
            .schedule_job("not a cron", "broken", send_maintenance_reminders)
            .await;

        assert!(result.is_err());

        Ok(())
    }
}
