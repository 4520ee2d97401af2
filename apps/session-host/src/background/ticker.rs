//! Fixed-period ticker built on tokio-cron-scheduler.
//!
//! Owns the recurring job that drives the engine's publish sweep:
//! started once at initialization, shut down exactly once at teardown.

use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::config::HostConfig;

/// Ticker configuration.
#[derive(Debug, Clone)]
pub struct TickerConfig {
    /// Enable the ticker.
    pub enabled: bool,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl From<&HostConfig> for TickerConfig {
    fn from(config: &HostConfig) -> Self {
        Self {
            enabled: config.ticker_enabled,
        }
    }
}

/// Recurring-job scheduler wrapper.
pub struct Ticker {
    inner: JobScheduler,
    config: TickerConfig,
}

impl Ticker {
    /// Create a new ticker.
    pub async fn new(config: TickerConfig) -> Result<Self, JobSchedulerError> {
        let inner = JobScheduler::new().await?;
        Ok(Self { inner, config })
    }

    /// Register a job that runs every `period`.
    ///
    /// No drift compensation happens here: the task itself reads the
    /// wall clock on each run, so missed periods (a suspended host)
    /// self-correct on the next one.
    pub async fn add_repeated<F, Fut>(
        &self,
        period: Duration,
        task: F,
    ) -> Result<uuid::Uuid, JobSchedulerError>
    where
        F: Fn() -> Fut + Send + Sync + Clone + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let job = Job::new_repeated_async(period, move |_uuid, _lock| {
            let task = task.clone();
            Box::pin(async move {
                task().await;
            })
        })?;

        let id = self.inner.add(job).await?;
        tracing::info!(period_ms = period.as_millis() as u64, job_id = %id, "Repeated job registered");
        Ok(id)
    }

    /// Start the ticker.
    pub async fn start(&self) -> Result<(), JobSchedulerError> {
        if !self.config.enabled {
            tracing::info!("Ticker disabled");
            return Ok(());
        }

        self.inner.start().await?;
        tracing::info!("Ticker started");
        Ok(())
    }

    /// Stop the ticker, cancelling all registered jobs.
    pub async fn shutdown(&mut self) -> Result<(), JobSchedulerError> {
        self.inner.shutdown().await?;
        tracing::info!("Ticker stopped");
        Ok(())
    }
}
