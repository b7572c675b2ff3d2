use crate::session::SessionStore;
use anyhow::Result;
use chrono::Duration;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{debug, info};

/// Cron expression for the idle-session sweep: second 0 of every minute.
const SWEEP_SCHEDULE: &str = "0 * * * * *";

/// Initialize and start the scheduler that drops idle sessions
pub async fn start_session_sweeper(store: Arc<SessionStore>, ttl: Duration) -> Result<JobScheduler> {
    let scheduler = JobScheduler::new().await?;

    info!(
        "Scheduling idle session sweep (cron: {}, ttl: {} min)",
        SWEEP_SCHEDULE,
        ttl.num_minutes()
    );

    let job = Job::new_async(SWEEP_SCHEDULE, move |_uuid, _l| {
        let store = Arc::clone(&store);

        Box::pin(async move {
            let removed = store.prune_idle(ttl).await;
            debug!(removed, "Idle session sweep finished");
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!("✓ Scheduler started");

    Ok(scheduler)
}
