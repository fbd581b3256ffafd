//! Scheduled ticking and lifecycle
//!
//! [`SimulationHandle`] owns one background task that ticks the driver on a
//! fixed interval. The driver sits behind a single mutex, so a tick and any
//! external mutation never interleave. [`SimulationContext`] is the scoped
//! entry point for the presentation layer: state is only reachable between
//! `start` and `stop`.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::behavior::VisitorBehavior;
use crate::personalization::PersonalizationContent;
use crate::simulation::analytics::AnalyticsData;
use crate::simulation::driver::SimulationDriver;
use crate::simulation::snapshot::SimulationSnapshot;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::SimulationConfig;
use crate::visitor::VisitorPersona;

/// Running simulation with its tick task.
///
/// Dropping the handle cancels the tick task; [`SimulationHandle::stop`] also
/// waits for it to finish.
#[derive(Debug)]
pub struct SimulationHandle {
    driver: Arc<Mutex<SimulationDriver>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl SimulationHandle {
    /// Initialize a driver from `config` and start ticking it.
    ///
    /// Fails with [`SimulationError::RuntimeUnavailable`] when called outside
    /// a tokio runtime.
    #[instrument(skip(config), fields(tick_interval_ms = config.tick_interval_ms))]
    pub fn spawn(config: SimulationConfig) -> SimulationResult<Self> {
        let runtime = tokio::runtime::Handle::try_current()?;
        let period = config.tick_interval();
        let mut driver = SimulationDriver::new(config)?;
        driver.initialize();

        let driver = Arc::new(Mutex::new(driver));
        let cancel = CancellationToken::new();
        let task = runtime.spawn(run_ticks(Arc::clone(&driver), period, cancel.clone()));

        info!("Simulation started");
        Ok(Self { driver, cancel, task: Some(task) })
    }

    /// Whether the tick task has not been cancelled
    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Token cancelled when the simulation stops; callers can derive child tokens
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Detached copy of the whole state
    pub fn snapshot(&self) -> SimulationSnapshot {
        self.driver.lock().snapshot()
    }

    /// All personas in creation order
    pub fn visitors(&self) -> Vec<VisitorPersona> {
        self.driver.lock().state().visitors().to_vec()
    }

    /// Retained behaviors, oldest first
    pub fn behaviors(&self) -> Vec<VisitorBehavior> {
        self.driver.lock().state().behaviors().iter().cloned().collect()
    }

    /// The resolved current visitor
    pub fn current_visitor(&self) -> Option<VisitorPersona> {
        self.driver.lock().state().current_visitor().cloned()
    }

    /// Latest analytics
    pub fn analytics(&self) -> AnalyticsData {
        self.driver.lock().analytics().clone()
    }

    /// Completed ticks
    pub fn tick_count(&self) -> u64 {
        self.driver.lock().state().tick_count()
    }

    /// Static personalization catalog
    pub fn personalization_content(&self) -> Vec<PersonalizationContent> {
        self.driver.lock().personalization_catalog().to_vec()
    }

    /// Content variant for the current visitor
    pub fn current_content(&self) -> Option<PersonalizationContent> {
        self.driver.lock().current_content().cloned()
    }

    /// Append a persona
    pub fn add_visitor(&self, persona: VisitorPersona) {
        self.driver.lock().add_visitor(persona);
    }

    /// Append a behavior without applying the retention window
    pub fn add_behavior(&self, behavior: VisitorBehavior) {
        self.driver.lock().add_behavior(behavior);
    }

    /// Change or clear the current visitor
    pub fn set_current_visitor(&self, persona: Option<&VisitorPersona>) {
        self.driver.lock().set_current_visitor(persona);
    }

    /// Record a contact form submission for the current visitor
    pub fn submit_contact_form(&self) -> Option<VisitorBehavior> {
        self.driver.lock().submit_contact_form()
    }

    /// Cancel the tick task and wait for it to exit
    pub async fn stop(mut self) -> SimulationResult<()> {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.await?;
        }
        info!(ticks = self.tick_count(), "Simulation stopped");
        Ok(())
    }
}

impl Drop for SimulationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_ticks(driver: Arc<Mutex<SimulationDriver>>, period: Duration, cancel: CancellationToken) {
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Tick loop cancelled");
                break;
            }
            _ = ticker.tick() => {
                let outcome = driver.lock().tick();
                debug!(behaviors = outcome.behaviors_generated, "Scheduled tick");
            }
        }
    }
}

/// Scoped access to a simulation that may not be running
#[derive(Debug)]
pub struct SimulationContext {
    config: SimulationConfig,
    handle: Option<SimulationHandle>,
}

impl SimulationContext {
    /// Create a stopped context
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, handle: None }
    }

    /// Configuration used on `start`
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Whether `start` has been called without a matching `stop`
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Populate the initial state and begin ticking
    pub fn start(&mut self) -> SimulationResult<&SimulationHandle> {
        if self.handle.is_some() {
            return Err(SimulationError::AlreadyRunning);
        }
        let handle = SimulationHandle::spawn(self.config.clone())?;
        Ok(self.handle.insert(handle))
    }

    /// Halt ticking and release the state
    pub async fn stop(&mut self) -> SimulationResult<()> {
        let handle = self.handle.take().ok_or_else(|| SimulationError::not_initialized("stop"))?;
        handle.stop().await
    }

    /// The running handle
    pub fn handle(&self) -> SimulationResult<&SimulationHandle> {
        self.handle.as_ref().ok_or_else(|| SimulationError::not_initialized("handle"))
    }

    /// All personas in creation order
    pub fn visitors(&self) -> SimulationResult<Vec<VisitorPersona>> {
        Ok(self.running("visitors")?.visitors())
    }

    /// Retained behaviors, oldest first
    pub fn behaviors(&self) -> SimulationResult<Vec<VisitorBehavior>> {
        Ok(self.running("behaviors")?.behaviors())
    }

    /// The resolved current visitor
    pub fn current_visitor(&self) -> SimulationResult<Option<VisitorPersona>> {
        Ok(self.running("current_visitor")?.current_visitor())
    }

    /// Latest analytics
    pub fn analytics(&self) -> SimulationResult<AnalyticsData> {
        Ok(self.running("analytics")?.analytics())
    }

    /// Static personalization catalog
    pub fn personalization_content(&self) -> SimulationResult<Vec<PersonalizationContent>> {
        Ok(self.running("personalization_content")?.personalization_content())
    }

    /// Detached copy of the whole state
    pub fn snapshot(&self) -> SimulationResult<SimulationSnapshot> {
        Ok(self.running("snapshot")?.snapshot())
    }

    /// Append a persona
    pub fn add_visitor(&self, persona: VisitorPersona) -> SimulationResult<()> {
        self.running("add_visitor")?.add_visitor(persona);
        Ok(())
    }

    /// Append a behavior without applying the retention window
    pub fn add_behavior(&self, behavior: VisitorBehavior) -> SimulationResult<()> {
        self.running("add_behavior")?.add_behavior(behavior);
        Ok(())
    }

    /// Change or clear the current visitor
    pub fn set_current_visitor(&self, persona: Option<&VisitorPersona>) -> SimulationResult<()> {
        self.running("set_current_visitor")?.set_current_visitor(persona);
        Ok(())
    }

    /// Record a contact form submission for the current visitor
    pub fn submit_contact_form(&self) -> SimulationResult<Option<VisitorBehavior>> {
        Ok(self.running("submit_contact_form")?.submit_contact_form())
    }

    fn running(&self, operation: &str) -> SimulationResult<&SimulationHandle> {
        self.handle.as_ref().ok_or_else(|| SimulationError::not_initialized(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig { seed: Some(21), ..SimulationConfig::default() }
    }

    #[tokio::test(start_paused = true)]
    async fn test_handle_ticks_on_interval() {
        let handle = SimulationHandle::spawn(config()).unwrap();
        assert_eq!(handle.tick_count(), 0);
        assert_eq!(handle.visitors().len(), 5);

        time::sleep(Duration::from_millis(3_000 * 4 + 500)).await;
        assert_eq!(handle.tick_count(), 4);

        handle.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_stop() {
        let handle = SimulationHandle::spawn(config()).unwrap();
        let token = handle.cancellation_token();
        let driver = Arc::clone(&handle.driver);

        time::sleep(Duration::from_millis(6_500)).await;
        handle.stop().await.unwrap();
        assert!(token.is_cancelled());

        let ticks = driver.lock().state().tick_count();
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(driver.lock().state().tick_count(), ticks);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticking() {
        let handle = SimulationHandle::spawn(config()).unwrap();
        let token = handle.cancellation_token();
        drop(handle);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_context_lifecycle() {
        let mut context = SimulationContext::new(config());
        assert!(matches!(context.visitors(), Err(SimulationError::NotInitialized(_))));

        context.start().unwrap();
        assert!(matches!(context.start(), Err(SimulationError::AlreadyRunning)));
        assert_eq!(context.visitors().unwrap().len(), 5);

        context.stop().await.unwrap();
        assert!(!context.is_running());
        assert!(matches!(context.analytics(), Err(SimulationError::NotInitialized(_))));
        assert!(context.stop().await.is_err());
    }
}
