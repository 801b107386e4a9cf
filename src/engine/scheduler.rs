// src/engine/scheduler.rs
use crate::simulation_engine::simulation::{SimulationCore, TickKind};
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::{Handle, TryCurrentError};
use tokio::task::JoinHandle;
use tokio::time::sleep;

pub type SharedCore = Arc<Mutex<SimulationCore>>;

/// Locks the core. A tick cannot leave the core half-written, so a poisoned
/// lock still guards a consistent value and is taken over.
pub fn lock_core(core: &SharedCore) -> MutexGuard<'_, SimulationCore> {
    core.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns one periodic tokio task per [`TickKind`].
///
/// Each firing takes the core lock for one full pass, so passes never
/// interleave. Dropping the scheduler aborts its tasks.
pub struct Scheduler {
    tasks: Vec<(TickKind, JoinHandle<()>)>,
}

impl Scheduler {
    /// Spawns the network and metrics loops on the current tokio runtime.
    pub fn start(core: SharedCore) -> Result<Self, TryCurrentError> {
        let runtime = Handle::try_current()?;
        let tasks = [TickKind::Network, TickKind::Metrics]
            .into_iter()
            .map(|kind| (kind, runtime.spawn(run_tick_loop(Arc::clone(&core), kind))))
            .collect();
        info!("Scheduler started");
        Ok(Self { tasks })
    }

    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|(_, handle)| !handle.is_finished())
    }

    /// Cancels every outstanding timer. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        for (kind, handle) in self.tasks.drain(..) {
            handle.abort();
            debug!("Cancelled {:?} tick loop", kind);
        }
        info!("Scheduler stopped");
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// The cadence is re-read before every sleep so control changes apply from the next period.
async fn run_tick_loop(core: SharedCore, kind: TickKind) {
    loop {
        let period = lock_core(&core).cadence(kind);
        sleep(period).await;
        lock_core(&core).tick(kind);
    }
}
