//! Threaded simulation host.
//!
//! One tokio task owns the [`SimulationEngine`]. Input arrives as messages and
//! every state change is published as a [`GridSnapshot`] on a watch channel, so
//! renderers on other threads never touch the engine directly.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::{BrickRng, GridSnapshot};
use crate::engine::{SimulationEngine, TickOutcome};
use crate::types::{InputAction, SimStatus};

/// Handle to a simulation running on a tokio task.
///
/// Must be created from within a tokio runtime. Dropping the handle stops the
/// task; [`Session::stop`] also hands the engine back.
pub struct Session<R: BrickRng> {
    cmd_tx: mpsc::UnboundedSender<InputAction>,
    snap_rx: watch::Receiver<GridSnapshot>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<SimulationEngine<R>>,
}

impl<R: BrickRng + Send + 'static> Session<R> {
    /// Start ticking `engine` every `period`. The first tick fires one full
    /// period after the call.
    pub fn spawn(engine: SimulationEngine<R>, period: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snap_tx, snap_rx) = watch::channel(engine.snapshot());
        let (stop_tx, stop_rx) = oneshot::channel();

        let task = tokio::spawn(run_session(engine, period, cmd_rx, snap_tx, stop_rx));

        Self {
            cmd_tx,
            snap_rx,
            stop_tx: Some(stop_tx),
            task,
        }
    }

    /// Queue an action; it is applied between ticks in arrival order.
    pub fn send(&self, action: InputAction) -> Result<()> {
        self.cmd_tx
            .send(action)
            .map_err(|_| anyhow!("simulation session has stopped"))
    }

    /// Latest published state.
    pub fn snapshot(&self) -> GridSnapshot {
        self.snap_rx.borrow().clone()
    }

    /// A receiver notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<GridSnapshot> {
        self.snap_rx.clone()
    }

    /// Cancel the tick loop and take the engine back.
    pub async fn stop(mut self) -> Result<SimulationEngine<R>> {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        (&mut self.task).await.context("simulation task failed")
    }
}

async fn run_session<R: BrickRng>(
    mut engine: SimulationEngine<R>,
    period: Duration,
    mut cmd_rx: mpsc::UnboundedReceiver<InputAction>,
    snap_tx: watch::Sender<GridSnapshot>,
    mut stop_rx: oneshot::Receiver<()>,
) -> SimulationEngine<R> {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    log::info!("session started, tick period {:?}", period);

    loop {
        tokio::select! {
            biased;

            // Fires on stop() and when the handle is dropped.
            _ = &mut stop_rx => break,

            // Ticks go before input so a busy command queue cannot stretch the period.
            _ = interval.tick() => {
                match engine.tick() {
                    TickOutcome::ToppedOut => {}
                    _ => snap_tx.send_modify(|snap| engine.snapshot_into(snap)),
                }
            }

            Some(action) = cmd_rx.recv() => {
                if engine.apply(action) {
                    snap_tx.send_modify(|snap| engine.snapshot_into(snap));
                } else {
                    log::debug!("action {:?} changed nothing", action);
                }
            }
        }
    }

    log::info!("session stopped after {} ticks", engine.tick_count());
    engine
}

/// Blocking wrapper around [`Session`] for synchronous callers.
///
/// Owns a small tokio runtime dedicated to the simulation.
pub struct Driver<R: BrickRng> {
    rt: Runtime,
    session: Session<R>,
}

impl<R: BrickRng + Send + 'static> Driver<R> {
    pub fn start(engine: SimulationEngine<R>, period: Duration) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("rainbow-sim")
            .enable_all()
            .build()
            .context("creating simulation runtime")?;

        let session = {
            let _guard = rt.enter();
            Session::spawn(engine, period)
        };

        Ok(Self { rt, session })
    }

    pub fn send(&self, action: InputAction) -> Result<()> {
        self.session.send(action)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.session.snapshot()
    }

    /// Block until the simulation reaches `tick` or tops out.
    ///
    /// Returns the latest snapshot, which may be past `tick` if the task ran
    /// ahead. Use [`crate::headless::run`] when every tick must be observed.
    pub fn wait_for_tick(&self, tick: u64, timeout: Duration) -> Result<GridSnapshot> {
        let mut rx = self.session.subscribe();
        self.rt.block_on(async move {
            let snap = time::timeout(
                timeout,
                rx.wait_for(|s| s.tick >= tick || s.status == SimStatus::ToppedOut),
            )
            .await
            .with_context(|| format!("timed out waiting for tick {}", tick))?
            .context("simulation session has stopped")?;
            Ok(snap.clone())
        })
    }

    pub fn stop(self) -> Result<SimulationEngine<R>> {
        let Self { rt, session } = self;
        rt.block_on(session.stop())
    }
}
