//! Background Poller
//!
//! Three independent fetch-then-apply cycles (scheduler state, dashboard,
//! log tail). A failed cycle leaves its slice untouched and only logs; a
//! response older than the last applied one for the same slice is dropped.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use leptos::task::spawn_local;

use crate::commands::Api;
use crate::config::ConsoleConfig;
use crate::error::ApiResult;
use crate::store::{store_replace_dashboard, store_replace_logs, store_replace_scheduler, AppStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollKind {
    Scheduler,
    Dashboard,
    Logs,
}

impl PollKind {
    pub const ALL: [PollKind; 3] = [PollKind::Scheduler, PollKind::Dashboard, PollKind::Logs];

    fn index(self) -> usize {
        match self {
            PollKind::Scheduler => 0,
            PollKind::Dashboard => 1,
            PollKind::Logs => 2,
        }
    }

    fn interval_ms(self, config: &ConsoleConfig) -> u32 {
        match self {
            PollKind::Scheduler => config.scheduler_interval_ms,
            PollKind::Dashboard => config.dashboard_interval_ms,
            PollKind::Logs => config.logs_interval_ms,
        }
    }
}

impl fmt::Display for PollKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PollKind::Scheduler => "scheduler",
            PollKind::Dashboard => "dashboard",
            PollKind::Logs => "logs",
        })
    }
}

/// Monotonic request tickets for one slice
#[derive(Default)]
struct Sequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl Sequencer {
    fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Claim the slice for `ticket` unless a newer response already landed
    fn accept(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }
}

#[derive(Clone)]
pub struct Poller {
    api: Api,
    store: AppStore,
    log_limit: u32,
    sequencers: Rc<[Sequencer; 3]>,
}

impl Poller {
    pub fn new(api: Api, store: AppStore, log_limit: u32) -> Self {
        Self {
            api,
            store,
            log_limit,
            sequencers: Rc::new(Default::default()),
        }
    }

    /// Run one cycle; `true` when the store was updated
    pub async fn refresh(&self, kind: PollKind) -> bool {
        match kind {
            PollKind::Scheduler => self.refresh_scheduler().await,
            PollKind::Dashboard => self.refresh_dashboard().await,
            PollKind::Logs => self.refresh_logs().await,
        }
    }

    pub async fn refresh_dashboard(&self) -> bool {
        let store = self.store;
        self.run_cycle(PollKind::Dashboard, self.api.dashboard(), |snapshot| {
            store_replace_dashboard(&store, snapshot)
        })
        .await
    }

    pub async fn refresh_logs(&self) -> bool {
        let store = self.store;
        self.run_cycle(PollKind::Logs, self.api.logs(self.log_limit), |logs| {
            store_replace_logs(&store, logs)
        })
        .await
    }

    pub async fn refresh_scheduler(&self) -> bool {
        let store = self.store;
        self.run_cycle(PollKind::Scheduler, self.api.scheduler_state(), |state| {
            store_replace_scheduler(&store, state)
        })
        .await
    }

    /// Spawn the three timers. Each does an immediate refresh, then one per
    /// tick; a slow response does not hold back the next tick.
    pub fn start(&self, config: &ConsoleConfig) {
        for kind in PollKind::ALL {
            let poller = self.clone();
            let period = kind.interval_ms(config);
            log::info!("polling {} every {} ms", kind, period);

            spawn_local(async move {
                poller.refresh(kind).await;
                let mut ticks = IntervalStream::new(period);
                while ticks.next().await.is_some() {
                    let poller = poller.clone();
                    spawn_local(async move {
                        poller.refresh(kind).await;
                    });
                }
            });
        }
    }

    async fn run_cycle<T>(
        &self,
        kind: PollKind,
        fetch: impl Future<Output = ApiResult<T>>,
        apply: impl FnOnce(T),
    ) -> bool {
        let sequencer = &self.sequencers[kind.index()];
        let ticket = sequencer.issue();

        match fetch.await {
            Ok(value) if sequencer.accept(ticket) => {
                apply(value);
                log::debug!("{} refreshed (#{})", kind, ticket);
                true
            }
            Ok(_) => {
                log::debug!("dropping stale {} response #{}", kind, ticket);
                false
            }
            Err(e) if e.is_transient() => {
                log::warn!("{} poll failed, keeping last snapshot: {}", kind, e);
                false
            }
            Err(e) => {
                log::error!("{} poll rejected, keeping last snapshot: {}", kind, e);
                false
            }
        }
    }
}
