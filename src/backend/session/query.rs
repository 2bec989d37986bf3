//! Shared, lazily fetched session cache.
//!
//! One entry keyed by [`SESSION_QUERY_KEY`] backs every guard in the page
//! tree. A successful answer stays fresh for `stale_time`; concurrent callers
//! share one outstanding request; `invalidate` drops the entry and makes any
//! request still in flight resolve into a no-op.

use crate::backend::session::error::SessionError;
use crate::backend::session::models::{Session, User};
use chrono::{DateTime, TimeDelta, Utc};
use futures_util::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

pub const SESSION_QUERY_KEY: &str = "session";

pub type SessionResult = Result<Option<User>, SessionError>;

type InFlight = Shared<LocalBoxFuture<'static, SessionResult>>;

/// Anything that can answer "who is signed in right now".
pub trait SessionSource: Clone + 'static {
    fn fetch_session(&self) -> impl Future<Output = SessionResult>;
}

/// Time source for freshness checks.
pub trait Clock: Clone + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Type-erased [`SessionSource`], so holders of a query do not name the
/// transport behind it.
#[derive(Clone)]
pub struct BoxedSource(Rc<dyn Fn() -> LocalBoxFuture<'static, SessionResult>>);

impl BoxedSource {
    pub fn new<S: SessionSource>(source: S) -> Self {
        Self(Rc::new(move || {
            let source = source.clone();
            async move { source.fetch_session().await }.boxed_local()
        }))
    }
}

impl SessionSource for BoxedSource {
    fn fetch_session(&self) -> impl Future<Output = SessionResult> {
        (self.0)()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

enum Entry {
    Empty,
    Pending {
        generation: u64,
        fetch: InFlight,
    },
    Settled {
        fetched_at: DateTime<Utc>,
        result: SessionResult,
    },
}

struct QueryState {
    entry: Entry,
    generation: u64,
}

/// Cached session query. Clones share the same entry.
#[derive(Clone)]
pub struct SessionQuery<S, C = SystemClock> {
    source: S,
    clock: C,
    stale_time: TimeDelta,
    state: Rc<RefCell<QueryState>>,
}

impl<S: SessionSource> SessionQuery<S> {
    pub fn new(source: S, stale_time: TimeDelta) -> Self {
        Self::with_clock(source, SystemClock, stale_time)
    }
}

impl<S: SessionSource, C: Clock> SessionQuery<S, C> {
    pub fn with_clock(source: S, clock: C, stale_time: TimeDelta) -> Self {
        Self {
            source,
            clock,
            stale_time,
            state: Rc::new(RefCell::new(QueryState {
                entry: Entry::Empty,
                generation: 0,
            })),
        }
    }

    pub const fn key(&self) -> &'static str {
        SESSION_QUERY_KEY
    }

    /// Returns the session, issuing a request only when nothing fresh is
    /// cached and none is already outstanding.
    pub async fn fetch(&self) -> SessionResult {
        let (generation, fetch) = {
            let mut state = self.state.borrow_mut();
            match &state.entry {
                Entry::Settled { fetched_at, result }
                    if result.is_ok() && self.is_fresh(*fetched_at) =>
                {
                    tracing::debug!("Query '{}' served from cache", self.key());
                    return result.clone();
                }
                Entry::Pending { generation, fetch } => {
                    tracing::debug!("Query '{}' joined in-flight request", self.key());
                    (*generation, fetch.clone())
                }
                _ => {
                    tracing::info!("Query '{}' requesting session", self.key());
                    let source = self.source.clone();
                    let fetch = async move { source.fetch_session().await }
                        .boxed_local()
                        .shared();
                    let generation = state.generation;
                    state.entry = Entry::Pending {
                        generation,
                        fetch: fetch.clone(),
                    };
                    (generation, fetch)
                }
            }
        };

        let result = fetch.await;
        if let Err(e) = &result {
            tracing::warn!("Query '{}' failed: {e}", self.key());
        }
        self.settle(generation, result.clone());
        result
    }

    /// Current state without issuing a request.
    pub fn snapshot(&self) -> Session {
        match &self.state.borrow().entry {
            Entry::Empty | Entry::Pending { .. } => Session::loading(),
            Entry::Settled { result, .. } => Session::resolved(result.clone()),
        }
    }

    /// The cached successful result, if it is still fresh.
    pub fn cached(&self) -> Option<SessionResult> {
        match &self.state.borrow().entry {
            Entry::Settled { fetched_at, result }
                if result.is_ok() && self.is_fresh(*fetched_at) =>
            {
                Some(result.clone())
            }
            _ => None,
        }
    }

    /// Drops the cached entry. A request still in flight is ignored when it
    /// resolves.
    pub fn invalidate(&self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        state.entry = Entry::Empty;
        tracing::info!("Query '{}' invalidated", self.key());
    }

    fn settle(&self, generation: u64, result: SessionResult) {
        let mut state = self.state.borrow_mut();
        let current = matches!(
            state.entry,
            Entry::Pending { generation: pending, .. } if pending == generation
        );
        if !current {
            return;
        }
        state.entry = Entry::Settled {
            fetched_at: self.clock.now(),
            result,
        };
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        self.clock.now() - fetched_at < self.stale_time
    }
}
