//! Bounded polling until a state change completes
//!
//! This module provides the state machine used to wait out backend
//! eventual consistency: a refresh is invoked on a fixed interval until it
//! reports the target state, fails hard, or the attempt budget or the
//! deadline runs out. Nothing here outlives the deadline, a refresh that is
//! still running when it passes included.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep_until, timeout_at, Instant};
use tracing::{debug, trace};

/// What a single refresh observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState<T> {
    /// Still in the pending state, poll again
    Pending,
    /// Reached the target state
    Done(T),
}

/// Parameters of one wait
#[derive(Debug, Clone)]
pub struct StateChangeConf {
    pub pending: &'static str,
    pub target: &'static str,
    pub poll_interval: Duration,
    /// Consecutive pending polls tolerated before giving up
    pub not_found_checks: usize,
    pub deadline: Instant,
}

#[derive(Debug, Error)]
pub enum PollError<E> {
    #[error("timeout while waiting for state to become '{target}' (last state: '{last_state}', waited: {waited:?})")]
    Timeout {
        last_state: &'static str,
        target: &'static str,
        waited: Duration,
    },

    #[error("state did not become '{target}' after {checks} checks")]
    NotFoundChecksExhausted { target: &'static str, checks: usize },

    #[error("{0}")]
    Refresh(E),
}

/// Poll `refresh` until it reports [`PollState::Done`].
///
/// Every iteration sleeps one interval before refreshing. A refresh is never
/// started when its scheduled time lies past the deadline, and a refresh
/// still running at the deadline is dropped.
pub async fn wait_for_state<T, E, F, Fut>(
    conf: &StateChangeConf,
    mut refresh: F,
) -> Result<T, PollError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<PollState<T>, E>>,
{
    let started = Instant::now();
    let mut pending_polls = 0usize;

    debug!(
        pending = conf.pending,
        target = conf.target,
        interval = ?conf.poll_interval,
        "waiting for state change"
    );

    loop {
        let next_poll = Instant::now() + conf.poll_interval;
        if next_poll > conf.deadline {
            debug!(polls = pending_polls, "deadline reached while '{}'", conf.pending);
            return Err(PollError::Timeout {
                last_state: conf.pending,
                target: conf.target,
                waited: started.elapsed(),
            });
        }
        sleep_until(next_poll).await;

        let refreshed = match timeout_at(conf.deadline, refresh()).await {
            Ok(refreshed) => refreshed,
            Err(_) => {
                debug!(polls = pending_polls, "deadline reached during refresh");
                return Err(PollError::Timeout {
                    last_state: conf.pending,
                    target: conf.target,
                    waited: started.elapsed(),
                });
            }
        };

        match refreshed {
            Ok(PollState::Done(value)) => {
                debug!(polls = pending_polls + 1, "state became '{}'", conf.target);
                return Ok(value);
            }
            Ok(PollState::Pending) => {
                pending_polls += 1;
                trace!(polls = pending_polls, "still '{}'", conf.pending);
                if pending_polls >= conf.not_found_checks {
                    debug!(polls = pending_polls, "gave up waiting on '{}'", conf.pending);
                    return Err(PollError::NotFoundChecksExhausted {
                        target: conf.target,
                        checks: pending_polls,
                    });
                }
            }
            Err(error) => return Err(PollError::Refresh(error)),
        }
    }
}
