//! Create-after-delete handling for the data-plane
//!
//! A create issued while a previous delete of the same name is still
//! propagating is rejected with a conflict naming the pending delete.
//! That conflict, and only that one, is waited out by re-issuing the
//! create on a fixed interval.

use std::future::Future;
use tokio::time::timeout_at;
use tracing::debug;

use crate::config::WaitSettings;
use crate::context::OperationContext;
use crate::error::{ApiError, Result, ShimError};
use crate::models::{ResourceIdentity, ResourceKind};
use crate::utils::retry::{wait_for_state, PollError, PollState, StateChangeConf};

pub const WAITING_ON_DELETE: &str = "waitingOnDelete";
pub const SUCCEEDED: &str = "succeeded";

/// Conflict returned by the blob service while a container is deleted
pub const CONTAINER_BEING_DELETED: &str = "ContainerBeingDeleted";
/// Conflict returned by the file service while a share is deleted
pub const SHARE_BEING_DELETED: &str = "ShareBeingDeleted";

/// A conflict whose error text carries `error_code`
pub fn is_being_deleted(error: &ApiError, error_code: &str) -> bool {
    error.is_conflict() && error.mentions(error_code)
}

/// Run `create`, waiting out a pending delete signalled by `error_code`.
///
/// The context must carry a deadline. It bounds every attempt, the first
/// one included, as well as the wait between them.
pub async fn create_waiting_on_delete<F, Fut>(
    ctx: &OperationContext,
    kind: ResourceKind,
    id: &ResourceIdentity,
    wait: &WaitSettings,
    error_code: &str,
    mut create: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<(), ApiError>>,
{
    let deadline = ctx
        .deadline()
        .ok_or_else(|| ShimError::missing_deadline(kind, id))?;

    let first = timeout_at(deadline, create())
        .await
        .map_err(|_| ShimError::deadline_exceeded(kind, id))?;

    match first {
        Ok(()) => return Ok(()),
        Err(e) if is_being_deleted(&e, error_code) => {
            debug!(%kind, identity = %id, "{} is being deleted, retrying create", kind);
        }
        Err(e) => return Err(ShimError::api("creating", kind, id, e)),
    }

    let conf = StateChangeConf {
        pending: WAITING_ON_DELETE,
        target: SUCCEEDED,
        poll_interval: wait.poll_interval(),
        not_found_checks: wait.not_found_checks,
        deadline,
    };

    let outcome = wait_for_state(&conf, || {
        let attempt = create();
        async move {
            match attempt.await {
                Ok(()) => Ok(PollState::Done(())),
                Err(e) if is_being_deleted(&e, error_code) => Ok(PollState::Pending),
                Err(e) => Err(e),
            }
        }
    })
    .await;

    match outcome {
        Ok(()) => Ok(()),
        Err(PollError::Refresh(e)) => Err(ShimError::api("creating", kind, id, e)),
        Err(e) => Err(ShimError::DeleteTimeout {
            kind,
            identity: id.to_string(),
            last_state: WAITING_ON_DELETE,
            target: SUCCEEDED,
            reason: e.to_string(),
        }),
    }
}
