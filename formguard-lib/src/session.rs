//! Async driver that owns a validator.
//!
//! A session is a single task: it applies events one at a time in the order
//! they were sent, sleeps until the next timer deadline when idle, and
//! publishes a fresh [`FormView`] after every change.

use log::{debug, trace};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::error::{FormError, SessionError};
use crate::render::FormView;
use crate::validator::{FormEvent, FormValidator, SubmitOutcome};

/// Pending events before `dispatch` waits for room.
const EVENT_BUFFER: usize = 64;

type Reply = oneshot::Sender<Result<Option<SubmitOutcome>, FormError>>;

struct Request {
    event: FormEvent,
    reply: Reply,
}

/// Entry point for running a validator on its own task.
pub struct FormSession;

impl FormSession {
    /// Spawn a session task owning `validator`.
    ///
    /// The task stops when `cancel` is cancelled or every handle is dropped.
    pub fn spawn(validator: FormValidator, cancel: CancellationToken) -> FormHandle {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let (view_tx, view_rx) = watch::channel(validator.view());
        let task = tokio::spawn(run(validator, rx, view_tx, cancel.clone()));

        FormHandle {
            tx,
            views: view_rx,
            cancel,
            task,
        }
    }
}

/// Handle for sending events to a running session.
pub struct FormHandle {
    tx: mpsc::Sender<Request>,
    views: watch::Receiver<FormView>,
    cancel: CancellationToken,
    task: JoinHandle<FormValidator>,
}

impl FormHandle {
    /// Send an event and wait until the session has applied it.
    pub async fn dispatch(&self, event: FormEvent) -> Result<Option<SubmitOutcome>, SessionError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Request { event, reply })
            .await
            .map_err(|_| SessionError::Closed)?;
        let outcome = response.await.map_err(|_| SessionError::Closed)?;
        Ok(outcome?)
    }

    /// The most recently published view.
    pub fn view(&self) -> FormView {
        self.views.borrow().clone()
    }

    /// A receiver notified whenever a new view is published.
    pub fn subscribe(&self) -> watch::Receiver<FormView> {
        self.views.clone()
    }

    /// Stop the session and return the validator it owned.
    pub async fn shutdown(self) -> Result<FormValidator, SessionError> {
        self.cancel.cancel();
        self.task.await.map_err(|_| SessionError::Closed)
    }
}

/// Sleep until the deadline, or forever if there is none.
async fn sleep_until_optional(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(d) => sleep_until(Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

async fn run(
    mut validator: FormValidator,
    mut rx: mpsc::Receiver<Request>,
    views: watch::Sender<FormView>,
    cancel: CancellationToken,
) -> FormValidator {
    debug!("Form session started");

    loop {
        let deadline = validator.next_deadline();

        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Form session cancelled");
                break;
            }

            request = rx.recv() => {
                let Some(Request { event, reply }) = request else {
                    debug!("All form handles dropped");
                    break;
                };
                let result = validator.handle(event, Instant::now().into_std());
                views.send_replace(validator.view());
                // The caller may have stopped waiting.
                let _ = reply.send(result);
            }

            _ = sleep_until_optional(deadline) => {
                let fired = validator.fire_due(Instant::now().into_std());
                trace!("Fired {} timer(s)", fired);
                views.send_replace(validator.view());
            }
        }
    }

    validator
}
