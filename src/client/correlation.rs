// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Correlation task: the single owner of the in-flight request table.
//!
//! Registration, completion, timeout, cancellation and teardown all happen
//! on this one task, so the table needs no lock and every entry is completed
//! exactly once. Whichever of response / deadline / cancel arrives first
//! removes the entry; anything that arrives later finds nothing and is
//! ignored.
//!
//! Dispatches, cancellations and queries share one [`Command`] channel, so
//! the task sees them in the order the client sent them. Host responses that
//! are already queued are handled before the next command.

use std::collections::HashMap;
use std::future::poll_fn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio_util::time::{delay_queue, DelayQueue};

use crate::errors::ExportError;
use crate::host::{HostRequest, HostResponse, RequestId};
use crate::observability::messages::{client::*, StructuredLog};
use crate::table::Blob;

pub(crate) type Completion = oneshot::Sender<Result<Blob, ExportError>>;

/// A request to forward to the host, with the continuation to complete.
pub(crate) struct Dispatch {
    pub request: HostRequest,
    pub completion: Completion,
}

pub(crate) enum Command {
    Dispatch(Dispatch),
    Cancel(RequestId),
    InFlight(oneshot::Sender<usize>),
}

struct Pending {
    completion: Completion,
    deadline: delay_queue::Key,
}

pub(crate) struct Correlator {
    pending: HashMap<RequestId, Pending>,
    deadlines: DelayQueue<RequestId>,
    /// `None` once the host is lost
    requests: Option<mpsc::UnboundedSender<HostRequest>>,
    timeout: Duration,
    background: Arc<AtomicBool>,
}

impl Correlator {
    pub(crate) fn new(
        requests: mpsc::UnboundedSender<HostRequest>,
        timeout: Duration,
        background: Arc<AtomicBool>,
    ) -> Self {
        Self {
            pending: HashMap::new(),
            deadlines: DelayQueue::new(),
            requests: Some(requests),
            timeout,
            background,
        }
    }

    /// Run until the host is lost, or until the client is dropped and every
    /// pending request has completed.
    pub(crate) async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut responses: mpsc::UnboundedReceiver<HostResponse>,
    ) {
        let mut client_closed = false;

        loop {
            tokio::select! {
                biased;

                response = responses.recv() => match response {
                    Some(response) => self.on_response(response),
                    None => self.teardown("export host terminated unexpectedly"),
                },
                command = commands.recv(), if !client_closed => match command {
                    Some(command) => self.on_command(command),
                    None => client_closed = true,
                },
                Some(expired) = poll_fn(|cx| self.deadlines.poll_expired(cx)), if !self.deadlines.is_empty() => {
                    self.on_timeout(expired.into_inner());
                }
            }

            if self.requests.is_none() || (client_closed && self.pending.is_empty()) {
                break;
            }
        }
    }

    fn on_dispatch(&mut self, dispatch: Dispatch) {
        let Dispatch {
            request,
            completion,
        } = dispatch;
        let id = request.id.clone();

        let deadline = self.deadlines.insert(id.clone(), self.timeout);
        self.pending.insert(
            id,
            Pending {
                completion,
                deadline,
            },
        );

        let sent = match &self.requests {
            Some(requests) => requests.send(request).is_ok(),
            None => false,
        };
        if !sent {
            self.teardown("export host stopped accepting requests");
        }
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::Dispatch(dispatch) => self.on_dispatch(dispatch),
            Command::Cancel(id) => {
                if let Some(pending) = self.pending.remove(&id) {
                    self.deadlines.remove(&pending.deadline);
                    let _ = pending.completion.send(Err(ExportError::Cancelled));
                }
            }
            Command::InFlight(reply) => {
                let _ = reply.send(self.pending.len());
            }
        }
    }

    fn on_response(&mut self, response: HostResponse) {
        match self.pending.remove(response.id()) {
            Some(pending) => {
                self.deadlines.remove(&pending.deadline);
                // The caller may have dropped its handle; nothing to report then.
                let _ = pending.completion.send(response.into_result());
            }
            None => LateResponseIgnored {
                request_id: response.id().as_str(),
            }
            .log(),
        }
    }

    fn on_timeout(&mut self, id: RequestId) {
        // The expired entry has already left the delay queue.
        if let Some(pending) = self.pending.remove(&id) {
            ExportTimedOut {
                request_id: id.as_str(),
                timeout: self.timeout,
            }
            .log();
            let _ = pending
                .completion
                .send(Err(ExportError::Timeout(self.timeout)));
        }
    }

    /// Fail everything in flight and hand all further exports to the local path.
    fn teardown(&mut self, reason: &str) {
        self.background.store(false, Ordering::SeqCst);
        self.requests = None;

        let failed_requests = self.pending.len();
        for (_, pending) in self.pending.drain() {
            let _ = pending
                .completion
                .send(Err(ExportError::HostUnavailable(reason.to_string())));
        }
        self.deadlines.clear();

        HostLost {
            reason,
            failed_requests,
        }
        .log();
    }
}
