// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use super::correlation::{Command, Correlator, Dispatch};
use super::options::{Callbacks, ExportOptions};
use crate::config::consts::MAX_TIMEOUT;
use crate::config::{Config, RuntimeBuilder};
use crate::encoders::Encoders;
use crate::errors::ExportError;
use crate::host::{ExportHost, HostChannel, HostRequest, RequestId};
use crate::observability::messages::{client::*, host::HostLaunchFailed, StructuredLog};
use crate::table::{Blob, ExportFormat};
use crate::traits::HostLauncher;

/// Where an export is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// On the background host, correlated by request id
    Background,
    /// Synchronously on the calling thread
    Local,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Background => "background",
            ExecutionMode::Local => "local",
        }
    }
}

/// Sender into a running correlation task
struct Link {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

/// Dispatch and correlation client.
///
/// On construction the client tries to launch a background host. If that
/// works, every export is sent there with a fresh [`RequestId`] and resolved
/// by the matching response, a 5-minute (configurable) timeout, or a
/// cancellation, whichever comes first. Responses may arrive in any order.
///
/// If the host cannot be launched, or dies later, the client switches to
/// local mode for good: CSV and Excel are encoded on the calling thread and
/// PDF is rejected.
///
/// The client must be created inside a tokio runtime to use a host;
/// outside one it starts in local mode.
///
/// # Examples
///
/// ```
/// use the_tabulator::client::{ExecutionMode, ExportClient, ExportOptions};
/// use the_tabulator::encoders::Encoders;
/// use the_tabulator::host::ThreadHostLauncher;
/// use the_tabulator::table::{ColumnDescriptor, ExportFormat, Row};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let client = ExportClient::new(
///     Encoders::new(),
///     &ThreadHostLauncher::default(),
///     Duration::from_secs(300),
/// );
/// assert_eq!(client.mode(), ExecutionMode::Background);
///
/// let options = ExportOptions::new(
///     ExportFormat::Csv,
///     vec![Row::new().with("Name", "A,B").with("Amount", 5)],
///     vec![
///         ColumnDescriptor::new("Name", "Name"),
///         ColumnDescriptor::new("Amount", "Amount"),
///     ],
/// );
/// let blob = client.run_export(options).await.unwrap();
/// assert_eq!(blob.as_text(), Some("Name,Amount\n\"A,B\",5"));
/// # }
/// ```
pub struct ExportClient {
    host: ExportHost,
    link: Option<Link>,
    background: Arc<AtomicBool>,
    timeout: Duration,
}

impl ExportClient {
    /// Create a client; `timeout` is capped at [`MAX_TIMEOUT`].
    pub fn new(encoders: Encoders, launcher: &dyn HostLauncher, timeout: Duration) -> Self {
        let timeout = timeout.min(MAX_TIMEOUT);
        let host = ExportHost::new(encoders);
        let background = Arc::new(AtomicBool::new(false));

        let link = match Self::start_background(&host, launcher, timeout, &background) {
            Ok(link) => Some(link),
            Err(reason) => {
                HostLaunchFailed {
                    launcher: launcher.name(),
                    reason: &reason,
                }
                .log();
                None
            }
        };

        Self {
            host,
            link,
            background,
            timeout,
        }
    }

    /// Build a client from a validated configuration
    pub fn from_config(cfg: &Config) -> Self {
        let (encoders, launcher, timeout) = RuntimeBuilder::from_config(cfg);
        Self::new(encoders, launcher.as_ref(), timeout)
    }

    fn start_background(
        host: &ExportHost,
        launcher: &dyn HostLauncher,
        timeout: Duration,
        background: &Arc<AtomicBool>,
    ) -> Result<Link, String> {
        let runtime = Handle::try_current().map_err(|e| e.to_string())?;
        let HostChannel {
            requests,
            responses,
        } = launcher.launch(host.clone()).map_err(|e| e.to_string())?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();

        background.store(true, Ordering::SeqCst);
        let correlator = Correlator::new(requests, timeout, Arc::clone(background));
        let task = runtime.spawn(correlator.run(command_rx, responses));

        Ok(Link {
            commands: command_tx,
            task,
        })
    }

    pub fn mode(&self) -> ExecutionMode {
        if self.background.load(Ordering::SeqCst) {
            ExecutionMode::Background
        } else {
            ExecutionMode::Local
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Export `options.rows` and wait for the result.
    ///
    /// Exactly one of `on_success` / `on_error` is invoked before this
    /// returns.
    pub async fn run_export(&self, options: ExportOptions) -> Result<Blob, ExportError> {
        self.start_export(options).wait().await
    }

    /// Dispatch an export and return a handle to await it.
    ///
    /// Progress is reported before the request leaves the caller. The
    /// handle's id can be passed to [`cancel`](Self::cancel).
    pub fn start_export(&self, options: ExportOptions) -> ExportHandle {
        let ExportOptions {
            format,
            rows,
            columns,
            callbacks,
        } = options;

        callbacks.progress(&format!(
            "Processing {} rows for {} export",
            rows.len(),
            format.label()
        ));

        let request = HostRequest {
            id: RequestId::generate(),
            format,
            rows,
            columns,
        };
        let id = request.id.clone();
        let row_count = request.rows.len();

        let state = match self.dispatch(request) {
            Ok(completion) => HandleState::Dispatched(completion),
            Err(request) => HandleState::Local {
                host: self.host.clone(),
                request,
            },
        };

        let handle = ExportHandle {
            id,
            format,
            callbacks,
            state,
            started: Instant::now(),
        };

        ExportDispatched {
            request_id: handle.id.as_str(),
            format: format.tag(),
            row_count,
            mode: handle.mode().as_str(),
        }
        .log();

        handle
    }

    /// Hand the request to the correlation task, or give it back when the
    /// host is not available.
    fn dispatch(
        &self,
        request: HostRequest,
    ) -> Result<oneshot::Receiver<Result<Blob, ExportError>>, HostRequest> {
        let link = match &self.link {
            Some(link) if self.background.load(Ordering::SeqCst) => link,
            _ => return Err(request),
        };

        let (completion, receiver) = oneshot::channel();
        let sent = link.commands.send(Command::Dispatch(Dispatch {
            request,
            completion,
        }));
        // The correlation task has exited; take the request back for the local path.
        if let Err(mpsc::error::SendError(Command::Dispatch(dispatch))) = sent {
            return Err(dispatch.request);
        }

        Ok(receiver)
    }

    /// Withdraw an in-flight background export; its handle resolves with
    /// [`ExportError::Cancelled`]. Unknown or settled ids are ignored.
    pub fn cancel(&self, id: &RequestId) {
        if let Some(link) = &self.link {
            let _ = link.commands.send(Command::Cancel(id.clone()));
        }
    }

    /// Number of background requests awaiting a response
    pub async fn in_flight(&self) -> usize {
        let Some(link) = &self.link else {
            return 0;
        };

        let (reply, count) = oneshot::channel();
        if link.commands.send(Command::InFlight(reply)).is_err() {
            return 0;
        }
        count.await.unwrap_or(0)
    }

    /// Stop accepting exports, let in-flight ones settle, then stop the host.
    pub async fn shutdown(mut self) {
        if let Some(Link { commands, task }) = self.link.take() {
            drop(commands);
            let _ = task.await;
        }
    }
}

enum HandleState {
    Dispatched(oneshot::Receiver<Result<Blob, ExportError>>),
    Local { host: ExportHost, request: HostRequest },
}

/// A started export.
pub struct ExportHandle {
    id: RequestId,
    format: ExportFormat,
    callbacks: Callbacks,
    state: HandleState,
    started: Instant,
}

impl ExportHandle {
    pub fn id(&self) -> &RequestId {
        &self.id
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn mode(&self) -> ExecutionMode {
        match self.state {
            HandleState::Dispatched(_) => ExecutionMode::Background,
            HandleState::Local { .. } => ExecutionMode::Local,
        }
    }

    /// Resolve the export and invoke the matching callback.
    pub async fn wait(self) -> Result<Blob, ExportError> {
        let ExportHandle {
            id,
            format,
            callbacks,
            state,
            started,
        } = self;

        let result = match state {
            HandleState::Dispatched(completion) => completion.await.unwrap_or_else(|_| {
                Err(ExportError::HostUnavailable(
                    "export host dropped the request".to_string(),
                ))
            }),
            HandleState::Local { host, request } => run_local(&host, &request),
        };

        match &result {
            Ok(blob) => ExportCompleted {
                request_id: id.as_str(),
                format: format.tag(),
                output_size: blob.len(),
                duration: started.elapsed(),
            }
            .log(),
            Err(error) => ExportFailed {
                request_id: id.as_str(),
                format: format.tag(),
                error,
            }
            .log(),
        }

        callbacks.finish(&result, format);
        result
    }
}

fn run_local(host: &ExportHost, request: &HostRequest) -> Result<Blob, ExportError> {
    match request.format {
        ExportFormat::Csv | ExportFormat::Excel => host.handle(request).into_result(),
        ExportFormat::Pdf => Err(ExportError::LocalFormatUnsupported(ExportFormat::Pdf)),
    }
}
