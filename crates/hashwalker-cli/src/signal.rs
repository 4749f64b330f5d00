//! Signal handling: any interrupt aborts the run
//!
//! The pipeline is raced against SIGINT/SIGTERM. There is no graceful
//! shutdown; a signal discards all work and exits without printing a report.

use std::future::Future;

use tracing::{error, warn};

/// Exit status used when a signal aborts the run
pub const EXIT_INTERRUPTED: i32 = 1;

/// Signals that abort a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl Signal {
    /// Conventional Unix signal number
    #[must_use]
    pub const fn number(self) -> i32 {
        match self {
            Self::Interrupt => 2,
            Self::Terminate => 15,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrupt => write!(f, "SIGINT"),
            Self::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Result of racing a task against a signal
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Interrupted(Signal),
}

/// Wait for whichever finishes first: `task` or `signal`
///
/// A signal that is already pending wins over a task that is also ready.
pub async fn race<T, F, S>(task: F, signal: S) -> Outcome<T>
where
    F: Future<Output = T>,
    S: Future<Output = Signal>,
{
    tokio::select! {
        biased;
        sig = signal => Outcome::Interrupted(sig),
        value = task => Outcome::Completed(value),
    }
}

/// Install SIGINT/SIGTERM listeners and return a future for the first arrival
///
/// Listeners are registered before this returns, so a signal delivered
/// afterwards is never lost. A listener that cannot be installed is logged
/// and never resolves. Must be called from within a tokio runtime.
#[cfg(unix)]
pub fn shutdown_signal() -> impl Future<Output = Signal> {
    use tokio::signal::unix::{signal, SignalKind};

    let interrupt = signal(SignalKind::interrupt());
    let terminate = signal(SignalKind::terminate());

    async move {
        tokio::select! {
            () = next_or_pending(interrupt, Signal::Interrupt) => Signal::Interrupt,
            () = next_or_pending(terminate, Signal::Terminate) => Signal::Terminate,
        }
    }
}

#[cfg(unix)]
async fn next_or_pending(
    stream: std::io::Result<tokio::signal::unix::Signal>,
    kind: Signal,
) {
    match stream {
        Ok(mut stream) => {
            if stream.recv().await.is_none() {
                std::future::pending::<()>().await;
            }
        }
        Err(e) => {
            warn!("Failed to listen for {}: {}", kind, e);
            std::future::pending::<()>().await;
        }
    }
}

/// Return a future that resolves on Ctrl-C
///
/// A listener that cannot be installed is logged and never resolves.
#[cfg(not(unix))]
pub fn shutdown_signal() -> impl Future<Output = Signal> {
    async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for {}: {}", Signal::Interrupt, e);
            std::future::pending::<()>().await;
        }
        Signal::Interrupt
    }
}

/// Abort the process because `signal` arrived
///
/// Logs one line and exits with [`EXIT_INTERRUPTED`]. Nothing collected so
/// far is printed.
pub fn abort_on_interrupt(signal: Signal) -> ! {
    error!("Signal {} ({}) received, exiting", signal, signal.number());
    std::process::exit(EXIT_INTERRUPTED)
}
