//! The announcement loop.

use crate::ports::BroadcastSocket;
use std::time::Duration;
use tokio::sync::watch;

/// Cadence configuration for the announcer.
#[derive(Debug, Clone, Copy)]
pub struct AnnounceConfig {
    /// Delay between the readiness signal and the first send.
    pub startup_delay: Duration,
    /// Interval between sends.
    pub send_interval: Duration,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_secs(1),
            send_interval: Duration::from_secs(5),
        }
    }
}

impl AnnounceConfig {
    /// Override the startup delay.
    #[must_use]
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Override the send interval.
    #[must_use]
    pub fn with_send_interval(mut self, interval: Duration) -> Self {
        self.send_interval = interval;
        self
    }
}

/// The announcement task.
///
/// Built once at startup with the settled identity frame, then driven by
/// [`run`](Self::run) for the life of the process.
pub struct Announcer<S: BroadcastSocket> {
    socket: S,
    frame: String,
    ready: watch::Receiver<bool>,
    config: AnnounceConfig,
}

impl<S: BroadcastSocket> Announcer<S> {
    /// Create an announcer that will broadcast `frame` once `ready`
    /// signals `true`.
    pub fn new(socket: S, frame: String, ready: watch::Receiver<bool>, config: AnnounceConfig) -> Self {
        Self {
            socket,
            frame,
            ready,
            config,
        }
    }

    /// The frame this announcer broadcasts.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Run the announcement loop. Never returns.
    ///
    /// Waits for the readiness signal, sleeps the startup delay, then
    /// sends one frame per interval forever. Send failures are logged and
    /// the cadence continues; a dead network is expected to come back.
    pub async fn run(mut self) {
        while !*self.ready.borrow() {
            if self.ready.changed().await.is_err() {
                // The readiness sender was dropped without signaling:
                // startup was abandoned, so the announcer parks forever
                // rather than broadcasting an unready device.
                #[cfg(feature = "tracing-log")]
                tracing::warn!("[announce] readiness channel closed before startup completed");
                std::future::pending::<()>().await;
            }
        }

        tokio::time::sleep(self.config.startup_delay).await;

        #[cfg(feature = "tracing-log")]
        tracing::info!(
            "[announce] 📡 broadcasting '{}' every {:?}",
            self.frame,
            self.config.send_interval
        );

        loop {
            match self.socket.send_frame(self.frame.as_bytes()) {
                Ok(()) => {
                    #[cfg(feature = "tracing-log")]
                    tracing::trace!("[announce] frame sent");
                }
                Err(_e) => {
                    #[cfg(feature = "tracing-log")]
                    tracing::warn!("[announce] send failed: {}; retrying next interval", _e);
                }
            }
            tokio::time::sleep(self.config.send_interval).await;
        }
    }
}
