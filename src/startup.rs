//! Startup connectivity wait
//!
//! The light does not start rendering until the network link is up. Every
//! failed check waits a fixed delay before the next one. After a number of
//! failed checks the platform is asked to restart the whole process, which
//! begins the wait from scratch.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Delay between two connectivity checks
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(5000);

/// Failed checks tolerated before a restart is requested
pub const DEFAULT_ATTEMPTS_BEFORE_RESTART: u32 = 12;

/// Retry timing of the connectivity wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupPolicy {
    pub retry_delay: Duration,
    /// Zero retries forever without restarting
    pub attempts_before_restart: u32,
}

impl Default for StartupPolicy {
    fn default() -> Self {
        Self {
            retry_delay: DEFAULT_RETRY_DELAY,
            attempts_before_restart: DEFAULT_ATTEMPTS_BEFORE_RESTART,
        }
    }
}

/// What the caller has to do after a connectivity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupStep {
    /// Link is up, start the control loop
    Ready,
    /// Sleep for the given duration and check again
    RetryAfter(Duration),
    /// Give up and restart the process
    Restart,
}

/// Connectivity wait state machine
#[derive(Debug, Clone)]
pub struct ConnectivityWait {
    policy: StartupPolicy,
    attempts: u32,
}

impl ConnectivityWait {
    pub const fn new(policy: StartupPolicy) -> Self {
        Self {
            policy,
            attempts: 0,
        }
    }

    /// Failed checks so far
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Feed the result of one connectivity check
    pub fn check(&mut self, connected: bool) -> StartupStep {
        if connected {
            #[cfg(feature = "esp32-log")]
            println!("startup: link up after {} retries", self.attempts);
            self.attempts = 0;
            return StartupStep::Ready;
        }

        self.attempts = self.attempts.saturating_add(1);
        let limit = self.policy.attempts_before_restart;
        if limit != 0 && self.attempts >= limit {
            #[cfg(feature = "esp32-log")]
            println!("startup: no link after {} attempts, restarting", self.attempts);
            self.attempts = 0;
            return StartupStep::Restart;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "startup: no link, retry {} in {}ms",
            self.attempts,
            self.policy.retry_delay.as_millis()
        );
        StartupStep::RetryAfter(self.policy.retry_delay)
    }
}

impl Default for ConnectivityWait {
    fn default() -> Self {
        Self::new(StartupPolicy::default())
    }
}

/// Network link as seen by the startup wait
pub trait Connectivity {
    fn is_connected(&mut self) -> bool;

    /// Block for `duration`
    fn delay(&mut self, duration: Duration);
}

/// Block until the link is up or a restart is due
///
/// Returns either [`StartupStep::Ready`] or [`StartupStep::Restart`].
pub fn wait_for_connectivity<C: Connectivity>(
    wait: &mut ConnectivityWait,
    link: &mut C,
) -> StartupStep {
    loop {
        match wait.check(link.is_connected()) {
            StartupStep::RetryAfter(delay) => link.delay(delay),
            step => return step,
        }
    }
}
