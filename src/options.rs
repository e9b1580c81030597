use std::time::Duration;

/// Delay strategy between attempts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Backoff {
    /// `base_ms × attempt` (attempt counted from 1).
    Linear { base_ms: u64 },
    /// `base_ms × 2^(attempt - 1)`.
    Exponential { base_ms: u64 },
}

impl Backoff {
    /// Delay to wait after the given failed attempt (1-based).
    pub fn delay(&self, attempt: usize) -> Duration {
        let attempt = attempt.max(1);
        let delay_ms = match *self {
            Self::Linear { base_ms } => base_ms.saturating_mul(attempt as u64),
            Self::Exponential { base_ms } => {
                let exp = (attempt - 1).min(16) as u32;
                base_ms.saturating_mul(1u64 << exp)
            }
        };
        Duration::from_millis(delay_ms)
    }
}

/// Configures HTTP timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total number of attempts, including the first one.
    pub max_attempts: usize,
    /// Wait between a transient failure and the next attempt.
    pub backoff: Backoff,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 12_000,
            max_attempts: 2,
            backoff: Backoff::Linear { base_ms: 500 },
        }
    }
}
