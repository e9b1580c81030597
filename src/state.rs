//! Session state: loading flag, error banner, pool, count and current sample.
//!
//! Mutation goes through the fetch side ([`AppState::start_loading`],
//! [`AppState::finish_loading`], [`AppState::load`]) or the input side
//! ([`AppState::input`]). Renderers only ever see `&AppState`.

use rand::Rng;

use crate::{parse_count, sample, CountriesClient, Count, DisplayCountry, FetchError, Pool, Result};

/// Single owner of the UI state for one session.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    loading: bool,
    fetch_started: bool,
    error: Option<String>,
    pool: Pool,
    count: Option<Count>,
    sample: Vec<DisplayCountry>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-facing message for the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn count(&self) -> Option<Count> {
        self.count
    }

    /// Current sample, in draw order.
    pub fn sample(&self) -> &[DisplayCountry] {
        &self.sample
    }

    /// Text the count input should display: the accepted count, or empty.
    pub fn input_text(&self) -> String {
        self.count.map(|count| count.to_string()).unwrap_or_default()
    }

    /// Marks the one fetch of this session as in flight.
    ///
    /// Returns `false`, without changing anything, if a fetch was already
    /// started.
    pub fn start_loading(&mut self) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;
        self.set_loading(true);
        true
    }

    /// Applies the outcome of the fetch started by [`AppState::start_loading`].
    pub fn finish_loading(&mut self, outcome: Result<Pool>) {
        self.fetch_started = true;
        match outcome {
            Ok(pool) => {
                self.set_error(None);
                self.set_pool(pool);
            }
            Err(err) => {
                self.set_error(Some(error_message(&err)));
                self.set_pool(Pool::default());
            }
        }
        self.set_loading(false);
    }

    /// Fails the in-flight fetch for a reason outside the client, such as a
    /// worker thread that went away.
    pub fn abort_loading(&mut self, message: impl Into<String>) {
        self.fetch_started = true;
        self.set_error(Some(message.into()));
        self.set_pool(Pool::default());
        self.set_loading(false);
    }

    /// Fetches the pool once with `client`. Later calls are no-ops.
    pub async fn load(&mut self, client: &CountriesClient) {
        if !self.start_loading() {
            return;
        }
        let outcome = client.fetch_countries().await;
        self.finish_loading(outcome);
    }

    /// Applies one edit of the count input.
    pub fn input(&mut self, raw: &str) {
        let count = parse_count(raw, self.count);
        if count != self.count {
            self.set_count(count);
        }
    }

    /// Same as [`AppState::input`] but draws with the given RNG.
    pub fn input_with_rng<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) {
        let count = parse_count(raw, self.count);
        if count != self.count {
            self.set_count_with(count, rng);
        }
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub(crate) fn set_pool(&mut self, pool: Pool) {
        self.pool = pool;
        self.resample();
    }

    pub(crate) fn set_count(&mut self, count: Option<Count>) {
        self.set_count_with(count, &mut rand::thread_rng());
    }

    pub(crate) fn set_count_with<R: Rng + ?Sized>(&mut self, count: Option<Count>, rng: &mut R) {
        self.count = count;
        self.resample_with(rng);
    }

    fn resample(&mut self) {
        self.resample_with(&mut rand::thread_rng());
    }

    fn resample_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sample = sample(self.pool.as_slice(), self.count, rng);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            pool = self.pool.len(),
            count = ?self.count,
            drawn = self.sample.len(),
            "sample recomputed"
        );
    }
}

fn error_message(err: &FetchError) -> String {
    match err {
        FetchError::Timeout(_) => "Loading countries timed out. Please try again later.".to_owned(),
        FetchError::TransientHttp { status, .. } | FetchError::FatalHttp { status, .. } => {
            format!("Failed to load countries (HTTP {status}).")
        }
        FetchError::MalformedResponse(_) => {
            "Failed to load countries: unexpected response format.".to_owned()
        }
        FetchError::Transport(_) => {
            "Failed to load countries: network error. Check your connection.".to_owned()
        }
    }
}
