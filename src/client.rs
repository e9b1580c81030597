use std::time::Duration;

use reqwest::header;

use crate::{retry::retry, ClientOptions, FetchError, Pool, RawCountry, Result};

/// Public REST Countries host.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Fields requested from the API; everything else is dropped upstream.
pub const FIELDS: &str = "name,capital,languages";

/// Formats a base URL into the "all countries" endpoint.
///
/// Example: `"https://restcountries.com"` →
/// `"https://restcountries.com/v3.1/all?fields=name,capital,languages"`
pub fn countries_url(base_url: &str) -> String {
    format!(
        "{}/v3.1/all?fields={FIELDS}",
        base_url.trim().trim_end_matches('/')
    )
}

#[derive(Clone, Debug)]
/// HTTP client for the REST Countries "all" endpoint.
pub struct CountriesClient {
    http: reqwest::Client,
    url: String,
    options: ClientOptions,
}

impl Default for CountriesClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CountriesClient {
    /// Creates a client for the public endpoint with default options.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client for a mirror or mock server.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use country_sampler::CountriesClient;
    ///
    /// let client = CountriesClient::with_base_url("http://127.0.0.1:8080");
    /// assert!(client.url().starts_with("http://127.0.0.1:8080/v3.1/all"));
    /// ```
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: countries_url(base_url.as_ref()),
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    /// Full endpoint URL this client requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Timeout and retry settings in effect.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Fetches the full country list.
    ///
    /// Each attempt is bounded by `timeout_ms`. Transient failures are
    /// retried after the configured backoff until `max_attempts` is reached;
    /// everything else fails on the spot.
    pub async fn fetch_countries(&self) -> Result<Pool> {
        let backoff = self.options.backoff;

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.url, "fetching countries");

        let result = retry(
            self.options.max_attempts,
            |attempt| backoff.delay(attempt),
            FetchError::is_transient,
            |_attempt| self.fetch_once(),
        )
        .await;

        #[cfg(feature = "tracing")]
        match &result {
            Ok(pool) => tracing::debug!(countries = pool.len(), "countries loaded"),
            Err(err) => tracing::debug!(error = %err, "countries fetch failed"),
        }

        result
    }

    async fn fetch_once(&self) -> Result<Pool> {
        // On WASM, reqwest uses AbortController for timeout; the
        // `.timeout()` method is available on both targets.
        let response = self
            .http
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .timeout(Duration::from_millis(self.options.timeout_ms))
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::from_transport)?;

        if !status.is_success() {
            return Err(FetchError::from_status(status, body));
        }

        decode_pool(&body)
    }
}

/// Validates that `body` is a JSON array and decodes its records.
pub(crate) fn decode_pool(body: &str) -> Result<Pool> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|err| {
        FetchError::MalformedResponse(format!("invalid countries JSON: {err}"))
    })?;

    if !value.is_array() {
        return Err(FetchError::MalformedResponse(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    }

    let countries = serde_json::from_value::<Vec<RawCountry>>(value).map_err(|err| {
        FetchError::MalformedResponse(format!("invalid country record: {err}"))
    })?;
    Ok(Pool::new(countries))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
