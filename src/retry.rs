//! Bounded retry loop, independent of the HTTP client and of any UI.

use std::future::Future;
use std::time::Duration;

// tokio::time::sleep is only available on non-WASM targets.
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

/// Runs `op` until it succeeds, `should_retry` rejects the error, or
/// `max_attempts` attempts have been made.
///
/// `op` receives the 1-based attempt number. After a retryable failure of
/// attempt `n`, the loop waits `backoff(n)` before attempt `n + 1`. Attempts
/// never overlap. A `max_attempts` of zero is treated as one.
pub async fn retry<T, E, Op, Fut, B, P>(
    max_attempts: usize,
    backoff: B,
    should_retry: P,
    mut op: Op,
) -> Result<T, E>
where
    Op: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    B: Fn(usize) -> Duration,
    P: Fn(&E) -> bool,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1usize;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts || !should_retry(&err) {
                    return Err(err);
                }

                let delay = backoff(attempt);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt,
                    max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    "retrying after transient failure"
                );

                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Browser sleep backed by `setTimeout`.
///
/// Resolves immediately if the global scope has no `setTimeout`.
#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    use wasm_bindgen::{JsCast, JsValue};

    let millis = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("setTimeout"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .map(|set_timeout| {
                set_timeout
                    .call2(&JsValue::NULL, &resolve, &JsValue::from(millis))
                    .is_ok()
            })
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
