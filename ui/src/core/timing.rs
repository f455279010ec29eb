//! Timer helpers shared by the loader and the refresh scheduler.

use std::future::Future;
use std::pin::pin;
use std::sync::Once;

use futures::future::{select, Either};
use time::OffsetDateTime;
use tracing::debug;

/// Suspend the current task for `ms` milliseconds without blocking the UI
/// thread.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// The deadline passed before the wrapped future finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub after_ms: u64,
}

/// Race `future` against a `ms` deadline. When the deadline wins the future
/// is dropped, which aborts any request it had in flight.
pub async fn with_deadline<F: Future>(ms: u64, future: F) -> Result<F::Output, Elapsed> {
    let future = pin!(future);
    let deadline = pin!(sleep_ms(ms));
    match select(future, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed { after_ms: ms }),
    }
}

static UTC_FALLBACK: Once = Once::new();

/// Wall-clock time in the local offset when the platform exposes it, UTC
/// otherwise. `time` refuses to read the offset once a Unix process runs more
/// than one thread, which is the case on the desktop runtime.
pub fn now_local() -> OffsetDateTime {
    match OffsetDateTime::now_local() {
        Ok(now) => now,
        Err(err) => {
            UTC_FALLBACK.call_once(|| {
                debug!(%err, "local UTC offset unavailable; times are shown in UTC");
            });
            OffsetDateTime::now_utc()
        }
    }
}
