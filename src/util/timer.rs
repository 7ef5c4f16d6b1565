//! Cooperative delay used by the mocked services.
//!
//! In the browser this yields to the event loop for `duration`. Native builds
//! resolve immediately so tests never wait on wall-clock time.

use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration;
    }
}
