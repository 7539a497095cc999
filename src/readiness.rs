//! Bridge Readiness Gate
//!
//! The Tauri global API is injected after the page starts loading, so the
//! app polls for it before wiring anything up.

use std::future::Future;
use std::time::Duration;

use crate::config::BridgeConfig;
use crate::error::ViewError;

/// Poll `locate` every `poll_interval` until it yields a bridge, giving up
/// once `timeout` has been waited. Polling stops for good either way.
pub async fn wait_for_bridge<B, L, S, F>(mut locate: L, mut sleep: S, config: &BridgeConfig) -> Result<B, ViewError>
where
    L: FnMut() -> Option<B>,
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let timeout = config.timeout();
    let interval = config.poll_interval();
    let mut waited = Duration::ZERO;
    loop {
        if let Some(bridge) = locate() {
            log::info!("[app] bridge ready after {}ms", waited.as_millis());
            return Ok(bridge);
        }
        if waited >= timeout {
            log::error!("[app] bridge not available after {}ms", waited.as_millis());
            return Err(ViewError::BridgeUnavailable(
                "Tauri core not available. Check tauri.conf.json (withGlobalTauri) and CSP.".to_string(),
            ));
        }
        sleep(interval).await;
        waited += interval;
    }
}

/// Sleep on the browser event loop
pub fn browser_sleep(duration: Duration) -> gloo_timers::future::TimeoutFuture {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis)
}
