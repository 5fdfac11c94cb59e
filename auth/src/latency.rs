use std::time::Duration;

/// Sleep standing in for a network round trip. Not cancellable; callers run
/// each operation to completion.
#[cfg(target_arch = "wasm32")]
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        gloo_timers::future::TimeoutFuture::new(delay.as_millis() as u32).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
