/// Leave the app for an absolute URL (payment provider checkout).
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to open {}: {:?}", url, e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("External navigation requested: {}", url);
    }
}
