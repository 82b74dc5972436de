//! Platform glue for browser state the components observe.

use super::scroll::ScrollMetrics;

/// Calls `on_scroll` once with the current geometry, then again on every
/// `scroll` event until the returned future is dropped.
#[cfg(target_arch = "wasm32")]
pub async fn watch_scroll(mut on_scroll: impl FnMut(ScrollMetrics)) {
    use futures_util::StreamExt;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        tracing::warn!("window unavailable; scroll tracking disabled");
        return;
    };

    let (tx, mut rx) = futures_channel::mpsc::unbounded::<()>();
    let listener = Closure::<dyn FnMut()>::new(move || {
        let _ = tx.unbounded_send(());
    });
    if window
        .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!("failed to attach scroll listener");
        return;
    }
    let _guard = ScrollListener {
        window: window.clone(),
        listener,
    };

    if let Some(metrics) = read_scroll(&window) {
        on_scroll(metrics);
    }
    while rx.next().await.is_some() {
        if let Some(metrics) = read_scroll(&window) {
            on_scroll(metrics);
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    window: web_sys::Window,
    listener: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        self.window
            .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref())
            .ok();
    }
}

#[cfg(target_arch = "wasm32")]
fn read_scroll(window: &web_sys::Window) -> Option<ScrollMetrics> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Desktop webviews have no `web_sys`; a small watcher script posts the same
/// geometry back through the eval channel.
#[cfg(not(target_arch = "wasm32"))]
const SCROLL_WATCH_JS: &str = r#"
const report = () => {
    dioxus.send({
        scroll_y: window.scrollY,
        viewport_height: window.innerHeight,
        document_height: document.documentElement.scrollHeight,
    });
};
window.addEventListener("scroll", report, { passive: true });
report();
await new Promise(() => {});
"#;

#[cfg(not(target_arch = "wasm32"))]
pub async fn watch_scroll(mut on_scroll: impl FnMut(ScrollMetrics)) {
    let mut watcher = dioxus::document::eval(SCROLL_WATCH_JS);
    loop {
        match watcher.recv::<ScrollMetrics>().await {
            Ok(metrics) => on_scroll(metrics),
            Err(err) => {
                tracing::debug!(?err, "scroll watcher closed");
                break;
            }
        }
    }
}
