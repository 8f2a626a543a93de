//! Intersection observers that outlive the call that created them.

use vitrine_core::fade_in::ObserverOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An observer plus the closure it calls. Dropping disconnects it.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Callback,
}

impl Observer {
    /// Calls `on_enter` for each intersecting target; when it returns
    /// `true` the target is unobserved.
    pub fn new(
        options: &ObserverOptions,
        mut on_enter: impl FnMut(&Element) -> bool + 'static,
    ) -> anyhow::Result<Self> {
        let callback: Callback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry =
                        entry.unchecked_into::<IntersectionObserverEntry>();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if on_enter(&target) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|err| anyhow::anyhow!("IntersectionObserver: {err:?}"))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl std::fmt::Debug for Observer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
