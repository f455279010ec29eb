//! Platform detection and task spawning.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Desktop => "desktop",
        }
    }
}

/// Spawn a task on the Dioxus runtime, owned by the calling component so it
/// is dropped when the component unmounts.
pub fn spawn_future(future: impl Future<Output = ()> + 'static) {
    dioxus::prelude::spawn(future);
}
