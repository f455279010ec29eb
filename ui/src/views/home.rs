use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::i18n;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    tracing::debug!(lang, "home render");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the language code so a switch re-renders the page.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang_current);
    }

    rsx! {
        main { class: "page page-dashboard", lang: "{lang_current}",
            Dashboard {}
        }
    }
}
