use dioxus::prelude::*;

use crate::core::format::StatusStamp;
use crate::core::state::DashboardState;
use crate::i18n;
use crate::t;
use crate::view::{DashboardView, TextSlot};

#[cfg(debug_assertions)]
fn log_header_render(lang: &str, loading: bool) {
    tracing::trace!(lang, loading, "header render");
}

#[component]
pub fn Header(
    state: Signal<DashboardState>,
    view: Signal<DashboardView>,
    stamp: Signal<StatusStamp>,
    on_refresh: EventHandler<()>,
) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current_lang = lang_code
        .as_ref()
        .map(|code| code())
        .unwrap_or_else(|| i18n::FALLBACK_LANGUAGE.to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let snapshot = state();
    #[cfg(debug_assertions)]
    {
        log_header_render(&current_lang, snapshot.loading);
    }

    let api_message = view.read().text(TextSlot::ApiMessage).map(str::to_string);
    let status = status_line(&stamp());
    let active = t!("status-active");

    let on_lang_change = move |evt: dioxus::events::FormEvent| {
        let value = evt.value();
        match i18n::set_language(&value) {
            Ok(()) => {
                if let Some(mut code) = lang_code {
                    code.set(value);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %value, "language switch failed"),
        }
    };

    rsx! {
        header { class: "header",
            div { class: "header__inner",
                div { class: "header__brand",
                    h1 { class: "header__title", {t!("dashboard-title")} }
                    p { class: "header__subtitle",
                        "{status} • "
                        span { class: "status-active", "{active}" }
                    }
                    if let Some(message) = api_message {
                        p { class: "api-message", "{message}" }
                    }
                    if let Some(batch) = snapshot.batch.as_ref() {
                        p { class: "header__batch",
                            {t!("batch-summary", created = batch.predictions_created, failed = batch.predictions_failed)}
                        }
                    }
                }

                div { class: "header__actions",
                    if show_switcher {
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang}",
                            oninput: on_lang_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx! {
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        "data-action": "refresh",
                        disabled: snapshot.loading,
                        onclick: move |_| on_refresh.call(()),
                        {t!("refresh-button")}
                    }
                }
            }

            if snapshot.loading {
                div { class: "loading-state", role: "status",
                    span { class: "loading-state__spinner", aria_hidden: "true" }
                    {t!("loading-message")}
                }
            }

            if let Some(err) = snapshot.error.as_ref() {
                div { class: "error-state", role: "alert",
                    p { class: "error-message", {i18n::error_banner(err)} }
                }
            }
        }
    }
}

fn status_line(stamp: &StatusStamp) -> String {
    let date = t!(
        "status-date",
        day = stamp.day_label(),
        month = i18n::month_name(stamp.month),
        year = stamp.year.to_string()
    );
    t!("status-updated", date = date, time = stamp.time_label())
}
