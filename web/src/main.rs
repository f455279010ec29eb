use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Home;
use ui::{i18n, DashboardConfig};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    use_context_provider(DashboardConfig::from_env);
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Painel de Evasão" }
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed by language so a switch remounts the dashboard with new texts.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}
