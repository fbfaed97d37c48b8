// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod identity;
pub mod portfolio_controller;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use components::pico::Container;
use components::wallet_connect::WalletConnect;
use identity::Identity;
use screens::portfolio::PortfolioScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container {
        min-height: 100vh;
        padding: 10px;
        background-color: var(--pico-background-color);
    }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-main-container header form {
        margin-bottom: 0;
    }

    .app-main-container .content {
        padding: 0 1rem;
    }

    .app-main-container .content article {
        min-width: 16rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Provides the shared state and lays out the single dashboard screen.
#[component]
fn AppBody() -> Element {
    let app_state = use_context_provider(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    // The wallet identity. Written by `WalletConnect`, read by the dashboard.
    let identity = use_signal(Identity::default);
    use_context_provider(|| identity);

    let network_label = app_state.prefs.cluster().label();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Solana Portfolio" }
                            }
                            li {
                                small { "{network_label}" }
                            }
                        }
                        ul {
                            li {
                                WalletConnect {}
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    PortfolioScreen {}
                }
            }
        }
    }
}
