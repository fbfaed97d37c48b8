//=============================================================================
// File: src/screens/portfolio.rs
//=============================================================================
use api::portfolio::PortfolioFetcher;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::identity::Identity;
use crate::portfolio_controller::BalancePanel;
use crate::portfolio_controller::FetchTicket;
use crate::portfolio_controller::PortfolioController;
use crate::portfolio_controller::PortfolioView;

/// Runs the fetch for `ticket` in the background and hands the result back.
fn spawn_fetch(mut controller: Signal<PortfolioController>, app_state: AppState, ticket: FetchTicket) {
    spawn(async move {
        let result = app_state
            .portfolio_service
            .fetch_portfolio(ticket.address())
            .await;
        controller.write().complete(ticket, result);
    });
}

#[component]
pub fn PortfolioScreen() -> Element {
    let app_state = use_context::<AppState>();
    let identity = use_context::<Signal<Identity>>();
    let mut controller = use_signal(PortfolioController::new);

    // Runs after the first render (that is the mount) and again whenever
    // the identity changes.
    let effect_state = app_state.clone();
    use_effect(move || {
        let current = identity.read().clone();
        let ticket = {
            let mut ctrl = controller.write();
            match ctrl.set_identity(current) {
                Some(ticket) => Some(ticket),
                None => ctrl.mount(),
            }
        };
        if let Some(ticket) = ticket {
            spawn_fetch(controller, effect_state.clone(), ticket);
        }
    });

    let view = controller.read().render();

    rsx! {
        match view {
            PortfolioView::Empty => rsx! {},
            PortfolioView::ConnectPrompt => rsx! {
                Card {
                    h3 { "Portfolio Dashboard" }
                    EmptyState {
                        title: "Please Connect Wallet".to_string(),
                        description: Some("Connect your Solana wallet to view your portfolio.".to_string()),
                        icon: rsx! { "👛" },
                    }
                }
            },
            PortfolioView::Dashboard(dashboard) => {
                let refresh_state = app_state.clone();
                rsx! {
                    div {
                        h2 { "My Portfolio" }
                        Grid {
                            // --- Native balance ---
                            Card {
                                h3 { "SOL Balance" }
                                match dashboard.balance {
                                    BalancePanel::Loading => rsx! {
                                        p { "Loading your balance..." }
                                        progress {}
                                    },
                                    BalancePanel::Loaded { native_balance, network_label } => rsx! {
                                        p {
                                            style: "font-size: 2rem; font-weight: bold; margin-bottom: 0.25rem;",
                                            "{native_balance} SOL"
                                        }
                                        small { "Current Network: {network_label}" }
                                    },
                                }
                                if let Some(error) = dashboard.error {
                                    p {
                                        role: "alert",
                                        style: "color: var(--pico-del-color); margin-top: 1rem;",
                                        "{error}"
                                    }
                                }
                            }

                            // --- Token holdings ---
                            Card {
                                h3 { "Token Holdings" }
                                if dashboard.tokens.is_empty() {
                                    p { "No tokens found in wallet" }
                                } else {
                                    table {
                                        tbody {
                                            for (i, token) in dashboard.tokens.into_iter().enumerate() {
                                                tr {
                                                    key: "{i}",
                                                    td {
                                                        strong { "{token.symbol}" }
                                                        br {}
                                                        small { code { "{token.mint_address}" } }
                                                    }
                                                    td {
                                                        style: "text-align: right; white-space: nowrap;",
                                                        code { "{token.amount} tokens" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            // --- Total value ---
                            Card {
                                h3 { "Total Portfolio Value" }
                                p {
                                    style: "font-size: 2rem; font-weight: bold;",
                                    "${dashboard.total_value_usd} USD"
                                }
                                Button {
                                    disabled: !dashboard.refresh_enabled,
                                    on_click: move |_| {
                                        let ticket = controller.write().request_refresh();
                                        if let Some(ticket) = ticket {
                                            spawn_fetch(controller, refresh_state.clone(), ticket);
                                        }
                                    },
                                    "Refresh Portfolio Data"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
