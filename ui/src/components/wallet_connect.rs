//! Watch-only wallet connection: the identity source for the dashboard.

use api::address::WalletAddress;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::identity::Identity;

/// Connect form while disconnected, address plus disconnect button otherwise.
///
/// Writes the `Signal<Identity>` context. Only well-formed addresses are
/// accepted; the network label comes from the configured cluster.
#[component]
pub fn WalletConnect() -> Element {
    let network_label = use_context::<AppState>().prefs.cluster().label();
    let mut identity = use_context::<Signal<Identity>>();
    let mut address_input = use_signal(String::new);
    let mut input_error = use_signal(|| None::<String>);

    let connected = identity.read().address().map(str::to_string);
    let aria_invalid = if input_error.read().is_some() { "true" } else { "false" };

    rsx! {
        match connected {
            Some(address) => {
                let shown = address
                    .parse::<WalletAddress>()
                    .map(|a| a.abbreviated())
                    .unwrap_or(address.clone());
                rsx! {
                    div {
                        style: "display: flex; align-items: center; gap: 0.5rem;",
                        code {
                            title: "{address}",
                            "{shown}"
                        }
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| {
                                dioxus_logger::tracing::info!("wallet disconnected");
                                identity.set(Identity::disconnected());
                            },
                            "Disconnect"
                        }
                    }
                }
            }
            None => {
                rsx! {
                    form {
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            let input = address_input.read().trim().to_string();
                            match input.parse::<WalletAddress>() {
                                Ok(address) => {
                                    dioxus_logger::tracing::info!("wallet connected: {}", address);
                                    input_error.set(None);
                                    address_input.set(String::new());
                                    identity.set(Identity::connected(address.to_string(), network_label));
                                }
                                Err(e) => {
                                    dioxus_logger::tracing::warn!("rejected wallet address '{}': {}", input, e);
                                    input_error.set(Some(e.to_string()));
                                }
                            }
                        },
                        div {
                            role: "group",
                            input {
                                r#type: "text",
                                placeholder: "Wallet address",
                                value: "{address_input}",
                                "aria-invalid": aria_invalid,
                                oninput: move |event| address_input.set(event.value()),
                            }
                            button {
                                r#type: "submit",
                                "Connect"
                            }
                        }
                        if let Some(err) = input_error() {
                            small { "{err}" }
                        }
                    }
                }
            }
        }
    }
}
