use dioxus::prelude::*;

fn main() {
    // panics in wasm otherwise only show up as "unreachable".
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(PortfolioApp);
}

#[component]
fn PortfolioApp() -> Element {
    ui::App()
}
