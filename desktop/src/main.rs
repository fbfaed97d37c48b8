use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let builder = dioxus::LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        dioxus::desktop::Config::new()
            .with_window(dioxus::desktop::WindowBuilder::new().with_title("Solana Portfolio")),
    );

    builder.launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
