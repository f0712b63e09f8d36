mod api;
mod components;
mod config;
mod format;
mod models;
mod orchestrator;
mod session;
mod statement;
mod tabs;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Orquestador Contabilidad dashboard starting");

    yew::Renderer::<App>::new().render();
}
