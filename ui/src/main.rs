#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use quire_business::{BusinessConfig, Location};
use quire_ui::state::{START_PATH, State};

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

/// Falls back to the defaults when the environment is invalid.
fn load_config() -> BusinessConfig {
    BusinessConfig::from_env().unwrap_or_else(|err| {
        log::error!("Invalid configuration, using defaults: {err:#}");
        BusinessConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = load_config();
    log::info!(
        "Starting Quire against {} for team {}",
        config.api_url(),
        config.team_id
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Quire",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(config, Location::parse(START_PATH));
            Ok(Box::new(quire_ui::QuireApp::new(state)))
        }),
    )
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas = match document
            .get_element_by_id("egui_canvas")
            .map(|element| element.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("egui_canvas is missing or not a canvas");
                return;
            }
        };

        let location = initial_location(&window);
        let config = load_config();

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| {
                    let state = State::new(config, location);
                    Ok(Box::new(quire_ui::QuireApp::new(state)))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// The page the browser was opened on, or the start page.
#[cfg(target_arch = "wasm32")]
fn initial_location(window: &web_sys::Window) -> Location {
    let location = window.location();
    match (location.pathname(), location.search()) {
        (Ok(path), Ok(search)) if path != "/" => Location::parse(&format!("{path}{search}")),
        _ => Location::parse(START_PATH),
    }
}
