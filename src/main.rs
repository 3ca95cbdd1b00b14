use std::time::Duration;

mod app;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


#[cfg(feature = "desktop")]
use crate::app::App;
#[cfg(feature = "desktop")]
use crate::platform::desktop::paths::default_webview_data_dir;

const API_URL: &str = "http://api.valantis.store:40000/";
const API_PASSWORD: &str = "Valantis";
const PAGE_SIZE: usize = 50;
const ID_FETCH_LIMIT: usize = 500;
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Goods List"))
                .with_data_directory(webview_data_dir),
        )
        .launch(App);
}
