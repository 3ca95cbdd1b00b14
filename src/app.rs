use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::warn;

use crate::domain::entities::filter::FilterField;
use crate::domain::entities::product::Product;
use crate::infra::http::client::HttpCatalogApi;
use crate::ui::state::app_state::{CatalogState, LoadPhase};
use crate::usecase::ports::api::{FetchError, Recovery};
use crate::usecase::services::catalog_service::CatalogService;
use crate::{API_PASSWORD, API_URL};

const UNAUTHORIZED_ALERT: &str = "Invalid API key. Please check your API key and try again.";

fn catalog_service() -> anyhow::Result<CatalogService> {
    let endpoint = std::env::var("GOODS_LIST_API_URL").unwrap_or_else(|_| API_URL.to_string());
    let secret =
        std::env::var("GOODS_LIST_API_PASSWORD").unwrap_or_else(|_| API_PASSWORD.to_string());
    let api = HttpCatalogApi::new(endpoint, secret)?;
    Ok(CatalogService::new(Arc::new(api)))
}

#[component]
pub fn App() -> Element {
    let service = use_hook(|| catalog_service().map(Arc::new).map_err(|err| err.to_string()));
    let service = match service {
        Ok(service) => service,
        Err(err) => {
            return rsx! {
                div {
                    style: "font-family: sans-serif; padding: 24px;",
                    p { "Failed to start the catalog client: {err}" }
                }
            };
        }
    };

    let state = CatalogState::new();
    let mut filter_inputs = state.filters;

    let service_for_init = service.clone();
    use_effect(move || {
        let service = service_for_init.clone();
        spawn(async move {
            drive_catalog_load(state, service, None).await;
        });
    });

    let service_for_name_filter = service.clone();
    let service_for_price_filter = service.clone();
    let service_for_brand_filter = service.clone();
    let service_for_prev = service.clone();
    let service_for_next = service.clone();

    let criteria = (state.filters)();
    let products = (state.products)();
    let status = (state.status)();
    let phase = (state.phase)();
    let retrying = phase == LoadPhase::Retrying;
    let (current_page, total_pages) = {
        let catalog = state.catalog.read();
        (catalog.current_page(), catalog.total_pages())
    };

    let body = match &phase {
        LoadPhase::Loading => rsx! {
            h2 { "Loading..." }
        },
        LoadPhase::Failed(message) => rsx! {
            div {
                style: "color: #b00020; padding: 24px 0;",
                "Error: {message}"
            }
        },
        LoadPhase::Ready | LoadPhase::Retrying => rsx! {
            if retrying {
                div {
                    style: "background: #fff3cd; border: 1px solid #ffe08a; padding: 8px; margin-bottom: 8px;",
                    "Reloading the catalog after a failed request..."
                }
            }
            ol {
                style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 8px;",
                for product in products.iter() {
                    li {
                        key: "{product.id}",
                        style: "border: 1px solid #ddd; border-radius: 4px; padding: 8px;",
                        div { "ID: {product.id}" }
                        div { "Name: {product.name}" }
                        div { "Price: {product.price}" }
                        div { "Brand: {product.brand}" }
                    }
                }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-top: 12px;",
                if current_page > 1 {
                    button {
                        onclick: move |_| {
                            let service = service_for_prev.clone();
                            let target = state.catalog.read().current_page().saturating_sub(1);
                            spawn(show_page(state, service, target));
                        },
                        "Prev"
                    }
                }
                span { "{current_page}/{total_pages}" }
                if current_page < total_pages {
                    button {
                        onclick: move |_| {
                            let service = service_for_next.clone();
                            let target = state.catalog.read().current_page() + 1;
                            spawn(show_page(state, service, target));
                        },
                        "Next"
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 760px; margin: 0 auto; padding: 16px;",
            h1 { "Goods List" }
            div {
                style: "display: flex; gap: 8px; flex-wrap: wrap; margin-bottom: 12px;",
                input {
                    style: "flex: 1; min-width: 140px; padding: 4px 6px;",
                    placeholder: "Product name",
                    value: "{criteria.name}",
                    oninput: move |event| filter_inputs.write().name = event.value(),
                }
                button {
                    onclick: move |_| {
                        let service = service_for_name_filter.clone();
                        spawn(run_filter(state, service, FilterField::Name));
                    },
                    "Search"
                }
                input {
                    style: "flex: 1; min-width: 100px; padding: 4px 6px;",
                    placeholder: "Price",
                    value: "{criteria.price}",
                    oninput: move |event| filter_inputs.write().price = event.value(),
                }
                button {
                    onclick: move |_| {
                        let service = service_for_price_filter.clone();
                        spawn(run_filter(state, service, FilterField::Price));
                    },
                    "Search"
                }
                input {
                    style: "flex: 1; min-width: 140px; padding: 4px 6px;",
                    placeholder: "Brand",
                    value: "{criteria.brand}",
                    oninput: move |event| filter_inputs.write().brand = event.value(),
                }
                button {
                    onclick: move |_| {
                        let service = service_for_brand_filter.clone();
                        spawn(run_filter(state, service, FilterField::Brand));
                    },
                    "Search"
                }
            }
            if !status.is_empty() {
                p {
                    style: "color: #666; margin: 4px 0;",
                    "{status}"
                }
            }
            {body}
        }
    }
}

/// The id-universe load loop. Seeded with `after` it starts in recovery;
/// a failed page hydration feeds back into the loop.
async fn drive_catalog_load(
    state: CatalogState,
    service: Arc<CatalogService>,
    after: Option<FetchError>,
) {
    let mut seq = state.begin_universe_op();
    let mut loaded = match after {
        None => service.load_universe().await,
        Some(failure) => service.recover_universe(failure).await,
    };
    loop {
        if !state.universe_op_is_current(seq) {
            return;
        }
        let ids = match loaded {
            Ok(ids) => ids,
            Err(failure) => match failure.recovery() {
                Recovery::Abort => {
                    go_terminal(state, &failure);
                    return;
                }
                Recovery::RestartDelayed(_) | Recovery::RestartNow => {
                    show_retry_banner(state, &failure);
                    seq = state.begin_universe_op();
                    loaded = service.recover_universe(failure).await;
                    continue;
                }
            },
        };
        state.install_universe(ids);
        match hydrate_current_page(state, &service).await {
            HydrateOutcome::Done | HydrateOutcome::Stop => return,
            HydrateOutcome::Restart(failure) => {
                seq = state.begin_universe_op();
                loaded = service.recover_universe(failure).await;
            }
        }
    }
}

enum HydrateOutcome {
    Done,
    Stop,
    Restart(FetchError),
}

async fn hydrate_current_page(state: CatalogState, service: &CatalogService) -> HydrateOutcome {
    let seq = state.begin_page_op();
    let window = state.current_window();
    let hydrated = service.load_page(&window).await;
    if !state.page_op_is_current(seq) {
        return HydrateOutcome::Stop;
    }
    match hydrated {
        Ok(products) => {
            publish_page(state, products);
            HydrateOutcome::Done
        }
        Err(failure) => match failure.recovery() {
            Recovery::Abort => {
                go_terminal(state, &failure);
                HydrateOutcome::Stop
            }
            Recovery::RestartDelayed(_) | Recovery::RestartNow => {
                show_retry_banner(state, &failure);
                HydrateOutcome::Restart(failure)
            }
        },
    }
}

async fn show_page(state: CatalogState, service: Arc<CatalogService>, page: usize) {
    if !state.change_page(page) {
        return;
    }
    if let HydrateOutcome::Restart(failure) = hydrate_current_page(state, &service).await {
        drive_catalog_load(state, service, Some(failure)).await;
    }
}

async fn run_filter(mut state: CatalogState, service: Arc<CatalogService>, field: FilterField) {
    let criteria = (state.filters)();
    let filter = match criteria.field_filter(field) {
        Ok(filter) => filter,
        Err(err) => {
            state.status.set(err.to_string());
            return;
        }
    };

    let seq = state.begin_universe_op();
    let filtered = service.filter_universe(&filter).await;
    if !state.universe_op_is_current(seq) {
        return;
    }
    match filtered {
        Ok(ids) => {
            state.install_universe(ids);
            if let HydrateOutcome::Restart(failure) = hydrate_current_page(state, &service).await {
                drive_catalog_load(state, service, Some(failure)).await;
            }
        }
        Err(failure) => match failure.recovery() {
            Recovery::Abort => go_terminal(state, &failure),
            Recovery::RestartDelayed(_) | Recovery::RestartNow => {
                show_retry_banner(state, &failure);
                drive_catalog_load(state, service, Some(failure)).await;
            }
        },
    }
}

fn publish_page(mut state: CatalogState, products: Vec<Product>) {
    let status = {
        let catalog = state.catalog.read();
        if catalog.ids().is_empty() {
            "No products to show".to_string()
        } else {
            format!(
                "Showing {} of {} products (page {}/{})",
                products.len(),
                catalog.ids().len(),
                catalog.current_page(),
                catalog.total_pages()
            )
        }
    };
    state.status.set(status);
    state.products.set(products);
    state.phase.set(LoadPhase::Ready);
}

fn show_retry_banner(mut state: CatalogState, failure: &FetchError) {
    warn!(error = %failure, "catalog request failed, restarting the id load");
    state.phase.set(LoadPhase::Retrying);
    state.status.set(format!("{failure}. Reloading the catalog."));
}

fn go_terminal(mut state: CatalogState, failure: &FetchError) {
    warn!(error = %failure, "catalog load halted");
    state.status.set(String::new());
    state.phase.set(LoadPhase::Failed(failure.to_string()));
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Goods List")
        .set_buttons(MessageButtons::Ok)
        .set_description(UNAUTHORIZED_ALERT)
        .show();
}
