use super::camera::{acquire_rear_camera, WebDetector, WebStream};
use super::flow::import_scanned_code;
use super::session::{AttachOutcome, ScanError, ScanSessionController, SessionTicket};
use crate::domain::a001_inventory_item::api::HttpItemStore;
use crate::domain::a001_inventory_item::ui::list::state::InventoryPageModel;
use crate::domain::a002_catalog_product::api::OpenFoodFactsClient;
use leptos::prelude::*;
use leptos::task::spawn_local;

type Controller = ScanSessionController<WebStream, WebDetector>;

/// Кнопки сканирования и панель с превью камеры
#[component]
#[allow(non_snake_case)]
pub fn BarcodeScanner(model: RwSignal<InventoryPageModel>) -> impl IntoView {
    let controller = StoredValue::new_local(Controller::new());
    let panel_visible = RwSignal::new(false);
    let video_ref = NodeRef::<leptos::html::Video>::new();

    let sync_panel = move || {
        if let Some(visible) = controller.try_with_value(|c| c.panel_visible()) {
            panel_visible.set(visible);
        }
    };

    let report = move |error: ScanError| {
        model.update(|m| {
            m.notices.error(error.to_string());
        });
    };

    let on_code = move |code: String| {
        let now_ms = js_sys::Date::now() as u64;
        let accepted = controller
            .try_update_value(|c| c.on_detected(&code, now_ms))
            .flatten();
        sync_panel();
        if let Some(code) = accepted {
            spawn_local(async move {
                import_scanned_code(&OpenFoodFactsClient::default(), &HttpItemStore, &model, &code)
                    .await;
            });
        }
    };

    let run_session = move |ticket: SessionTicket| {
        spawn_local(async move {
            let Some(video) = video_ref.get_untracked() else {
                let error = ScanError::CameraUnavailable("video element is not mounted".into());
                controller.update_value(|c| {
                    c.fail(ticket, &error);
                });
                sync_panel();
                report(error);
                return;
            };

            let stream = match acquire_rear_camera(&video).await {
                Ok(stream) => stream,
                Err(error) => {
                    let current = controller
                        .try_update_value(|c| c.fail(ticket, &error))
                        .unwrap_or(false);
                    sync_panel();
                    if current {
                        report(error);
                    }
                    return;
                }
            };

            let detector = WebDetector::new();
            let poller = detector.as_ref().ok().map(WebDetector::poller);
            match controller.try_update_value(|c| c.attach(ticket, stream, detector)) {
                Some(Ok(AttachOutcome::Scanning)) => {
                    if let Some(poller) = poller {
                        poller.run(video, on_code).await;
                    }
                }
                Some(Ok(AttachOutcome::Discarded)) | None => {}
                Some(Err(error)) => {
                    sync_panel();
                    report(error);
                }
            }
        });
    };

    let on_start = move |_| match controller.try_update_value(|c| c.start()) {
        Some(Ok(ticket)) => {
            sync_panel();
            run_session(ticket);
        }
        Some(Err(error)) => report(error),
        None => {}
    };

    let on_cancel = move |_| {
        controller.update_value(|c| c.cancel());
        sync_panel();
    };

    on_cleanup(move || {
        controller.try_update_value(|c| c.cancel());
    });

    view! {
        <div class="barcode-scanner">
            <button class="button button--primary" on:click=on_start>
                "Scan Barcode"
            </button>
            <div
                class="scanner-panel"
                style:display=move || if panel_visible.get() { "block" } else { "none" }
            >
                <video node_ref=video_ref class="scanner-panel__video" autoplay=true playsinline=true muted=true></video>
                <button class="button button--secondary" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
