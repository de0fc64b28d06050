use crate::domain::a001_inventory_item::ui::list::state::create_state;
use crate::domain::a001_inventory_item::ui::list::InventoryList;
use crate::domain::a001_inventory_item::ui::new_item::NewItemForm;
use crate::shared::components::notice_bar::NoticeBar;
use crate::usecases::u502_scan_barcode::BarcodeScanner;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Одна модель на страницу: таблица и уведомления
    let model = create_state();

    let notices = Signal::derive(move || model.with(|m| m.notices.notices().to_vec()));
    let on_dismiss = Callback::new(move |id: u64| {
        model.update(|m| m.notices.dismiss(id));
    });

    view! {
        <div class="inventory-page">
            <h1 class="inventory-page__title">"Inventory Tracker"</h1>
            <NoticeBar notices=notices on_dismiss=on_dismiss />
            <div class="inventory-page__actions">
                <NewItemForm model=model />
                <BarcodeScanner model=model />
            </div>
            <InventoryList model=model />
        </div>
    }
}
