use crate::domain::a001_inventory_item::api::HttpItemStore;
use crate::domain::a001_inventory_item::ui::list::state::InventoryPageModel;
use crate::domain::a001_inventory_item::ui::list::sync::add_item;
use contracts::domain::a001_inventory_item::ItemPayload;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Форма добавления позиции
///
/// Quantity is parsed like in the edit row; the fields are cleared only
/// after the store accepted the item.
#[component]
#[allow(non_snake_case)]
pub fn NewItemForm(model: RwSignal<InventoryPageModel>) -> impl IntoView {
    let item_name = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let expiration_date = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = ItemPayload::from_form(
            &item_name.get_untracked(),
            &quantity.get_untracked(),
            &expiration_date.get_untracked(),
        );
        set_saving.set(true);
        spawn_local(async move {
            if add_item(&HttpItemStore, &model, payload).await {
                item_name.set(String::new());
                quantity.set(String::new());
                expiration_date.set(String::new());
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-item-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || item_name.get()
                on:input=move |ev| item_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Quantity"
                prop:value=move || quantity.get()
                on:input=move |ev| quantity.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || expiration_date.get()
                on:input=move |ev| expiration_date.set(event_target_value(&ev))
            />
            <button type="submit" class="button button--primary" prop:disabled=move || saving.get()>
                "Add Item"
            </button>
        </form>
    }
}
