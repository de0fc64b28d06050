pub mod row;
pub mod state;
pub mod sync;

use self::row::{render, EditBuffer, EditField};
use self::state::{InventoryPageModel, RowKey};
use self::sync::{confirm_edit, delete_item, refresh};
use crate::domain::a001_inventory_item::api::HttpItemStore;
use contracts::domain::a001_inventory_item::InventoryItemId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Таблица склада с редактированием строк на месте
#[component]
#[allow(non_snake_case)]
pub fn InventoryList(model: RwSignal<InventoryPageModel>) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    // Уведомления и ввод в буфер не перерисовывают строки
    let row_keys = Memo::new(move |_| model.with(|m| m.table.row_keys()));

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            refresh(&HttpItemStore, &model).await;
            set_loading.set(false);
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !model.with_untracked(|m| m.table.is_loaded) {
            load_items();
        }
    });

    view! {
        <div class="inventory-list">
            <div class="inventory-list__header">
                <h2>"Inventory"</h2>
                <button
                    class="button button--secondary"
                    on:click=move |_| load_items()
                    prop:disabled=move || loading.get()
                >
                    "Refresh"
                </button>
            </div>

            <div class="table-container">
                <table id="inventory-table" class="table__data table--striped">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Item Name"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Expiration Date"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            row_keys
                                .get()
                                .into_iter()
                                .map(|key| row_view(key, model))
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn row_view(key: RowKey, model: RwSignal<InventoryPageModel>) -> AnyView {
    let id = key.item.id;
    if !key.editing {
        let cells = render(&key.item);
        view! {
            <tr data-id=id.to_string()>
                <td class="table__cell">{cells.item_name}</td>
                <td class="table__cell">{cells.quantity}</td>
                <td class="table__cell">{cells.expiration_date}</td>
                <td class="table__cell">
                    <button
                        class="button button--secondary"
                        on:click=move |_| begin_edit(model, id)
                    >
                        "Edit"
                    </button>
                    <button
                        class="button button--ghost"
                        on:click=move |_| {
                            spawn_local(async move {
                                delete_item(&HttpItemStore, &model, id).await;
                            });
                        }
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    } else {
        let buffer = model
            .with_untracked(|m| m.table.row(id).and_then(|r| r.edit_buffer().cloned()))
            .unwrap_or_else(|| EditBuffer::from_item(&key.item));
        view! {
            <tr data-id=id.to_string() class="row--editing">
                <td class="table__cell">
                    <input
                        type="text"
                        prop:value=buffer.item_name
                        on:input=move |ev| {
                            set_field(model, id, EditField::ItemName, event_target_value(&ev))
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="number"
                        prop:value=buffer.quantity
                        on:input=move |ev| {
                            set_field(model, id, EditField::Quantity, event_target_value(&ev))
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="date"
                        prop:value=buffer.expiration_date
                        on:input=move |ev| {
                            set_field(model, id, EditField::ExpirationDate, event_target_value(&ev))
                        }
                    />
                </td>
                <td class="table__cell">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            spawn_local(async move {
                                confirm_edit(&HttpItemStore, &model, id).await;
                            });
                        }
                    >
                        "Confirm"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| cancel_edit(model, id)
                    >
                        "Cancel"
                    </button>
                </td>
            </tr>
        }
        .into_any()
    }
}

fn begin_edit(model: RwSignal<InventoryPageModel>, id: InventoryItemId) {
    model.update(|m| {
        if let Some(row) = m.table.row_mut(id) {
            row.begin_edit();
        }
    });
}

fn cancel_edit(model: RwSignal<InventoryPageModel>, id: InventoryItemId) {
    model.update(|m| {
        if let Some(row) = m.table.row_mut(id) {
            row.cancel_edit();
        }
    });
}

// Без перерисовки: иначе поле теряет фокус на каждом символе
fn set_field(model: RwSignal<InventoryPageModel>, id: InventoryItemId, field: EditField, value: String) {
    model.update_untracked(|m| {
        if let Some(row) = m.table.row_mut(id) {
            row.set_field(field, value);
        }
    });
}
