//! Todo Panel Component
//!
//! Dashboard checklist backed by localStorage.

use leptos::prelude::*;

use crate::error::AppResult;
use crate::models::TodoItem;
use crate::storage::LocalStorage;
use crate::todos::TodoList;

type StoredTodos = StoredValue<TodoList<LocalStorage>>;

/// Run one mutation and refresh the rendered items if it changed anything
fn apply(
    list: StoredTodos,
    items: RwSignal<Vec<TodoItem>>,
    op: impl FnOnce(&mut TodoList<LocalStorage>) -> AppResult<bool>,
) -> bool {
    let mut changed = false;
    list.update_value(|list| match op(list) {
        Ok(true) => {
            changed = true;
            items.set(list.items().to_vec());
        }
        Ok(false) => {}
        Err(e) => log::warn!("[TODO] Could not save list: {}", e),
    });
    changed
}

#[component]
pub fn TodoPanel() -> impl IntoView {
    let list: StoredTodos = StoredValue::new(TodoList::load(LocalStorage));
    let items = RwSignal::new(list.with_value(|l| l.items().to_vec()));
    let draft = RwSignal::new(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let text = draft.get_untracked();
        if apply(list, items, |l| l.add(&text)) {
            draft.set(String::new());
        }
    };

    view! {
        <section class="todo-panel">
            <h3>"Todo"</h3>
            <input
                class="todo-input"
                type="text"
                placeholder="Add a task and press Enter"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <Show
                when=move || !items.with(|i| i.is_empty())
                fallback=|| view! { <p class="todo-empty">"No tasks. Add a task!"</p> }
            >
                <ul class="todo-list">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                let class = if item.completed { "todo-item completed" } else { "todo-item" };
                                view! {
                                    <li class=class>
                                        <input
                                            type="checkbox"
                                            prop:checked=item.completed
                                            on:change=move |_| {
                                                apply(list, items, |l| l.toggle(index));
                                            }
                                        />
                                        <span class="todo-text">{item.text}</span>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| {
                                                apply(list, items, |l| l.remove(index));
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
