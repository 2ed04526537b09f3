use leptos::*;

use ecoleta_core::{
    entities::{Item, ItemId},
    selection::ItemSelection,
};

#[component]
pub fn ItemGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selection: Signal<ItemSelection>,
    on_toggle: Callback<ItemId>,
) -> impl IntoView {
    view! {
      <ul class="items-grid">
        <For
          each=move || items.get()
          key=|item| item.id
          let:item
        >
          {
            let id = item.id;
            view! {
              <li
                class:selected=move || selection.with(|s| s.contains(id))
                on:click=move |_| on_toggle.call(id)
              >
                <img src=item.image_url alt=item.title.clone() />
                <span>{item.title}</span>
              </li>
            }
          }
        </For>
      </ul>
    }
}
