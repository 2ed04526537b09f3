use leptos::*;

use ecoleta_core::payload::UNSELECTED;

/// A `<select>` with a placeholder option that stands for "nothing selected".
#[component]
pub fn LabelSelect(
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    on_change: Callback<Option<String>>,
) -> impl IntoView {
    view! {
      <div class="field">
        <label for=name>{label}</label>
        <select
          name=name
          id=name
          disabled=move || loading.get()
          prop:value=move || selected.get().unwrap_or_else(|| UNSELECTED.to_owned())
          on:change=move |ev| {
              let value = event_target_value(&ev);
              on_change.call((value != UNSELECTED).then_some(value));
          }
        >
          <option value=UNSELECTED>{placeholder}</option>
          <For
            each=move || options.get()
            key=Clone::clone
            let:option
          >
            <option value=option.clone()>{option}</option>
          </For>
        </select>
      </div>
    }
}
