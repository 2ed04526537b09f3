use leptos::*;

/// A failed request that can be tried again.
#[component]
pub fn RemoteError(
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        error.get().map(|err| {
            view! {
              <div class="remote-error">
                <p>{err}</p>
                <button type="button" on:click=move |_| on_retry.call(())>
                  "Tentar novamente"
                </button>
              </div>
            }
        })
    }
}
