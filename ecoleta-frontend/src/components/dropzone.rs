use leptos::*;
use web_sys::{DragEvent, FileList, HtmlInputElement};

use ecoleta_core::{attachment::ImageDropzone, entities::ACCEPTED_MEDIA_TYPES};

use crate::preview::ObjectUrl;

fn into_files(list: Option<FileList>) -> Vec<web_sys::File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.item(i)).collect())
        .unwrap_or_default()
}

/// Drop target for a single point image.
#[component]
pub fn Dropzone(on_file: Callback<web_sys::File>) -> impl IntoView {
    let dropzone = StoredValue::new(ImageDropzone::<ObjectUrl>::default());
    let preview_url = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let dragging = RwSignal::new(false);

    let accept = move |files: Vec<web_sys::File>| {
        let accepted = dropzone
            .try_update_value(|d| {
                d.accept(files, |file: &web_sys::File| {
                    ObjectUrl::create(file).map_err(|err| format!("{err:?}"))
                })
                .map(|file| (file, d.preview().map(|url| url.as_str().to_owned())))
            });
        match accepted {
            Some(Ok((file, url))) => {
                error.set(None);
                preview_url.set(url);
                on_file.call(file);
            }
            Some(Err(err)) => {
                log::warn!("{err}");
                error.set(Some(err.to_string()));
            }
            None => {
                log::warn!("Dropzone has been disposed");
            }
        }
    };

    on_cleanup(move || {
        dropzone.try_update_value(ImageDropzone::clear);
    });

    view! {
      <div
        class="dropzone"
        class:active=move || dragging.get()
        on:dragover=move |ev: DragEvent| {
            ev.prevent_default();
            dragging.set(true);
        }
        on:dragleave=move |_| dragging.set(false)
        on:drop=move |ev: DragEvent| {
            ev.prevent_default();
            dragging.set(false);
            accept(into_files(ev.data_transfer().and_then(|dt| dt.files())));
        }
      >
        <input
          type="file"
          accept=ACCEPTED_MEDIA_TYPES
          on:change=move |ev| {
              let input = event_target::<HtmlInputElement>(&ev);
              accept(into_files(input.files()));
          }
        />
        {move || match preview_url.get() {
            Some(url) => view! { <img src=url alt="Point thumbnail" /> }.into_view(),
            None => view! { <p>"Imagem do estabelecimento"</p> }.into_view(),
        }}
        {move || error.get().map(|err| view! { <p class="error">{err}</p> })}
      </div>
    }
}
