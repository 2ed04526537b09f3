use leptos::*;
use leptos_router::*;

use ecoleta_core::{
    cascade::SubregionRequest,
    entities::{ContactField, Coordinate, ItemId, Region, Subregion},
    remote::Remote,
    state::CreatePointState,
    usecases,
};
use ecoleta_frontend_api::{BrowserGeolocation, GeographyApi, PublicApi};

use crate::{components::*, Page, DEFAULT_TIMEOUT};

type State = CreatePointState<web_sys::File>;

fn failure<T>(remote: &Remote<T>) -> Option<String> {
    remote.error().map(ToString::to_string)
}

#[allow(clippy::too_many_lines)]
#[component]
pub fn CreatePoint(public_api: PublicApi, geography_api: GeographyApi) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(State::default());

    let initial_position = Signal::derive(move || state.with(State::initial_position));
    let position = Signal::derive(move || state.with(|s| s.draft().position()));
    let items = Signal::derive(move || state.with(|s| s.catalog().as_slice().to_vec()));
    let selection = Signal::derive(move || state.with(|s| s.draft().items().clone()));
    let regions = Signal::derive(move || {
        state.with(|s| {
            s.regions()
                .as_slice()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
    });
    let subregions = Signal::derive(move || {
        state.with(|s| {
            s.subregions()
                .as_slice()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
    });
    let selected_region =
        Signal::derive(move || state.with(|s| s.draft().region().map(ToString::to_string)));
    let selected_subregion =
        Signal::derive(move || state.with(|s| s.draft().subregion().map(ToString::to_string)));
    let catalog_error = Signal::derive(move || state.with(|s| failure(s.catalog())));
    let regions_error = Signal::derive(move || state.with(|s| failure(s.regions())));
    let subregions_error = Signal::derive(move || state.with(|s| failure(s.subregions())));
    let submission_error =
        Signal::derive(move || state.with(|s| s.submission().error().map(ToString::to_string)));
    let submitting = Signal::derive(move || state.with(|s| s.submission().is_submitting()));

    // -- actions -- //

    let locate_device = Action::new(move |(): &()| async move {
        let geolocation = BrowserGeolocation::default().with_timeout(DEFAULT_TIMEOUT);
        let pos = usecases::locate_device(&geolocation).await;
        state.update(|s| {
            s.apply_initial_position(Some(pos));
        });
    });

    let load_catalog = Action::new({
        let api = public_api.clone();
        move |(): &()| {
            let api = api.clone();
            async move {
                let result = usecases::load_catalog(&api).await;
                state.update(|s| s.apply_catalog(result));
            }
        }
    });

    let load_regions = Action::new({
        let api = geography_api.clone();
        move |(): &()| {
            let api = api.clone();
            async move {
                let result = usecases::load_regions(&api).await;
                state.update(|s| s.apply_regions(result));
            }
        }
    });

    let load_subregions = Action::new(move |request: &SubregionRequest| {
        let api = geography_api.clone();
        let request = request.clone();
        async move {
            let result = usecases::load_subregions(&api, &request).await;
            state.update(|s| {
                s.apply_subregions(&request, result);
            });
        }
    });

    let navigate = use_navigate();
    let submit = Action::new(move |(): &()| {
        let api = public_api.clone();
        let navigate = navigate.clone();
        async move {
            let form = match state.try_update(State::begin_submission) {
                Some(Ok(form)) => form,
                Some(Err(err)) => {
                    log::warn!("Unable to submit: {err}");
                    return;
                }
                None => return,
            };
            let result = usecases::submit_point(&api, &form).await;
            state.update(|s| {
                if let Err(err) = s.finish_submission(result) {
                    log::error!("{err}");
                }
            });
            if state.with_untracked(|s| s.submission().is_succeeded()) {
                _ = window().alert_with_message("Cadastrado com sucesso");
                navigate(Page::Home.path(), NavigateOptions::default());
            }
        }
    });

    // -- callbacks -- //

    let start_catalog_load = move || {
        if state.try_update(State::begin_catalog_load).unwrap_or_default() {
            load_catalog.dispatch(());
        }
    };

    let start_regions_load = move || {
        if state.try_update(State::begin_regions_load).unwrap_or_default() {
            load_regions.dispatch(());
        }
    };

    let on_region_change = Callback::new(move |region: Option<String>| {
        let region = region.map(Region::from);
        if let Some(request) = state.try_update(|s| s.select_region(region)).flatten() {
            load_subregions.dispatch(request);
        }
    });

    let on_subregion_change = Callback::new(move |subregion: Option<String>| {
        state.update(|s| {
            s.select_subregion(subregion.map(Subregion::from));
        });
    });

    let on_retry_subregions = Callback::new(move |()| {
        if let Some(request) = state.try_update(State::retry_subregions).flatten() {
            load_subregions.dispatch(request);
        }
    });

    let on_pick = Callback::new(move |pos: Coordinate| state.update(|s| s.pick_position(pos)));
    let on_toggle = Callback::new(move |id: ItemId| state.update(|s| s.toggle_item(id)));
    let on_file = Callback::new(move |file: web_sys::File| state.update(|s| s.attach_image(file)));

    let on_submit = move || {
        state.update(|s| {
            s.acknowledge_submission_failure();
        });
        submit.dispatch(());
    };

    let contact_input = move |field: ContactField| {
        let name = field.as_str();
        view! {
          <input
            type="text"
            name=name
            id=name
            prop:value=move || state.with(|s| s.draft().contact().field(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.set_contact_field(field, value));
            }
          />
        }
    };

    // -- init -- //

    locate_device.dispatch(());
    start_catalog_load();
    start_regions_load();

    view! {
      <div id="page-create-point">
        <header>
          <A href=Page::Home.path()>"Voltar para home"</A>
        </header>
        <form on:submit=move |ev| {
            ev.prevent_default();
            on_submit();
        }>
          <h1>"Cadastro do ponto de coleta"</h1>
          <Dropzone on_file />
          <fieldset>
            <legend><h2>"Dados"</h2></legend>
            <div class="field">
              <label for="name">"Nome da entidade"</label>
              {contact_input(ContactField::Name)}
            </div>
            <div class="field-group">
              <div class="field">
                <label for="email">"E-mail"</label>
                {contact_input(ContactField::Email)}
              </div>
              <div class="field">
                <label for="whatsapp">"Whatsapp"</label>
                {contact_input(ContactField::Whatsapp)}
              </div>
            </div>
          </fieldset>
          <fieldset>
            <legend>
              <h2>"Endereço"</h2>
              <span>"Selecione o endereço no mapa"</span>
            </legend>
            <PositionPicker center=initial_position position on_pick />
            <div class="field-group">
              <LabelSelect
                name="uf"
                label="Estado (UF)"
                placeholder="Selecione uma UF"
                options=regions
                selected=selected_region
                loading=Signal::derive(move || state.with(|s| s.regions().is_loading()))
                on_change=on_region_change
              />
              <LabelSelect
                name="city"
                label="Cidade"
                placeholder="Selecione uma cidade"
                options=subregions
                selected=selected_subregion
                loading=Signal::derive(move || state.with(|s| s.subregions().is_loading()))
                on_change=on_subregion_change
              />
            </div>
            <RemoteError error=regions_error on_retry=Callback::new(move |()| start_regions_load()) />
            <RemoteError error=subregions_error on_retry=on_retry_subregions />
          </fieldset>
          <fieldset>
            <legend>
              <h2>"Ítens de coleta"</h2>
              <span>"Selecione um ou mais ítens abaixo"</span>
            </legend>
            <ItemGrid items selection on_toggle />
            <RemoteError error=catalog_error on_retry=Callback::new(move |()| start_catalog_load()) />
          </fieldset>
          <RemoteError error=submission_error on_retry=Callback::new(move |()| on_submit()) />
          <button type="submit" disabled=move || submitting.get()>
            "Cadastrar ponto de coleta"
          </button>
        </form>
      </div>
    }
}
