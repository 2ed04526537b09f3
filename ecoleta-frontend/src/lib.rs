use std::time::Duration;

use leptos::*;
use leptos_router::*;

use ecoleta_frontend_api as api;

mod components;
mod pages;
mod preview;

use pages::*;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_GEOGRAPHY_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
const DEFAULT_TIMEOUT: Duration = api::DEFAULT_NETWORK_TIMEOUT;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- init API -- //

    let public_api = api::PublicApi::new(DEFAULT_API_URL).with_timeout(DEFAULT_TIMEOUT);
    let geography_api = api::GeographyApi::new(DEFAULT_GEOGRAPHY_URL).with_timeout(DEFAULT_TIMEOUT);

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home /> }
            />
            <Route
              path=Page::CreatePoint.path()
              view=move || {
                let public_api = public_api.clone();
                let geography_api = geography_api.clone();
                view! { <CreatePoint public_api geography_api /> }
              }
            />
          </Routes>
        </main>
      </Router>
    }
}
