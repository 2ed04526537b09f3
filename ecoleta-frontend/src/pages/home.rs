use leptos::*;
use leptos_router::*;

use super::Page;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <div id="page-home">
        <header>
          <h1>"Ecoleta"</h1>
        </header>
        <section>
          <h2>"Seu marketplace de coleta de resíduos."</h2>
          <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
          <A href=Page::CreatePoint.path()>"Cadastre um ponto de coleta"</A>
        </section>
      </div>
    }
}
