use leaflet::LatLng;
use leptos::*;
use leptos_leaflet::{MapContainer, MapEvents, Marker, Position, TileLayer};

use ecoleta_core::entities::Coordinate;

const TILE_LAYER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
const ZOOM: f64 = 15.0;

/// Lets the user pick the position of a point by clicking on the map.
#[component]
pub fn PositionPicker(
    #[prop(into)] center: Signal<Coordinate>,
    #[prop(into)] position: Signal<Coordinate>,
    on_pick: Callback<Coordinate>,
) -> impl IntoView {
    let map = RwSignal::<Option<leaflet::Map>>::new(None);

    let events = MapEvents::new().mouse_click(move |ev| {
        let latlng = ev.lat_lng();
        on_pick.call(Coordinate::new(latlng.lat(), latlng.lng()));
    });

    // The bootstrap position may arrive after the map has been created.
    Effect::new(move |_| {
        let Coordinate { lat, lng } = center.get();
        let Some(map) = map.get_untracked() else {
            return;
        };
        map.set_view(&LatLng::new(lat, lng), map.get_zoom());
    });

    let Coordinate { lat, lng } = center.get_untracked();
    let marker = Signal::derive(move || {
        let Coordinate { lat, lng } = position.get();
        Position::new(lat, lng)
    });

    view! {
      <MapContainer
        class="map"
        center=Position::new(lat, lng)
        zoom=ZOOM
        map=map.write_only()
        set_view=true
        events
      >
        <TileLayer url=TILE_LAYER_URL attribution=MAP_ATTRIBUTION />
        <Marker position=marker />
      </MapContainer>
    }
}
