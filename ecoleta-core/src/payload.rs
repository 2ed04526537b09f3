//! Multipart payload of a new collection point.

use crate::{draft::PointDraft, entities::ContactField};

pub const FIELD_LATITUDE: &str = "latitude";
pub const FIELD_LONGITUDE: &str = "longitude";
pub const FIELD_CITY: &str = "city";
pub const FIELD_UF: &str = "uf";
pub const FIELD_ITEMS: &str = "items";
pub const FIELD_IMAGE: &str = "image";

/// Value of `city` and `uf` if nothing has been selected.
pub const UNSELECTED: &str = "0";

#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text(String),
    File(F),
}

/// The ordered parts of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct PointForm<F> {
    parts: Vec<(&'static str, Part<F>)>,
}

impl<F> PointForm<F>
where
    F: Clone,
{
    pub fn from_draft(draft: &PointDraft<F>) -> Self {
        let contact = draft.contact();
        let position = draft.position();
        let label = |value: Option<&str>| value.unwrap_or(UNSELECTED).to_owned();
        let mut parts = vec![
            (
                ContactField::Name.as_str(),
                Part::Text(contact.name.clone()),
            ),
            (
                ContactField::Email.as_str(),
                Part::Text(contact.email.clone()),
            ),
            (
                ContactField::Whatsapp.as_str(),
                Part::Text(contact.whatsapp.clone()),
            ),
            (FIELD_LATITUDE, Part::Text(position.lat.to_string())),
            (FIELD_LONGITUDE, Part::Text(position.lng.to_string())),
            (
                FIELD_CITY,
                Part::Text(label(draft.subregion().map(|s| s.as_str()))),
            ),
            (
                FIELD_UF,
                Part::Text(label(draft.region().map(|r| r.as_str()))),
            ),
            (FIELD_ITEMS, Part::Text(draft.items().to_comma_separated())),
        ];
        if let Some(image) = draft.image() {
            parts.push((FIELD_IMAGE, Part::File(image.clone())));
        }
        Self { parts }
    }
}

impl<F> PointForm<F> {
    pub fn parts(&self) -> impl Iterator<Item = (&'static str, &Part<F>)> {
        self.parts.iter().map(|(name, part)| (*name, part))
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts().find_map(|(n, part)| match part {
            Part::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn file(&self) -> Option<&F> {
        self.parts().find_map(|(_, part)| match part {
            Part::File(file) => Some(file),
            Part::Text(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
