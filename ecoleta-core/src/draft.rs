use crate::{
    entities::{Contact, ContactField, Coordinate, ItemId, Region, Subregion},
    selection::ItemSelection,
};

/// The in-progress, not yet submitted collection point.
///
/// A draft is never mutated in place: every handler returns
/// an updated copy that replaces the previous snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDraft<F> {
    contact: Contact,
    region: Option<Region>,
    subregion: Option<Subregion>,
    position: Coordinate,
    items: ItemSelection,
    image: Option<F>,
}

impl<F> Default for PointDraft<F> {
    fn default() -> Self {
        Self {
            contact: Contact::default(),
            region: None,
            subregion: None,
            position: Coordinate::ORIGIN,
            items: ItemSelection::default(),
            image: None,
        }
    }
}

impl<F> PointDraft<F> {
    pub const fn contact(&self) -> &Contact {
        &self.contact
    }

    pub const fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub const fn subregion(&self) -> Option<&Subregion> {
        self.subregion.as_ref()
    }

    pub const fn position(&self) -> Coordinate {
        self.position
    }

    pub const fn items(&self) -> &ItemSelection {
        &self.items
    }

    pub const fn image(&self) -> Option<&F> {
        self.image.as_ref()
    }
}

impl<F> PointDraft<F>
where
    F: Clone,
{
    #[must_use]
    pub fn with_contact_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        Self {
            contact: self.contact.with_field(field, value),
            ..self.clone()
        }
    }

    /// A different region invalidates the selected subregion.
    #[must_use]
    pub fn with_region(&self, region: Option<Region>) -> Self {
        if self.region == region {
            return self.clone();
        }
        Self {
            region,
            subregion: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_subregion(&self, subregion: Option<Subregion>) -> Self {
        Self {
            subregion,
            ..self.clone()
        }
    }

    /// Drops the selected subregion unless it is one of `valid`.
    #[must_use]
    pub fn with_subregion_revalidated(&self, valid: &[Subregion]) -> Self {
        let subregion = self
            .subregion
            .as_ref()
            .filter(|s| valid.contains(*s))
            .cloned();
        self.with_subregion(subregion)
    }

    #[must_use]
    pub fn with_position(&self, position: Coordinate) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_item_toggled(&self, id: ItemId) -> Self {
        let mut items = self.items.clone();
        items.toggle(id);
        Self {
            items,
            ..self.clone()
        }
    }

    /// Replaces a previously attached image.
    #[must_use]
    pub fn with_image(&self, image: F) -> Self {
        Self {
            image: Some(image),
            ..self.clone()
        }
    }
}
