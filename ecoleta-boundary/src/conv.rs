use super::*;
use ecoleta_entities as e;

impl From<e::item::Item> for Item {
    fn from(from: e::item::Item) -> Self {
        let e::item::Item {
            id,
            title,
            image_url,
        } = from;
        Self {
            id: id.to_u64(),
            title,
            image_url,
        }
    }
}

impl From<Item> for e::item::Item {
    fn from(from: Item) -> Self {
        let Item {
            id,
            title,
            image_url,
        } = from;
        Self {
            id: id.into(),
            title,
            image_url,
        }
    }
}

impl From<RegionRecord> for e::division::Region {
    fn from(from: RegionRecord) -> Self {
        from.sigla.into()
    }
}

impl From<e::division::Region> for RegionRecord {
    fn from(from: e::division::Region) -> Self {
        Self { sigla: from.into() }
    }
}

impl From<SubregionRecord> for e::division::Subregion {
    fn from(from: SubregionRecord) -> Self {
        from.nome.into()
    }
}

impl From<e::division::Subregion> for SubregionRecord {
    fn from(from: e::division::Subregion) -> Self {
        Self { nome: from.into() }
    }
}
