//! The document the root view renders.
//!
//! A document is the ordered list of sections drawn top to bottom. It is a
//! pure function of the catalog: composing twice from the same catalog gives
//! the same sections.

use cortex_catalog::{ZoneCatalog, ZoneRecord};

/// Glyph shown before the title.
pub const HEADER_ICON: &str = "◉";
/// Header title.
pub const HEADER_TITLE: &str = "Cortical Development Zones";
/// Header subtitle.
pub const HEADER_SUBTITLE: &str = "Layers of the embryonic cerebral wall, from pia to ventricle";

/// The two anatomical boundaries framing the zone sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Pial surface, above the outermost zone.
    OuterSurface,
    /// Ventricle, below the innermost zone.
    Innermost,
}

impl Boundary {
    /// Caption text.
    pub fn label(&self) -> &'static str {
        match self {
            Boundary::OuterSurface => "Pia Mater (Outer Surface)",
            Boundary::Innermost => "Ventricle / Cerebrospinal Fluid (Innermost)",
        }
    }
}

/// One vertical section of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    /// Icon, title and subtitle.
    Header,
    /// Static boundary caption.
    Caption(Boundary),
    /// One zone card.
    Card(&'a ZoneRecord),
}

/// Ordered sections of the root view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> Document<'a> {
    /// Compose the document for a catalog: header, outer caption, one card
    /// per zone in catalog order, inner caption.
    pub fn compose(catalog: &'a ZoneCatalog) -> Self {
        let mut sections = Vec::with_capacity(catalog.len() + 3);
        sections.push(Section::Header);
        sections.push(Section::Caption(Boundary::OuterSurface));
        sections.extend(catalog.iter().map(Section::Card));
        sections.push(Section::Caption(Boundary::Innermost));

        Self { sections }
    }

    pub fn sections(&self) -> &[Section<'a>] {
        &self.sections
    }

    /// Zone records in the order their cards appear.
    pub fn cards(&self) -> impl Iterator<Item = &'a ZoneRecord> + '_ {
        self.sections.iter().filter_map(|section| match section {
            Section::Card(zone) => Some(*zone),
            _ => None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards().count()
    }

    /// Abbreviations of the cards, top to bottom.
    pub fn card_abbreviations(&self) -> Vec<&'static str> {
        self.cards().map(ZoneRecord::abbreviation).collect()
    }

    /// Captions, top to bottom.
    pub fn captions(&self) -> Vec<Boundary> {
        self.sections
            .iter()
            .filter_map(|section| match section {
                Section::Caption(boundary) => Some(*boundary),
                _ => None,
            })
            .collect()
    }
}
