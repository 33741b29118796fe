//! # Zone Catalog
//!
//! The six zones of the embryonic cerebral wall in anatomical order, from the
//! transient layer under the pia to the progenitor layer lining the
//! ventricle.

use serde::Serialize;

use crate::record::{ColorTag, ZoneRecord};

/// Number of zones in the catalog.
pub const ZONE_COUNT: usize = 6;

/// Compile-time source table: (name, abbreviation, description, color).
const ZONE_TABLE: [(&str, &str, &str, ColorTag); ZONE_COUNT] = [
    (
        "Marginal Zone",
        "MZ",
        "Cell-sparse outermost layer beneath the pia, home to Cajal-Retzius cells that secrete reelin to guide migrating neurons.",
        ColorTag::Purple,
    ),
    (
        "Cortical Plate",
        "CP",
        "Dense band of newly arrived neurons that matures into cortical layers II to VI, assembled from the inside out.",
        ColorTag::Blue,
    ),
    (
        "Subplate",
        "SP",
        "Transient layer of early-born neurons that acts as a waiting compartment for incoming thalamic and cortical axons.",
        ColorTag::Teal,
    ),
    (
        "Intermediate Zone",
        "IZ",
        "Fiber-rich region crossed by migrating neurons and growing axons; it becomes the future white matter.",
        ColorTag::Green,
    ),
    (
        "Subventricular Zone",
        "SVZ",
        "Secondary proliferative layer of intermediate progenitors and outer radial glia that multiplies neuron output.",
        ColorTag::Orange,
    ),
    (
        "Ventricular Zone",
        "VZ",
        "Innermost proliferative layer lining the ventricle, where radial glial progenitors divide to generate neurons.",
        ColorTag::Red,
    ),
];

/// Immutable, ordered sequence of zone records.
///
/// There is no way to insert, remove or reorder records once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZoneCatalog {
    records: Vec<ZoneRecord>,
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self::developing_cortex()
    }
}

impl ZoneCatalog {
    /// Build the catalog of the developing cortex, outermost zone first.
    pub fn developing_cortex() -> Self {
        let records = ZONE_TABLE
            .iter()
            .map(|&(name, abbreviation, description, color)| {
                ZoneRecord::new(name, abbreviation, description, color)
            })
            .collect();

        Self { records }
    }

    /// All records in declared order.
    pub fn records(&self) -> &[ZoneRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Abbreviations in declared order.
    pub fn abbreviations(&self) -> Vec<&'static str> {
        self.records.iter().map(ZoneRecord::abbreviation).collect()
    }
}

impl<'a> IntoIterator for &'a ZoneCatalog {
    type Item = &'a ZoneRecord;
    type IntoIter = std::slice::Iter<'a, ZoneRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
