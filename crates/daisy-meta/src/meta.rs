//! The aggregate metadata object: the whole authorized design space behind a
//! single reference, for consumers that want one dependency instead of
//! reaching into each enumeration.

use crate::capability::ComponentCaps;
use crate::registry::{components, registry};
use crate::tokens::{Activity, Alignment, Color, Orientation, Placement, Shape, Size, Variant};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Read-only bundle of every enumeration set, the derived component list, and
/// the capability registry. All fields borrow the same `'static` data on every
/// access; nothing here is ever rebuilt.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub components: &'static [&'static str],
    pub colors: &'static [Color],
    pub placements: &'static [Placement],
    pub alignment: &'static [Alignment],
    pub orientation: &'static [Orientation],
    pub sizes: &'static [Size],
    pub variants: &'static [Variant],
    pub shapes: &'static [Shape],
    pub activity: &'static [Activity],
    #[serde(serialize_with = "capabilities_as_map")]
    pub capabilities: &'static [(&'static str, ComponentCaps)],
}

/// Serialize the registry as a map keyed by component, preserving declaration
/// order in the output.
fn capabilities_as_map<S>(
    entries: &&'static [(&'static str, ComponentCaps)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, caps) in entries.iter() {
        map.serialize_entry(name, caps)?;
    }
    map.end()
}

static META: OnceLock<Meta> = OnceLock::new();

/// The process-wide metadata singleton.
pub fn meta() -> &'static Meta {
    META.get_or_init(|| Meta {
        components: components(),
        colors: Color::ALL,
        placements: Placement::ALL,
        alignment: Alignment::ALL,
        orientation: Orientation::ALL,
        sizes: Size::ALL,
        variants: Variant::ALL,
        shapes: Shape::ALL,
        activity: Activity::ALL,
        capabilities: registry(),
    })
}
