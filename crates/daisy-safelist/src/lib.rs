//! Safelist generation: pre-compute every valid utility class so a CSS build
//! keeps them even when static analysis never sees them spelled out.
//!
//! Output order is fully determined by the metadata: components in registry
//! declaration order, dimensions in fixed dimension order, values in their
//! declared order. Two runs over the same metadata produce identical output.

use daisy_meta::{ComponentCaps, capabilities_for, registry};

/// Every valid class for one registered component, bare class first, then
/// modifier classes (`{component}-{token}`).
///
/// `None` when the component is not registered.
pub fn classes_for(component: &str) -> Option<Vec<String>> {
    let caps = capabilities_for(component)?;
    Some(expand(component, caps))
}

/// The full safelist across every registered component.
pub fn safelist() -> Vec<String> {
    let classes: Vec<String> = registry()
        .iter()
        .flat_map(|(name, caps)| expand(name, caps))
        .collect();
    log::debug!("generated safelist with {} classes", classes.len());
    classes
}

fn expand(name: &str, caps: &ComponentCaps) -> Vec<String> {
    let mut classes = vec![name.to_string()];
    if let Some(colors) = caps.resolved_colors() {
        classes.extend(colors.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(sizes) = caps.resolved_sizes() {
        classes.extend(sizes.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(variants) = caps.resolved_variants() {
        classes.extend(variants.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(shapes) = caps.resolved_shapes() {
        classes.extend(shapes.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(activity) = caps.resolved_activity() {
        classes.extend(activity.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(placements) = caps.resolved_placement() {
        classes.extend(placements.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(alignments) = caps.resolved_alignment() {
        classes.extend(alignments.iter().map(|v| format!("{name}-{v}")));
    }
    if let Some(orientations) = caps.resolved_orientation() {
        classes.extend(orientations.iter().map(|v| format!("{name}-{v}")));
    }
    classes
}
