//! The component capability registry.
//!
//! Declaration order below is the authoritative, human-curated component
//! order. Downstream output (component lists, safelists) follows it, so the
//! registry is an ordered slice, never a hash map, and no sort is ever
//! applied. Built once behind a `OnceLock`; there is no registration or
//! override hook because the data never changes at runtime.

use crate::capability::{ComponentCaps, Support};
use crate::tokens::{Alignment, Placement, Variant};
use std::sync::OnceLock;

static REGISTRY: OnceLock<Vec<(&'static str, ComponentCaps)>> = OnceLock::new();
static COMPONENTS: OnceLock<Vec<&'static str>> = OnceLock::new();
static BADGE_VARIANTS: OnceLock<Vec<Variant>> = OnceLock::new();

/// Badge takes every variant except `link`, which reads as a button concern.
/// Derived from the full enumeration so relative order is preserved.
fn badge_variants() -> &'static [Variant] {
    BADGE_VARIANTS.get_or_init(|| {
        Variant::ALL
            .iter()
            .copied()
            .filter(|v| *v != Variant::Link)
            .collect()
    })
}

fn build_registry() -> Vec<(&'static str, ComponentCaps)> {
    let entries = vec![
        // buttons take every standard modifier
        (
            "btn",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                variants: Support::Full,
                shapes: Support::Full,
                activity: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        (
            "badge",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                variants: Support::Subset(badge_variants()),
                ..ComponentCaps::none()
            },
        ),
        // cards only adjust via sizes
        (
            "card",
            ComponentCaps {
                sizes: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        // tabs: sized, placed within their container
        (
            "tabs",
            ComponentCaps {
                sizes: Support::Full,
                placement: Support::Subset(&[Placement::Top, Placement::Bottom]),
                ..ComponentCaps::none()
            },
        ),
        (
            "input",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                variants: Support::Subset(&[Variant::Ghost]),
                ..ComponentCaps::none()
            },
        ),
        (
            "range",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        (
            "select",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        (
            "textarea",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                variants: Support::Subset(&[Variant::Ghost]),
                ..ComponentCaps::none()
            },
        ),
        (
            "radio",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        (
            "checkbox",
            ComponentCaps {
                colors: Support::Full,
                sizes: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        // collapse is structural: open/close state only, no style modifiers
        ("collapse", ComponentCaps::none()),
        // dropdowns place relative to the trigger and align their content
        (
            "dropdown",
            ComponentCaps {
                placement: Support::Subset(&[
                    Placement::Top,
                    Placement::Bottom,
                    Placement::Left,
                    Placement::Right,
                ]),
                alignment: Support::Subset(&[
                    Alignment::Start,
                    Alignment::Center,
                    Alignment::End,
                ]),
                ..ComponentCaps::none()
            },
        ),
        (
            "menu",
            ComponentCaps {
                sizes: Support::Full,
                activity: Support::Full,
                orientation: Support::Full,
                ..ComponentCaps::none()
            },
        ),
        // modals only choose where on screen they appear; placements are
        // curated top-to-bottom (middle between top and bottom), diverging
        // from the enumeration's declaration order on purpose
        (
            "modal",
            ComponentCaps {
                placement: Support::Subset(&[
                    Placement::Top,
                    Placement::Middle,
                    Placement::Bottom,
                    Placement::Start,
                    Placement::End,
                ]),
                ..ComponentCaps::none()
            },
        ),
    ];
    log::debug!("component capability registry initialized ({} components)", entries.len());
    entries
}

/// All registered components with their capability records, in declaration order.
pub fn registry() -> &'static [(&'static str, ComponentCaps)] {
    REGISTRY.get_or_init(build_registry).as_slice()
}

/// Registered component identifiers, in declaration order.
pub fn components() -> &'static [&'static str] {
    COMPONENTS
        .get_or_init(|| registry().iter().map(|(name, _)| *name).collect())
        .as_slice()
}

/// Capability record for a component.
///
/// `None` means the component is not registered at all; an all-unsupported
/// record means it is registered but takes no style modifiers. Both forbid
/// applying modifiers, but consumers may want different diagnostics.
pub fn capabilities_for(component: &str) -> Option<&'static ComponentCaps> {
    registry()
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, caps)| caps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Activity, Color, Orientation, Shape, Size};
    use std::collections::HashSet;

    /// `subset` must be an order-preserving subsequence of `full`.
    fn assert_subsequence<T: PartialEq + std::fmt::Debug>(subset: &[T], full: &[T]) {
        let mut rest = full.iter();
        for value in subset {
            assert!(
                rest.any(|v| v == value),
                "{value:?} missing or out of order against {full:?}"
            );
        }
    }

    /// `subset` must be duplicate-free and drawn from `full`; its own order is
    /// the curated one and need not follow the enumeration.
    fn assert_member_set<T: PartialEq + Eq + std::hash::Hash + std::fmt::Debug>(
        subset: &[T],
        full: &[T],
    ) {
        let unique: HashSet<&T> = subset.iter().collect();
        assert_eq!(unique.len(), subset.len(), "duplicate value in {subset:?}");
        for value in subset {
            assert!(full.contains(value), "{value:?} not in {full:?}");
        }
    }

    #[test]
    fn component_list_matches_registry_keys() {
        let keys: Vec<&str> = registry().iter().map(|(name, _)| *name).collect();
        assert_eq!(components(), keys.as_slice());

        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len(), "duplicate registry key");
    }

    #[test]
    fn declaration_order_is_preserved() {
        assert_eq!(components()[0], "btn");
        assert_eq!(components()[1], "badge");
        assert_eq!(*components().last().unwrap(), "modal");
    }

    #[test]
    fn explicit_subsets_are_subsequences_of_their_enumeration() {
        for (name, caps) in registry() {
            if let Support::Subset(values) = caps.variants {
                assert_subsequence(values, Variant::ALL);
            }
            // placement subsets carry a curated screen-space order (modal
            // runs top, middle, bottom), so only membership is checked
            if let Support::Subset(values) = caps.placement {
                assert_member_set(values, Placement::ALL);
            }
            if let Support::Subset(values) = caps.alignment {
                assert_subsequence(values, Alignment::ALL);
            }
            // flag-style dimensions never narrow to a subset
            assert!(
                matches!(caps.colors, Support::Full | Support::Unsupported),
                "{name}: colors is a flag dimension"
            );
            assert!(
                matches!(caps.sizes, Support::Full | Support::Unsupported),
                "{name}: sizes is a flag dimension"
            );
            assert!(
                matches!(caps.shapes, Support::Full | Support::Unsupported),
                "{name}: shapes is a flag dimension"
            );
            assert!(
                matches!(caps.activity, Support::Full | Support::Unsupported),
                "{name}: activity is a flag dimension"
            );
            assert!(
                matches!(caps.orientation, Support::Full | Support::Unsupported),
                "{name}: orientation is a flag dimension"
            );
        }
    }

    #[test]
    fn badge_variants_drop_link_and_keep_order() {
        let badge = capabilities_for("badge").unwrap();
        assert_eq!(
            badge.resolved_variants().unwrap(),
            &[Variant::Dash, Variant::Outline, Variant::Ghost, Variant::Soft]
        );
    }

    #[test]
    fn absence_is_distinct_from_an_empty_record() {
        assert!(capabilities_for("nonexistent-component").is_none());

        let collapse = capabilities_for("collapse").unwrap();
        assert_eq!(*collapse, crate::capability::ComponentCaps::none());
        assert!(collapse.supported_dimensions().is_empty());
    }

    #[test]
    fn btn_resolves_every_standard_set_in_full() {
        let btn = capabilities_for("btn").unwrap();
        assert_eq!(btn.resolved_colors(), Some(Color::ALL));
        assert_eq!(btn.resolved_sizes(), Some(Size::ALL));
        assert_eq!(btn.resolved_variants(), Some(Variant::ALL));
        assert_eq!(btn.resolved_shapes(), Some(Shape::ALL));
        assert_eq!(btn.resolved_activity(), Some(Activity::ALL));
        assert_eq!(btn.resolved_placement(), None);
        assert_eq!(btn.resolved_orientation(), None);
    }

    #[test]
    fn modal_placement_keeps_curated_screen_order() {
        let modal = capabilities_for("modal").unwrap();
        assert_eq!(
            modal.resolved_placement().unwrap(),
            &[
                Placement::Top,
                Placement::Middle,
                Placement::Bottom,
                Placement::Start,
                Placement::End
            ]
        );
    }

    #[test]
    fn menu_supports_orientation() {
        let menu = capabilities_for("menu").unwrap();
        assert_eq!(menu.resolved_orientation(), Some(Orientation::ALL));
        assert_eq!(menu.resolved_colors(), None);
    }
}
