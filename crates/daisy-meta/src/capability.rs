//! Component capability records - which style modifiers a component accepts.

use crate::tokens::{Activity, Alignment, Color, Orientation, Placement, Shape, Size, Variant};
use serde::Serialize;

/// The styling dimensions a capability record can declare, in the fixed order
/// consumers iterate them (class builders, safelist output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Colors,
    Sizes,
    Variants,
    Shapes,
    Activity,
    Placement,
    Alignment,
    Orientation,
}

impl Dimension {
    /// Every dimension, in iteration order.
    pub const ALL: &'static [Self] = &[
        Self::Colors,
        Self::Sizes,
        Self::Variants,
        Self::Shapes,
        Self::Activity,
        Self::Placement,
        Self::Alignment,
        Self::Orientation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::Sizes => "sizes",
            Self::Variants => "variants",
            Self::Shapes => "shapes",
            Self::Activity => "activity",
            Self::Placement => "placement",
            Self::Alignment => "alignment",
            Self::Orientation => "orientation",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a component supports one styling dimension.
///
/// The three cases are distinct on purpose: "does not apply" must never be
/// conflated with "applies with an empty value list", and "full standard set"
/// must stay a marker rather than a copy of the enumeration, so the standard
/// set can grow without touching every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support<T: 'static> {
    /// The dimension does not apply to the component.
    Unsupported,
    /// The full standard enumeration applies.
    Full,
    /// Only these values apply, in this order.
    Subset(&'static [T]),
}

impl<T> Support<T> {
    /// Resolve against the dimension's full enumeration.
    ///
    /// `None` means the dimension does not apply; consumers reject or ignore.
    pub const fn resolve(&self, full: &'static [T]) -> Option<&'static [T]> {
        match self {
            Self::Unsupported => None,
            Self::Full => Some(full),
            Self::Subset(values) => Some(*values),
        }
    }

    pub const fn applies(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

impl<T> Default for Support<T> {
    fn default() -> Self {
        Self::Unsupported
    }
}

/// Dimensions serialize the way capability declarations read: `true` for the
/// full standard set, a bare token array for an explicit subset, `false` when
/// the dimension does not apply (normally omitted from record dumps).
impl<T: Serialize> Serialize for Support<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Unsupported => serializer.serialize_bool(false),
            Self::Full => serializer.serialize_bool(true),
            Self::Subset(values) => values.serialize(serializer),
        }
    }
}

/// Which style modifiers one component accepts.
///
/// A record with every dimension `Unsupported` is still a registered record
/// (purely structural components like `collapse`), distinct from a component
/// missing from the registry entirely.
///
/// Serialized form omits unsupported dimensions, so dumps read as "what the
/// component has", not a wall of nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentCaps {
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub colors: Support<Color>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub sizes: Support<Size>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub variants: Support<Variant>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub shapes: Support<Shape>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub activity: Support<Activity>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub placement: Support<Placement>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub alignment: Support<Alignment>,
    #[serde(skip_serializing_if = "Support::is_unsupported")]
    pub orientation: Support<Orientation>,
}

impl ComponentCaps {
    /// Record with no applicable dimensions.
    pub const fn none() -> Self {
        Self {
            colors: Support::Unsupported,
            sizes: Support::Unsupported,
            variants: Support::Unsupported,
            shapes: Support::Unsupported,
            activity: Support::Unsupported,
            placement: Support::Unsupported,
            alignment: Support::Unsupported,
            orientation: Support::Unsupported,
        }
    }

    /// Whether the given dimension applies at all.
    pub const fn supports(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Colors => self.colors.applies(),
            Dimension::Sizes => self.sizes.applies(),
            Dimension::Variants => self.variants.applies(),
            Dimension::Shapes => self.shapes.applies(),
            Dimension::Activity => self.activity.applies(),
            Dimension::Placement => self.placement.applies(),
            Dimension::Alignment => self.alignment.applies(),
            Dimension::Orientation => self.orientation.applies(),
        }
    }

    /// Applicable dimensions, in fixed dimension order.
    pub fn supported_dimensions(&self) -> Vec<Dimension> {
        Dimension::ALL
            .iter()
            .copied()
            .filter(|d| self.supports(*d))
            .collect()
    }

    pub const fn resolved_colors(&self) -> Option<&'static [Color]> {
        self.colors.resolve(Color::ALL)
    }

    pub const fn resolved_sizes(&self) -> Option<&'static [Size]> {
        self.sizes.resolve(Size::ALL)
    }

    pub const fn resolved_variants(&self) -> Option<&'static [Variant]> {
        self.variants.resolve(Variant::ALL)
    }

    pub const fn resolved_shapes(&self) -> Option<&'static [Shape]> {
        self.shapes.resolve(Shape::ALL)
    }

    pub const fn resolved_activity(&self) -> Option<&'static [Activity]> {
        self.activity.resolve(Activity::ALL)
    }

    pub const fn resolved_placement(&self) -> Option<&'static [Placement]> {
        self.placement.resolve(Placement::ALL)
    }

    pub const fn resolved_alignment(&self) -> Option<&'static [Alignment]> {
        self.alignment.resolve(Alignment::ALL)
    }

    pub const fn resolved_orientation(&self) -> Option<&'static [Orientation]> {
        self.orientation.resolve(Orientation::ALL)
    }
}

impl Default for ComponentCaps {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_distinguishes_the_three_cases() {
        let unsupported: Support<Size> = Support::Unsupported;
        assert_eq!(unsupported.resolve(Size::ALL), None);

        let full: Support<Size> = Support::Full;
        assert_eq!(full.resolve(Size::ALL), Some(Size::ALL));

        let subset: Support<Size> = Support::Subset(&[Size::Sm, Size::Lg]);
        assert_eq!(subset.resolve(Size::ALL), Some(&[Size::Sm, Size::Lg][..]));
    }

    #[test]
    fn empty_record_supports_nothing() {
        let caps = ComponentCaps::none();
        assert!(caps.supported_dimensions().is_empty());
        for dimension in Dimension::ALL {
            assert!(!caps.supports(*dimension));
        }
    }

    #[test]
    fn supported_dimensions_follow_fixed_order() {
        let caps = ComponentCaps {
            placement: Support::Subset(&[Placement::Top]),
            sizes: Support::Full,
            ..ComponentCaps::none()
        };
        assert_eq!(
            caps.supported_dimensions(),
            vec![Dimension::Sizes, Dimension::Placement]
        );
    }

    #[test]
    fn unsupported_dimensions_are_omitted_from_serialized_form() {
        let caps = ComponentCaps {
            sizes: Support::Full,
            ..ComponentCaps::none()
        };
        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(json, r#"{"sizes":true}"#);
    }

    #[test]
    fn records_serialize_as_flags_and_bare_arrays() {
        let caps = ComponentCaps {
            colors: Support::Full,
            variants: Support::Subset(&[Variant::Ghost]),
            ..ComponentCaps::none()
        };
        let json = serde_json::to_string(&caps).unwrap();
        assert_eq!(json, r#"{"colors":true,"variants":["ghost"]}"#);
    }
}
