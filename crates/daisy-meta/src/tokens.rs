//! Style token enumerations, one per styling dimension.
//!
//! Each enumeration is a fixed, ordered, duplicate-free list of the utility-class
//! tokens permitted for that dimension. Declaration order is the order consumers
//! iterate in (safelist output depends on it), so new values go where they belong
//! in the design scale, not at the end by habit.
//!
//! Membership is the only validation rule: tokens compare by exact string
//! equality, with no casing or alias normalization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token not present in the dimension's enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {dimension} token: {token:?}")]
pub struct UnknownToken {
    pub dimension: &'static str,
    pub token: String,
}

macro_rules! style_tokens {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The exact utility-class token for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(UnknownToken {
                        dimension: stringify!($name),
                        token: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

style_tokens! {
    /// Semantic color names. Custom theme colors extend this list.
    Color {
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
        Info => "info",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Neutral => "neutral",
    }
}

style_tokens! {
    /// Positional placements relative to a component (tooltips, dropdowns, modals).
    Placement {
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
        Start => "start",
        End => "end",
        Middle => "middle",
    }
}

style_tokens! {
    /// Flex/grid alignment within a container.
    Alignment {
        Start => "start",
        Center => "center",
        End => "end",
    }
}

style_tokens! {
    /// Structural orientation for linear components like dividers and menus.
    Orientation {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

style_tokens! {
    /// Sizing scale, extra-small through extra-large.
    Size {
        Xs => "xs",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
    }
}

style_tokens! {
    /// Visual variant styles (outline vs ghost and friends).
    Variant {
        Dash => "dash",
        Outline => "outline",
        Ghost => "ghost",
        Link => "link",
        Soft => "soft",
    }
}

style_tokens! {
    /// Border-radius shaping modifiers.
    Shape {
        Square => "square",
        Circle => "circle",
    }
}

style_tokens! {
    /// Interactive state modifiers applied as explicit classes.
    /// hover/focus stay pseudo-classes and are not tokens here.
    Activity {
        Active => "active",
        Disabled => "disabled",
    }
}
