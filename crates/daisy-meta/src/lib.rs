//! Design-system metadata for daisyUI-style utility classes.
//!
//! This crate is the source of truth for which style modifiers each UI
//! component accepts: the token enumerations (colors, sizes, placements, ...),
//! the per-component capability registry, and the [`Meta`] aggregate bundling
//! both. Everything is built once and never changes for the life of the
//! process; lookups signal failure structurally (`None`), never by error.
//!
//! Downstream tooling (class-name builders, safelist generators) reads this
//! data to decide which utility-class combinations are valid.
//!
//! ```
//! use daisy_meta::{capabilities_for, Variant};
//!
//! // badge takes every variant except `link`
//! let badge = capabilities_for("badge").unwrap();
//! let variants = badge.resolved_variants().unwrap();
//! assert!(!variants.contains(&Variant::Link));
//!
//! // unregistered component: no modifiers may be applied
//! assert!(capabilities_for("blink").is_none());
//! ```

mod capability;
mod meta;
mod registry;
mod tokens;

pub use capability::{ComponentCaps, Dimension, Support};
pub use meta::{Meta, meta};
pub use registry::{capabilities_for, components, registry};
pub use tokens::{
    Activity, Alignment, Color, Orientation, Placement, Shape, Size, UnknownToken, Variant,
};
