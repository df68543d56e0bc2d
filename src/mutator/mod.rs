//! Form field mutation.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `protocols` | Per-control event sequences ([`click`], [`type_value`], ...) |
//! | `core` | [`FormMutator`]: selector dispatch and fill-out |
//! | `builder` | [`FormMutatorBuilder`] |
//! | `options` | [`MutatorOptions`] |
//! | `field` | [`FieldType`] discriminator |
//! | `value` | [`FieldValue`] and [`Selection`] |
//! | `fill` | [`FillOut`] plans and [`FillReport`] |
//! | `outcome` | [`Outcome`] and [`SkipReason`] |

// ============================================================================
// Submodules
// ============================================================================

mod builder;
mod core;
mod field;
mod fill;
mod options;
mod outcome;
mod protocols;
mod value;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::FormMutatorBuilder;
pub use self::core::{FormMutator, NoDocument};
pub use field::FieldType;
pub use fill::{FieldReport, FillOut, FillReport};
pub use options::MutatorOptions;
pub use outcome::{Outcome, SkipReason, succeeded};
pub use protocols::{
    CLICK_SEQUENCE, TOGGLE_SEQUENCE, TYPE_SEQUENCE, click, deselect_by_text, select_by_text,
    toggle_checkbox, type_value,
};
pub use value::{FieldValue, Selection};
