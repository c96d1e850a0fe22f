//! # KEYGRAB UI
//!
//! Keyboard selection and sorting of items in a group, on top of the
//! grab/release core.
//!
//! ## Flow
//!
//! ```text
//! host key down/up ──> KeyRepeater ──> KeyFire ──┐
//! host tick(now) ──────────┘                     │
//!                                                ▼
//!                              SortInteractionController
//!                               │        │          │
//!                     DeltaResolver  GrabDragModel  SortableGroup
//!                     (range, steps) (keygrab_core) (host items)
//! ```
//!
//! Idle: sorting keys move the selection. Grabbed: the same keys change
//! the selected item's value, saturated at the range bounds.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod controller;
pub mod delta;
pub mod input;
pub mod range;
pub mod repeat;

pub use config::{ConfigError, InteractionConfig};
pub use controller::{DispatchOutcome, SortInteractionController, SortableGroup};
pub use delta::{is_sorting_chord, resolve_delta, DeltaResolver};
pub use input::{Key, KeyChord, Modifiers};
pub use range::{SortingRange, StepConfiguration};
pub use repeat::{FireKind, KeyFire, KeyRepeater, RepeatTiming};

pub use keygrab_core;
