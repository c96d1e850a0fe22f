//! # KEYGRAB Core
//!
//! Keyboard-accessible grab/release interaction for draggable objects.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     INTERACTION CORE                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  GrabDragModel ──counts──> UsageTracker ──> CuePolicy     │
//! │       │                         │                         │
//! │  grabbed / released / reset   counters (observable)       │
//! │       ↓                                                   │
//! │  Emitter listeners: sound, speech, hint visuals           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//!
//! Everything runs synchronously inside one input callback. Types are
//! `Send + Sync` so a host may keep them behind an `Arc`, but no
//! transition ever suspends.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cue;
pub mod error;
pub mod event;
pub mod interaction;
pub mod property;
pub mod usage;

pub use cue::CueVisibilityPolicy;
pub use error::{InteractionError, InteractionResult};
pub use event::{Emitter, ListenerId};
pub use interaction::{GrabDragModel, InputModality, InteractionState};
pub use property::Property;
pub use usage::{UsageCounters, UsageTracker};
