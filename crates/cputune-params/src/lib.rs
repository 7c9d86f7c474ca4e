//! The CPU tuning record and the machinery that applies JSON overrides to it.
//!
//! [`TuneParams`] and its tables mirror the AArch64 backend's tuning
//! structures. [`Binder`] applies a `tune_params` JSON object onto a record
//! through the field tables in [`fields`], and [`profiles`] provides the base
//! records that overrides start from.

pub mod bind;
pub mod enums;
pub mod fields;
pub mod flags;
pub mod params;
pub mod profiles;
pub mod tables;

pub use bind::{Bind, Binder, Field, FieldInfo, FieldKind, FieldShape, MismatchLevel};
pub use enums::{AutoprefetchModel, LdpStpPolicy, TuneEnum};
pub use params::TuneParams;
pub use profiles::{DEFAULT_PROFILE, PROFILES, Profile, UnknownProfile, find_profile};
