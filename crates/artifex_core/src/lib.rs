//! # ARTIFEX Core
//!
//! Foundation shared by the city, terrain and weapon pipelines.
//!
//! ## Data Flow
//!
//! ```text
//! Parameters ──> SeedStream ──> Staged Derivation ──> Entity Graph ──> Document
//!   (config)      (stream)        (pipeline crate)      (pipeline)     (document)
//! ```
//!
//! ## CRITICAL RULE
//!
//! Every random draw goes through a [`SeedStream`] built from a [`StreamKey`]
//! that is unique to the entity being generated. Never share one stream
//! between unrelated entities.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod document;
pub mod error;
pub mod math;
pub mod stream;

pub use config::{load_toml, Validate};
pub use document::{Document, Exportable, ObjectBuilder};
pub use error::{GenerationError, GenerationResult};
pub use math::Vec3;
pub use stream::{GenerationSeed, SeedStream, StreamKey};
