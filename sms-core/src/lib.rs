#![warn(missing_docs)]
//! Core types for the sensor management registry.
//!
//! The registry records where configurations (assembled sets of devices and
//! platforms) were located and when devices were mounted to them. This crate
//! holds the storage-agnostic half of that system: the domain models, the
//! repository ports an adapter must implement, and the validation that gates
//! writes of location actions.

/// Core domain models for the registry.
///
/// The models in this module are plain data structures. Most of them are
/// parameterized by a [`ports::Repository`], so that identifiers and timestamps
/// take whatever concrete form the storage adapter prefers.
pub mod models;

/// Interface traits for the registry.
///
/// This module contains the "ports" in the hexagonal architecture pattern.
/// These traits define the contract between the validation logic and storage
/// adapters without specifying implementation details, which also lets tests
/// inject an in-memory data source.
pub mod ports;

/// Request validation for location action writes.
///
/// Location actions of a configuration must not overlap in time, and dynamic
/// location actions may only read measured quantities from devices that were
/// mounted for the whole location timeline.
pub mod validation;
