//! # Device Snapshots
//!
//! Archived characterizations of quantum processors, as published by the
//! provider's simulator library. Two layouts exist in the wild:
//!
//! 1. **Target**: the newer per-qubit/per-operation view, with T1/T2 in seconds
//!    and operation calibrations keyed by the qubits they act on.
//! 2. **Legacy properties**: the whole-device `props_*.json` document with
//!    per-qubit `{name, unit, value}` entries.
//!
//! [`BackendSnapshot`] reads either layout and exposes both through the
//! [`DeviceSnapshot`] trait, which is what the extractor probes. The
//! [`Catalog`] groups snapshot files into hardware generations.

mod catalog;
mod device;
mod error;
mod properties;
mod target;


pub use catalog::{Catalog, DeviceEntry, GenerationSpec, HardwareGeneration};
pub use device::{display_name, BackendSnapshot, DeviceSnapshot, SnapshotDocument};
pub use error::SnapshotError;
pub use properties::{to_si, BackendProperties, GateProperties, Nduv};
pub use target::{InstructionProperties, QubitProperties, Target};
