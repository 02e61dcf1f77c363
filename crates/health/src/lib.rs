//! Health records domain module.
//!
//! Patient and prescription records plus the patient→prescriptions index.

pub mod patient;
pub mod prescription;
pub mod registry;

pub use patient::{Gender, Patient};
pub use prescription::Prescription;
pub use registry::{HealthRegistry, PrescriptionIndex};
