//! Patient/prescription registry and the per-patient prescription index.

use std::collections::BTreeMap;

use tally_core::{KeyedStore, StoreResult};

use crate::patient::Patient;
use crate::prescription::Prescription;

/// Prescriptions grouped by patient.
///
/// Built once from a prescription sequence; the index is a detached copy and
/// does not follow later registry mutation.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionIndex {
    by_patient: BTreeMap<u32, Vec<Prescription>>,
}

impl PrescriptionIndex {
    pub fn build<I>(prescriptions: I) -> Self
    where
        I: IntoIterator<Item = Prescription>,
    {
        let mut by_patient: BTreeMap<u32, Vec<Prescription>> = BTreeMap::new();
        for prescription in prescriptions {
            by_patient
                .entry(prescription.patient_id)
                .or_default()
                .push(prescription);
        }
        Self { by_patient }
    }

    /// Prescriptions issued to `patient_id`, in the order they were indexed.
    ///
    /// Empty slice when the patient has none.
    pub fn for_patient(&self, patient_id: u32) -> &[Prescription] {
        self.by_patient
            .get(&patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of patients with at least one prescription.
    pub fn patient_count(&self) -> usize {
        self.by_patient.len()
    }
}

/// Registry holding one keyed store per record kind.
#[derive(Debug, Clone, Default)]
pub struct HealthRegistry {
    patients: KeyedStore<Patient>,
    prescriptions: KeyedStore<Prescription>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_patient(&mut self, patient: Patient) -> StoreResult<()> {
        self.patients.add(patient)
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> StoreResult<()> {
        self.prescriptions.add(prescription)
    }

    pub fn patient(&self, id: u32) -> StoreResult<&Patient> {
        self.patients.get(id)
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.snapshot()
    }

    pub fn prescriptions(&self) -> Vec<Prescription> {
        self.prescriptions.snapshot()
    }

    /// Build the per-patient index from the current prescription set.
    pub fn prescription_index(&self) -> PrescriptionIndex {
        PrescriptionIndex::build(self.prescriptions.snapshot())
    }
}
