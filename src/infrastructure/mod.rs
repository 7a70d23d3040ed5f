pub mod admission;

pub use admission::{AdmissionController, AdmissionPermit, AdmissionStats};
