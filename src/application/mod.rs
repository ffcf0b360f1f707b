//! Application Layer
//!
//! Use cases that orchestrate the domain services.
//!
//! - `compile` - one request through the full pipeline
//! - `Selection` - mode, contract, traits and profiles into a request
//! - `diagnose` - whole-pack health check
//! - `render_explain` - how a compile arrived at its document

pub mod compiler;
pub mod doctor;
pub mod explain;
pub mod selection;

pub use compiler::{compile, CompileMeta, CompileRequest, CompileResult};
pub use doctor::{
    diagnose, diagnose_source, DoctorOptions, DoctorReport, DoctorStats, DoctorStatus, DOCTOR_FAILURE_EXIT_CODE,
};
pub use explain::render_explain;
pub use selection::{Selection, SelectionOverrides, REVISIONS_POLICY_ID};
