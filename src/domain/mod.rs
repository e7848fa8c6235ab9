pub mod classifier;
pub mod content;
pub mod error;
pub mod input;
pub mod trace;

pub use classifier::{DEVOPS_MARKERS, Domain, classify};
pub use content::ContentSet;
pub use error::AppError;
pub use input::{TraceInput, normalize_field};
pub use trace::{
    BiasCheck, ContradictionScan, Counterfactual, DignityCheck, HarmProjection, Synthesis, Trace,
};
