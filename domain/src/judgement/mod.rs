//! Eligibility judgement
//!
//! - [`result::JudgementResult`]: the immutable per-entry verdict
//! - [`stage::JudgementStage`]: the Primary → ExtinctCheck → UniqueCheck → Settled machine

pub mod result;
pub mod stage;

pub use result::{EntryError, EntryTag, INVALID_ENTRY_NAME, JudgementResult};
pub use stage::{JudgementStage, LookupScope, PopulationCodes};
