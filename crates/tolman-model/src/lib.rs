pub mod ids;
pub mod item;
pub mod payload;
pub mod validation;

pub use ids::{ItemId, ToleranceId};
pub use item::{Item, Tolerance};
pub use payload::{SubmissionEntry, SubmissionPayload};
pub use validation::{TOLERANCE_A_NAME, TOLERANCE_B_NAME, ValidationError};
