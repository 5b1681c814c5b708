pub mod field;
pub mod record;

pub use field::Field;
pub use record::{FieldValue, HealthRecord};
