// Re-export all model types for ease of use

pub mod coerce;
pub mod mentor;
pub mod student;
pub mod responses;

// Re-export commonly used types
pub use mentor::*;
pub use student::*;
pub use responses::*;
