pub mod coordinator;
pub mod use_cases;

pub use coordinator::*;
pub use use_cases::*;
