//----------------------------------------
// normal mod
//----------------------------------------
pub mod error;
pub mod pdf;
pub mod types;
