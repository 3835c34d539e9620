//----------------------------------------
// integration mod
//----------------------------------------
pub mod error;
pub mod simpson;
