//----------------------------------------
// probability mod
//----------------------------------------
pub mod compute_probability;
pub mod error;
pub mod types;
