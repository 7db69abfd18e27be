//! CLI command implementations.

pub mod branch;
pub mod check;
pub mod commit;
pub mod pull;
pub mod push;
pub mod remote_add;
pub mod status;
pub mod upstream;
