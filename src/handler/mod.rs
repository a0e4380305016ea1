pub mod error;
pub mod gold;
pub mod preferences;
pub mod root;
pub mod sentiment;
pub mod vdj;
