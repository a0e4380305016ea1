pub mod gold_price;
pub mod preferences;
pub mod sentiment;
pub mod upstream;
pub mod vdj;
