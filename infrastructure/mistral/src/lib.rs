pub mod client;
pub mod receipt_extractor;
