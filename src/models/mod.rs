pub mod market;

pub use market::{AnalyzedRecord, RawMarketResponse};
