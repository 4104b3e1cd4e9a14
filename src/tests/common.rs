// Shared fixtures for unit tests.
use serde_json::{json, Value};

use crate::models::{AnalyzedRecord, RawMarketResponse};

/// A pair entry shaped like the DexScreener tokens endpoint returns it.
pub fn pair(name: &str, address: &str, price_usd: Value, volume_h24: Value) -> Value {
    json!({
        "chainId": "solana",
        "dexId": "raydium",
        "pairAddress": format!("{}-pair", address),
        "baseToken": {"address": address, "name": name, "symbol": name.to_uppercase()},
        "quoteToken": {"address": "So11111111111111111111111111111111111111112", "name": "Wrapped SOL", "symbol": "SOL"},
        "priceNative": "0.0001",
        "priceUsd": price_usd,
        "volume": {"h24": volume_h24, "h6": 1, "h1": 1, "m5": 0},
        "liquidity": {"usd": 1000.0}
    })
}

pub fn response(pairs: Vec<Value>) -> RawMarketResponse {
    RawMarketResponse::new(json!({"schemaVersion": "1.0.0", "pairs": pairs}))
}

pub fn record(name: &str, address: &str) -> AnalyzedRecord {
    AnalyzedRecord {
        name: name.to_string(),
        contract_address: address.to_string(),
        description: "Price: 1.00 USD, Volume: 2.00".to_string(),
    }
}
