//! Reduces a DexScreener response to the records that get displayed and sent.
//!
//! Two lookup policies apply and must stay distinct: the base token's name and
//! address are required and fail the whole analysis when absent, while price
//! and 24h volume fall back to zero when absent (but not when present and
//! unusable, e.g. `null`).

use log::{debug, info};
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::market::kind;
use crate::models::{AnalyzedRecord, RawMarketResponse};

/// Number of leading pairs taken from each response.
pub const TOP_PAIRS: usize = 5;

const NAME_PATH: &[&str] = &["baseToken", "name"];
const ADDRESS_PATH: &[&str] = &["baseToken", "address"];
const PRICE_PATH: &[&str] = &["priceUsd"];
const VOLUME_PATH: &[&str] = &["volume", "h24"];

/// Projects the first `TOP_PAIRS` pairs, in source order, into records.
pub fn analyze(raw: &RawMarketResponse) -> Result<Vec<AnalyzedRecord>> {
    let pairs = raw.pairs()?;
    let records = pairs
        .iter()
        .take(TOP_PAIRS)
        .enumerate()
        .map(|(index, pair)| analyze_pair(index, pair))
        .collect::<Result<Vec<_>>>()?;

    info!("Analyzed {} of {} pairs", records.len(), pairs.len());
    Ok(records)
}

pub fn analyze_pair(index: usize, pair: &Value) -> Result<AnalyzedRecord> {
    let name = required_str(index, pair, NAME_PATH)?;
    let contract_address = required_str(index, pair, ADDRESS_PATH)?;
    let price = optional_amount(index, pair, PRICE_PATH)?;
    let volume = optional_amount(index, pair, VOLUME_PATH)?;

    let record = AnalyzedRecord {
        name,
        contract_address,
        description: describe(&price, &volume),
    };
    debug!("Pair {}: {:?}", index, record);
    Ok(record)
}

pub fn describe(price: &str, volume: &str) -> String {
    format!("Price: {} USD, Volume: {}", price, volume)
}

/// Formats a decimal value with exactly two fractional digits, rounding the
/// shortest decimal form half away from zero.
pub fn format_amount(text: &str) -> Option<String> {
    if let Some(value) = parse_decimal(text) {
        return Some(format_decimal(value));
    }
    // Beyond Decimal's range
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| format!("{:.2}", value))
}

fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .ok()
        .or_else(|| Decimal::from_scientific(text).ok())
}

/// Walks `path` through nested objects. `Ok(None)` only when a key is
/// absent; stepping into anything but an object is malformed.
fn lookup<'a>(index: usize, pair: &'a Value, path: &[&str]) -> Result<Option<&'a Value>> {
    let mut current = pair;
    for (depth, key) in path.iter().enumerate() {
        let object = current.as_object().ok_or_else(|| {
            let parent = if depth == 0 {
                "pair entry".to_string()
            } else {
                format!("`{}`", path[..depth].join("."))
            };
            Error::MalformedDataError(format!(
                "pair {}: expected {} to be an object, found {}",
                index,
                parent,
                kind(current)
            ))
        })?;
        match object.get(*key) {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

fn required_str(index: usize, pair: &Value, path: &[&str]) -> Result<String> {
    let field = path.join(".");
    match lookup(index, pair, path)? {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(Error::MalformedDataError(format!(
            "pair {}: expected `{}` to be a string, found {}",
            index,
            field,
            kind(other)
        ))),
        None => Err(Error::MalformedDataError(format!(
            "pair {}: missing required field `{}`",
            index, field
        ))),
    }
}

fn optional_amount(index: usize, pair: &Value, path: &[&str]) -> Result<String> {
    let field = path.join(".");
    let text = match lookup(index, pair, path)? {
        None => return Ok(format_decimal(Decimal::ZERO)),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.trim().to_string(),
        Some(other) => {
            return Err(Error::MalformedDataError(format!(
                "pair {}: expected `{}` to be numeric, found {}",
                index,
                field,
                kind(other)
            )))
        }
    };

    format_amount(&text).ok_or_else(|| {
        Error::MalformedDataError(format!(
            "pair {}: `{}` is not a number: {:?}",
            index, field, text
        ))
    })
}
