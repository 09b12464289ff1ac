//! Tick wire format import and export
//!
//! One record per row, fields
//! `timestamp, exchange_id, price, volume, bid, ask, liquidity_level`.
//! Import coerces numeric fields one by one; a row with any uncoercible
//! numeric field is skipped and counted, never fatal. Export quotes string
//! fields containing the separator.

use rust_decimal::prelude::*;
use std::str::FromStr;

use crate::errors::{SimError, SimResult};
use crate::types::Tick;

pub const TICK_CSV_HEADER: &str = "timestamp,exchange_id,price,volume,bid,ask,liquidity_level";

/// Import result: the parsed ticks plus how many malformed rows were
/// dropped on the way.
#[derive(Debug)]
pub struct TickImport {
    pub ticks: Vec<Tick>,
    pub skipped_rows: usize,
}

/// Parse the tick wire format.
///
/// The header row is required; malformed data rows are skipped and
/// reported through [`TickImport::skipped_rows`].
pub fn import_ticks(input: &str) -> SimResult<TickImport> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or_else(|| SimError::DataParsing {
        context: "empty input, expected a header row".to_string(),
        source: None,
    })?;
    if split_row(header)
        .iter()
        .map(|f| f.trim())
        .collect::<Vec<_>>()
        != TICK_CSV_HEADER.split(',').collect::<Vec<_>>()
    {
        return Err(SimError::DataParsing {
            context: format!("unexpected header: {header}"),
            source: None,
        });
    }

    let mut ticks = Vec::new();
    let mut skipped_rows = 0;

    for line in lines {
        match parse_row(line) {
            Some(tick) => ticks.push(tick),
            None => skipped_rows += 1,
        }
    }

    Ok(TickImport {
        ticks,
        skipped_rows,
    })
}

/// Serialize ticks back to the wire format, header included.
pub fn export_ticks(ticks: &[Tick]) -> String {
    let mut out = String::from(TICK_CSV_HEADER);
    for tick in ticks {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{},{},{}",
            tick.timestamp,
            quote_field(&tick.exchange_id),
            tick.price,
            tick.volume,
            tick.bid,
            tick.ask,
            tick.liquidity_level,
        ));
    }
    out
}

fn parse_row(line: &str) -> Option<Tick> {
    let fields = split_row(line);
    if fields.len() != 7 {
        return None;
    }

    Some(Tick {
        timestamp: parse_timestamp(&fields[0])?,
        exchange_id: fields[1].clone(),
        price: parse_decimal(&fields[2])?,
        volume: parse_decimal(&fields[3])?,
        bid: parse_decimal(&fields[4])?,
        ask: parse_decimal(&fields[5])?,
        liquidity_level: parse_decimal(&fields[6])?,
    })
}

fn parse_timestamp(field: &str) -> Option<i64> {
    let field = field.trim();
    field
        .parse::<i64>()
        .ok()
        .or_else(|| field.parse::<f64>().ok().map(|f| f as i64))
}

fn parse_decimal(field: &str) -> Option<Decimal> {
    let field = field.trim();
    Decimal::from_str(field)
        .ok()
        .or_else(|| field.parse::<f64>().ok().and_then(Decimal::from_f64))
}

/// Split one row on commas, honoring double-quoted fields with `""` escapes.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
