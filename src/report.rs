use std::io::{self, Write};

use scraper::Html;

use crate::{
    crawler::tgju,
    declare::{Currency, PriceResult},
};

/// Spaces between the label column and the price column.
const COLUMN_PADDING: usize = 3;

/// Prices every target from the one fetched document.
///
/// A failure is kept in that target's result; the remaining targets are still processed.
pub fn process_targets(document: &Html, targets: &[Currency]) -> Vec<PriceResult> {
    targets
        .iter()
        .map(|&currency| {
            let outcome = tgju::price::fetch_price(document, currency);
            match &outcome {
                Ok(price) => tracing::debug!("{} = {}", currency.label(), price),
                // 錯誤已顯示在該列，不另外輸出
                Err(why) => tracing::debug!(
                    "Failed to read {}({}) because {}",
                    currency.label(),
                    currency.slug(),
                    why
                ),
            }
            PriceResult::new(currency, outcome)
        })
        .collect()
}

/// Writes one aligned row per result: the label, then the price or `Error: <message>`.
pub fn write_results<W: Write>(out: &mut W, results: &[PriceResult]) -> io::Result<()> {
    let width = results
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING;

    for result in results {
        match &result.outcome {
            Ok(price) => writeln!(out, "{:<width$}{}", result.label, price, width = width)?,
            Err(why) => writeln!(out, "{:<width$}Error: {}", result.label, why, width = width)?,
        }
    }

    out.flush()
}
