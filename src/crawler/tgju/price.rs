use scraper::Html;

use crate::{
    declare::Currency,
    error::PriceError,
    util::{http::element, text::format_with_commas},
};

/// Every quoted row carries its slug in this attribute.
const ROW_SELECTOR: &str = "tr[data-market-nameslug]";
const SLUG_ATTR: &str = "data-market-nameslug";
const PRICE_ATTR: &str = "data-price";

/// The page quotes in Rial; one Toman is ten Rial.
///
/// Hard-coded: if the site ever quotes in another unit the printed prices will
/// be wrong without any error.
pub const RIAL_PER_TOMAN: i64 = 10;

/// Returns the raw `data-price` of the first row whose slug equals `slug`.
///
/// The value comes back exactly as written on the page, grouping commas included.
pub fn extract_price(document: &Html, slug: &str) -> Result<String, PriceError> {
    let row = element::find_by_attr(document, ROW_SELECTOR, SLUG_ATTR, slug)
        .ok_or(PriceError::RowNotFound)?;

    element::attr_value(&row, PRICE_ATTR).ok_or(PriceError::AttributeMissing)
}

/// Converts a Rial price such as `"1,234,500"` into a formatted Toman price
/// such as `"123,450"`. The division truncates toward zero.
///
/// Only the grouping commas and surrounding whitespace are dropped; any other
/// character, including a space between digits, makes the price invalid.
pub fn parse_to_toman(raw_price: &str) -> Result<String, PriceError> {
    let rial = raw_price
        .replace(',', "")
        .trim()
        .parse::<i64>()
        .map_err(|_| PriceError::InvalidNumberFormat(raw_price.to_string()))?;

    Ok(format_with_commas(rial / RIAL_PER_TOMAN))
}

/// 取得單一幣別的報價（已換算成 Toman）
pub fn fetch_price(document: &Html, currency: Currency) -> Result<String, PriceError> {
    parse_to_toman(&extract_price(document, currency.slug())?)
}
