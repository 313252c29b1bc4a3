use std::time::Duration;

use scraper::Html;

use crate::{error::FetchError, util};

pub mod price;

/// 報價頁面的主機
pub const HOST: &str = "www.tgju.org";

/// Downloads the quote page once. Every currency is priced from this one document.
pub async fn visit(url: &str, deadline: Duration) -> Result<Html, FetchError> {
    util::http::get_document(url, deadline).await
}
