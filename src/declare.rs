use crate::error::PriceError;

/// 支援查詢的幣別，宣告順序即輸出順序
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Currency {
    /// 美元
    Usd,
    /// 歐元
    Eur,
    /// 金幣
    Gold,
    /// 泰達幣 USDT
    Tether,
}

impl Currency {
    /// Label printed in the first column of the table.
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gold => "GOLD/COIN",
            Currency::Tether => "TETHER",
        }
    }

    /// Value of the row's `data-market-nameslug` attribute on the quote page.
    pub fn slug(&self) -> &'static str {
        match self {
            Currency::Usd => "price_dollar_rl",
            Currency::Eur => "price_eur",
            Currency::Gold => "sekee",
            Currency::Tether => "crypto-tether",
        }
    }

    /// Name of the command line flag that selects this currency.
    pub fn flag(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gold => "gold",
            Currency::Tether => "tether",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Currency::Usd => "Get United States Dollar price",
            Currency::Eur => "Get Euro price",
            Currency::Gold => "Get Gold Coin price",
            Currency::Tether => "Get Tether (USDT) price",
        }
    }

    pub fn iterator() -> impl Iterator<Item = Self> {
        [Self::Usd, Self::Eur, Self::Gold, Self::Tether].iter().copied()
    }
}

/// The outcome of pricing one currency: either a formatted Toman price or the
/// reason it could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceResult {
    pub label: &'static str,
    pub outcome: Result<String, PriceError>,
}

impl PriceResult {
    pub fn new(currency: Currency, outcome: Result<String, PriceError>) -> Self {
        PriceResult {
            label: currency.label(),
            outcome,
        }
    }
}
