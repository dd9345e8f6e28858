use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Supported currency prefixes.
///
/// [`Currency::BY_PRIORITY`] lists two-character symbols first so that
/// `C$20,000` is read as Canadian dollars rather than `$20,000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    CanadianDollar,
    AustralianDollar,
    Dollar,
    Euro,
    Pound,
    Yen,
    Rupee,
}

impl Currency {
    pub const BY_PRIORITY: [Currency; 7] = [
        Currency::CanadianDollar,
        Currency::AustralianDollar,
        Currency::Dollar,
        Currency::Euro,
        Currency::Pound,
        Currency::Yen,
        Currency::Rupee,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::CanadianDollar => "C$",
            Self::AustralianDollar => "A$",
            Self::Dollar => "$",
            Self::Euro => "€",
            Self::Pound => "£",
            Self::Yen => "¥",
            Self::Rupee => "₹",
        }
    }

    fn is_single_char(&self) -> bool {
        self.symbol().chars().count() == 1
    }

    /// True when the symbol ending at `symbol_end` is really the tail of a
    /// higher-priority symbol, like the `$` inside `C$`.
    fn is_tail_of_longer(&self, text: &str, symbol_end: usize) -> bool {
        let head = &text[..symbol_end];
        Self::BY_PRIORITY
            .iter()
            .take_while(|other| *other != self)
            .any(|other| other.symbol().ends_with(self.symbol()) && head.ends_with(other.symbol()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A currency-prefixed amount with a usable (positive) value.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceToken {
    pub currency: Currency,
    pub value: f64,
    pub display: String,
}

/// A currency-prefixed amount as it appeared in the text, not yet validated.
#[derive(Debug, Clone)]
pub(crate) struct RawPrice {
    currency: Currency,
    amount: String,
}

impl RawPrice {
    pub(crate) fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.amount)
    }

    /// Strip separators and parse; non-positive or unparseable amounts yield `None`.
    pub(crate) fn to_token(&self) -> Option<PriceToken> {
        let value = self.amount.replace(',', "").parse::<f64>().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        Some(PriceToken {
            currency: self.currency,
            value,
            display: self.display(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriceLabel {
    Minimum,
    Maximum,
    MostLikely,
}

impl PriceLabel {
    fn pattern(&self) -> &'static str {
        match self {
            Self::Minimum => r"minimum\s+value",
            Self::Maximum => r"maximum\s+value",
            Self::MostLikely => r"most\s+likely\s+price",
        }
    }
}

// Western (12,500) and Indian (5,50,000) digit grouping, or plain digits.
const AMOUNT: &str = r"(\d{1,3}(?:,\d{2,3})*,\d{3}(?:\.\d+)?|\d+(?:\.\d+)?)";

struct CurrencyPatterns {
    currency: Currency,
    bare: Regex,
    minimum: Regex,
    maximum: Regex,
    most_likely: Regex,
}

pub(crate) struct PricePatterns {
    by_currency: Vec<CurrencyPatterns>,
}

static PATTERNS: LazyLock<Result<PricePatterns, regex::Error>> =
    LazyLock::new(PricePatterns::compile);

/// The compiled pattern set, built once per process.
pub(crate) fn patterns() -> Result<&'static PricePatterns, String> {
    PATTERNS
        .as_ref()
        .map_err(|e| format!("price patterns failed to compile: {e}"))
}

impl PricePatterns {
    fn compile() -> Result<Self, regex::Error> {
        let by_currency = Currency::BY_PRIORITY
            .iter()
            .map(|&currency| {
                let symbol = regex::escape(currency.symbol());
                // Letter-prefixed dollars (US$, NZ$) read as plain dollars.
                let prefix = if currency.is_single_char() { r"(?:[A-Z]{1,3})?" } else { "" };
                let labeled = |label: PriceLabel| {
                    Regex::new(&format!(
                        r"(?i){}[*\s]*:[*\s]*{prefix}{symbol}\s?{AMOUNT}",
                        label.pattern()
                    ))
                };
                Ok(CurrencyPatterns {
                    currency,
                    bare: Regex::new(&format!(r"{symbol}\s?{AMOUNT}"))?,
                    minimum: labeled(PriceLabel::Minimum)?,
                    maximum: labeled(PriceLabel::Maximum)?,
                    most_likely: labeled(PriceLabel::MostLikely)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self { by_currency })
    }

    fn for_currency(&self, currency: Currency) -> Option<&CurrencyPatterns> {
        self.by_currency.iter().find(|p| p.currency == currency)
    }

    /// First `<label>: <symbol><amount>` occurrence for `currency`.
    pub(crate) fn labeled(&self, text: &str, label: PriceLabel, currency: Currency) -> Option<RawPrice> {
        let patterns = self.for_currency(currency)?;
        let regex = match label {
            PriceLabel::Minimum => &patterns.minimum,
            PriceLabel::Maximum => &patterns.maximum,
            PriceLabel::MostLikely => &patterns.most_likely,
        };
        let caps = regex.captures(text)?;
        Some(RawPrice {
            currency,
            amount: caps.get(1)?.as_str().to_string(),
        })
    }

    /// Every `<symbol><amount>` occurrence for `currency`, in text order.
    ///
    /// A symbol that is the tail of a higher-priority one (`C$`, `A$`) is
    /// skipped. Other letter prefixes such as `US$` are kept.
    pub(crate) fn scan(&self, text: &str, currency: Currency) -> Vec<RawPrice> {
        let Some(patterns) = self.for_currency(currency) else {
            return Vec::new();
        };

        patterns
            .bare
            .captures_iter(text)
            .filter(|caps| {
                let start = caps.get(0).map_or(0, |m| m.start());
                !currency.is_tail_of_longer(text, start + currency.symbol().len())
            })
            .filter_map(|caps| {
                caps.get(1).map(|m| RawPrice {
                    currency,
                    amount: m.as_str().to_string(),
                })
            })
            .collect()
    }
}
