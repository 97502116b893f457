//! Account names, symbols and assets.
//!
//! Amounts are signed integers in minor units, tagged with a [`Symbol`] that
//! carries the decimal precision: `"1.0000 EOS"` is an amount of `10_000`
//! with symbol `4,EOS`. Names, symbols and assets serialize as their display
//! strings, so a JSON table row reads the same way a block explorer prints it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_ASSET_AMOUNT, MAX_NAME_LEN, MAX_PRECISION, MAX_SYMBOL_CODE_LEN, MINE_CONTRACT,
    REWARD_PRECISION, REWARD_SYMBOL_CODE, SWAP_CONTRACT,
};
use crate::error::AssetError;

/// An account name: 1 to 12 characters from `a-z`, `1-5` and `.`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validate and wrap an account name.
    pub fn new(name: &str) -> Result<Self, AssetError> {
        let valid = !name.is_empty()
            && name.len() <= MAX_NAME_LEN
            && !name.ends_with('.')
            && name
                .bytes()
                .all(|b| matches!(b, b'a'..=b'z' | b'1'..=b'5' | b'.'));
        if !valid {
            return Err(AssetError::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    /// Default owner of the `pairs` and `config` tables.
    pub fn swap_contract() -> Self {
        Self(SWAP_CONTRACT.to_string())
    }

    /// Default owner of the `pools` table.
    pub fn mine_contract() -> Self {
        Self(MINE_CONTRACT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = AssetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A currency ticker: 1 to 7 uppercase ASCII letters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(String);

impl SymbolCode {
    /// Validate and wrap a symbol code.
    pub fn new(code: &str) -> Result<Self, AssetError> {
        let valid = !code.is_empty()
            && code.len() <= MAX_SYMBOL_CODE_LEN
            && code.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(AssetError::InvalidSymbolCode(code.to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SymbolCode {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = AssetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.0
    }
}

/// A symbol code together with its decimal precision, written `"4,EOS"`.
///
/// Two symbols are equal only when both code and precision match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    code: SymbolCode,
    precision: u8,
}

impl Symbol {
    pub fn new(code: &str, precision: u8) -> Result<Self, AssetError> {
        if precision > MAX_PRECISION {
            return Err(AssetError::InvalidPrecision(precision.to_string()));
        }
        Ok(Self {
            code: SymbolCode::new(code)?,
            precision,
        })
    }

    /// The trade-mining payout symbol, `6,HBG`.
    pub fn reward() -> Self {
        Self {
            code: SymbolCode(REWARD_SYMBOL_CODE.to_string()),
            precision: REWARD_PRECISION,
        }
    }

    pub fn code(&self) -> &SymbolCode {
        &self.code
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Whether the ticker equals `code`, ignoring precision.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_str() == code
    }

    /// Minor units per whole token, `10^precision`.
    pub fn scale(&self) -> i64 {
        10i64.pow(u32::from(self.precision))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| AssetError::InvalidSymbol(s.to_string()))?;
        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| AssetError::InvalidPrecision(precision.to_string()))?;
        Self::new(code.trim(), precision)
    }
}

impl TryFrom<String> for Symbol {
    type Error = AssetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

/// A symbol qualified by the token contract that issues it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedSymbol {
    pub sym: Symbol,
    pub contract: Name,
}

impl fmt::Display for ExtendedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.sym, self.contract)
    }
}

/// A quantity of a token in minor units.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    pub amount: i64,
    pub symbol: Symbol,
}

impl Asset {
    /// Build an asset, rejecting amounts outside `±(2^62 - 1)`.
    pub fn new(amount: i64, symbol: Symbol) -> Result<Self, AssetError> {
        let asset = Self { amount, symbol };
        if !asset.is_amount_within_range() {
            return Err(AssetError::AmountOutOfRange(amount.to_string()));
        }
        Ok(asset)
    }

    pub fn zero(symbol: Symbol) -> Self {
        Self { amount: 0, symbol }
    }

    pub fn is_amount_within_range(&self) -> bool {
        (-MAX_ASSET_AMOUNT..=MAX_ASSET_AMOUNT).contains(&self.amount)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        let precision = usize::from(self.symbol.precision);
        if precision == 0 {
            return write!(f, "{sign}{abs} {}", self.symbol.code);
        }
        let scale = self.symbol.scale().unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0precision$} {}",
            abs / scale,
            abs % scale,
            self.symbol.code
        )
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    /// Parse `"<amount> <CODE>"`; the number of fraction digits sets the precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AssetError::InvalidAsset(s.to_string());

        let (number, code) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let (negative, digits) = match number.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, number),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((whole, fraction)) => (whole, fraction),
            None => (digits, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let precision = u8::try_from(fraction.len())
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .ok_or_else(|| AssetError::InvalidPrecision(fraction.len().to_string()))?;
        let symbol = Symbol::new(code.trim(), precision)?;

        let out_of_range = || AssetError::AmountOutOfRange(number.to_string());
        let whole: i64 = whole.parse().map_err(|_| out_of_range())?;
        let fraction: i64 = if fraction.is_empty() {
            0
        } else {
            fraction.parse().map_err(|_| out_of_range())?
        };
        let magnitude = whole
            .checked_mul(symbol.scale())
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(out_of_range)?;

        Self::new(if negative { -magnitude } else { magnitude }, symbol)
    }
}

impl TryFrom<String> for Asset {
    type Error = AssetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}
