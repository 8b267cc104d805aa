mod currency;

pub use currency::{format_currency, CURRENCY_SUFFIX};

pub type AccountId = u32;
