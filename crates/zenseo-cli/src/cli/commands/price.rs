//! `zenseo price <value>` – BRL price display.

use anyhow::Result;
use zenseo_core::locale::Locale;
use zenseo_core::price::{format_price, PriceInput};

pub fn run_price(value: &str, locale: Locale) -> Result<()> {
    println!("{}", format_price(PriceInput::Text(value), locale));
    Ok(())
}
