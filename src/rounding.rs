//! Decimal rounding and amount calculation for order construction.
//!
//! The exchange validates maker/taker amounts against per-tick-size
//! precision limits, so every conversion from human-readable price and
//! size into base units must round exactly the way the exchange expects.
//! All arithmetic is exact decimal; binary floats never touch amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Error, Result};
use crate::types::{OrderSide, TickSize};

/// Decimal precision limits for a tick size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Max decimals for the price.
    pub price: u32,
    /// Max decimals for the size.
    pub size: u32,
    /// Max decimals for the derived amount.
    pub amount: u32,
}

/// Precision limits the exchange enforces per tick size.
pub fn round_config(tick_size: TickSize) -> RoundConfig {
    match tick_size {
        TickSize::Tenth => RoundConfig {
            price: 1,
            size: 2,
            amount: 3,
        },
        TickSize::Hundredth => RoundConfig {
            price: 2,
            size: 2,
            amount: 4,
        },
        TickSize::Thousandth => RoundConfig {
            price: 3,
            size: 2,
            amount: 5,
        },
        TickSize::TenThousandth => RoundConfig {
            price: 4,
            size: 2,
            amount: 6,
        },
    }
}

/// Round toward negative infinity at `decimals` places.
pub fn round_down(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToNegativeInfinity)
}

/// Round toward positive infinity at `decimals` places.
pub fn round_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::ToPositiveInfinity)
}

/// Round half away from zero at `decimals` places.
pub fn round_normal(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Count of significant fractional digits in the exact decimal value.
pub fn decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Convert a decimal amount into 6-decimal base units.
///
/// # Errors
///
/// Returns [`Error::PrecisionOverflow`] if the scaled value cannot be
/// represented as an unsigned integer.
pub fn to_token_decimals(value: Decimal) -> Result<u128> {
    // USDC and outcome tokens both use 6 decimals
    let scale = Decimal::from(1_000_000u64);

    let mut scaled = value
        .checked_mul(scale)
        .ok_or_else(|| Error::PrecisionOverflow(format!("amount out of range: {}", value)))?;
    if decimal_places(scaled) > 0 {
        scaled = round_normal(scaled, 0);
    }

    scaled
        .to_u128()
        .ok_or_else(|| Error::PrecisionOverflow(format!("amount not representable: {}", value)))
}

/// Clamp a value's precision to `max_decimals` places.
///
/// Rounds up with four extra places first to absorb accumulated noise
/// below the precision limit, and only truncates down when the value
/// genuinely carries more precision than the limit allows.
pub fn adjust_precision(value: Decimal, max_decimals: u32) -> Decimal {
    if decimal_places(value) <= max_decimals {
        return value;
    }

    let rounded = round_up(value, max_decimals + 4);
    if decimal_places(rounded) > max_decimals {
        round_down(rounded, max_decimals)
    } else {
        rounded
    }
}

/// Whether a price lies within the valid range for a tick size.
///
/// Prices are probabilities, so the tick bounds both ends:
/// `tick <= price <= 1 - tick`.
pub fn price_valid(price: Decimal, tick_size: TickSize) -> bool {
    let tick = tick_size.as_decimal();
    tick <= price && price <= Decimal::ONE - tick
}

/// Compute base-unit maker and taker amounts for an order.
///
/// The amount the trader explicitly requested (size) is always rounded
/// down; the derived counter-amount goes through [`adjust_precision`] to
/// stay within the exchange's per-tick decimal limit.
pub fn get_order_amounts(
    side: OrderSide,
    size: Decimal,
    price: Decimal,
    config: &RoundConfig,
) -> Result<(OrderSide, u128, u128)> {
    let raw_price = round_normal(price, config.price);

    match side {
        OrderSide::Buy => {
            let raw_taker = round_down(size, config.size);
            let product = raw_taker.checked_mul(raw_price).ok_or_else(|| {
                Error::PrecisionOverflow(format!("{} * {} out of range", raw_taker, raw_price))
            })?;
            let raw_maker = adjust_precision(product, config.amount);

            Ok((
                side,
                to_token_decimals(raw_maker)?,
                to_token_decimals(raw_taker)?,
            ))
        }
        OrderSide::Sell => {
            let raw_maker = round_down(size, config.size);
            let product = raw_maker.checked_mul(raw_price).ok_or_else(|| {
                Error::PrecisionOverflow(format!("{} * {} out of range", raw_maker, raw_price))
            })?;
            let raw_taker = adjust_precision(product, config.amount);

            Ok((
                side,
                to_token_decimals(raw_maker)?,
                to_token_decimals(raw_taker)?,
            ))
        }
    }
}
