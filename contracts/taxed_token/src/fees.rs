//! Fee arithmetic for the taxed token.
//!
//! Everything here is pure: the contract reads its storage, hands the
//! numbers to these functions, and writes the results back.
//!
//! ```text
//! fee       = floor(amount × (category + liquidity + burn) / 10 000)
//! liquidity = floor(fee × liquidity / total)
//! burn      = floor(fee × burn      / total)
//! treasury  = fee − liquidity − burn
//! received  = amount − fee
//! ```

use crate::constants::BPS_DENOMINATOR;

pub type Balance = u128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum FeeError {
    /// A category's buy/sell/transfer fee plus liquidity and burn exceeds 100%.
    FeeTooHigh,
    Overflow,
}

/// Direction of a transfer relative to the recognised liquidity pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum TransferKind {
    /// Tokens leave a pair for a regular account.
    Buy,
    /// Tokens enter a pair.
    Sell,
    /// Neither side is a pair.
    Ordinary,
}

impl TransferKind {
    pub fn classify(from_is_pair: bool, to_is_pair: bool) -> Self {
        if to_is_pair {
            TransferKind::Sell
        } else if from_is_pair {
            TransferKind::Buy
        } else {
            TransferKind::Ordinary
        }
    }
}

/// Fee rates in basis points.
///
/// `buy_fee_bps`, `sell_fee_bps` and `transfer_fee_bps` are the treasury
/// share for their category.  Liquidity applies to every taxed transfer on
/// top of it; burn applies to buys and sells only, so an ordinary transfer
/// pays `transfer_fee_bps + liquidity_fee_bps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct FeeConfig {
    pub buy_fee_bps: u128,
    pub sell_fee_bps: u128,
    pub transfer_fee_bps: u128,
    pub liquidity_fee_bps: u128,
    pub burn_fee_bps: u128,
}

impl FeeConfig {
    pub fn category_fee_bps(&self, kind: TransferKind) -> u128 {
        match kind {
            TransferKind::Buy => self.buy_fee_bps,
            TransferKind::Sell => self.sell_fee_bps,
            TransferKind::Ordinary => self.transfer_fee_bps,
        }
    }

    pub fn burn_bps_for(&self, kind: TransferKind) -> u128 {
        match kind {
            TransferKind::Buy | TransferKind::Sell => self.burn_fee_bps,
            TransferKind::Ordinary => 0,
        }
    }

    /// Aggregate rate charged on a transfer of `kind`.
    pub fn total_bps(&self, kind: TransferKind) -> Result<u128, FeeError> {
        self.category_fee_bps(kind)
            .checked_add(self.liquidity_fee_bps)
            .and_then(|t| t.checked_add(self.burn_bps_for(kind)))
            .ok_or(FeeError::Overflow)
    }

    /// Every category must stay at or below 100%.
    pub fn validate(&self) -> Result<(), FeeError> {
        for kind in [TransferKind::Buy, TransferKind::Sell, TransferKind::Ordinary] {
            if self.total_bps(kind)? > BPS_DENOMINATOR {
                return Err(FeeError::FeeTooHigh);
            }
        }
        Ok(())
    }
}

/// How one transfer's fee is divided between destinations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct FeeSplit {
    pub liquidity: Balance,
    pub treasury: Balance,
    pub burn: Balance,
}

impl FeeSplit {
    pub fn compute(amount: Balance, config: &FeeConfig, kind: TransferKind) -> Result<Self, FeeError> {
        let total_bps = config.total_bps(kind)?;
        if total_bps == 0 {
            return Ok(Self::default());
        }

        let fee = amount
            .checked_mul(total_bps)
            .ok_or(FeeError::Overflow)?
            / BPS_DENOMINATOR;

        let liquidity = fee
            .checked_mul(config.liquidity_fee_bps)
            .ok_or(FeeError::Overflow)?
            / total_bps;
        let burn = fee
            .checked_mul(config.burn_bps_for(kind))
            .ok_or(FeeError::Overflow)?
            / total_bps;
        let treasury = fee
            .checked_sub(liquidity)
            .and_then(|r| r.checked_sub(burn))
            .ok_or(FeeError::Overflow)?;

        Ok(Self { liquidity, treasury, burn })
    }

    pub fn total(&self) -> Balance {
        self.liquidity + self.treasury + self.burn
    }

    /// Tokens that stay on the token contract until the next swap-back.
    pub fn retained(&self) -> Balance {
        self.liquidity + self.treasury
    }
}

/// Fee tokens held by the token contract, waiting for swap-back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct FeeAccumulator {
    pub liquidity_tokens: Balance,
    pub treasury_tokens: Balance,
}

impl FeeAccumulator {
    pub fn total(&self) -> Balance {
        self.liquidity_tokens.saturating_add(self.treasury_tokens)
    }

    pub fn record(&mut self, split: &FeeSplit) -> Result<(), FeeError> {
        self.liquidity_tokens = self
            .liquidity_tokens
            .checked_add(split.liquidity)
            .ok_or(FeeError::Overflow)?;
        self.treasury_tokens = self
            .treasury_tokens
            .checked_add(split.treasury)
            .ok_or(FeeError::Overflow)?;
        Ok(())
    }
}

/// Token amounts for one swap-back.
///
/// Half of the liquidity tokens are kept to pair with native currency; the
/// other half and all treasury tokens are sold.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SwapBackPlan {
    pub tokens_to_swap: Balance,
    pub tokens_for_liquidity: Balance,
    /// Part of `tokens_to_swap` that came from the liquidity accumulator.
    pub liquidity_tokens_swapped: Balance,
}

impl SwapBackPlan {
    pub fn new(accumulated: &FeeAccumulator) -> Self {
        let tokens_for_liquidity = accumulated.liquidity_tokens / 2;
        let liquidity_tokens_swapped = accumulated.liquidity_tokens - tokens_for_liquidity;
        Self {
            tokens_to_swap: liquidity_tokens_swapped.saturating_add(accumulated.treasury_tokens),
            tokens_for_liquidity,
            liquidity_tokens_swapped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens_to_swap == 0 && self.tokens_for_liquidity == 0
    }

    /// Approval the router needs for the whole swap-back.
    pub fn router_allowance(&self) -> Balance {
        self.tokens_to_swap.saturating_add(self.tokens_for_liquidity)
    }

    /// Share of `native_received` that pairs with `tokens_for_liquidity`,
    /// proportional to the liquidity tokens that were sold.
    pub fn native_for_liquidity(&self, native_received: Balance) -> Result<Balance, FeeError> {
        if self.tokens_to_swap == 0 || self.tokens_for_liquidity == 0 {
            return Ok(0);
        }
        Ok(native_received
            .checked_mul(self.liquidity_tokens_swapped)
            .ok_or(FeeError::Overflow)?
            / self.tokens_to_swap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(buy: u128, sell: u128, transfer: u128, liquidity: u128, burn: u128) -> FeeConfig {
        FeeConfig {
            buy_fee_bps: buy,
            sell_fee_bps: sell,
            transfer_fee_bps: transfer,
            liquidity_fee_bps: liquidity,
            burn_fee_bps: burn,
        }
    }

    #[test]
    fn classify_by_pair_membership() {
        assert_eq!(TransferKind::classify(true, false), TransferKind::Buy);
        assert_eq!(TransferKind::classify(false, true), TransferKind::Sell);
        assert_eq!(TransferKind::classify(false, false), TransferKind::Ordinary);
        // pair to pair counts as a sell
        assert_eq!(TransferKind::classify(true, true), TransferKind::Sell);
    }

    #[test]
    fn total_bps_per_category() {
        let c = config(500, 700, 0, 200, 100);
        assert_eq!(c.total_bps(TransferKind::Buy), Ok(800));
        assert_eq!(c.total_bps(TransferKind::Sell), Ok(1_000));
        assert_eq!(c.total_bps(TransferKind::Ordinary), Ok(200));
    }

    #[test]
    fn validate_accepts_exactly_one_hundred_percent() {
        assert_eq!(config(9_800, 0, 0, 100, 100).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_any_category_above_one_hundred_percent() {
        assert_eq!(config(9_801, 0, 0, 100, 100).validate(), Err(FeeError::FeeTooHigh));
        assert_eq!(config(0, 9_801, 0, 100, 100).validate(), Err(FeeError::FeeTooHigh));
        assert_eq!(config(0, 0, 9_901, 100, 100).validate(), Err(FeeError::FeeTooHigh));
        assert_eq!(config(0, 0, 0, 10_001, 0).validate(), Err(FeeError::FeeTooHigh));
    }

    #[test]
    fn validate_rejects_overflowing_rates() {
        assert_eq!(config(u128::MAX, 0, 0, 1, 0).validate(), Err(FeeError::Overflow));
    }

    #[test]
    fn zero_rates_take_nothing() {
        let split = FeeSplit::compute(1_000_000, &config(0, 0, 0, 0, 0), TransferKind::Sell).unwrap();
        assert_eq!(split, FeeSplit::default());
    }

    #[test]
    fn ordinary_split_is_liquidity_only_and_rounds_down() {
        // 1 000 003 × 100 / 10 000 = 10 000.03 → 10 000
        let split =
            FeeSplit::compute(1_000_003, &config(200, 200, 0, 100, 100), TransferKind::Ordinary).unwrap();
        assert_eq!(split.total(), 10_000);
        assert_eq!(split.liquidity, 10_000);
        assert_eq!(split.burn, 0);
        assert_eq!(split.treasury, 0);
    }

    #[test]
    fn ordinary_transfer_accepts_burn_heavy_config() {
        // burn is not charged on ordinary transfers, so it does not count there
        let c = config(0, 0, 9_900, 100, 9_900);
        assert_eq!(c.total_bps(TransferKind::Ordinary), Ok(10_000));
        assert_eq!(c.total_bps(TransferKind::Buy), Ok(10_000));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn buy_split_gives_remainder_to_treasury() {
        // fee = 999 × 700 / 10 000 = 69
        // liquidity = 69 × 200 / 700 = 19, burn = 69 × 100 / 700 = 9, treasury = 41
        let split = FeeSplit::compute(999, &config(400, 0, 0, 200, 100), TransferKind::Buy).unwrap();
        assert_eq!(split.total(), 69);
        assert_eq!(split.liquidity, 19);
        assert_eq!(split.burn, 9);
        assert_eq!(split.treasury, 41);
        assert_eq!(split.retained(), 60);
    }

    #[test]
    fn fee_is_floor_and_value_is_conserved() {
        let c = config(500, 700, 300, 200, 100);
        for kind in [TransferKind::Buy, TransferKind::Sell, TransferKind::Ordinary] {
            let bps = c.total_bps(kind).unwrap();
            for amount in [0u128, 1, 9, 10, 33, 99, 101, 9_999, 10_000, 123_456_789, 10u128.pow(24) + 7] {
                let split = FeeSplit::compute(amount, &c, kind).unwrap();
                assert_eq!(split.total(), amount * bps / 10_000, "floor fee for {amount}");
                let received = amount - split.total();
                assert_eq!(received + split.total(), amount);
            }
        }
    }

    #[test]
    fn tiny_amounts_pay_no_fee() {
        // 49 × 200 / 10 000 = 0
        let split = FeeSplit::compute(49, &config(0, 0, 0, 200, 0), TransferKind::Ordinary).unwrap();
        assert_eq!(split.total(), 0);
    }

    #[test]
    fn compute_reports_overflow() {
        let c = config(0, 0, 0, 10_000, 0);
        assert_eq!(
            FeeSplit::compute(u128::MAX, &c, TransferKind::Ordinary),
            Err(FeeError::Overflow)
        );
    }

    #[test]
    fn accumulator_records_retained_parts() {
        let mut acc = FeeAccumulator::default();
        acc.record(&FeeSplit { liquidity: 5, treasury: 7, burn: 100 }).unwrap();
        acc.record(&FeeSplit { liquidity: 1, treasury: 0, burn: 0 }).unwrap();
        assert_eq!(acc.liquidity_tokens, 6);
        assert_eq!(acc.treasury_tokens, 7);
        assert_eq!(acc.total(), 13);
    }

    #[test]
    fn plan_keeps_half_of_liquidity_for_pairing() {
        let plan = SwapBackPlan::new(&FeeAccumulator { liquidity_tokens: 101, treasury_tokens: 300 });
        assert_eq!(plan.tokens_for_liquidity, 50);
        assert_eq!(plan.liquidity_tokens_swapped, 51);
        assert_eq!(plan.tokens_to_swap, 351);
        assert_eq!(plan.router_allowance(), 401);
    }

    #[test]
    fn plan_native_split_is_proportional() {
        let plan = SwapBackPlan::new(&FeeAccumulator { liquidity_tokens: 200, treasury_tokens: 300 });
        // 100 of 400 sold tokens were liquidity tokens → a quarter of the native
        assert_eq!(plan.native_for_liquidity(1_000), Ok(250));
    }

    #[test]
    fn plan_without_liquidity_sends_everything_to_treasury() {
        let plan = SwapBackPlan::new(&FeeAccumulator { liquidity_tokens: 1, treasury_tokens: 300 });
        assert_eq!(plan.tokens_for_liquidity, 0);
        assert_eq!(plan.native_for_liquidity(1_000), Ok(0));
    }

    #[test]
    fn empty_plan() {
        assert!(SwapBackPlan::new(&FeeAccumulator::default()).is_empty());
        assert!(!SwapBackPlan::new(&FeeAccumulator { liquidity_tokens: 0, treasury_tokens: 1 }).is_empty());
    }
}
