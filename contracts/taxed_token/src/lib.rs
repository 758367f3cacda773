#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod constants {
    pub const DECIMALS: u8 = 9;
    pub const SCALING_FACTOR: u128 = 1_000_000_000u128;
    pub const TOTAL_SUPPLY: u128 = 1_000_000_000 * SCALING_FACTOR;

    /// Denominator for all basis-point calculations.
    pub const BPS_DENOMINATOR: u128 = 10_000;

    // Default rates. Burn applies to buys and sells only and ordinary
    // transfers carry no treasury share, so by default they pay liquidity only.
    pub const DEFAULT_BUY_FEE_BPS: u128 = 200;
    pub const DEFAULT_SELL_FEE_BPS: u128 = 200;
    pub const DEFAULT_TRANSFER_FEE_BPS: u128 = 0;
    pub const DEFAULT_LIQUIDITY_FEE_BPS: u128 = 100;
    pub const DEFAULT_BURN_FEE_BPS: u128 = 100;

    /// Swap-back fires once 0.05% of supply sits in the fee accumulator.
    pub const DEFAULT_SWAP_THRESHOLD: u128 = TOTAL_SUPPLY / 2_000;

    /// Well-known unspendable account: `0x000…dEaD`.
    pub const DEAD_ADDRESS: [u8; 32] = {
        let mut bytes = [0u8; 32];
        bytes[30] = 0xde;
        bytes[31] = 0xad;
        bytes
    };
}

pub mod fees;

/// # Pawthereum: Taxed Token
///
/// **Role:** Balance ledger with a transfer tax.  Every taxed transfer is
/// classified against the set of recognised liquidity pairs and pays
///
/// ```text
///   BUY       (pair → account):    buy_fee      + liquidity + burn
///   SELL      (any  → pair):       sell_fee     + liquidity + burn
///   ORDINARY  (account → account): transfer_fee + liquidity
/// ```
///
/// The burn share goes straight to `DEAD_ADDRESS`.  The liquidity and
/// treasury shares stay on this contract until a swap-back sells them
/// through the router: liquidity is re-paired into the pool, the treasury
/// share leaves as native currency for the buy-back-and-burn treasury.
///
/// ## Tax lifecycle
///
/// ```text
///   Uninitialized ──init_lp (tax off, once)──► Seeded + TaxOff ◄──set_tax_active──► Seeded + TaxOn
/// ```
///
/// ## Re-entrancy
///
/// Swap-back calls the router, which pulls the tokens back through
/// `transfer_from` while this contract is still on the call stack.  The
/// swap lock and the fee accumulator live in `Lazy` cells so the nested
/// frame sees them; all bookkeeping is written before the router is called.
#[ink::contract]
mod taxed_token {
    use crate::constants::*;
    use crate::fees::{FeeAccumulator, FeeConfig, FeeError, FeeSplit, SwapBackPlan, TransferKind};
    use amm_router_client::{deadline, token_to_native_path, AmmRouterClient, RouterError};
    use ink::prelude::string::String;
    use ink::storage::{Lazy, Mapping};

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct TaxedToken {
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        tax_exempt: Mapping<AccountId, bool>,
        pairs: Mapping<AccountId, bool>,
        total_supply: Balance,
        name: String,
        symbol: String,

        owner: AccountId,
        treasury: AccountId,
        liquidity_recipient: AccountId,
        router: AccountId,
        wnative: Option<AccountId>,
        seeded_pair: Option<AccountId>,
        lp_seeded: bool,

        fees: FeeConfig,
        tax_active: bool,
        swap_enabled: bool,
        swap_threshold: Balance,

        accumulated: Lazy<FeeAccumulator>,
        swap_locked: Lazy<bool>,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct FeeTaken {
        #[ink(topic)]
        from: AccountId,
        kind: TransferKind,
        liquidity: Balance,
        treasury: Balance,
        burned: Balance,
    }

    #[ink(event)]
    pub struct SwapBack {
        tokens_swapped: Balance,
        native_received: Balance,
        tokens_to_liquidity: Balance,
        native_to_liquidity: Balance,
        native_to_treasury: Balance,
    }

    #[ink(event)]
    pub struct LiquiditySeeded {
        #[ink(topic)]
        pair: AccountId,
        tokens: Balance,
        native: Balance,
        liquidity: Balance,
    }

    #[ink(event)]
    pub struct TaxActiveUpdated {
        active: bool,
    }

    #[ink(event)]
    pub struct FeesUpdated {
        buy_fee_bps: u128,
        sell_fee_bps: u128,
        transfer_fee_bps: u128,
        liquidity_fee_bps: u128,
        burn_fee_bps: u128,
    }

    #[ink(event)]
    pub struct TaxExemptUpdated {
        #[ink(topic)]
        account: AccountId,
        exempt: bool,
    }

    #[ink(event)]
    pub struct PairUpdated {
        #[ink(topic)]
        pair: AccountId,
        is_pair: bool,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        InsufficientBalance,
        InsufficientAllowance,
        /// Zero address used as a recipient or role.
        InvalidAddress,
        NotOwner,
        /// New fee rates would take more than 100% of a transfer.
        FeeTooHigh,
        /// `init_lp` already ran.
        AlreadySeeded,
        /// Liquidity has not been seeded yet.
        NotSeeded,
        /// `init_lp` requires the tax to be switched off.
        TaxMustBeInactive,
        NoValueAttached,
        /// The pair created by `init_lp` cannot be un-recognised.
        PairLocked,
        /// A swap-back is already running.
        SwapLocked,
        SlippageExceeded,
        RouterCallFailed,
        NativeTransferFailed,
        Overflow,
    }

    impl From<FeeError> for Error {
        fn from(err: FeeError) -> Self {
            match err {
                FeeError::FeeTooHigh => Error::FeeTooHigh,
                FeeError::Overflow => Error::Overflow,
            }
        }
    }

    impl From<RouterError> for Error {
        fn from(err: RouterError) -> Self {
            if err.is_slippage() {
                Error::SlippageExceeded
            } else {
                Error::RouterCallFailed
            }
        }
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl TaxedToken {
        /// Mints the whole supply to the deployer.  The contract itself and
        /// the burn sink are tax exempt from the start; transfers into the
        /// treasury are taxed like any other.
        #[ink(constructor)]
        pub fn new(treasury: AccountId, router: AccountId) -> Self {
            let caller = Self::env().caller();
            let this = Self::env().account_id();
            let dead = AccountId::from(DEAD_ADDRESS);

            let mut balances = Mapping::default();
            balances.insert(caller, &TOTAL_SUPPLY);

            let mut tax_exempt = Mapping::default();
            tax_exempt.insert(this, &true);
            tax_exempt.insert(dead, &true);

            let mut accumulated = Lazy::new();
            accumulated.set(&FeeAccumulator::default());
            let mut swap_locked = Lazy::new();
            swap_locked.set(&false);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: TOTAL_SUPPLY,
            });

            Self {
                balances,
                allowances: Mapping::default(),
                tax_exempt,
                pairs: Mapping::default(),
                total_supply: TOTAL_SUPPLY,
                name: String::from("Pawthereum"),
                symbol: String::from("PAWTH"),
                owner: caller,
                treasury,
                liquidity_recipient: caller,
                router,
                wnative: None,
                seeded_pair: None,
                lp_seeded: false,
                fees: FeeConfig {
                    buy_fee_bps: DEFAULT_BUY_FEE_BPS,
                    sell_fee_bps: DEFAULT_SELL_FEE_BPS,
                    transfer_fee_bps: DEFAULT_TRANSFER_FEE_BPS,
                    liquidity_fee_bps: DEFAULT_LIQUIDITY_FEE_BPS,
                    burn_fee_bps: DEFAULT_BURN_FEE_BPS,
                },
                tax_active: true,
                swap_enabled: true,
                swap_threshold: DEFAULT_SWAP_THRESHOLD,
                accumulated,
                swap_locked,
            }
        }

        // =================================================================
        // TOKEN STANDARD
        // =================================================================

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner: AccountId) -> Balance {
            self.balances.get(owner).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.set_allowance(owner, spender, value)
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender: AccountId, delta: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            let value = self
                .allowance(owner, spender)
                .checked_add(delta)
                .ok_or(Error::Overflow)?;
            self.set_allowance(owner, spender, value)
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender: AccountId, delta: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            let value = self
                .allowance(owner, spender)
                .checked_sub(delta)
                .ok_or(Error::InsufficientAllowance)?;
            self.set_allowance(owner, spender, value)
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.process_transfer(from, to, value)
        }

        /// `Balance::MAX` allowances are treated as unlimited and never
        /// decremented.
        #[ink(message)]
        pub fn transfer_from(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            let caller = self.env().caller();
            let allowance = self.allowance(from, caller);
            if allowance < value {
                return Err(Error::InsufficientAllowance);
            }
            self.ensure_transferable(from, to, value)?;

            if allowance != Balance::MAX {
                self.allowances.insert((from, caller), &(allowance - value));
            }
            self.process_transfer(from, to, value)
        }

        // =================================================================
        // CORE TRANSFER LOGIC
        // =================================================================

        fn ensure_transferable(&self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            if to == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            if self.balance_of(from) < value {
                return Err(Error::InsufficientBalance);
            }
            Ok(())
        }

        fn process_transfer(&mut self, from: AccountId, to: AccountId, value: Balance) -> Result<(), Error> {
            self.ensure_transferable(from, to, value)?;

            let kind = self.classify(from, to);
            let taxed = self.is_taxed(from, to);

            // Sell the accumulated fees before this transfer touches a pair's
            // balance, otherwise the pair would count these tokens as input.
            if taxed && kind != TransferKind::Buy && self.swap_back_due() {
                self.swap_back()?;
            }

            let split = if taxed {
                FeeSplit::compute(value, &self.fees, kind)?
            } else {
                FeeSplit::default()
            };
            let net = value.checked_sub(split.total()).ok_or(Error::Overflow)?;

            let from_balance = self.balance_of(from);
            if from_balance < value {
                return Err(Error::InsufficientBalance);
            }
            self.balances.insert(from, &(from_balance - value));
            self.credit(to, net)?;

            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value: net,
            });

            if split.total() > 0 {
                self.take_fee(from, kind, &split)?;
            }
            Ok(())
        }

        fn take_fee(&mut self, from: AccountId, kind: TransferKind, split: &FeeSplit) -> Result<(), Error> {
            let this = self.env().account_id();

            let retained = split.retained();
            if retained > 0 {
                self.credit(this, retained)?;
                let mut accumulated = self.accumulated.get_or_default();
                accumulated.record(split)?;
                self.accumulated.set(&accumulated);
                self.env().emit_event(Transfer {
                    from: Some(from),
                    to: Some(this),
                    value: retained,
                });
            }

            if split.burn > 0 {
                let dead = AccountId::from(DEAD_ADDRESS);
                self.credit(dead, split.burn)?;
                self.env().emit_event(Transfer {
                    from: Some(from),
                    to: Some(dead),
                    value: split.burn,
                });
            }

            self.env().emit_event(FeeTaken {
                from,
                kind,
                liquidity: split.liquidity,
                treasury: split.treasury,
                burned: split.burn,
            });
            Ok(())
        }

        fn credit(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self
                .balance_of(account)
                .checked_add(amount)
                .ok_or(Error::Overflow)?;
            self.balances.insert(account, &balance);
            Ok(())
        }

        fn set_allowance(&mut self, owner: AccountId, spender: AccountId, value: Balance) -> Result<(), Error> {
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval { owner, spender, value });
            Ok(())
        }

        fn classify(&self, from: AccountId, to: AccountId) -> TransferKind {
            TransferKind::classify(self.is_pair(from), self.is_pair(to))
        }

        fn is_taxed(&self, from: AccountId, to: AccountId) -> bool {
            self.tax_active
                && !self.is_tax_exempt(from)
                && !self.is_tax_exempt(to)
                && !self.swap_locked.get_or_default()
        }

        fn swap_back_due(&self) -> bool {
            if !self.swap_enabled || !self.lp_seeded || self.swap_locked.get_or_default() {
                return false;
            }
            let accumulated = self.accumulated.get_or_default().total();
            accumulated > 0 && accumulated >= self.swap_threshold
        }

        // =================================================================
        // SWAP-BACK (AUTO-LIQUIDITY + TREASURY FEED)
        // =================================================================

        /// Sell accumulated fee tokens for native currency, re-pair the
        /// liquidity share and forward the rest to the treasury.
        fn swap_back(&mut self) -> Result<(), Error> {
            let wnative = self.wnative.ok_or(Error::NotSeeded)?;
            let accumulated = self.accumulated.get_or_default();
            let plan = SwapBackPlan::new(&accumulated);
            if plan.is_empty() {
                return Ok(());
            }

            let this = self.env().account_id();
            let router = AmmRouterClient::new(self.router);
            let deadline = deadline(self.env().block_timestamp());

            // Effects before interactions.
            self.swap_locked.set(&true);
            self.accumulated.set(&FeeAccumulator::default());
            self.allowances.insert((this, self.router), &plan.router_allowance());

            let native_before = self.env().balance();
            if plan.tokens_to_swap > 0 {
                router.swap_exact_tokens_for_native(
                    plan.tokens_to_swap,
                    0,
                    token_to_native_path(this, wnative),
                    this,
                    deadline,
                )?;
            }
            let native_received = self.env().balance().saturating_sub(native_before);

            let native_for_liquidity = plan.native_for_liquidity(native_received)?;
            let (mut tokens_to_liquidity, mut native_to_liquidity) = (0, 0);
            if native_for_liquidity > 0 {
                let (amount_token, amount_native, _) = router.add_liquidity_native(
                    native_for_liquidity,
                    this,
                    plan.tokens_for_liquidity,
                    self.liquidity_recipient,
                    deadline,
                )?;
                tokens_to_liquidity = amount_token;
                native_to_liquidity = amount_native;
            }

            // Tokens the pool did not take wait for the next round.
            let unpaired = plan.tokens_for_liquidity.saturating_sub(tokens_to_liquidity);
            if unpaired > 0 {
                let mut accumulated = self.accumulated.get_or_default();
                accumulated.record(&FeeSplit {
                    liquidity: unpaired,
                    treasury: 0,
                    burn: 0,
                })?;
                self.accumulated.set(&accumulated);
            }
            self.allowances.insert((this, self.router), &0);

            let native_to_treasury = self.env().balance().saturating_sub(native_before);
            if native_to_treasury > 0 {
                self.env()
                    .transfer(self.treasury, native_to_treasury)
                    .map_err(|_| Error::NativeTransferFailed)?;
            }

            self.swap_locked.set(&false);

            self.env().emit_event(SwapBack {
                tokens_swapped: plan.tokens_to_swap,
                native_received,
                tokens_to_liquidity,
                native_to_liquidity,
                native_to_treasury,
            });
            Ok(())
        }

        /// Run a swap-back now, regardless of the threshold.
        #[ink(message)]
        pub fn manual_swap_back(&mut self) -> Result<(), Error> {
            self.only_owner()?;
            if !self.lp_seeded {
                return Err(Error::NotSeeded);
            }
            if self.swap_locked.get_or_default() {
                return Err(Error::SwapLocked);
            }
            self.swap_back()
        }

        // =================================================================
        // INITIAL LIQUIDITY
        // =================================================================

        /// Pair the contract's own token balance with the attached native
        /// value and remember the resulting pair.  Runs once, with tax off.
        #[ink(message, payable)]
        pub fn init_lp(&mut self) -> Result<AccountId, Error> {
            self.only_owner()?;
            if self.lp_seeded {
                return Err(Error::AlreadySeeded);
            }
            if self.tax_active {
                return Err(Error::TaxMustBeInactive);
            }
            let native = self.env().transferred_value();
            if native == 0 {
                return Err(Error::NoValueAttached);
            }

            let this = self.env().account_id();
            let tokens = self
                .balance_of(this)
                .saturating_sub(self.accumulated.get_or_default().total());
            if tokens == 0 {
                return Err(Error::InsufficientBalance);
            }

            self.lp_seeded = true;
            self.allowances.insert((this, self.router), &tokens);

            let router = AmmRouterClient::new(self.router);
            let wnative = router.wnative()?;
            let (amount_token, amount_native, liquidity) = router.add_liquidity_native(
                native,
                this,
                tokens,
                self.owner,
                deadline(self.env().block_timestamp()),
            )?;
            let pair = router.pair_for(this, wnative)?;

            self.allowances.insert((this, self.router), &0);
            self.pairs.insert(pair, &true);
            self.seeded_pair = Some(pair);
            self.wnative = Some(wnative);

            self.env().emit_event(LiquiditySeeded {
                pair,
                tokens: amount_token,
                native: amount_native,
                liquidity,
            });
            Ok(pair)
        }

        // =================================================================
        // ADMIN FUNCTIONS
        // =================================================================

        #[ink(message)]
        pub fn set_tax_active(&mut self, active: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.tax_active = active;
            self.env().emit_event(TaxActiveUpdated { active });
            Ok(())
        }

        #[ink(message)]
        pub fn set_buy_fee(&mut self, bps: u128) -> Result<(), Error> {
            self.update_fees(FeeConfig { buy_fee_bps: bps, ..self.fees })
        }

        #[ink(message)]
        pub fn set_sell_fee(&mut self, bps: u128) -> Result<(), Error> {
            self.update_fees(FeeConfig { sell_fee_bps: bps, ..self.fees })
        }

        #[ink(message)]
        pub fn set_transfer_fee(&mut self, bps: u128) -> Result<(), Error> {
            self.update_fees(FeeConfig { transfer_fee_bps: bps, ..self.fees })
        }

        #[ink(message)]
        pub fn set_liquidity_fee(&mut self, bps: u128) -> Result<(), Error> {
            self.update_fees(FeeConfig { liquidity_fee_bps: bps, ..self.fees })
        }

        #[ink(message)]
        pub fn set_burn_fee(&mut self, bps: u128) -> Result<(), Error> {
            self.update_fees(FeeConfig { burn_fee_bps: bps, ..self.fees })
        }

        fn update_fees(&mut self, candidate: FeeConfig) -> Result<(), Error> {
            self.only_owner()?;
            candidate.validate()?;
            self.fees = candidate;
            self.env().emit_event(FeesUpdated {
                buy_fee_bps: candidate.buy_fee_bps,
                sell_fee_bps: candidate.sell_fee_bps,
                transfer_fee_bps: candidate.transfer_fee_bps,
                liquidity_fee_bps: candidate.liquidity_fee_bps,
                burn_fee_bps: candidate.burn_fee_bps,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn set_tax_exempt(&mut self, account: AccountId, exempt: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.tax_exempt.insert(account, &exempt);
            self.env().emit_event(TaxExemptUpdated { account, exempt });
            Ok(())
        }

        #[ink(message)]
        pub fn set_pair(&mut self, pair: AccountId, is_pair: bool) -> Result<(), Error> {
            self.only_owner()?;
            if pair == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            if !is_pair && self.seeded_pair == Some(pair) {
                return Err(Error::PairLocked);
            }
            self.pairs.insert(pair, &is_pair);
            self.env().emit_event(PairUpdated { pair, is_pair });
            Ok(())
        }

        #[ink(message)]
        pub fn set_treasury(&mut self, treasury: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            if treasury == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            self.treasury = treasury;
            Ok(())
        }

        #[ink(message)]
        pub fn set_liquidity_recipient(&mut self, recipient: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            if recipient == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            self.liquidity_recipient = recipient;
            Ok(())
        }

        #[ink(message)]
        pub fn set_swap_settings(&mut self, enabled: bool, threshold: Balance) -> Result<(), Error> {
            self.only_owner()?;
            self.swap_enabled = enabled;
            self.swap_threshold = threshold;
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            if new_owner == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            let previous_owner = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        // =================================================================
        // VIEW FUNCTIONS
        // =================================================================

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn treasury(&self) -> AccountId {
            self.treasury
        }

        #[ink(message)]
        pub fn router(&self) -> AccountId {
            self.router
        }

        #[ink(message)]
        pub fn fee_config(&self) -> FeeConfig {
            self.fees
        }

        #[ink(message)]
        pub fn tax_active(&self) -> bool {
            self.tax_active
        }

        #[ink(message)]
        pub fn lp_seeded(&self) -> bool {
            self.lp_seeded
        }

        #[ink(message)]
        pub fn seeded_pair(&self) -> Option<AccountId> {
            self.seeded_pair
        }

        #[ink(message)]
        pub fn is_pair(&self, account: AccountId) -> bool {
            self.pairs.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn is_tax_exempt(&self, account: AccountId) -> bool {
            self.tax_exempt.get(account).unwrap_or(false)
        }

        /// `(liquidity_tokens, treasury_tokens)` waiting for swap-back.
        #[ink(message)]
        pub fn accumulated_fees(&self) -> (Balance, Balance) {
            let accumulated = self.accumulated.get_or_default();
            (accumulated.liquidity_tokens, accumulated.treasury_tokens)
        }

        /// `(enabled, threshold)`
        #[ink(message)]
        pub fn swap_settings(&self) -> (bool, Balance) {
            (self.swap_enabled, self.swap_threshold)
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
