#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// Settlement arithmetic for a single buy-back, kept outside the contract so
/// it can be checked without a live router.
pub mod settlement {
    use amm_router_client::Balance;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SettlementError {
        /// Token balance went down across the swap.
        BalanceDecreased,
        /// Fewer tokens arrived than the caller's floor.
        BelowMinimum,
    }

    /// Tokens to burn after a swap moved the treasury's token balance from
    /// `before` to `after`.  Everything received is burned.
    pub fn burn_amount(before: Balance, after: Balance, min_out: Balance) -> Result<Balance, SettlementError> {
        let received = after
            .checked_sub(before)
            .ok_or(SettlementError::BalanceDecreased)?;
        if received < min_out {
            return Err(SettlementError::BelowMinimum);
        }
        Ok(received)
    }

    /// Quote check run ahead of a buy-back.
    pub fn check_quote(quoted: Balance, min_out: Balance) -> Result<Balance, SettlementError> {
        if quoted < min_out {
            return Err(SettlementError::BelowMinimum);
        }
        Ok(quoted)
    }
}

/// # Pawthereum: Buy-Back-and-Burn Treasury
///
/// Receives native currency (from the token's swap-backs or anyone else) and
/// spends all of it on buying the token through the router, then sends every
/// token bought to the burn sink.
///
/// ```text
///   native in ──► swap [wnative → token] ──► treasury ──transfer──► burn
/// ```
///
/// Two roles, kept apart:
///
/// - **owner**: the deployer, fixed.  Can sweep stray tokens to the multisig.
/// - **multisig**: can sweep native currency and rotate itself.
///
/// Buy-backs are public: the only thing a caller controls is `min_out`.
#[ink::contract]
mod buy_back_and_burn {
    use crate::settlement::{burn_amount, check_quote, SettlementError};
    use amm_router_client::{deadline, native_to_token_path, AmmRouterClient, RouterError};
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::DefaultEnvironment;

    #[ink(storage)]
    pub struct BuyBackAndBurn {
        token: AccountId,
        wnative: AccountId,
        burn: AccountId,
        router: AccountId,
        owner: AccountId,
        multisig: AccountId,
    }

    // ===== EVENTS =====

    #[ink(event)]
    pub struct Deposited {
        #[ink(topic)]
        from: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct BuyBackAndBurned {
        #[ink(topic)]
        caller: AccountId,
        native_spent: Balance,
        tokens_burned: Balance,
    }

    #[ink(event)]
    pub struct TokenRescued {
        #[ink(topic)]
        token: AccountId,
        to: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct NativeRescued {
        to: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct MultisigChanged {
        #[ink(topic)]
        previous: AccountId,
        #[ink(topic)]
        new: AccountId,
    }

    // ===== ERRORS =====

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        NotOwner,
        NotMultisig,
        InvalidAddress,
        NothingToBuyBack,
        SlippageExceeded,
        RouterCallFailed,
        TokenCallFailed,
        NativeTransferFailed,
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

    impl From<SettlementError> for Error {
        fn from(err: SettlementError) -> Self {
            match err {
                SettlementError::BelowMinimum => Error::SlippageExceeded,
                SettlementError::BalanceDecreased => Error::TokenCallFailed,
            }
        }
    }

    impl BuyBackAndBurn {
        #[ink(constructor)]
        pub fn new(
            token: AccountId,
            wnative: AccountId,
            burn: AccountId,
            router: AccountId,
            multisig: AccountId,
        ) -> Self {
            Self {
                token,
                wnative,
                burn,
                router,
                owner: Self::env().caller(),
                multisig,
            }
        }

        // ===== BUY-BACK =====

        /// Tokens the router would give for `native_in` right now.
        #[ink(message)]
        pub fn calculate_buy_back_and_burn(&self, native_in: Balance, min_out: Balance) -> Result<Balance, Error> {
            let quoted = AmmRouterClient::new(self.router)
                .quote_out(native_in, native_to_token_path(self.wnative, self.token))?;
            Ok(check_quote(quoted, min_out)?)
        }

        /// Spend the whole native balance on the token and burn what arrives.
        #[ink(message)]
        pub fn buy_back_and_burn(&mut self, min_out: Balance) -> Result<Balance, Error> {
            let native_spent = self.env().balance();
            if native_spent == 0 {
                return Err(Error::NothingToBuyBack);
            }

            let this = self.env().account_id();
            let before = self.token_balance(self.token, this)?;

            AmmRouterClient::new(self.router).swap_exact_native_for_tokens(
                native_spent,
                min_out,
                native_to_token_path(self.wnative, self.token),
                this,
                deadline(self.env().block_timestamp()),
            )?;

            let after = self.token_balance(self.token, this)?;
            let tokens_burned = burn_amount(before, after, min_out)?;
            if tokens_burned > 0 {
                self.token_transfer(self.token, self.burn, tokens_burned)?;
            }

            self.env().emit_event(BuyBackAndBurned {
                caller: self.env().caller(),
                native_spent,
                tokens_burned,
            });
            Ok(tokens_burned)
        }

        // ===== FUNDING =====

        #[ink(message, payable)]
        pub fn deposit(&mut self) {
            self.env().emit_event(Deposited {
                from: self.env().caller(),
                amount: self.env().transferred_value(),
            });
        }

        // ===== RESCUE =====

        /// Sweep this contract's whole balance of `token` to the multisig.
        #[ink(message)]
        pub fn rescue_token(&mut self, token: AccountId) -> Result<Balance, Error> {
            self.only_owner()?;
            let amount = self.token_balance(token, self.env().account_id())?;
            if amount > 0 {
                self.token_transfer(token, self.multisig, amount)?;
            }
            self.env().emit_event(TokenRescued {
                token,
                to: self.multisig,
                amount,
            });
            Ok(amount)
        }

        #[ink(message)]
        pub fn rescue_eth(&mut self) -> Result<Balance, Error> {
            self.only_multisig()?;
            let amount = self.env().balance();
            if amount > 0 {
                self.env()
                    .transfer(self.multisig, amount)
                    .map_err(|_| Error::NativeTransferFailed)?;
            }
            self.env().emit_event(NativeRescued {
                to: self.multisig,
                amount,
            });
            Ok(amount)
        }

        #[ink(message)]
        pub fn set_multisig(&mut self, new: AccountId) -> Result<(), Error> {
            self.only_multisig()?;
            if new == AccountId::from([0u8; 32]) {
                return Err(Error::InvalidAddress);
            }
            let previous = self.multisig;
            self.multisig = new;
            self.env().emit_event(MultisigChanged { previous, new });
            Ok(())
        }

        // ===== VIEWS =====

        #[ink(message)]
        pub fn token(&self) -> AccountId {
            self.token
        }

        #[ink(message)]
        pub fn wnative(&self) -> AccountId {
            self.wnative
        }

        #[ink(message)]
        pub fn burn(&self) -> AccountId {
            self.burn
        }

        #[ink(message)]
        pub fn router(&self) -> AccountId {
            self.router
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn multisig(&self) -> AccountId {
            self.multisig
        }

        #[ink(message)]
        pub fn native_balance(&self) -> Balance {
            self.env().balance()
        }

        // ===== INTERNAL =====

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        fn only_multisig(&self) -> Result<(), Error> {
            if self.env().caller() != self.multisig {
                return Err(Error::NotMultisig);
            }
            Ok(())
        }

        fn token_balance(&self, token: AccountId, owner: AccountId) -> Result<Balance, Error> {
            let result = build_call::<DefaultEnvironment>()
                .call(token)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("balance_of")))
                        .push_arg(owner),
                )
                .returns::<Balance>()
                .try_invoke();
            match result {
                Ok(Ok(balance)) => Ok(balance),
                _ => {
                    ink::env::debug_println!("balance_of on token failed");
                    Err(Error::TokenCallFailed)
                }
            }
        }

        fn token_transfer(&self, token: AccountId, to: AccountId, amount: Balance) -> Result<(), Error> {
            // Token errors are unit-variant enums; only success matters here.
            let result = build_call::<DefaultEnvironment>()
                .call(token)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("transfer")))
                        .push_arg(to)
                        .push_arg(amount),
                )
                .returns::<Result<(), u8>>()
                .try_invoke();
            match result {
                Ok(Ok(Ok(()))) => Ok(()),
                Ok(Ok(Err(code))) => {
                    ink::env::debug_println!("token transfer rejected with code {}", code);
                    Err(Error::TokenCallFailed)
                }
                _ => {
                    ink::env::debug_println!("token transfer call failed");
                    Err(Error::TokenCallFailed)
                }
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::settlement::{burn_amount, check_quote, SettlementError};
        use ink::env::{test, DefaultEnvironment};

        type Env = DefaultEnvironment;

        // The off-chain engine rejects balances below its existential deposit.
        const FUNDED: Balance = 10_000_000;

        fn accounts() -> test::DefaultAccounts<Env> {
            test::default_accounts::<Env>()
        }

        fn set_caller(account: AccountId) {
            test::set_caller::<Env>(account);
        }

        fn contract_id() -> AccountId {
            AccountId::from([0x42; 32])
        }

        fn balance_of(account: AccountId) -> Balance {
            test::get_account_balance::<Env>(account).unwrap_or(0)
        }

        // alice = owner, bob = multisig, charlie = token, django = wnative,
        // eve = router, frank = burn sink
        fn deploy(native: Balance) -> BuyBackAndBurn {
            let accs = accounts();
            test::set_callee::<Env>(contract_id());
            test::set_account_balance::<Env>(contract_id(), native);
            test::set_account_balance::<Env>(accs.bob, 0);
            set_caller(accs.alice);
            BuyBackAndBurn::new(accs.charlie, accs.django, accs.frank, accs.eve, accs.bob)
        }

        // ── Settlement ────────────────────────────────────────────────────

        #[test]
        fn burn_amount_is_full_delta() {
            assert_eq!(burn_amount(1_000, 1_750, 700), Ok(750));
            assert_eq!(burn_amount(0, 5, 5), Ok(5));
        }

        #[test]
        fn burn_amount_rejects_shortfall() {
            assert_eq!(burn_amount(1_000, 1_699, 700), Err(SettlementError::BelowMinimum));
        }

        #[test]
        fn burn_amount_rejects_shrinking_balance() {
            assert_eq!(burn_amount(10, 9, 0), Err(SettlementError::BalanceDecreased));
        }

        #[test]
        fn quote_below_floor_is_slippage() {
            assert_eq!(check_quote(99, 100), Err(SettlementError::BelowMinimum));
            assert_eq!(check_quote(100, 100), Ok(100));
            assert_eq!(Error::from(SettlementError::BelowMinimum), Error::SlippageExceeded);
        }

        // ── Construction ──────────────────────────────────────────────────

        #[ink::test]
        fn constructor_records_roles_and_addresses() {
            let accs = accounts();
            let t = deploy(0);
            assert_eq!(t.owner(), accs.alice);
            assert_eq!(t.multisig(), accs.bob);
            assert_eq!(t.token(), accs.charlie);
            assert_eq!(t.wnative(), accs.django);
            assert_eq!(t.router(), accs.eve);
            assert_eq!(t.burn(), accs.frank);
        }

        // ── Funding ───────────────────────────────────────────────────────

        #[ink::test]
        fn deposit_is_open_to_anyone() {
            let accs = accounts();
            let mut t = deploy(0);
            set_caller(accs.django);
            test::set_value_transferred::<Env>(500);
            let before = test::recorded_events().count();
            t.deposit();
            assert_eq!(test::recorded_events().count(), before + 1);
        }

        // ── Buy-back guards ───────────────────────────────────────────────

        #[ink::test]
        fn buy_back_with_empty_balance_fails() {
            let mut t = deploy(0);
            set_caller(accounts().django);
            assert_eq!(t.buy_back_and_burn(0), Err(Error::NothingToBuyBack));
        }

        // ── Native rescue ─────────────────────────────────────────────────

        #[ink::test]
        fn multisig_rescues_all_native() {
            let accs = accounts();
            let mut t = deploy(FUNDED);
            set_caller(accs.bob);
            assert_eq!(t.rescue_eth(), Ok(FUNDED));
            assert_eq!(t.native_balance(), 0);
            assert_eq!(balance_of(accs.bob), FUNDED);
        }

        #[ink::test]
        fn owner_cannot_rescue_native() {
            let accs = accounts();
            let mut t = deploy(FUNDED);
            set_caller(accs.alice);
            assert_eq!(t.rescue_eth(), Err(Error::NotMultisig));
            assert_eq!(t.native_balance(), FUNDED);
            assert_eq!(balance_of(accs.bob), 0);
        }

        #[ink::test]
        fn stranger_cannot_rescue_native() {
            let mut t = deploy(FUNDED);
            set_caller(accounts().eve);
            assert_eq!(t.rescue_eth(), Err(Error::NotMultisig));
            assert_eq!(t.native_balance(), FUNDED);
        }

        #[ink::test]
        fn rescue_of_empty_balance_succeeds() {
            let mut t = deploy(0);
            set_caller(accounts().bob);
            assert_eq!(t.rescue_eth(), Ok(0));
        }

        // ── Token rescue ──────────────────────────────────────────────────

        #[ink::test]
        fn non_owner_cannot_rescue_tokens() {
            let accs = accounts();
            let mut t = deploy(0);
            set_caller(accs.bob);
            assert_eq!(t.rescue_token(accs.charlie), Err(Error::NotOwner));
        }

        // ── Multisig rotation ─────────────────────────────────────────────

        #[ink::test]
        fn multisig_rotates_itself() {
            let accs = accounts();
            let mut t = deploy(FUNDED);
            set_caller(accs.bob);
            t.set_multisig(accs.django).unwrap();
            assert_eq!(t.multisig(), accs.django);

            // the old multisig loses access
            assert_eq!(t.rescue_eth(), Err(Error::NotMultisig));
            set_caller(accs.django);
            assert_eq!(t.rescue_eth(), Ok(FUNDED));
        }

        #[ink::test]
        fn owner_cannot_rotate_multisig() {
            let accs = accounts();
            let mut t = deploy(0);
            set_caller(accs.alice);
            assert_eq!(t.set_multisig(accs.alice), Err(Error::NotMultisig));
            assert_eq!(t.multisig(), accs.bob);
        }

        #[ink::test]
        fn multisig_cannot_be_zero() {
            let mut t = deploy(0);
            set_caller(accounts().bob);
            assert_eq!(
                t.set_multisig(AccountId::from([0u8; 32])),
                Err(Error::InvalidAddress)
            );
        }
    }
}
