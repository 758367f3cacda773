#![cfg_attr(not(feature = "std"), no_std)]

/// # AMM Router Client
///
/// **Role:** Thin call boundary between the Pawthereum contracts and an
/// external constant-product router (Uniswap-V2 style) deployed on the same
/// chain.  Nothing in this crate holds state; every method is a single
/// cross-contract call issued from the *calling* contract's frame.
///
/// ```text
///   [TaxedToken] ──swap / add liquidity──►┐
///                                         ├──► [Router] ──► [Factory] / [Pair]
///   [BuyBackAndBurn] ──quote / swap──────►┘
/// ```
///
/// ## Router ABI
///
/// The router exposes inherent ink! messages; selectors are the first four
/// bytes of `blake2b_256(<message name>)`:
///
/// | message                                                              | payable |
/// |----------------------------------------------------------------------|---------|
/// | `factory() -> AccountId`                                             |         |
/// | `wnative() -> AccountId`                                             |         |
/// | `get_amounts_out(amount_in, path) -> Result<Vec<Balance>, AmmError>` |         |
/// | `swap_exact_native_for_tokens_supporting_fee_on_transfer_tokens`     | yes     |
/// | `swap_exact_tokens_for_native_supporting_fee_on_transfer_tokens`     |         |
/// | `add_liquidity_native(...) -> Result<(Balance, Balance, Balance), AmmError>` | yes |
///
/// The factory exposes `get_pair(token_a, token_b) -> Option<AccountId>`.
use ink::env::call::{build_call, ExecutionInput, Selector};
use ink::env::{CallFlags, DefaultEnvironment};
use ink::prelude::vec;
use ink::prelude::vec::Vec;
use ink::primitives::AccountId;

pub type Balance = u128;

/// Swaps and liquidity adds expire five minutes after the block they were
/// issued in.
pub const DEADLINE_WINDOW_MS: u64 = 300_000;

/// Errors reported by the router itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum AmmError {
    Expired,
    InsufficientOutputAmount,
    InsufficientAmount,
    InsufficientLiquidity,
    InvalidPath,
    PairNotFound,
    TransferFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum RouterError {
    /// The call could not be dispatched, trapped, or returned undecodable data.
    CallFailed,
    /// The router executed and returned an error.
    Rejected(AmmError),
    /// The factory has no pair for the requested tokens.
    PairNotFound,
    /// `get_amounts_out` returned an empty amounts vector.
    EmptyQuote,
}

impl RouterError {
    /// `true` when the router refused because the output would fall below
    /// the caller's minimum.
    pub fn is_slippage(&self) -> bool {
        matches!(self, RouterError::Rejected(AmmError::InsufficientOutputAmount))
    }
}

/// Absolute deadline for a router call issued at block time `now`.
pub fn deadline(now: u64) -> u64 {
    now.saturating_add(DEADLINE_WINDOW_MS)
}

/// Path for buying `token` with native currency.
pub fn native_to_token_path(wnative: AccountId, token: AccountId) -> Vec<AccountId> {
    vec![wnative, token]
}

/// Path for selling `token` for native currency.
pub fn token_to_native_path(token: AccountId, wnative: AccountId) -> Vec<AccountId> {
    vec![token, wnative]
}

/// Final output of a `get_amounts_out` result.
pub fn last_amount(amounts: &[Balance]) -> Result<Balance, RouterError> {
    amounts.last().copied().ok_or(RouterError::EmptyQuote)
}

/// Flags for calls during which the router calls back into the caller.
pub fn reentrant_call_flags() -> CallFlags {
    CallFlags::ALLOW_REENTRY
}

fn flatten<T>(
    result: Result<ink::MessageResult<Result<T, AmmError>>, ink::env::Error>,
    message: &str,
) -> Result<T, RouterError> {
    match result {
        Ok(Ok(Ok(value))) => Ok(value),
        Ok(Ok(Err(err))) => {
            ink::env::debug_println!("router rejected {}: {:?}", message, err);
            Err(RouterError::Rejected(err))
        }
        Ok(Err(err)) => {
            ink::env::debug_println!("router dispatch of {} failed: {:?}", message, err);
            Err(RouterError::CallFailed)
        }
        Err(err) => {
            ink::env::debug_println!("router call {} failed: {:?}", message, err);
            Err(RouterError::CallFailed)
        }
    }
}

fn plain<T>(
    result: Result<ink::MessageResult<T>, ink::env::Error>,
    message: &str,
) -> Result<T, RouterError> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => {
            ink::env::debug_println!("router call {} failed", message);
            Err(RouterError::CallFailed)
        }
    }
}

/// Handle on a router deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmmRouterClient {
    router: AccountId,
}

impl AmmRouterClient {
    pub fn new(router: AccountId) -> Self {
        Self { router }
    }

    pub fn address(&self) -> AccountId {
        self.router
    }

    pub fn factory(&self) -> Result<AccountId, RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                "factory"
            ))))
            .returns::<AccountId>()
            .try_invoke();
        plain(result, "factory")
    }

    pub fn wnative(&self) -> Result<AccountId, RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                "wnative"
            ))))
            .returns::<AccountId>()
            .try_invoke();
        plain(result, "wnative")
    }

    /// Pair holding reserves of `token_a` and `token_b`, looked up through
    /// the router's factory.
    pub fn pair_for(&self, token_a: AccountId, token_b: AccountId) -> Result<AccountId, RouterError> {
        let factory = self.factory()?;
        let result = build_call::<DefaultEnvironment>()
            .call(factory)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("get_pair")))
                    .push_arg(token_a)
                    .push_arg(token_b),
            )
            .returns::<Option<AccountId>>()
            .try_invoke();
        plain(result, "get_pair")?.ok_or(RouterError::PairNotFound)
    }

    /// Router estimate of every hop's output for `amount_in` along `path`.
    pub fn get_amounts_out(
        &self,
        amount_in: Balance,
        path: Vec<AccountId>,
    ) -> Result<Vec<Balance>, RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("get_amounts_out")))
                    .push_arg(amount_in)
                    .push_arg(path),
            )
            .returns::<Result<Vec<Balance>, AmmError>>()
            .try_invoke();
        flatten(result, "get_amounts_out")
    }

    /// Expected final output of swapping `amount_in` along `path`.
    pub fn quote_out(&self, amount_in: Balance, path: Vec<AccountId>) -> Result<Balance, RouterError> {
        let amounts = self.get_amounts_out(amount_in, path)?;
        last_amount(&amounts)
    }

    /// Spend exactly `value` native currency on the last token of `path`,
    /// delivered to `to`. Reverts inside the router below `amount_out_min`.
    pub fn swap_exact_native_for_tokens(
        &self,
        value: Balance,
        amount_out_min: Balance,
        path: Vec<AccountId>,
        to: AccountId,
        deadline: u64,
    ) -> Result<(), RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .transferred_value(value)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "swap_exact_native_for_tokens_supporting_fee_on_transfer_tokens"
                )))
                .push_arg(amount_out_min)
                .push_arg(path)
                .push_arg(to)
                .push_arg(deadline),
            )
            .returns::<Result<(), AmmError>>()
            .try_invoke();
        flatten(result, "swap_exact_native_for_tokens")
    }

    /// Sell exactly `amount_in` of the first token of `path` for native
    /// currency paid to `to`.
    ///
    /// The router pulls the tokens from the caller with `transfer_from`
    /// while the caller is still on the call stack, so the call is made
    /// with re-entry allowed. The caller must hold its own swap lock.
    pub fn swap_exact_tokens_for_native(
        &self,
        amount_in: Balance,
        amount_out_min: Balance,
        path: Vec<AccountId>,
        to: AccountId,
        deadline: u64,
    ) -> Result<(), RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .call_flags(reentrant_call_flags())
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "swap_exact_tokens_for_native_supporting_fee_on_transfer_tokens"
                )))
                .push_arg(amount_in)
                .push_arg(amount_out_min)
                .push_arg(path)
                .push_arg(to)
                .push_arg(deadline),
            )
            .returns::<Result<(), AmmError>>()
            .try_invoke();
        flatten(result, "swap_exact_tokens_for_native")
    }

    /// Pair `amount_token_desired` of `token` with `value` native currency.
    /// Returns `(amount_token, amount_native, liquidity)` as used by the pair.
    ///
    /// Re-entry is allowed for the same reason as
    /// [`AmmRouterClient::swap_exact_tokens_for_native`].
    pub fn add_liquidity_native(
        &self,
        value: Balance,
        token: AccountId,
        amount_token_desired: Balance,
        to: AccountId,
        deadline: u64,
    ) -> Result<(Balance, Balance, Balance), RouterError> {
        let result = build_call::<DefaultEnvironment>()
            .call(self.router)
            .transferred_value(value)
            .call_flags(reentrant_call_flags())
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("add_liquidity_native")))
                    .push_arg(token)
                    .push_arg(amount_token_desired)
                    .push_arg(0u128) // amount_token_min
                    .push_arg(0u128) // amount_native_min
                    .push_arg(to)
                    .push_arg(deadline),
            )
            .returns::<Result<(Balance, Balance, Balance), AmmError>>()
            .try_invoke();
        flatten(result, "add_liquidity_native")
    }
}
