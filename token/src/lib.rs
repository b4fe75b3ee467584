/*!
# Capped Token

An ERC-20 token for [Arbitrum Stylus] with a fixed maximum supply.

[`CappedToken`] is composed from the `openzeppelin-stylus` building blocks:
[`Erc20`] keeps balances and allowances, [`Erc20Metadata`] the name and
symbol, [`Ownable`] the privileged minter, and [`Erc20Permit`] with
[`Nonces`] the EIP-2612 signed approvals. On top of them the token:

- refuses any mint that would push the total supply above [`MAX_SUPPLY`];
- emits [`TokensMinted`] and [`TokensBurned`] for every supply change;
- exposes the whole token state in one read through `getTokenInfo`.

[Arbitrum Stylus]: https://docs.arbitrum.io/stylus/stylus-gentle-introduction
*/

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![allow(clippy::module_name_repetitions)]
extern crate alloc;

use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{aliases::B32, uint, Address, B256, U256, U8};
use openzeppelin_stylus::{
    access::ownable::{self, IOwnable, Ownable},
    token::erc20::{
        self,
        extensions::{
            permit, Erc20Metadata, Erc20Permit, IErc20Burnable,
            IErc20Metadata,
        },
        Erc20, IErc20,
    },
    utils::{
        cryptography::eip712::IEip712,
        introspection::erc165::IErc165,
        nonces::{INonces, Nonces},
    },
};
pub use sol::*;
use stylus_sdk::{evm, msg, prelude::*};

pub mod supply;

use supply::SupplyCapExceeded;

/// Maximum number of base units that can ever be in circulation:
/// one billion tokens with 18 decimals.
pub const MAX_SUPPLY: U256 =
    uint!(1_000_000_000_000_000_000_000_000_000_U256);

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted when `amount` new tokens are credited to `to`.
        ///
        /// * `to` - Account that received the tokens.
        /// * `amount` - Number of tokens created.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensMinted(address indexed to, uint256 amount);

        /// Emitted when `amount` tokens are destroyed from `from`.
        ///
        /// * `from` - Account whose balance was debited.
        /// * `amount` - Number of tokens destroyed.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TokensBurned(address indexed from, uint256 amount);
    }
}

/// An error that occurred in a [`CappedToken`] operation.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The operation would push the total supply above [`MAX_SUPPLY`].
    SupplyCapExceeded(SupplyCapExceeded),
    /// The caller is not allowed to perform an owner-only operation.
    Unauthorized(ownable::OwnableUnauthorizedAccount),
    /// The owner is not a valid owner account (eg. [`Address::ZERO`]).
    InvalidOwner(ownable::OwnableInvalidOwner),
    /// The holder does not have enough tokens.
    InsufficientBalance(erc20::ERC20InsufficientBalance),
    /// The spender's allowance is lower than the requested amount.
    InsufficientAllowance(erc20::ERC20InsufficientAllowance),
    /// Tokens cannot be taken from [`Address::ZERO`].
    InvalidSender(erc20::ERC20InvalidSender),
    /// Tokens cannot be credited to [`Address::ZERO`].
    InvalidReceiver(erc20::ERC20InvalidReceiver),
    /// [`Address::ZERO`] cannot be approved as a spender.
    InvalidSpender(erc20::ERC20InvalidSpender),
    /// [`Address::ZERO`] cannot grant an approval.
    InvalidApprover(erc20::ERC20InvalidApprover),
}

impl From<ownable::Error> for Error {
    fn from(value: ownable::Error) -> Self {
        match value {
            ownable::Error::UnauthorizedAccount(e) => Error::Unauthorized(e),
            ownable::Error::InvalidOwner(e) => Error::InvalidOwner(e),
        }
    }
}

impl From<erc20::Error> for Error {
    fn from(value: erc20::Error) -> Self {
        match value {
            erc20::Error::InsufficientBalance(e) => {
                Error::InsufficientBalance(e)
            }
            erc20::Error::InsufficientAllowance(e) => {
                Error::InsufficientAllowance(e)
            }
            erc20::Error::InvalidSender(e) => Error::InvalidSender(e),
            erc20::Error::InvalidReceiver(e) => Error::InvalidReceiver(e),
            erc20::Error::InvalidSpender(e) => Error::InvalidSpender(e),
            erc20::Error::InvalidApprover(e) => Error::InvalidApprover(e),
        }
    }
}

/// EIP-712 domain of the token's permits.
#[storage]
struct Eip712;

impl IEip712 for Eip712 {
    const NAME: &'static str = "Capped Token";
    const VERSION: &'static str = "1";
}

#[entrypoint]
#[storage]
struct CappedToken {
    erc20: Erc20,
    metadata: Erc20Metadata,
    ownable: Ownable,
    nonces: Nonces,
    erc20_permit: Erc20Permit<Eip712>,
}

#[public]
#[implements(
    IErc20<Error = Error>,
    IErc20Burnable<Error = Error>,
    IErc20Metadata,
    IOwnable<Error = Error>,
    INonces,
    IErc165
)]
impl CappedToken {
    /// Sets the token metadata and the owner, then mints `initial_supply` to
    /// `initial_owner`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `name` - Token name.
    /// * `symbol` - Token symbol.
    /// * `initial_supply` - Tokens credited to `initial_owner`.
    /// * `initial_owner` - The account allowed to mint.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidOwner`] - If `initial_owner` is [`Address::ZERO`].
    /// * [`Error::SupplyCapExceeded`] - If `initial_supply` is greater than
    ///   [`MAX_SUPPLY`].
    ///
    /// # Events
    ///
    /// * [`ownable::OwnershipTransferred`].
    /// * [`erc20::Transfer`].
    /// * [`TokensMinted`].
    #[constructor]
    pub fn constructor(
        &mut self,
        name: String,
        symbol: String,
        initial_supply: U256,
        initial_owner: Address,
    ) -> Result<(), Error> {
        self.metadata.constructor(name, symbol);
        self.ownable.constructor(initial_owner)?;
        self._mint_capped(initial_owner, initial_supply)
    }

    /// Creates `amount` tokens and assigns them to `to`.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `to` - Account to credit.
    /// * `amount` - Number of tokens to create.
    ///
    /// # Errors
    ///
    /// * [`Error::Unauthorized`] - If the caller is not the owner.
    /// * [`Error::SupplyCapExceeded`] - If the total supply would exceed
    ///   [`MAX_SUPPLY`].
    /// * [`Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`].
    /// * [`TokensMinted`].
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), Error> {
        self.ownable.only_owner()?;
        self._mint_capped(to, amount)
    }

    /// Returns `(name, symbol, decimals, total_supply, max_supply)`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    pub fn get_token_info(&self) -> (String, String, U8, U256, U256) {
        (
            self.metadata.name(),
            self.metadata.symbol(),
            self.metadata.decimals(),
            self.erc20.total_supply(),
            MAX_SUPPLY,
        )
    }

    /// Returns the supply cap, [`MAX_SUPPLY`].
    #[selector(name = "MAX_SUPPLY")]
    pub fn max_supply(&self) -> U256 {
        MAX_SUPPLY
    }

    /// Returns the domain separator of the token's EIP-712 permits.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[selector(name = "DOMAIN_SEPARATOR")]
    pub fn domain_separator(&self) -> B256 {
        self.erc20_permit.domain_separator()
    }

    /// Sets `value` as the allowance of `spender` over `owner`'s tokens,
    /// given `owner`'s signed approval.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `owner` - Account that owns the tokens.
    /// * `spender` - Account that will spend the tokens.
    /// * `value` - Number of tokens `spender` may transfer.
    /// * `deadline` - Last timestamp at which the signature is valid.
    /// * `v` - v value from the `owner`'s signature.
    /// * `r` - r value from the `owner`'s signature.
    /// * `s` - s value from the `owner`'s signature.
    ///
    /// # Errors
    ///
    /// * [`permit::Error::ExpiredSignature`] - If `deadline` has passed.
    /// * [`permit::Error::InvalidSigner`] - If the signer is not `owner`.
    ///
    /// # Events
    ///
    /// * [`erc20::Approval`].
    #[allow(clippy::too_many_arguments)]
    pub fn permit(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        deadline: U256,
        v: u8,
        r: B256,
        s: B256,
    ) -> Result<(), permit::Error> {
        self.erc20_permit.permit(
            owner,
            spender,
            value,
            deadline,
            v,
            r,
            s,
            &mut self.erc20,
            &mut self.nonces,
        )
    }
}

impl CappedToken {
    /// Mints `amount` to `to` once the cap allows it, and records the mint.
    fn _mint_capped(&mut self, to: Address, amount: U256) -> Result<(), Error> {
        supply::increase(self.erc20.total_supply(), amount, MAX_SUPPLY)?;
        self.erc20._mint(to, amount)?;
        evm::log(TokensMinted { to, amount });
        Ok(())
    }

    /// Checks that `spender` may burn `amount` of `account`'s tokens before
    /// anything is written, so a rejected burn consumes no allowance.
    fn _ensure_burnable_from(
        &self,
        account: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), Error> {
        let allowance = self.erc20.allowance(account, spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance(
                erc20::ERC20InsufficientAllowance {
                    spender,
                    allowance,
                    needed: amount,
                },
            ));
        }

        let balance = self.erc20.balance_of(account);
        if balance < amount {
            return Err(Error::InsufficientBalance(
                erc20::ERC20InsufficientBalance {
                    sender: account,
                    balance,
                    needed: amount,
                },
            ));
        }

        Ok(())
    }
}

#[public]
impl IErc20 for CappedToken {
    type Error = Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        Ok(self.erc20.transfer(to, value)?)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        Ok(self.erc20.approve(spender, value)?)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        Ok(self.erc20.transfer_from(from, to, value)?)
    }
}

#[public]
impl IErc20Burnable for CappedToken {
    type Error = Error;

    fn burn(&mut self, value: U256) -> Result<(), Self::Error> {
        self.erc20.burn(value)?;
        evm::log(TokensBurned { from: msg::sender(), amount: value });
        Ok(())
    }

    fn burn_from(
        &mut self,
        account: Address,
        value: U256,
    ) -> Result<(), Self::Error> {
        self._ensure_burnable_from(account, msg::sender(), value)?;
        self.erc20.burn_from(account, value)?;
        evm::log(TokensBurned { from: account, amount: value });
        Ok(())
    }
}

#[public]
impl IErc20Metadata for CappedToken {
    fn name(&self) -> String {
        self.metadata.name()
    }

    fn symbol(&self) -> String {
        self.metadata.symbol()
    }

    fn decimals(&self) -> U8 {
        self.metadata.decimals()
    }
}

#[public]
impl IOwnable for CappedToken {
    type Error = Error;

    fn owner(&self) -> Address {
        self.ownable.owner()
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
    ) -> Result<(), Self::Error> {
        Ok(self.ownable.transfer_ownership(new_owner)?)
    }

    fn renounce_ownership(&mut self) -> Result<(), Self::Error> {
        Ok(self.ownable.renounce_ownership()?)
    }
}

#[public]
impl INonces for CappedToken {
    fn nonces(&self, owner: Address) -> U256 {
        self.nonces.nonces(owner)
    }
}

#[public]
impl IErc165 for CappedToken {
    fn supports_interface(&self, interface_id: B32) -> bool {
        <Erc20 as IErc165>::supports_interface(&self.erc20, interface_id)
            || <Erc20Metadata as IErc165>::supports_interface(
                &self.metadata,
                interface_id,
            )
    }
}
