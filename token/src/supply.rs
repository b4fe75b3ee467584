//! Supply cap arithmetic.
//!
//! Every increase of the total supply goes through [`increase`], which
//! refuses to move the supply above the cap.
use alloy_primitives::U256;
pub use sol::*;

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Indicates an operation that failed because the total supply would
        /// exceed the `cap`.
        ///
        /// * `increased_supply` - Total supply the operation would produce.
        /// * `cap` - Maximum total supply of the token.
        #[derive(Debug, PartialEq, Eq)]
        #[allow(missing_docs)]
        error SupplyCapExceeded(uint256 increased_supply, uint256 cap);
    }
}

/// Returns the total supply after adding `amount` to `total_supply`.
///
/// # Arguments
///
/// * `total_supply` - Current total supply.
/// * `amount` - Amount of tokens to be created.
/// * `cap` - Maximum total supply.
///
/// # Errors
///
/// * [`SupplyCapExceeded`] - If the new supply is greater than `cap`. An
///   addition that overflows [`U256`] reports [`U256::MAX`] as the increased
///   supply.
pub fn increase(
    total_supply: U256,
    amount: U256,
    cap: U256,
) -> Result<U256, SupplyCapExceeded> {
    match total_supply.checked_add(amount) {
        Some(increased_supply) if increased_supply <= cap => {
            Ok(increased_supply)
        }
        increased_supply => Err(SupplyCapExceeded {
            increased_supply: increased_supply.unwrap_or(U256::MAX),
            cap,
        }),
    }
}
