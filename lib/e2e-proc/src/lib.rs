//! Procedural macros for end-to-end tests.
use proc_macro::TokenStream;


/// Defines an end-to-end test that receives one freshly funded account per
/// argument.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn mints(alice: Account, bob: Account) -> eyre::Result<()> {
///     let contract_addr = deploy(&alice).await?;
///     let contract = CappedToken::new(contract_addr, &alice.wallet);
///     let _ = watch!(contract.mint(bob.address(), uint!(1_U256)))?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr, input)
}
