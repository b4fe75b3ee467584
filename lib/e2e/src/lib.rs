//! End-to-end testing for Stylus contracts deployed to a Nitro dev node.
//!
//! Tests are written with the [`test`] attribute, which funds one
//! [`Account`] for every argument of the test function.
mod account;
mod deploy;
mod error;
mod event;
mod receipt;
mod system;

pub use account::Account;
pub use deploy::Deployer;
pub use e2e_proc::test;
pub use error::Revert;
pub use event::EventExt;
pub use system::{Wallet, DEPLOYER_ADDRESS, RPC_URL};
