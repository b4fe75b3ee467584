use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{uint, Address, B256, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::{local::PrivateKeySigner, Signature, Signer},
};
use eyre::{Context, Result};
use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use crate::{
    deploy::Deployer,
    system::{rpc_url, Wallet},
};

/// Pre-funded account of the Nitro dev node.
const MASTER_PRIVATE_KEY: &str =
    "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

/// Gas funds sent to every new account: 0.1 ETH.
const DEFAULT_FUNDING_ETH: U256 = uint!(100_000_000_000_000_000_U256);

/// Accounts are funded from a single master wallet, so funding transactions
/// must not race on its nonce.
static FUNDING_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// A funded test account.
#[derive(Clone, Debug)]
pub struct Account {
    /// The account's local private key.
    pub signer: PrivateKeySigner,
    /// Provider that signs transactions with [`Self::signer`].
    pub wallet: Wallet,
}

impl Account {
    /// Creates a random account and funds it with
    /// [`DEFAULT_FUNDING_ETH`] from the master wallet.
    ///
    /// # Errors
    ///
    /// May fail if [`crate::RPC_URL`] is not set or funding fails.
    pub async fn new() -> Result<Self> {
        let _guard = FUNDING_LOCK.lock().await;

        let signer = PrivateKeySigner::random();
        let rpc_url = rpc_url()?;

        let master: PrivateKeySigner = MASTER_PRIVATE_KEY
            .parse()
            .wrap_err("failed to parse master private key")?;
        let master_wallet = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(EthereumWallet::from(master.clone()))
            .on_http(rpc_url.clone());

        let tx = TransactionRequest::default()
            .with_from(master.address())
            .with_to(signer.address())
            .with_value(DEFAULT_FUNDING_ETH);

        master_wallet
            .send_transaction(tx)
            .await?
            .watch()
            .await
            .wrap_err("account wasn't funded")?;

        let wallet = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(EthereumWallet::from(signer.clone()))
            .on_http(rpc_url);

        Ok(Self { signer, wallet })
    }

    /// Hex-encoded private key of this account.
    #[must_use]
    pub fn pk(&self) -> String {
        alloy::hex::encode(self.signer.to_bytes())
    }

    /// Address of this account.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// RPC endpoint this account's wallet is connected to.
    #[must_use]
    pub fn url(&self) -> &str {
        self.wallet.client().transport().url()
    }

    /// Signs `hash` with this account's key.
    ///
    /// # Errors
    ///
    /// May fail if the signer cannot produce a signature.
    pub async fn sign_hash(&self, hash: &B256) -> Result<Signature> {
        Ok(self.signer.sign_hash(hash).await?)
    }

    /// Deployer that sends transactions on behalf of this account.
    #[must_use]
    pub fn as_deployer(&self) -> Deployer {
        Deployer::new(self.url().to_string(), self.pk())
    }
}
