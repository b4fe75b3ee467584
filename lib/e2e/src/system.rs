use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill,
            NonceFiller, WalletFiller,
        },
        Identity, RootProvider,
    },
    transports::http::{reqwest::Url, Client, Http},
};
use eyre::{Context, Result};

/// Environment variable holding the RPC endpoint of the dev node.
pub const RPC_URL: &str = "RPC_URL";

/// Environment variable holding the address of the `StylusDeployer`
/// contract, required to deploy contracts with a constructor.
pub const DEPLOYER_ADDRESS: &str = "DEPLOYER_ADDRESS";

/// An `alloy` provider with the recommended fillers and a signing wallet.
pub type Wallet = FillProvider<
    JoinFill<
        JoinFill<
            Identity,
            JoinFill<
                GasFiller,
                JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>,
            >,
        >,
        WalletFiller<EthereumWallet>,
    >,
    RootProvider<Http<Client>>,
    Http<Client>,
    Ethereum,
>;

/// Loads the `name` environment variable.
pub(crate) fn env(name: &str) -> Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// Reads and parses [`RPC_URL`].
pub(crate) fn rpc_url() -> Result<Url> {
    env(RPC_URL)?
        .parse()
        .wrap_err(format!("failed to parse {RPC_URL} into a URL"))
}
