use tracing::info;

use crate::codec::bytes::{Address, to_prefixed_hex};
use crate::config::Network;
use crate::contracts::create_personal_space_calldata;

/// Transaction to send to register a personal space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpaceResult {
    pub to: Address,
    /// `0x`-prefixed hex.
    pub calldata: String,
}

/// Builds the registry call creating a personal space for the sender.
pub fn create_space() -> CreateSpaceResult {
    create_space_on(Network::default())
}

/// Like [`create_space`], against the registry of `network`.
pub fn create_space_on(network: Network) -> CreateSpaceResult {
    let to = network.config().space_registry_address;
    let calldata = to_prefixed_hex(&create_personal_space_calldata());
    info!(%network, %to, "built personal space creation calldata");
    CreateSpaceResult { to, calldata }
}
