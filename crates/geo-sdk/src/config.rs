//! Network selection and contract addresses.

use serde::{Deserialize, Serialize};

use crate::codec::bytes::Address;

/// Geo network selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    /// Testnet (the only deployed network)
    #[default]
    Testnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Testnet => "TESTNET",
        }
    }

    /// Built-in contract addresses for this network.
    pub fn config(&self) -> NetworkConfig {
        NetworkConfig::for_network(*self)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const TESTNET_SPACE_REGISTRY: Address =
    Address::from_hex_literal("B01683b2f0d38d43fcD4D9aAB980166988924132");

/// Contract addresses the assemblers target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub network: Network,

    /// Space registry: target of every `enter()` call.
    pub space_registry_address: Address,

    /// DAO space factory. Not every deployment publishes one; DAO space
    /// creation needs it either here or as a per-call override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_space_factory_address: Option<Address>,
}

impl NetworkConfig {
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            space_registry_address: TESTNET_SPACE_REGISTRY,
            dao_space_factory_address: None,
        }
    }

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Testnet => Self::testnet(),
        }
    }

    /// Sets the DAO space factory address.
    pub fn with_dao_space_factory(mut self, address: Address) -> Self {
        self.dao_space_factory_address = Some(address);
        self
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::testnet()
    }
}
