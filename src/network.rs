//! Network parameter sets
//!
//! Each network is an immutable record keyed by name. Only the address
//! version bytes feed the script core; magic and ports are carried so the
//! record matches the protocol's parameter tables.
//!
//! Built-in networks are registered once per process. Custom parameter sets
//! can be loaded from JSON, and `CONSENSUS_SCRIPT_NETWORK` selects the
//! default network.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::constants::{DEFAULT_NETWORK, NETWORK_ENV_VAR};
use crate::error::{Result, ScriptError};
use crate::opcodes::OpcodeTable;

/// Parameters of one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub name: String,
    /// Version byte of pay-to-pubkey-hash addresses
    pub pubkeyhash_version: u8,
    /// Version byte of pay-to-script-hash addresses
    pub scripthash_version: u8,
    /// Version byte of WIF private keys
    #[serde(default = "default_private_key_version")]
    pub private_key_version: u8,
    pub magic: u32,
    pub port: u16,
    pub rpc_port: u16,
}

fn default_private_key_version() -> u8 {
    0x80
}

static NETWORKS: OnceLock<HashMap<&'static str, NetworkParams>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, NetworkParams> {
    NETWORKS.get_or_init(|| {
        let mut networks = HashMap::new();
        networks.insert("mainnet", NetworkParams::mainnet());
        networks.insert("testnet3", NetworkParams::testnet3());
        networks
    })
}

impl NetworkParams {
    pub fn mainnet() -> Self {
        NetworkParams {
            name: "mainnet".to_string(),
            pubkeyhash_version: 0x00,
            scripthash_version: 0x05,
            private_key_version: 0x80,
            magic: 0xd9b4bef9,
            port: 8333,
            rpc_port: 8332,
        }
    }

    pub fn testnet3() -> Self {
        NetworkParams {
            name: "testnet3".to_string(),
            pubkeyhash_version: 0x6f,
            scripthash_version: 0xc4,
            private_key_version: 0x6e,
            magic: 0x0709110b,
            port: 18333,
            rpc_port: 18332,
        }
    }

    /// Look up a built-in network
    pub fn by_name(name: &str) -> Result<&'static NetworkParams> {
        registry()
            .get(name)
            .ok_or_else(|| ScriptError::UnknownNetwork(name.to_string()))
    }

    /// Names of the built-in networks
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = registry().keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Parse a custom parameter set
    pub fn from_json(json: &str) -> Result<NetworkParams> {
        Ok(serde_json::from_str(json)?)
    }

    /// Network named by `CONSENSUS_SCRIPT_NETWORK`, or mainnet
    pub fn from_env() -> Result<&'static NetworkParams> {
        match std::env::var(NETWORK_ENV_VAR) {
            Ok(name) => {
                debug!("network selected from {}: {}", NETWORK_ENV_VAR, name);
                Self::by_name(&name)
            }
            Err(_) => Self::by_name(DEFAULT_NETWORK),
        }
    }

    /// The opcode table; identical for every network
    pub fn opcodes(&self) -> &'static OpcodeTable {
        OpcodeTable::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_networks() {
        let mainnet = NetworkParams::by_name("mainnet").unwrap();
        assert_eq!(mainnet.pubkeyhash_version, 0x00);
        assert_eq!(mainnet.scripthash_version, 0x05);
        assert_eq!(mainnet.magic, 0xd9b4bef9);

        let testnet = NetworkParams::by_name("testnet3").unwrap();
        assert_eq!(testnet.pubkeyhash_version, 0x6f);
        assert_eq!(testnet.scripthash_version, 0xc4);
        assert_eq!(testnet.rpc_port, 18332);

        assert_eq!(NetworkParams::names(), vec!["mainnet", "testnet3"]);
    }

    #[test]
    fn test_unknown_network() {
        let err = NetworkParams::by_name("regtest").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownNetwork(ref n) if n == "regtest"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "name": "regtest",
            "pubkeyhash_version": 111,
            "scripthash_version": 196,
            "magic": 3669344250,
            "port": 18444,
            "rpc_port": 18443
        }"#;
        let params = NetworkParams::from_json(json).unwrap();
        assert_eq!(params.name, "regtest");
        assert_eq!(params.pubkeyhash_version, 0x6f);
        assert_eq!(params.private_key_version, 0x80);

        assert!(matches!(
            NetworkParams::from_json("{\"name\": 1}"),
            Err(ScriptError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&NetworkParams::mainnet()).unwrap();
        assert_eq!(NetworkParams::from_json(&json).unwrap(), NetworkParams::mainnet());
    }

    #[test]
    fn test_opcodes_shared_across_networks() {
        let a = NetworkParams::mainnet();
        let b = NetworkParams::testnet3();
        assert!(std::ptr::eq(a.opcodes(), b.opcodes()));
    }
}
