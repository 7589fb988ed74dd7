//! Address derivation from classified scripts
//!
//! An address is `base58(version || hash || checksum)` where the checksum is
//! the first 4 bytes of SHA256d over `version || hash`.

use crate::classify::*;
use crate::crypto::{hash160, sha256d};
use crate::error::{Result, ScriptError};
use crate::network::NetworkParams;
use crate::types::*;

const CHECKSUM_LEN: usize = 4;

/// Base58check encode `hash` under `version`
pub fn hash_to_address(hash: &[u8], version: u8) -> String {
    let mut payload = Vec::with_capacity(1 + hash.len() + CHECKSUM_LEN);
    payload.push(version);
    payload.extend_from_slice(hash);
    let checksum = sha256d(&payload);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(payload).into_string()
}

/// Decode an address into its version byte and hash
pub fn address_to_hash(address: &str) -> Result<(u8, ByteString)> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| ScriptError::InvalidAddress(format!("{}: {}", address, e)))?;

    if decoded.len() <= CHECKSUM_LEN {
        return Err(ScriptError::InvalidAddress(format!("{}: too short", address)));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if sha256d(payload)[..CHECKSUM_LEN] != *checksum {
        return Err(ScriptError::ChecksumMismatch(address.to_string()));
    }

    Ok((payload[0], payload[1..].to_vec()))
}

/// Pay-to-pubkey-hash address for a public key hash
pub fn pubkeyhash_address(hash: &[u8], network: &NetworkParams) -> String {
    hash_to_address(hash, network.pubkeyhash_version)
}

/// Pay-to-pubkey-hash address for a public key
pub fn pubkey_to_address(public_key: &[u8], network: &NetworkParams) -> String {
    pubkeyhash_address(&hash160(public_key), network)
}

/// Pay-to-script-hash address for a script hash
pub fn script_hash_to_address(hash: &[u8], network: &NetworkParams) -> String {
    hash_to_address(hash, network.scripthash_version)
}

/// Addresses a script pays to or spends from
///
/// Multisig yields one address per key. An unrecognised script yields none.
pub fn get_addresses(script: &Script, network: &NetworkParams) -> Vec<String> {
    if let Some(hash) = is_pubkeyhash(script) {
        vec![pubkeyhash_address(hash, network)]
    } else if let Some(key) = is_pubkey(script) {
        vec![pubkey_to_address(key, network)]
    } else if let Some((_, key)) = is_pubkeyhash_in(script) {
        vec![pubkey_to_address(key, network)]
    } else if let Some(hash) = is_scripthash(script) {
        vec![script_hash_to_address(hash, network)]
    } else if let Some(multisig) = is_multisig(script) {
        multisig
            .keys
            .iter()
            .map(|key| pubkey_to_address(key, network))
            .collect()
    } else if is_scripthash_in(script).is_some() {
        // is_scripthash_in only matches when the last element is data
        script
            .last()
            .and_then(ScriptElement::as_data)
            .map(|redeem| vec![script_hash_to_address(&hash160(redeem), network)])
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_hex;

    #[test]
    fn test_mainnet_pubkeyhash_address() {
        let hash = hex::decode("edbdd23480fbe8d11fdbf615147724d4da29fa7d").unwrap();
        assert_eq!(hash_to_address(&hash, 0x00), "1Ng4YU2e2H3E86syX2qrsmD9opBHZ42vCF");
    }

    #[test]
    fn test_scripthash_addresses() {
        let hash = hex::decode("19a7d869032368fd1f1e26e5e73a4ad0e474960e").unwrap();
        assert_eq!(
            script_hash_to_address(&hash, &NetworkParams::mainnet()),
            "342ftSRCvFHfCeFFBuz4xwbeqnDw6BGUey"
        );

        let hash = hex::decode("3e71b020e16a160f2fe9e17421800317ceddb8db").unwrap();
        assert_eq!(
            script_hash_to_address(&hash, &NetworkParams::testnet3()),
            "2MxwQ5MjWJTqecb2nnawMH9eX6cjnb3HgND"
        );
    }

    #[test]
    fn test_address_to_hash() {
        let (version, hash) = address_to_hash("1Ng4YU2e2H3E86syX2qrsmD9opBHZ42vCF").unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(hex::encode(hash), "edbdd23480fbe8d11fdbf615147724d4da29fa7d");

        let (version, _) = address_to_hash("2MxwQ5MjWJTqecb2nnawMH9eX6cjnb3HgND").unwrap();
        assert_eq!(version, 0xc4);
    }

    #[test]
    fn test_address_to_hash_errors() {
        assert!(matches!(
            address_to_hash("1Ng4YU2e2H3E86syX2qrsmD9opBHZ42vCG"),
            Err(ScriptError::ChecksumMismatch(_))
        ));
        assert!(matches!(address_to_hash("0OIl"), Err(ScriptError::InvalidAddress(_))));
        assert!(matches!(address_to_hash("1"), Err(ScriptError::InvalidAddress(_))));
    }

    #[test]
    fn test_get_addresses_pubkeyhash_output() {
        let script = decode_hex("76a914edbdd23480fbe8d11fdbf615147724d4da29fa7d88ac").unwrap();
        assert_eq!(
            get_addresses(&script, &NetworkParams::mainnet()),
            vec!["1Ng4YU2e2H3E86syX2qrsmD9opBHZ42vCF"]
        );
    }

    #[test]
    fn test_get_addresses_pubkey_matches_pubkeyhash_input() {
        let key = hex::decode(
            "04e365859b3c78a8b7c202412b949ebca58e147dba297be29eee53cd3e1d300a64\
             19bc780cc9aec0dc94ed194e91c8f6433f1b781ee00eac0ead2aae1e8e0712c6",
        )
        .unwrap();
        let p2pk = Script::new(vec![
            ScriptElement::Data(key.clone()),
            ScriptElement::Op(crate::opcodes::Opcode::CheckSig),
        ]);
        assert_eq!(
            get_addresses(&p2pk, &NetworkParams::mainnet()),
            vec!["127k9DmeZa7JAwxG2TPHTTMbnwP181vNYb"]
        );
    }

    #[test]
    fn test_get_addresses_multisig() {
        let script = decode_hex(
            "5121\
             02c08786d63f78bd0a6777ffe9c978cf5899756cfc32bfad09a89e211aeb926242\
             21\
             03a0ab3f0d9bd9ed7d4bcbcd8d9e71d72e6c4aa5e3a2e5a2a4f0f7c1a9b0c9d8e7\
             52ae",
        )
        .unwrap();
        let addresses = get_addresses(&script, &NetworkParams::mainnet());
        assert_eq!(addresses.len(), 2);
        assert!(addresses.iter().all(|a| a.starts_with('1')));
        assert_ne!(addresses[0], addresses[1]);
    }

    #[test]
    fn test_get_addresses_unrecognized() {
        let script = decode_hex("6a0401020304").unwrap();
        assert!(get_addresses(&script, &NetworkParams::mainnet()).is_empty());
    }
}
