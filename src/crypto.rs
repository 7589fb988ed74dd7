//! Hash primitives used by the interpreter and address derivation

use bitcoin_hashes::{sha256d, Hash as BitcoinHash};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::types::{Digest as Hash256, Hash160};

/// RIPEMD160(SHA256(x))
pub fn hash160(data: &[u8]) -> Hash160 {
    let sha256_hash = Sha256::digest(data);
    let ripemd160_hash = Ripemd160::digest(sha256_hash);
    let mut hash = Hash160::default();
    hash.copy_from_slice(&ripemd160_hash);
    hash
}

/// SHA256(SHA256(x))
pub fn sha256d(data: &[u8]) -> Hash256 {
    let result = sha256d::Hash::hash(data);
    let mut hash = Hash256::default();
    hash.copy_from_slice(&result);
    hash
}
