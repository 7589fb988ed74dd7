//! Script template and interpreter constants

/// Largest value encodable as a small-integer opcode (OP_16)
pub const MAX_SMALL_INT: u8 = 16;

/// Offset between a small integer n and its opcode byte (OP_n = 0x50 + n)
pub const SMALL_INT_BASE: u8 = 0x50;

/// Largest data push expressed by a bare length byte
pub const MAX_DIRECT_PUSH: usize = 0x4b;

/// Length of a RIPEMD160(SHA256(x)) digest
pub const HASH160_LEN: usize = 20;

/// Length of the digest a signature commits to
pub const DIGEST_LEN: usize = 32;

/// Public key length bounds: compressed (33) to uncompressed (65)
pub const MIN_PUBKEY_LEN: usize = 33;
pub const MAX_PUBKEY_LEN: usize = 65;

/// Signature length bounds including the trailing sighash byte
pub const MIN_SIGNATURE_LEN: usize = 9;
pub const MAX_SIGNATURE_LEN: usize = 73;

/// Largest key count OP_CHECKMULTISIG evaluates
pub const MAX_MULTISIG_KEYS: u8 = 3;

/// Largest payload of a standard OP_RETURN output
pub const MAX_NULL_DATA_LEN: usize = 40;

/// Environment variable selecting the default network
pub const NETWORK_ENV_VAR: &str = "CONSENSUS_SCRIPT_NETWORK";

/// Network used when nothing else is configured
pub const DEFAULT_NETWORK: &str = "mainnet";
