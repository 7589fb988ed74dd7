//! # Consensus-Script
//!
//! Script codec, interpreter and template classifier for a UTXO ledger.
//!
//! This crate provides pure, side-effect-free functions over the script
//! sublanguage attached to transaction inputs and outputs: a byte-exact
//! codec, a reduced stack-machine interpreter, structural recognisers for
//! the standard templates, address derivation and a readable formatter.
//!
//! ## Architecture
//!
//! Raw bytes flow through the codec into a decoded [`Script`], which is then
//! consumed independently by:
//! - the interpreter ([`script::execute`]), given an operand stack and an
//!   optional verification context
//! - the classifier ([`classify`]), whose matches feed [`address`]
//! - the formatter ([`format::to_readable`])
//!
//! ## Design Principles
//!
//! 1. **No exceptions in the core**: malformed input decodes, executes and
//!    classifies to a defined value; rejection is `false` or `None`
//! 2. **Exact Version Pinning**: all consensus-critical dependencies pinned to exact versions
//! 3. **Immutable tables**: opcodes and network parameters are built once
//!    per process and never mutated
//!
//! ## Usage
//!
//! ```rust
//! use consensus_script::ScriptEngine;
//! use consensus_script::types::OutputType;
//!
//! let engine = ScriptEngine::new("mainnet").unwrap();
//! let script = engine
//!     .decode_hex("76a914edbdd23480fbe8d11fdbf615147724d4da29fa7d88ac")
//!     .unwrap();
//! assert_eq!(engine.output_type(&script), OutputType::PubkeyHash);
//! assert_eq!(engine.addresses(&script), vec!["1Ng4YU2e2H3E86syX2qrsmD9opBHZ42vCF"]);
//! ```

pub mod types;
pub mod constants;
pub mod opcodes;
pub mod codec;
pub mod script;
pub mod classify;
pub mod crypto;
pub mod address;
pub mod network;
pub mod format;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use opcodes::{Opcode, OpcodeTable, SighashType};
pub use network::NetworkParams;
pub use script::{Secp256k1Verifier, SignatureVerifier, VerificationContext};
pub use error::{ScriptError, Result};

/// Script operations bound to one network's parameters
///
/// # Examples
///
/// ```
/// use consensus_script::ScriptEngine;
///
/// let engine = ScriptEngine::new("testnet3").unwrap();
/// let script = engine
///     .decode_hex("a9143e71b020e16a160f2fe9e17421800317ceddb8db87")
///     .unwrap();
/// assert_eq!(engine.addresses(&script), vec!["2MxwQ5MjWJTqecb2nnawMH9eX6cjnb3HgND"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptEngine {
    network: NetworkParams,
}

impl ScriptEngine {
    /// Engine for a built-in network
    ///
    /// # Examples
    ///
    /// ```
    /// use consensus_script::ScriptEngine;
    ///
    /// assert!(ScriptEngine::new("mainnet").is_ok());
    /// assert!(ScriptEngine::new("nonesuch").is_err());
    /// ```
    pub fn new(network: &str) -> Result<Self> {
        Ok(Self::with_params(NetworkParams::by_name(network)?.clone()))
    }

    /// Engine for the network selected by `CONSENSUS_SCRIPT_NETWORK`
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_params(NetworkParams::from_env()?.clone()))
    }

    /// Engine for an explicit parameter set
    pub fn with_params(network: NetworkParams) -> Self {
        Self { network }
    }

    /// Network parameters addresses are derived under
    pub fn network(&self) -> &NetworkParams {
        &self.network
    }

    /// The process-wide opcode table
    pub fn opcodes(&self) -> &'static OpcodeTable {
        self.network.opcodes()
    }

    /// Decode raw script bytes; never fails
    pub fn decode(&self, bytes: &[u8]) -> Script {
        codec::decode(bytes)
    }

    /// Decode a hex-encoded script
    pub fn decode_hex(&self, hex: &str) -> Result<Script> {
        codec::decode_hex(hex)
    }

    /// Encode a script to its canonical bytes
    pub fn encode(&self, script: &Script) -> ByteString {
        codec::encode(script)
    }

    /// Execute `script` on `stack`
    ///
    /// # Examples
    ///
    /// ```
    /// use consensus_script::{ScriptEngine, Stack};
    ///
    /// let engine = ScriptEngine::new("mainnet").unwrap();
    /// let script = engine.decode(&[0x76]); // OP_DUP
    /// let mut stack = Stack::new();
    /// assert!(!engine.execute(&script, &mut stack, None));
    /// ```
    pub fn execute(
        &self,
        script: &Script,
        stack: &mut Stack,
        ctx: Option<&VerificationContext<'_>>,
    ) -> bool {
        script::execute(script, stack, ctx)
    }

    /// Run `script_sig` then `script_pubkey` and accept on a true top item
    pub fn verify_script(
        &self,
        script_sig: &Script,
        script_pubkey: &Script,
        ctx: Option<&VerificationContext<'_>>,
    ) -> bool {
        script::verify_script(script_sig, script_pubkey, ctx)
    }

    /// Classify an output script
    pub fn output_type(&self, script: &Script) -> OutputType {
        classify::get_output_type(script)
    }

    /// Addresses derived under this engine's network
    pub fn addresses(&self, script: &Script) -> Vec<String> {
        address::get_addresses(script, &self.network)
    }

    /// Render a script for display, trimmed per `hint`
    pub fn readable(&self, script: &Script, hint: Option<TypeHint>) -> String {
        format::to_readable(script, hint)
    }
}
