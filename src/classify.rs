//! Standard script template recognition
//!
//! Each classifier is a pure structural predicate over a decoded script.
//! A match yields the template's parameters; no match yields `None` (or
//! `false`) so callers can fall back to non-standard handling.

use crate::codec::decode;
use crate::constants::*;
use crate::opcodes::Opcode;
use crate::types::*;

/// `OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG`
///
/// Returns the public key hash.
pub fn is_pubkeyhash(script: &Script) -> Option<&[u8]> {
    match script.elements() {
        [ScriptElement::Op(Opcode::Dup), ScriptElement::Op(Opcode::Hash160), ScriptElement::Data(hash), ScriptElement::Op(Opcode::EqualVerify), ScriptElement::Op(Opcode::CheckSig)]
            if hash.len() == HASH160_LEN =>
        {
            Some(hash.as_slice())
        }
        _ => None,
    }
}

/// [`is_pubkeyhash`] locking to exactly `hash`
pub fn is_pubkeyhash_for(script: &Script, hash: &[u8]) -> bool {
    is_pubkeyhash(script) == Some(hash)
}

/// `<pubkey> OP_CHECKSIG`
///
/// Returns the public key.
pub fn is_pubkey(script: &Script) -> Option<&[u8]> {
    match script.elements() {
        [ScriptElement::Data(key), ScriptElement::Op(Opcode::CheckSig)] => Some(key.as_slice()),
        _ => None,
    }
}

/// [`is_pubkey`] locking to exactly `key`
pub fn is_pubkey_for(script: &Script, key: &[u8]) -> bool {
    is_pubkey(script) == Some(key)
}

/// `<signature> <pubkey>` spending a pay-to-pubkey-hash output
///
/// Returns `(signature, pubkey)`.
pub fn is_pubkeyhash_in(script: &Script) -> Option<(&[u8], &[u8])> {
    match script.elements() {
        [ScriptElement::Data(sig), ScriptElement::Data(key)]
            if (MIN_SIGNATURE_LEN..=MAX_SIGNATURE_LEN).contains(&sig.len())
                && (MIN_PUBKEY_LEN..=MAX_PUBKEY_LEN).contains(&key.len()) =>
        {
            Some((sig.as_slice(), key.as_slice()))
        }
        _ => None,
    }
}

/// `OP_HASH160 <20 bytes> OP_EQUAL`
///
/// Returns the script hash.
pub fn is_scripthash(script: &Script) -> Option<&[u8]> {
    match script.elements() {
        [ScriptElement::Op(Opcode::Hash160), ScriptElement::Data(hash), ScriptElement::Op(Opcode::Equal)]
            if hash.len() == HASH160_LEN =>
        {
            Some(hash.as_slice())
        }
        _ => None,
    }
}

/// `m <key>... n OP_CHECKMULTISIG`
pub fn is_multisig(script: &Script) -> Option<MultisigMatch> {
    let elements = script.elements();
    if elements.len() < 4 {
        return None;
    }

    let (first, rest) = elements.split_first()?;
    let (last, rest) = rest.split_last()?;
    let (count, keys) = rest.split_last()?;

    let m = first.as_number()?;
    if !last.is_op(Opcode::CheckMultiSig) {
        return None;
    }
    let n = count.as_number()?;
    if n as usize + 3 != elements.len() || m > n {
        return None;
    }

    let keys = keys
        .iter()
        .map(|k| k.as_data().map(<[u8]>::to_vec))
        .collect::<Option<Vec<_>>>()?;

    Some(MultisigMatch { m, n, keys })
}

/// Pay-to-script-hash spend whose redeem script is multisig
///
/// Only multisig redeem scripts are recognised; arbitrary redeem scripts in
/// the final push are not.
pub fn is_scripthash_in(script: &Script) -> Option<MultisigMatch> {
    let redeem = script.last()?.as_data()?;
    is_multisig(&decode(redeem))
}

/// `OP_RETURN <data up to 40 bytes>`
///
/// Returns the payload.
pub fn is_null_data(script: &Script) -> Option<&[u8]> {
    match script.elements() {
        [ScriptElement::Op(Opcode::Return), ScriptElement::Data(data)]
            if data.len() <= MAX_NULL_DATA_LEN =>
        {
            Some(data.as_slice())
        }
        _ => None,
    }
}

/// Classify an output script
pub fn get_output_type(script: &Script) -> OutputType {
    if is_pubkeyhash(script).is_some() {
        OutputType::PubkeyHash
    } else if is_pubkey(script).is_some() {
        OutputType::Pubkey
    } else if is_scripthash(script).is_some() {
        OutputType::ScriptHash
    } else if is_null_data(script).is_some() {
        OutputType::NullData
    } else {
        OutputType::Unrecognized
    }
}
