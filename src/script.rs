//! Script interpreter
//!
//! A reduced stack machine: data pushes, `OP_DUP`, `OP_HASH160`,
//! `OP_EQUAL[VERIFY]`, `OP_CHECKSIG[VERIFY]` and `OP_CHECKMULTISIG[VERIFY]`.
//! Any other element, small integers `OP_1`..`OP_16` included, rejects the
//! script. Multisig counts are therefore supplied as one-byte data pushes.
//!
//! Execution never raises. Every precondition failure (short stack,
//! malformed operand, missing verification context, failed check) makes
//! `execute` return `false`, which callers must treat as a final rejection.

use std::fmt;

use log::{debug, trace};
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, Verification, VerifyOnly};

use crate::constants::*;
use crate::crypto::hash160;
use crate::opcodes::{Opcode, SighashType};
use crate::types::*;

/// Script boolean encoding: `[1]` for true, empty for false
pub fn bool_to_bytes(value: bool) -> ByteString {
    if value {
        vec![1]
    } else {
        vec![]
    }
}

/// Any non-empty byte string is true
pub fn bytes_to_bool(bytes: &[u8]) -> bool {
    !bytes.is_empty()
}

/// Checks a signature against a public key and a signed digest
pub trait SignatureVerifier {
    fn verify(&self, digest: &Digest, signature: &[u8], public_key: &[u8]) -> bool;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&Digest, &[u8], &[u8]) -> bool,
{
    fn verify(&self, digest: &Digest, signature: &[u8], public_key: &[u8]) -> bool {
        self(digest, signature, public_key)
    }
}

/// ECDSA verification over secp256k1
///
/// Signatures are parsed leniently from DER and normalised to low-S before
/// verification, so historical high-S signatures still verify.
pub struct Secp256k1Verifier {
    secp: Secp256k1<VerifyOnly>,
}

impl Secp256k1Verifier {
    pub fn new() -> Self {
        Self { secp: Secp256k1::verification_only() }
    }
}

impl Default for Secp256k1Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(&self, digest: &Digest, signature: &[u8], public_key: &[u8]) -> bool {
        verify_signature(&self.secp, digest, signature, public_key)
    }
}

/// Verify a DER signature using secp256k1
fn verify_signature<C: Verification>(
    secp: &Secp256k1<C>,
    digest: &Digest,
    signature_bytes: &[u8],
    pubkey_bytes: &[u8],
) -> bool {
    let pubkey = match PublicKey::from_slice(pubkey_bytes) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    let mut signature = match Signature::from_der_lax(signature_bytes) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    signature.normalize_s();

    let message = Message::from_digest(*digest);
    secp.verify_ecdsa(&message, &signature, &pubkey).is_ok()
}

/// Signed digest plus the capability to check signatures against it
#[derive(Clone, Copy)]
pub struct VerificationContext<'a> {
    digest: Digest,
    verifier: &'a dyn SignatureVerifier,
}

impl<'a> VerificationContext<'a> {
    pub fn new(digest: Digest, verifier: &'a dyn SignatureVerifier) -> Self {
        Self { digest, verifier }
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn verify(&self, signature: &[u8], public_key: &[u8]) -> bool {
        self.verifier.verify(&self.digest, signature, public_key)
    }
}

impl fmt::Debug for VerificationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationContext")
            .field("digest", &hex::encode(self.digest))
            .finish_non_exhaustive()
    }
}

fn reject(op: Opcode, reason: &str) -> bool {
    debug!("{} rejected: {}", op, reason);
    false
}

/// Execute a script against `stack`
///
/// Returns `true` when the end of the script is reached without a hard
/// failure. The final stack contents are left for the caller to inspect.
pub fn execute(
    script: &Script,
    stack: &mut Stack,
    ctx: Option<&VerificationContext<'_>>,
) -> bool {
    for (pc, element) in script.iter().enumerate() {
        trace!("pc={} depth={} element={:?}", pc, stack.len(), element);
        let ok = match element {
            ScriptElement::Data(data) => {
                stack.push(data.clone());
                true
            }
            ScriptElement::Number(n) => {
                debug!("small integer {} at pc={} is not executable", n.get(), pc);
                false
            }
            ScriptElement::Op(op) => execute_opcode(*op, stack, ctx),
            ScriptElement::Raw(byte) => {
                debug!("unknown opcode byte 0x{:02x} at pc={}", byte, pc);
                false
            }
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Run `script_sig` then `script_pubkey` on one fresh stack
///
/// Accepts when both runs succeed and the top of the final stack is true.
pub fn verify_script(
    script_sig: &Script,
    script_pubkey: &Script,
    ctx: Option<&VerificationContext<'_>>,
) -> bool {
    let mut stack = Stack::new();

    if !execute(script_sig, &mut stack, ctx) {
        return false;
    }

    if !execute(script_pubkey, &mut stack, ctx) {
        return false;
    }

    stack.top().map_or(false, |top| bytes_to_bool(top))
}

/// Execute a single opcode
fn execute_opcode(op: Opcode, stack: &mut Stack, ctx: Option<&VerificationContext<'_>>) -> bool {
    match op {
        Opcode::Dup => match stack.top().cloned() {
            Some(item) => {
                stack.push(item);
                true
            }
            None => reject(op, "empty stack"),
        },

        Opcode::Hash160 => match stack.pop() {
            Some(item) => {
                stack.push(hash160(&item).to_vec());
                true
            }
            None => reject(op, "empty stack"),
        },

        Opcode::Equal | Opcode::EqualVerify => {
            let (Some(a), Some(b)) = (stack.pop(), stack.pop()) else {
                return reject(op, "fewer than 2 stack items");
            };
            finish(op, stack, a == b, op == Opcode::EqualVerify)
        }

        Opcode::CheckSig | Opcode::CheckSigVerify => {
            op_checksig(op, stack, ctx, op == Opcode::CheckSigVerify)
        }

        Opcode::CheckMultiSig | Opcode::CheckMultiSigVerify => {
            op_checkmultisig(op, stack, ctx, op == Opcode::CheckMultiSigVerify)
        }

        _ => reject(op, "unsupported opcode"),
    }
}

/// Push the result, or for the VERIFY forms fail on false
fn finish(op: Opcode, stack: &mut Stack, result: bool, verify: bool) -> bool {
    if verify {
        if !result {
            return reject(op, "verification failed");
        }
    } else {
        stack.push(bool_to_bytes(result));
    }
    true
}

/// Strip the sighash byte, which must be SIGHASH_ALL
fn signature_body(signature: &[u8]) -> Option<&[u8]> {
    let (&flag, body) = signature.split_last()?;
    (flag == SighashType::All as u8).then_some(body)
}

/// Pop a single-byte count in `1..=max`
fn pop_count(stack: &mut Stack, max: u8) -> Option<usize> {
    match stack.pop()?.as_slice() {
        &[n] if (1..=max).contains(&n) => Some(n as usize),
        _ => None,
    }
}

fn op_checksig(
    op: Opcode,
    stack: &mut Stack,
    ctx: Option<&VerificationContext<'_>>,
    verify: bool,
) -> bool {
    let Some(ctx) = ctx else {
        return reject(op, "no verification context");
    };
    if stack.len() < 2 {
        return reject(op, "fewer than 2 stack items");
    }

    let (Some(pubkey), Some(signature)) = (stack.pop(), stack.pop()) else {
        return reject(op, "fewer than 2 stack items");
    };
    let Some(body) = signature_body(&signature) else {
        return reject(op, "sighash type is not SIGHASH_ALL");
    };

    let result = ctx.verify(body, &pubkey);
    finish(op, stack, result, verify)
}

fn op_checkmultisig(
    op: Opcode,
    stack: &mut Stack,
    ctx: Option<&VerificationContext<'_>>,
    verify: bool,
) -> bool {
    let Some(ctx) = ctx else {
        return reject(op, "no verification context");
    };
    if stack.len() < 3 {
        return reject(op, "fewer than 3 stack items");
    }

    let Some(n) = pop_count(stack, MAX_MULTISIG_KEYS) else {
        return reject(op, "key count out of range");
    };
    if stack.len() < n + 1 {
        return reject(op, "not enough keys on stack");
    }

    let mut keys = Vec::with_capacity(n);
    for _ in 0..n {
        match stack.pop() {
            Some(key) if (MIN_PUBKEY_LEN..=MAX_PUBKEY_LEN).contains(&key.len()) => keys.push(key),
            _ => return reject(op, "malformed public key"),
        }
    }

    let Some(m) = pop_count(stack, n as u8) else {
        return reject(op, "signature count out of range");
    };
    if stack.len() < m + 1 {
        return reject(op, "not enough signatures on stack");
    }

    let mut signatures = Vec::with_capacity(m);
    for _ in 0..m {
        let Some(signature) = stack.pop() else {
            return reject(op, "not enough signatures on stack");
        };
        match signature_body(&signature) {
            Some(body) => signatures.push(body.to_vec()),
            None => return reject(op, "sighash type is not SIGHASH_ALL"),
        }
    }

    // Extra element consumed by the original multisig encoding
    stack.pop();

    // Keys are consumed in order; a key skipped by one signature is not
    // offered to the next.
    let mut candidates = keys.iter();
    let verified = signatures
        .iter()
        .filter(|sig| candidates.any(|key| ctx.verify(sig, key)))
        .count();

    finish(op, stack, verified >= m, verify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use secp256k1::SecretKey;

    fn data(bytes: &[u8]) -> ScriptElement {
        ScriptElement::data(bytes.to_vec())
    }

    fn num(n: u8) -> ScriptElement {
        ScriptElement::number(n).unwrap()
    }

    /// Multisig count as the interpreter reads it
    fn count(n: u8) -> ScriptElement {
        data(&[n])
    }

    fn op(op: Opcode) -> ScriptElement {
        ScriptElement::Op(op)
    }

    fn sig(tag: u8) -> ByteString {
        vec![0x30, tag, 0x01]
    }

    fn key(tag: u8) -> ByteString {
        let mut k = vec![0x02];
        k.extend_from_slice(&[tag; 32]);
        k
    }

    /// Accepts a signature iff its second byte matches the key's last byte
    fn tag_verifier(_: &Digest, signature: &[u8], public_key: &[u8]) -> bool {
        signature.get(1) == public_key.last()
    }

    #[test]
    fn test_empty_script() {
        let mut stack = Stack::new();
        assert!(execute(&Script::default(), &mut stack, None));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_data() {
        let script = Script::new(vec![data(&[]), data(&[7, 8]), data(&[3])]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert_eq!(stack.as_slice(), &[vec![], vec![7, 8], vec![3]]);
    }

    #[test]
    fn test_small_integers_reject() {
        let mut stack = Stack::new();
        assert!(!execute(&decode(&[0x51]), &mut stack, None));
        assert!(stack.is_empty());

        let script = Script::new(vec![data(&[7]), num(16), data(&[8])]);
        let mut stack = Stack::new();
        assert!(!execute(&script, &mut stack, None));
        assert_eq!(stack.as_slice(), &[vec![7]]);
    }

    #[test]
    fn test_op_dup() {
        let script = Script::new(vec![data(&[5]), op(Opcode::Dup)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert_eq!(stack.as_slice(), &[vec![5], vec![5]]);
    }

    #[test]
    fn test_op_dup_empty_stack() {
        let script = Script::new(vec![op(Opcode::Dup)]);
        let mut stack = Stack::new();
        assert!(!execute(&script, &mut stack, None));
    }

    #[test]
    fn test_op_hash160() {
        let script = Script::new(vec![data(&[]), op(Opcode::Hash160)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert_eq!(
            hex::encode(stack.top().unwrap()),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn test_op_hash160_empty_stack() {
        let mut stack = Stack::new();
        assert!(!execute(&Script::new(vec![op(Opcode::Hash160)]), &mut stack, None));
    }

    #[test]
    fn test_op_equal() {
        let script = Script::new(vec![data(&[1, 2]), data(&[1, 2]), op(Opcode::Equal)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert_eq!(stack.as_slice(), &[vec![1]]);
    }

    #[test]
    fn test_op_equal_false_pushes_empty() {
        let script = Script::new(vec![data(&[1]), data(&[2]), op(Opcode::Equal)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert_eq!(stack.as_slice(), &[Vec::<u8>::new()]);
    }

    #[test]
    fn test_op_equal_insufficient_stack() {
        let script = Script::new(vec![data(&[1]), op(Opcode::Equal)]);
        let mut stack = Stack::new();
        assert!(!execute(&script, &mut stack, None));
    }

    #[test]
    fn test_op_equalverify() {
        let script = Script::new(vec![data(&[9]), data(&[9]), op(Opcode::EqualVerify)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, None));
        assert!(stack.is_empty());

        let script = Script::new(vec![data(&[9]), data(&[8]), op(Opcode::EqualVerify)]);
        assert!(!execute(&script, &mut Stack::new(), None));
    }

    #[test]
    fn test_unsupported_opcodes_reject() {
        for unsupported in [Opcode::If, Opcode::Add, Opcode::Verify, Opcode::Return, Opcode::Nop] {
            let script = Script::new(vec![data(&[1]), op(unsupported)]);
            assert!(!execute(&script, &mut Stack::new(), None), "{}", unsupported);
        }
        assert!(!execute(&Script::new(vec![ScriptElement::Raw(0xb0)]), &mut Stack::new(), None));
    }

    #[test]
    fn test_checksig_requires_context() {
        let script = Script::new(vec![data(&sig(1)), data(&key(1)), op(Opcode::CheckSig)]);
        assert!(!execute(&script, &mut Stack::new(), None));
    }

    #[test]
    fn test_checksig_with_verifier() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let script = Script::new(vec![data(&sig(1)), data(&key(1)), op(Opcode::CheckSig)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[vec![1]]);

        let script = Script::new(vec![data(&sig(1)), data(&key(2)), op(Opcode::CheckSig)]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[Vec::<u8>::new()]);
    }

    #[test]
    fn test_checksigverify_fails_on_bad_signature() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let script = Script::new(vec![data(&sig(1)), data(&key(2)), op(Opcode::CheckSigVerify)]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));
    }

    #[test]
    fn test_checksig_rejects_non_all_sighash() {
        let always = |_: &Digest, _: &[u8], _: &[u8]| true;
        let ctx = VerificationContext::new([0; 32], &always);
        let mut signature = sig(1);
        *signature.last_mut().unwrap() = 0x02;
        let script = Script::new(vec![data(&signature), data(&key(1)), op(Opcode::CheckSig)]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));

        let script = Script::new(vec![data(&[]), data(&key(1)), op(Opcode::CheckSig)]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));
    }

    #[test]
    fn test_checksig_strips_sighash_byte() {
        let seen = std::cell::RefCell::new(Vec::new());
        let recorder = |_: &Digest, s: &[u8], _: &[u8]| {
            seen.borrow_mut().push(s.to_vec());
            true
        };
        let ctx = VerificationContext::new([0; 32], &recorder);
        let script = Script::new(vec![data(&[0xaa, 0xbb, 0x01]), data(&key(1)), op(Opcode::CheckSig)]);
        assert!(execute(&script, &mut Stack::new(), Some(&ctx)));
        assert_eq!(seen.borrow().as_slice(), &[vec![0xaa, 0xbb]]);
    }

    #[test]
    fn test_checkmultisig_2_of_3() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        // Signatures must appear in key order
        let script = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            data(&sig(3)),
            count(2),
            data(&key(1)),
            data(&key(2)),
            data(&key(3)),
            count(3),
            op(Opcode::CheckMultiSig),
        ]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[vec![1]]);
    }

    #[test]
    fn test_checkmultisig_out_of_order_fails() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let script = Script::new(vec![
            data(&[]),
            data(&sig(3)),
            data(&sig(1)),
            count(2),
            data(&key(1)),
            data(&key(2)),
            data(&key(3)),
            count(3),
            op(Opcode::CheckMultiSig),
        ]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[Vec::<u8>::new()]);
    }

    #[test]
    fn test_checkmultisigverify_fails_on_missing_signature() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let script = Script::new(vec![
            data(&[]),
            data(&sig(9)),
            count(1),
            data(&key(1)),
            count(1),
            op(Opcode::CheckMultiSigVerify),
        ]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));
    }

    #[test]
    fn test_checkmultisig_consumes_dummy() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let script = Script::new(vec![
            data(&[0xee]),
            data(&[]),
            data(&sig(1)),
            count(1),
            data(&key(1)),
            count(1),
            op(Opcode::CheckMultiSigVerify),
        ]);
        let mut stack = Stack::new();
        assert!(execute(&script, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[vec![0xee]]);
    }

    #[test]
    fn test_checkmultisig_count_bounds() {
        let always = |_: &Digest, _: &[u8], _: &[u8]| true;
        let ctx = VerificationContext::new([0; 32], &always);

        // n = 4 exceeds the evaluated maximum
        let script = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            count(1),
            data(&key(1)),
            data(&key(2)),
            data(&key(3)),
            data(&key(4)),
            count(4),
            op(Opcode::CheckMultiSig),
        ]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));

        // m > n
        let script = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            data(&sig(1)),
            count(2),
            data(&key(1)),
            count(1),
            op(Opcode::CheckMultiSig),
        ]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));

        // missing dummy element
        let script = Script::new(vec![
            data(&sig(1)),
            count(1),
            data(&key(1)),
            count(1),
            op(Opcode::CheckMultiSig),
        ]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));
    }

    fn with_flag(mut signature: ByteString, flag: u8) -> ByteString {
        if let Some(last) = signature.last_mut() {
            *last = flag;
        }
        signature
    }

    #[test]
    fn test_checkmultisig_rejects_non_all_sighash() {
        let always = |_: &Digest, _: &[u8], _: &[u8]| true;
        let ctx = VerificationContext::new([0; 32], &always);

        // Either position: the bad flag fails the script instead of pushing false
        for (first, second) in [(0x01, 0x02), (0x02, 0x01)] {
            let script = Script::new(vec![
                data(&[]),
                data(&with_flag(sig(1), first)),
                data(&with_flag(sig(2), second)),
                count(2),
                data(&key(1)),
                data(&key(2)),
                count(2),
                op(Opcode::CheckMultiSig),
            ]);
            let mut stack = Stack::new();
            assert!(!execute(&script, &mut stack, Some(&ctx)), "{:02x} {:02x}", first, second);
        }
    }

    #[test]
    fn test_checkmultisig_checks_flag_of_unmatched_signature() {
        let ctx = VerificationContext::new([0; 32], &tag_verifier);
        let unmatched = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            data(&sig(9)),
            count(2),
            data(&key(1)),
            data(&key(2)),
            count(2),
            op(Opcode::CheckMultiSig),
        ]);
        let mut stack = Stack::new();
        assert!(execute(&unmatched, &mut stack, Some(&ctx)));
        assert_eq!(stack.as_slice(), &[Vec::<u8>::new()]);

        // sig(9) verifies against no key, yet its sighash byte is still checked
        let flagged = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            data(&with_flag(sig(9), SighashType::Single as u8)),
            count(2),
            data(&key(1)),
            data(&key(2)),
            count(2),
            op(Opcode::CheckMultiSig),
        ]);
        assert!(!execute(&flagged, &mut Stack::new(), Some(&ctx)));
    }

    #[test]
    fn test_checkmultisig_rejects_short_key() {
        let always = |_: &Digest, _: &[u8], _: &[u8]| true;
        let ctx = VerificationContext::new([0; 32], &always);
        let script = Script::new(vec![
            data(&[]),
            data(&sig(1)),
            count(1),
            data(&[0x02; 32]),
            count(1),
            op(Opcode::CheckMultiSig),
        ]);
        assert!(!execute(&script, &mut Stack::new(), Some(&ctx)));
    }

    #[test]
    fn test_secp256k1_pay_to_pubkey_hash() {
        let secp = Secp256k1::new();
        let secret = SecretKey::from_slice(&[0x11; 32]).unwrap();
        let pubkey = PublicKey::from_secret_key(&secp, &secret).serialize();
        let digest = [0x42u8; 32];
        let signature = secp.sign_ecdsa(&Message::from_digest(digest), &secret);
        let mut sig_bytes = signature.serialize_der().to_vec();
        sig_bytes.push(SighashType::All as u8);

        let script_sig = Script::new(vec![data(&sig_bytes), data(&pubkey)]);
        let script_pubkey = Script::new(vec![
            op(Opcode::Dup),
            op(Opcode::Hash160),
            data(&hash160(&pubkey)),
            op(Opcode::EqualVerify),
            op(Opcode::CheckSig),
        ]);

        let verifier = Secp256k1Verifier::new();
        let ctx = VerificationContext::new(digest, &verifier);
        assert!(verify_script(&script_sig, &script_pubkey, Some(&ctx)));

        let wrong = VerificationContext::new([0x43; 32], &verifier);
        assert!(!verify_script(&script_sig, &script_pubkey, Some(&wrong)));
    }

    #[test]
    fn test_secp256k1_rejects_garbage() {
        let verifier = Secp256k1Verifier::new();
        assert!(!verifier.verify(&[0; 32], &[0x30, 0x00], &key(1)));
        assert!(!verifier.verify(&[0; 32], &[], &[]));
    }

    #[test]
    fn test_verify_script_needs_true_top() {
        assert!(verify_script(&Script::default(), &Script::new(vec![data(&[1])]), None));
        assert!(!verify_script(&Script::default(), &Script::new(vec![num(1)]), None));
        assert!(!verify_script(&Script::default(), &Script::default(), None));
        let script_pubkey = decode(&[0x01, 0x05, 0x01, 0x06, 0x87]);
        assert!(!verify_script(&Script::default(), &script_pubkey, None));
    }

    #[test]
    fn test_bool_encoding() {
        assert_eq!(bool_to_bytes(true), vec![1]);
        assert!(bool_to_bytes(false).is_empty());
        assert!(bytes_to_bool(&[0]));
        assert!(!bytes_to_bool(&[]));
    }
}
