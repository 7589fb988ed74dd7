//! Script wire codec
//!
//! `decode` turns raw script bytes into a [`Script`]; `encode` is its inverse.
//! Decoding never fails: truncated pushes keep whatever bytes remain and end
//! the script, so callers can treat every byte string as some script.

use log::debug;

use crate::constants::{MAX_DIRECT_PUSH, SMALL_INT_BASE};
use crate::error::Result;
use crate::opcodes::{Opcode, OpcodeTable};
use crate::types::*;

/// Read a little-endian length field of `width` bytes at `pos`
fn read_length(bytes: &[u8], pos: usize, width: usize) -> Option<usize> {
    let field = bytes.get(pos..pos + width)?;
    Some(
        field
            .iter()
            .rev()
            .fold(0usize, |acc, &b| (acc << 8) | b as usize),
    )
}

/// Take up to `len` bytes at `pos`, clamped to the end of input
fn take_push(bytes: &[u8], pos: usize, len: usize) -> (ByteString, usize) {
    let end = pos.saturating_add(len).min(bytes.len());
    if end - pos < len {
        debug!(
            "truncated push at offset {}: wanted {} bytes, {} remain",
            pos,
            len,
            end - pos
        );
    }
    (bytes[pos..end].to_vec(), end)
}

/// Decode raw script bytes into elements
pub fn decode(bytes: &[u8]) -> Script {
    let table = OpcodeTable::global();
    let mut elements = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        pos += 1;

        match b {
            0x00 => elements.push(ScriptElement::Data(vec![])),
            0x01..=0x4b => {
                let (data, next) = take_push(bytes, pos, b as usize);
                elements.push(ScriptElement::Data(data));
                pos = next;
            }
            0x51..=0x60 => {
                if let Some(n) = SmallInt::new(b - SMALL_INT_BASE) {
                    elements.push(ScriptElement::Number(n));
                }
            }
            _ => {
                let width = match table.by_value(b) {
                    Some(Opcode::PushData1) => 1,
                    Some(Opcode::PushData2) => 2,
                    Some(Opcode::PushData4) => 4,
                    Some(op) => {
                        elements.push(ScriptElement::Op(op));
                        continue;
                    }
                    None => {
                        elements.push(ScriptElement::Raw(b));
                        continue;
                    }
                };

                let Some(len) = read_length(bytes, pos, width) else {
                    debug!("truncated length field at offset {}", pos);
                    elements.push(ScriptElement::Data(vec![]));
                    break;
                };
                pos += width;
                let (data, next) = take_push(bytes, pos, len);
                elements.push(ScriptElement::Data(data));
                pos = next;
            }
        }
    }

    Script::new(elements)
}

/// Encode the length prefix for a data push
fn push_prefix(out: &mut Vec<u8>, len: usize) {
    if len == 0 {
        out.push(0x00);
    } else if len <= MAX_DIRECT_PUSH {
        out.push(len as u8);
    } else if len <= 0xff {
        out.push(Opcode::PushData1.value());
        out.push(len as u8);
    } else if len <= 0xffff {
        out.push(Opcode::PushData2.value());
        out.extend_from_slice(&(len as u16).to_le_bytes());
    } else {
        out.push(Opcode::PushData4.value());
        out.extend_from_slice(&(len as u32).to_le_bytes());
    }
}

/// Encode elements into raw script bytes
pub fn encode(script: &Script) -> ByteString {
    let mut out = Vec::new();
    for element in script {
        match element {
            ScriptElement::Data(data) => {
                push_prefix(&mut out, data.len());
                out.extend_from_slice(data);
            }
            ScriptElement::Number(n) => out.push(SMALL_INT_BASE + n.get()),
            ScriptElement::Op(op) => out.push(op.value()),
            ScriptElement::Raw(b) => out.push(*b),
        }
    }
    out
}

/// Decode a hex-encoded script
pub fn decode_hex(s: &str) -> Result<Script> {
    Ok(decode(&hex::decode(s)?))
}

/// Encode a script as lowercase hex
pub fn encode_hex(script: &Script) -> String {
    hex::encode(encode(script))
}

/// The signed part of a script
///
/// Starts after the last `OP_CODESEPARATOR` seen before the first
/// signature-check opcode. The first signature-check opcode only bounds
/// that search: the result runs to the end of the script, keeping the
/// signature-check opcode and everything after it, with every remaining
/// `OP_CODESEPARATOR` dropped.
pub fn subscript(script: &Script) -> Script {
    let mut last_separator = None;
    for (i, element) in script.iter().enumerate() {
        match element {
            ScriptElement::Op(Opcode::CodeSeparator) => last_separator = Some(i),
            ScriptElement::Op(op) if op.is_signature_check() => break,
            _ => {}
        }
    }

    let start = last_separator.map_or(0, |i| i + 1);
    script.elements()[start..]
        .iter()
        .filter(|e| !e.is_op(Opcode::CodeSeparator))
        .cloned()
        .collect()
}
