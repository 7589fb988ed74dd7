//! Human-readable script rendering
//!
//! Elements are joined by single spaces: data as lowercase hex (an empty
//! push as `0`), small integers as decimal digits, opcodes by mnemonic and
//! unnamed bytes as `0x..`.

use std::fmt;

use crate::types::*;

impl fmt::Display for ScriptElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptElement::Data(data) if data.is_empty() => f.write_str("0"),
            ScriptElement::Data(data) => f.write_str(&hex::encode(data)),
            ScriptElement::Number(n) => write!(f, "{}", n.get()),
            ScriptElement::Op(op) => f.write_str(op.name()),
            ScriptElement::Raw(byte) => write!(f, "0x{:02x}", byte),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(self.elements()))
    }
}

fn join(elements: &[ScriptElement]) -> String {
    elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a script, optionally trimmed for its template
///
/// Only inputs spending a multisig or script-hash output are trimmed: the
/// leading empty dummy push required by OP_CHECKMULTISIG is dropped. Output
/// scripts, other input templates and unhinted scripts render verbatim.
pub fn to_readable(script: &Script, hint: Option<TypeHint>) -> String {
    let elements = script.elements();
    let spends_multisig = hint.map_or(false, |hint| {
        hint.role == ScriptRole::Input
            && matches!(hint.output_type, OutputType::Multisig | OutputType::ScriptHash)
    });

    match elements {
        [ScriptElement::Data(dummy), rest @ ..] if spends_multisig && dummy.is_empty() => {
            join(rest)
        }
        _ => join(elements),
    }
}
