//! Core script types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::slice;

use crate::constants::{DIGEST_LEN, HASH160_LEN, MAX_SMALL_INT};
use crate::opcodes::Opcode;

/// Byte string type
pub type ByteString = Vec<u8>;

/// RIPEMD160(SHA256(x))
pub type Hash160 = [u8; HASH160_LEN];

/// Signature digest supplied to the interpreter
pub type Digest = [u8; DIGEST_LEN];

/// Integer in `1..=16`, encoded on the wire as `OP_1`..`OP_16`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SmallInt(u8);

impl SmallInt {
    pub fn new(n: u8) -> Option<SmallInt> {
        (1..=MAX_SMALL_INT).contains(&n).then_some(SmallInt(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SmallInt {
    type Error = String;

    fn try_from(n: u8) -> std::result::Result<Self, Self::Error> {
        SmallInt::new(n).ok_or_else(|| format!("small integer out of range: {}", n))
    }
}

impl From<SmallInt> for u8 {
    fn from(n: SmallInt) -> u8 {
        n.0
    }
}

/// One decoded unit of a script
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptElement {
    /// Literal bytes pushed onto the stack
    Data(ByteString),
    /// `OP_1`..`OP_16`
    Number(SmallInt),
    /// A named opcode
    Op(Opcode),
    /// A byte with no registered opcode
    Raw(u8),
}

impl ScriptElement {
    pub fn data(bytes: impl Into<ByteString>) -> Self {
        ScriptElement::Data(bytes.into())
    }

    /// Small integer element; `None` outside `1..=16`
    pub fn number(n: u8) -> Option<Self> {
        SmallInt::new(n).map(ScriptElement::Number)
    }

    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            ScriptElement::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u8> {
        match self {
            ScriptElement::Number(n) => Some(n.get()),
            _ => None,
        }
    }

    pub fn as_opcode(&self) -> Option<Opcode> {
        match self {
            ScriptElement::Op(op) => Some(*op),
            _ => None,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self, ScriptElement::Data(_))
    }

    pub fn is_op(&self, op: Opcode) -> bool {
        matches!(self, ScriptElement::Op(o) if *o == op)
    }
}

impl From<Opcode> for ScriptElement {
    fn from(op: Opcode) -> Self {
        ScriptElement::Op(op)
    }
}

impl From<SmallInt> for ScriptElement {
    fn from(n: SmallInt) -> Self {
        ScriptElement::Number(n)
    }
}

/// A decoded script: an ordered, immutable sequence of elements
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Script {
    elements: Vec<ScriptElement>,
}

impl Script {
    pub fn new(elements: Vec<ScriptElement>) -> Self {
        Script { elements }
    }

    pub fn elements(&self) -> &[ScriptElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ScriptElement> {
        self.elements.iter()
    }

    pub fn first(&self) -> Option<&ScriptElement> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&ScriptElement> {
        self.elements.last()
    }

    pub fn into_elements(self) -> Vec<ScriptElement> {
        self.elements
    }
}

impl From<Vec<ScriptElement>> for Script {
    fn from(elements: Vec<ScriptElement>) -> Self {
        Script { elements }
    }
}

impl FromIterator<ScriptElement> for Script {
    fn from_iter<I: IntoIterator<Item = ScriptElement>>(iter: I) -> Self {
        Script { elements: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Script {
    type Item = &'a ScriptElement;
    type IntoIter = slice::Iter<'a, ScriptElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Index<usize> for Script {
    type Output = ScriptElement;

    fn index(&self, index: usize) -> &ScriptElement {
        &self.elements[index]
    }
}

/// Operand stack used during a single execution
///
/// Kept separate from [`Script`] so that decoded scripts are never mutated
/// by the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<ByteString>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ByteString) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<ByteString> {
        self.items.pop()
    }

    /// Most recently pushed item
    pub fn top(&self) -> Option<&ByteString> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items bottom-first
    pub fn as_slice(&self) -> &[ByteString] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<ByteString> {
        self.items
    }
}

impl From<Vec<ByteString>> for Stack {
    fn from(items: Vec<ByteString>) -> Self {
        Stack { items }
    }
}

/// Parameters of a matched m-of-n multisig script
///
/// Invariant: `1 <= m <= n` and `keys.len() == n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigMatch {
    pub m: u8,
    pub n: u8,
    pub keys: Vec<ByteString>,
}

/// Standard output template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    PubkeyHash,
    Pubkey,
    ScriptHash,
    Multisig,
    NullData,
    Unrecognized,
}

impl OutputType {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputType::PubkeyHash => "pubkeyhash",
            OutputType::Pubkey => "pubkey",
            OutputType::ScriptHash => "scripthash",
            OutputType::Multisig => "multisig",
            OutputType::NullData => "nulldata",
            OutputType::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a script locks an output or spends an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptRole {
    Output,
    Input,
}

/// Template and role hint for the readable formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHint {
    pub output_type: OutputType,
    pub role: ScriptRole,
}
