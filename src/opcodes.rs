//! Script opcode table
//!
//! Every named opcode of the script language bound to its byte value. Bytes
//! 0x00, 0x01-0x4b and 0x51-0x60 encode data pushes and small integers and
//! never appear here; the codec handles them before consulting the table.
//!
//! The table is a bijection between names and values. It is built once per
//! process and shared read-only by every caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::constants::{MAX_SMALL_INT, SMALL_INT_BASE};

macro_rules! opcodes {
    ($($variant:ident = $value:expr => $name:expr),* $(,)?) => {
        /// A named script opcode
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Opcode {
            $($variant = $value),*
        }

        impl Opcode {
            /// Every named opcode, in declaration order
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant),*];

            /// Mnemonic, e.g. `OP_CHECKSIG`
            pub fn name(self) -> &'static str {
                match self {
                    $(Opcode::$variant => $name),*
                }
            }
        }
    };
}

opcodes! {
    // Push-data length markers
    PushData1 = 0x4c => "OP_PUSHDATA1",
    PushData2 = 0x4d => "OP_PUSHDATA2",
    PushData4 = 0x4e => "OP_PUSHDATA4",
    Negate1 = 0x4f => "OP_1NEGATE",
    Reserved = 0x50 => "OP_RESERVED",

    // Flow control
    Nop = 0x61 => "OP_NOP",
    Ver = 0x62 => "OP_VER",
    If = 0x63 => "OP_IF",
    NotIf = 0x64 => "OP_NOTIF",
    VerIf = 0x65 => "OP_VERIF",
    VerNotIf = 0x66 => "OP_VERNOTIF",
    Else = 0x67 => "OP_ELSE",
    EndIf = 0x68 => "OP_ENDIF",
    Verify = 0x69 => "OP_VERIFY",
    Return = 0x6a => "OP_RETURN",

    // Stack
    ToAltStack = 0x6b => "OP_TOALTSTACK",
    FromAltStack = 0x6c => "OP_FROMALTSTACK",
    Drop2 = 0x6d => "OP_2DROP",
    Dup2 = 0x6e => "OP_2DUP",
    Dup3 = 0x6f => "OP_3DUP",
    Over2 = 0x70 => "OP_2OVER",
    Rot2 = 0x71 => "OP_2ROT",
    Swap2 = 0x72 => "OP_2SWAP",
    IfDup = 0x73 => "OP_IFDUP",
    Depth = 0x74 => "OP_DEPTH",
    Drop = 0x75 => "OP_DROP",
    Dup = 0x76 => "OP_DUP",
    Nip = 0x77 => "OP_NIP",
    Over = 0x78 => "OP_OVER",
    Pick = 0x79 => "OP_PICK",
    Roll = 0x7a => "OP_ROLL",
    Rot = 0x7b => "OP_ROT",
    Swap = 0x7c => "OP_SWAP",
    Tuck = 0x7d => "OP_TUCK",

    // Splice
    Cat = 0x7e => "OP_CAT",
    Substr = 0x7f => "OP_SUBSTR",
    Left = 0x80 => "OP_LEFT",
    Right = 0x81 => "OP_RIGHT",
    Size = 0x82 => "OP_SIZE",

    // Bitwise logic
    Invert = 0x83 => "OP_INVERT",
    And = 0x84 => "OP_AND",
    Or = 0x85 => "OP_OR",
    Xor = 0x86 => "OP_XOR",
    Equal = 0x87 => "OP_EQUAL",
    EqualVerify = 0x88 => "OP_EQUALVERIFY",
    Reserved1 = 0x89 => "OP_RESERVED1",
    Reserved2 = 0x8a => "OP_RESERVED2",

    // Arithmetic
    Add1 = 0x8b => "OP_1ADD",
    Sub1 = 0x8c => "OP_1SUB",
    Mul2 = 0x8d => "OP_2MUL",
    Div2 = 0x8e => "OP_2DIV",
    Negate = 0x8f => "OP_NEGATE",
    Abs = 0x90 => "OP_ABS",
    Not = 0x91 => "OP_NOT",
    NotEqual0 = 0x92 => "OP_0NOTEQUAL",
    Add = 0x93 => "OP_ADD",
    Sub = 0x94 => "OP_SUB",
    Mul = 0x95 => "OP_MUL",
    Div = 0x96 => "OP_DIV",
    Mod = 0x97 => "OP_MOD",
    LShift = 0x98 => "OP_LSHIFT",
    RShift = 0x99 => "OP_RSHIFT",
    BoolAnd = 0x9a => "OP_BOOLAND",
    BoolOr = 0x9b => "OP_BOOLOR",
    NumEqual = 0x9c => "OP_NUMEQUAL",
    NumEqualVerify = 0x9d => "OP_NUMEQUALVERIFY",
    NumNotEqual = 0x9e => "OP_NUMNOTEQUAL",
    LessThan = 0x9f => "OP_LESSTHAN",
    GreaterThan = 0xa0 => "OP_GREATERTHAN",
    LessThanOrEqual = 0xa1 => "OP_LESSTHANOREQUAL",
    GreaterThanOrEqual = 0xa2 => "OP_GREATERTHANOREQUAL",
    Min = 0xa3 => "OP_MIN",
    Max = 0xa4 => "OP_MAX",
    Within = 0xa5 => "OP_WITHIN",

    // Crypto
    Ripemd160 = 0xa6 => "OP_RIPEMD160",
    Sha1 = 0xa7 => "OP_SHA1",
    Sha256 = 0xa8 => "OP_SHA256",
    Hash160 = 0xa9 => "OP_HASH160",
    Hash256 = 0xaa => "OP_HASH256",
    CodeSeparator = 0xab => "OP_CODESEPARATOR",
    CheckSig = 0xac => "OP_CHECKSIG",
    CheckSigVerify = 0xad => "OP_CHECKSIGVERIFY",
    CheckMultiSig = 0xae => "OP_CHECKMULTISIG",
    CheckMultiSigVerify = 0xaf => "OP_CHECKMULTISIGVERIFY",

    // Template matching pseudo-opcodes
    PubKeyHash = 0xfd => "OP_PUBKEYHASH",
    PubKey = 0xfe => "OP_PUBKEY",
    InvalidOpcode = 0xff => "OP_INVALIDOPCODE",
}

impl Opcode {
    /// Byte value on the wire
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Look up the opcode bound to `byte`, if any
    pub fn from_byte(byte: u8) -> Option<Opcode> {
        OpcodeTable::global().by_value(byte)
    }

    /// True for the four signature-checking opcodes
    pub fn is_signature_check(self) -> bool {
        matches!(
            self,
            Opcode::CheckSig
                | Opcode::CheckSigVerify
                | Opcode::CheckMultiSig
                | Opcode::CheckMultiSigVerify
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable name <-> value index over [`Opcode::ALL`]
#[derive(Debug)]
pub struct OpcodeTable {
    by_value: [Option<Opcode>; 256],
    by_name: HashMap<&'static str, Opcode>,
}

static OPCODE_TABLE: OnceLock<OpcodeTable> = OnceLock::new();

impl OpcodeTable {
    fn build() -> Self {
        let mut by_value = [None; 256];
        let mut by_name = HashMap::with_capacity(Opcode::ALL.len());
        for &op in Opcode::ALL {
            by_value[op.value() as usize] = Some(op);
            by_name.insert(op.name(), op);
        }
        OpcodeTable { by_value, by_name }
    }

    /// The process-wide table, built on first use
    pub fn global() -> &'static OpcodeTable {
        OPCODE_TABLE.get_or_init(OpcodeTable::build)
    }

    pub fn by_value(&self, byte: u8) -> Option<Opcode> {
        self.by_value[byte as usize]
    }

    pub fn by_name(&self, name: &str) -> Option<Opcode> {
        self.by_name.get(name).copied()
    }

    /// Resolve `OP_1`..`OP_16` to their integer value
    pub fn small_int_by_name(&self, name: &str) -> Option<u8> {
        let n: u8 = name.strip_prefix("OP_")?.parse().ok()?;
        (1..=MAX_SMALL_INT).contains(&n).then_some(n)
    }

    /// Byte value for a mnemonic, covering `OP_1`..`OP_16` as well
    pub fn value_of(&self, name: &str) -> Option<u8> {
        self.by_name(name)
            .map(Opcode::value)
            .or_else(|| self.small_int_by_name(name).map(|n| SMALL_INT_BASE + n))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Sighash type flag carried as the last byte of a signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SighashType {
    All = 0x01,
    None = 0x02,
    Single = 0x03,
    AnyoneCanPay = 0x80,
}

impl SighashType {
    pub fn from_byte(byte: u8) -> Option<SighashType> {
        match byte {
            0x01 => Some(SighashType::All),
            0x02 => Some(SighashType::None),
            0x03 => Some(SighashType::Single),
            0x80 => Some(SighashType::AnyoneCanPay),
            _ => None,
        }
    }
}
