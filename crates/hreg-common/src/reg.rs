use std::error::Error;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Register numbers must be strictly below this bound (23 bits).
pub const MAX_INDEX: u32 = 1 << 23;

const CLASS_SHIFT: u32 = 28;
const VIRTUAL_SHIFT: u32 = 24;
const INVALID_BITS: u32 = 0xFFFF_FFFF;

/// The kind of physical register a handle may occupy.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RegClass {
    /// 32-bit integer.
    Int32,
    /// 64-bit integer.
    Int64,
    /// 64-bit floating point.
    Float64,
    /// 64-bit SIMD.
    Vector64,
    /// 128-bit SIMD.
    Vector128,
}

impl RegClass {
    pub const ALL: [RegClass; 5] = [
        Self::Int32,
        Self::Int64,
        Self::Float64,
        Self::Vector64,
        Self::Vector128,
    ];

    /// The class field of the packed encoding. Never `0b0000` nor `0b1111`, so
    /// every packed handle is at least `1 << 28` and none equals the sentinel.
    pub fn code(self) -> u32 {
        match self {
            Self::Int32 => 4,
            Self::Int64 => 5,
            Self::Float64 => 6,
            Self::Vector64 => 7,
            Self::Vector128 => 8,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }

    fn letter(self) -> char {
        match self {
            Self::Int32 => 'r',
            Self::Int64 => 'R',
            Self::Float64 => 'F',
            Self::Vector64 => 'D',
            Self::Vector128 => 'Q',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.letter() == letter)
    }
}

impl Display for RegClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "flt64"),
            Self::Vector64 => write!(f, "vec64"),
            Self::Vector128 => write!(f, "vec128"),
        }
    }
}

/// A validly constructed register. Only obtainable through [`HReg::new`], so the
/// index is always in range.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Reg {
    class: RegClass,
    virt: bool,
    index: u32,
}

impl Reg {
    pub fn class(&self) -> RegClass {
        self.class
    }

    pub fn is_virtual(&self) -> bool {
        self.virt
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// A host register: either a virtual or real register of some class, or the
/// `Invalid` sentinel meaning "no register". Zero is a legitimate index, so
/// absence is always spelled `HReg::Invalid`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum HReg {
    Reg(Reg),
    Invalid,
}

impl HReg {
    pub fn new(index: u32, class: RegClass, virt: bool) -> Self {
        assert!(
            index < MAX_INDEX,
            "register index {index} of class {class} does not fit in {} bits",
            MAX_INDEX.trailing_zeros()
        );

        Self::Reg(Reg { class, virt, index })
    }

    pub fn real(index: u32, class: RegClass) -> Self {
        Self::new(index, class, false)
    }

    pub fn virt(index: u32, class: RegClass) -> Self {
        Self::new(index, class, true)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Reg(_))
    }

    pub fn class(&self) -> RegClass {
        self.expect_valid("class").class
    }

    pub fn is_virtual(&self) -> bool {
        self.expect_valid("virtual flag").virt
    }

    pub fn is_real(&self) -> bool {
        !self.is_virtual()
    }

    pub fn index(&self) -> u32 {
        self.expect_valid("index").index
    }

    /// Pack into the 32-bit layout: class in bits 31-28, the virtual flag in
    /// bits 27-24 and the index in bits 22-0.
    pub fn to_bits(&self) -> u32 {
        match self {
            Self::Reg(reg) => {
                reg.class.code() << CLASS_SHIFT | u32::from(reg.virt) << VIRTUAL_SHIFT | reg.index
            }
            Self::Invalid => INVALID_BITS,
        }
    }

    /// Unpack a value produced by [`HReg::to_bits`]. Returns `None` for bit
    /// patterns no handle packs to.
    pub fn from_bits(bits: u32) -> Option<Self> {
        if bits == INVALID_BITS {
            return Some(Self::Invalid);
        }

        let class = RegClass::from_code(bits >> CLASS_SHIFT)?;
        let virt = match (bits >> VIRTUAL_SHIFT) & 0xF {
            0 => false,
            1 => true,
            _ => return None,
        };

        if bits & MAX_INDEX != 0 {
            return None;
        }

        Some(Self::new(bits & (MAX_INDEX - 1), class, virt))
    }

    fn expect_valid(&self, what: &str) -> Reg {
        match self {
            Self::Reg(reg) => *reg,
            Self::Invalid => panic!("requested the {what} of the invalid register"),
        }
    }
}

impl Display for HReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reg(reg) => {
                let virt = if reg.virt { "v" } else { "" };
                write!(f, "%{virt}{}{}", reg.class.letter(), reg.index)
            }
            Self::Invalid => write!(f, "%INVALID"),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseRegError {
    MissingSigil,
    MissingClass,
    UnknownClass(char),
    BadIndex(String),
    IndexTooLarge(String),
}

impl Display for ParseRegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSigil => write!(f, "registers start with '%'"),
            Self::MissingClass => write!(f, "missing register class"),
            Self::UnknownClass(letter) => write!(f, "unknown register class '{letter}'"),
            Self::BadIndex(text) => write!(f, "'{text}' is not a register number"),
            Self::IndexTooLarge(text) => {
                write!(f, "register number {text} must be below {MAX_INDEX}")
            }
        }
    }
}

impl Error for ParseRegError {}

impl FromStr for HReg {
    type Err = ParseRegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('%').ok_or(ParseRegError::MissingSigil)?;
        let (virt, rest) = match rest.strip_prefix('v') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let mut chars = rest.chars();
        let letter = chars.next().ok_or(ParseRegError::MissingClass)?;
        let class = RegClass::from_letter(letter).ok_or(ParseRegError::UnknownClass(letter))?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseRegError::BadIndex(digits.into()));
        }

        match digits.parse::<u32>() {
            Ok(index) if index < MAX_INDEX => Ok(Self::new(index, class, virt)),
            _ => Err(ParseRegError::IndexTooLarge(digits.into())),
        }
    }
}
