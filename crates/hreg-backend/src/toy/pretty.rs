use std::fmt::{self, Display};

use hreg_common::HReg;

use super::{Addr, Inst};
use crate::bank::Bank;

/// Prints an instruction, optionally naming real registers after a bank.
pub struct Pretty<'a> {
    inst: &'a Inst,
    bank: Option<&'a Bank>,
}

impl Inst {
    pub fn display_with<'a>(&'a self, bank: Option<&'a Bank>) -> Pretty<'a> {
        Pretty { inst: self, bank }
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(None).fmt(f)
    }
}

impl Pretty<'_> {
    fn reg(&self, reg: HReg) -> String {
        self.bank
            .and_then(|bank| bank.name_of(reg))
            .map(String::from)
            .unwrap_or_else(|| reg.to_string())
    }

    fn addr(&self, addr: &Addr) -> String {
        let base = self.reg(addr.base);
        match addr.offset {
            0 => format!("[{base}]"),
            offset if offset < 0 => format!("[{base} - {}]", offset.unsigned_abs()),
            offset => format!("[{base} + {offset}]"),
        }
    }
}

impl Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.inst.mnemonic();

        match self.inst {
            Inst::Li { dst, imm } => write!(f, "{name} {}, {imm}", self.reg(*dst)),
            Inst::Mov { dst, src } | Inst::Alu { dst, src, .. } => {
                write!(f, "{name} {}, {}", self.reg(*dst), self.reg(*src))
            }
            Inst::Neg { dst } => write!(f, "{name} {}", self.reg(*dst)),
            Inst::Load { dst, addr } => {
                write!(f, "{name} {}, {}", self.reg(*dst), self.addr(addr))
            }
            Inst::Store { src, addr } => {
                write!(f, "{name} {}, {}", self.reg(*src), self.addr(addr))
            }
            Inst::Fma { dst, a, b } => write!(
                f,
                "{name} {}, {}, {}",
                self.reg(*dst),
                self.reg(*a),
                self.reg(*b)
            ),
            Inst::Cmp { left, right } => {
                write!(f, "{name} {}, {}", self.reg(*left), self.reg(*right))
            }
            Inst::Ret { src } => write!(f, "{name} {}", self.reg(*src)),
        }
    }
}
