//! A small two-address instruction set used to drive the register tables
//! outside of a real target.

mod pretty;


pub use pretty::Pretty;

use hreg_common::{HReg, HRegMode, HRegRemap, HRegUsage, HostInstr, RegClass};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
}

/// A memory operand `[base + offset]`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Addr {
    pub base: HReg,
    pub offset: i64,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Inst {
    /// `dst = imm`
    Li { dst: HReg, imm: i64 },
    /// `dst = src`
    Mov { dst: HReg, src: HReg },
    /// `dst = dst op src`
    Alu { op: AluOp, dst: HReg, src: HReg },
    /// `dst = -dst`
    Neg { dst: HReg },
    Load { dst: HReg, addr: Addr },
    Store { src: HReg, addr: Addr },
    /// `dst = dst + a * b`
    Fma { dst: HReg, a: HReg, b: HReg },
    Cmp { left: HReg, right: HReg },
    Ret { src: HReg },
}

impl Inst {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Li { .. } => "li",
            Self::Mov { .. } => "mov",
            Self::Alu { op: AluOp::Add, .. } => "add",
            Self::Alu { op: AluOp::Sub, .. } => "sub",
            Self::Alu { op: AluOp::Mul, .. } => "mul",
            Self::Neg { .. } => "neg",
            Self::Load { .. } => "ld",
            Self::Store { .. } => "st",
            Self::Fma { .. } => "fma",
            Self::Cmp { .. } => "cmp",
            Self::Ret { .. } => "ret",
        }
    }

    /// Every register operand, in operand order.
    pub fn regs(&self) -> Vec<HReg> {
        match self {
            Self::Li { dst, .. } | Self::Neg { dst } => vec![*dst],
            Self::Mov { dst, src } | Self::Alu { dst, src, .. } => vec![*dst, *src],
            Self::Load { dst, addr } => vec![*dst, addr.base],
            Self::Store { src, addr } => vec![*src, addr.base],
            Self::Fma { dst, a, b } => vec![*dst, *a, *b],
            Self::Cmp { left, right } => vec![*left, *right],
            Self::Ret { src } => vec![*src],
        }
    }

    fn regs_mut(&mut self) -> Vec<&mut HReg> {
        match self {
            Self::Li { dst, .. } | Self::Neg { dst } => vec![dst],
            Self::Mov { dst, src } | Self::Alu { dst, src, .. } => vec![dst, src],
            Self::Load { dst, addr } => vec![dst, &mut addr.base],
            Self::Store { src, addr } => vec![src, &mut addr.base],
            Self::Fma { dst, a, b } => vec![dst, a, b],
            Self::Cmp { left, right } => vec![left, right],
            Self::Ret { src } => vec![src],
        }
    }
}

impl HostInstr for Inst {
    fn usage(&self) -> HRegUsage {
        let mut usage = HRegUsage::new();

        match self {
            Self::Li { dst, .. } => usage.add(*dst, HRegMode::Write),
            Self::Mov { dst, src } => {
                usage.add(*src, HRegMode::Read);
                usage.add(*dst, HRegMode::Write);
            }
            Self::Alu { dst, src, .. } => {
                usage.add(*src, HRegMode::Read);
                usage.add(*dst, HRegMode::Modify);
            }
            Self::Neg { dst } => usage.add(*dst, HRegMode::Modify),
            Self::Load { dst, addr } => {
                usage.add(addr.base, HRegMode::Read);
                usage.add(*dst, HRegMode::Write);
            }
            Self::Store { src, addr } => {
                usage.add(*src, HRegMode::Read);
                usage.add(addr.base, HRegMode::Read);
            }
            Self::Fma { dst, a, b } => {
                usage.add(*a, HRegMode::Read);
                usage.add(*b, HRegMode::Read);
                usage.add(*dst, HRegMode::Modify);
            }
            Self::Cmp { left, right } => {
                usage.add(*left, HRegMode::Read);
                usage.add(*right, HRegMode::Read);
            }
            Self::Ret { src } => usage.add(*src, HRegMode::Read),
        }

        usage
    }

    fn map_regs(&mut self, remap: &HRegRemap) {
        for reg in self.regs_mut() {
            *reg = remap.apply(*reg);
        }
    }

    fn is_move(&self) -> Option<(HReg, HReg)> {
        match self {
            Self::Mov { dst, src } => Some((*src, *dst)),
            _ => None,
        }
    }
}

/// Whether values of `class` may be used as addresses or immediates.
pub fn is_integer(class: RegClass) -> bool {
    matches!(class, RegClass::Int32 | RegClass::Int64)
}
