use crate::instr::{remap_for, rewrite, HostInstr};
use crate::reg::{HReg, RegClass};
use crate::remap::HRegRemap;
use crate::usage::{HRegMode, HRegUsage};

/// `dst += src`
#[derive(Debug, Eq, PartialEq)]
struct Accumulate {
    dst: HReg,
    src: HReg,
}

impl HostInstr for Accumulate {
    fn usage(&self) -> HRegUsage {
        let mut usage = HRegUsage::new();
        usage.add(self.src, HRegMode::Read);
        usage.add(self.dst, HRegMode::Read);
        usage.add(self.dst, HRegMode::Write);
        usage
    }

    fn map_regs(&mut self, remap: &HRegRemap) {
        self.dst = remap.apply(self.dst);
        self.src = remap.apply(self.src);
    }
}

fn v(index: u32) -> HReg {
    HReg::virt(index, RegClass::Int64)
}

fn r(index: u32) -> HReg {
    HReg::real(index, RegClass::Int64)
}

#[test]
fn accumulate_modifies_its_destination() {
    let inst = Accumulate { dst: v(0), src: v(1) };
    let usage = inst.usage();

    assert_eq!(Some(HRegMode::Modify), usage.mode_of(v(0)));
    assert_eq!(Some(HRegMode::Read), usage.mode_of(v(1)));
    assert_eq!(None, inst.is_move());
}

#[test]
fn remap_only_covers_assigned_virtuals() {
    let inst = Accumulate { dst: v(0), src: r(4) };
    let remap = remap_for(&inst, |reg| (reg == v(0)).then(|| r(2)));

    assert_eq!(1, remap.len());
    assert_eq!(Some(r(2)), remap.lookup(v(0)));
    assert_eq!(None, remap.lookup(r(4)));
}

#[test]
fn rewrite_replaces_virtuals() {
    let mut insts = vec![
        Accumulate { dst: v(0), src: v(1) },
        Accumulate { dst: v(1), src: v(2) },
    ];

    let assign = |reg: HReg| match reg.index() {
        0 => Some(r(3)),
        1 => Some(r(5)),
        _ => None,
    };

    rewrite(&mut insts, assign);

    assert_eq!(
        vec![
            Accumulate { dst: r(3), src: r(5) },
            Accumulate { dst: r(5), src: v(2) },
        ],
        insts
    );
}
