use log::{info, trace, warn};

use crate::reg::HReg;
use crate::remap::HRegRemap;
use crate::usage::HRegUsage;

/// An instruction of some target, as seen by the register allocator.
pub trait HostInstr {
    /// Classify every register the instruction reads, writes or modifies.
    fn usage(&self) -> HRegUsage;

    /// Replace the registers of this instruction according to `remap`. Registers
    /// the table does not mention are left as they are.
    fn map_regs(&mut self, remap: &HRegRemap);

    /// `Some((src, dst))` if this instruction is a plain register-to-register
    /// copy.
    fn is_move(&self) -> Option<(HReg, HReg)> {
        None
    }
}

/// Build the remap table for a single instruction from a global assignment of
/// virtual registers. Virtual registers without an assignment are skipped.
pub fn remap_for<I, F>(inst: &I, assign: F) -> HRegRemap
where
    I: HostInstr + ?Sized,
    F: Fn(HReg) -> Option<HReg>,
{
    let mut remap = HRegRemap::new();

    for reg in inst.usage().virtuals() {
        match assign(reg) {
            Some(replacement) => remap.add(reg, replacement),
            None => warn!("{reg} has no assignment and stays virtual"),
        }
    }

    remap
}

/// Rewrite every instruction in place, replacing virtual registers with their
/// assignment.
pub fn rewrite<I, F>(insts: &mut [I], assign: F)
where
    I: HostInstr,
    F: Fn(HReg) -> Option<HReg>,
{
    info!("rewriting {} instructions", insts.len());

    for (i, inst) in insts.iter_mut().enumerate() {
        let remap = remap_for(&*inst, &assign);
        trace!("{i}: {remap}");
        inst.map_regs(&remap);
    }

    trace!("done rewriting");
}
