use std::io::{self, Write};

use console::style;
use hreg_backend::toy::Inst;
use hreg_backend::{Bank, Listing};
use hreg_common::{remap_for, HReg, HostInstr};
use log::{info, trace};

/// Print every instruction followed by its usage table.
pub fn usage(out: &mut impl Write, listing: &Listing, bank: Option<&Bank>) -> io::Result<()> {
    info!("reporting usage of {} instructions", listing.insts.len());

    writeln!(out, "{}", style("usage").bold())?;

    for (i, (inst, _)) in listing.insts.iter().enumerate() {
        writeln!(out, "{i:>4}: {}", inst.display_with(bank))?;
        writeln!(out, "      {}", inst.usage())?;
    }

    Ok(())
}

/// Rewrite every instruction of the listing with its assignments, printing the
/// remap table used for each. Returns the rewritten instructions.
pub fn rewrite(
    out: &mut impl Write,
    listing: Listing,
    bank: Option<&Bank>,
) -> io::Result<Vec<Inst>> {
    info!("reporting rewrite of {} instructions", listing.insts.len());

    let assignment = listing.assignment();
    let assign = |reg: HReg| assignment.get(&reg).copied();

    writeln!(out, "{}", style("rewrite").bold())?;

    let mut insts = Vec::with_capacity(listing.insts.len());
    let mut unassigned = 0;

    for (i, (mut inst, _)) in listing.insts.into_iter().enumerate() {
        let remap = remap_for(&inst, &assign);
        writeln!(out, "{i:>4}: {}", inst.display_with(bank))?;
        writeln!(out, "      remap {remap}")?;

        inst.map_regs(&remap);
        trace!("{i}: rewritten to {inst}");

        let redundant = match inst.is_move() {
            Some((src, dst)) if src == dst => " (redundant move)",
            _ => "",
        };

        writeln!(out, "      => {}{redundant}", inst.display_with(bank))?;

        if inst.regs().iter().any(|reg| reg.is_virtual()) {
            unassigned += 1;
        }

        insts.push(inst);
    }

    if unassigned > 0 {
        writeln!(
            out,
            "{}: {unassigned} instructions still mention virtual registers",
            style("warning").yellow()
        )?;
    }

    Ok(insts)
}
