pub mod instr;
pub mod reg;
pub mod remap;
pub mod usage;

pub use instr::{remap_for, rewrite, HostInstr};
pub use reg::{HReg, ParseRegError, RegClass, MAX_INDEX};
pub use remap::{HRegRemap, N_REMAP};
pub use usage::{HRegMode, HRegUsage, N_USAGE};

#[cfg(test)]
mod tests;
