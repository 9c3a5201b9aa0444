use std::fmt::{self, Display};

use log::trace;
use smallvec::SmallVec;

use crate::reg::HReg;

/// The most registers a single instruction may mention.
pub const N_USAGE: usize = 4;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HRegMode {
    Read,
    Write,
    /// Both read and written by the same instruction.
    Modify,
}

impl HRegMode {
    /// Combine two uses of the same register. Differing modes collapse to
    /// `Modify`.
    pub fn merge(self, other: Self) -> Self {
        if self == other {
            self
        } else {
            Self::Modify
        }
    }

    pub fn reads(self) -> bool {
        matches!(self, Self::Read | Self::Modify)
    }

    pub fn writes(self) -> bool {
        matches!(self, Self::Write | Self::Modify)
    }
}

impl Display for HRegMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
            Self::Modify => write!(f, "modify"),
        }
    }
}

/// The registers used by one instruction, each mentioned once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HRegUsage {
    entries: SmallVec<[(HReg, HRegMode); N_USAGE]>,
}

impl HRegUsage {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Record a use of `reg`. A register already present has its mode merged
    /// with `mode` instead of getting a second entry.
    pub fn add(&mut self, reg: HReg, mode: HRegMode) {
        assert!(
            reg.is_valid(),
            "cannot record a {mode} of the invalid register in usage {}",
            self
        );

        if let Some((_, existing)) = self.entries.iter_mut().find(|(other, _)| *other == reg) {
            let merged = existing.merge(mode);
            trace!("usage: {reg} {existing} + {mode} -> {merged}");
            *existing = merged;
            return;
        }

        assert!(
            self.entries.len() < N_USAGE,
            "usage table overflow: cannot add {reg} ({mode}) to {}, an instruction mentions at most {N_USAGE} registers",
            self
        );

        trace!("usage: {reg} {mode}");
        self.entries.push((reg, mode));
    }

    pub fn mode_of(&self, reg: HReg) -> Option<HRegMode> {
        self.entries
            .iter()
            .find(|(other, _)| *other == reg)
            .map(|(_, mode)| *mode)
    }

    pub fn reads(&self, reg: HReg) -> bool {
        self.mode_of(reg).map(HRegMode::reads).unwrap_or(false)
    }

    pub fn writes(&self, reg: HReg) -> bool {
        self.mode_of(reg).map(HRegMode::writes).unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HReg, HRegMode)> + '_ {
        self.entries.iter().copied()
    }

    pub fn virtuals(&self) -> impl Iterator<Item = HReg> + '_ {
        self.iter()
            .map(|(reg, _)| reg)
            .filter(|reg| reg.is_virtual())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Display for HRegUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;
        for (i, (reg, mode)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{reg}: {mode}")?;
        }
        write!(f, " }}")
    }
}
