use std::fmt::{self, Display};

use log::trace;
use smallvec::SmallVec;

use crate::reg::HReg;

/// The most registers a single instruction may have remapped.
pub const N_REMAP: usize = 4;

/// Maps original registers of one instruction to their replacements.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HRegRemap {
    pairs: SmallVec<[(HReg, HReg); N_REMAP]>,
}

impl HRegRemap {
    pub fn new() -> Self {
        Self {
            pairs: SmallVec::new(),
        }
    }

    pub fn add(&mut self, orig: HReg, replacement: HReg) {
        assert!(
            orig.is_valid() && replacement.is_valid(),
            "cannot remap {orig} to {replacement} in {}",
            self
        );

        assert!(
            orig.class() == replacement.class(),
            "cannot remap {orig} to {replacement}: a {} register cannot hold a {} value",
            replacement.class(),
            orig.class()
        );

        if let Some(existing) = self.lookup(orig) {
            panic!("{orig} remapped twice, to {existing} and to {replacement}");
        }

        assert!(
            self.pairs.len() < N_REMAP,
            "remap table overflow: cannot add {orig} -> {replacement} to {}, an instruction remaps at most {N_REMAP} registers",
            self
        );

        trace!("remap: {orig} -> {replacement}");
        self.pairs.push((orig, replacement));
    }

    /// Find the replacement for `reg`. `None` means `reg` is not remapped by
    /// this table.
    pub fn lookup(&self, reg: HReg) -> Option<HReg> {
        self.pairs
            .iter()
            .find(|(orig, _)| *orig == reg)
            .map(|(_, replacement)| *replacement)
    }

    /// The replacement for `reg`, or `reg` itself if it is not remapped.
    pub fn apply(&self, reg: HReg) -> HReg {
        self.lookup(reg).unwrap_or(reg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HReg, HReg)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Display for HRegRemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pairs.is_empty() {
            return write!(f, "{{}}");
        }

        write!(f, "{{ ")?;
        for (i, (orig, replacement)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{orig} -> {replacement}")?;
        }
        write!(f, " }}")
    }
}
