//! The textual input of the trace driver: one toy instruction per line, plus
//! assignment lines `%vr0 -> %r3` recording where a virtual register lives.

mod parser;
mod token;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use hreg_common::HReg;
use log::{info, trace};

use crate::bank::Bank;
use crate::message::{File, Messages, Span};
use crate::toy::Inst;
use parser::Parser;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub virt: HReg,
    pub real: HReg,
    pub span: Span,
}

#[derive(Debug, Default)]
pub struct Listing {
    pub insts: Vec<(Inst, Span)>,
    pub assignments: Vec<Assignment>,
}

impl Listing {
    /// The assignments as a map from virtual to real register.
    pub fn assignment(&self) -> HashMap<HReg, HReg> {
        self.assignments
            .iter()
            .map(|assignment| (assignment.virt, assignment.real))
            .collect()
    }
}

/// Parse a listing. Real registers are checked against `bank` when one is
/// given. The listing is only meaningful if the returned messages are empty.
pub fn parse(src: &str, file: File, bank: Option<&Bank>) -> (Listing, Messages) {
    info!("parsing listing in file {file}");

    let mut parser = Parser::new(src, file, bank);
    parser.parse();

    trace!(
        "done parsing {file}: {} instructions, {} assignments, {} errors",
        parser.listing.insts.len(),
        parser.listing.assignments.len(),
        parser.msgs.len()
    );

    (parser.listing, parser.msgs)
}
