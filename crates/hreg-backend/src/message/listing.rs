use codespan_reporting::diagnostic::{Diagnostic, Label};
use hreg_common::{HReg, ParseRegError};
use target_lexicon::Architecture;

use super::{MessageAdder, Span};

const INVALID_CHAR: &str = "EL00";
const EXPECTED_LINE: &str = "EL01";
const UNKNOWN_MNEMONIC: &str = "EL02";
const EXPECTED: &str = "EL03";
const BAD_REGISTER: &str = "EL04";
const BAD_IMMEDIATE: &str = "EL05";
const TRAILING: &str = "EL06";

const NOT_VIRTUAL: &str = "EA00";
const NOT_REAL: &str = "EA01";
const ASSIGN_CLASS: &str = "EA02";
const ASSIGNED_TWICE: &str = "EA03";

const NOT_IN_BANK: &str = "EB00";

const OPERAND_CLASS: &str = "ET00";
const NOT_INTEGER: &str = "ET01";

impl<'a> MessageAdder<'a> {
    pub fn lex_invalid(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_CHAR)
                .with_message("invalid character")
                .with_labels(labels),
        );
    }

    pub fn parse_expected_line(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![String::from(
            "a line is either an instruction or an assignment like `%vr0 -> %r3`",
        )];

        self.add(
            Diagnostic::error()
                .with_code(EXPECTED_LINE)
                .with_message("expected an instruction or an assignment")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_unknown_mnemonic(&mut self, name: &str) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(UNKNOWN_MNEMONIC)
                .with_message(format!("unknown instruction `{name}`"))
                .with_labels(labels),
        );
    }

    pub fn parse_expected(&mut self, what: &str) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(EXPECTED)
                .with_message(format!("expected {what}"))
                .with_labels(labels),
        );
    }

    pub fn parse_bad_register(&mut self, error: &ParseRegError) {
        let labels = vec![Label::primary(self.at.file, self.at).with_message(error.to_string())];
        let notes = vec![String::from(
            "registers are written `%` then `v` if virtual, a class letter (r, R, F, D or Q) and a number",
        )];

        self.add(
            Diagnostic::error()
                .with_code(BAD_REGISTER)
                .with_message("malformed register")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_bad_immediate(&mut self, text: &str) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(BAD_IMMEDIATE)
                .with_message(format!("`{text}` does not fit in 64 bits"))
                .with_labels(labels),
        );
    }

    pub fn parse_trailing(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(TRAILING)
                .with_message("expected the end of the line")
                .with_labels(labels),
        );
    }

    pub fn assign_not_virtual(&mut self, reg: HReg) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_VIRTUAL)
                .with_message(format!("only virtual registers are assigned, but {reg} is real"))
                .with_labels(labels),
        );
    }

    pub fn assign_not_real(&mut self, reg: HReg) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_REAL)
                .with_message(format!("{reg} is virtual and cannot be the target of an assignment"))
                .with_labels(labels),
        );
    }

    pub fn assign_class_mismatch(&mut self, virt: HReg, real: HReg) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(ASSIGN_CLASS)
                .with_message(format!(
                    "cannot assign the {} register {virt} to the {} register {real}",
                    virt.class(),
                    real.class()
                ))
                .with_labels(labels),
        );
    }

    pub fn assign_duplicate(&mut self, virt: HReg, previous: Span) {
        let labels = vec![
            Label::primary(self.at.file, self.at),
            Label::secondary(previous.file, previous).with_message("first assigned here"),
        ];

        self.add(
            Diagnostic::error()
                .with_code(ASSIGNED_TWICE)
                .with_message(format!("{virt} is assigned twice"))
                .with_labels(labels),
        );
    }

    pub fn bank_unknown_register(&mut self, reg: HReg, arch: Architecture) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_IN_BANK)
                .with_message(format!("{arch} has no {} register number {}", reg.class(), reg.index()))
                .with_labels(labels),
        );
    }

    pub fn toy_class_mismatch(&mut self, left: HReg, right: HReg) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(OPERAND_CLASS)
                .with_message(format!(
                    "operands {left} and {right} have different classes ({} and {})",
                    left.class(),
                    right.class()
                ))
                .with_labels(labels),
        );
    }

    pub fn toy_not_integer(&mut self, reg: HReg) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(NOT_INTEGER)
                .with_message(format!("expected an integer register, found the {} register {reg}", reg.class()))
                .with_labels(labels),
        );
    }
}
