use std::collections::HashMap;

use hreg_common::HReg;
use logos::Logos;

use super::token::Token;
use super::{Assignment, Listing};
use crate::bank::Bank;
use crate::message::{File, Messages, Span};
use crate::toy::{is_integer, Addr, AluOp, Inst};

pub(super) struct Parser<'src, 'b> {
    tokens: Vec<(Token<'src>, Span)>,
    pos: usize,
    end: Span,
    bank: Option<&'b Bank>,
    assigned: HashMap<HReg, Span>,

    pub listing: Listing,
    pub msgs: Messages,
}

impl<'src, 'b> Parser<'src, 'b> {
    pub fn new(src: &'src str, file: File, bank: Option<&'b Bank>) -> Self {
        let tokens = Token::lexer(src)
            .spanned()
            .map(|(tok, span)| (tok, Span::new(file, span.start, span.end)))
            .collect();

        Self {
            tokens,
            pos: 0,
            end: Span::new(file, src.len(), src.len()),
            bank,
            assigned: HashMap::new(),

            listing: Listing::default(),
            msgs: Messages::new(),
        }
    }

    pub fn parse(&mut self) {
        while let Some((tok, _)) = self.peek() {
            match tok {
                Token::Newline => self.pos += 1,
                _ => self.line(),
            }
        }
    }

    fn line(&mut self) {
        let line_end = self.line_end();

        let invalid: Vec<_> = self.tokens[self.pos..line_end]
            .iter()
            .filter(|(tok, _)| *tok == Token::Error)
            .map(|(_, span)| *span)
            .collect();

        if !invalid.is_empty() {
            for span in invalid {
                self.msgs.at(span).lex_invalid();
            }

            self.pos = line_end;
            return;
        }

        let parsed = match self.peek() {
            Some((Token::Register(_), _)) => self.assignment(),
            Some((Token::Name(name), span)) => self.inst(name, span),
            Some((_, span)) => {
                self.msgs.at(span).parse_expected_line();
                None
            }
            None => None,
        };

        if parsed.is_some() && self.pos < line_end {
            let span = self.tokens[self.pos].1 + self.tokens[line_end - 1].1;
            self.msgs.at(span).parse_trailing();
        }

        self.pos = line_end;
    }

    fn assignment(&mut self) -> Option<()> {
        let (virt, virt_span) = self.reg()?;
        self.expect(Token::Arrow, "`->`")?;
        let (real, real_span) = self.reg()?;
        let span = virt_span + real_span;

        if !virt.is_virtual() {
            self.msgs.at(virt_span).assign_not_virtual(virt);
        } else if !real.is_real() {
            self.msgs.at(real_span).assign_not_real(real);
        } else if virt.class() != real.class() {
            self.msgs.at(span).assign_class_mismatch(virt, real);
        } else if let Some(previous) = self.assigned.get(&virt).copied() {
            self.msgs.at(span).assign_duplicate(virt, previous);
        } else {
            self.assigned.insert(virt, span);
            self.listing
                .assignments
                .push(Assignment { virt, real, span });
        }

        Some(())
    }

    fn inst(&mut self, name: &str, span: Span) -> Option<()> {
        self.pos += 1;

        let inst = match name {
            "li" => {
                let dst = self.int_reg()?;
                self.expect(Token::Comma, "`,`")?;
                let imm = self.signed()?;
                Inst::Li { dst, imm }
            }

            "mov" => {
                let (dst, src) = self.pair()?;
                Inst::Mov { dst, src }
            }

            "add" | "sub" | "mul" => {
                let op = match name {
                    "add" => AluOp::Add,
                    "sub" => AluOp::Sub,
                    _ => AluOp::Mul,
                };

                let (dst, src) = self.pair()?;
                Inst::Alu { op, dst, src }
            }

            "neg" => {
                let (dst, _) = self.reg()?;
                Inst::Neg { dst }
            }

            "ld" => {
                let (dst, _) = self.reg()?;
                self.expect(Token::Comma, "`,`")?;
                let addr = self.addr()?;
                Inst::Load { dst, addr }
            }

            "st" => {
                let (src, _) = self.reg()?;
                self.expect(Token::Comma, "`,`")?;
                let addr = self.addr()?;
                Inst::Store { src, addr }
            }

            "fma" => {
                let (dst, dst_span) = self.reg()?;
                self.expect(Token::Comma, "`,`")?;
                let (a, b) = self.pair()?;
                if a.class() == b.class() && dst.class() != a.class() {
                    self.msgs.at(dst_span).toy_class_mismatch(dst, a);
                }

                Inst::Fma { dst, a, b }
            }

            "cmp" => {
                let (left, right) = self.pair()?;
                Inst::Cmp { left, right }
            }

            "ret" => {
                let (src, _) = self.reg()?;
                Inst::Ret { src }
            }

            _ => {
                self.msgs.at(span).parse_unknown_mnemonic(name);
                return None;
            }
        };

        let span = span + self.tokens[self.pos - 1].1;
        self.listing.insts.push((inst, span));

        Some(())
    }

    /// Two comma separated registers of the same class.
    fn pair(&mut self) -> Option<(HReg, HReg)> {
        let (left, left_span) = self.reg()?;
        self.expect(Token::Comma, "`,`")?;
        let (right, right_span) = self.reg()?;

        if left.class() != right.class() {
            self.msgs
                .at(left_span + right_span)
                .toy_class_mismatch(left, right);
        }

        Some((left, right))
    }

    fn addr(&mut self) -> Option<Addr> {
        self.expect(Token::LBracket, "`[`")?;
        let base = self.int_reg()?;

        let offset = match self.peek() {
            Some((Token::Plus, _)) => {
                self.pos += 1;
                self.number(false)?
            }

            Some((Token::Minus, _)) => {
                self.pos += 1;
                self.number(true)?
            }

            _ => 0,
        };

        self.expect(Token::RBracket, "`]`")?;

        Some(Addr { base, offset })
    }

    fn int_reg(&mut self) -> Option<HReg> {
        let (reg, span) = self.reg()?;

        if !is_integer(reg.class()) {
            self.msgs.at(span).toy_not_integer(reg);
        }

        Some(reg)
    }

    fn reg(&mut self) -> Option<(HReg, Span)> {
        match self.peek() {
            Some((Token::Register(text), span)) => {
                self.pos += 1;

                match text.parse::<HReg>() {
                    Ok(reg) => {
                        self.check_bank(reg, span);
                        Some((reg, span))
                    }

                    Err(error) => {
                        self.msgs.at(span).parse_bad_register(&error);
                        None
                    }
                }
            }

            found => {
                self.expected("a register", found);
                None
            }
        }
    }

    fn signed(&mut self) -> Option<i64> {
        match self.peek() {
            Some((Token::Minus, _)) => {
                self.pos += 1;
                self.number(true)
            }

            _ => self.number(false),
        }
    }

    fn number(&mut self, negative: bool) -> Option<i64> {
        match self.peek() {
            Some((Token::Number(text), span)) => {
                self.pos += 1;

                let sign = if negative { "-" } else { "" };
                let digits: String = text.chars().filter(|c| *c != '_').collect();

                match format!("{sign}{digits}").parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        self.msgs.at(span).parse_bad_immediate(text);
                        None
                    }
                }
            }

            found => {
                self.expected("a number", found);
                None
            }
        }
    }

    fn check_bank(&mut self, reg: HReg, span: Span) {
        if let Some(bank) = self.bank {
            if reg.is_real() && !bank.contains(reg) {
                self.msgs
                    .at(span)
                    .bank_unknown_register(reg, bank.arch());
            }
        }
    }

    fn expect(&mut self, expected: Token, what: &str) -> Option<()> {
        match self.peek() {
            Some((tok, _)) if tok == expected => {
                self.pos += 1;
                Some(())
            }

            found => {
                self.expected(what, found);
                None
            }
        }
    }

    fn expected(&mut self, what: &str, found: Option<(Token, Span)>) {
        let (found, span) = match found {
            Some((tok, span)) => (tok.describe(), span),
            None => ("the end of the file", self.end),
        };

        self.msgs
            .at(span)
            .parse_expected(&format!("{what}, found {found}"));
    }

    fn peek(&self) -> Option<(Token<'src>, Span)> {
        self.tokens.get(self.pos).copied()
    }

    /// Index of the newline ending the current line, or the end of the tokens.
    fn line_end(&self) -> usize {
        self.tokens[self.pos..]
            .iter()
            .position(|(tok, _)| *tok == Token::Newline)
            .map(|offset| self.pos + offset)
            .unwrap_or(self.tokens.len())
    }
}
