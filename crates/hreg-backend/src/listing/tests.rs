use hreg_common::{HReg, RegClass};
use target_lexicon::Architecture;

use super::parse;
use crate::bank::Bank;
use crate::toy::{Addr, AluOp, Inst};

fn v(index: u32) -> HReg {
    HReg::virt(index, RegClass::Int64)
}

fn r(index: u32) -> HReg {
    HReg::real(index, RegClass::Int64)
}

fn codes(src: &str, bank: Option<&Bank>) -> Vec<String> {
    let (_, msgs) = parse(src, 0, bank);
    msgs.codes().map(String::from).collect()
}

#[test]
fn parse_instructions() {
    let src = r#"
        # sum the first two slots
        li  %vR0, 16
        ld  %vR1, [%vR0]
        ld  %vR2, [%vR0 + 8]
        add %vR1, %vR2
        st  %vR1, [%vR0 - 1_000]
        neg %vR1
        cmp %vR1, %R3
        fma %vF0, %vF1, %vF2
        mov %vR3, %vR1
        ret %vR3
    "#;

    let (listing, msgs) = parse(src, 0, None);
    assert!(msgs.is_empty(), "{msgs:?}");

    let insts: Vec<_> = listing.insts.into_iter().map(|(inst, _)| inst).collect();
    let f = |index| HReg::virt(index, RegClass::Float64);

    assert_eq!(
        vec![
            Inst::Li { dst: v(0), imm: 16 },
            Inst::Load {
                dst: v(1),
                addr: Addr { base: v(0), offset: 0 }
            },
            Inst::Load {
                dst: v(2),
                addr: Addr { base: v(0), offset: 8 }
            },
            Inst::Alu {
                op: AluOp::Add,
                dst: v(1),
                src: v(2)
            },
            Inst::Store {
                src: v(1),
                addr: Addr {
                    base: v(0),
                    offset: -1000
                }
            },
            Inst::Neg { dst: v(1) },
            Inst::Cmp {
                left: v(1),
                right: r(3)
            },
            Inst::Fma {
                dst: f(0),
                a: f(1),
                b: f(2)
            },
            Inst::Mov { dst: v(3), src: v(1) },
            Inst::Ret { src: v(3) },
        ],
        insts
    );
}

#[test]
fn parse_assignments() {
    let src = "mov %vR1, %vR0\n%vR0 -> %R5\n%vR1 -> %R0\n";
    let (listing, msgs) = parse(src, 0, None);

    assert!(msgs.is_empty());
    assert_eq!(2, listing.assignments.len());

    let assignment = listing.assignment();
    assert_eq!(Some(&r(5)), assignment.get(&v(0)));
    assert_eq!(Some(&r(0)), assignment.get(&v(1)));
    assert_eq!(None, assignment.get(&v(2)));
}

#[test]
fn spans_cover_the_instruction() {
    let src = "li %vr0, -4 # comment";
    let (listing, _) = parse(src, 3, None);
    let (inst, span) = &listing.insts[0];

    assert_eq!(&Inst::Li { dst: HReg::virt(0, RegClass::Int32), imm: -4 }, inst);
    assert_eq!(3, span.file);
    assert_eq!("li %vr0, -4", &src[span.start..span.end]);
}

#[test]
fn syntax_errors() {
    assert_eq!(vec!["EL00"], codes("li %vr0, 1 $\n", None));
    assert_eq!(vec!["EL01"], codes(", %vr0\n", None));
    assert_eq!(vec!["EL02"], codes("jmp %vr0\n", None));
    assert_eq!(vec!["EL03"], codes("mov %vr0 %vr1\n", None));
    assert_eq!(vec!["EL03"], codes("ld %vr0, [%vr1", None));
    assert_eq!(vec!["EL04"], codes("neg %x0\n", None));
    assert_eq!(vec!["EL05"], codes("li %vr0, 99999999999999999999\n", None));
    assert_eq!(vec!["EL06"], codes("neg %vr0 %vr1\n", None));
}

#[test]
fn errors_do_not_stop_parsing() {
    let src = "jmp %vr0\nneg %vr0\nneg %x1\nret %vr0\n";
    let (listing, msgs) = parse(src, 0, None);

    assert_eq!(2, msgs.len());
    assert_eq!(2, listing.insts.len());
}

#[test]
fn assignment_errors() {
    assert_eq!(vec!["EA00"], codes("%r0 -> %r1\n", None));
    assert_eq!(vec!["EA01"], codes("%vr0 -> %vr1\n", None));
    assert_eq!(vec!["EA02"], codes("%vr0 -> %F1\n", None));
    assert_eq!(vec!["EA03"], codes("%vr0 -> %r1\n%vr0 -> %r2\n", None));
}

#[test]
fn operand_class_errors() {
    assert_eq!(vec!["ET00"], codes("add %vr0, %vF1\n", None));
    assert_eq!(vec!["ET00"], codes("fma %vr0, %vF1, %vF2\n", None));
    assert_eq!(vec!["ET01"], codes("ld %vr0, [%vF1]\n", None));
    assert_eq!(vec!["ET01"], codes("li %vQ0, 1\n", None));
}

#[test]
fn registers_must_exist_on_target() {
    let bank = Bank::for_arch(Architecture::X86_64).unwrap();

    assert!(codes("%vR0 -> %R15\n", Some(&bank)).is_empty());
    assert_eq!(vec!["EB00"], codes("%vR0 -> %R16\n", Some(&bank)));
    assert_eq!(vec!["EB00"], codes("ret %D9\n", Some(&bank)));
    assert!(codes("ret %vD9\n", Some(&bank)).is_empty());
}
