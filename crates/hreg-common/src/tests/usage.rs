use crate::reg::{HReg, RegClass};
use crate::usage::{HRegMode, HRegUsage, N_USAGE};

fn r(index: u32) -> HReg {
    HReg::real(index, RegClass::Int32)
}

fn v(index: u32) -> HReg {
    HReg::virt(index, RegClass::Int32)
}

#[test]
fn starts_empty() {
    let usage = HRegUsage::new();

    assert!(usage.is_empty());
    assert_eq!(0, usage.len());
    assert_eq!("{}", usage.to_string());
}

#[test]
fn read_then_write_is_modify() {
    let mut usage = HRegUsage::new();
    usage.add(r(1), HRegMode::Read);
    usage.add(r(1), HRegMode::Write);

    assert_eq!(1, usage.len());
    assert_eq!(Some(HRegMode::Modify), usage.mode_of(r(1)));
}

#[test]
fn write_then_read_is_modify() {
    let mut usage = HRegUsage::new();
    usage.add(r(1), HRegMode::Write);
    usage.add(r(1), HRegMode::Read);

    assert_eq!(vec![(r(1), HRegMode::Modify)], usage.iter().collect::<Vec<_>>());
}

#[test]
fn same_mode_twice() {
    let mut usage = HRegUsage::new();
    usage.add(v(0), HRegMode::Read);
    usage.add(v(0), HRegMode::Read);

    assert_eq!(1, usage.len());
    assert_eq!(Some(HRegMode::Read), usage.mode_of(v(0)));
}

#[test]
fn modify_absorbs_everything() {
    for mode in [HRegMode::Read, HRegMode::Write, HRegMode::Modify] {
        let mut usage = HRegUsage::new();
        usage.add(v(2), HRegMode::Modify);
        usage.add(v(2), mode);
        assert_eq!(Some(HRegMode::Modify), usage.mode_of(v(2)));

        let mut usage = HRegUsage::new();
        usage.add(v(2), mode);
        usage.add(v(2), HRegMode::Modify);
        assert_eq!(Some(HRegMode::Modify), usage.mode_of(v(2)));
    }
}

#[test]
fn queries() {
    let mut usage = HRegUsage::new();
    usage.add(v(0), HRegMode::Read);
    usage.add(r(3), HRegMode::Write);
    usage.add(v(1), HRegMode::Modify);

    assert!(usage.reads(v(0)));
    assert!(!usage.writes(v(0)));
    assert!(usage.writes(r(3)));
    assert!(!usage.reads(r(3)));
    assert!(usage.reads(v(1)) && usage.writes(v(1)));
    assert!(!usage.reads(v(7)));
    assert_eq!(None, usage.mode_of(v(7)));

    assert_eq!(vec![v(0), v(1)], usage.virtuals().collect::<Vec<_>>());
}

#[test]
fn same_index_other_class_is_another_register() {
    let mut usage = HRegUsage::new();
    usage.add(HReg::real(0, RegClass::Int32), HRegMode::Read);
    usage.add(HReg::real(0, RegClass::Float64), HRegMode::Write);

    assert_eq!(2, usage.len());
}

#[test]
fn display() {
    let mut usage = HRegUsage::new();
    usage.add(v(0), HRegMode::Read);
    usage.add(r(3), HRegMode::Modify);

    assert_eq!("{ %vr0: read, %r3: modify }", usage.to_string());
}

#[test]
fn full_table_still_merges() {
    let mut usage = HRegUsage::new();
    for i in 0..N_USAGE as u32 {
        usage.add(v(i), HRegMode::Read);
    }

    usage.add(v(0), HRegMode::Write);

    assert_eq!(N_USAGE, usage.len());
    assert_eq!(Some(HRegMode::Modify), usage.mode_of(v(0)));
}

#[test]
#[should_panic(expected = "usage table overflow")]
fn fifth_register_is_fatal() {
    let mut usage = HRegUsage::new();
    for i in 0..N_USAGE as u32 {
        usage.add(v(i), HRegMode::Read);
    }

    usage.add(v(N_USAGE as u32), HRegMode::Read);
}

#[test]
#[should_panic(expected = "invalid register")]
fn invalid_register_is_fatal() {
    let mut usage = HRegUsage::new();
    usage.add(HReg::Invalid, HRegMode::Read);
}
