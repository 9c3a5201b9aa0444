use std::collections::HashMap;

use bimap::BiMap;
use hreg_common::{HReg, RegClass};
use target_lexicon::Architecture;

/// The real registers a target architecture offers, per register class.
#[derive(Debug)]
pub struct Bank {
    arch: Architecture,
    classes: HashMap<RegClass, BiMap<u32, String>>,
}

impl Bank {
    /// Get the register bank for the given architecture, or `None` if the
    /// architecture is not supported.
    pub fn for_arch(arch: Architecture) -> Option<Self> {
        let classes = match arch {
            Architecture::X86_64 => x86_64(),
            Architecture::Aarch64(_) => aarch64(),
            Architecture::Riscv64(_) => riscv64(),
            _ => return None,
        };

        Some(Self { arch, classes })
    }

    pub fn arch(&self) -> Architecture {
        self.arch
    }

    /// The number of real registers of `class`.
    pub fn count(&self, class: RegClass) -> u32 {
        self.classes
            .get(&class)
            .map(|names| names.len() as u32)
            .unwrap_or(0)
    }

    pub fn contains(&self, reg: HReg) -> bool {
        reg.is_valid() && reg.is_real() && reg.index() < self.count(reg.class())
    }

    /// The architectural name of a real register.
    pub fn name_of(&self, reg: HReg) -> Option<&str> {
        if !reg.is_valid() || reg.is_virtual() {
            return None;
        }

        self.classes
            .get(&reg.class())?
            .get_by_left(&reg.index())
            .map(|name| name.as_str())
    }

    /// Find the real register of `class` called `name`.
    pub fn lookup(&self, class: RegClass, name: &str) -> Option<HReg> {
        self.classes
            .get(&class)?
            .get_by_right(&name.to_string())
            .map(|index| HReg::real(*index, class))
    }
}

fn named(names: &[&str]) -> BiMap<u32, String> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| (index as u32, name.to_string()))
        .collect()
}

fn numbered(prefix: &str, count: u32, suffix: &str) -> BiMap<u32, String> {
    (0..count)
        .map(|index| (index, format!("{prefix}{index}{suffix}")))
        .collect()
}

fn x86_64() -> HashMap<RegClass, BiMap<u32, String>> {
    let int32 = named(&[
        "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi", "r8d", "r9d", "r10d", "r11d",
        "r12d", "r13d", "r14d", "r15d",
    ]);

    let int64 = named(&[
        "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
        "r13", "r14", "r15",
    ]);

    HashMap::from([
        (RegClass::Int32, int32),
        (RegClass::Int64, int64),
        (RegClass::Float64, numbered("xmm", 16, "")),
        (RegClass::Vector64, numbered("mm", 8, "")),
        (RegClass::Vector128, numbered("xmm", 16, "")),
    ])
}

fn aarch64() -> HashMap<RegClass, BiMap<u32, String>> {
    HashMap::from([
        (RegClass::Int32, numbered("w", 31, "")),
        (RegClass::Int64, numbered("x", 31, "")),
        (RegClass::Float64, numbered("d", 32, "")),
        (RegClass::Vector64, numbered("v", 32, ".8b")),
        (RegClass::Vector128, numbered("v", 32, ".16b")),
    ])
}

// rv64 has no separate 32-bit or 64-bit SIMD registers.
fn riscv64() -> HashMap<RegClass, BiMap<u32, String>> {
    HashMap::from([
        (RegClass::Int64, numbered("x", 32, "")),
        (RegClass::Float64, numbered("f", 32, "")),
        (RegClass::Vector128, numbered("v", 32, "")),
    ])
}

#[cfg(test)]
mod tests {
    use hreg_common::{HReg, RegClass};
    use target_lexicon::{Aarch64Architecture, Architecture, Riscv64Architecture};

    use super::Bank;

    #[test]
    fn x86_64_names() {
        let bank = Bank::for_arch(Architecture::X86_64).unwrap();

        assert_eq!(16, bank.count(RegClass::Int64));
        assert_eq!(Some("rax"), bank.name_of(HReg::real(0, RegClass::Int64)));
        assert_eq!(Some("r8d"), bank.name_of(HReg::real(8, RegClass::Int32)));
        assert_eq!(Some("xmm3"), bank.name_of(HReg::real(3, RegClass::Float64)));
        assert_eq!(None, bank.name_of(HReg::virt(0, RegClass::Int64)));
        assert_eq!(None, bank.name_of(HReg::real(16, RegClass::Int64)));
        assert_eq!(None, bank.name_of(HReg::Invalid));
    }

    #[test]
    fn lookup_by_name() {
        let bank = Bank::for_arch(Architecture::Aarch64(Aarch64Architecture::Aarch64)).unwrap();

        assert_eq!(
            Some(HReg::real(29, RegClass::Int64)),
            bank.lookup(RegClass::Int64, "x29")
        );
        assert_eq!(None, bank.lookup(RegClass::Int32, "x29"));
        assert_eq!(Some("v2.16b"), bank.name_of(HReg::real(2, RegClass::Vector128)));
    }

    #[test]
    fn riscv_has_no_narrow_class() {
        let bank = Bank::for_arch(Architecture::Riscv64(Riscv64Architecture::Riscv64gc)).unwrap();

        assert_eq!(0, bank.count(RegClass::Int32));
        assert!(!bank.contains(HReg::real(0, RegClass::Int32)));
        assert!(bank.contains(HReg::real(31, RegClass::Int64)));
        assert!(!bank.contains(HReg::virt(1, RegClass::Int64)));
    }

    #[test]
    fn unsupported_architecture() {
        assert!(Bank::for_arch(Architecture::Wasm32).is_none());
    }
}
