//! End-to-end decode scenarios: one hex instruction word each, checked against the exact field
//! values and kind the architecture defines for that encoding.

use aarch64_disasm::{decode, AddrMode, Condition, InstKind, RegClass};
use pretty_assertions::assert_eq;

#[test]
fn ldr_unsigned_offset() {
    let inst = decode(0xF940_0421, 0x1000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Ldr);
    assert_eq!(inst.rd, 1);
    assert_eq!(inst.rn, 1);
    assert_eq!(inst.rd_class, RegClass::GpX);
    assert_eq!(inst.rn_class, RegClass::GpX);
    assert_eq!(inst.imm, 8);
    assert_eq!(inst.addr_mode, AddrMode::ImmUnsigned);
}

#[test]
fn stp_pre_index() {
    let inst = decode(0xA9BF_7BFD, 0x1000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Stp);
    assert_eq!(inst.rd, 29);
    assert_eq!(inst.rt2, 30);
    assert_eq!(inst.rn, 31);
    assert_eq!(inst.rn_class, RegClass::Sp);
    assert_eq!(inst.rd_class, RegClass::GpX);
    assert_eq!(inst.imm, -16);
    assert_eq!(inst.addr_mode, AddrMode::PreIndex);
}

#[test]
fn unconditional_branch() {
    let inst = decode(0x1400_0010, 0x1000).expect("recognized");
    assert_eq!(inst.kind, InstKind::B);
    assert_eq!(inst.imm, 0x40);
    assert_eq!(aarch64_disasm::branch_target(&inst), Some(0x1040));
}

#[test]
fn ret_with_default_link_register() {
    let inst = decode(0xD65F_03C0, 0x1000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Ret);
    assert_eq!(inst.rn, 30);
}

#[test]
fn cset_alias_sets_condition_and_destination() {
    let inst = decode(0x9A9F_07E0, 0x2000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Cset);
    assert_eq!(inst.rd, 0);
    assert_eq!(inst.rd_class, RegClass::GpX);
    assert_eq!(inst.cond, Condition::Ne);
}

#[test]
fn fcmp_register_form() {
    let inst = decode(0x1E20_2000, 0x3000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Fcmp);
    assert_eq!(inst.rn, 0);
    assert_eq!(inst.rm, 0);
    assert_eq!(inst.rn_class, RegClass::VS);
    assert_eq!(inst.rm_class, RegClass::VS);
}

#[test]
fn fmov_gpr_to_fp_register() {
    let inst = decode(0x9E67_0000, 0x3000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Fmov);
    assert_eq!(inst.rd, 0);
    assert_eq!(inst.rd_class, RegClass::GpX);
    assert_eq!(inst.rn, 0);
    assert_eq!(inst.rn_class, RegClass::VD);
}

#[test]
fn compare_and_swap() {
    let inst = decode(0xC8A0_7C20, 0x4000).expect("recognized");
    assert_eq!(inst.kind, InstKind::Cas);
    assert_eq!(inst.rd, 0);
    assert_eq!(inst.rm, 0);
    assert_eq!(inst.rn, 1);
    assert_eq!(inst.rd_class, RegClass::GpX);
}

#[test]
fn unrecognized_word_decodes_to_none() {
    assert!(decode(0x0000_0000, 0).is_none());
}

#[test]
fn decode_is_pure_and_independent_of_prior_calls() {
    let first = decode(0xF940_0421, 0x1000);
    let second = decode(0xF940_0421, 0x1000);
    assert_eq!(first, second);
}
