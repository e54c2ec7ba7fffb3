//! Contract tests for [`aarch64_disasm::Instruction`]'s `Display` rendering: register class
//! spelling, addressing-mode-driven memory operands, and the MRS friendly-name fallback.

use aarch64_disasm::decode;

#[test]
fn ldr_renders_unsigned_offset_brackets() {
    let inst = decode(0xF940_0421, 0x1000).unwrap();
    assert_eq!(inst.to_string(), "ldr x1, [x1, #8]");
}

#[test]
fn stp_renders_pre_index_with_bang_and_sp() {
    let inst = decode(0xA9BF_7BFD, 0x1000).unwrap();
    assert_eq!(inst.to_string(), "stp x29, x30, [sp, #-16]!");
}

#[test]
fn ret_with_x30_renders_with_no_operand() {
    let inst = decode(0xD65F_03C0, 0x1000).unwrap();
    assert_eq!(inst.to_string(), "ret");
}

#[test]
fn branch_renders_hex_target_offset() {
    let inst = decode(0x1400_0010, 0x1000).unwrap();
    assert_eq!(inst.to_string(), "b #0x40");
}

#[test]
fn cset_renders_destination_and_condition_mnemonic() {
    let inst = decode(0x9A9F_07E0, 0x2000).unwrap();
    assert_eq!(inst.to_string(), "cset x0, ne");
}

#[test]
fn fcmp_renders_both_fp_operands() {
    let inst = decode(0x1E20_2000, 0x3000).unwrap();
    assert_eq!(inst.to_string(), "fcmp s0, s0");
}

#[test]
fn fmov_renders_gpr_destination_and_fp_source() {
    let inst = decode(0x9E67_0000, 0x3000).unwrap();
    assert_eq!(inst.to_string(), "fmov x0, d0");
}

#[test]
fn cas_renders_rm_rd_bracketed_rn() {
    let inst = decode(0xC8A0_7C20, 0x4000).unwrap();
    assert_eq!(inst.to_string(), "cas x0, x0, [x1]");
}

#[test]
fn mrs_known_sysreg_gets_friendly_name() {
    // mrs x0, nzcv
    let inst = decode(0xD53B_4200, 0).unwrap();
    assert_eq!(inst.to_string(), "mrs x0, nzcv");
}

#[test]
fn mrs_unknown_sysreg_falls_back_to_generic_spelling() {
    // mrs x0, s3_7_c15_c0_0 (an arbitrary implementation-defined register).
    let inst = decode(0xD53F_F000, 0).unwrap();
    assert_eq!(inst.to_string(), "mrs x0, s3_7_c15_c0_0");
}

#[test]
fn unknown_word_renders_raw_hex() {
    // 0x0 doesn't match any encoding this crate recognizes.
    assert!(decode(0x0000_0000, 0).is_none());
}
