//! The decoded instruction data model: closed, exhaustively-matchable enums instead of the raw
//! integers the architecture manual uses, plus the [`Instruction`] record the decoder populates.

use core::fmt;

/// The width/identity of a register operand slot.
///
/// Encoding `31` is architecturally ambiguous between the stack pointer and a hard-wired zero
/// register; the decoder resolves that ambiguity per instruction form (never the caller), so by
/// the time an `Instruction` exists, every slot already carries the correct variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegClass {
    /// 64-bit general-purpose register, encodings 0..=30.
    GpX,
    /// 32-bit general-purpose register, encodings 0..=30.
    GpW,
    /// Stack pointer (only meaningful for encoding 31).
    Sp,
    /// 64-bit zero register.
    Xzr,
    /// 32-bit zero register.
    Wzr,
    /// Vector register referenced by its full name (no specific lane width implied).
    VFull,
    /// 8-bit (byte) SIMD/FP scalar view.
    VB,
    /// 16-bit (halfword) SIMD/FP scalar view.
    VH,
    /// 32-bit (single) SIMD/FP scalar view.
    VS,
    /// 64-bit (double) SIMD/FP scalar view.
    VD,
    /// 128-bit (quad) SIMD/FP scalar view.
    VQ,
}

impl Default for RegClass {
    fn default() -> Self {
        RegClass::GpW
    }
}

impl RegClass {
    /// The plain general-purpose class for a register encoding, honoring `sf` (1 = 64-bit).
    /// Encoding 31 is *not* special-cased here; callers that need zero-register or SP semantics
    /// for encoding 31 use [`Self::gpr_or_zero`] / [`Self::gpr_or_sp`] instead.
    #[must_use]
    pub const fn gpr(sf: bool) -> Self {
        if sf {
            RegClass::GpX
        } else {
            RegClass::GpW
        }
    }

    /// General-purpose class where encoding 31 means the zero register rather than a normal GPR.
    #[must_use]
    pub const fn gpr_or_zero(reg: u8, sf: bool) -> Self {
        if reg == 31 {
            if sf {
                RegClass::Xzr
            } else {
                RegClass::Wzr
            }
        } else {
            Self::gpr(sf)
        }
    }

    /// General-purpose class where encoding 31 means the stack pointer rather than a normal GPR.
    #[must_use]
    pub const fn gpr_or_sp(reg: u8, sf: bool) -> Self {
        if reg == 31 {
            RegClass::Sp
        } else {
            Self::gpr(sf)
        }
    }

    /// The scalar SIMD/FP class for the 2-bit `ftype` field (`0=S, 1=D, 3=H`; `2` is reserved and
    /// treated as `S` by callers, who are expected to have already rejected it).
    #[must_use]
    pub const fn fp_by_ftype(ftype: u32) -> Self {
        match ftype {
            1 => RegClass::VD,
            3 => RegClass::VH,
            _ => RegClass::VS,
        }
    }

    /// The scalar SIMD element class selected by the lowest set bit of a 5-bit `imm5`/`size`-style
    /// field (`0=B, 1=H, 2=S, 3=D`).
    #[must_use]
    pub const fn vector_by_size(size: u32) -> Self {
        match size {
            0 => RegClass::VB,
            1 => RegClass::VH,
            2 => RegClass::VS,
            _ => RegClass::VD,
        }
    }
}

/// The addressing mode of a load/store instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddrMode {
    /// Not a memory operation.
    #[default]
    None,
    /// Scaled unsigned 12-bit immediate offset.
    ImmUnsigned,
    /// Unscaled signed 9-bit immediate offset.
    ImmSigned,
    /// Pre-indexed: address computed and written back before the access.
    PreIndex,
    /// Post-indexed: address written back after the access.
    PostIndex,
    /// Base register plus unscaled/unextended index register.
    RegOffset,
    /// Base register plus extended (and optionally scaled) index register.
    RegExtend,
    /// PC-relative literal pool load.
    Literal,
}

/// An extend or register-shift descriptor.
///
/// Values `0..=7` map bit-exact onto the architectural `option` field used by extended-register
/// addressing and register-offset loads/stores. Values `8..=11` are the shift kinds used by
/// register-shifted data-processing instructions; they share this type because both roles fill
/// the same `extend` slot on [`Instruction`] and are rendered by the same kind of operand syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ExtendKind {
    /// Unsigned extend byte.
    #[default]
    UxtB = 0,
    /// Unsigned extend halfword.
    UxtH = 1,
    /// Unsigned extend word.
    UxtW = 2,
    /// Unsigned extend doubleword (no-op extend, used for plain register offsets).
    UxtX = 3,
    /// Signed extend byte.
    SxtB = 4,
    /// Signed extend halfword.
    SxtH = 5,
    /// Signed extend word.
    SxtW = 6,
    /// Signed extend doubleword.
    SxtX = 7,
    /// Logical shift left.
    Lsl = 8,
    /// Logical shift right.
    Lsr = 9,
    /// Arithmetic shift right.
    Asr = 10,
    /// Rotate right.
    Ror = 11,
}

impl ExtendKind {
    /// Reconstructs an [`ExtendKind`] from the architectural 3-bit `option` field (`0..=7`).
    #[must_use]
    pub const fn from_option(option: u32) -> Self {
        match option {
            0 => ExtendKind::UxtB,
            1 => ExtendKind::UxtH,
            2 => ExtendKind::UxtW,
            3 => ExtendKind::UxtX,
            4 => ExtendKind::SxtB,
            5 => ExtendKind::SxtH,
            6 => ExtendKind::SxtW,
            _ => ExtendKind::SxtX,
        }
    }

    /// Reconstructs an [`ExtendKind`] from the 2-bit shift-type field used by shifted-register
    /// data-processing instructions (`0..=3` → `Lsl/Lsr/Asr/Ror`).
    #[must_use]
    pub const fn from_shift(shift: u32) -> Self {
        match shift {
            0 => ExtendKind::Lsl,
            1 => ExtendKind::Lsr,
            2 => ExtendKind::Asr,
            _ => ExtendKind::Ror,
        }
    }

    /// Whether an extended-register index uses a 64-bit index register (`UXTX`/`SXTX`).
    #[must_use]
    pub const fn is_64bit_index(self) -> bool {
        matches!(self, ExtendKind::UxtX | ExtendKind::SxtX)
    }
}

/// Condition code, valid when [`Instruction::cond`] applies (conditional branches, conditional
/// selects, conditional compares).
///
/// The sixteen architectural codes in their canonical index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Condition {
    Eq = 0,
    Ne = 1,
    Cs = 2,
    Cc = 3,
    Mi = 4,
    Pl = 5,
    Vs = 6,
    Vc = 7,
    Hi = 8,
    Ls = 9,
    Ge = 10,
    Lt = 11,
    Gt = 12,
    Le = 13,
    #[default]
    Al = 14,
    Nv = 15,
}

impl Condition {
    /// Reconstructs a [`Condition`] from its 4-bit architectural encoding.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        match bits & 0xF {
            0 => Condition::Eq,
            1 => Condition::Ne,
            2 => Condition::Cs,
            3 => Condition::Cc,
            4 => Condition::Mi,
            5 => Condition::Pl,
            6 => Condition::Vs,
            7 => Condition::Vc,
            8 => Condition::Hi,
            9 => Condition::Ls,
            10 => Condition::Ge,
            11 => Condition::Lt,
            12 => Condition::Gt,
            13 => Condition::Le,
            14 => Condition::Al,
            _ => Condition::Nv,
        }
    }

    /// The architectural encoding of this condition (the inverse of [`Self::from_bits`]).
    #[must_use]
    pub const fn into_bits(self) -> u32 {
        self as u32
    }

    /// The condition with the least-significant bit of its encoding flipped.
    ///
    /// Several conditional-select aliases (`CSET`, `CINC`, `CSETM`, `CINV`, `CNEG`) are defined
    /// in terms of the base instruction executed with the *inverse* of the alias's condition.
    #[must_use]
    pub const fn invert_lsb(self) -> Self {
        Self::from_bits(self.into_bits() ^ 1)
    }

    /// The canonical lowercase mnemonic suffix (`"eq"`, `"ne"`, ...).
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Condition::Eq => "eq",
            Condition::Ne => "ne",
            Condition::Cs => "cs",
            Condition::Cc => "cc",
            Condition::Mi => "mi",
            Condition::Pl => "pl",
            Condition::Vs => "vs",
            Condition::Vc => "vc",
            Condition::Hi => "hi",
            Condition::Ls => "ls",
            Condition::Ge => "ge",
            Condition::Lt => "lt",
            Condition::Gt => "gt",
            Condition::Le => "le",
            Condition::Al => "al",
            Condition::Nv => "nv",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// The closed set of operation kinds the decoder can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum InstKind {
    #[default]
    Unknown,

    // Loads/stores
    Ldr,
    Ldrb,
    Ldrh,
    Ldrsw,
    Ldrsb,
    Ldrsh,
    Str,
    Strb,
    Strh,
    Ldp,
    Stp,

    // Moves and wide immediates
    Mov,
    Movz,
    Movn,
    Movk,

    // Arithmetic and PC-relative address formation
    Add,
    Sub,
    Adds,
    Subs,
    Adr,
    Adrp,

    // Branches
    B,
    Bl,
    Br,
    Blr,
    Ret,
    Eret,
    Drps,
    Cbz,
    Cbnz,
    Tbz,
    Tbnz,

    // Bitwise / shifts
    And,
    Orr,
    Eor,
    Bic,
    Orn,
    Eon,
    Mvn,
    Lsl,
    Lsr,
    Asr,
    Ror,

    // Comparisons
    Cmp,
    Cmn,
    Tst,

    // Multiply / divide
    Mul,
    Mneg,
    Madd,
    Msub,
    Sdiv,
    Udiv,

    // Conditional select family
    Csel,
    Csinc,
    Csinv,
    Csneg,
    Cset,
    Csetm,
    Cinc,
    Cinv,
    Cneg,

    // Bit-counting / reversal / bitfield
    Clz,
    Cls,
    Rbit,
    Rev,
    Rev16,
    Rev32,
    Extr,
    Sbfm,
    Bfm,
    Ubfm,

    // Atomics and exclusive/acquire-release memory
    Ldxr,
    Stxr,
    Ldaxr,
    Stlxr,
    Ldxp,
    Stxp,
    Ldaxp,
    Stlxp,
    Ldar,
    Stlr,
    Ldlar,
    Stllr,
    Cas,
    Ldadd,
    Ldclr,
    Ldeor,
    Ldset,
    Ldsmax,
    Ldsmin,
    Ldumax,
    Ldumin,
    Swp,

    // System
    Nop,
    Yield,
    Wfe,
    Wfi,
    Sev,
    Sevl,
    Mrs,

    // Floating point
    Fmov,
    Fadd,
    Fsub,
    Fmul,
    Fdiv,
    Fabs,
    Fneg,
    Fsqrt,
    Fmadd,
    Fmsub,
    Fnmadd,
    Fnmsub,
    Fnmul,
    Fmax,
    Fmin,
    Fmaxnm,
    Fminnm,
    Fcmp,
    Fcmpe,
    Fccmp,
    Fccmpe,
    Fcsel,
    Fcvt,
    Fcvtzs,
    Fcvtzu,
    Scvtf,
    Ucvtf,
    Frintn,
    Frintp,
    Frintm,
    Frintz,
    Frinta,
    Frintx,
    Frinti,

    // Scalar advanced-SIMD
    Dup,
    Suqadd,
    Usqadd,
    Sqabs,
    Sqneg,
    Cmgt,
    Cmge,
    Cmeq,
    Cmlt,
    Cmle,
    Abs,
    Neg,
    Fcmgt,
    Fcmge,
    Fcmeq,
    Fcmlt,
    Fcmle,
    Fcvtns,
    Fcvtnu,
    Fcvtps,
    Fcvtpu,
    Fcvtms,
    Fcvtmu,
    Fcvtas,
    Fcvtau,
    Fmulx,
    Frecps,
    Frsqrts,
    Facge,
    Facgt,
}

/// A fully decoded AArch64 instruction.
///
/// Created by the decoder and read-only afterwards: every field has a deterministic default
/// before decoding begins ([`Instruction::default`]), and each per-encoding decoder overwrites
/// only the fields meaningful for the form it matched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Instruction {
    /// The raw little-endian instruction word, as decoded.
    pub raw: u32,
    /// The virtual address at which this instruction is located.
    pub address: u64,

    /// The operation kind.
    pub kind: InstKind,
    /// A short canonical mnemonic (e.g. `"ldr"`, `"b.eq"`); always `'static`.
    pub mnemonic: &'static str,

    /// Destination / first operand register encoding (`0..=31`).
    pub rd: u8,
    /// First source register encoding (`0..=31`).
    pub rn: u8,
    /// Second source register encoding (`0..=31`).
    pub rm: u8,
    /// Second destination/transfer register (LDP/STP, exclusive pairs) or status register (STXR
    /// family).
    pub rt2: u8,
    /// Third source register (3-source data-processing, FMADD-family).
    pub ra: u8,

    /// Operand class of `rd`.
    pub rd_class: RegClass,
    /// Operand class of `rn`.
    pub rn_class: RegClass,
    /// Operand class of `rm`.
    pub rm_class: RegClass,

    /// Sign-extended immediate value, meaningful only when `has_imm` is set.
    pub imm: i64,
    /// Whether `imm` carries a meaningful value for this instruction.
    pub has_imm: bool,

    /// The memory addressing mode, for load/store instructions.
    pub addr_mode: AddrMode,
    /// The extend/shift descriptor.
    pub extend: ExtendKind,
    /// Shift amount, or (depending on kind) a bit position (`TBZ`/`TBNZ`) or `immr` (bitfield
    /// ops).
    pub shift_amount: u8,

    /// Condition code, meaningful when `kind` is a conditional form.
    pub cond: Condition,

    /// Whether this is the 64-bit (`X`) form of the instruction rather than the 32-bit (`W`)
    /// form.
    pub is_64bit: bool,
    /// Whether this form updates the condition flags (`ADDS`/`SUBS`/`ANDS`, ...).
    pub set_flags: bool,
    /// Whether this is the acquire-ordered form of an atomic/exclusive access.
    pub is_acquire: bool,
    /// Whether this is the release-ordered form of an atomic/exclusive access.
    pub is_release: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_instruction_is_unknown_and_zeroed() {
        let inst = Instruction::default();
        assert_eq!(inst.kind, InstKind::Unknown);
        assert_eq!(inst.raw, 0);
        assert_eq!(inst.rd, 0);
        assert!(!inst.has_imm);
        assert_eq!(inst.addr_mode, AddrMode::None);
    }

    #[test]
    fn condition_invert_lsb_is_involution() {
        for bits in 0..16u32 {
            let c = Condition::from_bits(bits);
            assert_eq!(c.invert_lsb().invert_lsb(), c);
        }
    }

    #[test]
    fn condition_round_trips_through_bits() {
        for bits in 0..16u32 {
            assert_eq!(Condition::from_bits(bits).into_bits(), bits);
        }
    }

    #[test]
    fn extend_kind_option_round_trip() {
        for option in 0..8u32 {
            let kind = ExtendKind::from_option(option);
            assert_eq!(kind as u32, option);
        }
    }
}
