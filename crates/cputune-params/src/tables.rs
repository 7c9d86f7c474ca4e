//! Cost and issue tables referenced from [`TuneParams`](crate::TuneParams).
//!
//! All tables are plain data. Zero is the value a table takes when the JSON
//! overrides a table the base profile does not provide.

use std::borrow::Cow;

// =============================================================================
// Instruction costs
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AluCostTable {
    pub arith: i32,
    pub logical: i32,
    pub shift: i32,
    pub shift_reg: i32,
    pub arith_shift: i32,
    pub arith_shift_reg: i32,
    pub log_shift: i32,
    pub log_shift_reg: i32,
    pub extend: i32,
    pub extend_arith: i32,
    pub bfi: i32,
    pub bfx: i32,
    pub clz: i32,
    pub rev: i32,
    pub non_exec: i32,
    pub non_exec_costs_exec: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultCostTable {
    pub simple: i32,
    pub flag_setting: i32,
    pub extend: i32,
    pub add: i32,
    pub extend_add: i32,
    pub idiv: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemCostTable {
    pub load: i32,
    pub load_sign_extend: i32,
    pub ldrd: i32,
    pub ldm_1st: i32,
    pub ldm_regs_per_insn_1st: i32,
    pub ldm_regs_per_insn_subsequent: i32,
    pub loadf: i32,
    pub loadd: i32,
    pub load_unaligned: i32,
    pub store: i32,
    pub strd: i32,
    pub stm_1st: i32,
    pub stm_regs_per_insn_1st: i32,
    pub stm_regs_per_insn_subsequent: i32,
    pub storef: i32,
    pub stored: i32,
    pub store_unaligned: i32,
    pub loadv: i32,
    pub storev: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FpCostTable {
    pub div: i32,
    pub mult: i32,
    pub mult_addsub: i32,
    pub fma: i32,
    pub addsub: i32,
    pub fpconst: i32,
    pub neg: i32,
    pub compare: i32,
    pub widen: i32,
    pub narrow: i32,
    pub toint: i32,
    pub fromint: i32,
    pub roundint: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VectorCostTable {
    pub alu: i32,
    pub mult: i32,
    pub movi: i32,
    pub dup: i32,
    pub extract: i32,
}

/// Extra costs per instruction class. `mult` and `fp` are indexed by
/// mode: `[0]` single/SImode, `[1]` double/DImode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuCostTable {
    pub alu: AluCostTable,
    pub mult: [MultCostTable; 2],
    pub ldst: MemCostTable,
    pub fp: [FpCostTable; 2],
    pub vect: VectorCostTable,
}

// =============================================================================
// Addressing and register moves
// =============================================================================

/// Additional cost of a scaled address, per access mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaleAddrModeCost {
    pub hi: i32,
    pub si: i32,
    pub di: i32,
    pub ti: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuAddrCostTable {
    pub addr_scale_costs: ScaleAddrModeCost,
    pub pre_modify: i32,
    pub post_modify: i32,
    pub post_modify_ld3_st3: i32,
    pub post_modify_ld4_st4: i32,
    pub register_offset: i32,
    pub register_sextend: i32,
    pub register_zextend: i32,
    pub imm_offset: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuRegmoveCost {
    pub gp2gp: i32,
    pub gp2fp: i32,
    pub fp2gp: i32,
    pub fp2fp: i32,
}

// =============================================================================
// Vector costs
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimdVecCost {
    pub int_stmt_cost: i32,
    pub fp_stmt_cost: i32,
    pub ld2_st2_permute_cost: i32,
    pub ld3_st3_permute_cost: i32,
    pub ld4_st4_permute_cost: i32,
    pub permute_cost: i32,
    pub reduc_i8_cost: i32,
    pub reduc_i16_cost: i32,
    pub reduc_i32_cost: i32,
    pub reduc_i64_cost: i32,
    pub reduc_f16_cost: i32,
    pub reduc_f32_cost: i32,
    pub reduc_f64_cost: i32,
    pub store_elt_extra_cost: i32,
    pub vec_to_scalar_cost: i32,
    pub scalar_to_vec_cost: i32,
    pub align_load_cost: i32,
    pub unalign_load_cost: i32,
    pub unalign_store_cost: i32,
    pub store_cost: i32,
}

/// SVE costs extend the Advanced SIMD ones; `base` fields share the JSON
/// object with the SVE-only fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SveVecCost {
    pub base: SimdVecCost,
    pub clast_cost: i32,
    pub fadda_f16_cost: i32,
    pub fadda_f32_cost: i32,
    pub fadda_f64_cost: i32,
    pub gather_load_x32_cost: i32,
    pub gather_load_x64_cost: i32,
    pub gather_load_x32_init_cost: i32,
    pub gather_load_x64_init_cost: i32,
    pub scatter_store_elt_cost: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseVecIssueInfo {
    pub loads_stores_per_cycle: u32,
    pub stores_per_cycle: u32,
    pub general_ops_per_cycle: u32,
    pub fp_simd_load_general_ops: u32,
    pub fp_simd_store_general_ops: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimdVecIssueInfo {
    pub base: BaseVecIssueInfo,
    pub ld2_st2_general_ops: u32,
    pub ld3_st3_general_ops: u32,
    pub ld4_st4_general_ops: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SveVecIssueInfo {
    pub base: SimdVecIssueInfo,
    pub pred_ops_per_cycle: u32,
    pub while_pred_ops: u32,
    pub int_cmp_pred_ops: u32,
    pub fp_cmp_pred_ops: u32,
    pub gather_scatter_pair_general_ops: u32,
    pub gather_scatter_pair_pred_ops: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecIssueInfo {
    pub scalar: Option<Cow<'static, BaseVecIssueInfo>>,
    pub advsimd: Option<Cow<'static, SimdVecIssueInfo>>,
    pub sve: Option<Cow<'static, SveVecIssueInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuVectorCost {
    pub scalar_int_stmt_cost: i32,
    pub scalar_fp_stmt_cost: i32,
    pub scalar_load_cost: i32,
    pub scalar_store_cost: i32,
    pub cond_taken_branch_cost: i32,
    pub cond_not_taken_branch_cost: i32,
    pub advsimd: Option<Cow<'static, SimdVecCost>>,
    pub sve: Option<Cow<'static, SveVecCost>>,
    pub issue_info: Option<Cow<'static, VecIssueInfo>>,
}

// =============================================================================
// Miscellaneous
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuBranchCost {
    pub predictable: i32,
    pub unpredictable: i32,
}

/// Bitmasks of modes for which approximate division/sqrt is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuApproxModes {
    pub division: u32,
    pub sqrt: u32,
    pub recip_sqrt: u32,
}

/// Software prefetch parameters. `-1` means "use the middle-end default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuPrefetchTune {
    pub num_slots: i32,
    pub l1_cache_size: i32,
    pub l1_cache_line_size: i32,
    pub l2_cache_size: i32,
    pub prefetch_dynamic_strides: bool,
    pub minimum_stride: i32,
    pub default_opt_level: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuMemmovCost {
    pub load_int: i32,
    pub store_int: i32,
    pub load_fp: i32,
    pub store_fp: i32,
    pub load_pred: i32,
    pub store_pred: i32,
}

// =============================================================================
// Dispatch constraints
// =============================================================================

/// One dispatch resource and how many instructions it accepts per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConstraint {
    pub name: &'static str,
    pub max_slots: u32,
}

/// Dispatch model of a core. Only base profiles provide one; tuning files
/// cannot describe it.
#[derive(Debug, PartialEq, Eq)]
pub struct DispatchConstraints {
    pub dispatch_width: u32,
    pub constraints: &'static [DispatchConstraint],
}
