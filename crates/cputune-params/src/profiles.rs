//! Built-in base profiles that tuning files are applied on top of.

use std::borrow::Cow;

use thiserror::Error;

use crate::enums::{AutoprefetchModel, LdpStpPolicy};
use crate::flags::{extra_tuning, fusion};
use crate::params::TuneParams;
use crate::tables::*;

const fn insns(n: i32) -> i32 {
    n * 4
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown base profile '{name}' (available: {available})")]
pub struct UnknownProfile {
    pub name: String,
    pub available: String,
}

/// A named base profile.
#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> TuneParams,
}

impl Profile {
    /// A fresh copy of the profile's parameters.
    pub fn params(&self) -> TuneParams {
        (self.build)()
    }
}

pub const DEFAULT_PROFILE: &str = "generic";

pub static PROFILES: &[Profile] = &[
    Profile {
        name: "generic",
        description: "Conservative defaults; no vector issue model, no dispatch model",
        build: generic,
    },
    Profile {
        name: "neoverse-v2",
        description: "Neoverse V2 with vector issue information and dispatch constraints",
        build: neoverse_v2,
    },
];

pub fn find_profile(name: &str) -> Result<&'static Profile, UnknownProfile> {
    PROFILES
        .iter()
        .find(|profile| profile.name == name)
        .ok_or_else(|| UnknownProfile {
            name: name.to_string(),
            available: PROFILES
                .iter()
                .map(|profile| profile.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

// =============================================================================
// Shared instruction cost tables
// =============================================================================

static GENERIC_EXTRA_COSTS: CpuCostTable = CpuCostTable {
    alu: AluCostTable {
        arith: 0,
        logical: 0,
        shift: 0,
        shift_reg: insns(1),
        arith_shift: insns(1),
        arith_shift_reg: insns(1),
        log_shift: insns(1),
        log_shift_reg: insns(1),
        extend: insns(1),
        extend_arith: insns(1),
        bfi: insns(1),
        bfx: insns(1),
        clz: 0,
        rev: 0,
        non_exec: 0,
        non_exec_costs_exec: true,
    },
    mult: [
        MultCostTable {
            simple: insns(2),
            flag_setting: insns(1),
            extend: insns(2),
            add: insns(3),
            extend_add: insns(3),
            idiv: insns(8),
        },
        MultCostTable {
            simple: insns(3),
            flag_setting: 0,
            extend: insns(2),
            add: insns(3),
            extend_add: 0,
            idiv: insns(8),
        },
    ],
    ldst: MemCostTable {
        load: insns(2),
        load_sign_extend: insns(2),
        ldrd: insns(2),
        ldm_1st: insns(2),
        ldm_regs_per_insn_1st: 1,
        ldm_regs_per_insn_subsequent: 2,
        loadf: insns(2),
        loadd: insns(3),
        load_unaligned: insns(1),
        store: 0,
        strd: 0,
        stm_1st: 0,
        stm_regs_per_insn_1st: 1,
        stm_regs_per_insn_subsequent: 2,
        storef: insns(2),
        stored: insns(2),
        store_unaligned: insns(1),
        loadv: insns(1),
        storev: insns(1),
    },
    fp: [
        FpCostTable {
            div: insns(17),
            mult: insns(4),
            mult_addsub: insns(8),
            fma: insns(8),
            addsub: insns(4),
            fpconst: insns(1),
            neg: insns(1),
            compare: insns(1),
            widen: insns(1),
            narrow: insns(1),
            toint: insns(1),
            fromint: insns(1),
            roundint: 0,
        },
        FpCostTable {
            div: insns(31),
            mult: insns(4),
            mult_addsub: insns(8),
            fma: insns(8),
            addsub: insns(4),
            fpconst: insns(1),
            neg: insns(1),
            compare: insns(1),
            widen: insns(1),
            narrow: insns(1),
            toint: insns(1),
            fromint: insns(1),
            roundint: 0,
        },
    ],
    vect: VectorCostTable {
        alu: insns(1),
        mult: insns(4),
        movi: insns(1),
        dup: insns(2),
        extract: insns(2),
    },
};

static GENERIC_ADDRCOST_TABLE: CpuAddrCostTable = CpuAddrCostTable {
    addr_scale_costs: ScaleAddrModeCost {
        hi: 0,
        si: 0,
        di: 0,
        ti: 0,
    },
    pre_modify: 0,
    post_modify: 0,
    post_modify_ld3_st3: 0,
    post_modify_ld4_st4: 0,
    register_offset: 0,
    register_sextend: 0,
    register_zextend: 0,
    imm_offset: 0,
};

static NEOVERSE_ADDRCOST_TABLE: CpuAddrCostTable = CpuAddrCostTable {
    addr_scale_costs: ScaleAddrModeCost {
        hi: 1,
        si: 0,
        di: 0,
        ti: 1,
    },
    pre_modify: 0,
    post_modify: 0,
    post_modify_ld3_st3: 0,
    post_modify_ld4_st4: 0,
    register_offset: 0,
    register_sextend: 0,
    register_zextend: 0,
    imm_offset: 0,
};

static GENERIC_REGMOVE_COST: CpuRegmoveCost = CpuRegmoveCost {
    gp2gp: 1,
    gp2fp: 5,
    fp2gp: 5,
    fp2fp: 2,
};

static NEOVERSE_V2_REGMOVE_COST: CpuRegmoveCost = CpuRegmoveCost {
    gp2gp: 1,
    gp2fp: 3,
    fp2gp: 2,
    fp2fp: 2,
};

// =============================================================================
// Vector costs
// =============================================================================

static GENERIC_ADVSIMD_VECTOR_COST: SimdVecCost = SimdVecCost {
    int_stmt_cost: 1,
    fp_stmt_cost: 1,
    ld2_st2_permute_cost: 0,
    ld3_st3_permute_cost: 0,
    ld4_st4_permute_cost: 0,
    permute_cost: 2,
    reduc_i8_cost: 2,
    reduc_i16_cost: 2,
    reduc_i32_cost: 2,
    reduc_i64_cost: 2,
    reduc_f16_cost: 2,
    reduc_f32_cost: 2,
    reduc_f64_cost: 2,
    store_elt_extra_cost: 2,
    vec_to_scalar_cost: 2,
    scalar_to_vec_cost: 1,
    align_load_cost: 1,
    unalign_load_cost: 1,
    unalign_store_cost: 1,
    store_cost: 1,
};

static GENERIC_SVE_VECTOR_COST: SveVecCost = SveVecCost {
    base: SimdVecCost {
        int_stmt_cost: 1,
        fp_stmt_cost: 1,
        ld2_st2_permute_cost: 0,
        ld3_st3_permute_cost: 0,
        ld4_st4_permute_cost: 0,
        permute_cost: 2,
        reduc_i8_cost: 2,
        reduc_i16_cost: 2,
        reduc_i32_cost: 2,
        reduc_i64_cost: 2,
        reduc_f16_cost: 2,
        reduc_f32_cost: 2,
        reduc_f64_cost: 2,
        store_elt_extra_cost: 2,
        vec_to_scalar_cost: 2,
        scalar_to_vec_cost: 1,
        align_load_cost: 1,
        unalign_load_cost: 1,
        unalign_store_cost: 1,
        store_cost: 1,
    },
    clast_cost: 2,
    fadda_f16_cost: 2,
    fadda_f32_cost: 2,
    fadda_f64_cost: 2,
    gather_load_x32_cost: 4,
    gather_load_x64_cost: 2,
    gather_load_x32_init_cost: 0,
    gather_load_x64_init_cost: 0,
    scatter_store_elt_cost: 1,
};

static GENERIC_VECTOR_COST: CpuVectorCost = CpuVectorCost {
    scalar_int_stmt_cost: 1,
    scalar_fp_stmt_cost: 1,
    scalar_load_cost: 1,
    scalar_store_cost: 1,
    cond_taken_branch_cost: 3,
    cond_not_taken_branch_cost: 1,
    advsimd: Some(Cow::Borrowed(&GENERIC_ADVSIMD_VECTOR_COST)),
    sve: Some(Cow::Borrowed(&GENERIC_SVE_VECTOR_COST)),
    issue_info: None,
};

static NEOVERSE_V2_ADVSIMD_VECTOR_COST: SimdVecCost = SimdVecCost {
    int_stmt_cost: 2,
    fp_stmt_cost: 2,
    ld2_st2_permute_cost: 2,
    ld3_st3_permute_cost: 2,
    ld4_st4_permute_cost: 3,
    permute_cost: 2,
    reduc_i8_cost: 4,
    reduc_i16_cost: 3,
    reduc_i32_cost: 2,
    reduc_i64_cost: 2,
    reduc_f16_cost: 6,
    reduc_f32_cost: 3,
    reduc_f64_cost: 2,
    store_elt_extra_cost: 2,
    vec_to_scalar_cost: 2,
    scalar_to_vec_cost: 2,
    align_load_cost: 4,
    unalign_load_cost: 4,
    unalign_store_cost: 1,
    store_cost: 1,
};

static NEOVERSE_V2_SVE_VECTOR_COST: SveVecCost = SveVecCost {
    base: SimdVecCost {
        int_stmt_cost: 2,
        fp_stmt_cost: 2,
        ld2_st2_permute_cost: 3,
        ld3_st3_permute_cost: 3,
        ld4_st4_permute_cost: 4,
        permute_cost: 2,
        reduc_i8_cost: 9,
        reduc_i16_cost: 8,
        reduc_i32_cost: 4,
        reduc_i64_cost: 2,
        reduc_f16_cost: 8,
        reduc_f32_cost: 4,
        reduc_f64_cost: 2,
        store_elt_extra_cost: 2,
        vec_to_scalar_cost: 2,
        scalar_to_vec_cost: 2,
        align_load_cost: 4,
        unalign_load_cost: 4,
        unalign_store_cost: 1,
        store_cost: 1,
    },
    clast_cost: 3,
    fadda_f16_cost: 10,
    fadda_f32_cost: 6,
    fadda_f64_cost: 4,
    gather_load_x32_cost: 9,
    gather_load_x64_cost: 2,
    gather_load_x32_init_cost: 3,
    gather_load_x64_init_cost: 1,
    scatter_store_elt_cost: 3,
};

static NEOVERSE_V2_SCALAR_ISSUE_INFO: BaseVecIssueInfo = BaseVecIssueInfo {
    loads_stores_per_cycle: 3,
    stores_per_cycle: 2,
    general_ops_per_cycle: 6,
    fp_simd_load_general_ops: 0,
    fp_simd_store_general_ops: 1,
};

static NEOVERSE_V2_ADVSIMD_ISSUE_INFO: SimdVecIssueInfo = SimdVecIssueInfo {
    base: BaseVecIssueInfo {
        loads_stores_per_cycle: 3,
        stores_per_cycle: 2,
        general_ops_per_cycle: 4,
        fp_simd_load_general_ops: 0,
        fp_simd_store_general_ops: 1,
    },
    ld2_st2_general_ops: 2,
    ld3_st3_general_ops: 2,
    ld4_st4_general_ops: 3,
};

static NEOVERSE_V2_SVE_ISSUE_INFO: SveVecIssueInfo = SveVecIssueInfo {
    base: SimdVecIssueInfo {
        base: BaseVecIssueInfo {
            loads_stores_per_cycle: 3,
            stores_per_cycle: 2,
            general_ops_per_cycle: 4,
            fp_simd_load_general_ops: 0,
            fp_simd_store_general_ops: 1,
        },
        ld2_st2_general_ops: 2,
        ld3_st3_general_ops: 3,
        ld4_st4_general_ops: 3,
    },
    pred_ops_per_cycle: 2,
    while_pred_ops: 2,
    int_cmp_pred_ops: 2,
    fp_cmp_pred_ops: 1,
    gather_scatter_pair_general_ops: 2,
    gather_scatter_pair_pred_ops: 1,
};

static NEOVERSE_V2_VEC_ISSUE_INFO: VecIssueInfo = VecIssueInfo {
    scalar: Some(Cow::Borrowed(&NEOVERSE_V2_SCALAR_ISSUE_INFO)),
    advsimd: Some(Cow::Borrowed(&NEOVERSE_V2_ADVSIMD_ISSUE_INFO)),
    sve: Some(Cow::Borrowed(&NEOVERSE_V2_SVE_ISSUE_INFO)),
};

static NEOVERSE_V2_VECTOR_COST: CpuVectorCost = CpuVectorCost {
    scalar_int_stmt_cost: 2,
    scalar_fp_stmt_cost: 2,
    scalar_load_cost: 4,
    scalar_store_cost: 1,
    cond_taken_branch_cost: 1,
    cond_not_taken_branch_cost: 1,
    advsimd: Some(Cow::Borrowed(&NEOVERSE_V2_ADVSIMD_VECTOR_COST)),
    sve: Some(Cow::Borrowed(&NEOVERSE_V2_SVE_VECTOR_COST)),
    issue_info: Some(Cow::Borrowed(&NEOVERSE_V2_VEC_ISSUE_INFO)),
};

// =============================================================================
// Miscellaneous tables
// =============================================================================

static GENERIC_BRANCH_COST: CpuBranchCost = CpuBranchCost {
    predictable: 1,
    unpredictable: 3,
};

static GENERIC_APPROX_MODES: CpuApproxModes = CpuApproxModes {
    division: 0,
    sqrt: 0,
    recip_sqrt: 0,
};

static GENERIC_PREFETCH_TUNE: CpuPrefetchTune = CpuPrefetchTune {
    num_slots: 0,
    l1_cache_size: -1,
    l1_cache_line_size: -1,
    l2_cache_size: -1,
    prefetch_dynamic_strides: true,
    minimum_stride: -1,
    default_opt_level: -1,
};

static NEOVERSE_V2_DISPATCH: DispatchConstraints = DispatchConstraints {
    dispatch_width: 16,
    constraints: &[
        DispatchConstraint {
            name: "branch",
            max_slots: 4,
        },
        DispatchConstraint {
            name: "integer",
            max_slots: 8,
        },
        DispatchConstraint {
            name: "multi-cycle integer",
            max_slots: 2,
        },
        DispatchConstraint {
            name: "load/store",
            max_slots: 6,
        },
        DispatchConstraint {
            name: "fp/simd",
            max_slots: 4,
        },
    ],
};

// =============================================================================
// Profiles
// =============================================================================

pub fn generic() -> TuneParams {
    TuneParams {
        insn_extra_cost: Some(Cow::Borrowed(&GENERIC_EXTRA_COSTS)),
        addr_cost: Some(Cow::Borrowed(&GENERIC_ADDRCOST_TABLE)),
        regmove_cost: Some(Cow::Borrowed(&GENERIC_REGMOVE_COST)),
        vec_costs: Some(Cow::Borrowed(&GENERIC_VECTOR_COST)),
        branch_costs: Some(Cow::Borrowed(&GENERIC_BRANCH_COST)),
        approx_modes: Some(Cow::Borrowed(&GENERIC_APPROX_MODES)),
        sve_width: 0,
        memmov_cost: CpuMemmovCost {
            load_int: 4,
            store_int: 4,
            load_fp: 4,
            store_fp: 4,
            load_pred: 4,
            store_pred: 4,
        },
        issue_rate: 2,
        fusible_ops: fusion::AES_AESMC | fusion::CMP_BRANCH,
        function_align: Some("16:12".to_string()),
        jump_align: Some("4".to_string()),
        loop_align: Some("8".to_string()),
        int_reassoc_width: 2,
        fp_reassoc_width: 4,
        fma_reassoc_width: 1,
        vec_reassoc_width: 1,
        min_div_recip_mul_sf: 2,
        min_div_recip_mul_df: 2,
        max_case_values: 0,
        autoprefetcher_model: AutoprefetchModel::Weak,
        extra_tuning_flags: extra_tuning::CHEAP_SHIFT_EXTEND,
        prefetch: Some(Cow::Borrowed(&GENERIC_PREFETCH_TUNE)),
        ldp_policy_model: LdpStpPolicy::Always,
        stp_policy_model: LdpStpPolicy::Always,
        dispatch_constraints: None,
    }
}

pub fn neoverse_v2() -> TuneParams {
    TuneParams {
        insn_extra_cost: Some(Cow::Borrowed(&GENERIC_EXTRA_COSTS)),
        addr_cost: Some(Cow::Borrowed(&NEOVERSE_ADDRCOST_TABLE)),
        regmove_cost: Some(Cow::Borrowed(&NEOVERSE_V2_REGMOVE_COST)),
        vec_costs: Some(Cow::Borrowed(&NEOVERSE_V2_VECTOR_COST)),
        branch_costs: Some(Cow::Borrowed(&GENERIC_BRANCH_COST)),
        approx_modes: Some(Cow::Borrowed(&GENERIC_APPROX_MODES)),
        sve_width: 128,
        memmov_cost: CpuMemmovCost {
            load_int: 4,
            store_int: 1,
            load_fp: 6,
            store_fp: 2,
            load_pred: 6,
            store_pred: 1,
        },
        issue_rate: 5,
        fusible_ops: fusion::AES_AESMC | fusion::CMP_BRANCH | fusion::ALU_BRANCH,
        function_align: Some("32:16".to_string()),
        jump_align: Some("4".to_string()),
        loop_align: Some("32:16".to_string()),
        int_reassoc_width: 3,
        fp_reassoc_width: 6,
        fma_reassoc_width: 4,
        vec_reassoc_width: 3,
        min_div_recip_mul_sf: 2,
        min_div_recip_mul_df: 2,
        max_case_values: 0,
        autoprefetcher_model: AutoprefetchModel::Weak,
        extra_tuning_flags: extra_tuning::CSE_SVE_VL_CONSTANTS
            | extra_tuning::MATCHED_VECTOR_THROUGHPUT
            | extra_tuning::AVOID_PRED_RMW
            | extra_tuning::DISPATCH_SCHED,
        prefetch: Some(Cow::Borrowed(&GENERIC_PREFETCH_TUNE)),
        ldp_policy_model: LdpStpPolicy::Always,
        stp_policy_model: LdpStpPolicy::Always,
        dispatch_constraints: Some(&NEOVERSE_V2_DISPATCH),
    }
}
