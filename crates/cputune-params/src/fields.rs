//! Field tables for every bindable record.

use crate::bind::bind_fields;
use crate::enums::{AutoprefetchModel, LdpStpPolicy};
use crate::params::TuneParams;
use crate::tables::*;

bind_fields!(AluCostTable {
    "arith" => int arith,
    "logical" => int logical,
    "shift" => int shift,
    "shift_reg" => int shift_reg,
    "arith_shift" => int arith_shift,
    "arith_shift_reg" => int arith_shift_reg,
    "log_shift" => int log_shift,
    "log_shift_reg" => int log_shift_reg,
    "extend" => int extend,
    "extend_arith" => int extend_arith,
    "bfi" => int bfi,
    "bfx" => int bfx,
    "clz" => int clz,
    "rev" => int rev,
    "non_exec" => int non_exec,
    "non_exec_costs_exec" => bool non_exec_costs_exec,
});

bind_fields!(MultCostTable {
    "simple" => int simple,
    "flag_setting" => int flag_setting,
    "extend" => int extend,
    "add" => int add,
    "extend_add" => int extend_add,
    "idiv" => int idiv,
});

bind_fields!(MemCostTable {
    "load" => int load,
    "load_sign_extend" => int load_sign_extend,
    "ldrd" => int ldrd,
    "ldm_1st" => int ldm_1st,
    "ldm_regs_per_insn_1st" => int ldm_regs_per_insn_1st,
    "ldm_regs_per_insn_subsequent" => int ldm_regs_per_insn_subsequent,
    "loadf" => int loadf,
    "loadd" => int loadd,
    "load_unaligned" => int load_unaligned,
    "store" => int store,
    "strd" => int strd,
    "stm_1st" => int stm_1st,
    "stm_regs_per_insn_1st" => int stm_regs_per_insn_1st,
    "stm_regs_per_insn_subsequent" => int stm_regs_per_insn_subsequent,
    "storef" => int storef,
    "stored" => int stored,
    "store_unaligned" => int store_unaligned,
    "loadv" => int loadv,
    "storev" => int storev,
});

bind_fields!(FpCostTable {
    "div" => int div,
    "mult" => int mult,
    "mult_addsub" => int mult_addsub,
    "fma" => int fma,
    "addsub" => int addsub,
    "fpconst" => int fpconst,
    "neg" => int neg,
    "compare" => int compare,
    "widen" => int widen,
    "narrow" => int narrow,
    "toint" => int toint,
    "fromint" => int fromint,
    "roundint" => int roundint,
});

bind_fields!(VectorCostTable {
    "alu" => int alu,
    "mult" => int mult,
    "movi" => int movi,
    "dup" => int dup,
    "extract" => int extract,
});

bind_fields!(CpuCostTable {
    "alu" => object alu: AluCostTable,
    "mult" => array mult: MultCostTable,
    "ldst" => object ldst: MemCostTable,
    "fp" => array fp: FpCostTable,
    "vect" => object vect: VectorCostTable,
});

bind_fields!(ScaleAddrModeCost {
    "hi" => int hi,
    "si" => int si,
    "di" => int di,
    "ti" => int ti,
});

bind_fields!(CpuAddrCostTable {
    "addr_scale_costs" => object addr_scale_costs: ScaleAddrModeCost,
    "pre_modify" => int pre_modify,
    "post_modify" => int post_modify,
    "post_modify_ld3_st3" => int post_modify_ld3_st3,
    "post_modify_ld4_st4" => int post_modify_ld4_st4,
    "register_offset" => int register_offset,
    "register_sextend" => int register_sextend,
    "register_zextend" => int register_zextend,
    "imm_offset" => int imm_offset,
});

bind_fields!(CpuRegmoveCost {
    "GP2GP" => int gp2gp,
    "GP2FP" => int gp2fp,
    "FP2GP" => int fp2gp,
    "FP2FP" => int fp2fp,
});

bind_fields!(SimdVecCost {
    "int_stmt_cost" => int int_stmt_cost,
    "fp_stmt_cost" => int fp_stmt_cost,
    "ld2_st2_permute_cost" => int ld2_st2_permute_cost,
    "ld3_st3_permute_cost" => int ld3_st3_permute_cost,
    "ld4_st4_permute_cost" => int ld4_st4_permute_cost,
    "permute_cost" => int permute_cost,
    "reduc_i8_cost" => int reduc_i8_cost,
    "reduc_i16_cost" => int reduc_i16_cost,
    "reduc_i32_cost" => int reduc_i32_cost,
    "reduc_i64_cost" => int reduc_i64_cost,
    "reduc_f16_cost" => int reduc_f16_cost,
    "reduc_f32_cost" => int reduc_f32_cost,
    "reduc_f64_cost" => int reduc_f64_cost,
    "store_elt_extra_cost" => int store_elt_extra_cost,
    "vec_to_scalar_cost" => int vec_to_scalar_cost,
    "scalar_to_vec_cost" => int scalar_to_vec_cost,
    "align_load_cost" => int align_load_cost,
    "unalign_load_cost" => int unalign_load_cost,
    "unalign_store_cost" => int unalign_store_cost,
    "store_cost" => int store_cost,
});

bind_fields!(SveVecCost {
    _ => flatten base: SimdVecCost,
    "clast_cost" => int clast_cost,
    "fadda_f16_cost" => int fadda_f16_cost,
    "fadda_f32_cost" => int fadda_f32_cost,
    "fadda_f64_cost" => int fadda_f64_cost,
    "gather_load_x32_cost" => int gather_load_x32_cost,
    "gather_load_x64_cost" => int gather_load_x64_cost,
    "gather_load_x32_init_cost" => int gather_load_x32_init_cost,
    "gather_load_x64_init_cost" => int gather_load_x64_init_cost,
    "scatter_store_elt_cost" => int scatter_store_elt_cost,
});

bind_fields!(BaseVecIssueInfo {
    "loads_stores_per_cycle" => uint loads_stores_per_cycle,
    "stores_per_cycle" => uint stores_per_cycle,
    "general_ops_per_cycle" => uint general_ops_per_cycle,
    "fp_simd_load_general_ops" => uint fp_simd_load_general_ops,
    "fp_simd_store_general_ops" => uint fp_simd_store_general_ops,
});

bind_fields!(SimdVecIssueInfo {
    _ => flatten base: BaseVecIssueInfo,
    "ld2_st2_general_ops" => uint ld2_st2_general_ops,
    "ld3_st3_general_ops" => uint ld3_st3_general_ops,
    "ld4_st4_general_ops" => uint ld4_st4_general_ops,
});

bind_fields!(SveVecIssueInfo {
    _ => flatten base: SimdVecIssueInfo,
    "pred_ops_per_cycle" => uint pred_ops_per_cycle,
    "while_pred_ops" => uint while_pred_ops,
    "int_cmp_pred_ops" => uint int_cmp_pred_ops,
    "fp_cmp_pred_ops" => uint fp_cmp_pred_ops,
    "gather_scatter_pair_general_ops" => uint gather_scatter_pair_general_ops,
    "gather_scatter_pair_pred_ops" => uint gather_scatter_pair_pred_ops,
});

bind_fields!(VecIssueInfo {
    "scalar" => shared scalar: BaseVecIssueInfo,
    "advsimd" => shared advsimd: SimdVecIssueInfo,
    "sve" => shared sve: SveVecIssueInfo,
});

bind_fields!(CpuVectorCost {
    "scalar_int_stmt_cost" => int scalar_int_stmt_cost,
    "scalar_fp_stmt_cost" => int scalar_fp_stmt_cost,
    "scalar_load_cost" => int scalar_load_cost,
    "scalar_store_cost" => int scalar_store_cost,
    "cond_taken_branch_cost" => int cond_taken_branch_cost,
    "cond_not_taken_branch_cost" => int cond_not_taken_branch_cost,
    "advsimd" => shared advsimd: SimdVecCost,
    "sve" => shared sve: SveVecCost,
    "issue_info" => shared issue_info: VecIssueInfo,
});

bind_fields!(CpuBranchCost {
    "predictable" => int predictable,
    "unpredictable" => int unpredictable,
});

bind_fields!(CpuApproxModes {
    "division" => uint division,
    "sqrt" => uint sqrt,
    "recip_sqrt" => uint recip_sqrt,
});

bind_fields!(CpuPrefetchTune {
    "num_slots" => int num_slots,
    "l1_cache_size" => int l1_cache_size,
    "l1_cache_line_size" => int l1_cache_line_size,
    "l2_cache_size" => int l2_cache_size,
    "prefetch_dynamic_strides" => bool prefetch_dynamic_strides,
    "minimum_stride" => int minimum_stride,
    "default_opt_level" => int default_opt_level,
});

bind_fields!(CpuMemmovCost {
    "load_int" => int load_int,
    "store_int" => int store_int,
    "load_fp" => int load_fp,
    "store_fp" => int store_fp,
    "load_pred" => int load_pred,
    "store_pred" => int store_pred,
});

bind_fields!(TuneParams {
    "insn_extra_cost" => shared insn_extra_cost: CpuCostTable,
    "addr_cost" => shared addr_cost: CpuAddrCostTable,
    "regmove_cost" => shared regmove_cost: CpuRegmoveCost,
    "vec_costs" => shared vec_costs: CpuVectorCost,
    "branch_costs" => shared branch_costs: CpuBranchCost,
    "approx_modes" => shared approx_modes: CpuApproxModes,
    "sve_width" => uint sve_width,
    "memmov_cost" => object memmov_cost: CpuMemmovCost,
    "issue_rate" => int issue_rate,
    "fusible_ops" => uint fusible_ops,
    "function_align" => string function_align,
    "jump_align" => string jump_align,
    "loop_align" => string loop_align,
    "int_reassoc_width" => int int_reassoc_width,
    "fp_reassoc_width" => int fp_reassoc_width,
    "fma_reassoc_width" => int fma_reassoc_width,
    "vec_reassoc_width" => int vec_reassoc_width,
    "min_div_recip_mul_sf" => int min_div_recip_mul_sf,
    "min_div_recip_mul_df" => int min_div_recip_mul_df,
    "max_case_values" => uint max_case_values,
    "autoprefetcher_model" => enum autoprefetcher_model: AutoprefetchModel,
    "extra_tuning_flags" => uint extra_tuning_flags,
    "prefetch" => shared prefetch: CpuPrefetchTune,
    "ldp_policy_model" => enum ldp_policy_model: LdpStpPolicy,
    "stp_policy_model" => enum stp_policy_model: LdpStpPolicy,
});
