use std::borrow::Cow;

use crate::enums::{AutoprefetchModel, LdpStpPolicy};
use crate::flags::extra_tuning;
use crate::tables::{
    CpuAddrCostTable, CpuApproxModes, CpuBranchCost, CpuCostTable, CpuMemmovCost,
    CpuPrefetchTune, CpuRegmoveCost, CpuVectorCost, DispatchConstraints,
};

/// Machine tuning parameters.
///
/// Shared tables are `Cow`s: a base profile lends `Borrowed` statics, and a
/// tuning file that overrides a table replaces it with an `Owned` copy.
/// `None` marks a table the base profile does not provide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TuneParams {
    pub insn_extra_cost: Option<Cow<'static, CpuCostTable>>,
    pub addr_cost: Option<Cow<'static, CpuAddrCostTable>>,
    pub regmove_cost: Option<Cow<'static, CpuRegmoveCost>>,
    pub vec_costs: Option<Cow<'static, CpuVectorCost>>,
    pub branch_costs: Option<Cow<'static, CpuBranchCost>>,
    pub approx_modes: Option<Cow<'static, CpuApproxModes>>,
    /// SVE vector length in bits, or 0 for vector-length agnostic.
    pub sve_width: u32,
    pub memmov_cost: CpuMemmovCost,
    pub issue_rate: i32,
    pub fusible_ops: u32,
    pub function_align: Option<String>,
    pub jump_align: Option<String>,
    pub loop_align: Option<String>,
    pub int_reassoc_width: i32,
    pub fp_reassoc_width: i32,
    pub fma_reassoc_width: i32,
    pub vec_reassoc_width: i32,
    pub min_div_recip_mul_sf: i32,
    pub min_div_recip_mul_df: i32,
    pub max_case_values: u32,
    pub autoprefetcher_model: AutoprefetchModel,
    pub extra_tuning_flags: u32,
    pub prefetch: Option<Cow<'static, CpuPrefetchTune>>,
    pub ldp_policy_model: LdpStpPolicy,
    pub stp_policy_model: LdpStpPolicy,
    /// Not representable in tuning files; only base profiles set it.
    pub dispatch_constraints: Option<&'static DispatchConstraints>,
}

impl TuneParams {
    pub fn has_extra_tuning_flag(&self, flag: u32) -> bool {
        self.extra_tuning_flags & flag != 0
    }

    /// Clear `DISPATCH_SCHED` when no dispatch model backs it.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn disable_unsupported_dispatch(&mut self) -> bool {
        if self.has_extra_tuning_flag(extra_tuning::DISPATCH_SCHED)
            && self.dispatch_constraints.is_none()
        {
            self.extra_tuning_flags &= !extra_tuning::DISPATCH_SCHED;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static MODEL: DispatchConstraints = DispatchConstraints {
        dispatch_width: 4,
        constraints: &[],
    };

    #[test]
    fn test_dispatch_fixup() {
        let mut params = TuneParams {
            extra_tuning_flags: extra_tuning::DISPATCH_SCHED | extra_tuning::AVOID_LDAPUR,
            ..Default::default()
        };
        assert!(params.disable_unsupported_dispatch());
        assert_eq!(params.extra_tuning_flags, extra_tuning::AVOID_LDAPUR);
        assert!(!params.disable_unsupported_dispatch());
    }

    #[test]
    fn test_dispatch_fixup_keeps_backed_flag() {
        let mut params = TuneParams {
            extra_tuning_flags: extra_tuning::DISPATCH_SCHED,
            dispatch_constraints: Some(&MODEL),
            ..Default::default()
        };
        assert!(!params.disable_unsupported_dispatch());
        assert!(params.has_extra_tuning_flag(extra_tuning::DISPATCH_SCHED));
    }
}
