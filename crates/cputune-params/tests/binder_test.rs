use std::borrow::Cow;

use cputune_json::{JsonDiagnostics, Node, ParseOptions, parse};
use cputune_params::flags::extra_tuning;
use cputune_params::profiles::{generic, neoverse_v2};
use cputune_params::{AutoprefetchModel, Binder, LdpStpPolicy, MismatchLevel, TuneParams};

#[derive(Default)]
struct Collected(Vec<String>);

impl JsonDiagnostics for Collected {
    fn error(&mut self, node: &Node, message: String) {
        self.0.push(format!("error {}: {message}", node.pointer));
    }

    fn warning(&mut self, node: &Node, message: String) -> bool {
        self.0.push(format!("warning {}: {message}", node.pointer));
        true
    }

    fn note(&mut self, node: &Node, message: String) {
        self.0.push(format!("note {}: {message}", node.pointer));
    }

    fn global_error(&mut self, message: String) {
        self.0.push(format!("error: {message}"));
    }

    fn global_warning(&mut self, message: String) -> bool {
        self.0.push(format!("warning: {message}"));
        true
    }

    fn global_note(&mut self, message: String) {
        self.0.push(format!("note: {message}"));
    }
}

fn apply(tune_params: &str, params: &mut TuneParams) -> Vec<String> {
    let root = parse(tune_params, &ParseOptions::tuning_file()).unwrap();
    let mut collected = Collected::default();
    Binder::new(&mut collected, MismatchLevel::Warning).bind(root.as_object().unwrap(), params);
    collected.0
}

#[test]
fn test_scalar_overrides() {
    let mut params = generic();
    let diagnostics = apply(r#"{"sve_width": 256, "issue_rate": 4}"#, &mut params);
    assert!(diagnostics.is_empty());
    assert_eq!(params.sve_width, 256);
    assert_eq!(params.issue_rate, 4);

    let mut expected = generic();
    expected.sve_width = 256;
    expected.issue_rate = 4;
    assert_eq!(params, expected);
}

#[test]
fn test_nested_override_keeps_siblings() {
    let mut params = generic();
    apply(
        r#"{"insn_extra_cost": {"alu": {"arith": 7}, "fp": [{}, {"div": 99}]}}"#,
        &mut params,
    );
    let costs = params.insn_extra_cost.as_deref().unwrap();
    assert_eq!(costs.alu.arith, 7);
    assert_eq!(costs.fp[1].div, 99);

    let base = generic();
    let base_costs = base.insn_extra_cost.as_deref().unwrap();
    assert_eq!(costs.alu.shift_reg, base_costs.alu.shift_reg);
    assert_eq!(costs.fp[0], base_costs.fp[0]);
    assert_eq!(costs.mult, base_costs.mult);
    assert!(matches!(params.insn_extra_cost, Some(Cow::Owned(_))));
    assert!(matches!(params.addr_cost, Some(Cow::Borrowed(_))));
}

#[test]
fn test_issue_info_over_missing_base_table() {
    let mut params = generic();
    let diagnostics = apply(
        r#"{"vec_costs": {"issue_info": {
            "scalar": {"loads_stores_per_cycle": 4, "general_ops_per_cycle": 8},
            "advsimd": {"ld2_st2_general_ops": 2, "ld4_st4_general_ops": 3},
            "sve": {"pred_ops_per_cycle": 2, "while_pred_ops": 1,
                    "gather_scatter_pair_general_ops": 1}}}}"#,
        &mut params,
    );
    assert!(!diagnostics.is_empty());
    assert!(
        diagnostics
            .iter()
            .all(|d| d.starts_with("warning: JSON tuning overrides an unspecified structure"))
    );

    let vec_costs = params.vec_costs.as_deref().unwrap();
    let issue = vec_costs.issue_info.as_deref().unwrap();
    let scalar = issue.scalar.as_deref().unwrap();
    assert_eq!(scalar.loads_stores_per_cycle, 4);
    assert_eq!(scalar.general_ops_per_cycle, 8);
    assert_eq!(scalar.stores_per_cycle, 0);
    let advsimd = issue.advsimd.as_deref().unwrap();
    assert_eq!(advsimd.ld2_st2_general_ops, 2);
    assert_eq!(advsimd.ld4_st4_general_ops, 3);
    let sve = issue.sve.as_deref().unwrap();
    assert_eq!(sve.pred_ops_per_cycle, 2);
    assert_eq!(sve.while_pred_ops, 1);
    assert_eq!(sve.gather_scatter_pair_general_ops, 1);

    assert_eq!(
        vec_costs.advsimd,
        generic().vec_costs.as_deref().unwrap().advsimd
    );
}

#[test]
fn test_flattened_base_fields_bind_from_same_object() {
    let mut params = neoverse_v2();
    apply(
        r#"{"vec_costs": {"sve": {"int_stmt_cost": 9, "clast_cost": 8}}}"#,
        &mut params,
    );
    let sve = params
        .vec_costs
        .as_deref()
        .and_then(|costs| costs.sve.as_deref())
        .unwrap();
    assert_eq!(sve.base.int_stmt_cost, 9);
    assert_eq!(sve.clast_cost, 8);
    assert_eq!(sve.base.fp_stmt_cost, 2);
}

#[test]
fn test_enums() {
    let mut params = generic();
    let diagnostics = apply(
        r#"{"autoprefetcher_model": "null", "ldp_policy_model": "null",
            "stp_policy_model": "AARCH64_LDP_STP_POLICY_ALIGNED"}"#,
        &mut params,
    );
    assert_eq!(
        diagnostics,
        vec![
            "warning /autoprefetcher_model: autoprefetcher_model not recognized, defaulting to 'AUTOPREFETCHER_OFF'",
            "warning /ldp_policy_model: ldp_policy_model not recognized, defaulting to 'AARCH64_LDP_STP_POLICY_DEFAULT'",
        ]
    );
    assert_eq!(params.autoprefetcher_model, AutoprefetchModel::Off);
    assert_eq!(params.ldp_policy_model, LdpStpPolicy::Default);
    assert_eq!(params.stp_policy_model, LdpStpPolicy::Aligned);
}

#[test]
fn test_strings() {
    let mut params = generic();
    apply(r#"{"function_align": "64:32", "loop_align": "16"}"#, &mut params);
    assert_eq!(params.function_align.as_deref(), Some("64:32"));
    assert_eq!(params.loop_align.as_deref(), Some("16"));
    assert_eq!(params.jump_align.as_deref(), Some("4"));
}

#[test]
fn test_dispatch_flag_survives_binding() {
    let mut params = generic();
    apply(
        &format!(r#"{{"extra_tuning_flags": {}}}"#, extra_tuning::DISPATCH_SCHED),
        &mut params,
    );
    assert_eq!(params.extra_tuning_flags, extra_tuning::DISPATCH_SCHED);
    assert!(params.disable_unsupported_dispatch());
    assert_eq!(params.extra_tuning_flags, 0);
}
