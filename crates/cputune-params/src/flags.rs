//! Bit flags stored in `extra_tuning_flags` and `fusible_ops`.

pub mod extra_tuning {
    pub const RENAME_FMA_REGS: u32 = 1 << 0;
    pub const CHEAP_SHIFT_EXTEND: u32 = 1 << 1;
    pub const CSE_SVE_VL_CONSTANTS: u32 = 1 << 2;
    pub const MATCHED_VECTOR_THROUGHPUT: u32 = 1 << 3;
    pub const AVOID_CROSS_LOOP_FMA: u32 = 1 << 4;
    pub const FULLY_PIPELINED_FMA: u32 = 1 << 5;
    pub const AVOID_PRED_RMW: u32 = 1 << 6;
    pub const AVOID_LDAPUR: u32 = 1 << 7;
    /// Requires `dispatch_constraints` on the record.
    pub const DISPATCH_SCHED: u32 = 1 << 8;

    pub const ALL: &[(&str, u32)] = &[
        ("RENAME_FMA_REGS", RENAME_FMA_REGS),
        ("CHEAP_SHIFT_EXTEND", CHEAP_SHIFT_EXTEND),
        ("CSE_SVE_VL_CONSTANTS", CSE_SVE_VL_CONSTANTS),
        ("MATCHED_VECTOR_THROUGHPUT", MATCHED_VECTOR_THROUGHPUT),
        ("AVOID_CROSS_LOOP_FMA", AVOID_CROSS_LOOP_FMA),
        ("FULLY_PIPELINED_FMA", FULLY_PIPELINED_FMA),
        ("AVOID_PRED_RMW", AVOID_PRED_RMW),
        ("AVOID_LDAPUR", AVOID_LDAPUR),
        ("DISPATCH_SCHED", DISPATCH_SCHED),
    ];
}

pub mod fusion {
    pub const MOV_MOVK: u32 = 1 << 0;
    pub const ADRP_ADD: u32 = 1 << 1;
    pub const MOVK_MOVK: u32 = 1 << 2;
    pub const ADRP_LDR: u32 = 1 << 3;
    pub const CMP_BRANCH: u32 = 1 << 4;
    pub const AES_AESMC: u32 = 1 << 5;
    pub const ALU_BRANCH: u32 = 1 << 6;
    pub const ALU_CBZ: u32 = 1 << 7;
    pub const ADDSUB_2REG_CONST1: u32 = 1 << 8;

    pub const ALL: &[(&str, u32)] = &[
        ("MOV_MOVK", MOV_MOVK),
        ("ADRP_ADD", ADRP_ADD),
        ("MOVK_MOVK", MOVK_MOVK),
        ("ADRP_LDR", ADRP_LDR),
        ("CMP_BRANCH", CMP_BRANCH),
        ("AES_AESMC", AES_AESMC),
        ("ALU_BRANCH", ALU_BRANCH),
        ("ALU_CBZ", ALU_CBZ),
        ("ADDSUB_2REG_CONST1", ADDSUB_2REG_CONST1),
    ];
}

/// Names of the set bits of `flags` according to `table`, plus any unnamed
/// remainder as a hex literal.
pub fn describe_flags(flags: u32, table: &[(&str, u32)]) -> Vec<String> {
    let mut remaining = flags;
    let mut names = Vec::new();
    for (name, bit) in table {
        if flags & bit != 0 {
            names.push((*name).to_string());
            remaining &= !bit;
        }
    }
    if remaining != 0 {
        names.push(format!("{remaining:#x}"));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_flags() {
        let flags = extra_tuning::DISPATCH_SCHED | extra_tuning::CHEAP_SHIFT_EXTEND | (1 << 20);
        assert_eq!(
            describe_flags(flags, extra_tuning::ALL),
            vec!["CHEAP_SHIFT_EXTEND", "DISPATCH_SCHED", "0x100000"]
        );
        assert!(describe_flags(0, extra_tuning::ALL).is_empty());
    }
}
