//! Closed enumerations used for validation-by-membership.
//!
//! Every check against these lists is an exact string comparison.

use super::ParameterOption;

/// Accepted spellings of boolean literals.
pub const BOOLEAN_LITERALS: &[&str] = &["TRUE", "True", "true", "FALSE", "False", "false"];

pub const BOOLEAN_OPTIONS: &[ParameterOption] = &[
    ParameterOption::new("TRUE", "Enable."),
    ParameterOption::new("True", "Enable."),
    ParameterOption::new("true", "Enable."),
    ParameterOption::new("FALSE", "Disable."),
    ParameterOption::new("False", "Disable."),
    ParameterOption::new("false", "Disable."),
];

/// Queue systems understood by `QUEUE_SYSTEM` and `QUEUE_OPTION`.
pub const QUEUE_SYSTEMS: &[&str] = &["LSF", "LOCAL", "TORQUE", "SLURM"];

pub const QUEUE_SYSTEM_OPTIONS: &[ParameterOption] = &[
    ParameterOption::new("LSF", "Submit realizations to an IBM Spectrum LSF cluster."),
    ParameterOption::new("LOCAL", "Run realizations as processes on the local machine."),
    ParameterOption::new("TORQUE", "Submit realizations through a Torque/PBS queue."),
    ParameterOption::new("SLURM", "Submit realizations to a Slurm cluster."),
];

pub const LSF_QUEUE_OPTIONS: &[&str] = &[
    "LSF_QUEUE",
    "LSF_RESOURCE",
    "LSF_SERVER",
    "BSUB_CMD",
    "BJOBS_CMD",
    "BKILL_CMD",
    "BHIST_CMD",
    "BJOBS_TIMEOUT",
    "EXCLUDE_HOST",
    "PROJECT_CODE",
    "SUBMIT_SLEEP",
    "DEBUG_OUTPUT",
    "MAX_RUNNING",
];

pub const SLURM_QUEUE_OPTIONS: &[&str] = &[
    "SBATCH",
    "SCANCEL",
    "SCONTROL",
    "SQUEUE",
    "PARTITION",
    "MEMORY",
    "MEMORY_PER_CPU",
    "EXCLUDE_HOST",
    "INCLUDE_HOST",
    "MAX_RUNTIME",
    "SQUEUE_TIMEOUT",
    "PROJECT_CODE",
    "MAX_RUNNING",
];

pub const TORQUE_QUEUE_OPTIONS: &[&str] = &[
    "QSUB_CMD",
    "QSTAT_CMD",
    "QDEL_CMD",
    "QSTAT_OPTIONS",
    "QUEUE",
    "CLUSTER_LABEL",
    "NUM_NODES",
    "NUM_CPUS_PER_NODE",
    "MEMORY_PER_JOB",
    "KEEP_QSUB_OUTPUT",
    "JOB_PREFIX",
    "SUBMIT_SLEEP",
    "DEBUG_OUTPUT",
    "PROJECT_CODE",
    "MAX_RUNNING",
];

pub const LOCAL_QUEUE_OPTIONS: &[&str] = &["MAX_RUNNING"];

/// Points in the experiment lifecycle where a workflow can be hooked in.
pub const HOOK_POINTS: &[&str] = &[
    "PRE_SIMULATION",
    "POST_SIMULATION",
    "PRE_UPDATE",
    "POST_UPDATE",
    "PRE_FIRST_UPDATE",
];

pub const HOOK_POINT_OPTIONS: &[ParameterOption] = &[
    ParameterOption::new("PRE_SIMULATION", "Before the forward models of an iteration start."),
    ParameterOption::new("POST_SIMULATION", "After all realizations of an iteration finished."),
    ParameterOption::new("PRE_UPDATE", "Before every update step."),
    ParameterOption::new("POST_UPDATE", "After every update step."),
    ParameterOption::new("PRE_FIRST_UPDATE", "Before the first update step only."),
];

/// Transformation functions for `FIELD` input/output transforms.
pub const TRANSFORM_FUNCTIONS: &[&str] = &[
    "LN",
    "LOG",
    "LN0",
    "LOG10",
    "EXP",
    "EXP0",
    "POW10",
    "TRUNC_POW10",
];

pub const TRANSFORM_OPTIONS: &[ParameterOption] = &[
    ParameterOption::new("LN", "Natural logarithm."),
    ParameterOption::new("LOG", "Natural logarithm (alias of `LN`)."),
    ParameterOption::new("LN0", "Natural logarithm of `x + 0.000001`."),
    ParameterOption::new("LOG10", "Base-10 logarithm."),
    ParameterOption::new("EXP", "Natural exponential."),
    ParameterOption::new("EXP0", "Natural exponential minus `0.000001`."),
    ParameterOption::new("POW10", "Ten to the power of x."),
    ParameterOption::new("TRUNC_POW10", "`max(10^x - 0.001, 0)`."),
];

pub const FIELD_TYPE_OPTIONS: &[ParameterOption] = &[ParameterOption::new(
    "PARAMETER",
    "The field is a parameter updated by the analysis.",
)];

pub const HISTORY_SOURCE_OPTIONS: &[ParameterOption] = &[
    ParameterOption::new("REFCASE_SIMULATED", "Use simulated vectors from the reference case."),
    ParameterOption::new("REFCASE_HISTORY", "Use the `*H` history vectors of the reference case."),
];

pub const GEN_DATA_FORMAT_OPTIONS: &[ParameterOption] =
    &[ParameterOption::new("ASCII", "One value per line.")];

/// Well, group and field summary vectors recognised by `SUMMARY`.
pub const SUMMARY_VECTORS: &[&str] = &[
    "FOPR", "FOPT", "FOPRH", "FOPTH", "FWPR", "FWPT", "FWPRH", "FWPTH", "FGPR", "FGPT", "FGPRH",
    "FGPTH", "FWIR", "FWIT", "FGIR", "FGIT", "FWCT", "FWCTH", "FGOR", "FGORH", "FPR", "FOIP",
    "FGIP", "FWIP", "WOPR", "WOPT", "WOPRH", "WOPTH", "WWPR", "WWPT", "WWPRH", "WWPTH", "WGPR",
    "WGPT", "WGPRH", "WGPTH", "WWIR", "WWIT", "WGIR", "WGIT", "WWCT", "WWCTH", "WGOR", "WGORH",
    "WBHP", "WBHPH", "WTHP", "WTHPH", "WSTAT", "GOPR", "GOPT", "GWPR", "GWPT", "GGPR", "GGPT",
    "GWIR", "GGIR", "GWCT", "GGOR", "BPR", "BSWAT", "BSGAS", "RPR", "ROIP", "RGIP", "RWIP",
];

/// Membership test for `SUMMARY` vector names.
///
/// Accepts an exact vector (`FOPR`), a vector with a well/group qualifier (`WOPR:OP_1`),
/// and wildcard forms (`WOPR:*`, `W*`) whose literal prefix starts a known vector.
pub fn is_summary_vector(text: &str) -> bool {
    let base = text.split(':').next().unwrap_or(text);
    match base.find('*') {
        Some(star) => {
            let prefix = &base[..star];
            SUMMARY_VECTORS.iter().any(|v| v.starts_with(prefix))
        }
        None => SUMMARY_VECTORS.contains(&base),
    }
}

/// Whether `text` is a finite decimal number literal.
pub fn is_numeric_literal(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return false;
    }
    text.parse::<f64>().is_ok_and(f64::is_finite)
}
