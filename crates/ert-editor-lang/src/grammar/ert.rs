//! ERT keyword table.

use super::enums::{
    BOOLEAN_OPTIONS, FIELD_TYPE_OPTIONS, GEN_DATA_FORMAT_OPTIONS, HISTORY_SOURCE_OPTIONS,
    HOOK_POINT_OPTIONS, QUEUE_SYSTEM_OPTIONS, TRANSFORM_OPTIONS,
};
use super::{Keyword, KeywordParameter as P};

const COUNT: &[P] = &[P::new("count", "A positive integer.").required().numerical()];
const SECONDS: &[P] = &[P::new("seconds", "Duration in seconds.").required().numerical()];
const FILE: &[P] = &[P::new("file", "Path, relative to the config file.")
    .required()
    .filepath()];
const DIRECTORY: &[P] = &[P::new("directory", "Directory path.").required().filepath()];
const NAME: &[P] = &[P::new("name", "A name.").required()];
const FLAG: &[P] = &[P::new("value", "A boolean flag.")
    .required()
    .options(BOOLEAN_OPTIONS)];

const DEFINE: &[P] = &[
    P::new("<KEY>", "Substitution key, conventionally written `<KEY>`.").required(),
    P::new("value", "Replacement text.").required(),
];

const FIELD: &[P] = &[
    P::new("ID", "Name of the field; must match the keyword in the simulator deck.").required(),
    P::new("PARAMETER", "Field type.")
        .required()
        .options(FIELD_TYPE_OPTIONS),
    P::new("OUTPUT_FILE", "File written for the forward model, e.g. `poro.grdecl`.")
        .required()
        .filepath(),
    P::named("INIT_FILES", "Initial realizations; `%d` is replaced by the realization number.")
        .filepath(),
    P::named("INIT_TRANSFORM", "Transformation applied when loading the initial files.")
        .options(TRANSFORM_OPTIONS),
    P::named("OUTPUT_TRANSFORM", "Transformation applied before writing the output file.")
        .options(TRANSFORM_OPTIONS),
    P::named("FORWARD_INIT", "Whether the forward model creates the initial field.")
        .options(BOOLEAN_OPTIONS),
    P::named("MIN", "Truncate values below this bound after transforms.").numerical(),
    P::named("MAX", "Truncate values above this bound after transforms.").numerical(),
];

const GEN_DATA: &[P] = &[
    P::new("NAME", "Name of the response.").required(),
    P::named("RESULT_FILE", "Result file written by the forward model; `%d` is the report step.")
        .required()
        .filepath(),
    P::named("INPUT_FORMAT", "Format of the result file.").options(GEN_DATA_FORMAT_OPTIONS),
    P::named("REPORT_STEPS", "Comma separated report steps to load."),
];

const SURFACE: &[P] = &[
    P::new("NAME", "Name of the surface parameter.").required(),
    P::named("OUTPUT_FILE", "Surface file written for the forward model.")
        .required()
        .filepath(),
    P::named("INIT_FILES", "Initial surfaces; `%d` is replaced by the realization number.")
        .required()
        .filepath(),
    P::named("BASE_SURFACE", "Surface defining the grid geometry.")
        .required()
        .filepath(),
    P::named("FORWARD_INIT", "Whether the forward model creates the initial surface.")
        .options(BOOLEAN_OPTIONS),
];

const GEN_KW: &[P] = &[
    P::new("NAME", "Group name of the parameters.").required(),
    P::new("TEMPLATE", "Template file with `<KEY>` placeholders.").filepath(),
    P::new("OUTPUT", "File the instantiated template is written to.").filepath(),
    P::new("PRIORS", "DIST file with one prior per line.")
        .required()
        .filepath(),
    P::named("INIT_FILES", "Initial values; `%d` is replaced by the realization number.")
        .filepath(),
    P::named("FORWARD_INIT", "Whether the forward model creates the initial values.")
        .options(BOOLEAN_OPTIONS),
];

const HOOK_WORKFLOW: &[P] = &[
    P::new("WORKFLOW", "Name of a loaded workflow.").required(),
    P::new("HOOK", "When to run the workflow.")
        .required()
        .options(HOOK_POINT_OPTIONS),
];

const INSTALL_JOB: &[P] = &[
    P::new("JOB_NAME", "Name used to reference the job from `FORWARD_MODEL`.").required(),
    P::new("CONFIG_FILE", "Job configuration file.").required().filepath(),
];

const LOAD_WORKFLOW: &[P] = &[
    P::new("FILE", "Workflow file.").required().filepath(),
    P::new("NAME", "Name to register the workflow under."),
];

const LOAD_WORKFLOW_JOB: &[P] = &[
    P::new("FILE", "Workflow job configuration file.").required().filepath(),
    P::new("NAME", "Name to register the job under."),
];

const FORWARD_MODEL: &[P] = &[P::new("JOB", "Job name, optionally with `(<ARG>=value, ...)`.").required()];

const SIMULATION_JOB: &[P] = &[
    P::new("JOB", "Job name.").required(),
    P::new("ARGS", "Arguments passed verbatim to the job."),
];

const SETENV: &[P] = &[
    P::new("VARIABLE", "Environment variable name.").required(),
    P::new("VALUE", "Value; may reference other variables as `$VAR`.").required(),
];

const QUEUE_SYSTEM: &[P] = &[P::new("SYSTEM", "Queue system driver.")
    .required()
    .options(QUEUE_SYSTEM_OPTIONS)];

const QUEUE_OPTION: &[P] = &[
    P::new("SYSTEM", "Queue system the option applies to.")
        .required()
        .options(QUEUE_SYSTEM_OPTIONS),
    P::new("OPTION", "Driver specific option name.").required(),
    P::new("VALUE", "Option value."),
];

const SUMMARY: &[P] = &[P::new("VECTOR", "Summary vector, wildcards allowed (`WOPR:*`).").required()];

const HISTORY_SOURCE: &[P] = &[P::new("SOURCE", "Where historical values come from.")
    .required()
    .options(HISTORY_SOURCE_OPTIONS)];

const ANALYSIS_SET_VAR: &[P] = &[
    P::new("MODULE", "Analysis module, e.g. `STD_ENKF`.").required(),
    P::new("VARIABLE", "Variable name.").required(),
    P::new("VALUE", "New value.").required(),
];

const ITER_COUNT: &[P] = &[P::new("iterations", "Number of iterations.").required().numerical()];

const MIN_COUNT: &[P] = &[P::new("count", "Absolute count or percentage.").required()];
const SEED: &[P] = &[P::new("seed", "Integer seed.").required().numerical()];
const ALPHA: &[P] = &[P::new("alpha", "Positive number.").required().numerical()];
const CUTOFF: &[P] = &[P::new("cutoff", "Non-negative number.").required().numerical()];

const RUN_TEMPLATE: &[P] = &[
    P::new("TEMPLATE", "Template file.").required().filepath(),
    P::new("TARGET", "Output file in the run path.").required().filepath(),
];

pub static ERT_KEYWORDS: &[Keyword] = &[
    Keyword::new(
        "NUM_REALIZATIONS",
        "100",
        "Number of realizations in the ensemble.",
    )
    .params(COUNT)
    .required()
    .numerical(),
    Keyword::new(
        "MIN_REALIZATIONS",
        "80%",
        "Minimum number of realizations that must succeed for an iteration to be accepted. \
         May be given as an absolute number or a percentage.",
    )
    .params(MIN_COUNT),
    Keyword::new(
        "DATA_FILE",
        "MY_MODEL.DATA",
        "Simulator data file template; `<KEY>`s are substituted for every realization.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new(
        "ECLBASE",
        "MY_MODEL-<IENS>",
        "Base name of the simulator case. Must contain `<IENS>` or `%d` when more than \
         one realization is run.",
    )
    .params(NAME),
    Keyword::new(
        "JOBNAME",
        "model-<IENS>",
        "Name of the jobs submitted to the queue.",
    )
    .params(NAME),
    Keyword::new(
        "RUNPATH",
        "simulations/realization-<IENS>/iter-<ITER>",
        "Directory the forward model of each realization runs in.",
    )
    .params(DIRECTORY)
    .filepath(),
    Keyword::new(
        "RUNPATH_FILE",
        ".ert_runpath_list",
        "File listing all run paths of the last experiment.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new("ENSPATH", "storage", "Directory where ensemble storage is kept.")
        .params(DIRECTORY)
        .filepath(),
    Keyword::new(
        "DEFINE",
        "<USER> alice",
        "Define a substitution key usable in the rest of the configuration.",
    )
    .params(DEFINE),
    Keyword::new(
        "DATA_KW",
        "<INCLUDE_PATH> /path/to/include",
        "Define a key substituted into the data file only.",
    )
    .params(DEFINE),
    Keyword::new(
        "GRID",
        "MY_MODEL.EGRID",
        "Simulator grid used by `FIELD` parameters and block observations.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new(
        "REFCASE",
        "refcase/MY_MODEL",
        "Reference case providing summary history and report times.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new(
        "OBS_CONFIG",
        "observations/observations.txt",
        "Observation configuration file.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new("TIME_MAP", "time_map.txt", "File listing report step dates.")
        .params(FILE)
        .filepath(),
    Keyword::new(
        "HISTORY_SOURCE",
        "REFCASE_HISTORY",
        "Source of historical values for summary observations.",
    )
    .params(HISTORY_SOURCE),
    Keyword::new(
        "FIELD",
        "PORO PARAMETER poro.grdecl INIT_FILES:poro_%d.grdecl",
        "Declare a 3D grid parameter. Optional settings are given as `NAME:VALUE`: \
         `INIT_FILES`, `INIT_TRANSFORM`, `OUTPUT_TRANSFORM`, `FORWARD_INIT`, `MIN`, `MAX`.",
    )
    .params(FIELD),
    Keyword::new(
        "GEN_DATA",
        "RFT_DATA RESULT_FILE:rft_%d.txt REPORT_STEPS:10",
        "Declare a general data response read from a result file after each forward model.",
    )
    .params(GEN_DATA),
    Keyword::new(
        "SURFACE",
        "TOP OUTPUT_FILE:top.irap INIT_FILES:top_%d.irap BASE_SURFACE:base.irap",
        "Declare a 2D surface parameter.",
    )
    .params(SURFACE),
    Keyword::new(
        "GEN_KW",
        "MULT template.tmpl mult.inc priors.txt",
        "Declare a group of scalar parameters with priors from a DIST file.",
    )
    .params(GEN_KW),
    Keyword::new(
        "SUMMARY",
        "WOPR:*",
        "Load a summary vector from the simulator results.",
    )
    .params(SUMMARY),
    Keyword::new(
        "INSTALL_JOB",
        "MY_JOB jobs/MY_JOB",
        "Install a forward model job from a job configuration file.",
    )
    .params(INSTALL_JOB),
    Keyword::new(
        "INSTALL_JOB_DIRECTORY",
        "jobs",
        "Install every job configuration found in a directory.",
    )
    .params(DIRECTORY)
    .filepath(),
    Keyword::new(
        "FORWARD_MODEL",
        "ECLIPSE100(<VERSION>=2020.2, <NUM_CPU>=4)",
        "Append a job to the forward model. Arguments are passed as `<ARG>=value` pairs \
         inside parentheses.",
    )
    .params(FORWARD_MODEL),
    Keyword::new(
        "SIMULATION_JOB",
        "MY_JOB arg1 arg2",
        "Append a job to the forward model with positional arguments.",
    )
    .params(SIMULATION_JOB),
    Keyword::new(
        "SETENV",
        "OMP_NUM_THREADS 1",
        "Set an environment variable for all forward model jobs.",
    )
    .params(SETENV),
    Keyword::new(
        "UPDATE_PATH",
        "PATH /opt/bin",
        "Prepend a directory to a path-like environment variable.",
    )
    .params(SETENV),
    Keyword::new(
        "QUEUE_SYSTEM",
        "LSF",
        "Queue system used to run the forward models.",
    )
    .params(QUEUE_SYSTEM),
    Keyword::new(
        "QUEUE_OPTION",
        "LSF LSF_QUEUE normal",
        "Set a driver specific option for a queue system.",
    )
    .params(QUEUE_OPTION),
    Keyword::new(
        "MAX_RUNTIME",
        "3600",
        "Kill realizations running longer than this many seconds. `0` disables the limit.",
    )
    .params(SECONDS)
    .numerical(),
    Keyword::new(
        "MAX_SUBMIT",
        "2",
        "How many times a failing realization is resubmitted.",
    )
    .params(COUNT)
    .numerical(),
    Keyword::new(
        "STOP_LONG_RUNNING",
        "TRUE",
        "Stop realizations that run much longer than the average once enough have finished.",
    )
    .params(FLAG),
    Keyword::new(
        "LOAD_WORKFLOW",
        "workflows/MY_WORKFLOW",
        "Load a workflow file.",
    )
    .params(LOAD_WORKFLOW),
    Keyword::new(
        "LOAD_WORKFLOW_JOB",
        "workflow_jobs/MY_JOB",
        "Load a workflow job configuration.",
    )
    .params(LOAD_WORKFLOW_JOB),
    Keyword::new(
        "WORKFLOW_JOB_DIRECTORY",
        "workflow_jobs",
        "Load every workflow job configuration found in a directory.",
    )
    .params(DIRECTORY)
    .filepath(),
    Keyword::new(
        "HOOK_WORKFLOW",
        "MY_WORKFLOW PRE_SIMULATION",
        "Run a loaded workflow automatically at a point of the experiment.",
    )
    .params(HOOK_WORKFLOW),
    Keyword::new(
        "INCLUDE",
        "other.ert",
        "Include another configuration file at this point.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new(
        "RANDOM_SEED",
        "123456",
        "Seed for the random number generator; makes sampling reproducible.",
    )
    .params(SEED)
    .numerical(),
    Keyword::new(
        "ANALYSIS_SET_VAR",
        "STD_ENKF ENKF_TRUNCATION 0.98",
        "Set an analysis module variable.",
    )
    .params(ANALYSIS_SET_VAR),
    Keyword::new(
        "ANALYSIS_SELECT",
        "STD_ENKF",
        "Select the analysis module used for updates.",
    )
    .params(NAME),
    Keyword::new("ENKF_ALPHA", "3.0", "Scaling factor for outlier detection.")
        .params(ALPHA)
        .numerical(),
    Keyword::new(
        "STD_CUTOFF",
        "1e-6",
        "Responses with an ensemble standard deviation below this are excluded.",
    )
    .params(CUTOFF)
    .numerical(),
    Keyword::new(
        "UPDATE_LOG_PATH",
        "update_log",
        "Directory where update reports are written.",
    )
    .params(DIRECTORY)
    .filepath(),
    Keyword::new(
        "ITER_CASE",
        "default_%d",
        "Case name format for iterated smoothers.",
    )
    .params(NAME),
    Keyword::new(
        "ITER_COUNT",
        "4",
        "Number of iterations for iterated smoothers.",
    )
    .params(ITER_COUNT)
    .numerical(),
    Keyword::new(
        "ITER_RETRY_COUNT",
        "4",
        "Times an iteration is retried before giving up.",
    )
    .params(ITER_COUNT)
    .numerical(),
    Keyword::new(
        "GEN_KW_EXPORT_NAME",
        "parameters",
        "Base name of the exported parameter files.",
    )
    .params(NAME),
    Keyword::new(
        "RUN_TEMPLATE",
        "template.txt output.txt",
        "Instantiate a template into every run path.",
    )
    .params(RUN_TEMPLATE),
    Keyword::new(
        "JOB_SCRIPT",
        "job_dispatch.py",
        "Script used to dispatch the forward model.",
    )
    .params(FILE)
    .filepath(),
    Keyword::new(
        "LICENSE_PATH",
        "/path/to/licenses",
        "Directory used to limit license usage.",
    )
    .params(DIRECTORY)
    .filepath()
    .deprecated(),
    Keyword::new(
        "SCHEDULE_PREDICTION_FILE",
        "prediction.sch",
        "Schedule file used for prediction. No longer used.",
    )
    .params(FILE)
    .filepath()
    .deprecated(),
    Keyword::new(
        "UMASK",
        "0022",
        "File creation mask for the run paths. No longer used.",
    )
    .params(NAME)
    .deprecated(),
    Keyword::new(
        "REFCASE_LIST",
        "refcases/*",
        "Additional reference cases for plotting. No longer used.",
    )
    .params(FILE)
    .deprecated(),
];
