// Ordered family registry for the comparison site
use crate::model::ComponentKind;
use once_cell::sync::Lazy;
use regex::Regex;
use SeriesTemplate::{Fixed, Format};

/// How a matched family is turned into the series part of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesTemplate {
    /// `%s` is replaced with the family as typed.
    Format(&'static str),
    /// Used verbatim, the typed family is dropped.
    Fixed(&'static str),
}

impl SeriesTemplate {
    pub fn apply(&self, family: &str) -> String {
        match self {
            SeriesTemplate::Format(template) => template.replacen("%s", family, 1),
            SeriesTemplate::Fixed(literal) => (*literal).to_string(),
        }
    }
}

#[derive(Debug)]
pub struct FamilyRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub kind: ComponentKind,
    pub template: SeriesTemplate,
}

type RuleSpec = (&'static str, &'static str, SeriesTemplate);

// Order matters: the first matching pattern wins.
const CPU_RULES: &[RuleSpec] = &[
    ("core", r"i[3579]$", Format("Core_%s-")),
    ("ryzen", r"ryzen_[3579]$", Format("%s_")),
    ("pentium", r"pentium", Format("%s_")),
    ("celeron", r"celeron", Format("%s_")),
    ("athlon", r"athlon", Format("%s_")),
    ("phenom", r"phenom", Format("%s_")),
    ("sempron", r"sempron", Format("%s_")),
    ("xeon", r"xeon", Format("%s_")),
    ("ryzen_threadripper", r"ryzen_(threadripper|tr)", Fixed("Ryzen_Threadripper_")),
    ("epyc", r"epyc", Format("%s_")),
    ("fx", r"fx", Format("%s-")),
    ("a_series", r"^a(4|6|8|9|10|12)$", Format("%s-")),
];

// `gtx`/`gts` must stay ahead of `gt`, `mobility_radeon` ahead of `radeon`
// and `uhd` ahead of `hd`.
const GPU_RULES: &[RuleSpec] = &[
    ("geforce_gtx", r"gtx", Format("GeForce_%s_")),
    ("geforce_rtx", r"rtx", Format("GeForce_%s_")),
    ("mobility_radeon", r"mobility_radeon", Format("%s_")),
    ("radeon", r"radeon", Format("%s_")),
    ("uhd_graphics", r"uhd", Format("%s_Graphics_")),
    ("hd_graphics", r"hd", Format("%s_Graphics_")),
    ("quadro", r"quadro", Format("%s_")),
    ("firepro", r"firepro", Format("%s_")),
    ("geforce_gts", r"gts", Format("GeForce_%s_")),
    ("geforce_gt", r"gt", Format("GeForce_%s_")),
    ("geforce", r"geforce", Format("%s_")),
];

fn compile(kind: ComponentKind, specs: &[RuleSpec]) -> Vec<FamilyRule> {
    specs
        .iter()
        .map(|&(name, pattern, template)| FamilyRule {
            name,
            // Patterns are literals above; a typo here is a programming error.
            pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("bad family pattern {pattern}: {e}")),
            kind,
            template,
        })
        .collect()
}

static CPU_FAMILIES: Lazy<Vec<FamilyRule>> = Lazy::new(|| compile(ComponentKind::Cpu, CPU_RULES));
static GPU_FAMILIES: Lazy<Vec<FamilyRule>> = Lazy::new(|| compile(ComponentKind::Gpu, GPU_RULES));

pub fn cpu_families() -> &'static [FamilyRule] {
    &CPU_FAMILIES
}

pub fn gpu_families() -> &'static [FamilyRule] {
    &GPU_FAMILIES
}
