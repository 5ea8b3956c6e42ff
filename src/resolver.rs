use crate::families::{cpu_families, gpu_families, FamilyRule};
use crate::model::ResolvedFamily;

/// Routes a normalized family token to the first matching rule, CPU table first.
pub fn resolve(family: &str) -> Option<ResolvedFamily> {
    resolve_in(cpu_families(), family).or_else(|| resolve_in(gpu_families(), family))
}

fn resolve_in(rules: &'static [FamilyRule], family: &str) -> Option<ResolvedFamily> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(family))
        .map(|rule| ResolvedFamily {
            kind: rule.kind,
            rule: rule.name,
            series: rule.template.apply(family),
        })
}
