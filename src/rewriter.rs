// Site-specific URL corrections. These are empirical: each entry mirrors a page
// whose address does not follow the family template. Extend, do not replace.
use crate::model::ComponentKind;

/// Applies the hand-coded corrections to an already templated series and model.
pub fn rewrite(kind: ComponentKind, series: &str, model: &str) -> (String, String) {
    let mut series = series.to_string();
    let mut model = model.to_string();

    if kind == ComponentKind::Cpu {
        // Athlon II / Phenom II: "x2" model suffixes must survive the "II" insertion.
        if series == "athlon_" || series == "phenom_" {
            model = model.replacen("2_", "II_", 1).replace("xII", "x2");
        // Pentium II / III.
        } else if series == "pentium_" && (model.starts_with("2_") || model.starts_with("3_")) {
            model = model.replacen("2_", "II_", 1).replacen("3_", "III_", 1);
        }
    }

    match model.as_str() {
        // These pages carry a dangling delimiter.
        "gold_g6400" | "1220p" => model.push('_'),
        // GTX 1060 defaults to the 6GB page only with an explicit suffix.
        "1060" => model.push_str("_6gb"),
        // Filed under the legacy ATI brand.
        "hd_5650" => series.insert_str(0, "ATI_"),
        _ => {}
    }

    (series, model)
}
