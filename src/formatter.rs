// Chat replies
use crate::model::{ComponentKind, ComponentReport};

pub const SEPARATOR_WIDTH: usize = 30;

pub const START_MESSAGE: &str = "Введите линейку необходимого устройства и его модель.";

pub const USAGE_HINT: &str = "Ввод не содержит разделённых ПРОБЕЛОМ линейки и модели устр-ва.\n\n\
    Корректные примеры использования:\ni5 9400f\nradeon rx 580\nrtx 2080 ti";

pub const FETCH_FAILED: &str = "Не удалось получить данные с сайта. Попробуйте позже.";

pub fn unrecognized_family(family: &str) -> String {
    format!("Название '{}' не распознано.", family)
}

pub fn not_found(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Cpu => "Неверная модель процессора.",
        ComponentKind::Gpu => "Неверная модель видеокарты.",
    }
}

/// Renders labeled fields separated by dashed lines, followed by the score block.
pub fn format_report(report: &ComponentReport) -> String {
    let separator = format!("\n{}\n", "-".repeat(SEPARATOR_WIDTH));
    let body = report
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.label, f.value))
        .collect::<Vec<_>>()
        .join(&separator);

    format!(
        "{}\n\n\nБалл производительности для\n{}:\n----------     {}     ----------",
        body, report.name, report.score
    )
}
