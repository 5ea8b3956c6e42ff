// chaynikam.info comparison page parsing
use crate::model::{ComponentKind, ComponentReport, ParserError, ReportField};
use scraper::{ElementRef, Html, Selector};

/// Placeholder for a characteristic missing from the page.
pub const MISSING: &str = "Нет";

pub trait Parser {
    /// `Ok(None)` means the site has no such device.
    fn parse(&self, kind: ComponentKind, html: &str) -> Result<Option<ComponentReport>, ParserError>;
}

struct FieldSpec {
    label: &'static str,
    row_id: &'static str,
}

const fn field(label: &'static str, row_id: &'static str) -> FieldSpec {
    FieldSpec { label, row_id }
}

const CPU_CACHE_L3_ROW: &str = "trcachel3";

const CPU_FIELDS: &[FieldSpec] = &[
    field("Год выхода", "tryearofprod"),
    field("Тип процессора", "trcpucategory"),
    field("Сокет", "trcpusocket"),
    field("Количество ядер", "trnumofcores"),
    field("Количество потоков", "trnumofthreads"),
    field("Базовая частота", "trbasefreq"),
    field("Частота TurboBoost", "trturbofreq"),
    field("Размер кэша L3", CPU_CACHE_L3_ROW),
    field("Тепловыделение", "trtdp"),
    field("Встроенный графический процессор", "trgraphics"),
    field("Контроллер ОЗУ", "trmemorycontroller"),
];

const GPU_FIELDS: &[FieldSpec] = &[
    field("Год выхода", "tr_yearofprod"),
    field("Сегмент", "tr_desktopormob"),
    field("Тип", "tr_gpucategory"),
    field("Частота ядра", "tr_corefrequency"),
    field("Шейдерных блоков", "tr_unishaders"),
    field("Блоков растеризации (ROP)", "tr_numberofrop"),
    field("Текстурных блоков (TMU)", "tr_numberoftmu"),
    field("Тип памяти", "tr_memorytype"),
    field("Обьём памяти", "tr_memorysize"),
    field("Частота памяти", "tr_memoryfrequency"),
    field("Шина памяти", "tr_memorybus"),
    field("Пропускная способность", "tr_bandwidth"),
    field("Тепловыделение", "tr_tdp"),
    field("Мин. блок питания", "tr_bppower"),
    field("Разъёмы доп. питания", "tr_doppitanie"),
];

/// Where a kind keeps its characteristics table.
struct PageLayout {
    table: &'static str,
    cell: &'static str,
    fields: &'static [FieldSpec],
}

fn layout(kind: ComponentKind) -> PageLayout {
    match kind {
        ComponentKind::Cpu => PageLayout {
            table: "div.body table#table1",
            cell: "td.td6",
            fields: CPU_FIELDS,
        },
        ComponentKind::Gpu => PageLayout {
            table: "div.body table#tableosn",
            cell: "td.tk1",
            fields: GPU_FIELDS,
        },
    }
}

pub struct ChaynikamParser;

impl ChaynikamParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ChaynikamParser {
    fn parse(&self, kind: ComponentKind, html: &str) -> Result<Option<ComponentReport>, ParserError> {
        let document = Html::parse_document(html);

        let Some((name, score)) = name_and_score(kind, &document)? else {
            return Ok(None);
        };

        let layout = layout(kind);
        let mut fields = Vec::with_capacity(layout.fields.len());
        for spec in layout.fields {
            let cell = selector(&format!("{} tr#{} > {}", layout.table, spec.row_id, layout.cell))?;
            let mut value = document
                .select(&cell)
                .next()
                .map(cell_text)
                .unwrap_or_else(|| MISSING.to_string());
            if spec.row_id == CPU_CACHE_L3_ROW {
                value = kilobytes_to_megabytes(&value);
            }
            fields.push(ReportField { label: spec.label, value });
        }

        Ok(Some(ComponentReport { kind, name, score, fields }))
    }
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|_| ParserError::Selector(css.to_string()))
}

/// Rating block lookup. The two kinds signal a missing device differently:
/// the CPU page shows a zero score, the GPU page drops the entry altogether.
fn name_and_score(kind: ComponentKind, document: &Html) -> Result<Option<(String, String)>, ParserError> {
    match kind {
        ComponentKind::Cpu => {
            let row = selector("div#rating table tr:nth-of-type(3)")?;
            let texts: Vec<String> = document
                .select(&row)
                .next()
                .map(|tr| {
                    tr.text()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .take(2)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            match texts.as_slice() {
                [name, score] if score != "0" => Ok(Some((name.clone(), score.clone()))),
                _ => Ok(None),
            }
        }
        ComponentKind::Gpu => {
            let name = selector("div#ratdivob table#tabrating tr:nth-of-type(2) a.white")?;
            let score = selector("div#ratdivob table#tabrating tr:nth-of-type(2) span.sp_rat")?;
            let first_text = |sel: &Selector| {
                document
                    .select(sel)
                    .next()
                    .map(|el| el.text().collect::<String>().trim().to_string())
                    .filter(|t| !t.is_empty())
            };
            Ok(first_text(&name).zip(first_text(&score)))
        }
    }
}

/// Own text of a table cell. Cells split by markup keep their first two pieces.
fn cell_text(cell: ElementRef<'_>) -> String {
    let pieces: Vec<&str> = cell
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .take(2)
        .collect();

    if pieces.is_empty() {
        MISSING.to_string()
    } else {
        pieces.join(" ")
    }
}

/// L3 size is published in kilobytes. Non-numeric values ("Нет") pass through.
pub fn kilobytes_to_megabytes(value: &str) -> String {
    match value.trim().parse::<u64>() {
        Ok(kb) => format!("{} МБ", (kb as f64 / 1024.0).round_ties_even() as u64),
        Err(_) => value.to_string(),
    }
}
