// Message -> reply pipeline: normalize, resolve, rewrite, fetch, parse, format.
use crate::formatter;
use crate::model::{ComponentKind, ComponentReport, FetchError, ResolvedComponent};
use crate::normalizer::normalize;
use crate::parser::{ChaynikamParser, Parser};
use crate::resolver::resolve;
use crate::rewriter::rewrite;
use crate::scraper::Scraper;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ComponentReport),
    /// Family recognized, but the site has no such model.
    NotFound(ComponentKind),
    UnrecognizedFamily(String),
    /// No family/model pair in the message.
    MalformedInput,
}

impl LookupOutcome {
    pub fn into_reply(self) -> String {
        match self {
            LookupOutcome::Found(report) => formatter::format_report(&report),
            LookupOutcome::NotFound(kind) => formatter::not_found(kind).to_string(),
            LookupOutcome::UnrecognizedFamily(family) => formatter::unrecognized_family(&family),
            LookupOutcome::MalformedInput => formatter::USAGE_HINT.to_string(),
        }
    }
}

/// Turns raw text into a component address, without touching the network.
pub fn route(raw: &str) -> Result<ResolvedComponent, LookupOutcome> {
    let request = normalize(raw).ok_or(LookupOutcome::MalformedInput)?;
    let family = resolve(&request.family)
        .ok_or_else(|| LookupOutcome::UnrecognizedFamily(request.family.clone()))?;
    debug!("Family '{}' matched rule '{}'", request.family, family.rule);

    let (series, model) = rewrite(family.kind, &family.series, &request.model);
    Ok(ResolvedComponent { kind: family.kind, series, model })
}

pub struct LookupService {
    scraper: Box<dyn Scraper>,
    parser: ChaynikamParser,
}

impl LookupService {
    pub fn new(scraper: Box<dyn Scraper>) -> Self {
        Self {
            scraper,
            parser: ChaynikamParser::new(),
        }
    }

    /// Fetch and parse failures are returned to the caller; every other outcome is a value.
    pub async fn lookup(&self, raw: &str) -> Result<LookupOutcome, FetchError> {
        let component = match route(raw) {
            Ok(component) => component,
            Err(outcome) => return Ok(outcome),
        };
        info!("Looking up {} '{}'", component.kind, component.query());

        let html = self.scraper.fetch(&component).await?;
        let outcome = match self.parser.parse(component.kind, &html)? {
            Some(report) => {
                info!("Found {} '{}' with score {}", report.kind, report.name, report.score);
                LookupOutcome::Found(report)
            }
            None => {
                info!("No {} page for '{}'", component.kind, component.query());
                LookupOutcome::NotFound(component.kind)
            }
        };
        Ok(outcome)
    }

    pub async fn reply(&self, raw: &str) -> Result<String, FetchError> {
        Ok(self.lookup(raw).await?.into_reply())
    }
}


#[cfg(test)]
mod tests {
    use super::stub::StubScraper;
    use super::*;
    use crate::parser::chaynikam_parser::fixtures;
    use std::sync::{Arc, Mutex};

    fn service(stub: StubScraper) -> (LookupService, Arc<Mutex<Vec<String>>>) {
        let requests = stub.requests.clone();
        (LookupService::new(Box::new(stub)), requests)
    }

    #[test]
    fn routes_core_i5() {
        assert_eq!(
            route("i5 9400f"),
            Ok(ResolvedComponent {
                kind: ComponentKind::Cpu,
                series: "Core_i5-".into(),
                model: "9400f".into(),
            })
        );
    }

    #[test]
    fn routes_with_rewrites() {
        let gtx = route("GTX 1060").unwrap();
        assert_eq!(gtx.query(), "GeForce_gtx_1060_6gb");

        let mobility = route("Mobility Radeon HD 5650").unwrap();
        assert_eq!(mobility.query(), "ATI_mobility_radeon_hd_5650");

        let athlon = route("athlon 2 x2 250").unwrap();
        assert_eq!(athlon.query(), "athlon_II_x2_250");

        let threadripper = route("ryzen tr 3970x").unwrap();
        assert_eq!(threadripper.query(), "Ryzen_Threadripper_3970x");
    }

    #[tokio::test]
    async fn found_cpu_is_formatted() {
        let (service, requests) =
            service(StubScraper::default().with_page("Core_i5-9400f", fixtures::CPU_PAGE));

        let reply = service.reply("i5 9400f").await.unwrap();

        assert_eq!(requests.lock().unwrap().as_slice(), ["Core_i5-9400f"]);
        assert!(reply.starts_with("Год выхода: 2019\n------------------------------\n"));
        assert!(reply.contains("Размер кэша L3: 9 МБ"));
        assert!(reply.ends_with("Intel Core i5-9400F:\n----------     4512     ----------"));
    }

    #[tokio::test]
    async fn found_gpu_is_formatted() {
        let (service, _) =
            service(StubScraper::default().with_page("radeon_rx_580", fixtures::GPU_PAGE));

        let outcome = service.lookup("Radeon RX 580").await.unwrap();
        match outcome {
            LookupOutcome::Found(report) => {
                assert_eq!(report.kind, ComponentKind::Gpu);
                assert_eq!(report.name, "AMD Radeon RX 580");
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_models_get_kind_specific_reply() {
        let (service, _) = service(
            StubScraper::default()
                .with_page("Core_i5-0000", fixtures::CPU_NOT_FOUND_PAGE)
                .with_page("GeForce_rtx_0000", fixtures::GPU_NOT_FOUND_PAGE),
        );

        assert_eq!(service.reply("i5 0000").await.unwrap(), "Неверная модель процессора.");
        assert_eq!(service.reply("rtx 0000").await.unwrap(), "Неверная модель видеокарты.");
    }

    #[tokio::test]
    async fn unrecognized_family_skips_network() {
        let (service, requests) = service(StubScraper::default());

        assert_eq!(service.reply("xyz 123").await.unwrap(), "Название 'xyz' не распознано.");
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn single_token_gets_usage_hint() {
        let (service, requests) = service(StubScraper::default());

        assert_eq!(service.reply("justonetoken").await.unwrap(), formatter::USAGE_HINT);
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_propagated() {
        let (service, _) = service(StubScraper::default());

        let err = service.reply("gtx 1080").await.unwrap_err();
        assert!(matches!(err, FetchError::HttpError(_)));
    }
}
