use async_trait::async_trait;
use domainworth::core::Phase;
use domainworth::ui::i18n::{ARABIC, ENGLISH};
use domainworth::ui::render::render_view_at;
use domainworth::utils::error::{Result, ValuationError};
use domainworth::{
    ComparableSale, Controller, DetailedAnalysis, Language, ValuationResponse, ValuationService,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

fn valuation(value: f64) -> ValuationResponse {
    ValuationResponse {
        currency: None,
        estimated_value: value,
        brandability_score: 80,
        keyword_score: 60,
        extension_score: 90,
        age_score: 70,
        comparable_sales: vec![ComparableSale {
            domain: "sample.com".to_string(),
            price: 12000.0,
            year: "2022".to_string(),
        }],
        summary: "summary".to_string(),
        detailed_analysis: DetailedAnalysis::default(),
    }
}

/// Answers immediately, succeeding or failing for every call.
struct FixedService {
    calls: AtomicUsize,
    succeed: bool,
}

impl FixedService {
    fn new(succeed: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            succeed,
        })
    }
}

#[async_trait]
impl ValuationService for FixedService {
    async fn evaluate(&self, _domain: &str, _language: Language) -> Result<ValuationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(valuation(50000.0))
        } else {
            Err(ValuationError::ServiceError {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }
}

/// Each domain's call waits until the test releases it.
struct GatedService {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<ValuationResponse>>>>,
}

impl GatedService {
    fn new(domains: &[&str]) -> (Arc<Self>, HashMap<String, oneshot::Sender<Result<ValuationResponse>>>) {
        let mut gates = HashMap::new();
        let mut senders = HashMap::new();
        for domain in domains {
            let (tx, rx) = oneshot::channel();
            gates.insert(domain.to_string(), rx);
            senders.insert(domain.to_string(), tx);
        }
        (
            Arc::new(Self {
                gates: Mutex::new(gates),
            }),
            senders,
        )
    }
}

#[async_trait]
impl ValuationService for GatedService {
    async fn evaluate(&self, domain: &str, _language: Language) -> Result<ValuationResponse> {
        let gate = self.gates.lock().unwrap().remove(domain).expect("unexpected domain");
        gate.await.unwrap_or(Err(ValuationError::EmptyResponseError))
    }
}

/// Panics instead of answering.
struct PanickingService;

#[async_trait]
impl ValuationService for PanickingService {
    async fn evaluate(&self, domain: &str, _language: Language) -> Result<ValuationResponse> {
        panic!("service blew up on {}", domain);
    }
}

#[tokio::test]
async fn test_panicking_service_ends_in_error_state() {
    let mut controller = Controller::new(Arc::new(PanickingService), Language::English);

    controller.submit("example.com");
    tokio::time::timeout(Duration::from_secs(2), controller.settle())
        .await
        .expect("settle should finish after a panicked call");

    assert!(!controller.state().loading);
    assert!(controller.state().result.is_none());
    assert_eq!(controller.state().phase(), Phase::Error(ENGLISH.error));
    assert_eq!(controller.in_flight(), 0);
}

#[tokio::test]
async fn test_submit_sets_loading_before_settling() {
    let service = FixedService::new(true);
    let mut controller = Controller::new(service.clone(), Language::English);

    let seq = controller.submit("example.com");
    assert_eq!(seq, Some(1));
    assert!(controller.state().loading);
    assert!(controller.state().result.is_none());
    assert!(controller.state().error.is_none());
    assert_eq!(controller.state().searched_domain, "example.com");

    controller.settle().await;
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    assert!(!controller.state().loading);
    assert!(controller.state().error.is_none());
    assert_eq!(controller.state().result, Some(valuation(50000.0)));
}

#[tokio::test]
async fn test_failure_sets_fixed_localized_message() {
    let service = FixedService::new(false);
    let mut controller = Controller::new(service, Language::Arabic);

    controller.submit("example.com");
    controller.settle().await;

    assert!(!controller.state().loading);
    assert!(controller.state().result.is_none());
    assert_eq!(controller.state().phase(), Phase::Error(ARABIC.error));
}

#[tokio::test]
async fn test_blank_submission_does_not_call_service() {
    let service = FixedService::new(true);
    let mut controller = Controller::new(service.clone(), Language::English);

    assert_eq!(controller.submit("   \t"), None);
    assert_eq!(controller.submit(""), None);
    assert!(!controller.state().loading);
    assert_eq!(controller.in_flight(), 0);

    tokio::task::yield_now().await;
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_resubmission_replaces_previous_error() {
    let failing = FixedService::new(false);
    let mut controller = Controller::new(failing, Language::English);
    controller.submit("bad.example");
    controller.settle().await;
    assert_eq!(controller.state().error.as_deref(), Some(ENGLISH.error));

    controller.submit("again.example");
    assert!(controller.state().error.is_none());
    assert!(controller.state().loading);
    controller.settle().await;
    assert_eq!(controller.state().error.as_deref(), Some(ENGLISH.error));
    assert_eq!(controller.state().searched_domain, "again.example");
}

#[tokio::test]
async fn test_latest_submission_wins_when_it_finishes_first() {
    let (service, mut senders) = GatedService::new(&["first.com", "second.com"]);
    let mut controller = Controller::new(service, Language::English);

    controller.submit("first.com");
    controller.submit("second.com");
    assert_eq!(controller.in_flight(), 2);

    senders.remove("second.com").unwrap().send(Ok(valuation(2.0))).unwrap();
    assert!(controller.next_completion().await);
    assert_eq!(controller.state().result.as_ref().map(|r| r.estimated_value), Some(2.0));

    senders.remove("first.com").unwrap().send(Ok(valuation(1.0))).unwrap();
    assert!(controller.next_completion().await);
    assert_eq!(controller.state().result.as_ref().map(|r| r.estimated_value), Some(2.0));
    assert_eq!(controller.state().searched_domain, "second.com");
    assert!(!controller.next_completion().await);
}

#[tokio::test]
async fn test_stale_failure_does_not_clobber_pending_request() {
    let (service, mut senders) = GatedService::new(&["first.com", "second.com"]);
    let mut controller = Controller::new(service, Language::English);

    controller.submit("first.com");
    controller.submit("second.com");

    senders
        .remove("first.com")
        .unwrap()
        .send(Err(ValuationError::EmptyResponseError))
        .unwrap();
    assert!(controller.next_completion().await);
    assert!(controller.state().loading);
    assert!(controller.state().error.is_none());

    senders.remove("second.com").unwrap().send(Ok(valuation(7.0))).unwrap();
    controller.settle().await;
    assert_eq!(controller.state().result.as_ref().map(|r| r.estimated_value), Some(7.0));
}

#[tokio::test]
async fn test_language_switch_keeps_numbers() {
    let service = FixedService::new(true);
    let mut controller = Controller::new(service, Language::English);
    controller.submit("example.com");
    controller.settle().await;

    let before = controller.state().result.clone();
    let english = render_view_at(controller.state(), 72, 2026);

    controller.set_language(Language::Arabic);
    let arabic = render_view_at(controller.state(), 72, 2026);

    assert_eq!(controller.state().result, before);
    assert!(english.contains(ENGLISH.estimated_value));
    assert!(arabic.contains(ARABIC.estimated_value));
    assert!(!arabic.contains(ENGLISH.estimated_value));
    for needle in ["$50,000", "80/100", "60/100", "90/100", "70/100", "$12,000"] {
        assert!(english.contains(needle), "english view missing {}", needle);
        assert!(arabic.contains(needle), "arabic view missing {}", needle);
    }
}
