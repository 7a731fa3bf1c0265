use crate::core::{Language, ValuationResponse, ValuationService};
use crate::ui::i18n::translations;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Everything the renderer needs. Only [`reduce`] produces new states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub language: Language,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<ValuationResponse>,
    pub searched_domain: String,
    /// Sequence number of the latest accepted submission.
    pub request_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<'a> {
    Idle,
    Loading,
    Success(&'a ValuationResponse),
    Error(&'a str),
}

impl ViewState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            Phase::Loading
        } else if let Some(result) = &self.result {
            Phase::Success(result)
        } else if let Some(error) = &self.error {
            Phase::Error(error)
        } else {
            Phase::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LanguageChanged(Language),
    Submitted { seq: u64, domain: String },
    Resolved { seq: u64, result: ValuationResponse },
    Failed { seq: u64 },
}

pub fn reduce(mut state: ViewState, event: Event) -> ViewState {
    match event {
        Event::LanguageChanged(language) => {
            state.language = language;
            if state.error.is_some() {
                state.error = Some(translations(language).error.to_string());
            }
        }
        Event::Submitted { seq, domain } => {
            let domain = domain.trim();
            if domain.is_empty() {
                return state;
            }
            state.request_seq = seq;
            state.loading = true;
            state.error = None;
            state.result = None;
            state.searched_domain = domain.to_string();
        }
        Event::Resolved { seq, result } => {
            if seq != state.request_seq {
                tracing::debug!("Dropping stale valuation #{} (latest is #{})", seq, state.request_seq);
                return state;
            }
            state.loading = false;
            state.error = None;
            state.result = Some(result);
        }
        Event::Failed { seq } => {
            if seq != state.request_seq {
                tracing::debug!("Dropping stale failure #{} (latest is #{})", seq, state.request_seq);
                return state;
            }
            state.loading = false;
            state.result = None;
            state.error = Some(translations(state.language).error.to_string());
        }
    }
    state
}

/// Owns the view state and runs valuation calls as background tasks.
pub struct Controller {
    service: Arc<dyn ValuationService>,
    state: ViewState,
    tasks: JoinSet<Event>,
}

impl Controller {
    pub fn new(service: Arc<dyn ValuationService>, language: Language) -> Self {
        Self {
            service,
            state: ViewState::new(language),
            tasks: JoinSet::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    pub fn set_language(&mut self, language: Language) {
        tracing::debug!("Language changed to {}", language);
        self.dispatch(Event::LanguageChanged(language));
    }

    /// Starts a valuation. Blank input is ignored and returns `None`.
    ///
    /// Must be called inside a tokio runtime.
    pub fn submit(&mut self, domain: &str) -> Option<u64> {
        let domain = domain.trim();
        if domain.is_empty() {
            tracing::debug!("Ignoring empty domain submission");
            return None;
        }

        let seq = self.state.request_seq + 1;
        self.dispatch(Event::Submitted {
            seq,
            domain: domain.to_string(),
        });
        tracing::info!("Valuing {} (request #{})", domain, seq);

        let service = Arc::clone(&self.service);
        let language = self.state.language;
        let domain = domain.to_string();
        self.tasks.spawn(async move {
            // Own task: a panic in the service comes back as a JoinError.
            let call = tokio::spawn({
                let domain = domain.clone();
                async move { service.evaluate(&domain, language).await }
            });
            match call.await {
                Ok(Ok(result)) => Event::Resolved { seq, result },
                Ok(Err(e)) => {
                    tracing::error!(
                        "Valuation of {} failed: {} (Category: {:?}, Severity: {:?})",
                        domain,
                        e,
                        e.category(),
                        e.severity()
                    );
                    Event::Failed { seq }
                }
                Err(e) => {
                    tracing::error!("Valuation task for {} aborted: {}", domain, e);
                    Event::Failed { seq }
                }
            }
        });

        Some(seq)
    }

    /// Applies the next completion. Returns `false` when nothing is in flight.
    pub async fn next_completion(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(event)) => {
                self.dispatch(event);
                true
            }
            Some(Err(e)) => {
                tracing::error!("Valuation task lost: {}", e);
                true
            }
            None => false,
        }
    }

    /// Applies completions until the latest submission has committed.
    pub async fn settle(&mut self) {
        while self.state.loading && self.next_completion().await {}
    }
}
