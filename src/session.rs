use crate::api::Endpoint;
use crate::config::DashboardConfig;
use crate::models::DashboardBundle;
use crate::orchestrator::{FetchFailure, Orchestrator};
use crate::statement::{self, ClientStatement};
use crate::tabs::{self, ContentDescriptor, Tab};
use std::rc::Rc;
use yew::functional::Reducible;

/// The only failure text the user ever sees; causes go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error cargando datos del orquestador";

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Loading,
    Ready(Rc<DashboardBundle>),
    Error(String),
}

#[derive(Debug)]
pub enum SessionEvent {
    Loaded(DashboardBundle),
    Failed(FetchFailure),
    SelectTab(Tab),
    Search(String),
    ClearSearch,
}

/// One page session. Every event produces a new snapshot; nothing is mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub phase: Phase,
    pub active_tab: Tab,
    pub search: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            active_tab: Tab::default(),
            search: None,
        }
    }
}

impl SessionState {
    pub fn bundle(&self) -> Option<&DashboardBundle> {
        match &self.phase {
            Phase::Ready(bundle) => Some(bundle.as_ref()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn apply(&self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::Loaded(bundle) => {
                if self.phase != Phase::Loading {
                    log::warn!("ignoring late dashboard bundle; session already settled");
                    return self.clone();
                }
                SessionState {
                    phase: Phase::Ready(Rc::new(bundle)),
                    ..self.clone()
                }
            }
            SessionEvent::Failed(failure) => {
                if self.phase != Phase::Loading {
                    log::warn!("ignoring late failure ({}); session already settled", failure);
                    return self.clone();
                }
                log::error!("dashboard load failed: {}", failure);
                SessionState {
                    phase: Phase::Error(GENERIC_FAILURE_MESSAGE.to_string()),
                    ..self.clone()
                }
            }
            SessionEvent::SelectTab(tab) => SessionState {
                active_tab: tab,
                ..self.clone()
            },
            SessionEvent::Search(query) => {
                let query = query.trim();
                SessionState {
                    search: (!query.is_empty()).then(|| query.to_string()),
                    ..self.clone()
                }
            }
            SessionEvent::ClearSearch => SessionState {
                search: None,
                ..self.clone()
            },
        }
    }

    /// What the active tab shows. `None` until the bundle is in.
    pub fn content(&self, config: &DashboardConfig) -> Option<ContentDescriptor> {
        self.bundle()
            .map(|bundle| tabs::select(self.active_tab, bundle, config))
    }

    pub fn statement(&self) -> Option<ClientStatement> {
        let query = self.search.as_deref()?;
        statement::find(self.bundle()?, query)
    }
}

impl Reducible for SessionState {
    type Action = SessionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Runs the one acquisition of a session and turns its outcome into an event.
pub async fn load<E: Endpoint>(orchestrator: &Orchestrator<E>) -> SessionEvent {
    match orchestrator.load_all().await {
        Ok(bundle) => SessionEvent::Loaded(bundle),
        Err(failure) => SessionEvent::Failed(failure),
    }
}
