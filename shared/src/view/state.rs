use crate::dto::analysis::AnalysisPayload;
use crate::error::FetchError;

/// Lifecycle of the analytics view.
///
/// `Ready` and `Failed` are terminal: only remounting the view (and with it a
/// fresh `Loading`) leaves them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Ready(AnalysisPayload),
    Failed(String),
}

impl ViewState {
    pub fn from_result(result: Result<AnalysisPayload, FetchError>) -> Self {
        match result {
            Ok(payload) => ViewState::Ready(payload),
            Err(e) => ViewState::Failed(e.user_message().to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// Applies a fetch result. Returns `false` and leaves the state untouched
    /// when the state is already terminal.
    pub fn resolve(&mut self, result: Result<AnalysisPayload, FetchError>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = ViewState::from_result(result);
        true
    }

    pub fn payload(&self) -> Option<&AnalysisPayload> {
        match self {
            ViewState::Ready(payload) => Some(payload),
            _ => None,
        }
    }
}
