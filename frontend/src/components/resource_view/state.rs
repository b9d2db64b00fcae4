//! Component state for the resource view.

use std::rc::Rc;

use common::model::resource::ResourceKind;

use crate::config::ApiConfig;
use crate::state::controller::ResourceController;
use crate::telemetry::ConsoleObserver;

/// Main state container for the `ResourceViewComponent`.
///
/// All list and edit state lives in the controller; the component only adds
/// the one-time initialization guard.
pub struct ResourceViewComponent {
    /// Engine owning the list phase, the edit sub-flow and the team options.
    pub controller: ResourceController,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ResourceViewComponent {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            controller: ResourceController::new(kind, ApiConfig::from_build_env(), Rc::new(ConsoleObserver)),
            loaded: false,
        }
    }
}
