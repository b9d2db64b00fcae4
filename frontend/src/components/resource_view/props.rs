//! Defines the properties for the `ResourceViewComponent`.

use common::model::resource::ResourceKind;
use yew::prelude::*;

/// Properties for the `ResourceViewComponent`.
///
/// The kind is read once, when the component is created. Switching to
/// another collection is done by remounting the component (the parent keys
/// it by kind), which starts a fresh, independent fetch.
#[derive(Properties, PartialEq, Clone)]
pub struct ResourceViewProps {
    /// Collection this view lists. Users additionally get the edit form.
    pub kind: ResourceKind,
}
