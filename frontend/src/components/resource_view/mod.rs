//! Resource list view: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ResourceViewProps`, `ResourceViewComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, issue the list fetch (and the team option fetch for users).

use yew::prelude::*;

mod columns;
mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResourceViewProps;
pub use state::ResourceViewComponent;

impl Component for ResourceViewComponent {
    type Message = Msg;
    type Properties = ResourceViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        ResourceViewComponent::new(ctx.props().kind)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let commands = self.controller.mount();
            update::run_commands(ctx, commands);
        }
    }
}
