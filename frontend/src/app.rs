use common::model::resource::ResourceKind;
use yew::{classes, html, Component, Context, Html};

use crate::components::resource_view::ResourceViewComponent;

pub enum Msg {
    Show(Option<ResourceKind>),
}

/// Top-level shell: navigation bar and the active view.
///
/// Each view is keyed by its kind, so switching views unmounts the old one
/// and mounts a fresh one with its own fetch.
pub struct App {
    active: Option<ResourceKind>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { active: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(kind) => {
                let changed = self.active != kind;
                self.active = kind;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="App">
                <nav class="navbar navbar-expand-lg navbar-dark bg-dark sticky-top">
                    <div class="container-fluid">
                        <a class="navbar-brand" href="#" onclick={link.callback(|e: web_sys::MouseEvent| {
                            e.prevent_default();
                            Msg::Show(None)
                        })}>{"OctoFit Tracker"}</a>
                        <ul class="navbar-nav ms-auto">
                            { for ResourceKind::ALL.into_iter().map(|kind| html! {
                                <li class="nav-item" key={kind.collection_path()}>
                                    <a
                                        class={classes!("nav-link", (self.active == Some(kind)).then_some("active"))}
                                        href={format!("#/{}", kind.collection_path())}
                                        onclick={link.callback(move |e: web_sys::MouseEvent| {
                                            e.prevent_default();
                                            Msg::Show(Some(kind))
                                        })}
                                    >
                                        { kind.title() }
                                    </a>
                                </li>
                            }) }
                        </ul>
                    </div>
                </nav>
                {
                    match self.active {
                        Some(kind) => html! {
                            <ResourceViewComponent key={kind.collection_path()} kind={kind} />
                        },
                        None => home(),
                    }
                }
            </div>
        }
    }
}

fn home() -> Html {
    html! {
        <div class="container mt-5">
            <div class="text-center">
                <h1 class="display-4">{"Welcome to OctoFit Tracker"}</h1>
                <p class="lead">{"Track your fitness activities, join teams, and compete on the leaderboard."}</p>
            </div>
        </div>
    }
}
