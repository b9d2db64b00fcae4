use uuid::Uuid;
use yew::{classes, html, Component, Context, Html, Properties};

/// Overlay sheet sliding in from the top, used as the modal container of
/// the edit form. Visibility is driven by the `open` prop.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                class={classes!("top-sheet", "modal", "d-block", props.open.then_some("show"))}
                id={self.id.clone()}
                tabindex="-1"
                role="dialog"
                aria-modal="true"
                style="background-color: rgba(0,0,0,0.5);"
            >
                { props.children.clone() }
            </div>
        }
    }
}
