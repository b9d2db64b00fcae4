use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Cards per row on wide screens.
    pub columns: usize,
    pub children: Children,
}

/// Responsive grid used by the card layouts (teams, workouts).
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax(max(260px, calc(100% / {} - 1.5rem)), 1fr));
             gap: 1.5rem;",
            props.columns.max(1)
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
