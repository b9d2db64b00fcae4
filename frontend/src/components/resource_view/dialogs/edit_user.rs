//! Edit form for a user record, shown in a top sheet while the edit
//! sub-flow is open. Inputs and buttons are disabled during a save.

use common::model::team::TeamOption;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::resource_view::{Msg, ResourceViewComponent};
use crate::state::edit::{DraftField, EditFlow};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn edit_user_dialog(
    edit: &EditFlow,
    teams: &[TeamOption],
    link: &Scope<ResourceViewComponent>,
) -> Html {
    let Some(draft) = edit.draft().filter(|_| edit.is_open()) else {
        return html! {};
    };
    let saving = edit.is_saving();
    let selected_team = draft.team_id.clone().unwrap_or_default();
    let title = match edit.target().and_then(|target| target.id()) {
        Some(id) => format!("Edit User #{}", id),
        None => "Edit User".to_string(),
    };

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_name = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(DraftField::Name(input.value()))
    });
    let on_email = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(DraftField::Email(input.value()))
    });
    let on_team = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let value = select.value();
        Msg::EditField(DraftField::Team((!value.is_empty()).then_some(value)))
    });

    html! {
        <YwMaterialTopSheet open={true}>
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{ title }</h5>
                        <button type="button" class="btn-close" disabled={saving}
                            onclick={link.callback(|_| Msg::CancelEdit)}></button>
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="modal-body">
                            {
                                if let Some(message) = edit.error_message() {
                                    html! { <div class="alert alert-danger" role="alert">{ message }</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="mb-3">
                                <label for="user-name" class="form-label">{"Name"}</label>
                                <input id="user-name" type="text" class="form-control" required={true}
                                    value={draft.name.clone()} oninput={on_name} disabled={saving} />
                            </div>
                            <div class="mb-3">
                                <label for="user-email" class="form-label">{"Email"}</label>
                                <input id="user-email" type="text" class="form-control" required={true}
                                    value={draft.email.clone()} oninput={on_email} disabled={saving} />
                            </div>
                            <div class="mb-3">
                                <label for="user-team" class="form-label">{"Team"}</label>
                                <select id="user-team" class="form-select" onchange={on_team} disabled={saving}>
                                    <option value="" selected={selected_team.is_empty()}>{"No Team"}</option>
                                    { for teams.iter().map(|team| html! {
                                        <option key={team.id.clone()} value={team.id.clone()}
                                            selected={team.id == selected_team}>{ team.name.clone() }</option>
                                    }) }
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" disabled={saving}
                                onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancel"}</button>
                            <button type="submit" class="btn btn-primary" disabled={saving}>
                                { if saving { "Saving..." } else { "Save Changes" } }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}
