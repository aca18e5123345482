//! Membership-request row with approve/reject actions while pending.

#[cfg(test)]
#[path = "request_card_test.rs"]
mod request_card_test;

use leptos::prelude::*;

use crate::net::types::{JoinRequest, RequestStatus};
use crate::state::team_view::RequestAction;

/// Badge class for a request status.
fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge badge-pending",
        RequestStatus::Approved => "badge badge-approved",
        RequestStatus::Rejected => "badge badge-rejected",
    }
}

/// A list row for one membership request. Decision buttons render only
/// while the request is pending.
#[component]
pub fn RequestCard(request: JoinRequest, on_decide: Callback<(i64, RequestAction)>) -> impl IntoView {
    let request_id = request.id;
    let pending = request.status == RequestStatus::Pending;
    let title = format!("Request #{}", request.id);
    let meta = format!("From user: {} • {}", request.user_id, request.created_at);

    view! {
        <div class="list-item">
            <h3>
                {title}
                " "
                <span class=status_badge_class(request.status)>{request.status.as_str()}</span>
            </h3>
            <div class="meta">{meta}</div>
            <Show when=move || pending>
                <div class="actions">
                    <button
                        class="btn btn-small"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_decide.run((request_id, RequestAction::Approve));
                        }
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_decide.run((request_id, RequestAction::Reject));
                        }
                    >
                        "Reject"
                    </button>
                </div>
            </Show>
        </div>
    }
}
