//! Contact row with an inline delete action.

use leptos::prelude::*;

use crate::net::types::Contact;

/// A list row for one team contact.
#[component]
pub fn ContactCard(contact: Contact, on_delete: Callback<i64>) -> impl IntoView {
    let contact_id = contact.id;
    let meta = format!("TG: {} • ID: {}", contact.telegram_contact, contact.id);

    view! {
        <div class="list-item">
            <h3>{contact.name}</h3>
            <div class="meta">{meta}</div>
            <div class="actions">
                <button
                    class="btn btn-small btn-secondary"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(contact_id);
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
