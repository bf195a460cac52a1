//! Contact form: hands the message to the visitor's mail client through a
//! `mailto:` link. Fields are not validated; empty ones stay empty lines.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlFormElement, Window};

use crate::constants::MESSAGE_SENT_TEXT;
use crate::dom_utils::field_value;
use crate::scheduler::Listener;
use crate::toast;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn from_form(document: &Document) -> Self {
        ContactMessage {
            name: field_value(document, "name"),
            email: field_value(document, "email"),
            subject: field_value(document, "subject"),
            message: field_value(document, "message"),
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// `mailto:` URI with `encode` applied to the subject and body.
    pub fn mailto_with<E>(&self, address: &str, encode: E) -> String
    where
        E: Fn(&str) -> String,
    {
        format!(
            "mailto:{}?subject={}&body={}",
            address,
            encode(&self.subject),
            encode(&self.body())
        )
    }

    /// Browser `encodeURIComponent` encoding.
    pub fn mailto(&self, address: &str) -> String {
        self.mailto_with(address, |raw| String::from(js_sys::encode_uri_component(raw)))
    }
}

pub fn mount(window: &Window, document: &Document, address: String) -> Result<Option<Listener>, JsValue> {
    let Some(form) = document.get_element_by_id("contact-form") else {
        return Ok(None);
    };
    let (window, document, form_ref) = (window.clone(), document.clone(), form.clone());
    let listener = Listener::new(&form, "submit", move |event| {
        event.prevent_default();
        let link = ContactMessage::from_form(&document).mailto(&address);
        if let Err(e) = window.location().set_href(&link) {
            crate::warn_log!("Failed to open mail client: {:?}", e);
        }
        toast::success(MESSAGE_SENT_TEXT);
        if let Some(form) = form_ref.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    })?;
    Ok(Some(listener))
}
