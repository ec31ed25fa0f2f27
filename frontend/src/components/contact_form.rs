use yew::prelude::*;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;

use crate::components::toast::Toaster;
use crate::config;
use crate::contact::transport::HttpTransport;
use crate::contact::{self, ContactFields, Field, FormSubmissionState, SubmissionView};

fn default_action() -> AttrValue {
    AttrValue::from(config::contact_endpoint())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(default_action)]
    pub action: AttrValue,
}

/// Form state held in component hooks.
#[derive(Clone)]
struct FormHandles {
    form: NodeRef,
    fields: UseStateHandle<ContactFields>,
    validated: UseStateHandle<bool>,
    state: UseStateHandle<FormSubmissionState>,
}

impl SubmissionView for FormHandles {
    fn fields(&self) -> ContactFields {
        (*self.fields).clone()
    }

    fn state(&self) -> FormSubmissionState {
        *self.state
    }

    fn check_validity(&self) -> bool {
        match self.form.cast::<HtmlFormElement>() {
            Some(form) => form.check_validity(),
            None => self.fields().is_valid(),
        }
    }

    fn set_validated(&self, validated: bool) {
        self.validated.set(validated);
    }

    fn set_state(&self, state: FormSubmissionState) {
        self.state.set(state);
    }

    fn reset_fields(&self) {
        self.fields.set(ContactFields::default());
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let handles = FormHandles {
        form: use_node_ref(),
        fields: use_state(ContactFields::default),
        validated: use_state(|| false),
        state: use_state(FormSubmissionState::default),
    };
    let toaster = use_context::<Toaster>();

    let onsubmit = {
        let handles = handles.clone();
        let action = props.action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !handles.check_validity() {
                e.stop_propagation();
            }

            let handles = handles.clone();
            let action = action.clone();
            let toaster = toaster.clone().unwrap_or_else(Toaster::detached);
            spawn_local(async move {
                contact::submit(&action, &HttpTransport, &handles, &toaster).await;
            });
        })
    };

    let update = {
        let fields = handles.fields.clone();
        move |field: Field, value: String| {
            let mut next = (*fields).clone();
            next.set(field, value);
            fields.set(next);
        }
    };

    let on_field = |field: Field| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            update(field, target.value());
        })
    };

    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            update(Field::Message, target.value());
        })
    };

    let sending = handles.state.is_sending();
    let fields = &*handles.fields;

    html! {
        <form
            id="contactForm"
            ref={handles.form.clone()}
            action={props.action.clone()}
            method="post"
            novalidate=true
            class={classes!("needs-validation", (*handles.validated).then(|| "was-validated"))}
            {onsubmit}
        >
            <div class="row g-3">
                <div class="col-md-6">
                    <label for="name" class="form-label">{"Name"}</label>
                    <input type="text" class="form-control" id="name" name="name" required=true
                        value={fields.name.clone()} oninput={on_field(Field::Name)} />
                    <div class="invalid-feedback">{"Please enter your name."}</div>
                </div>
                <div class="col-md-6">
                    <label for="email" class="form-label">{"Email"}</label>
                    <input type="email" class="form-control" id="email" name="email" required=true
                        value={fields.email.clone()} oninput={on_field(Field::Email)} />
                    <div class="invalid-feedback">{"Please enter a valid email address."}</div>
                </div>
                <div class="col-12">
                    <label for="subject" class="form-label">{"Subject"}</label>
                    <input type="text" class="form-control" id="subject" name="subject" required=true
                        value={fields.subject.clone()} oninput={on_field(Field::Subject)} />
                    <div class="invalid-feedback">{"Please enter a subject."}</div>
                </div>
                <div class="col-12">
                    <label for="message" class="form-label">{"Message"}</label>
                    <textarea class="form-control" id="message" name="message" rows="5" required=true
                        value={fields.message.clone()} oninput={on_message} />
                    <div class="invalid-feedback">{"Please tell us about your project."}</div>
                </div>
                <div class="col-12">
                    <button type="submit" class="btn btn-primary" disabled={sending}>
                        <span class="submit-text">{ handles.state.label() }</span>
                        <span
                            class={classes!("spinner-border", "spinner-border-sm", "ms-2", (!sending).then(|| "d-none"))}
                            role="status"
                            aria-hidden="true"
                        ></span>
                    </button>
                </div>
            </div>
        </form>
    }
}
