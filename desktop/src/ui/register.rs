use registration::{Action, ErrorMap, Field, FieldChange, PasswordStrength, Registration};
use stylist::{css, Style};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::ui::style::*;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub registration: Registration<File>,
    pub ondispatch: Callback<Action<File>>,
}

/// Reads whatever the input currently holds and turns it into a typed change.
/// The input's `name` attribute decides which field it belongs to.
pub fn change_from_input(input: &HtmlInputElement) -> Result<FieldChange<File>, String> {
    let file = input.files().and_then(|files| files.get(0));
    FieldChange::from_input(&input.name(), input.value(), input.checked(), file)
}

fn dispatch_change(ondispatch: &Callback<Action<File>>, input: HtmlInputElement) {
    match change_from_input(&input) {
        Ok(change) => ondispatch.emit(Action::Change(change)),
        Err(e) => log::warn!("Ignoring input event: {e}"),
    }
}

fn field_error(errors: &ErrorMap, field: Field) -> Html {
    match errors.message(field) {
        Some(message) => html! { <span class={error_style()}>{ message }</span> },
        None => html! {},
    }
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let form = &props.registration.form;
    let errors = &props.registration.errors;

    let on_input = {
        let ondispatch = props.ondispatch.clone();
        Callback::from(move |e: InputEvent| dispatch_change(&ondispatch, e.target_unchecked_into()))
    };
    let on_change = {
        let ondispatch = props.ondispatch.clone();
        Callback::from(move |e: Event| dispatch_change(&ondispatch, e.target_unchecked_into()))
    };
    let on_submit = {
        let ondispatch = props.ondispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ondispatch.emit(Action::Submit);
        })
    };

    let form_style = Style::new(css!(r#"
            display: flex;
            flex-direction: column;
            align-items: stretch;
            min-width: 20em;
        "#
    )).expect("Error creating form style");

    let label_style = Style::new(css!(r#"
            display: flex;
            flex-direction: column;
            text-align: left;
            font-weight: bold;
            margin-bottom: 0.5em;
        "#
    )).expect("Error creating label style");

    let checkbox_style = Style::new(css!(r#"
            display: flex;
            flex-direction: row;
            align-items: center;
            gap: 0.5em;
            margin-bottom: 1em;
        "#
    )).expect("Error creating checkbox style");

    let input_style = Style::new(css!(r#"
            padding: 0.5em;
            margin-top: 0.25em;
            margin-bottom: 0.75em;
            border-radius: 4px;
            border: 1px solid #aaa;
            outline: none;
            font-weight: normal;
        "#
    )).expect("Error creating input style");

    let strength_style = Style::new(css!(r#"
            font-weight: normal;
            font-size: 0.85em;
            color: #777;
            margin-bottom: 0.75em;
        "#
    )).expect("Error creating strength style");

    let button_style = Style::new(css!(r#"
            padding: 0.5em 1em;
            color: white;
            border: none;
            border-radius: 25px;
            cursor: pointer;
            align-self: center;
            width: 50%;
            transition: background 0.3s, border-radius 0.3s;
            background: rgba(0,0,0,0.5);

            &:hover {
                background: rgba(0,0,0,0.7);
                border-radius: 10px;
            }

            &:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }
        "#
    )).expect("Error creating button style");

    html! {
        <form class={form_style} onsubmit={on_submit}>
            <label class={label_style.clone()}>
                { "Name:" }
                <input class={input_style.clone()} type="text" name="name" value={form.name.clone()} oninput={on_input.clone()} />
                { field_error(errors, Field::Name) }
            </label>

            <label class={label_style.clone()}>
                { "Email:" }
                <input class={input_style.clone()} type="email" name="email" value={form.email.clone()} oninput={on_input.clone()} />
                { field_error(errors, Field::Email) }
            </label>

            <label class={label_style.clone()}>
                { "Password:" }
                <input class={input_style.clone()} type="password" name="password" value={form.password.clone()} oninput={on_input.clone()} />
                { field_error(errors, Field::Password) }
                <div class={strength_style}>{ format!("Strength: {}", PasswordStrength::of(&form.password)) }</div>
            </label>

            <label class={label_style.clone()}>
                { "Confirm Password:" }
                <input class={input_style.clone()} type="password" name="confirmPassword" value={form.confirm_password.clone()} oninput={on_input} />
                { field_error(errors, Field::ConfirmPassword) }
            </label>

            <label class={label_style}>
                <span>
                    { "Upload Picture:" }
                    <Icon width={"1.25em".to_owned()} height={"1.25em".to_owned()} class={icon_style()} icon_id={IconId::LucideUpload} />
                </span>
                <input class={input_style} type="file" name="image" accept="image/*" onchange={on_change.clone()} />
            </label>

            <label class={checkbox_style}>
                <input type="checkbox" name="terms" checked={form.terms} onchange={on_change} />
                { "I agree to the terms and conditions" }
            </label>

            <button class={button_style} type="submit" disabled={!props.registration.can_submit()}>
                { "Register" }
            </button>
        </form>
    }
}
