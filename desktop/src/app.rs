use std::rc::Rc;

use registration::{Action, Registration};
use web_sys::File;
use yew::prelude::*;

use crate::ui::register::RegisterForm;
use crate::ui::style::*;
use crate::ui::success::SuccessView;

#[derive(Clone, Default, PartialEq)]
pub struct RegistrationStore(pub Registration<File>);

impl Reducible for RegistrationStore {
    type Action = Action<File>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let RegistrationStore(current) = Rc::unwrap_or_clone(self);
        Rc::new(RegistrationStore(current.reduce(action)))
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(RegistrationStore::default);
    let ondispatch = {
        let store = store.clone();
        Callback::from(move |action: Action<File>| store.dispatch(action))
    };
    let RegistrationStore(registration) = &*store;

    html! {
        <div class={container_style().clone()}>
            <h1 class={header_style().clone()}>{ "🎉 Mini Greeting App" }</h1>
            if let Some(greeting) = registration.greeting() {
                <SuccessView {greeting} image={registration.form.image.clone()} />
            } else {
                <RegisterForm registration={registration.clone()} {ondispatch} />
            }
        </div>
    }
}
