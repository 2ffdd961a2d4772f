use web_sys::{File, Url};
use yew::prelude::*;

use crate::ui::style::*;

#[derive(Properties, PartialEq)]
pub struct SuccessViewProps {
    pub greeting: String,
    #[prop_or_default]
    pub image: Option<File>,
}

fn preview_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Could not create a preview for {}: {e:?}", file.name());
            None
        }
    }
}

#[function_component(SuccessView)]
pub fn success_view(props: &SuccessViewProps) -> Html {
    // One object URL for the lifetime of the view, released on unmount.
    let preview = use_state(|| props.image.as_ref().and_then(preview_url));
    {
        let preview = (*preview).clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(url) = preview {
                    if let Err(e) = Url::revoke_object_url(&url) {
                        log::warn!("Could not release preview {url}: {e:?}");
                    }
                }
            }
        });
    }

    html! {
        <div>
            <h2>{ &props.greeting }</h2>
            <p class={paragraph_style()}>{ "Your registration was successful." }</p>
            if let Some(src) = &*preview {
                <img class={preview_style()} src={src.clone()} alt="Uploaded" />
            }
        </div>
    }
}
