use yew::prelude::*;

use crate::components::template_gallery::TemplateGallery;

#[function_component(Templates)]
pub fn templates() -> Html {
    html! {
        <main class="templates-page">
            <TemplateGallery standalone=true />
        </main>
    }
}
