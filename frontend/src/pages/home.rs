use yew::prelude::*;

use crate::components::courtroom::CourtroomSimulator;
use crate::components::features::Features;
use crate::components::free_query::FreeQuery;
use crate::components::hero::Hero;
use crate::components::pricing::Pricing;
use crate::components::role_gateway::RoleGateway;
use crate::components::stats::Stats;
use crate::components::template_gallery::TemplateGallery;
use crate::components::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Hero />
            <Stats />
            <FreeQuery />
            <TemplateGallery />
            <Features />
            <CourtroomSimulator />
            <RoleGateway />
            <Pricing />
            <Testimonials />
        </main>
    }
}
