use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::{config::ViewConfig, content::content};

use super::{
    about::About, contact::Contact, controller::PageController, footer::Footer, hero::Hero,
    nav::NavBar, projects::Projects,
};

/// The whole single-page site. Creates the page controller that every
/// section reads from.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let controller = PageController::new(ViewConfig::default());
    provide_context(controller);

    match content() {
        Ok(content) => {
            let profile = &content.profile;
            Either::Left(view! {
                <Title text=profile.name.as_str() />
                <NavBar />
                <Hero profile />
                <About profile />
                <Projects projects=content.projects.as_slice() />
                <Contact links=profile.links.as_slice() />
                <Footer profile />
            })
        }
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <NavBar />
                <p class="pt-32 text-center text-gray-600">"This page is temporarily unavailable."</p>
            })
        }
    }
}
