use leptos::prelude::*;

use crate::{content::Profile, page::{reveal::RevealTarget, section::Section}};

use super::{controller::PageController, reveal::FadeIn};

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let controller = expect_context::<PageController>();

    view! {
        <section id=Section::Home.id() class="pt-32 pb-20 px-4 sm:px-6 lg:px-8">
            <FadeIn target=RevealTarget::Hero class="max-w-6xl mx-auto text-center space-y-6">
                <div class="w-32 h-32 mx-auto bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-white text-5xl font-bold">
                    {profile.initials.as_str()}
                </div>
                <h1 class="text-5xl sm:text-6xl font-bold text-gray-900">
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {profile.name.as_str()}
                    </span>
                </h1>
                <p class="text-xl sm:text-2xl text-gray-600 max-w-2xl mx-auto">
                    {profile.headline.as_str()}
                </p>
                <p class="text-lg text-gray-500 max-w-xl mx-auto">{profile.intro.as_str()}</p>
                <div class="flex gap-4 justify-center pt-4">
                    <button
                        class="px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
                        on:click=move |_| controller.navigate(Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="px-4 py-2 rounded-md border border-gray-300 hover:bg-gray-50 transition-colors"
                        on:click=move |_| controller.navigate(Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
            </FadeIn>
        </section>
    }
}
