use leptos::prelude::*;

use crate::{content::Profile, page::{reveal::RevealTarget, section::Section}};

use super::reveal::FadeIn;

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12 text-gray-900">"About Me"</h2>
                <FadeIn target=RevealTarget::AboutIntro class="grid md:grid-cols-2 gap-12 items-center mb-16">
                    <div class="space-y-4">
                        {profile
                            .about
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-lg text-gray-700 leading-relaxed">
                                        {paragraph.as_str()}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="bg-gradient-to-br from-blue-100 to-purple-100 rounded-lg p-8 h-full flex items-center justify-center">
                        <div class="text-center space-y-4">
                            <i class="devicon-rust-plain text-7xl text-blue-600"></i>
                            <p class="text-lg font-semibold text-gray-800">
                                {profile.callout.title.as_str()}
                            </p>
                            <p class="text-gray-600">{profile.callout.text.as_str()}</p>
                        </div>
                    </div>
                </FadeIn>
                <h3 class="text-3xl font-bold text-center mb-8 text-gray-900">
                    "Skills & Expertise"
                </h3>
                <FadeIn target=RevealTarget::Skills class="grid md:grid-cols-3 gap-6">
                    {profile
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="rounded-lg border bg-white p-6 shadow-sm hover:shadow-lg transition-shadow">
                                    <i class=format!("{} text-5xl text-blue-600 mb-2", skill.icon)></i>
                                    <h4 class="text-xl font-semibold text-gray-900">
                                        {skill.name.as_str()}
                                    </h4>
                                    <p class="text-sm text-gray-500">{skill.description.as_str()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </FadeIn>
            </div>
        </section>
    }
}
