use leptos::prelude::*;

use crate::{content::Project, page::{reveal::RevealTarget, section::Section}};

use super::reveal::FadeIn;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-12 text-gray-900">
                    "Featured Projects"
                </h2>
                <FadeIn target=RevealTarget::ProjectsGrid class="grid md:grid-cols-2 gap-8">
                    {projects
                        .iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </FadeIn>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="rounded-lg border bg-white overflow-hidden shadow-sm hover:shadow-xl transition-shadow">
            <img
                src=project.image.as_str()
                alt=project.title.as_str()
                class="w-full h-48 object-cover"
            />
            <div class="p-6 space-y-2">
                <h3 class="text-xl font-semibold text-gray-900">{project.title.as_str()}</h3>
                <p class="text-sm text-gray-500">{project.description.as_str()}</p>
            </div>
            <div class="px-6 flex flex-wrap gap-2">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-blue-100 text-blue-700 rounded-full text-sm font-medium">
                                {tech.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="p-6 flex gap-4 text-sm">
                <a
                    href=project.source.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-1 text-gray-600 hover:text-blue-600"
                >
                    <i class="devicon-github-plain"></i>
                    "Source"
                </a>
                <a
                    href=project.live.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-1 text-gray-600 hover:text-blue-600"
                >
                    "Live ↗"
                </a>
            </div>
        </article>
    }
}
