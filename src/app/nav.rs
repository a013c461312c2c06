use leptos::prelude::*;

use crate::page::{section::Section, PageEvent};

use super::controller::PageController;

#[component]
pub fn NavBar() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let menu_open = Memo::new(move |_| controller.with(|state| state.menu_open));

    view! {
        <nav class="fixed top-0 w-full bg-white/90 backdrop-blur-sm shadow-sm z-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        "Portfolio"
                    </div>
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section /> })
                            .collect_view()}
                    </div>
                    <button
                        class="md:hidden text-2xl text-gray-700"
                        aria-label="Toggle menu"
                        on:click=move |_| controller.dispatch(PageEvent::ToggleMenu)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-t">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="block w-full text-left px-4 py-3 hover:bg-gray-50"
                                    on:click=move |_| controller.navigate(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(section: Section) -> impl IntoView {
    let controller = expect_context::<PageController>();
    let active = Memo::new(move |_| controller.with(|state| state.active == section));

    view! {
        <button
            class=move || {
                if active.get() {
                    "transition-colors text-blue-600 font-semibold"
                } else {
                    "transition-colors text-gray-600 hover:text-blue-600"
                }
            }
            aria-current=move || active.get().then_some("true")
            on:click=move |_| controller.navigate(section)
        >
            {section.label()}
        </button>
    }
}
