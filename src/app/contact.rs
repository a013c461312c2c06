use leptos::prelude::*;

use crate::{
    content::ContactLink,
    page::{form::Field, reveal::RevealTarget, section::Section, PageEvent},
};

use super::{controller::PageController, reveal::FadeIn};

#[component]
pub fn Contact(links: &'static [ContactLink]) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-4 text-gray-900">"Get In Touch"</h2>
                <p class="text-center text-gray-600 mb-12">
                    "I'm always open to discussing new projects, opportunities, or just chatting about tech!"
                </p>
                <div class="grid md:grid-cols-2 gap-12">
                    <FadeIn target=RevealTarget::ContactForm class="space-y-6">
                        <h3 class="text-2xl font-semibold mb-4">"Contact Form"</h3>
                        <ContactForm />
                    </FadeIn>
                    <FadeIn target=RevealTarget::ContactLinks class="space-y-6">
                        <h3 class="text-2xl font-semibold mb-4">"Connect With Me"</h3>
                        <div class="space-y-4">
                            {links
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href.as_str()
                                            target=(!link.href.starts_with("mailto:")).then_some("_blank")
                                            rel="noopener noreferrer"
                                            class="flex items-center gap-3 p-4 bg-gray-50 rounded-lg hover:bg-gray-100 transition-colors"
                                        >
                                            <i class=format!("{} text-2xl text-gray-700", link.icon)></i>
                                            <div>
                                                <p class="font-semibold text-gray-900">
                                                    {link.label.as_str()}
                                                </p>
                                                <p class="text-sm text-gray-600">{link.handle.as_str()}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </FadeIn>
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
fn ContactForm() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let submitted = Memo::new(move |_| controller.with(|state| state.submitted));
    let value = move |field: Field| controller.with(|state| state.draft.get(field).to_string());

    view! {
        <Show when=move || submitted.get()>
            <div role="alert" class="p-4 rounded-lg border bg-green-50 border-green-200 text-green-800">
                "Thank you! Your message has been sent successfully."
            </div>
        </Show>
        <form
            class="space-y-4"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                controller.dispatch(PageEvent::Submitted);
            }
        >
            <div>
                <label for="contact-name" class="block text-sm font-medium mb-2 text-gray-700">
                    "Name"
                </label>
                <input
                    id="contact-name"
                    name=Field::Name.name()
                    class=INPUT_CLASS
                    placeholder="Your name"
                    prop:value=move || value(Field::Name)
                    on:input=move |ev| controller.edit(ev)
                />
            </div>
            <div>
                <label for="contact-email" class="block text-sm font-medium mb-2 text-gray-700">
                    "Email"
                </label>
                // type=email only picks the mobile keyboard
                <input
                    id="contact-email"
                    type="email"
                    name=Field::Email.name()
                    class=INPUT_CLASS
                    placeholder="your.email@example.com"
                    prop:value=move || value(Field::Email)
                    on:input=move |ev| controller.edit(ev)
                />
            </div>
            <div>
                <label for="contact-message" class="block text-sm font-medium mb-2 text-gray-700">
                    "Message"
                </label>
                <textarea
                    id="contact-message"
                    name=Field::Message.name()
                    class=INPUT_CLASS
                    placeholder="Your message..."
                    rows=4
                    prop:value=move || value(Field::Message)
                    on:input=move |ev| controller.edit(ev)
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full px-4 py-2 rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
            >
                "Send Message"
            </button>
        </form>
    }
}
