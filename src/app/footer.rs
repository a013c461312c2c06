use leptos::prelude::*;

use crate::content::{build_year, Profile};

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let copyright = match build_year() {
        Some(year) => format!("© {year} {}. {}", profile.name, profile.credit),
        None => format!("© {}. {}", profile.name, profile.credit),
    };

    view! {
        <footer class="py-8 px-4 bg-gray-900 text-white text-center">
            <p>{copyright}</p>
        </footer>
    }
}
