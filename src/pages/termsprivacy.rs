use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms & Conditions"}</h1>
            <p class="updated">{"Last updated: August 2026"}</p>

            <h2>{"1. The Service"}</h2>
            <p>{"Sublime Mind is a mobile application by Vinisbir Technologies for finding, remembering, and sharing peaceful places. This website is informational only; downloading and using the app is governed by the terms shown in the app stores."}</p>

            <h2>{"2. Content You Share"}</h2>
            <p>{"Locations, photos, and reflections you choose to share on the global map remain yours. By sharing them you grant other users the right to view them inside the app."}</p>

            <h2>{"3. Acceptable Use"}</h2>
            <p>{"Do not publish locations that are private property, unsafe to visit, or that you do not have the right to share."}</p>

            <h2>{"4. Changes"}</h2>
            <p>{"We may update these terms; material changes are announced inside the app."}</p>

            <div class="legal-back">
                <Link<Route> to={Route::Home}>{"Back to the site"}</Link<Route>>
            </div>

            <LegalPageStyle />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p class="updated">{"Last updated: August 2026"}</p>

            <h2>{"1. What This Site Collects"}</h2>
            <p>{"This website collects nothing. There are no analytics, no cookies set by us, and the contact form does not transmit anywhere."}</p>

            <h2>{"2. What The App Collects"}</h2>
            <p>{"Sublime Mind stores the places you save. Locations marked private never leave your personal map. Locations you share are visible to the community together with the photos and reflections you attach."}</p>

            <h2>{"3. Your Choices"}</h2>
            <p>{"Every location has a visibility control. You can make a shared place private again, or delete it entirely, at any time."}</p>

            <div class="legal-back">
                <Link<Route> to={Route::Home}>{"Back to the site"}</Link<Route>>
            </div>

            <LegalPageStyle />
        </div>
    }
}

#[function_component(LegalPageStyle)]
fn legal_page_style() -> Html {
    html! {
        <style>
            {r#"
                .legal-page {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    font-family: var(--font-body, sans-serif);
                    color: #1a1a1a;
                    line-height: 1.7;
                }

                .legal-page h1 {
                    font-size: 2.5rem;
                    margin-bottom: 0.5rem;
                }

                .legal-page .updated {
                    color: rgba(26, 26, 26, 0.4);
                    font-size: 0.875rem;
                    margin-bottom: 3rem;
                }

                .legal-page h2 {
                    font-size: 1.25rem;
                    margin: 2rem 0 0.5rem;
                }

                .legal-page p {
                    color: rgba(26, 26, 26, 0.7);
                    margin: 0 0 1rem;
                }

                .legal-back {
                    margin-top: 4rem;
                }

                .legal-back a {
                    color: #9caf88;
                }
            "#}
        </style>
    }
}
