use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::content::NAV_LINKS;

/// Scroll offset (px) past which the navbar switches to its solid style.
const SCROLL_THRESHOLD: f64 = 50.0;

fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

fn toggled(open: bool) -> bool {
    !open
}

/// Menu state after a navigation link is activated: always closed, whatever
/// it was before.
fn after_link_click(_open: bool) -> bool {
    false
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(past_threshold(scroll_y));
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Pick up the current offset in case the page loads mid-scroll
                    if let Ok(scroll_y) = window.scroll_y() {
                        is_scrolled.set(past_threshold(scroll_y));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(toggled(*menu_open));
        })
    };

    // No prevent_default here: the anchor jump must still happen.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(after_link_click(*menu_open));
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Vinisbir Technologies"}</a>

                <div class="nav-desktop">
                    {
                        for NAV_LINKS.iter().map(|link| html! {
                            <a href={format!("#{}", link.target)} class="nav-link">
                                { link.label }
                            </a>
                        })
                    }
                    <button class="nav-cta">{"Download Sublime Mind"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    if *menu_open {
                        <i class="fa-solid fa-xmark"></i>
                    } else {
                        <i class="fa-solid fa-bars"></i>
                    }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    {
                        for NAV_LINKS.iter().map(|link| html! {
                            <a
                                href={format!("#{}", link.target)}
                                onclick={close_menu.clone()}
                                class="mobile-menu-link"
                            >
                                { link.label }
                            </a>
                        })
                    }
                    <button class="nav-cta mobile-cta">{"Download Now"}</button>
                </div>
            }

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);
                    }

                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(245, 241, 234, 0.7);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(26, 26, 26, 0.05);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-family: var(--font-display);
                        font-size: 1.25rem;
                        font-weight: 600;
                        letter-spacing: -0.02em;
                        color: var(--ink);
                        text-decoration: none;
                    }

                    .nav-desktop {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(26, 26, 26, 0.7);
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .nav-link:hover {
                        color: var(--ink);
                    }

                    .nav-cta {
                        background: var(--ink);
                        color: #fff;
                        border: none;
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: transform 0.2s, background 0.2s;
                    }

                    .nav-cta:hover {
                        background: rgba(26, 26, 26, 0.9);
                        transform: scale(1.05);
                    }

                    .nav-cta:active {
                        transform: scale(0.95);
                    }

                    .burger-menu {
                        display: block;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        font-size: 1.5rem;
                        color: var(--ink);
                        cursor: pointer;
                    }

                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem;
                        background: rgba(245, 241, 234, 0.9);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .mobile-menu-link {
                        font-size: 1.125rem;
                        font-weight: 500;
                        color: rgba(26, 26, 26, 0.8);
                        text-decoration: none;
                    }

                    .mobile-cta {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .nav-desktop {
                            display: flex;
                        }

                        .burger-menu {
                            display: none;
                        }

                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_boundary_is_exclusive_at_fifty() {
        assert_eq!(past_threshold(49.0), false);
        assert_eq!(past_threshold(50.0), false);
        assert_eq!(past_threshold(51.0), true);
    }

    #[test]
    fn offsets_far_from_the_boundary() {
        assert!(!past_threshold(0.0));
        assert!(past_threshold(600.0));
    }

    #[test]
    fn toggling_twice_round_trips() {
        for open in [false, true] {
            assert_eq!(toggled(toggled(open)), open);
        }
    }

    #[test]
    fn link_activation_always_closes_the_menu() {
        assert!(!after_link_click(true));
        assert!(!after_link_click(false));
    }
}
