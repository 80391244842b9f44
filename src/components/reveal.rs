use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// CSS class pair for the entrance transition. The `visible` class is only
/// ever added, never removed, which is what makes the animation play once.
fn reveal_class(seen: bool) -> &'static str {
    if seen {
        "reveal visible"
    } else {
        "reveal"
    }
}

/// Latch transition for the seen flag: a block that has entered the viewport
/// stays seen no matter what the observer reports afterwards.
fn latched(seen: bool, intersecting: bool) -> bool {
    seen || intersecting
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Variant class controlling the start offset, e.g. `reveal-left`.
    #[prop_or_default]
    pub variant: Classes,
    /// Stagger delay for grids of cards.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Wraps a block and fades/slides it in the first time it scrolls into view.
///
/// An `IntersectionObserver` watches the wrapper; on first intersection it
/// latches the `seen` flag and disconnects, so scrolling away and back never
/// replays the transition.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_state(|| false);

    {
        let node = node.clone();
        let seen = seen.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(element) = node.cast::<Element>() {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    if let Ok(entry) =
                                        entry.dyn_into::<IntersectionObserverEntry>()
                                    {
                                        if latched(*seen, entry.is_intersecting()) {
                                            seen.set(true);
                                            observer.disconnect();
                                        }
                                    }
                                }
                            },
                        );
                        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(_) => Box::new(|| ()),
                        }
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

    let style = (props.delay_ms > 0)
        .then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!(reveal_class(*seen), props.variant.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_until_first_viewport_entry() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal visible");
    }

    #[test]
    fn first_intersection_sets_the_flag() {
        assert!(!latched(false, false));
        assert!(latched(false, true));
    }

    #[test]
    fn flag_stays_set_when_scrolled_back_out() {
        assert!(latched(true, false));
        assert!(latched(true, true));
        // A seen block keeps its visible class through any later reports.
        let mut seen = false;
        for intersecting in [true, false, true, false] {
            seen = latched(seen, intersecting);
        }
        assert_eq!(reveal_class(seen), "reveal visible");
    }
}
