//! Viewport-triggered entrance animations.

use js_sys::Array;
use stylist::yew::styled_component;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Flips to `true` the first time `node` is at least `threshold` visible and
/// stays there. The observer is created against the mounted element the hook
/// was given and disconnected on unmount.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut active: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_change = {
                        let setter = setter.clone();
                        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                let hit = entries
                                    .iter()
                                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                    .any(|entry| entry.is_intersecting());
                                if hit {
                                    setter.set(true);
                                    observer.disconnect();
                                }
                            },
                        )
                    };
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            active = Some((observer, on_change));
                        }
                        // Without an observer there is nothing to wait for.
                        Err(_) => setter.set(true),
                    }
                }

                move || {
                    if let Some((observer, _on_change)) = active {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger for siblings, in milliseconds.
    #[prop_or_default]
    pub delay_ms: u32,
}

#[styled_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), 0.15);

    let base = css!(
        r#"
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;

        &.shown {
            opacity: 1;
            transform: none;
        }

        @media (prefers-reduced-motion: reduce) {
            transition: none;
        }
        "#
    );

    html! {
        <div
            ref={node}
            class={classes!(base, shown.then_some("shown"), props.class.clone())}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
