use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// `<img>` that swaps to a neutral placeholder when the asset fails to load.
#[function_component]
pub fn FallbackImage(props: &FallbackImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            gloo_console::warn!(format!("Image failed to load: {}", src));
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class={classes!("image-placeholder", "flex", "items-center", "justify-center", "bg-slate-200", "text-slate-500", props.class.clone())}
                 role="img"
                 aria-label={props.alt.clone()}>
                <span class="text-sm">{ &props.alt }</span>
            </div>
        }
    } else {
        html! {
            <img src={props.src.clone()} alt={props.alt.clone()} class={props.class.clone()} loading="lazy" {onerror} />
        }
    }
}
