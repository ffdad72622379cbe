//! Site-wide theme.
//!
//! The active [`Theme`] lives in a reducer owned by [`ThemeProvider`] and is
//! handed down through a yew context. Components never read a global; they ask
//! for the current [`ThemeStyles`] with [`use_theme_styles`].

use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Purple,
    Gradient,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Dark, Theme::Purple, Theme::Gradient];

    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Theme::Default),
            "dark" => Some(Theme::Dark),
            "purple" => Some(Theme::Purple),
            "gradient" => Some(Theme::Gradient),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Purple => "purple",
            Theme::Gradient => "gradient",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Default => "Light",
            Theme::Dark => "Dark",
            Theme::Purple => "Purple",
            Theme::Gradient => "Gradient",
        }
    }

    pub fn styles(self) -> &'static ThemeStyles {
        match self {
            Theme::Default => &DEFAULT_STYLES,
            Theme::Dark => &DARK_STYLES,
            Theme::Purple => &PURPLE_STYLES,
            Theme::Gradient => &GRADIENT_STYLES,
        }
    }
}

/// CSS class bundle for every semantic slot a component may style.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeStyles {
    pub page: &'static str,
    pub nav: &'static str,
    pub hero: &'static str,
    pub section: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub input: &'static str,
    pub badge: &'static str,
    pub footer: &'static str,
}

static DEFAULT_STYLES: ThemeStyles = ThemeStyles {
    page: "bg-white text-slate-900",
    nav: "bg-white/90 border-b border-slate-200 backdrop-blur",
    hero: "bg-gradient-to-b from-sky-50 to-white",
    section: "bg-white",
    card: "bg-white border border-slate-200 shadow-sm rounded-2xl",
    heading: "text-slate-900 font-bold",
    text: "text-slate-700",
    muted: "text-slate-500",
    accent: "text-sky-600",
    button_primary: "bg-sky-600 hover:bg-sky-700 text-white rounded-lg",
    button_secondary: "border border-sky-600 text-sky-700 hover:bg-sky-50 rounded-lg",
    input: "border border-slate-300 focus:border-sky-500 rounded-lg bg-white",
    badge: "bg-sky-100 text-sky-700 rounded-full",
    footer: "bg-slate-50 text-slate-600 border-t border-slate-200",
};

static DARK_STYLES: ThemeStyles = ThemeStyles {
    page: "bg-slate-950 text-slate-100",
    nav: "bg-slate-900/90 border-b border-slate-800 backdrop-blur",
    hero: "bg-gradient-to-b from-slate-900 to-slate-950",
    section: "bg-slate-950",
    card: "bg-slate-900 border border-slate-800 shadow-lg rounded-2xl",
    heading: "text-white font-bold",
    text: "text-slate-300",
    muted: "text-slate-500",
    accent: "text-cyan-400",
    button_primary: "bg-cyan-500 hover:bg-cyan-400 text-slate-950 rounded-lg",
    button_secondary: "border border-cyan-400 text-cyan-300 hover:bg-slate-800 rounded-lg",
    input: "border border-slate-700 focus:border-cyan-400 rounded-lg bg-slate-900 text-white",
    badge: "bg-cyan-900 text-cyan-200 rounded-full",
    footer: "bg-slate-900 text-slate-400 border-t border-slate-800",
};

static PURPLE_STYLES: ThemeStyles = ThemeStyles {
    page: "bg-purple-50 text-purple-950",
    nav: "bg-white/90 border-b border-purple-200 backdrop-blur",
    hero: "bg-gradient-to-b from-purple-100 to-purple-50",
    section: "bg-purple-50",
    card: "bg-white border border-purple-200 shadow-md rounded-2xl",
    heading: "text-purple-950 font-bold",
    text: "text-purple-900",
    muted: "text-purple-600",
    accent: "text-purple-600",
    button_primary: "bg-purple-600 hover:bg-purple-700 text-white rounded-lg",
    button_secondary: "border border-purple-600 text-purple-700 hover:bg-purple-100 rounded-lg",
    input: "border border-purple-300 focus:border-purple-500 rounded-lg bg-white",
    badge: "bg-purple-100 text-purple-700 rounded-full",
    footer: "bg-purple-100 text-purple-700 border-t border-purple-200",
};

static GRADIENT_STYLES: ThemeStyles = ThemeStyles {
    page: "bg-gradient-to-br from-indigo-900 via-fuchsia-800 to-rose-700 text-white",
    nav: "bg-white/10 border-b border-white/20 backdrop-blur",
    hero: "bg-transparent",
    section: "bg-white/5",
    card: "bg-white/10 border border-white/20 shadow-xl rounded-2xl backdrop-blur",
    heading: "text-white font-extrabold",
    text: "text-white/90",
    muted: "text-white/60",
    accent: "text-amber-300",
    button_primary: "bg-amber-400 hover:bg-amber-300 text-indigo-950 rounded-lg",
    button_secondary: "border border-white/60 text-white hover:bg-white/10 rounded-lg",
    input: "border border-white/30 focus:border-amber-300 rounded-lg bg-white/10 text-white",
    badge: "bg-white/20 text-white rounded-full",
    footer: "bg-black/20 text-white/70 border-t border-white/10",
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
}

pub enum ThemeAction {
    Change(String),
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Change(name) => {
                let theme = match Theme::from_name(&name) {
                    Some(theme) => theme,
                    None => {
                        warn!("Unknown theme '{}', falling back to '{}'", name, Theme::default().name());
                        Theme::default()
                    }
                };
                if theme == self.theme {
                    return self;
                }
                info!("Theme changed to {}", theme.name());
                Rc::new(ThemeState { theme })
            }
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(ThemeState::default);

    html! {
        <ContextProvider<ThemeContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.theme)
        .unwrap_or_default()
}

#[hook]
pub fn use_theme_styles() -> &'static ThemeStyles {
    use_theme().styles()
}

/// Callback that changes the theme by name; a no-op outside a provider.
#[hook]
pub fn use_change_theme() -> Callback<String> {
    let ctx = use_context::<ThemeContext>();
    Callback::from(move |name: String| match &ctx {
        Some(ctx) => ctx.dispatch(ThemeAction::Change(name)),
        None => warn!("Theme change to '{}' requested outside ThemeProvider", name),
    })
}

#[function_component(ThemeSelector)]
pub fn theme_selector() -> Html {
    let current = use_theme();
    let styles = current.styles();
    let change_theme = use_change_theme();

    html! {
        <div class="theme-selector flex gap-1" role="radiogroup" aria-label="Theme">
            { for Theme::ALL.iter().map(|theme| {
                let theme = *theme;
                let onclick = {
                    let change_theme = change_theme.clone();
                    Callback::from(move |_: MouseEvent| change_theme.emit(theme.name().to_string()))
                };
                let class = if theme == current {
                    classes!("theme-option", "px-2", "py-1", "text-xs", styles.badge)
                } else {
                    classes!("theme-option", "px-2", "py-1", "text-xs", styles.muted)
                };
                html! {
                    <button {class} {onclick} role="radio" aria-checked={(theme == current).to_string()}>
                        { theme.label() }
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(state: Rc<ThemeState>, name: &str) -> Rc<ThemeState> {
        state.reduce(ThemeAction::Change(name.to_string()))
    }

    #[test]
    fn known_names_select_their_theme() {
        let state = Rc::new(ThemeState::default());
        let state = change(state, "purple");
        assert_eq!(state.theme, Theme::Purple);
        let state = change(state, "Dark");
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let state = change(Rc::new(ThemeState::default()), "gradient");
        assert_eq!(state.theme, Theme::Gradient);
        let state = change(state, "not-a-real-theme");
        assert_eq!(state.theme, Theme::Default);
    }

    #[test]
    fn names_round_trip_and_styles_differ() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.name()), Some(theme));
        }
        assert_ne!(Theme::Dark.styles(), Theme::Default.styles());
        assert_eq!(Theme::default().styles().page, "bg-white text-slate-900");
    }
}
