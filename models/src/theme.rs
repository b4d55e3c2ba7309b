//! Syntax highlighting themes accepted by the paste service.

use crate::ModelError;

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

closed_set! {
    /// A paste theme. Matching is exact and case-sensitive.
    pub enum Theme {
        Active4D => "Active4D",
        AllHallowsEve => "All Hallows Eve",
        Amy => "Amy",
        BirdsOfParadise => "Birds of Paradise",
        Blackboard => "Blackboard",
        BrillianceBlack => "Brilliance Black",
        BrillianceDull => "Brilliance Dull",
        ChromeDevTools => "Chrome DevTools",
        CloudsMidnight => "Clouds Midnight",
        Clouds => "Clouds",
        Cobalt => "Cobalt",
        Cobalt2 => "Cobalt2",
        Dawn => "Dawn",
        DominionDay => "Dominion Day",
        Dracula => "Dracula",
        Dreamweaver => "Dreamweaver",
        Eiffel => "Eiffel",
        EspressoLibre => "Espresso Libre",
        GitHubDark => "GitHub Dark",
        GitHubLight => "GitHub Light",
        GitHub => "GitHub",
        Idle => "IDLE",
        IdleFingers => "idleFingers",
        IPlastic => "iPlastic",
        Katzenmilch => "Katzenmilch",
        KrTheme => "krTheme",
        KuroirTheme => "Kuroir Theme",
        Lazy => "LAZY",
        MerbivoreSoft => "Merbivore Soft",
        Merbivore => "Merbivore",
        Monoindustrial => "monoindustrial",
        MonokaiBright => "Monokai Bright",
        Monokai => "Monokai",
        NightOwl => "Night Owl",
        Nord => "Nord",
        OceanicNext => "Oceanic Next",
        PastelsOnDark => "Pastels on Dark",
        SlushAndPoppies => "Slush and Poppies",
        SpaceCadet => "SpaceCadet",
        Sunburst => "Sunburst",
        Tomorrow => "Tomorrow",
        Twilight => "Twilight",
        UpstreamSunburst => "Upstream Sunburst",
        VibrantInk => "Vibrant Ink",
        XcodeDefault => "Xcode_default",
        Zenburnesque => "Zenburnesque",
    }
}

static BY_NAME: Lazy<HashMap<&'static str, Theme>> =
    Lazy::new(|| Theme::ALL.iter().map(|theme| (theme.as_str(), *theme)).collect());

impl Theme {
    /// Owned copy of every theme name.
    pub fn names() -> Vec<&'static str> {
        Theme::ALL.iter().map(Theme::as_str).collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::GitHubDark
    }
}

impl FromStr for Theme {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(value)
            .copied()
            .ok_or_else(|| ModelError::unknown_theme(value))
    }
}
