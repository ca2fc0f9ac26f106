use crate::season::SeasonView;
use league_core::SeasonState;

pub struct MenuSection {
    pub items: Vec<MenuItem>,
}

pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    /// Whether the action can change anything right now.
    pub enabled: bool,
}

pub fn league_menu(season: &SeasonView) -> Vec<MenuSection> {
    let playable = season.state != SeasonState::Complete;

    vec![
        MenuSection {
            items: vec![
                MenuItem {
                    title: "Next Week".to_string(),
                    url: "/next_week".to_string(),
                    icon: "fa-step-forward".to_string(),
                    enabled: playable,
                },
                MenuItem {
                    title: "Play All".to_string(),
                    url: "/play_all".to_string(),
                    icon: "fa-fast-forward".to_string(),
                    enabled: playable,
                },
            ],
        },
        MenuSection {
            items: vec![MenuItem {
                title: "New Season".to_string(),
                url: "/new_season".to_string(),
                icon: "fa-refresh".to_string(),
                enabled: season.state != SeasonState::NotStarted,
            }],
        },
    ]
}
