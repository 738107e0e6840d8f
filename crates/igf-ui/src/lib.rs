use askama::Template;
use igf_core::models::Game;

/// Borrowed, template-friendly view of a game: absent fields render as "".
pub struct GameView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub genre: &'a str,
    pub developer: &'a str,
    pub link: &'a str,
    pub short_description: &'a str,
    pub description: &'a str,
    pub screenshot1: &'a str,
    pub screenshot2: &'a str,
    pub screenshot3: &'a str,
    pub screenshots: Vec<&'a str>,
}

impl<'a> GameView<'a> {
    pub fn new(game: &'a Game) -> Self {
        let f = &game.fields;
        let text = |v: &'a Option<String>| v.as_deref().unwrap_or("");
        Self {
            id: game.id.as_str(),
            title: text(&f.title),
            genre: text(&f.genre),
            developer: text(&f.developer),
            link: text(&f.link),
            short_description: text(&f.short_description),
            description: text(&f.description),
            screenshot1: text(&f.screenshot1),
            screenshot2: text(&f.screenshot2),
            screenshot3: text(&f.screenshot3),
            screenshots: f.screenshots(),
        }
    }

    pub fn list(games: &'a [Game]) -> Vec<Self> {
        games.iter().map(Self::new).collect()
    }
}

/// Home page: every game in the catalog.
#[derive(Template)]
#[template(path = "games.html")]
pub struct GamesTemplate<'a> {
    pub title: &'a str,
    pub games: Vec<GameView<'a>>,
}

/// One category's games, e.g. /puzzle
#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub games: Vec<GameView<'a>>,
}

/// The dedicated page of a single game.
#[derive(Template)]
#[template(path = "dedicated.html")]
pub struct DedicatedTemplate<'a> {
    pub title: &'a str,
    pub game: GameView<'a>,
}

#[derive(Template)]
#[template(path = "share.html")]
pub struct ShareTemplate<'a> {
    pub title: &'a str,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate<'a> {
    pub title: &'a str,
    pub game: GameView<'a>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub status: u16,
    pub message: &'a str,
}
