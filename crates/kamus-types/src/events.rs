/// Which of the three endpoint operations a lookup should hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Term(String),
    WordOfTheDay,
    Random,
}

/// Events exchanged between the UI frontend and the app event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    Lookup(LookupRequest),
    ToggleFavorite { lemma: String },
    DeleteHistoryItem { lemma: String },
    ClearHistory,
    DeleteFavorite { lemma: String },
    ShowHistory,
    ShowFavorites,
    Close,

    // app -> UI
    LookupStarted,
    LookupSucceeded {
        rendered: String,
        lemma: String,
        is_favorite: bool,
    },
    LookupFailed { message: String },
    HistoryChanged(Vec<String>),
    FavoritesChanged(Vec<String>),
}
