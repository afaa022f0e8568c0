// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the search screen.
//!
//! The `App` struct wires together the search session, the search port,
//! localization and the thumbnail cache, and translates messages into side
//! effects (HTTP requests through the port).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ImageSearch;
use crate::application::session::SearchSession;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::UnsplashClient;
use crate::media::ThumbnailCache;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: SearchSession,
    client: Arc<dyn ImageSearch>,
    thumbnails: ThumbnailCache,
    /// Category shortcut labels, in display order.
    categories: Vec<String>,
    thumbnail_size: f32,
    theme_mode: ThemeMode,
    spinner_rotation: f32,
    /// i18n key of a startup warning, cleared by the first search.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.session.query())
            .field("page", &self.session.page())
            .field("status", &self.session.status())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the window
/// cannot be created.
pub fn run(flags: Flags) -> Result<()> {
    let (config, config_warning) = config::load();
    let client: Arc<dyn ImageSearch> = Arc::new(UnsplashClient::new(
        config.search.api_url.clone(),
        flags.credential.clone(),
    )?);

    // iced 0.14 requires a `Fn` boot function, so every call starts from clones.
    let boot = move || {
        App::new(
            flags.clone(),
            &config,
            config_warning.clone(),
            Arc::clone(&client),
        )
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Ui(err.to_string()))
}

impl App {
    /// Initializes application state and submits the initial query, if any.
    fn new(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        client: Arc<dyn ImageSearch>,
    ) -> (Self, Task<Message>) {
        #[allow(clippy::cast_precision_loss)]
        let thumbnail_size = config.display.thumbnail_size() as f32;

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), config),
            session: SearchSession::new(config.session_config()),
            client,
            thumbnails: ThumbnailCache::new(config.display.thumbnail_cache_entries()),
            categories: config.search.category_labels(),
            thumbnail_size,
            theme_mode: config.general.theme_mode,
            spinner_rotation: 0.0,
            config_warning,
        };

        let task = match flags.initial_query.as_deref() {
            Some(query) => {
                let ticket = app.session.submit_query(query);
                update::dispatch_search(&app.client, ticket)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.session.query() {
            Some(query) => self
                .i18n
                .tr_with_args("window-title-query", &[("query", query.as_str())]),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.session.is_loading())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            client: &self.client,
            thumbnails: &mut self.thumbnails,
            spinner_rotation: &mut self.spinner_rotation,
            config_warning: &mut self.config_warning,
        };

        match message {
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::SearchCompleted { ticket, result } => {
                update::handle_search_completed(&mut ctx, &ticket, result)
            }
            Message::ThumbnailLoaded { url, result } => {
                update::handle_thumbnail_loaded(&mut ctx, url, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            categories: &self.categories,
            thumbnails: &self.thumbnails,
            thumbnail_size: self.thumbnail_size,
            spinner_rotation: self.spinner_rotation,
            config_warning: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ApiCredential, BoxFuture, SearchError, SearchRequest};
    use crate::application::session::FETCH_ERROR_KEY;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::search::{Image, ImageId, RequestStatus, SearchResults, TotalPages};
    use crate::ui::search;
    use iced::widget::image::Handle;

    /// Search port that is never actually awaited in these tests.
    struct NullSearch;

    impl ImageSearch for NullSearch {
        fn search(
            &self,
            _request: SearchRequest,
        ) -> BoxFuture<'_, std::result::Result<SearchResults, SearchError>> {
            Box::pin(async { Ok(SearchResults::default()) })
        }

        fn fetch_thumbnail(
            &self,
            _url: String,
        ) -> BoxFuture<'_, std::result::Result<Vec<u8>, SearchError>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn flags(initial_query: Option<&str>) -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            initial_query: initial_query.map(str::to_string),
            credential: ApiCredential::new("test-key").expect("credential"),
        }
    }

    fn app_with(initial_query: Option<&str>) -> App {
        let (app, _task) = App::new(
            flags(initial_query),
            &Config::default(),
            None,
            Arc::new(NullSearch),
        );
        app
    }

    fn one_image_page(total: u32) -> SearchResults {
        SearchResults {
            images: vec![Image {
                id: ImageId::new("a1"),
                thumbnail_url: "u1".to_string(),
                description: Some("cat".to_string()),
            }],
            total_pages: TotalPages::new(total),
        }
    }

    fn latest_ticket(app: &mut App) -> crate::application::session::RequestTicket {
        app.session.fetch_current_page().expect("ticket")
    }

    #[test]
    fn new_starts_idle_without_initial_query() {
        let app = app_with(None);
        assert_eq!(app.session.status(), RequestStatus::Idle);
        assert_eq!(app.title(), "Image Search");
        assert_eq!(app.categories, vec!["nature", "birds", "cats", "shoes"]);
    }

    #[test]
    fn initial_query_is_submitted_on_mount() {
        let app = app_with(Some("cats"));
        assert!(app.session.is_loading());
        assert_eq!(app.session.pending_query(), "cats");
        assert_eq!(app.title(), "cats - Image Search");
    }

    #[test]
    fn typing_updates_pending_query_only() {
        let mut app = app_with(None);
        let _ = app.update(Message::Search(search::Message::QueryChanged(
            "birds".into(),
        )));
        assert_eq!(app.session.pending_query(), "birds");
        assert_eq!(app.session.status(), RequestStatus::Idle);
    }

    #[test]
    fn category_press_starts_loading() {
        let mut app = app_with(None);
        let _ = app.update(Message::Search(search::Message::CategorySelected(
            "shoes".into(),
        )));
        assert!(app.session.is_loading());
        assert_eq!(app.session.pending_query(), "shoes");
    }

    #[test]
    fn completed_search_replaces_results_and_claims_thumbnails() {
        let mut app = app_with(Some("cats"));
        let ticket = latest_ticket(&mut app);

        let _ = app.update(Message::SearchCompleted {
            ticket,
            result: Ok(one_image_page(5)),
        });

        assert_eq!(app.session.results().len(), 1);
        assert!(app.session.show_next());
        assert!(app.thumbnails.is_pending("u1"));
        assert_eq!(app.thumbnails.stats().misses, 1);
    }

    #[test]
    fn refetched_page_reuses_cached_thumbnails() {
        let mut app = app_with(Some("cats"));
        let ticket = latest_ticket(&mut app);
        let _ = app.update(Message::SearchCompleted {
            ticket,
            result: Ok(one_image_page(5)),
        });
        let _ = app.update(Message::ThumbnailLoaded {
            url: "u1".into(),
            result: Ok(Handle::from_bytes(vec![0_u8])),
        });

        let ticket = latest_ticket(&mut app);
        let _ = app.update(Message::SearchCompleted {
            ticket,
            result: Ok(one_image_page(5)),
        });

        let stats = app.thumbnails.stats();
        assert_eq!((stats.hits, stats.misses, stats.insertions), (1, 1, 1));
        assert!(!app.thumbnails.is_pending("u1"));
    }

    #[test]
    fn failed_search_shows_fixed_message() {
        let mut app = app_with(Some("cats"));
        let ticket = latest_ticket(&mut app);

        let _ = app.update(Message::SearchCompleted {
            ticket,
            result: Err(SearchError::Status(500)),
        });

        assert_eq!(app.session.error_key(), Some(FETCH_ERROR_KEY));
        assert_eq!(
            app.i18n.tr(FETCH_ERROR_KEY),
            "Error fetching images. Try again later."
        );
    }

    #[test]
    fn thumbnail_results_update_cache_or_diagnostics() {
        let mut app = app_with(None);

        let _ = app.update(Message::ThumbnailLoaded {
            url: "u1".into(),
            result: Ok(Handle::from_bytes(vec![0_u8])),
        });
        assert!(app.thumbnails.peek("u1").is_some());

        let _ = app.update(Message::ThumbnailLoaded {
            url: "u2".into(),
            result: Err(SearchError::Transport("reset".into())),
        });
        assert!(matches!(
            app.session.diagnostics().last().map(|e| &e.kind),
            Some(DiagnosticEventKind::ThumbnailFailed { .. })
        ));
    }

    #[test]
    fn tick_spins_only_while_loading() {
        let mut app = app_with(None);
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert_eq!(app.spinner_rotation, 0.0);

        let mut app = app_with(Some("cats"));
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(app.spinner_rotation > 0.0);
    }

    #[test]
    fn first_search_clears_config_warning() {
        let (mut app, _) = App::new(
            flags(None),
            &Config::default(),
            Some("notification-config-load-error".into()),
            Arc::new(NullSearch),
        );
        let _ = app.update(Message::Search(search::Message::Submit));
        assert!(app.config_warning.is_some(), "blank submit keeps the warning");

        let _ = app.update(Message::Search(search::Message::CategorySelected(
            "cats".into(),
        )));
        assert!(app.config_warning.is_none());
    }

    #[test]
    fn dark_config_selects_dark_theme() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let (app, _) = App::new(flags(None), &config, None, Arc::new(NullSearch));
        assert_eq!(app.theme(), Theme::Dark);
    }
}
