// Application shell - state, backend wiring, and the frame layout

use crate::api::{seed, spawn_backend, ApiCommand, ApiResponse};
use crate::config::Config;
use crate::nav::{LocationStore, ProcessLocation, Route, SubscriptionHandle};
use crate::state::{
    FeedState, JobsState, MessagingState, NetworkState, NotificationsState, SessionState,
};
use crate::style;
use crate::view;
use crate::view::header::HeaderContext;
use eframe::egui;
use std::sync::mpsc::{Receiver, Sender};

/// One mounted route per top-level view. All of them stay mounted for the
/// life of the window; only the one matching the current path renders, so
/// hidden views keep their state.
struct RouteSet {
    feed: Route,
    network: Route,
    jobs: Route,
    messaging: Route,
    notifications: Route,
}

impl RouteSet {
    fn mount(nav: &LocationStore) -> Self {
        Self {
            feed: Route::new(nav, "/"),
            network: Route::new(nav, "/mynetwork"),
            jobs: Route::new(nav, "/jobs"),
            messaging: Route::new(nav, "/messaging"),
            notifications: Route::new(nav, "/notifications"),
        }
    }
}

pub struct Worknet {
    nav: LocationStore,
    routes: RouteSet,

    session: SessionState,
    feed: FeedState,
    network: NetworkState,
    jobs: JobsState,
    messaging: MessagingState,
    notifications: NotificationsState,
    search_query: String,

    api_tx: Sender<ApiCommand>,
    api_rx: Receiver<ApiResponse>,

    // Keeps the navigation log observer registered for the app's lifetime
    _nav_log: SubscriptionHandle,
}

impl Worknet {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        style::Theme::from_mode(&config.theme.mode).apply(&cc.egui_ctx);

        let (api_tx, api_rx) = spawn_backend(cc.egui_ctx.clone());

        let nav = LocationStore::new(Box::new(ProcessLocation::new(
            config.nav.start_path.clone(),
        )));
        let routes = RouteSet::mount(&nav);
        let nav_log = nav.subscribe(|path| log::debug!("location changed to {}", path));

        Self {
            nav,
            routes,
            session: SessionState::new(),
            feed: FeedState::new(),
            network: NetworkState::new(seed::connections()),
            jobs: JobsState::new(seed::jobs()),
            messaging: MessagingState::new(seed::conversations()),
            notifications: NotificationsState::new(seed::notifications()),
            search_query: String::new(),
            api_tx,
            api_rx,
            _nav_log: nav_log,
        }
    }

    fn process_backend_results(&mut self) {
        while let Ok(response) = self.api_rx.try_recv() {
            match response {
                ApiResponse::SessionOpened(account) => {
                    log::info!("session opened for {}", account.email);
                    self.session.open(account);
                    self.feed.loading = true;
                    let _ = self.api_tx.send(ApiCommand::FetchFeed);
                    self.nav.navigate("/");
                }
                ApiResponse::AuthRejected(err) => {
                    self.session.reject(err.to_string());
                }
                ApiResponse::FeedLoaded(posts) => {
                    self.feed.set_posts(posts);
                }
            }
        }
    }
}

impl eframe::App for Worknet {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_backend_results();

        let account = match self.session.account.clone() {
            Some(account) => account,
            None => {
                let Self {
                    session, api_tx, ..
                } = self;
                egui::CentralPanel::default()
                    .show(ctx, |ui| view::auth::show(ui, session, api_tx));
                return;
            }
        };

        let Self {
            nav,
            routes,
            session,
            feed,
            network,
            jobs,
            messaging,
            notifications,
            search_query,
            ..
        } = self;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let mut header = HeaderContext {
                nav,
                session,
                search_query,
                unread_notifications: notifications.unread_count(),
            };
            view::header::show(ui, &mut header);
        });

        // The header's logout may have closed the session mid-frame
        if !session.is_signed_in() {
            return;
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| view::footer::show(ui));

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(style::SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                view::sidebar::show(ui, nav, &account, network.connected_count());
            });

        egui::SidePanel::right("profile")
            .resizable(false)
            .default_width(style::PROFILE_WIDTH)
            .show(ctx, |ui| view::profile::show(ui, &account));

        egui::CentralPanel::default().show(ctx, |ui| {
            routes.feed.show(ui, |ui| view::feed::show(ui, feed, &account));
            routes.network.show(ui, |ui| view::network::show(ui, network));
            routes.jobs.show(ui, |ui| view::jobs::show(ui, jobs));
            routes
                .messaging
                .show(ui, |ui| view::messaging::show(ui, messaging));
            routes
                .notifications
                .show(ui, |ui| view::notifications::show(ui, notifications));
        });
    }
}
