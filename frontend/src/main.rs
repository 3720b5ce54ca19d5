use crate::config::{AppKind, Settings};
use crate::connect_fetch::WebTransport;
use crate::feed::app_feed::{app_feed, load_posts};
use crate::feed::controller::FeedController;
use crate::mail::app_mail::app_mail;
use crate::mail::controller::MailController;

mod config;
mod connect_fetch;
mod constants;
mod elements;
mod error;
mod feed;
mod mail;
mod state;
mod types;
mod utils;
#[cfg(test)]
mod testing;

pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();

    let body = dominator::body();
    let dataset = body.dataset();
    let settings = Settings::from_dataset(|key| dataset.get(key));
    log::info!("starting {:?} app", settings.app);

    let transport = WebTransport::new(settings.clone());
    let root = match settings.app {
        AppKind::Mail => app_mail(MailController::new(transport)),
        AppKind::Feed => app_feed(FeedController::new(transport, load_posts())),
    };
    dominator::append_dom(&body, root);
}
