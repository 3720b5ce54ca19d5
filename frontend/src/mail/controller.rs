use std::rc::Rc;

use shared::types::{ComposeRequest, Email, MailBoxes, ReadUpdate};
use shared::utils::{box_name, compose_path, email_path, mailbox_path, mailbox_title};

use crate::connect_fetch::{ApiRequest, Transport, decode_json, decode_message, expect_success};
use crate::error::Notice;
use crate::state::{MailState, ViewState};

/// Drives the three mail panels. Cloning shares the same view model.
#[derive(Clone)]
pub struct MailController<T: Transport> {
    transport: T,
    state: Rc<MailState>,
}

impl<T: Transport> MailController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, state: Rc::new(MailState::default()) }
    }

    pub fn state(&self) -> &MailState {
        &self.state
    }

    pub async fn init(&self) {
        self.show_mailbox(MailBoxes::Inbox).await;
    }

    pub async fn show_mailbox(&self, mailbox: MailBoxes) {
        let generation = self.state.navigate(ViewState::Mailbox);
        self.state.mailbox.set_neq(mailbox);
        self.state.emails.lock_mut().clear();

        let result = self.transport.send(ApiRequest::get(mailbox_path(&mailbox))).await
            .and_then(decode_json::<Vec<Email>>);
        if !self.state.is_current(generation) {
            log::debug!("drop stale {} listing", box_name(&mailbox));
            return;
        }
        match result {
            Ok(emails) => {
                log::info!("{}: {} emails", box_name(&mailbox), emails.len());
                if emails.is_empty() {
                    self.state.notice.set(Some(Notice::info(&format!("{} is empty.", mailbox_title(&mailbox)))));
                }
                self.state.emails.lock_mut().replace_cloned(emails);
            }
            Err(err) => {
                log::error!("load {}: {err}", box_name(&mailbox));
                self.state.notice.set(Some(Notice::from_error("Loading the mailbox", &err)));
            }
        }
    }

    pub async fn show_email_detail(&self, id: u64) {
        let generation = self.state.navigate(ViewState::EmailDetail);
        self.state.detail.set(None);

        let email = self.transport.send(ApiRequest::get(email_path(id)));
        self.mark_read(id);

        let result = email.await.and_then(decode_json::<Email>);
        if !self.state.is_current(generation) {
            log::debug!("drop stale email {id}");
            return;
        }
        match result {
            Ok(email) => {
                log::debug!("email {id}: {:?}", email.subject);
                self.state.detail.set(Some(email));
            }
            Err(err) => {
                log::error!("load email {id}: {err}");
                self.state.notice.set(Some(Notice::from_error("Opening the email", &err)));
            }
        }
    }

    // Fired whether or not the email itself loads.
    fn mark_read(&self, id: u64) {
        let request = ApiRequest::put(email_path(id)).with_body(&ReadUpdate { read: true });
        let update = self.transport.send_request(request);
        self.transport.spawn(Box::pin(async move {
            if let Err(err) = update.await.and_then(expect_success) {
                log::warn!("mark email {id} read: {err}");
            }
        }));
    }

    pub fn show_compose(&self) {
        self.state.navigate(ViewState::Compose);
        self.state.draft.clear();
    }

    pub async fn submit_compose(&self, recipients: String, subject: String, body: String) {
        if self.state.sending.replace(true) {
            log::debug!("send already in flight");
            return;
        }
        self.state.notice.set(None);
        let generation = self.state.generation();

        let request = ApiRequest::post(compose_path())
            .with_body(&ComposeRequest { recipients, subject, body });
        let result = self.transport.send_request(request).await.and_then(decode_message);
        self.state.sending.set(false);

        // the user moved on while sending
        if !self.state.is_current(generation) {
            match result {
                Ok(message) => log::info!("{message}"),
                Err(err) => log::error!("send email: {err}"),
            }
            return;
        }
        match result {
            Ok(message) => {
                log::info!("{message}");
                self.show_mailbox(MailBoxes::Sent).await;
            }
            Err(err) => {
                log::error!("send email: {err}");
                self.state.notice.set(Some(Notice::from_error("Sending the email", &err)));
            }
        }
    }
}
