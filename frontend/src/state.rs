use futures_signals::signal::Mutable;
use futures_signals::signal_vec::MutableVec;

use shared::types::{Email, MailBoxes, Post};

use crate::error::Notice;
use crate::types::{ComposeDraft, PostState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewState {
    Mailbox,
    EmailDetail,
    Compose,
}

impl ViewState {
    #[cfg(test)]
    pub const ALL: [ViewState; 3] = [ViewState::Mailbox, ViewState::EmailDetail, ViewState::Compose];

    pub fn is_visible(self, panel: ViewState) -> bool {
        self == panel
    }
}

pub struct MailState {
    pub view: Mutable<ViewState>,
    pub mailbox: Mutable<MailBoxes>,
    pub emails: MutableVec<Email>,
    pub detail: Mutable<Option<Email>>,
    pub draft: ComposeDraft,
    pub notice: Mutable<Option<Notice>>,
    pub sending: Mutable<bool>,
    generation: Mutable<u64>,
}

impl Default for MailState {
    fn default() -> Self {
        Self {
            view: Mutable::new(ViewState::Mailbox),
            mailbox: Mutable::new(MailBoxes::Inbox),
            emails: MutableVec::new(),
            detail: Mutable::new(None),
            draft: ComposeDraft::default(),
            notice: Mutable::new(None),
            sending: Mutable::new(false),
            generation: Mutable::new(0),
        }
    }
}

impl MailState {
    /// Switches the visible panel, returns the navigation generation the
    /// caller must present before touching panel content.
    pub fn navigate(&self, view: ViewState) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.notice.set(None);
        self.view.set(view);
        generation
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

#[derive(Default)]
pub struct FeedState {
    pub posts: MutableVec<PostState>,
}

impl FeedState {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: MutableVec::new_with_values(posts.into_iter().map(PostState::from).collect()),
        }
    }

    pub fn post(&self, id: u64) -> Option<PostState> {
        self.posts.lock_ref().iter().find(|row| row.id == id).cloned()
    }
}
