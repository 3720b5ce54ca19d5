use futures_signals::signal::Mutable;

use shared::types::Post;

use crate::error::Notice;

#[derive(Debug, Clone, Default)]
pub struct ComposeDraft {
    pub recipients: Mutable<String>,
    pub subject: Mutable<String>,
    pub body: Mutable<String>,
}

impl ComposeDraft {
    pub fn clear(&self) {
        self.recipients.set(String::new());
        self.subject.set(String::new());
        self.body.set(String::new());
    }

    pub fn values(&self) -> (String, String, String) {
        (self.recipients.get_cloned(), self.subject.get_cloned(), self.body.get_cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostState {
    pub id: u64,
    pub author: String,
    pub timestamp: String,
    pub editable: bool,
    pub content: Mutable<String>,
    pub draft: Mutable<String>,
    pub editing: Mutable<bool>,
    pub liked: Mutable<bool>,
    /// A like toggle is in flight, the button stays disabled.
    pub pending: Mutable<bool>,
    pub saving: Mutable<bool>,
    pub notice: Mutable<Option<Notice>>,
}

impl From<Post> for PostState {
    fn from(src: Post) -> Self {
        Self {
            id: src.id,
            author: src.author,
            timestamp: src.timestamp,
            editable: src.editable,
            content: Mutable::new(src.content),
            liked: Mutable::new(src.liked_by_current_user),
            ..PostState::default()
        }
    }
}

impl PartialEq<PostState> for PostState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
