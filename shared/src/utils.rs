use crate::constants::{API_ADD_LIKE, API_EDIT, API_EMAILS, API_LIKE_STATUS, API_REMOVE_LIKE};
use crate::types::MailBoxes;

pub fn box_name(mb: &MailBoxes) -> &'static str {
    match *mb {
        MailBoxes::Inbox => "inbox",
        MailBoxes::Sent => "sent",
        MailBoxes::Archive => "archive",
    }
}

#[cfg(test)]
fn box_from_name(name: &str) -> Option<MailBoxes> {
    match name {
        "inbox" => Some(MailBoxes::Inbox),
        "sent" => Some(MailBoxes::Sent),
        "archive" => Some(MailBoxes::Archive),
        _ => None,
    }
}

pub fn mailbox_title(mb: &MailBoxes) -> String {
    let name = box_name(mb);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn join_recipients(recipients: &[String]) -> String {
    recipients.join(", ")
}

/// Looks up `name` in a `document.cookie` style string.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    let value = format!("; {cookies}");
    let needle = format!("; {name}=");
    let mut parts = value.split(needle.as_str());
    parts.next();
    let tail = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    tail.split(';').next().map(|v| v.to_string())
}

pub fn mailbox_path(mb: &MailBoxes) -> String {
    format!("/{API_EMAILS}/{}", box_name(mb))
}

pub fn email_path(id: u64) -> String {
    format!("/{API_EMAILS}/{id}")
}

pub fn compose_path() -> String {
    format!("/{API_EMAILS}")
}

pub fn like_status_path(id: u64) -> String {
    format!("/{API_LIKE_STATUS}/{id}")
}

pub fn like_path(id: u64, like: bool) -> String {
    if like {
        format!("/{API_ADD_LIKE}/{id}")
    } else {
        format!("/{API_REMOVE_LIKE}/{id}")
    }
}

pub fn edit_path(id: u64) -> String {
    format!("/{API_EDIT}/{id}")
}
