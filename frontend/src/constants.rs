pub static PROP_PLACEHOLDER: &'static str = "placeholder";
pub static PROP_TITLE: &'static str = "title";
pub static PROP_ROLE: &'static str = "role";
pub static PROP_TYPE: &'static str = "type";
pub static PROP_VALUE: &'static str = "value";
pub static PROP_DISABLED: &'static str = "disabled";

pub static PROP_ROLE_BUTTON: &'static str = "button";
pub static PROP_ROLE_ALERT: &'static str = "alert";
pub static PROP_ROLE_STATUS: &'static str = "status";

pub static TAG_DIV: &'static str = "div";
pub static TAG_SPAN: &'static str = "span";
pub static TAG_INPUT: &'static str = "input";
pub static TAG_TEXTAREA: &'static str = "textarea";
pub static TAG_BUTTON: &'static str = "button";
pub static TAG_HEADING: &'static str = "h3";
pub static TAG_STRONG: &'static str = "strong";
pub static TAG_P: &'static str = "p";
