pub mod autocomplete_input;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod lots_popup;
pub mod notice_popup;
pub mod parameters_popup;
pub mod popup;
pub mod receipt_confirmation;
pub mod screen_title;
pub mod search_input;
