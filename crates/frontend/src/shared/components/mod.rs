pub mod filter_panel;
pub mod pagination_controls;
pub mod password_meter;
pub mod stat_card;
