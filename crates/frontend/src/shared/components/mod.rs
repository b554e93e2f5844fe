pub mod date_range_picker;
pub mod metric_card;
pub mod pagination_controls;
