pub mod dto;
pub mod filters;
pub mod status;

pub use dto::*;
pub use filters::{OrderFilters, OrdersUrlParams, StatusFilter};
pub use status::{OrderAction, OrderStatus, RowActions, StatusTone};
