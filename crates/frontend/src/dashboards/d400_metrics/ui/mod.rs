pub mod cards;
pub mod dashboard;
pub mod popular_products;
pub mod revenue_chart;

pub use dashboard::DashboardPage;
