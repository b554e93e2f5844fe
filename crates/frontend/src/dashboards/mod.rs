pub mod d400_metrics;

pub use d400_metrics::ui::DashboardPage;
