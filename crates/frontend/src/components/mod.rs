pub mod card;
pub mod charts;
pub mod dashboard;
pub mod field_view;
pub mod help_overlay;
pub mod hero;
pub mod leaderboard;
pub mod performance_insights;
pub mod profile_management;
pub mod realtime_feedback;
pub mod recommendations;
pub mod strategy_panel;
pub mod video_analysis;
