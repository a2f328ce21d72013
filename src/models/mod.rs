pub mod battery_stats;
