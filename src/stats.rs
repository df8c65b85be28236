//! Static "magic stats" shown on the dashboard. Illustrative numbers only.

use serde::Serialize;

/// Counters embedded in the dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub auto_handled_messages: u32,
    pub revenue_optimizations: u32,
    pub bookings_synced: u32,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            auto_handled_messages: 47,
            revenue_optimizations: 3,
            bookings_synced: 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayStats {
    pub messages_auto_handled: u32,
    pub revenue_optimizations: u32,
    pub cleaners_auto_booked: u32,
    pub calendar_conflicts_resolved: u32,
    pub total_time_saved_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekStats {
    pub extra_revenue_generated: f64,
    pub guest_satisfaction_score: f64,
    pub cleaning_reliability: &'static str,
    pub response_time_average: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagicLevel {
    pub automation_percentage: u32,
    pub manual_tasks_eliminated: u32,
    pub host_stress_reduction: &'static str,
    #[serde(rename = "8_year_old_usability")]
    pub eight_year_old_usability: &'static str,
}

/// Payload of `GET /api/magic-stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagicStats {
    pub today_stats: TodayStats,
    pub this_week_stats: WeekStats,
    pub magic_level: MagicLevel,
}

impl Default for MagicStats {
    fn default() -> Self {
        Self {
            today_stats: TodayStats {
                messages_auto_handled: 47,
                revenue_optimizations: 3,
                cleaners_auto_booked: 5,
                calendar_conflicts_resolved: 2,
                total_time_saved_hours: 8.5,
            },
            this_week_stats: WeekStats {
                extra_revenue_generated: 4247.50,
                guest_satisfaction_score: 4.9,
                cleaning_reliability: "99.2%",
                response_time_average: "28 seconds",
            },
            magic_level: MagicLevel {
                automation_percentage: 94,
                manual_tasks_eliminated: 156,
                host_stress_reduction: "87%",
                eight_year_old_usability: "✅ Approved",
            },
        }
    }
}
