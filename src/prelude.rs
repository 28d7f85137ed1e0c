//! Marquee prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    analytics::{PriceShare, RevenueAnalytics},
    calculation::{Calculation, CalculationRequest, InputError, compare_strategies},
    constraint::{PriceLevels, is_degenerate, is_valid_witness},
    history::{
        DEFAULT_HISTORY_LIMIT, HistoryError, HistoryRecord, HistoryStore, MemoryHistory,
        export_yaml, export_yaml_file, import_yaml, import_yaml_file,
    },
    notify::{NoopSink, NotificationSink, RecordingSink, Signal, TracingSink},
    prices::{PriceList, PriceListError},
    quota::{MAX_TICKETS, QuotaError, TicketQuota},
    report::{LevelBreakdown, Report, ReportError},
    settings::{AppearanceMode, MemorySettings, Settings, SettingsStore},
    solvers::{
        BruteForceSolver, DynamicProgrammingSolver, GreedySolver, Solution, Solver, Strategy,
        solve, solve_brute_force, solve_dynamic_programming, solve_greedy,
    },
};
