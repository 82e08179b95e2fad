use crate::config::Config;
use crate::errors::AppResult;
use crate::metrics::FuelReport;
use crate::models::{ConsumptionRow, LogKind, RefillRow};
use crate::store::LogStore;
use crate::ui::messages::{header, metric, warning};
use crate::utils::colors::{RESET, color_for_trip};
use crate::utils::formatting::{distance, economy, money};

pub struct StatsLogic;

impl StatsLogic {
    pub fn build(store: &LogStore) -> AppResult<FuelReport> {
        let consumption: Vec<ConsumptionRow> = store
            .load(LogKind::Consumption)?
            .iter()
            .map(ConsumptionRow::from_row)
            .collect();
        let refills: Vec<RefillRow> = store
            .load(LogKind::Refill)?
            .iter()
            .map(RefillRow::from_row)
            .collect();

        Ok(FuelReport::build(&consumption, &refills))
    }

    pub fn print(report: &FuelReport, cfg: &Config) {
        let cur = cfg.currency.as_str();

        header("Economy");
        metric("Readings", Some(report.readings));
        metric("Average economy", report.average_economy.map(economy));
        metric(
            "Best economy",
            report.best_economy.as_ref().map(|(v, mode)| {
                if mode.is_empty() {
                    economy(*v)
                } else {
                    format!("{} ({})", economy(*v), mode)
                }
            }),
        );
        metric("Real-world economy", report.real_world_economy.map(economy));

        header("Trips");
        metric("Refills", Some(report.refills));
        if report.trip_distances.is_empty() {
            metric::<String>("Trip distances", None);
        } else {
            for (i, d) in report.trip_distances.iter().enumerate() {
                println!(
                    "    #{} → #{}: {}{}{}",
                    i + 1,
                    i + 2,
                    color_for_trip(*d),
                    distance(*d),
                    RESET
                );
            }
        }
        if report.negative_trips > 0 {
            warning(format!(
                "{} trip(s) with a negative distance: check the odometer values.",
                report.negative_trips
            ));
        }

        header("Cost");
        metric("Fuel bought", Some(format!("{:.2} L", report.total_volume)));
        metric("Total spent", Some(money(report.total_cost, cur)));
        metric(
            "Cost per km",
            report.cost_per_distance.map(|c| money(c, cur)),
        );
        for (month, sum) in &report.monthly_cost {
            println!("    {}: {}", month, money(*sum, cur));
        }
        for (idx, diff) in &report.cost_mismatches {
            warning(format!(
                "Refill #{}: stored TotalCost differs from price x quantity by {:+.2}",
                idx + 1,
                diff
            ));
        }
        println!();
    }
}
