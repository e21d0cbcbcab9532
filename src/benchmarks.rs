//! Regional benchmark aggregation.
//!
//! Builds per-region intensity benchmarks from a records file of past
//! assessments (one row per farm: `region`, `total_kg_co2e`, `area_ha`) and
//! compares a single farm against its region. The two headline figures per
//! region are the mean intensity and the best-quartile intensity, both in
//! kg CO2e per hectare.

use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Aggregated intensity benchmark for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionBenchmark {
    pub region: String,
    pub average_kg_co2e_per_ha: f64,
    /// 25th percentile of intensity: the best-performing quarter of farms.
    pub best_quartile_kg_co2e_per_ha: f64,
    pub n_farms: u32,
}

/// How one farm sits against its regional benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub region: String,
    pub kg_co2e_per_ha: f64,
    pub average_kg_co2e_per_ha: f64,
    pub best_quartile_kg_co2e_per_ha: f64,
    /// Farm minus regional average; negative is better than average.
    pub vs_average: f64,
    /// Farm minus best quartile; negative is among the best performers.
    pub vs_best_quartile: f64,
}

/// Per-region benchmarks indexed by region name.
#[derive(Debug, Clone, Default)]
pub struct RegionalBenchmarks {
    regions: FxHashMap<String, RegionBenchmark>,
}

impl RegionalBenchmarks {
    /// Aggregate a records frame. Rows with a null region or intensity are
    /// skipped by the aggregation.
    pub fn from_records(records: LazyFrame) -> Result<RegionalBenchmarks> {
        let aggregated = records
            .with_column((col("total_kg_co2e") / col("area_ha")).alias("kg_co2e_per_ha"))
            .group_by([col("region")])
            .agg([
                col("kg_co2e_per_ha").mean().alias("average_kg_co2e_per_ha"),
                col("kg_co2e_per_ha")
                    .quantile(lit(0.25), QuantileMethod::Linear)
                    .alias("best_quartile_kg_co2e_per_ha"),
                col("kg_co2e_per_ha").count().alias("n_farms"),
            ])
            .collect()
            .context("Failed to aggregate benchmark records")?;

        let region_col = aggregated
            .column("region")
            .context("Column 'region' not found")?
            .str()
            .context("Column 'region' is not string type")?;
        let average_col = aggregated
            .column("average_kg_co2e_per_ha")?
            .f64()
            .context("Average column is not f64")?;
        let quartile_col = aggregated
            .column("best_quartile_kg_co2e_per_ha")?
            .f64()
            .context("Quartile column is not f64")?;
        let count_col = aggregated
            .column("n_farms")?
            .u32()
            .context("Count column is not u32")?;

        let mut regions = FxHashMap::default();
        for idx in 0..aggregated.height() {
            if let (Some(region), Some(average), Some(best_quartile), Some(n_farms)) = (
                region_col.get(idx),
                average_col.get(idx),
                quartile_col.get(idx),
                count_col.get(idx),
            ) {
                regions.insert(
                    region.to_string(),
                    RegionBenchmark {
                        region: region.to_string(),
                        average_kg_co2e_per_ha: average,
                        best_quartile_kg_co2e_per_ha: best_quartile,
                        n_farms,
                    },
                );
            }
        }

        Ok(RegionalBenchmarks { regions })
    }

    /// Aggregate a CSV records file.
    pub fn load_csv(path: &str) -> Result<RegionalBenchmarks> {
        let records = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {path}"))?
            .finish()
            .with_context(|| format!("Failed to load records CSV: {path}"))?;
        Self::from_records(records.lazy())
    }

    /// Aggregate a Parquet records file.
    pub fn load_parquet(path: &str) -> Result<RegionalBenchmarks> {
        let records = LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to scan records parquet: {path}"))?;
        Self::from_records(records)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Benchmark for one region, if it appeared in the records.
    pub fn for_region(&self, region: &str) -> Option<&RegionBenchmark> {
        self.regions.get(region)
    }

    /// Compare one farm's intensity against its region. `None` when the
    /// region has no benchmark.
    pub fn compare(&self, region: &str, kg_co2e_per_ha: f64) -> Option<BenchmarkComparison> {
        let benchmark = self.regions.get(region)?;
        Some(BenchmarkComparison {
            region: benchmark.region.clone(),
            kg_co2e_per_ha,
            average_kg_co2e_per_ha: benchmark.average_kg_co2e_per_ha,
            best_quartile_kg_co2e_per_ha: benchmark.best_quartile_kg_co2e_per_ha,
            vs_average: kg_co2e_per_ha - benchmark.average_kg_co2e_per_ha,
            vs_best_quartile: kg_co2e_per_ha - benchmark.best_quartile_kg_co2e_per_ha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records_frame() -> LazyFrame {
        // Bamenda intensities: 1000, 2000, 3000, 4000. Douala: 500, 1500.
        let region = Series::new(
            "region".into(),
            &["Bamenda", "Bamenda", "Bamenda", "Bamenda", "Douala", "Douala"],
        );
        let total = Series::new(
            "total_kg_co2e".into(),
            &[1000.0, 2000.0, 3000.0, 4000.0, 1000.0, 3000.0],
        );
        let area = Series::new("area_ha".into(), &[1.0, 1.0, 1.0, 1.0, 2.0, 2.0]);

        DataFrame::new(vec![
            Column::Series(region.into()),
            Column::Series(total.into()),
            Column::Series(area.into()),
        ])
        .unwrap()
        .lazy()
    }

    #[test]
    fn test_per_region_mean_and_best_quartile() {
        let benchmarks = RegionalBenchmarks::from_records(records_frame()).unwrap();
        assert_eq!(benchmarks.len(), 2);

        let bamenda = benchmarks.for_region("Bamenda").unwrap();
        assert_eq!(bamenda.n_farms, 4);
        assert_relative_eq!(bamenda.average_kg_co2e_per_ha, 2500.0, epsilon = 0.0001);
        // Linear interpolation at the 0.25 point of [1000, 2000, 3000, 4000].
        assert_relative_eq!(
            bamenda.best_quartile_kg_co2e_per_ha,
            1750.0,
            epsilon = 0.0001
        );

        let douala = benchmarks.for_region("Douala").unwrap();
        assert_eq!(douala.n_farms, 2);
        // Intensities divide by the 2 ha fields: 500 and 1500.
        assert_relative_eq!(douala.average_kg_co2e_per_ha, 1000.0, epsilon = 0.0001);
        assert_relative_eq!(douala.best_quartile_kg_co2e_per_ha, 750.0, epsilon = 0.0001);
    }

    #[test]
    fn test_compare_signs_and_unknown_region() {
        let benchmarks = RegionalBenchmarks::from_records(records_frame()).unwrap();

        let comparison = benchmarks.compare("Bamenda", 2000.0).unwrap();
        assert_relative_eq!(comparison.vs_average, -500.0, epsilon = 0.0001);
        assert_relative_eq!(comparison.vs_best_quartile, 250.0, epsilon = 0.0001);

        assert!(benchmarks.compare("Maroua", 2000.0).is_none());
    }

    #[test]
    fn test_empty_records_yield_empty_benchmarks() {
        let region = Series::new("region".into(), Vec::<String>::new());
        let total = Series::new("total_kg_co2e".into(), Vec::<f64>::new());
        let area = Series::new("area_ha".into(), Vec::<f64>::new());
        let empty = DataFrame::new(vec![
            Column::Series(region.into()),
            Column::Series(total.into()),
            Column::Series(area.into()),
        ])
        .unwrap()
        .lazy();

        let benchmarks = RegionalBenchmarks::from_records(empty).unwrap();
        assert!(benchmarks.is_empty());
    }
}
