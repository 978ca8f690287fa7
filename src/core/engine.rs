use crate::core::{export, table};
use crate::domain::ports::{ConfigProvider, Harvest, Storage};
use crate::utils::error::Result;
use std::path::Path;

pub struct HarvestEngine<H: Harvest, S: Storage, C: ConfigProvider> {
    harvester: H,
    storage: S,
    config: C,
}

impl<H: Harvest, S: Storage, C: ConfigProvider> HarvestEngine<H, S, C> {
    pub fn new(harvester: H, storage: S, config: C) -> Self {
        Self {
            harvester,
            storage,
            config,
        }
    }

    /// Drives one harvest cycle: fetch, display, export. Returns the path of
    /// the written CSV file.
    pub async fn run(&self) -> Result<String> {
        let year = self.config.year();
        let valgtype = self.config.valgtype();

        println!("📊 Valgresultat — kommuneresultater ({} {})", year, valgtype);

        println!("Henter kommuneresultater...");
        let rows = self.harvester.fetch_results(year, valgtype).await?;
        println!("✅ Hentet {} rader", rows.len());

        print!("{}", table::render_table(&rows));

        let csv = export::csv_bytes(&rows)?;
        let filename = export::csv_filename(year, valgtype);
        self.storage.write_file(&filename, &csv).await?;

        let output_path = Path::new(self.config.output_path())
            .join(&filename)
            .display()
            .to_string();
        println!("💾 Lagret CSV: {}", output_path);

        Ok(output_path)
    }
}
