use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use futures_util::future::try_join3;
use tracing::{info, warn};

use crate::config::{GeneratorConfig, ReportConfig};
use crate::core::Result;
use crate::modules::api::DashboardSource;
use crate::modules::dashboard::models::{DashboardData, Delivery, Merchant, Service};
use crate::modules::dashboard::services::mock_generator::{
    MockDataGenerator, PaddingStrategy, TopUpWithSynthetic,
};

/// Owns the current dashboard snapshot and the refresh pipeline.
///
/// A refresh fans out the three backend fetches concurrently and joins them;
/// the first failure aborts the join and switches the whole refresh to the
/// mock generator, so the report pipeline always receives a complete
/// snapshot. The current snapshot is replaced wholesale by a single swap;
/// readers holding the previous `Arc` keep a consistent view.
pub struct DashboardService {
    source: Box<dyn DashboardSource>,
    report_config: ReportConfig,
    generator_config: GeneratorConfig,
    generator: Mutex<MockDataGenerator>,
    padding: Box<dyn PaddingStrategy>,
    demo_mode: AtomicBool,
    current: RwLock<Option<Arc<DashboardData>>>,
}

impl DashboardService {
    pub fn new(
        source: impl DashboardSource + 'static,
        report_config: ReportConfig,
        generator_config: GeneratorConfig,
    ) -> Self {
        let demo_mode = generator_config.demo_mode;
        Self {
            source: Box::new(source),
            report_config,
            generator_config,
            generator: Mutex::new(MockDataGenerator::new()),
            padding: Box::new(TopUpWithSynthetic),
            demo_mode: AtomicBool::new(demo_mode),
            current: RwLock::new(None),
        }
    }

    /// Replaces the default top-up padding strategy.
    pub fn with_padding_strategy(mut self, padding: Box<dyn PaddingStrategy>) -> Self {
        self.padding = padding;
        self
    }

    /// Replaces the generator, typically with a seeded one in tests.
    pub fn with_generator(self, generator: MockDataGenerator) -> Self {
        *self.generator.lock().expect("generator lock poisoned") = generator;
        self
    }

    /// Pins the service to generated data regardless of backend health.
    pub fn set_demo_mode(&self, enabled: bool) {
        self.demo_mode.store(enabled, Ordering::Relaxed);
        info!(enabled, "Demo mode toggled");
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode.load(Ordering::Relaxed)
    }

    /// Latest snapshot, if any refresh has completed.
    pub fn current(&self) -> Option<Arc<DashboardData>> {
        self.current
            .read()
            .expect("snapshot lock poisoned")
            .clone()
    }

    /// Rebuilds the dashboard snapshot and installs it as current.
    ///
    /// Never fails: fetch errors fall back to generated data, and the
    /// returned snapshot is always fully populated.
    pub async fn refresh(&self) -> Arc<DashboardData> {
        let snapshot = if self.demo_mode() {
            info!("Refreshing dashboard from generated data (demo mode)");
            self.generate_snapshot()
        } else {
            match self.fetch_live().await {
                Ok((merchants, deliveries, services)) => {
                    info!(
                        merchants = merchants.len(),
                        deliveries = deliveries.len(),
                        services = services.len(),
                        "Refreshed dashboard from backend"
                    );
                    self.build_padded_snapshot(merchants, deliveries, services)
                }
                Err(err) => {
                    warn!(error = %err, "Backend fetch failed, falling back to generated data");
                    self.generate_snapshot()
                }
            }
        };

        let snapshot = Arc::new(snapshot);
        *self.current.write().expect("snapshot lock poisoned") = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Fetches the three collections concurrently; the first error wins.
    async fn fetch_live(&self) -> Result<(Vec<Merchant>, Vec<Delivery>, Vec<Service>)> {
        try_join3(
            self.source.fetch_merchants(),
            self.source.fetch_deliveries(),
            self.source.fetch_services(),
        )
        .await
    }

    /// Tops up short live collections to the configured floor, then builds
    /// the snapshot.
    fn build_padded_snapshot(
        &self,
        mut merchants: Vec<Merchant>,
        mut deliveries: Vec<Delivery>,
        mut services: Vec<Service>,
    ) -> DashboardData {
        let floor = self.report_config.min_records;
        let mut generator = self.generator.lock().expect("generator lock poisoned");

        if merchants.len() < floor || deliveries.len() < floor || services.len() < floor {
            warn!(
                floor,
                merchants = merchants.len(),
                deliveries = deliveries.len(),
                services = services.len(),
                "Live data below record floor, topping up with synthetic records"
            );
        }
        self.padding.pad_merchants(&mut generator, &mut merchants, floor);
        self.padding.pad_deliveries(&mut generator, &mut deliveries, floor);
        self.padding.pad_services(&mut generator, &mut services, floor);

        DashboardData::new(merchants, deliveries, services)
    }

    fn generate_snapshot(&self) -> DashboardData {
        let mut generator = self.generator.lock().expect("generator lock poisoned");
        let merchants = generator.generate_merchants(self.generator_config.merchant_count);
        let deliveries = generator.generate_deliveries(self.generator_config.delivery_count);
        let services = generator.generate_services(self.generator_config.service_count);
        DashboardData::new(merchants, deliveries, services)
    }
}
