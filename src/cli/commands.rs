//! Implementação dos comandos CLI do Orçamento.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;

use super::ExportFormat;
use crate::budget::{Budget, BudgetItem, Valued};
use crate::export::{BudgetExport, FileExporter, OrderExport, XmlExporter, ZipExporter};
use crate::http::{BudgetRegistry, LoggingHttpAdapter};
use crate::order::OrderFactory;
use crate::proxy::{BudgetCacheProxy, SimulatedLatency};
use crate::types::config::Config;
use crate::{BudgetError, BudgetResult};

/// Orçamento de referência: 300 + 500, mais um orçamento antigo (150)
/// e outro ainda mais antigo (50 + 100). Valor total: 1100.
pub fn reference_budget() -> Budget {
    let mut budget = Budget::new();
    budget.add_item(BudgetItem::new(Decimal::from(300)));
    budget.add_item(BudgetItem::new(Decimal::from(500)));

    let mut older = Budget::new();
    older.add_item(BudgetItem::new(Decimal::from(150)));

    let mut oldest = Budget::new();
    oldest.add_item(BudgetItem::new(Decimal::from(50)));
    oldest.add_item(BudgetItem::new(Decimal::from(100)));

    budget.add_item(older);
    budget.add_item(oldest);
    budget
}

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> BudgetResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("orcamento.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Orçamento initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Try the caching proxy: orcamento demo");
    println!("  2. Export a budget: orcamento export --format zip");

    Ok(())
}

/// Demonstra o proxy de cache.
///
/// A primeira leitura paga a latência simulada; as demais vêm do cache.
pub async fn demo(calls: Option<usize>, delay_ms: Option<u64>, config: &Config) -> BudgetResult<()> {
    let calls = calls.unwrap_or(config.proxy.demo_calls);
    let delay = delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.proxy.simulated_delay());

    if calls == 0 {
        return Err(BudgetError::other("--calls deve ser maior que zero"));
    }

    let budget = reference_budget().into_shared();
    let proxy = Arc::new(BudgetCacheProxy::new(SimulatedLatency::new(
        budget.clone(),
        delay,
    )));

    tracing::debug!(calls, delay_ms = delay.as_millis() as u64, "Starting proxy demo");
    println!("Lendo o valor do orçamento {} vezes pelo proxy...\n", calls);

    for call in 1..=calls {
        let spinner = (!proxy.is_cached() && !delay.is_zero()).then(calculating_spinner);

        let misses_before = proxy.stats().misses;
        let started = Instant::now();
        let reader = Arc::clone(&proxy);
        let value = tokio::task::spawn_blocking(move || reader.value())
            .await
            .map_err(|e| BudgetError::other(format!("Cálculo interrompido: {}", e)))?;
        let elapsed = started.elapsed();

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        let source = if proxy.stats().misses > misses_before {
            "calculado"
        } else {
            "cache"
        };
        println!(
            "  Chamada {}: {} ({} ms, {})",
            call,
            value,
            elapsed.as_millis(),
            source
        );
    }

    // Alterações depois da primeira leitura não chegam ao proxy.
    budget
        .write()
        .map_err(|_| BudgetError::other("Orçamento indisponível"))?
        .add_item(BudgetItem::new(Decimal::from(1)));

    println!();
    println!("Valor direto após novo item: {}", budget.value());
    println!("Valor pelo proxy (cache):    {}", proxy.value());

    let stats = proxy.stats();
    println!(
        "Cache: {} cálculo(s), {} acerto(s)",
        stats.misses, stats.hits
    );

    Ok(())
}

fn calculating_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("  {spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("calculando...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Exporta um orçamento e um pedido de exemplo.
pub async fn export(
    format: ExportFormat,
    output: Option<PathBuf>,
    config: &Config,
) -> BudgetResult<()> {
    let output_dir = output.unwrap_or_else(|| config.export.output_dir.clone());

    let budget = reference_budget();
    let order = OrderFactory::new().create("Teste", Utc::now(), reference_budget());

    let (budget_exporter, order_exporter): (Box<dyn FileExporter>, Box<dyn FileExporter>) =
        match format {
            ExportFormat::Xml => (
                Box::new(XmlExporter::new("orcamento", &output_dir)),
                Box::new(XmlExporter::new("pedido", &output_dir)),
            ),
            ExportFormat::Zip => (
                Box::new(ZipExporter::new("orcamento.array", &output_dir)),
                Box::new(ZipExporter::new("pedido.array", &output_dir)),
            ),
        };

    let budget_path = budget_exporter.save(&BudgetExport::from_budget(&budget))?;
    let order_path = order_exporter.save(&OrderExport::from_order(&order))?;

    println!("Orçamento exportado para: {}", budget_path);
    println!("Pedido exportado para: {}", order_path);

    Ok(())
}

/// Cria pedidos que compartilham os mesmos dados extrínsecos.
pub async fn orders(count: usize) -> BudgetResult<()> {
    let mut factory = OrderFactory::new();
    let finished_at = Utc::now();

    let orders: Vec<_> = (0..count)
        .map(|_| factory.create("Cliente", finished_at, Budget::new()))
        .collect();

    tracing::debug!(orders = orders.len(), "Orders created");

    println!("Pedidos criados: {}", orders.len());
    println!("Dados extrínsecos distintos: {}", factory.shared_count());

    Ok(())
}

/// Finaliza o orçamento de referência e o registra.
pub async fn register(config: &Config) -> BudgetResult<()> {
    let mut budget = reference_budget();
    budget.approve()?;
    budget.finalize()?;

    let registry = BudgetRegistry::new(LoggingHttpAdapter::new(), &config.registry.endpoint);
    registry.register(&budget).await?;

    println!(
        "Orçamento de {} registrado em {}",
        budget.value(),
        registry.endpoint()
    );

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("orcamento {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Orçamentos compostos com proxy de cache");
}
