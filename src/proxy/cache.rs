//! Proxy de cache com cálculo único.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

use rust_decimal::Decimal;

use crate::budget::Valued;

/// Estatísticas do proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProxyStats {
    /// Se o valor já foi calculado.
    pub computed: bool,

    /// Leituras servidas pelo cache.
    pub hits: u64,

    /// Leituras que dispararam o cálculo (no máximo uma).
    pub misses: u64,
}

impl ProxyStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Proxy que memoriza o primeiro valor calculado pelo delegado.
///
/// Com chamadas concorrentes e cache vazio, apenas uma delas executa o
/// cálculo; as demais aguardam e recebem o mesmo resultado.
///
/// # Valor desatualizado
///
/// Alterações no delegado depois da primeira leitura não são vistas:
///
/// ```rust
/// use orcamento::budget::{Budget, BudgetItem, Valued};
/// use orcamento::proxy::BudgetCacheProxy;
/// use rust_decimal::Decimal;
///
/// let budget = Budget::new().into_shared();
/// let proxy = BudgetCacheProxy::new(budget.clone());
/// assert_eq!(proxy.value(), Decimal::ZERO);
///
/// budget.write().unwrap().add_item(BudgetItem::new(Decimal::from(10)));
/// assert_eq!(proxy.value(), Decimal::ZERO);
/// ```
#[derive(Debug)]
pub struct BudgetCacheProxy<V> {
    delegate: V,
    cached: OnceLock<Decimal>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<V: Valued> BudgetCacheProxy<V> {
    /// Cria um proxy com o cache vazio.
    pub fn new(delegate: V) -> Self {
        Self {
            delegate,
            cached: OnceLock::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Indica se o valor já está em cache.
    pub fn is_cached(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Valor em cache, sem disparar o cálculo.
    pub fn cached_value(&self) -> Option<Decimal> {
        self.cached.get().copied()
    }

    /// Entidade embrulhada.
    pub fn delegate(&self) -> &V {
        &self.delegate
    }

    /// Descarta o proxy e devolve a entidade embrulhada.
    pub fn into_inner(self) -> V {
        self.delegate
    }

    /// Retorna estatísticas do proxy.
    pub fn stats(&self) -> ProxyStats {
        ProxyStats {
            computed: self.is_cached(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn compute(&self) -> Decimal {
        let started = Instant::now();
        let value = self.delegate.value();
        tracing::debug!(
            %value,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Budget value computed and cached"
        );
        value
    }
}

impl<V: Valued> Valued for BudgetCacheProxy<V> {
    fn value(&self) -> Decimal {
        if let Some(value) = self.cached.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *value;
        }

        let mut computed_here = false;
        let value = *self.cached.get_or_init(|| {
            computed_here = true;
            self.compute()
        });

        // Quem perdeu a corrida recebe o valor de quem calculou.
        if computed_here {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{Budget, BudgetItem};
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use std::time::Duration;

    /// Delegado instrumentado que conta quantas vezes foi calculado.
    struct Counting<V> {
        inner: V,
        calls: AtomicUsize,
    }

    impl<V> Counting<V> {
        fn new(inner: V) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl<V: Valued> Valued for Counting<V> {
        fn value(&self) -> Decimal {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.value()
        }
    }

    fn sample_budget() -> Budget {
        let mut budget = Budget::new();
        budget.add_item(BudgetItem::new(Decimal::from(300)));
        budget.add_item(BudgetItem::new(Decimal::from(500)));
        budget
    }

    #[test]
    fn test_first_call_matches_delegate() {
        let budget = sample_budget();
        let expected = budget.value();

        let proxy = BudgetCacheProxy::new(&budget);
        assert!(!proxy.is_cached());
        assert_eq!(proxy.value(), expected);
        assert_eq!(proxy.cached_value(), Some(expected));
    }

    #[test]
    fn test_computes_once() {
        let counting = Arc::new(Counting::new(sample_budget()));
        let proxy = BudgetCacheProxy::new(counting.clone());

        for _ in 0..6 {
            assert_eq!(proxy.value(), Decimal::from(800));
        }

        assert_eq!(counting.calls(), 1);
        let stats = proxy.stats();
        assert!(stats.computed);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 5);
    }

    #[test]
    fn test_concurrent_readers_compute_once() {
        let counting = Arc::new(Counting::new(crate::proxy::SimulatedLatency::new(
            sample_budget(),
            Duration::from_millis(50),
        )));
        let proxy = BudgetCacheProxy::new(counting.clone());

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(proxy.value(), Decimal::from(800)));
            }
        });

        assert_eq!(counting.calls(), 1);
        let stats = proxy.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 7);
    }

    #[test]
    fn test_stale_after_mutation() {
        let shared = sample_budget().into_shared();
        let proxy = BudgetCacheProxy::new(shared.clone());

        assert_eq!(proxy.value(), Decimal::from(800));

        shared
            .write()
            .unwrap()
            .add_item(BudgetItem::new(Decimal::from(200)));

        assert_eq!(shared.value(), Decimal::from(1000));
        assert_eq!(proxy.value(), Decimal::from(800));
    }

    #[test]
    fn test_mutation_before_first_read_is_seen() {
        let shared = sample_budget().into_shared();
        let proxy = BudgetCacheProxy::new(shared.clone());

        shared
            .write()
            .unwrap()
            .add_item(BudgetItem::new(Decimal::from(200)));

        assert_eq!(proxy.value(), Decimal::from(1000));
    }

    #[test]
    fn test_proxy_is_substitutable() {
        let proxy = BudgetCacheProxy::new(sample_budget());

        let mut parent = Budget::new();
        parent.add_item(proxy);
        parent.add_item(BudgetItem::new(Decimal::from(1)));

        assert_eq!(parent.value(), Decimal::from(801));
    }

    #[test]
    fn test_stats_hit_rate() {
        let stats = ProxyStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        let proxy = BudgetCacheProxy::new(sample_budget());
        proxy.value();
        proxy.value();
        proxy.value();
        proxy.value();
        assert!((proxy.stats().hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_into_inner() {
        let proxy = BudgetCacheProxy::new(sample_budget());
        proxy.value();
        let budget = proxy.into_inner();
        assert_eq!(budget.item_count(), 2);
    }
}
