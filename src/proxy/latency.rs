//! Latência simulada para o cálculo embrulhado.

use std::time::Duration;

use rust_decimal::Decimal;

use crate::budget::Valued;

/// Delegado lento: espera `delay` antes de calcular o valor.
///
/// Torna visível o ganho do [`BudgetCacheProxy`](super::BudgetCacheProxy)
/// quando o cálculo real é barato.
#[derive(Debug, Clone)]
pub struct SimulatedLatency<V> {
    inner: V,
    delay: Duration,
}

impl<V: Valued> SimulatedLatency<V> {
    pub fn new(inner: V, delay: Duration) -> Self {
        Self { inner, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: Valued> Valued for SimulatedLatency<V> {
    fn value(&self) -> Decimal {
        if !self.delay.is_zero() {
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "Simulating slow computation");
            std::thread::sleep(self.delay);
        }
        self.inner.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetItem;
    use std::time::Instant;

    #[test]
    fn test_delays_and_delegates() {
        let slow = SimulatedLatency::new(
            BudgetItem::new(Decimal::from(3)),
            Duration::from_millis(20),
        );

        let started = Instant::now();
        assert_eq!(slow.value(), Decimal::from(3));
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(slow.delay(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_delay() {
        let slow = SimulatedLatency::new(BudgetItem::new(Decimal::ONE), Duration::ZERO);
        assert_eq!(slow.value(), Decimal::ONE);
        assert_eq!(slow.inner().value, Decimal::ONE);
    }
}
