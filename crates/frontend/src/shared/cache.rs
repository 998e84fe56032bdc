//! Cache em memória com TTL explícito.
//!
//! Substitui o antigo estado global compartilhado: cada componente que
//! precisa de cache é dono da sua instância. O valor é sempre trocado por
//! inteiro (last-write-wins), nunca mutado parcialmente.

use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;

/// TTL padrão para catálogos de posições: dois minutos.
pub const DEFAULT_TTL_SECONDS: i64 = 120;

pub struct TtlCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    entry: RwSignal<Option<(T, DateTime<Utc>)>>,
    ttl: Duration,
}

// Copy manual: o derive exigiria T: Copy, mas o handle do sinal é Copy
// para qualquer T.
impl<T: Clone + Send + Sync + 'static> Clone for TtlCache<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for TtlCache<T> {}

impl<T> TtlCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_ttl_seconds(DEFAULT_TTL_SECONDS)
    }

    pub fn with_ttl_seconds(seconds: i64) -> Self {
        Self {
            entry: RwSignal::new(None),
            ttl: Duration::seconds(seconds),
        }
    }

    /// Valor ainda fresco, ou None quando vazio/vencido.
    pub fn get(&self) -> Option<T> {
        self.entry.with_untracked(|entry| {
            entry.as_ref().and_then(|(value, loaded_at)| {
                if Utc::now().signed_duration_since(*loaded_at) < self.ttl {
                    Some(value.clone())
                } else {
                    None
                }
            })
        })
    }

    /// Substitui o conteúdo por inteiro, com timestamp de agora.
    pub fn put(&self, value: T) {
        self.entry.set(Some((value, Utc::now())));
    }

    pub fn invalidate(&self) {
        self.entry.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Os testes manipulam o timestamp diretamente: não há relógio fake no
    // ambiente de teste e o TTL é aritmética pura sobre chrono.
    #[test]
    fn valor_fresco_e_devolvido() {
        let cache: TtlCache<Vec<String>> = TtlCache::new();
        assert!(cache.get().is_none());

        cache.put(vec!["A01-1".to_string()]);
        assert_eq!(cache.get().unwrap().len(), 1);

        cache.invalidate();
        assert!(cache.get().is_none());
    }

    #[test]
    fn valor_vencido_nao_e_devolvido() {
        let cache: TtlCache<u32> = TtlCache::with_ttl_seconds(120);
        let stale = Utc::now() - Duration::seconds(121);
        cache.entry.set(Some((7, stale)));
        assert!(cache.get().is_none());

        let fresh = Utc::now() - Duration::seconds(119);
        cache.entry.set(Some((7, fresh)));
        assert_eq!(cache.get(), Some(7));
    }
}
