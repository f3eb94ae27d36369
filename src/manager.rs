// Singleton: the one café manager who runs the whole place.
//
// The manager is created lazily behind a OnceLock, so concurrent first access
// still constructs exactly one instance.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use log::debug;

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct CafeManager {
    instance_no: usize,
}

impl CafeManager {
    /// Returns the process-wide manager, constructing it on first call.
    pub fn global() -> &'static CafeManager {
        static MANAGER: OnceLock<CafeManager> = OnceLock::new();
        MANAGER.get_or_init(|| {
            let instance_no = CONSTRUCTED.fetch_add(1, Ordering::SeqCst) + 1;
            debug!("constructing cafe manager #{}", instance_no);
            CafeManager { instance_no }
        })
    }

    /// Construction ordinal of this manager; the singleton is always #1.
    pub fn instance_no(&self) -> usize {
        self.instance_no
    }

    /// Identity comparison. Two handles are the same manager only if they
    /// point at the same object.
    pub fn is_same(a: &CafeManager, b: &CafeManager) -> bool {
        std::ptr::eq(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_singleton_identity() {
        let first = CafeManager::global();
        let second = CafeManager::global();
        assert!(CafeManager::is_same(first, second));
    }

    #[test]
    fn test_constructed_once() {
        for _ in 0..10 {
            assert_eq!(CafeManager::global().instance_no(), 1);
        }
        assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_identity_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| CafeManager::global() as *const CafeManager as usize))
            .collect();

        let expected = CafeManager::global() as *const CafeManager as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
