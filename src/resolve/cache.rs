use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};

use tracing::{debug, info, warn};

use crate::core::formula::parse_formula;
use crate::core::nuclide::Nuclide;

use super::client::{CactusClient, LookupClient, LookupError};
use super::error::ResolveError;
use super::record::ResolvedMolecule;

/// Per-name resolution state. A name is absent while unrequested, carries a
/// marker while some thread resolves it, and afterwards holds the shared
/// record forever.
enum Slot {
    Resolving,
    Resolved(Arc<ResolvedMolecule>),
}

/// Memoizing, single-flight cache from molecule names to resolved records.
///
/// The first call for a distinct name performs the external lookup sequence;
/// every concurrent caller for the same name blocks on that in-flight
/// resolution and shares its result, so the external service sees at most one
/// round-trip sequence per name over the cache's lifetime. Records live until
/// the cache is dropped — this is a pure memoizer, not an LRU.
///
/// Failures are never cached: a failed flight resets the name to unrequested
/// and wakes all waiters, the first of which simply becomes the next flight.
///
/// The cache is an ordinary value with no global registry behind it; construct
/// one at application start and pass it by reference wherever molecules are
/// resolved. Tests can build isolated caches around mock clients.
pub struct MoleculeCache {
    client: Box<dyn LookupClient>,
    entries: Mutex<HashMap<String, Slot>>,
    settled: Condvar,
}

impl MoleculeCache {
    /// Creates a cache resolving through the given lookup client.
    pub fn new(client: impl LookupClient + 'static) -> Self {
        Self {
            client: Box::new(client),
            entries: Mutex::new(HashMap::new()),
            settled: Condvar::new(),
        }
    }

    /// Creates a cache resolving through the public Cactus service.
    pub fn with_default_client() -> Self {
        Self::new(CactusClient::new())
    }

    /// Resolves a molecule name to its shared record, performing the external
    /// lookups only on the first request for the name.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NameIsNuclide`] when the name (or the formula the
    /// service returned for it) denotes a bare element or isotope, and
    /// [`ResolveError::LookupUnavailable`] when any external lookup fails.
    /// Neither outcome is cached.
    pub fn resolve(&self, name: &str) -> Result<Arc<ResolvedMolecule>, ResolveError> {
        // Cheap local check, repeated on every call rather than cached.
        if Nuclide::is_nuclide(name) {
            return Err(ResolveError::NameIsNuclide {
                name: name.to_string(),
            });
        }

        {
            let mut entries = self.entries.lock().expect("molecule cache lock poisoned");
            loop {
                match entries.get(name) {
                    Some(Slot::Resolved(record)) => {
                        debug!(name, "molecule cache hit");
                        return Ok(Arc::clone(record));
                    }
                    Some(Slot::Resolving) => {
                        entries = self
                            .settled
                            .wait(entries)
                            .expect("molecule cache lock poisoned");
                    }
                    None => {
                        // This thread owns the flight from here on.
                        entries.insert(name.to_string(), Slot::Resolving);
                        break;
                    }
                }
            }
        }

        info!(name, "resolving molecule name");
        let outcome = self.resolve_uncached(name);

        let mut entries = self.entries.lock().expect("molecule cache lock poisoned");
        let result = match outcome {
            Ok(record) => {
                let record = Arc::new(record);
                entries.insert(name.to_string(), Slot::Resolved(Arc::clone(&record)));
                Ok(record)
            }
            Err(error) => {
                // Back to unrequested, so a later call may retry.
                entries.remove(name);
                warn!(name, %error, "molecule resolution failed");
                Err(error)
            }
        };
        drop(entries);
        self.settled.notify_all();
        result
    }

    /// The number of successfully resolved names currently held.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("molecule cache lock poisoned")
            .values()
            .filter(|slot| matches!(slot, Slot::Resolved(_)))
            .count()
    }

    /// Returns whether no name has been successfully resolved yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve_uncached(&self, name: &str) -> Result<ResolvedMolecule, ResolveError> {
        let lookup_failed = |source: LookupError| ResolveError::LookupUnavailable {
            name: name.to_string(),
            source,
        };

        let formula = self.client.formula(name).map_err(lookup_failed)?;

        // The service occasionally "corrects" a nonsensical name to a bare
        // single-element answer; treat that as a nuclide request too.
        if Nuclide::is_nuclide(&formula) {
            return Err(ResolveError::NameIsNuclide {
                name: name.to_string(),
            });
        }

        let inchi_key = self.client.inchi_key(name).map_err(lookup_failed)?;
        let iupac_name = self.client.iupac_name(&inchi_key).map_err(lookup_failed)?;
        let synonyms = self.client.synonyms(&inchi_key).map_err(lookup_failed)?;

        let composition = parse_formula(&formula);
        if composition.is_empty() {
            warn!(name, formula = %formula, "formula yielded no recognizable elements");
        }

        Ok(ResolvedMolecule::new(
            name, formula, inchi_key, iupac_name, synonyms, composition,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Scripted stand-in for the external service: serves a fixed formula,
    /// counts formula calls, and can be told to fail or stall. The flag and
    /// counter are shared handles, so tests keep access after the client
    /// moves into a cache.
    struct ScriptedLookup {
        formula: String,
        fail: Arc<AtomicBool>,
        delay: Duration,
        formula_calls: Arc<AtomicUsize>,
    }

    impl ScriptedLookup {
        fn serving(formula: &str) -> Self {
            Self {
                formula: formula.to_string(),
                fail: Arc::new(AtomicBool::new(false)),
                delay: Duration::ZERO,
                formula_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn with_delay(formula: &str, delay: Duration) -> Self {
            Self {
                delay,
                ..Self::serving(formula)
            }
        }

        fn failing() -> Self {
            let lookup = Self::serving("");
            lookup.fail.store(true, Ordering::SeqCst);
            lookup
        }

        fn calls(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.formula_calls)
        }

        fn fail_flag(&self) -> Arc<AtomicBool> {
            Arc::clone(&self.fail)
        }

        fn unavailable() -> LookupError {
            LookupError::Status {
                url: "http://resolver.invalid/formula".to_string(),
                status: 404,
            }
        }
    }

    impl LookupClient for ScriptedLookup {
        fn formula(&self, _name: &str) -> Result<String, LookupError> {
            self.formula_calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            if self.fail.load(Ordering::SeqCst) {
                return Err(Self::unavailable());
            }
            Ok(self.formula.clone())
        }

        fn inchi_key(&self, _name: &str) -> Result<String, LookupError> {
            Ok("FAKEKEY-UHFFFAOYSA-N".to_string())
        }

        fn iupac_name(&self, _key: &str) -> Result<String, LookupError> {
            Ok("oxidane".to_string())
        }

        fn synonyms(&self, _key: &str) -> Result<Vec<String>, LookupError> {
            Ok(vec![
                "water".to_string(),
                "aqua".to_string(),
                "aqua".to_string(),
            ])
        }
    }

    #[test]
    fn resolves_and_memoizes_per_name() {
        let client = ScriptedLookup::serving("H2O");
        let calls = client.calls();
        let cache = MoleculeCache::new(client);

        let first = cache.resolve("water").unwrap();
        let second = cache.resolve("water").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!((first.mass() - 18.01528).abs() < 1e-9);
        assert_eq!(first.synonyms(), ["water", "aqua", "aqua"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn nuclide_names_are_rejected_without_touching_the_network() {
        let client = ScriptedLookup::serving("H2O");
        let calls = client.calls();
        let cache = MoleculeCache::new(client);

        for name in ["hydrogen", "nitrogen", "He3", "deuterium", "Co"] {
            let err = cache.resolve(name).unwrap_err();
            assert!(matches!(err, ResolveError::NameIsNuclide { .. }), "{name}");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn formulas_that_are_bare_nuclides_are_rejected() {
        // Nonsense names the service "corrects" onto a bare single-element
        // answer must be turned down like direct nuclide requests.
        let cache = MoleculeCache::new(ScriptedLookup::serving("He"));
        let err = cache.resolve("helium gas").unwrap_err();
        assert!(matches!(err, ResolveError::NameIsNuclide { .. }));
        assert!(cache.is_empty());
    }

    #[test]
    fn lookup_failures_are_surfaced_and_not_cached() {
        let cache = MoleculeCache::new(ScriptedLookup::failing());

        for name in ["no molecule", "wader"] {
            let err = cache.resolve(name).unwrap_err();
            assert!(
                matches!(err, ResolveError::LookupUnavailable { .. }),
                "{name}"
            );
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn a_failed_resolution_can_be_retried_on_the_same_cache() {
        let client = ScriptedLookup::serving("H2O");
        let calls = client.calls();
        let fail = client.fail_flag();
        let cache = MoleculeCache::new(client);

        fail.store(true, Ordering::SeqCst);
        assert!(matches!(
            cache.resolve("water").unwrap_err(),
            ResolveError::LookupUnavailable { .. }
        ));
        assert!(cache.is_empty());

        // Service comes back; the same name resolves from scratch.
        fail.store(false, Ordering::SeqCst);
        let record = cache.resolve("water").unwrap();
        assert!(record.is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn unparsable_formulas_cache_an_invalid_record() {
        let cache = MoleculeCache::new(ScriptedLookup::serving("??"));
        let record = cache.resolve("mystery compound").unwrap();
        assert!(!record.is_valid());
        assert!(record.mass().is_nan());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn concurrent_first_time_resolves_share_a_single_flight() {
        let client = ScriptedLookup::with_delay("H2O", Duration::from_millis(50));
        let calls = client.calls();
        let cache = Arc::new(MoleculeCache::new(client));
        let threads = 8;
        let barrier = Arc::new(Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.resolve("water").unwrap()
                })
            })
            .collect();

        let records: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for record in &records[1..] {
            assert!(Arc::ptr_eq(&records[0], record));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn waiters_survive_a_failing_flight() {
        let client = ScriptedLookup::with_delay("H2O", Duration::from_millis(50));
        let fail = client.fail_flag();
        let cache = Arc::new(MoleculeCache::new(client));
        fail.store(true, Ordering::SeqCst);

        let threads = 4;
        let barrier = Arc::new(Barrier::new(threads));
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    cache.resolve("water")
                })
            })
            .collect();

        // Every caller comes back with an answer; with the script failing
        // throughout, every answer is an error and nothing is cached.
        for handle in handles {
            assert!(handle.join().unwrap().is_err());
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn distinct_names_resolve_independently() {
        let cache = MoleculeCache::new(ScriptedLookup::serving("H2O"));
        let water = cache.resolve("water").unwrap();
        let aqua = cache.resolve("aqua").unwrap();
        assert!(!Arc::ptr_eq(&water, &aqua));
        assert_eq!(cache.len(), 2);
    }
}
