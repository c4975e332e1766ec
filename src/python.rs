//! Python bindings via PyO3.
//!
//! The catalog is parsed once by [`init_catalog`] and shared by every
//! `StemLifeGame` created afterwards. Results cross the boundary as plain
//! Python dicts.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use serde::Serialize;

use crate::config::{Catalog, DEFAULT_MAX_AGING_STEPS};
use crate::error::StemLifeError;
use crate::property::AccountId;
use crate::recommendation::{classify, StemProfile};
use crate::simulator::{Ack, GameEngine};
use crate::store::InMemoryStore;

/// Global cached catalog
static CACHED_CATALOG: OnceCell<RwLock<Arc<Catalog>>> = OnceCell::new();

fn cached_catalog() -> PyResult<Arc<Catalog>> {
    CACHED_CATALOG
        .get()
        .map(|lock| lock.read().clone())
        .ok_or_else(|| PyRuntimeError::new_err("Catalog not initialized. Call init_catalog() first."))
}

/// Hand a serializable value to Python as native objects
fn to_python<T: Serialize>(py: Python<'_>, value: &T) -> PyResult<Py<PyAny>> {
    let text = serde_json::to_string(value).map_err(StemLifeError::from)?;
    let json = PyModule::import(py, "json")?;
    Ok(json.call_method1("loads", (text,))?.unbind())
}

/// Load and cache the event catalog
///
/// `None` uses the catalog bundled with the library. Calling this again
/// replaces the catalog for games created afterwards.
#[pyfunction]
#[pyo3(signature = (json=None))]
fn init_catalog(json: Option<&str>) -> PyResult<usize> {
    let catalog = match json {
        Some(text) => Catalog::from_json(text)?,
        None => Catalog::bundled()?,
    };
    let events = catalog.len();
    let catalog = Arc::new(catalog);

    if let Some(existing) = CACHED_CATALOG.get() {
        *existing.write() = catalog;
    } else if let Err(lock) = CACHED_CATALOG.set(RwLock::new(catalog)) {
        // Lost an initialization race; the newest catalog still wins
        if let Some(existing) = CACHED_CATALOG.get() {
            *existing.write() = lock.into_inner();
        }
    }

    Ok(events)
}

#[pyfunction]
fn is_catalog_initialized() -> bool {
    CACHED_CATALOG.get().is_some()
}

/// Recommend a field from a dict of stats; missing stats count as 0
#[pyfunction]
fn recommend(stats: HashMap<String, i32>) -> String {
    let stat = |key: &str| stats.get(key).copied().unwrap_or(0);
    let profile = StemProfile {
        logic: stat("logic"),
        creativity: stat("creativity"),
        intelligence: stat("intelligence"),
        science_interest: stat("science_interest"),
        technology_interest: stat("technology_interest"),
        engineering_interest: stat("engineering_interest"),
        math_interest: stat("math_interest"),
    };
    classify(&profile).label().to_string()
}

/// A game with its own in-memory player store
#[pyclass]
pub struct StemLifeGame {
    engine: GameEngine<InMemoryStore>,
}

#[pymethods]
impl StemLifeGame {
    #[new]
    #[pyo3(signature = (max_aging_steps=DEFAULT_MAX_AGING_STEPS))]
    fn new(max_aging_steps: u32) -> PyResult<Self> {
        let engine = GameEngine::new(cached_catalog()?, InMemoryStore::new())
            .with_max_aging_steps(max_aging_steps);
        Ok(Self { engine })
    }

    /// Create the character for an account and return its player id
    fn create_character(&self, account: AccountId, name: &str) -> PyResult<u64> {
        Ok(self.engine.create_character(account, name)?)
    }

    fn current_event(&self, py: Python<'_>, account: AccountId) -> PyResult<Py<PyAny>> {
        let id = self.engine.player_for_account(account)?;
        let offered = self.engine.current_event(id)?;
        to_python(py, &offered)
    }

    fn make_choice(
        &self,
        py: Python<'_>,
        account: AccountId,
        choice_index: i64,
    ) -> PyResult<Py<PyAny>> {
        let id = self.engine.player_for_account(account)?;
        let result = self.engine.make_choice(id, choice_index)?;
        to_python(py, &result)
    }

    fn stem_recommendation(&self, py: Python<'_>, account: AccountId) -> PyResult<Py<PyAny>> {
        let id = self.engine.player_for_account(account)?;
        let view = self.engine.stem_recommendation(id)?;
        to_python(py, &view)
    }

    fn reset_game(&self, py: Python<'_>, account: AccountId) -> PyResult<Py<PyAny>> {
        let id = self.engine.player_for_account(account)?;
        self.engine.reset_game(id)?;
        to_python(py, &Ack::OK)
    }

    #[getter]
    fn player_count(&self) -> usize {
        self.engine.store().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "StemLifeGame(events={}, players={})",
            self.engine.catalog().len(),
            self.engine.store().len()
        )
    }
}

/// Python module definition
#[pymodule]
fn stem_life_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(is_catalog_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(recommend, m)?)?;
    m.add_class::<StemLifeGame>()?;
    Ok(())
}
