use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

pub mod universe;
use universe::config::GeneratorConfig;
use universe::generator::Generator;
use universe::view::{universe_json, universe_report};

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Routes `log` records to the browser console. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging(verbose: bool) {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

fn error_json(e: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

#[wasm_bindgen]
pub fn generate_universe(seed: u64, systems: usize) -> String {
    universe_json(GeneratorConfig::with_seed(seed, systems)).unwrap_or_else(error_json)
}

/// Accepts a partial JSON config; unnamed fields keep their defaults.
#[wasm_bindgen]
pub fn generate_universe_with_config(config_json: &str) -> String {
    GeneratorConfig::from_json(config_json)
        .and_then(universe_json)
        .unwrap_or_else(error_json)
}

#[wasm_bindgen]
pub fn report(seed: u64, systems: usize) -> String {
    let mut gen = Generator::new(GeneratorConfig::with_seed(seed, systems));
    match gen.generate() {
        Ok(universe) => universe_report(&universe, gen.seed()),
        Err(e) => e.to_string(),
    }
}
