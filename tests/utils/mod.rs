use std::fs;
use std::path::{Path, PathBuf};

use person_import::ImportConfig;
use rand::prelude::*;

/// Header line used by every generated extract
pub const HEADER: &str = "CPF PRIVATE INCOMPLETO DATA_ULTIMA_COMPRA TICKET_MEDIO TICKET_ULTIMA_COMPRA LOJA_MAIS_FREQUENTE LOJA_ULTIMA_COMPRA";

/// Write a header plus `lines` into `dir` and return the file path
pub fn write_extract(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("base_teste.txt");
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    fs::write(&path, text).expect("write test extract");
    path
}

/// Default configuration pointed at `source`
#[must_use]
pub fn test_config(source: &Path) -> ImportConfig {
    ImportConfig {
        source_path: source.to_path_buf(),
        ..Default::default()
    }
}

/// Deterministic digit strings for property-style checks
pub struct DigitGen(StdRng);

impl DigitGen {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Next string of `len` ASCII digits
    pub fn digits(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(b'0' + self.0.random_range(0..10u8)))
            .collect()
    }
}
