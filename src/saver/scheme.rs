/*
scheme.rs

Copyright 2025 Hervé Quatremain

This file is part of Huntgen.

Huntgen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Huntgen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Huntgen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Export the scheme overview.
//!
//! The `scheme.json` file lists the layers, and for each card its code, its question, and the
//! codes its answers lead to.
//! Organizers use it as the answer sheet of the hunt.
//! The file is never read back.

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::generator::cards::Scheme;

/// Object to export a [`Scheme`] object.
pub struct SchemeSaver {
    /// Path to the overview file.
    save_file: PathBuf,
}

impl SchemeSaver {
    /// Create a [`SchemeSaver`] object.
    ///
    /// The provided path is the directory where the overview must be saved.
    pub fn new(output_dir: &Path) -> Self {
        let save_file: PathBuf = output_dir.join("scheme.json");
        debug!("Scheme overview file: {save_file:?}");
        Self { save_file }
    }

    /// Path to the overview file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Save the provided [`Scheme`] object.
    pub fn save_scheme(&self, scheme: &Scheme) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, scheme)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cards::QuestionRecord;
    use crate::generator::scheme::generate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_save_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let records: Vec<QuestionRecord> = (0..6)
            .map(|i| QuestionRecord::new(&format!("Q{i}"), "a", ["b", "c"]))
            .collect();
        let scheme = generate(3, &records, "soon", &mut StdRng::seed_from_u64(3)).unwrap();

        let saver = SchemeSaver::new(dir.path());
        saver.save_scheme(&scheme).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(saver.path()).unwrap()).unwrap();
        let layers = json["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 3);
        assert_eq!(layers[0].as_array().unwrap().len(), 3);
        assert_eq!(layers[2][0]["kind"], "finish");

        let first = &layers[0][0];
        assert_eq!(first["kind"], "standard");
        assert_eq!(first["content"]["question"], "Q3");
        assert_eq!(first["links"]["decoys"].as_array().unwrap().len(), 2);
        assert_eq!(first["code"].as_str().unwrap().len(), 2);
    }
}
