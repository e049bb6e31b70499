// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The gallery is a plain text file that frames are appended to, each
//! stamped with the time it was made and a randomly chosen name.
//! Entries are never rewritten.

use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::BrotError;

/// Default location of the gallery, relative to the working directory.
pub const DEFAULT_GALLERY: &str = "mandelbrot_gallery.txt";

const BANNER: &str = "MANDELBROT ASCII ART GALLERY";
const RULE_WIDTH: usize = 80;

const ADJECTIVES: [&str; 10] = [
    "Mystical", "Ethereal", "Cosmic", "Infinite", "Swirling",
    "Fractal", "Chaotic", "Beautiful", "Complex", "Mathematical",
];

const NOUNS: [&str; 10] = [
    "Spiral", "Vortex", "Pattern", "Dream", "Universe",
    "Landscape", "Vision", "Gateway", "Portal", "Dimension",
];

const DESCRIPTORS: [&str; 10] = [
    "dancing through infinite complexity",
    "revealing hidden mathematical beauty",
    "emerging from chaos",
    "spiraling into eternity",
    "whispering secrets of infinity",
    "mapping the edge of existence",
    "painting mathematics with ASCII",
    "bridging reality and abstraction",
    "showing the art within algorithms",
    "exploring the fractal frontier",
];

/// Decorative metadata for one gallery entry.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtMetadata {
    /// "Adjective Noun"
    pub name: String,
    /// A short descriptive phrase.
    pub description: String,
}

// The word lists are non-empty constants.
fn pick<R: Rng + ?Sized>(words: &[&'static str], rng: &mut R) -> &'static str {
    words.choose(rng).cloned().unwrap_or(words[0])
}

/// Picks a name and a description for a piece with the given source
/// of randomness.
pub fn art_metadata_with<R: Rng + ?Sized>(rng: &mut R) -> ArtMetadata {
    let adjective = pick(&ADJECTIVES, rng);
    let noun = pick(&NOUNS, rng);
    let description = pick(&DESCRIPTORS, rng);
    ArtMetadata {
        name: format!("{} {}", adjective, noun),
        description: description.to_string(),
    }
}

/// Picks a name and a description using the thread-local generator.
pub fn art_metadata() -> ArtMetadata {
    art_metadata_with(&mut rand::thread_rng())
}

/// An append-only gallery file.
#[derive(Clone, Debug)]
pub struct Gallery {
    path: PathBuf,
}

impl Gallery {
    /// A gallery stored at `path`.  Nothing is touched on disk until
    /// the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Gallery {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Where the gallery lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry.  The file is created, with its banner, if it
    /// does not exist yet.
    pub fn append(&self, content: &str, title: &str) -> Result<(), BrotError> {
        let created = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if created {
            write!(file, "{}\n{}\n\n", BANNER, "=".repeat(RULE_WIDTH))?;
        }

        let metadata = art_metadata();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(
            file,
            "\n{}\nGenerated: {}\nName: {}\nDescription: {}\nType: {}\n\n{}\n\n",
            "-".repeat(RULE_WIDTH),
            timestamp,
            metadata.name,
            metadata.description,
            title,
            content
        )?;
        file.flush()?;
        debug!("appended '{}' ({}) to {}", title, metadata.name, self.path.display());
        Ok(())
    }

    /// The whole gallery, or `None` if nothing was ever appended.
    pub fn read(&self) -> Result<Option<String>, BrotError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn metadata_comes_from_the_word_lists() {
        for _ in 0..50 {
            let m = art_metadata();
            let mut words = m.name.splitn(2, ' ');
            assert!(ADJECTIVES.contains(&words.next().unwrap()));
            assert!(NOUNS.contains(&words.next().unwrap()));
            assert!(DESCRIPTORS.contains(&m.description.as_str()));
        }
    }

    #[test]
    fn metadata_follows_the_generator() {
        let mut rng = StepRng::new(0, 0);
        let m = art_metadata_with(&mut rng);
        assert_eq!(m.name, "Mystical Spiral");
        assert_eq!(m.description, "dancing through infinite complexity");
    }

    #[test]
    fn missing_gallery_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = Gallery::new(dir.path().join("nothing.txt"));
        assert!(gallery.read().unwrap().is_none());
    }
}
